//! Nerd Font glyphs for wttr.in conditions.

const SUNNY: &str = "󰖙";
const PARTLY_CLOUDY: &str = "󰖕";
const CLOUDY: &str = "󰖐";
const FOG: &str = "󰖑";
const RAIN: &str = "󰖗";
const HEAVY_RAIN: &str = "󰖖";
const SNOW: &str = "󰖘";
const THUNDER: &str = "󰖓";
const CLEAR_NIGHT: &str = "󰖔";
const PARTLY_CLOUDY_NIGHT: &str = "󰼱";

/// Glyph used when neither the text nor the code is known.
pub const DEFAULT_ICON: &str = CLOUDY;

/// Looks up a condition label with spaces and hyphens already removed. Case-sensitive.
fn icon_for_condition(condition: &str) -> Option<&'static str> {
    let icon = match condition {
        "Clear" | "Sunny" => SUNNY,
        "PartlyCloudy" => PARTLY_CLOUDY,
        "Cloudy" | "Overcast" => CLOUDY,
        "Mist" | "Fog" => FOG,
        "LightRain" | "Rain" | "Drizzle" | "LightShowers" => RAIN,
        "HeavyRain" | "HeavyShowers" => HEAVY_RAIN,
        "LightSnow" | "HeavySnow" | "Snow" | "Sleet" => SNOW,
        "Thunderstorm" | "ThunderyShowers" | "ThunderySnow" => THUNDER,
        "ClearNight" => CLEAR_NIGHT,
        "PartlyCloudyNight" => PARTLY_CLOUDY_NIGHT,
        _ => return None,
    };
    Some(icon)
}

/// Looks up a wttr.in weather code; codes are more stable than the text.
fn icon_for_code(code: &str) -> Option<&'static str> {
    let icon = match code {
        "113" => SUNNY,
        "116" => PARTLY_CLOUDY,
        "119" | "122" => CLOUDY,
        "143" | "248" | "260" => FOG,
        "176" | "263" | "266" | "293" | "296" | "299" | "302" | "353" => RAIN,
        "305" | "308" | "356" | "359" => HEAVY_RAIN,
        "179" | "182" | "185" | "227" | "230" | "281" | "284" | "311" | "314" | "317" | "320"
        | "323" | "326" | "329" | "332" | "335" | "338" | "350" | "362" | "365" | "368"
        | "371" | "374" | "377" => SNOW,
        "200" | "386" | "389" | "392" | "395" => THUNDER,
        _ => return None,
    };
    Some(icon)
}

/// Resolves the glyph for a condition: the text table first, then the code table,
/// then [`DEFAULT_ICON`].
pub fn resolve(condition: &str, code: &str) -> &'static str {
    let normalized: String = condition
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();

    icon_for_condition(&normalized)
        .or_else(|| icon_for_code(code))
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_match_wins_over_code() {
        assert_eq!(resolve("Sunny", "395"), SUNNY);
        assert_eq!(resolve("Heavy Rain", "113"), HEAVY_RAIN);
        assert_eq!(resolve("Thundery-Showers", ""), THUNDER);
        assert_eq!(resolve("Partly Cloudy Night", "116"), PARTLY_CLOUDY_NIGHT);
    }

    #[test]
    fn text_lookup_is_case_sensitive_and_falls_back_to_code() {
        // "Partlycloudy" is not in the text table
        assert_eq!(resolve("Partly cloudy", "116"), PARTLY_CLOUDY);
        assert_eq!(resolve("Patchy rain possible", "176"), RAIN);
        assert_eq!(resolve("Moderate or heavy rain shower", "356"), HEAVY_RAIN);
        assert_eq!(resolve("", "227"), SNOW);
        assert_eq!(resolve("Freezing fog", "260"), FOG);
    }

    #[test]
    fn unknown_text_and_code_give_default() {
        assert_eq!(resolve("Volcanic ash", "999"), DEFAULT_ICON);
        assert_eq!(resolve("", ""), DEFAULT_ICON);
    }

    #[test]
    fn every_table_entry_resolves() {
        let texts = [
            ("Clear", SUNNY),
            ("Sunny", SUNNY),
            ("Partly Cloudy", PARTLY_CLOUDY),
            ("Cloudy", CLOUDY),
            ("Overcast", CLOUDY),
            ("Mist", FOG),
            ("Fog", FOG),
            ("Light Rain", RAIN),
            ("Heavy Rain", HEAVY_RAIN),
            ("Rain", RAIN),
            ("Light Snow", SNOW),
            ("Heavy Snow", SNOW),
            ("Snow", SNOW),
            ("Thunderstorm", THUNDER),
            ("Thundery Showers", THUNDER),
            ("Thundery Snow", THUNDER),
            ("Drizzle", RAIN),
            ("Light Showers", RAIN),
            ("Heavy Showers", HEAVY_RAIN),
            ("Sleet", SNOW),
            ("Clear Night", CLEAR_NIGHT),
            ("Partly Cloudy Night", PARTLY_CLOUDY_NIGHT),
        ];
        for (text, icon) in texts {
            assert_eq!(resolve(text, "000"), icon, "condition {text:?}");
        }
    }
}
