use std::fmt;

/// Styling class for the bar module, derived from the condition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Rain,
    Snow,
    Clear,
    Cloud,
    Thunder,
    Fog,
    Normal,
}

// Evaluated top to bottom, first hit wins.
const RULES: &[(&[&str], Category)] = &[
    (&["rain"], Category::Rain),
    (&["snow"], Category::Snow),
    (&["clear", "sunny"], Category::Clear),
    (&["cloud"], Category::Cloud),
    (&["thunder"], Category::Thunder),
    (&["fog", "mist"], Category::Fog),
];

impl Category {
    /// Classifies a condition label by case-insensitive keyword match.
    pub fn classify(condition: &str) -> Self {
        let condition = condition.to_lowercase();
        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| condition.contains(*k)))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Normal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Rain => "rain",
            Category::Snow => "snow",
            Category::Clear => "clear",
            Category::Cloud => "cloud",
            Category::Thunder => "thunder",
            Category::Fog => "fog",
            Category::Normal => "normal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
