use serde::{Deserialize, Serialize};
use std::fmt;

/// Subway line a car belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    #[serde(rename = "L4")]
    Line4,
    #[serde(rename = "L5")]
    Line5,
}

impl Line {
    pub const ALL: [Line; 2] = [Line::Line4, Line::Line5];

    pub fn code(&self) -> &'static str {
        match self {
            Line::Line4 => "L4",
            Line::Line5 => "L5",
        }
    }

    /// Label used on the maintenance sheets ("4 号线").
    pub fn label(&self) -> &'static str {
        match self {
            Line::Line4 => "4 号线",
            Line::Line5 => "5 号线",
        }
    }

    /// Convert user input (`4`, `L4`, `line4`, `4 号线`) → enum
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized: String = code
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        match normalized.as_str() {
            "4" | "l4" | "line4" | "4号线" => Some(Line::Line4),
            "5" | "l5" | "line5" | "5号线" => Some(Line::Line5),
            _ => None,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(Line::from_code("4"), Some(Line::Line4));
        assert_eq!(Line::from_code("L5"), Some(Line::Line5));
        assert_eq!(Line::from_code(" line4 "), Some(Line::Line4));
        assert_eq!(Line::from_code("5 号线"), Some(Line::Line5));
        assert_eq!(Line::from_code("6"), None);
    }

    #[test]
    fn code_round_trips_through_parser() {
        for line in Line::ALL {
            assert_eq!(Line::from_code(line.code()), Some(line));
            assert_eq!(Line::from_code(line.label()), Some(line));
        }
    }
}
