use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// UI language. Codes are ISO 639-1 (`en`, `ar`) on the CLI and in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[value(name = "en")]
    #[serde(rename = "en")]
    English,
    #[value(name = "ar")]
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Accepts `en`/`ar` or the English language names, case-insensitively.
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "ar" | "arabic" => Some(Language::Arabic),
            _ => None,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::English => Direction::Ltr,
            Language::Arabic => Direction::Rtl,
        }
    }

    /// The other bundled language.
    pub fn toggled(self) -> Language {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }

    /// Short badge shown in the header, written in the language itself.
    pub fn badge(self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Arabic => "عربي",
        }
    }
}

/// Text and layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }

    /// +1 for left-to-right, -1 for right-to-left. The trailing edge is on
    /// the positive side of this sign.
    pub fn sign(self) -> i16 {
        match self {
            Direction::Ltr => 1,
            Direction::Rtl => -1,
        }
    }
}
