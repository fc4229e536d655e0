use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LangError {
    #[error("unsupported locale `{0}`: expected `ar` or `en`")]
    Unsupported(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

pub const ARA: Lang = Lang {
    code: "ar",
    name: "Arabic",
};
pub const ENG: Lang = Lang {
    code: "en",
    name: "English",
};

/// Every table is keyed in Arabic, so Arabic is the passthrough default.
pub const DEFAULT_LANG: Lang = ARA;

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// True for the language the tables are keyed in.
    #[inline(always)]
    pub fn is_source(&self) -> bool {
        *self == ARA
    }

    /// Accepts two- and three-letter codes, case-insensitive.
    pub fn from_code(code: &str) -> Option<Lang> {
        let lower = code.to_ascii_lowercase();
        match lower.as_str() {
            "ar" | "ara" => Some(ARA),
            "en" | "eng" => Some(ENG),
            _ => None,
        }
    }
}

impl Default for Lang {
    #[inline(always)]
    fn default() -> Self {
        DEFAULT_LANG
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Lang {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| LangError::Unsupported(s.to_owned()))
    }
}
