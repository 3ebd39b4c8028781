use std::{env, fmt, str::FromStr};

use crate::Stage;

/// Environment variable consulted by [`Locale::from_env`].
pub const LOCALE_ENV: &str = "JSONZH_LOCALE";

/// Language used for the stage tag prefixed to wrapped errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// `encode error` / `decode error`.
    #[default]
    English,
    /// `编码错误` / `解码错误`.
    Chinese,
}

impl Locale {
    /// Resolves the locale from `JSONZH_LOCALE`, falling back to English.
    pub fn from_env() -> Self {
        env::var(LOCALE_ENV)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Returns the fixed tag identifying `stage` in this locale.
    pub fn tag(self, stage: Stage) -> &'static str {
        match (self, stage) {
            (Locale::English, Stage::Encode) => "encode error",
            (Locale::English, Stage::Decode) => "decode error",
            (Locale::Chinese, Stage::Encode) => "编码错误",
            (Locale::Chinese, Stage::Decode) => "解码错误",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Chinese => "zh",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locale string that matched no known language.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale '{0}': expected en or zh")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en_us" | "english" => Ok(Locale::English),
            "zh" | "zh-cn" | "zh_cn" | "chinese" | "中文" => Ok(Locale::Chinese),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}
