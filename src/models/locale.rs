use std::fmt;
use thiserror::Error;

/// Display language for labels and formatted durations
///
/// `ZhCn` is the default and reproduces the dashboard's original output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    ZhCn,
    En,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown locale '{0}'. Supported locales: zh-CN, en")]
pub struct LocaleError(pub String);

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::ZhCn => "zh-CN",
            Locale::En => "en",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "zh_cn" => Some(Locale::ZhCn),
            "en" | "en-us" | "en_us" => Some(Locale::En),
            _ => None,
        }
    }

    /// Parse a locale, reporting the rejected input on failure
    pub fn parse(s: &str) -> Result<Self, LocaleError> {
        Self::from_str(s).ok_or_else(|| LocaleError(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_conversion() {
        assert_eq!(Locale::from_str("zh-CN"), Some(Locale::ZhCn));
        assert_eq!(Locale::from_str("ZH_cn"), Some(Locale::ZhCn));
        assert_eq!(Locale::from_str("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_str(" en "), Some(Locale::En));
        assert_eq!(Locale::from_str("fr"), None);
        assert_eq!(Locale::default(), Locale::ZhCn);
    }

    #[test]
    fn test_locale_parse_error() {
        let err = Locale::parse("klingon").unwrap_err();
        assert_eq!(err, LocaleError("klingon".to_string()));
        assert!(err.to_string().contains("klingon"));
    }
}
