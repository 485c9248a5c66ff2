use std::fmt;
use std::str::FromStr;

/// The two languages the page is authored in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ar,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown language code {0:?}")]
pub struct LanguageParseError(pub String);

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            Language::En => TextDirection::Ltr,
        }
    }

    /// Attribute holding this language's text, e.g. `data-lang-ar`.
    pub fn text_attribute(self) -> String {
        format!("data-lang-{}", self.code())
    }

    /// Label shown on the toggle button.
    pub fn label(self) -> String {
        self.code().to_uppercase()
    }
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(LanguageParseError(other.to_string())),
        }
    }
}

/// Persistent string key-value storage holding the language preference.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub const LANGUAGE_KEY: &str = "language";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LanguageState {
    pub current: Language,
}

impl LanguageState {
    /// Reads the stored preference; absent or unreadable values fall back to English.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let current = store
            .get(LANGUAGE_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self { current }
    }

    pub fn toggle(&mut self, store: &mut impl PreferenceStore) -> Language {
        self.current = self.current.toggled();
        store.set(LANGUAGE_KEY, self.current.code());
        self.current
    }

    pub fn direction(&self) -> TextDirection {
        self.current.direction()
    }
}

/// Text to display for an element given its per-language attributes.
/// `None` means the element keeps its current text.
pub fn localized_text(lang: Language, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup(&lang.text_attribute())
}
