//! Visibility of a step's input text.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Whether a step's input is shown, and in which language it is highlighted.
///
/// On the wire the flag is either a boolean or a language string. A string
/// both shows the input and overrides its language.
///
/// # Examples
///
/// ```
/// use chatview::message_content::domain::ShowInput;
///
/// let flag: ShowInput = serde_json::from_str("\"json\"").expect("valid flag");
/// assert_eq!(flag, ShowInput::ShownWithLanguage("json".to_owned()));
/// assert_eq!(flag.language(), Some("json"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ShowInput {
    /// The input is not displayed.
    #[default]
    Hidden,
    /// The input is displayed without a language override.
    Shown,
    /// The input is displayed and prepared with the given language.
    ShownWithLanguage(String),
}

impl ShowInput {
    /// Builds a flag from a language tag. An empty tag hides the input.
    #[must_use]
    pub fn from_language(tag: impl Into<String>) -> Self {
        let language = tag.into();
        if language.is_empty() {
            Self::Hidden
        } else {
            Self::ShownWithLanguage(language)
        }
    }

    /// Returns `true` unless the input is hidden.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Returns the language override, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::ShownWithLanguage(language) => Some(language),
            Self::Hidden | Self::Shown => None,
        }
    }
}

impl From<bool> for ShowInput {
    fn from(shown: bool) -> Self {
        if shown { Self::Shown } else { Self::Hidden }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawShowInput {
    Flag(bool),
    Language(String),
}

impl<'de> Deserialize<'de> for ShowInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawShowInput>::deserialize(deserializer)?;
        Ok(match raw {
            None => Self::Hidden,
            Some(RawShowInput::Flag(shown)) => Self::from(shown),
            Some(RawShowInput::Language(tag)) => Self::from_language(tag),
        })
    }
}

impl Serialize for ShowInput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Hidden => serializer.serialize_bool(false),
            Self::Shown => serializer.serialize_bool(true),
            Self::ShownWithLanguage(language) => serializer.serialize_str(language),
        }
    }
}
