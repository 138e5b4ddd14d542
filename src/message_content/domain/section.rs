//! Selection of the sections (input, output) a step renders.

use serde::{Deserialize, Serialize};

/// One renderable section of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSection {
    /// The step input text.
    Input,
    /// The step output text and its inlined elements.
    Output,
}

/// A membership set over [`ContentSection`].
///
/// Order and duplicates carry no meaning, so two selectors are equal when
/// they select the same sections. The default selects both.
///
/// # Examples
///
/// ```
/// use chatview::message_content::domain::{ContentSection, SectionSelector};
///
/// let selector: SectionSelector = [ContentSection::Output, ContentSection::Input]
///     .into_iter()
///     .collect();
/// assert_eq!(selector, SectionSelector::default());
/// assert!(!SectionSelector::only(ContentSection::Output).contains(ContentSection::Input));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<ContentSection>", into = "Vec<ContentSection>")]
pub struct SectionSelector {
    input: bool,
    output: bool,
}

impl SectionSelector {
    /// Selects both input and output.
    pub const ALL: Self = Self {
        input: true,
        output: true,
    };

    /// Selects nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            input: false,
            output: false,
        }
    }

    /// Selects a single section.
    #[must_use]
    pub const fn only(section: ContentSection) -> Self {
        Self::none().with(section)
    }

    /// Returns a copy with `section` added.
    #[must_use]
    pub const fn with(self, section: ContentSection) -> Self {
        match section {
            ContentSection::Input => Self {
                input: true,
                output: self.output,
            },
            ContentSection::Output => Self {
                input: self.input,
                output: true,
            },
        }
    }

    /// Returns `true` if `section` is selected.
    #[must_use]
    pub const fn contains(self, section: ContentSection) -> bool {
        match section {
            ContentSection::Input => self.input,
            ContentSection::Output => self.output,
        }
    }

    /// Returns `true` if no section is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.input && !self.output
    }
}

impl Default for SectionSelector {
    fn default() -> Self {
        Self::ALL
    }
}

impl FromIterator<ContentSection> for SectionSelector {
    fn from_iter<I: IntoIterator<Item = ContentSection>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), Self::with)
    }
}

impl From<Vec<ContentSection>> for SectionSelector {
    fn from(sections: Vec<ContentSection>) -> Self {
        sections.into_iter().collect()
    }
}

impl From<SectionSelector> for Vec<ContentSection> {
    fn from(selector: SectionSelector) -> Self {
        [ContentSection::Input, ContentSection::Output]
            .into_iter()
            .filter(|section| selector.contains(*section))
            .collect()
    }
}
