//! Selected-category filter and search shortcuts.
//!
//! The filter is the only knob controlling which catalog sections the page
//! shows: either everything (`All`) or exactly one named section. Free-text
//! search does not match product titles; it maps a handful of known words
//! onto category names and falls back to `All` for everything else.

use serde::{Deserialize, Serialize};

/// Fixed search-shortcut table. Submitted text is lower-cased before the
/// lookup, so `MEN` and `men` both land on the `Men` section.
const SEARCH_SHORTCUTS: &[(&str, &str)] = &[("men", "Men"), ("women", "Women"), ("kids", "Kids")];

/// The selected-category filter.
///
/// `All` is the sentinel that shows every fetched section. Selecting a
/// category never validates the name against the catalog; a name no
/// section carries simply shows nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Sentinel name for the all-sections filter, as it appears in the UI.
    pub const ALL: &'static str = "All";

    /// Select a category by name, unconditionally. The sentinel `"All"`
    /// maps back to [`CategoryFilter::All`].
    #[must_use]
    pub fn select(name: &str) -> Self {
        if name == Self::ALL {
            Self::All
        } else {
            Self::Category(name.to_string())
        }
    }

    /// Resolve a submitted search into a filter via the shortcut table.
    /// Unmatched input always falls back to `All`; there is no error case.
    #[must_use]
    pub fn from_search(text: &str) -> Self {
        let needle = text.to_lowercase();
        SEARCH_SHORTCUTS
            .iter()
            .find(|(word, _)| *word == needle)
            .map_or(Self::All, |(_, category)| {
                Self::Category((*category).to_string())
            })
    }

    /// Visibility rule for a catalog section: shown iff the filter is
    /// `All` or names this section.
    #[must_use]
    pub fn shows(&self, section_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => name == section_name,
        }
    }

    /// The name to highlight in the category controls.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::All => Self::ALL,
            Self::Category(name) => name,
        }
    }
}
