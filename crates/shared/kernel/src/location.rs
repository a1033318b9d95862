//! Dotted search locations used to select catalog entries.

use japi_domain::constants::LOCATION_SEPARATOR;

/// A parsed, comma separated list of dotted locations.
///
/// An entry location is selected when it equals one of the listed
/// locations or lies beneath it: `app.tasks` selects `app.tasks.model`
/// but not `app.tasksets`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchLocations(Vec<String>);

impl SearchLocations {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(LOCATION_SEPARATOR)
                .map(|part| part.trim().trim_end_matches('.'))
                .filter(|part| !part.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    #[must_use]
    pub fn contains(&self, location: &str) -> bool {
        self.0.iter().any(|base| {
            location
                .strip_prefix(base.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
