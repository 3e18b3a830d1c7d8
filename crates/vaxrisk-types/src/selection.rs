//! Geographic selection.

use serde::{Deserialize, Serialize};

/// Choice meaning "aggregate across every child".
pub const ALL: &str = "All";

/// Placeholder shown for rows whose region or sub-region is missing.
pub const NOT_REPORTED: &str = "Not Reported";

/// A level of the geographic hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeoLevel {
    /// Country.
    Country,
    /// First-level subdivision.
    Region,
    /// Second-level subdivision.
    SubRegion,
}

impl GeoLevel {
    /// Returns the level as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Region => "region",
            Self::SubRegion => "sub-region",
        }
    }
}

impl std::fmt::Display for GeoLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A choice at the region or sub-region level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    /// Aggregate across all children.
    All,
    /// A specific named area. `"Not Reported"` selects rows with no value.
    Named(String),
}

impl Area {
    /// Maps a selector choice to an area, treating `"All"` as [`Area::All`].
    #[must_use]
    pub fn from_choice(choice: &str) -> Self {
        if choice == ALL {
            Self::All
        } else {
            Self::Named(choice.to_string())
        }
    }

    /// Returns the name if this is a specific area.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Named(name) => Some(name),
        }
    }

    /// Returns true if a record value belongs to this area.
    ///
    /// [`Area::All`] matches everything; the `"Not Reported"` placeholder matches
    /// a missing value.
    #[must_use]
    pub fn matches(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (Self::All, _) => true,
            (Self::Named(name), Some(value)) => name == value,
            (Self::Named(name), None) => name == NOT_REPORTED,
        }
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "{ALL}"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// The geography a computation runs for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeographicSelection {
    country: String,
    region: Option<Area>,
    sub_region: Option<Area>,
}

impl GeographicSelection {
    /// Creates a selection.
    ///
    /// A sub-region is only kept when the region is a specific area.
    #[must_use]
    pub fn new(country: impl Into<String>, region: Option<Area>, sub_region: Option<Area>) -> Self {
        let sub_region = match region {
            Some(Area::Named(_)) => sub_region,
            _ => None,
        };
        Self {
            country: country.into(),
            region,
            sub_region,
        }
    }

    /// Creates a whole-country selection.
    #[must_use]
    pub fn country(country: impl Into<String>) -> Self {
        Self::new(country, Some(Area::All), None)
    }

    /// Returns the country.
    #[must_use]
    pub fn country_name(&self) -> &str {
        &self.country
    }

    /// Returns the region choice.
    #[must_use]
    pub const fn region(&self) -> Option<&Area> {
        self.region.as_ref()
    }

    /// Returns the sub-region choice.
    #[must_use]
    pub const fn sub_region(&self) -> Option<&Area> {
        self.sub_region.as_ref()
    }

    /// Returns the specific region name, if any.
    #[must_use]
    pub fn region_name(&self) -> Option<&str> {
        self.region.as_ref().and_then(Area::name)
    }

    /// Returns the specific sub-region name, if any.
    #[must_use]
    pub fn sub_region_name(&self) -> Option<&str> {
        self.sub_region.as_ref().and_then(Area::name)
    }

    /// Returns true if a record's geography falls inside this selection.
    #[must_use]
    pub fn matches(&self, country: &str, region: Option<&str>, sub_region: Option<&str>) -> bool {
        country == self.country
            && self.region.as_ref().is_none_or(|area| area.matches(region))
            && self.sub_region.as_ref().is_none_or(|area| area.matches(sub_region))
    }

    /// Returns a label such as `"Travis, Texas, US"`, innermost level first.
    #[must_use]
    pub fn location_label(&self) -> String {
        [self.sub_region_name(), self.region_name(), Some(self.country.as_str())]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for GeographicSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.location_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_region_requires_named_region() {
        let selection = GeographicSelection::new(
            "US",
            Some(Area::All),
            Some(Area::Named("Travis".into())),
        );
        assert!(selection.sub_region().is_none());

        let selection = GeographicSelection::new("US", None, Some(Area::All));
        assert!(selection.sub_region().is_none());
    }

    #[test]
    fn test_location_label_skips_all() {
        let selection = GeographicSelection::new(
            "US",
            Some(Area::Named("Texas".into())),
            Some(Area::Named("Travis".into())),
        );
        assert_eq!(selection.location_label(), "Travis, Texas, US");

        let selection = GeographicSelection::new(
            "US",
            Some(Area::Named("Texas".into())),
            Some(Area::All),
        );
        assert_eq!(selection.location_label(), "Texas, US");
        assert_eq!(GeographicSelection::country("France").location_label(), "France");
    }

    #[test]
    fn test_not_reported_matches_missing_value() {
        let area = Area::from_choice(NOT_REPORTED);
        assert!(area.matches(None));
        assert!(!area.matches(Some("Texas")));
        assert!(Area::from_choice(ALL).matches(None));
    }

    #[test]
    fn test_selection_matches() {
        let selection = GeographicSelection::new("US", Some(Area::Named("Texas".into())), None);
        assert!(selection.matches("US", Some("Texas"), Some("Travis")));
        assert!(!selection.matches("US", Some("Ohio"), None));
        assert!(!selection.matches("Canada", Some("Texas"), None));
    }
}
