//! Reverse-geocoded placemark

use serde::{Deserialize, Serialize};

/// Name shown when a placemark has no usable parts
pub const CURRENT_LOCATION: &str = "Current location";

/// Human-readable parts of a reverse-geocoded coordinate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placemark {
    /// City, town or village
    pub locality: Option<String>,
    /// State or region
    pub administrative_area: Option<String>,
    /// Country name
    pub country: Option<String>,
}

impl Placemark {
    /// Join the non-empty parts with `", "`, or fall back to [`CURRENT_LOCATION`]
    #[must_use]
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [&self.locality, &self.administrative_area, &self.country]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            CURRENT_LOCATION.to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_parts() {
        let p = Placemark {
            locality: Some("Mumbai".to_string()),
            administrative_area: Some("Maharashtra".to_string()),
            country: Some("India".to_string()),
        };
        assert_eq!(p.display_name(), "Mumbai, Maharashtra, India");
    }

    #[test]
    fn skips_empty_parts() {
        let p = Placemark {
            locality: Some(String::new()),
            administrative_area: None,
            country: Some("Germany".to_string()),
        };
        assert_eq!(p.display_name(), "Germany");
    }

    #[test]
    fn empty_falls_back() {
        assert_eq!(Placemark::default().display_name(), "Current location");
    }
}
