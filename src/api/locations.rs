use crate::api::config::NatoConfig;
use crate::api::nato_code::NatoCode;
use crate::util::error::NatoGridError;
use geo::{Distance, Haversine};
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named place stored by its code, in word or short-letter form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLocation {
    pub name: String,
    pub code: String,
}

/// A list of named places, e.g. loaded from a shared JSON file.
///
/// The JSON layout is an array of `{ "code": "...", "name": "..." }` objects. Codes are
/// only interpreted when a configuration is supplied, so one book can be resolved against
/// different regions.
///
/// # Example
///
/// ```
/// use nato_grid::{LocationBook, NatoConfig};
///
/// # fn main() -> Result<(), nato_grid::NatoGridError> {
/// let book = LocationBook::from_json_str(r#"[{"code": "NVSOXLGAMVLD", "name": "Siedlce"}]"#)?;
/// let config = NatoConfig::default();
/// let (location, _code, _meters) = book.nearest(52.17, 22.29, &config)?.unwrap();
/// assert_eq!(location.name, "Siedlce");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationBook {
    locations: Vec<NamedLocation>,
}

impl LocationBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, NatoGridError> {
        serde_json::from_str(json).map_err(|e| NatoGridError::ConfigParseError(e.to_string()))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, NatoGridError> {
        let path = path.as_ref();
        let json =
            std::fs::read_to_string(path).map_err(|e| NatoGridError::IoError(e.to_string()))?;
        let book = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), count = book.len(), "loaded location book");
        Ok(book)
    }

    pub fn to_json(&self) -> Result<String, NatoGridError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| NatoGridError::ConfigParseError(e.to_string()))
    }

    /// Adds a location. Entries with the same name are kept side by side.
    pub fn insert(&mut self, name: impl Into<String>, code: impl Into<String>) {
        self.locations.push(NamedLocation {
            name: name.into(),
            code: code.into(),
        });
    }

    /// First location with the given name, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&NamedLocation> {
        let name = name.to_lowercase();
        self.locations
            .iter()
            .find(|loc| loc.name.to_lowercase() == name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedLocation> {
        self.locations.iter()
    }

    /// Parses every entry's code. The first unparsable entry is returned as an error.
    pub fn resolve(
        &self,
        config: &NatoConfig,
    ) -> Result<Vec<(&NamedLocation, NatoCode)>, NatoGridError> {
        self.locations
            .iter()
            .map(|loc| NatoCode::parse(&loc.code, config).map(|code| (loc, code)))
            .collect()
    }

    /// Closest entry to a point, with its parsed code and the distance in metres to the
    /// centre of its cell. Returns `None` for an empty book.
    pub fn nearest(
        &self,
        latitude: f64,
        longitude: f64,
        config: &NatoConfig,
    ) -> Result<Option<(&NamedLocation, NatoCode, f64)>, NatoGridError> {
        let target = Point::new(longitude, latitude);
        let nearest = self
            .resolve(config)?
            .into_iter()
            .map(|(loc, code)| {
                let meters = Haversine.distance(target, code.center());
                (loc, code, meters)
            })
            .min_by(|a, b| a.2.total_cmp(&b.2));
        Ok(nearest)
    }
}

impl FromIterator<NamedLocation> for LocationBook {
    fn from_iter<I: IntoIterator<Item = NamedLocation>>(iter: I) -> Self {
        Self {
            locations: iter.into_iter().collect(),
        }
    }
}
