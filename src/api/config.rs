use crate::core::alphabet::PhoneticAlphabet;
use crate::core::bounds::{BoundingBox, RawBounds};
use crate::core::constants::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH};
use crate::core::digits::cell_size;
use crate::util::error::NatoGridError;
use geo::{Distance, Haversine};
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static DEFAULT_CONFIG: LazyLock<NatoConfig> = LazyLock::new(NatoConfig::default);

/// Everything needed to encode and decode: the region, the word list and the code length.
///
/// Configurations are immutable once built, and several can coexist (one per country,
/// say). [`NatoConfig::default`] covers Poland with the NATO alphabet and 12-word codes.
///
/// # Example
///
/// ```
/// use nato_grid::{BoundingBox, NatoConfig};
///
/// # fn main() -> Result<(), nato_grid::NatoGridError> {
/// let config = NatoConfig::builder()
///     .bounds(BoundingBox::new(49.8, 60.9, -8.7, 1.8)?)
///     .code_length(8)
///     .build()?;
/// assert_eq!(config.code_length(), 8);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile", into = "ConfigFile")]
pub struct NatoConfig {
    bounds: BoundingBox,
    alphabet: PhoneticAlphabet,
    code_length: usize,
}

/// On-disk layout of a configuration; every field falls back to the default.
///
/// Fields are kept raw so that validation happens in [`NatoConfigBuilder::build`].
#[derive(Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    bounds: Option<RawBounds>,
    #[serde(default)]
    code_length: Option<usize>,
    #[serde(default)]
    alphabet: Option<Vec<String>>,
}

impl NatoConfig {
    pub fn builder() -> NatoConfigBuilder {
        NatoConfigBuilder::new()
    }

    /// Shared default configuration, built once per process.
    pub fn shared_default() -> &'static NatoConfig {
        &DEFAULT_CONFIG
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn alphabet(&self) -> &PhoneticAlphabet {
        &self.alphabet
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Size of the cell named by a full code, in degrees `(lat, lon)`.
    pub fn cell_size_degrees(&self) -> (f64, f64) {
        cell_size(&self.bounds, self.code_length)
    }

    /// Approximate size of a full-code cell in metres `(north-south, east-west)`,
    /// measured at the centre of the bounding box.
    pub fn cell_size_meters(&self) -> (f64, f64) {
        let (d_lat, d_lon) = self.cell_size_degrees();
        let center = self.bounds.center();
        let north = Point::new(center.x(), center.y() + d_lat);
        let east = Point::new(center.x() + d_lon, center.y());
        (
            Haversine.distance(center, north),
            Haversine.distance(center, east),
        )
    }

    /// Parses a JSON configuration. Missing fields take their default values.
    ///
    /// Malformed JSON is a [`NatoGridError::ConfigParseError`]; well-formed JSON with
    /// invalid values is a [`NatoGridError::InvalidConfiguration`].
    ///
    /// ```
    /// use nato_grid::NatoConfig;
    ///
    /// # fn main() -> Result<(), nato_grid::NatoGridError> {
    /// let config = NatoConfig::from_json_str(r#"{"code_length": 6}"#)?;
    /// assert_eq!(config.code_length(), 6);
    /// assert_eq!(config.bounds().min_lat(), 49.0);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, NatoGridError> {
        let file: ConfigFile = serde_json::from_str(json)
            .map_err(|e| NatoGridError::ConfigParseError(e.to_string()))?;
        Self::try_from(file)
    }

    /// Reads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, NatoGridError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");
        let json =
            std::fs::read_to_string(path).map_err(|e| NatoGridError::IoError(e.to_string()))?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String, NatoGridError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| NatoGridError::ConfigParseError(e.to_string()))
    }
}

impl Default for NatoConfig {
    fn default() -> Self {
        Self {
            bounds: BoundingBox::POLAND,
            alphabet: PhoneticAlphabet::nato(),
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl TryFrom<ConfigFile> for NatoConfig {
    type Error = NatoGridError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let mut builder = NatoConfigBuilder::new();
        builder.bounds = file.bounds.map(BoundingBox::try_from).transpose()?;
        builder.code_length = file.code_length;
        builder.alphabet = file.alphabet.map(PhoneticAlphabet::new).transpose()?;
        builder.build()
    }
}

impl From<NatoConfig> for ConfigFile {
    fn from(config: NatoConfig) -> Self {
        Self {
            bounds: Some(config.bounds.into()),
            code_length: Some(config.code_length),
            alphabet: Some(config.alphabet.into()),
        }
    }
}

#[derive(Debug, Default)]
pub struct NatoConfigBuilder {
    bounds: Option<BoundingBox>,
    code_length: Option<usize>,
    alphabet: Option<PhoneticAlphabet>,
}

impl NatoConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Number of words per code; must be positive, even and at most [`MAX_CODE_LENGTH`].
    pub fn code_length(mut self, code_length: usize) -> Self {
        self.code_length = Some(code_length);
        self
    }

    pub fn alphabet(mut self, alphabet: PhoneticAlphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    pub fn build(self) -> Result<NatoConfig, NatoGridError> {
        let code_length = self.code_length.unwrap_or(DEFAULT_CODE_LENGTH);
        if code_length == 0 || code_length % 2 != 0 {
            return Err(NatoGridError::InvalidConfiguration(format!(
                "Code length must be a positive even number, got {}",
                code_length
            )));
        }
        if code_length > MAX_CODE_LENGTH {
            return Err(NatoGridError::InvalidConfiguration(format!(
                "Code length must be at most {}, got {}",
                MAX_CODE_LENGTH, code_length
            )));
        }

        Ok(NatoConfig {
            bounds: self.bounds.unwrap_or_default(),
            alphabet: self.alphabet.unwrap_or_default(),
            code_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = NatoConfig::default();
        assert_eq!(config.code_length(), 12);
        assert_eq!(*config.bounds(), BoundingBox::POLAND);
        assert_eq!(config.alphabet().word(0), "Alpha");
        assert_eq!(NatoConfig::shared_default(), &config);
    }

    #[test]
    fn test_builder() -> Result<(), NatoGridError> {
        let bounds = BoundingBox::new(10.0, 20.0, 30.0, 40.0)?;
        let config = NatoConfig::builder().bounds(bounds).code_length(4).build()?;

        assert_eq!(config.code_length(), 4);
        assert_eq!(config.bounds().min_lon(), 30.0);
        assert_eq!(config.alphabet().word(25), "Zulu");
        Ok(())
    }

    #[test]
    fn test_builder_rejects_bad_code_length() {
        for len in [0, 1, 7, 13, MAX_CODE_LENGTH + 2, usize::MAX - 1] {
            let result = NatoConfig::builder().code_length(len).build();
            assert!(matches!(result, Err(NatoGridError::InvalidConfiguration(_))));
        }
        assert!(NatoConfig::builder().code_length(MAX_CODE_LENGTH).build().is_ok());
    }

    #[test]
    fn test_cell_size_meters() -> Result<(), NatoGridError> {
        let config = NatoConfig::default();
        let (north_south, east_west) = config.cell_size_meters();

        // 6 degrees / 26^6 of latitude and 10 degrees / 26^6 of longitude at 52N are both ~2.2 mm
        assert!(north_south > 0.0015 && north_south < 0.003);
        assert!(east_west > 0.0015 && east_west < 0.003);

        let coarse = NatoConfig::builder().code_length(8).build()?;
        let (north_south, _) = coarse.cell_size_meters();
        assert!(north_south > 1.0 && north_south < 2.0);
        Ok(())
    }

    #[test]
    fn test_json_partial_config() -> Result<(), NatoGridError> {
        let config = NatoConfig::from_json_str(
            r#"{"bounds": {"min_lat": 49.8, "max_lat": 60.9, "min_lon": -8.7, "max_lon": 1.8}}"#,
        )?;
        assert_eq!(config.bounds().max_lat(), 60.9);
        assert_eq!(config.code_length(), 12);
        Ok(())
    }

    #[test]
    fn test_json_validation_errors() {
        let odd = NatoConfig::from_json_str(r#"{"code_length": 5}"#);
        assert!(matches!(odd, Err(NatoGridError::InvalidConfiguration(_))));

        let inverted = NatoConfig::from_json_str(
            r#"{"bounds": {"min_lat": 55.0, "max_lat": 49.0, "min_lon": 14.0, "max_lon": 24.0}}"#,
        );
        assert!(matches!(inverted, Err(NatoGridError::InvalidConfiguration(_))));

        let short_alphabet = NatoConfig::from_json_str(r#"{"alphabet": ["Alpha", "Bravo"]}"#);
        assert!(matches!(
            short_alphabet,
            Err(NatoGridError::InvalidConfiguration(_))
        ));

        let garbage = NatoConfig::from_json_str("not json");
        assert!(matches!(garbage, Err(NatoGridError::ConfigParseError(_))));

        let wrong_type = NatoConfig::from_json_str(r#"{"code_length": "twelve"}"#);
        assert!(matches!(wrong_type, Err(NatoGridError::ConfigParseError(_))));
    }

    #[test]
    fn test_json_roundtrip() -> Result<(), NatoGridError> {
        let config = NatoConfig::builder().code_length(8).build()?;
        let json = config.to_json()?;
        assert!(json.contains("\"code_length\": 8"));
        assert!(json.contains("X-ray"));

        let back = NatoConfig::from_json_str(&json)?;
        assert_eq!(back, config);
        Ok(())
    }

    #[test]
    fn test_json_file() -> Result<(), NatoGridError> {
        let dir = tempdir().map_err(|e| NatoGridError::IoError(e.to_string()))?;
        let path = dir.path().join("config.json");
        let mut file =
            std::fs::File::create(&path).map_err(|e| NatoGridError::IoError(e.to_string()))?;
        writeln!(file, r#"{{"code_length": 10}}"#)
            .map_err(|e| NatoGridError::IoError(e.to_string()))?;

        let config = NatoConfig::from_json_file(&path)?;
        assert_eq!(config.code_length(), 10);

        let missing = NatoConfig::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(missing, Err(NatoGridError::IoError(_))));
        Ok(())
    }
}
