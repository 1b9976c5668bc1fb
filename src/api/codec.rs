use crate::api::config::NatoConfig;
use crate::api::nato_code::NatoCode;
use crate::util::coord::Coordinate;
use crate::util::error::NatoGridError;
use rayon::prelude::*;

/// Encodes a coordinate with the default configuration (Poland, NATO alphabet, 12 words).
///
/// # Example
/// ```
/// let code = nato_grid::encode(52.1677, 22.2903);
/// assert!(code.starts_with("November Victor Sierra Oscar X-ray Lima Golf"));
/// ```
pub fn encode(latitude: f64, longitude: f64) -> String {
    encode_with(latitude, longitude, NatoConfig::shared_default())
}

/// Encodes a coordinate as space-separated words. Never fails; out-of-range input clamps.
pub fn encode_with(latitude: f64, longitude: f64, config: &NatoConfig) -> String {
    NatoCode::from_lat_lon(latitude, longitude, config).to_string()
}

/// Encodes a coordinate, failing if it lies outside the configured bounding box.
pub fn encode_checked(
    latitude: f64,
    longitude: f64,
    config: &NatoConfig,
) -> Result<String, NatoGridError> {
    NatoCode::from_lat_lon_checked(latitude, longitude, config).map(|code| code.to_string())
}

/// Decodes a word code with the default configuration into `(latitude, longitude)`.
///
/// The result is the south-west corner of the cell named by the code.
///
/// # Example
/// ```
/// # fn main() -> Result<(), nato_grid::NatoGridError> {
/// let code = nato_grid::encode(52.1677, 22.2903);
/// let (lat, lon) = nato_grid::decode(&code)?;
/// assert!((lat - 52.1677).abs() < 1e-6);
/// assert!((lon - 22.2903).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
pub fn decode(code: &str) -> Result<(f64, f64), NatoGridError> {
    decode_with(code, NatoConfig::shared_default())
}

/// Decodes a word code into `(latitude, longitude)`.
pub fn decode_with(code: &str, config: &NatoConfig) -> Result<(f64, f64), NatoGridError> {
    let code = NatoCode::from_words(code, config)?;
    Ok((code.latitude(), code.longitude()))
}

/// Decodes a short letter code (`NVSOXLGAMVLD`) into `(latitude, longitude)`.
pub fn decode_short(code: &str, config: &NatoConfig) -> Result<(f64, f64), NatoGridError> {
    let code = NatoCode::from_short_code(code, config)?;
    Ok((code.latitude(), code.longitude()))
}

/// Encodes many WGS84 coordinates (x = longitude, y = latitude) in parallel.
///
/// Output order matches input order.
pub fn encode_batch<C>(coords: &[C], config: &NatoConfig) -> Vec<NatoCode>
where
    C: Coordinate + Sync,
{
    tracing::debug!(count = coords.len(), "encoding batch");
    coords
        .par_iter()
        .map(|c| NatoCode::from_wgs84(c, config))
        .collect()
}
