//! # nato-grid
//!
//! Turns a latitude/longitude inside a bounding box into a code of NATO phonetic words that
//! can be read out over the radio, and turns such codes back into coordinates.
//!
//! There are currently three main entry points.
//!
//! ### 1. `encode` / `decode` - Default Region
//!
//! ```
//! # fn main() -> Result<(), nato_grid::NatoGridError> {
//! let code = nato_grid::encode(52.1677, 22.2903);
//! assert_eq!(
//!     code,
//!     "November Victor Sierra Oscar X-ray Lima Golf Alpha Mike Victor Lima Delta"
//! );
//!
//! let (lat, lon) = nato_grid::decode(&code)?;
//! # assert!((lat - 52.1677).abs() < 1e-6 && (lon - 22.2903).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `NatoConfig` + `NatoCode` - Custom Regions and Typed Codes
//!
//! ```
//! use nato_grid::{BoundingBox, NatoCode, NatoConfig};
//!
//! # fn main() -> Result<(), nato_grid::NatoGridError> {
//! let config = NatoConfig::builder()
//!     .bounds(BoundingBox::new(49.8, 60.9, -8.7, 1.8)?)
//!     .code_length(8)
//!     .build()?;
//!
//! let code = NatoCode::from_lat_lon(51.5074, -0.1278, &config);
//! println!("{} ({})", code, code.short_code());
//! let polygon = code.to_polygon();
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToNato` - CSV File Conversion
//!
//! Encode latitude/longitude columns into codes:
//!
//! ```no_run
//! use nato_grid::{CsvNatoConfig, CsvToNato, GeometryFormat};
//!
//! let config = CsvNatoConfig::from_coords("Latitude", "Longitude")
//!     .with_cell_geometry(GeometryFormat::Wkt);
//!
//! "input.csv".to_nato_csv("output.csv", &config).unwrap();
//! ```
//!
//! Or decode a column of codes back into coordinates:
//!
//! ```no_run
//! use nato_grid::{CsvNatoConfig, csv_to_nato_csv};
//!
//! let config = CsvNatoConfig::from_code_column("code");
//! csv_to_nato_csv("reports.csv", "output.csv", &config).unwrap();
//! ```
//!

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    CodeSource, ConversionSummary, CsvNatoConfig, CsvToNato, GeometryFormat, LocationBook,
    MapProvider, NamedLocation, NatoCode, NatoConfig, NatoConfigBuilder, csv_to_nato_csv, decode,
    decode_short, decode_with, encode, encode_batch, encode_checked, encode_with, map_url,
    short_code_from_share_url,
};
pub use crate::core::{
    BoundingBox, DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, NATO_ALPHABET, POLAND_EXTENTS,
    PhoneticAlphabet, RADIX, cell_size, coord_to_digits, digits_to_coord, digits_to_fraction, next_digit,
};
pub use util::{Coordinate, NatoGridError};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{Rect, coord, point};

    #[test]
    fn test_end_to_end_workflow() -> Result<(), NatoGridError> {
        let config = NatoConfig::default();
        let code = encode_with(52.1677, 22.2903, &config);
        assert_eq!(code.split(' ').count(), config.code_length());

        let typed = NatoCode::parse(&code, &config)?;
        let (lat, lon) = decode_with(&code, &config)?;
        assert_eq!((lat, lon), (typed.latitude(), typed.longitude()));

        let short = NatoCode::parse(&typed.short_code(), &config)?;
        assert_eq!(short, typed);

        let url = typed.share_url("https://example.org/");
        let from_link = short_code_from_share_url(&url).map(|c| NatoCode::parse(c, &config));
        assert_eq!(from_link, Some(Ok(typed)));
        Ok(())
    }

    #[test]
    fn test_using_geo_types_macros() -> Result<(), NatoGridError> {
        let pt = point! { x: 19.9450, y: 50.0647 };
        let config = NatoConfig::default();
        let code = NatoCode::from_wgs84(&pt, &config);
        assert!(code.cell.min().x <= 19.9450 && code.cell.max().x > 19.9450);

        let rect = Rect::new(coord! { x: 14.0, y: 49.0 }, coord! { x: 24.0, y: 55.0 });
        let bounds = BoundingBox::from_rect(&rect)?;
        assert_eq!(bounds, BoundingBox::POLAND);
        Ok(())
    }

    #[test]
    fn test_default_region_constants() {
        assert_eq!(NATO_ALPHABET.len(), RADIX);
        assert_eq!(DEFAULT_CODE_LENGTH, 12);
        assert_eq!(POLAND_EXTENTS, [49.0, 55.0, 14.0, 24.0]);
    }

    #[test]
    fn test_custom_alphabet_workflow() -> Result<(), NatoGridError> {
        let words: Vec<String> = NATO_ALPHABET.iter().map(|w| w.to_uppercase()).collect();
        let config = NatoConfig::builder()
            .alphabet(PhoneticAlphabet::new(words)?)
            .code_length(4)
            .build()?;

        let code = encode_with(52.1677, 22.2903, &config);
        assert_eq!(code, "NOVEMBER VICTOR SIERRA OSCAR");

        let (lat, lon) = decode_with("november victor sierra oscar", &config)?;
        assert!((lat - 52.1677).abs() < 0.01);
        assert!((lon - 22.2903).abs() < 0.02);
        Ok(())
    }

    #[test]
    fn test_low_level_digits_match_codes() {
        let config = NatoConfig::default();
        let digits = coord_to_digits(52.1677, 22.2903, config.bounds(), config.code_length());
        let words: Vec<&str> = digits.iter().map(|&d| config.alphabet().word(d)).collect();
        assert_eq!(words.join(" "), encode(52.1677, 22.2903));

        let (lat, lon) = digits_to_coord(&digits, config.bounds());
        let (size_lat, size_lon) = cell_size(config.bounds(), digits.len());
        assert!(52.1677 - lat < size_lat);
        assert!(22.2903 - lon < size_lon);
        assert!((digits_to_fraction([13]) - 0.5).abs() < 1e-15);

        let mut frac = 0.0;
        assert_eq!(next_digit(&mut frac), 0);
    }
}
