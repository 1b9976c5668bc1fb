pub mod codec;
pub mod config;
pub mod links;
pub mod locations;
pub mod nato_code;
pub mod nato_csv;

pub use codec::{
    decode, decode_short, decode_with, encode, encode_batch, encode_checked, encode_with,
};
pub use config::{NatoConfig, NatoConfigBuilder};
pub use links::{MapProvider, map_url, short_code_from_share_url};
pub use locations::{LocationBook, NamedLocation};
pub use nato_code::NatoCode;
pub use nato_csv::{
    CodeSource, ConversionSummary, CsvNatoConfig, CsvToNato, GeometryFormat, csv_to_nato_csv,
};
