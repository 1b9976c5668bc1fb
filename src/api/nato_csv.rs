use crate::api::config::NatoConfig;
use crate::api::nato_code::NatoCode;
use crate::util::error::NatoGridError;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// Resolved column positions for the configured source
enum SourceIndices {
    Coordinates { lat_idx: usize, lon_idx: usize },
    Code(usize),
}

/// Output format for cell geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

/// Which columns a CSV row is converted from.
#[derive(Debug, Clone)]
pub enum CodeSource {
    /// Separate latitude and longitude columns, encoded into codes
    CoordinateColumns {
        lat_column: String,
        lon_column: String,
    },
    /// A column holding codes (words or short letters), decoded into coordinates
    CodeColumn(String),
}

/// Configuration for CSV conversion.
#[derive(Debug, Clone)]
pub struct CsvNatoConfig {
    pub source: CodeSource,
    pub exclude_columns: Vec<String>,
    pub nato: NatoConfig,
    pub include_cell_geometry: Option<GeometryFormat>,
    pub skip_out_of_bounds: bool,
}

impl CsvNatoConfig {
    /// Create config for encoding latitude/longitude columns.
    ///
    /// # Example
    /// ```
    /// use nato_grid::CsvNatoConfig;
    ///
    /// let config = CsvNatoConfig::from_coords("Latitude", "Longitude");
    /// ```
    pub fn from_coords(lat_column: impl Into<String>, lon_column: impl Into<String>) -> Self {
        Self::with_source(CodeSource::CoordinateColumns {
            lat_column: lat_column.into(),
            lon_column: lon_column.into(),
        })
    }

    /// Create config for decoding a code column.
    ///
    /// # Example
    /// ```
    /// use nato_grid::{CsvNatoConfig, GeometryFormat};
    ///
    /// let config = CsvNatoConfig::from_code_column("code")
    ///     .with_cell_geometry(GeometryFormat::Wkt);
    /// ```
    pub fn from_code_column(code_column: impl Into<String>) -> Self {
        Self::with_source(CodeSource::CodeColumn(code_column.into()))
    }

    fn with_source(source: CodeSource) -> Self {
        Self {
            source,
            exclude_columns: Vec::new(),
            nato: NatoConfig::default(),
            include_cell_geometry: None,
            skip_out_of_bounds: false,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Use a non-default region, alphabet or code length.
    pub fn nato_config(mut self, nato: NatoConfig) -> Self {
        self.nato = nato;
        self
    }

    /// Include the covered cell polygon in output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }

    /// Drop rows outside the bounding box instead of clamping them.
    pub fn skip_out_of_bounds(mut self, skip: bool) -> Self {
        self.skip_out_of_bounds = skip;
        self
    }
}

pub trait CsvToNato {
    fn to_nato_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvNatoConfig,
    ) -> Result<ConversionSummary, NatoGridError>;
}

impl<P: AsRef<Path>> CsvToNato for P {
    fn to_nato_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvNatoConfig,
    ) -> Result<ConversionSummary, NatoGridError> {
        csv_to_nato_csv(self, output_path, config)
    }
}

/// Row counts from a finished conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub written: usize,
    pub skipped: usize,
}

fn polygon_to_wkt(polygon: &geo_types::Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &geo_types::Polygon<f64>) -> String {
    let geom = geojson::Geometry::from(polygon);
    geom.to_string()
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, NatoGridError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| NatoGridError::CsvError(format!("Column '{}' not found", name)))
}

fn field<'r>(
    record: &'r csv::StringRecord,
    idx: usize,
    name: &str,
) -> Result<&'r str, NatoGridError> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| NatoGridError::CsvError(format!("Missing {} column at index {}", name, idx)))
}

fn parse_degrees(value: &str, name: &str) -> Result<f64, NatoGridError> {
    value
        .parse()
        .map_err(|_| NatoGridError::CsvError(format!("Invalid {}: '{}'", name, value)))
}

/// Converts a CSV file in either direction: coordinates to codes, or codes to coordinates.
///
/// Streams output to keep memory flat for large files.
///
/// # Example encoding coordinate columns
///
/// ```no_run
/// use nato_grid::{csv_to_nato_csv, CsvNatoConfig, GeometryFormat};
///
/// let config = CsvNatoConfig::from_coords("Latitude", "Longitude")
///     .with_cell_geometry(GeometryFormat::GeoJson)
///     .skip_out_of_bounds(true);
///
/// csv_to_nato_csv("stations.csv", "stations_coded.csv", &config).unwrap();
/// ```
///
/// # Example decoding a code column
///
/// ```no_run
/// use nato_grid::{csv_to_nato_csv, CsvNatoConfig};
///
/// let config = CsvNatoConfig::from_code_column("code");
/// csv_to_nato_csv("reports.csv", "reports_located.csv", &config).unwrap();
/// ```
pub fn csv_to_nato_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvNatoConfig,
) -> Result<ConversionSummary, NatoGridError> {
    let csv_path = csv_path.as_ref();
    let file = File::open(csv_path).map_err(|e| NatoGridError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| NatoGridError::CsvError(e.to_string()))?
        .clone();

    let (source_indices, mut exclude_indices) = match &config.source {
        CodeSource::CoordinateColumns {
            lat_column,
            lon_column,
        } => {
            let lat_idx = column_index(&headers, lat_column)?;
            let lon_idx = column_index(&headers, lon_column)?;
            let exclude = HashSet::from([lat_idx, lon_idx]);
            (SourceIndices::Coordinates { lat_idx, lon_idx }, exclude)
        }
        CodeSource::CodeColumn(col) => {
            let idx = column_index(&headers, col)?;
            (SourceIndices::Code(idx), HashSet::from([idx]))
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let out_file = File::create(output_path).map_err(|e| NatoGridError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let mut header_row: Vec<&str> = match source_indices {
        SourceIndices::Coordinates { .. } => vec!["nato_code", "short_code"],
        SourceIndices::Code(_) => vec!["latitude", "longitude"],
    };
    if config.include_cell_geometry.is_some() {
        header_row.push("cell_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| NatoGridError::CsvError(e.to_string()))?;

    tracing::info!(input = %csv_path.display(), "converting CSV");
    let bounds = config.nato.bounds();
    let mut summary = ConversionSummary::default();

    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|e| NatoGridError::CsvError(e.to_string()))?;

        let (code, mut row) = match &source_indices {
            SourceIndices::Coordinates { lat_idx, lon_idx } => {
                let lat = parse_degrees(field(&record, *lat_idx, "latitude")?, "latitude")?;
                let lon = parse_degrees(field(&record, *lon_idx, "longitude")?, "longitude")?;

                if !bounds.contains(lat, lon) {
                    if config.skip_out_of_bounds {
                        tracing::warn!(line, lat, lon, "skipping row outside bounding box");
                        summary.skipped += 1;
                        continue;
                    }
                    tracing::debug!(line, lat, lon, "clamping row outside bounding box");
                }

                let code = NatoCode::from_lat_lon(lat, lon, &config.nato);
                let row = vec![code.to_string(), code.short_code()];
                (code, row)
            }
            SourceIndices::Code(idx) => {
                let code = NatoCode::parse(field(&record, *idx, "code")?, &config.nato)?;
                let row = vec![code.latitude().to_string(), code.longitude().to_string()];
                (code, row)
            }
        };

        if let Some(format) = config.include_cell_geometry {
            let polygon = code.to_polygon();
            let geom_str = match format {
                GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
            };
            row.push(geom_str);
        }

        for (i, value) in record.iter().enumerate() {
            if !exclude_indices.contains(&i) {
                row.push(value.to_string());
            }
        }
        writer
            .write_record(&row)
            .map_err(|e| NatoGridError::CsvError(e.to_string()))?;
        summary.written += 1;
    }

    writer
        .flush()
        .map_err(|e| NatoGridError::CsvError(e.to_string()))?;

    tracing::info!(
        written = summary.written,
        skipped = summary.skipped,
        "CSV conversion finished"
    );
    Ok(summary)
}
