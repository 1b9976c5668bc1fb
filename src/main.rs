use clap::{Parser, Subcommand, ValueEnum};
use nato_grid::{
    CsvNatoConfig, GeometryFormat, NatoCode, NatoConfig, NatoGridError, csv_to_nato_csv,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Encode coordinates as NATO phonetic codes and back
#[derive(Parser, Debug)]
#[command(name = "nato-grid", version, about, long_about = None)]
struct Cli {
    /// JSON file overriding bounds, code length or alphabet
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a latitude/longitude pair
    Encode {
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
        #[arg(allow_hyphen_values = true)]
        longitude: f64,
        /// Print the one-letter-per-word form as well
        #[arg(long)]
        short: bool,
    },
    /// Decode a code given as words or short letters
    Decode { code: String },
    /// Add codes to a CSV with latitude/longitude columns
    CsvEncode {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value = "latitude")]
        lat_column: String,
        #[arg(long, default_value = "longitude")]
        lon_column: String,
        #[arg(long)]
        geometry: Option<GeometryArg>,
        /// Drop rows outside the bounding box instead of clamping them
        #[arg(long)]
        skip_out_of_bounds: bool,
    },
    /// Add latitude/longitude to a CSV with a code column
    CsvDecode {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value = "code")]
        code_column: String,
        #[arg(long)]
        geometry: Option<GeometryArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GeometryArg {
    Wkt,
    Geojson,
}

impl From<GeometryArg> for GeometryFormat {
    fn from(arg: GeometryArg) -> Self {
        match arg {
            GeometryArg::Wkt => GeometryFormat::Wkt,
            GeometryArg::Geojson => GeometryFormat::GeoJson,
        }
    }
}

fn main() -> Result<(), NatoGridError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => NatoConfig::from_json_file(path)?,
        None => NatoConfig::default(),
    };

    match cli.command {
        Commands::Encode {
            latitude,
            longitude,
            short,
        } => {
            if !config.bounds().contains(latitude, longitude) {
                tracing::warn!(
                    latitude,
                    longitude,
                    "point is outside the bounding box, clamping"
                );
            }
            let code = NatoCode::from_lat_lon(latitude, longitude, &config);
            println!("{}", code);
            if short {
                println!("{}", code.short_code());
            }
        }
        Commands::Decode { code } => {
            let code = NatoCode::parse(&code, &config)?;
            let center = code.center();
            println!("Corner: {}, {}", code.latitude(), code.longitude());
            println!("Center: {}, {}", center.y(), center.x());
        }
        Commands::CsvEncode {
            input,
            output,
            lat_column,
            lon_column,
            geometry,
            skip_out_of_bounds,
        } => {
            let mut csv_config = CsvNatoConfig::from_coords(lat_column, lon_column)
                .nato_config(config)
                .skip_out_of_bounds(skip_out_of_bounds);
            if let Some(format) = geometry {
                csv_config = csv_config.with_cell_geometry(format.into());
            }
            let summary = csv_to_nato_csv(&input, &output, &csv_config)?;
            println!("Wrote {} rows, skipped {}", summary.written, summary.skipped);
        }
        Commands::CsvDecode {
            input,
            output,
            code_column,
            geometry,
        } => {
            let mut csv_config = CsvNatoConfig::from_code_column(code_column).nato_config(config);
            if let Some(format) = geometry {
                csv_config = csv_config.with_cell_geometry(format.into());
            }
            let summary = csv_to_nato_csv(&input, &output, &csv_config)?;
            println!("Wrote {} rows", summary.written);
        }
    }

    Ok(())
}
