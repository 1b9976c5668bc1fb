/// Error type for nato-grid operations.
#[derive(Debug, Clone, PartialEq)]
pub enum NatoGridError {
    /// Bounding box, code length or alphabet failed validation.
    InvalidConfiguration(String),
    /// A code word (or short-code letter) is not part of the alphabet.
    UnknownWord { position: usize, word: String },
    /// The code does not have the configured number of words.
    WrongWordCount { expected: usize, found: usize },
    /// A coordinate lies outside the configured bounding box.
    CoordinateOutOfBounds { latitude: f64, longitude: f64 },
    /// Failed to parse a JSON configuration or location book.
    ConfigParseError(String),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or writing error.
    CsvError(String),
}

impl NatoGridError {
    /// Returns true for errors caused by a malformed code rather than bad configuration.
    pub fn is_malformed_code(&self) -> bool {
        matches!(
            self,
            NatoGridError::UnknownWord { .. } | NatoGridError::WrongWordCount { .. }
        )
    }
}

impl std::fmt::Display for NatoGridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NatoGridError::InvalidConfiguration(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            NatoGridError::UnknownWord { position, word } => {
                write!(f, "Malformed code: unknown word '{}' at position {}", word, position)
            }
            NatoGridError::WrongWordCount { expected, found } => write!(
                f,
                "Malformed code: expected {} words, found {}",
                expected, found
            ),
            NatoGridError::CoordinateOutOfBounds {
                latitude,
                longitude,
            } => write!(
                f,
                "Coordinate out of bounds: ({}, {})",
                latitude, longitude
            ),
            NatoGridError::ConfigParseError(msg) => write!(f, "Config parse error: {}", msg),
            NatoGridError::IoError(msg) => write!(f, "IO error: {}", msg),
            NatoGridError::CsvError(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for NatoGridError {}
