use crate::api::config::NatoConfig;
use crate::core::digits::{cell_size, coord_to_digits, digits_to_coord};
use crate::util::coord::Coordinate;
use crate::util::error::NatoGridError;
use geo_types::{Point, Polygon, Rect, coord};
use std::fmt;
use std::str::FromStr;

/// A location code made of phonetic words.
///
/// Each `NatoCode` names one rectangular cell of the configured bounding box. Words on even
/// positions refine latitude and words on odd positions refine longitude, most significant
/// first.
///
/// # Example
///
/// ```
/// use nato_grid::{NatoCode, NatoConfig};
///
/// # fn main() -> Result<(), nato_grid::NatoGridError> {
/// let config = NatoConfig::default();
/// let code = NatoCode::from_lat_lon(52.1677, 22.2903, &config);
/// println!("Code: {}", code);
/// println!("Short: {}", code.short_code());
///
/// let restored = NatoCode::parse(&code.short_code(), &config)?;
/// assert_eq!(code, restored);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NatoCode {
    /// Phonetic words in speaking order
    pub words: Vec<String>,
    /// Alphabet index of each word (0-25)
    pub digits: Vec<u8>,
    /// South-west corner of the cell (x = longitude, y = latitude)
    pub origin: Point<f64>,
    /// Area covered by the code
    pub cell: Rect<f64>,
}

impl NatoCode {
    pub(crate) fn from_digits(digits: &[usize], config: &NatoConfig) -> Self {
        let alphabet = config.alphabet();
        let words = digits.iter().map(|&d| alphabet.word(d).to_string()).collect();

        let (lat, lon) = digits_to_coord(digits, config.bounds());
        let (size_lat, size_lon) = cell_size(config.bounds(), digits.len());
        let cell = Rect::new(
            coord! { x: lon, y: lat },
            coord! { x: lon + size_lon, y: lat + size_lat },
        );

        Self {
            words,
            digits: digits.iter().map(|&d| d as u8).collect(),
            origin: Point::new(lon, lat),
            cell,
        }
    }

    /// Encodes a latitude/longitude pair.
    ///
    /// Never fails: points outside the bounding box are clamped onto its edge cells.
    pub fn from_lat_lon(latitude: f64, longitude: f64, config: &NatoConfig) -> Self {
        let digits = coord_to_digits(latitude, longitude, config.bounds(), config.code_length());
        Self::from_digits(&digits, config)
    }

    /// Encodes a latitude/longitude pair, rejecting points outside the bounding box.
    pub fn from_lat_lon_checked(
        latitude: f64,
        longitude: f64,
        config: &NatoConfig,
    ) -> Result<Self, NatoGridError> {
        if !config.bounds().contains(latitude, longitude) {
            return Err(NatoGridError::CoordinateOutOfBounds {
                latitude,
                longitude,
            });
        }
        Ok(Self::from_lat_lon(latitude, longitude, config))
    }

    /// Encodes a WGS84 coordinate given as x = longitude, y = latitude.
    ///
    /// # Example
    /// ```
    /// use nato_grid::{NatoCode, NatoConfig};
    /// use geo_types::Point;
    ///
    /// let config = NatoConfig::default();
    /// // From tuple
    /// let code = NatoCode::from_wgs84(&(22.2903, 52.1677), &config);
    /// // From Point
    /// let same = NatoCode::from_wgs84(&Point::new(22.2903, 52.1677), &config);
    /// assert_eq!(code, same);
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, config: &NatoConfig) -> Self {
        Self::from_lat_lon(coord.y(), coord.x(), config)
    }

    /// Decodes a code written as whitespace-separated words.
    ///
    /// Words match case-insensitively and ignore hyphens. Unknown words are reported before
    /// the word count is checked.
    pub fn from_words(code: &str, config: &NatoConfig) -> Result<Self, NatoGridError> {
        let alphabet = config.alphabet();
        let digits = code
            .split_whitespace()
            .enumerate()
            .map(|(position, word)| {
                alphabet
                    .index_of(word)
                    .ok_or_else(|| NatoGridError::UnknownWord {
                        position,
                        word: word.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        check_word_count(digits.len(), config)?;
        Ok(Self::from_digits(&digits, config))
    }

    /// Decodes a short code, one letter per word (e.g. `NVSOXLGAMVLD`).
    ///
    /// Whitespace and hyphens between letters are ignored.
    pub fn from_short_code(code: &str, config: &NatoConfig) -> Result<Self, NatoGridError> {
        let alphabet = config.alphabet();
        if !alphabet.has_unique_initials() {
            return Err(NatoGridError::InvalidConfiguration(
                "Alphabet words do not have unique initials, short codes are unavailable"
                    .to_string(),
            ));
        }

        let digits = compact_letters(code)
            .enumerate()
            .map(|(position, letter)| {
                alphabet
                    .index_of_initial(letter)
                    .ok_or_else(|| NatoGridError::UnknownWord {
                        position,
                        word: letter.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        check_word_count(digits.len(), config)?;
        Ok(Self::from_digits(&digits, config))
    }

    /// Decodes either form: full words or a short letter code.
    ///
    /// Input made only of alphabet words is always read as words, so a truncated word code
    /// fails with [`NatoGridError::WrongWordCount`] instead of being read as letters.
    pub fn parse(input: &str, config: &NatoConfig) -> Result<Self, NatoGridError> {
        let alphabet = config.alphabet();
        let all_words = input
            .split_whitespace()
            .all(|token| alphabet.index_of(token).is_some());
        if !all_words && alphabet.has_unique_initials() {
            return Self::from_short_code(input, config);
        }
        Self::from_words(input, config)
    }

    /// Latitude of the cell's south-west corner.
    pub fn latitude(&self) -> f64 {
        self.origin.y()
    }

    /// Longitude of the cell's south-west corner.
    pub fn longitude(&self) -> f64 {
        self.origin.x()
    }

    /// Centre of the cell (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        self.cell.center().into()
    }

    /// Converts the cell to a polygon for GIS export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.cell.to_polygon()
    }

    /// First letter of each word, uppercased.
    pub fn short_code(&self) -> String {
        self.words
            .iter()
            .filter_map(|w| w.chars().find(|c| *c != '-'))
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Latitude digits (even positions).
    pub fn latitude_digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().step_by(2).copied()
    }

    /// Longitude digits (odd positions).
    pub fn longitude_digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().skip(1).step_by(2).copied()
    }
}

fn check_word_count(found: usize, config: &NatoConfig) -> Result<(), NatoGridError> {
    if found != config.code_length() {
        return Err(NatoGridError::WrongWordCount {
            expected: config.code_length(),
            found,
        });
    }
    Ok(())
}

fn compact_letters(code: &str) -> impl Iterator<Item = char> + '_ {
    code.chars().filter(|c| !c.is_whitespace() && *c != '-')
}

impl fmt::Display for NatoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

/// Parses with the default configuration, accepting either code form.
impl FromStr for NatoCode {
    type Err = NatoGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, NatoConfig::shared_default())
    }
}
