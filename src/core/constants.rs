/// Number of words in the phonetic alphabet, and the radix of every code digit
pub const RADIX: usize = 26;

/// Default number of words in a code (6 latitude + 6 longitude digits)
pub const DEFAULT_CODE_LENGTH: usize = 12;

/// Longest accepted code. Past 11 digits per axis the f64 residual carries no information.
pub const MAX_CODE_LENGTH: usize = 22;

/// NATO phonetic alphabet, index 0 = A
pub const NATO_ALPHABET: [&str; RADIX] = [
    "Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliett",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whiskey", "X-ray", "Yankee", "Zulu",
];

/// Default extents [min_lat, max_lat, min_lon, max_lon] covering Poland
pub const POLAND_EXTENTS: [f64; 4] = [49.0, 55.0, 14.0, 24.0];
