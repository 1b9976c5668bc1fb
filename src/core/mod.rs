pub mod alphabet;
pub mod bounds;
pub mod constants;
pub mod digits;

pub use alphabet::PhoneticAlphabet;
pub use bounds::BoundingBox;
pub use constants::{
    DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, NATO_ALPHABET, POLAND_EXTENTS, RADIX,
};
pub use digits::{cell_size, coord_to_digits, digits_to_coord, digits_to_fraction, next_digit};
