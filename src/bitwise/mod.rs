// Bit-level and textual primitives for the application data word and cargo

pub mod elements;
pub mod masks;
pub mod parser;

pub use elements::{read_trailing_u16_be, read_u16_be, write_u16_be, ElementError};
pub use masks::{bmask, hmask, lmask, BitSpan};
pub use parser::{parse_decimal, parse_field_assignment};
