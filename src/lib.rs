//! Human-readable throughput formatting.
//!
//! Takes a count of bits or bytes and the duration it was measured over, and
//! renders a rate string like `"2.9 Mbit/s"`, picking the best magnitude
//! prefix and truncating (never rounding) to the requested precision.
//! Decimal (1 k = 1000) and binary (1 Ki = 1024) prefixes are supported for
//! both bits and bytes.

mod format;
mod measurement;
mod scale;

pub use format::{
    FormatError, format_bits_binary, format_bits_decimal, format_bytes_binary,
    format_bytes_decimal,
};
pub use measurement::Throughput;
pub use scale::UnitSystem;
