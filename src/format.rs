use std::time::Duration;

use thiserror::Error;
use tracing::trace;

use crate::scale::{
    BIT_PREFIXES_BINARY, BIT_PREFIXES_DECIMAL, BYTE_PREFIXES_BINARY, BYTE_PREFIXES_DECIMAL,
    ScaleTier,
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// No rate can be derived from a zero-length interval.
    #[error("elapsed duration must be greater than zero")]
    ZeroElapsed,
}

/// Formats `n` bits transferred over `elapsed` as bit/s, kbit/s, Mbit/s,
/// Gbit/s or Tbit/s, whichever fits best. 1 kbit is 1000 bits.
pub fn format_bits_decimal(
    n: u64,
    elapsed: Duration,
    decimals: usize,
) -> Result<String, FormatError> {
    format(n, elapsed, decimals, &BIT_PREFIXES_DECIMAL)
}

/// Formats `n` bits transferred over `elapsed` as bit/s, Kibit/s, Mibit/s,
/// Gibit/s or Tibit/s, whichever fits best. 1 Kibit is 1024 bits.
pub fn format_bits_binary(
    n: u64,
    elapsed: Duration,
    decimals: usize,
) -> Result<String, FormatError> {
    format(n, elapsed, decimals, &BIT_PREFIXES_BINARY)
}

/// Formats `n` bytes transferred over `elapsed` as B/s, kB/s, MB/s, GB/s or
/// TB/s, whichever fits best. 1 kB is 1000 bytes.
pub fn format_bytes_decimal(
    n: u64,
    elapsed: Duration,
    decimals: usize,
) -> Result<String, FormatError> {
    format(n, elapsed, decimals, &BYTE_PREFIXES_DECIMAL)
}

/// Formats `n` bytes transferred over `elapsed` as B/s, KiB/s, MiB/s, GiB/s
/// or TiB/s, whichever fits best. 1 KiB is 1024 bytes.
pub fn format_bytes_binary(
    n: u64,
    elapsed: Duration,
    decimals: usize,
) -> Result<String, FormatError> {
    format(n, elapsed, decimals, &BYTE_PREFIXES_BINARY)
}

fn format(
    n: u64,
    elapsed: Duration,
    decimals: usize,
    table: &'static [ScaleTier; 5],
) -> Result<String, FormatError> {
    if elapsed.is_zero() {
        return Err(FormatError::ZeroElapsed);
    }

    Ok(format_rate(n as f64 / elapsed.as_secs_f64(), decimals, table))
}

/// Renders an already-computed per-second rate against a scale table.
///
/// The tier is chosen on the unscaled rate and the fractional part is
/// truncated, never rounded: 999999 bit/s at zero decimals stays
/// "999 kbit/s" instead of crossing into Mbit/s.
pub(crate) fn format_rate(rate: f64, decimals: usize, table: &'static [ScaleTier; 5]) -> String {
    let tier = table
        .iter()
        .find(|tier| tier.next.is_none_or(|bound| rate < bound))
        .unwrap_or(&table[4]);

    trace!("rate {} scaled into {} tier", rate, tier.symbol);

    let factor = 10f64.powi(decimals as i32);
    let scaled = ((rate / tier.multiple) * factor).trunc() / factor;
    format!("{scaled:.decimals$} {}", tier.symbol)
}
