use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::format::format_rate;
use crate::scale::UnitSystem;

/// A single transfer measurement: a byte count over an elapsed duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Throughput {
    /// Number of bytes transferred
    pub bytes: u64,
    /// Duration of transfer
    pub duration: Duration,
}

impl Throughput {
    pub fn new(bytes: u64, duration: Duration) -> Self {
        Self { bytes, duration }
    }

    /// Returns throughput in bytes per second
    pub fn bytes_per_sec(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.bytes as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Returns throughput in bits per second
    pub fn bits_per_sec(&self) -> f64 {
        self.bytes_per_sec() * 8.0
    }

    /// Renders the rate under the given unit system, truncated to `decimals`
    /// fractional digits. A zero duration renders as a zero rate.
    pub fn display(&self, system: UnitSystem, decimals: usize) -> String {
        let rate = if system.counts_bits() {
            self.bits_per_sec()
        } else {
            self.bytes_per_sec()
        };
        format_rate(rate, decimals, system.table())
    }
}

impl Display for Throughput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(UnitSystem::BitsDecimal, 2))
    }
}
