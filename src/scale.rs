use std::fmt;

use serde::{Deserialize, Serialize};

pub const KILO: f64 = 1000.0;
pub const MEGA: f64 = 1000.0 * KILO;
pub const GIGA: f64 = 1000.0 * MEGA;
pub const TERA: f64 = 1000.0 * GIGA;

pub const KIBI: f64 = 1024.0;
pub const MEBI: f64 = 1024.0 * KIBI;
pub const GIBI: f64 = 1024.0 * MEBI;
pub const TEBI: f64 = 1024.0 * GIBI;

/// One magnitude step of a unit system. Rates in `[multiple, next)` are
/// divided by `multiple` and rendered with `symbol` appended.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScaleTier {
    /// Divisor applied to the raw per-second rate.
    pub multiple: f64,
    /// Lower bound of the following tier; `None` on the unbounded top tier.
    pub next: Option<f64>,
    /// Unit suffix, e.g. "Mbit/s".
    pub symbol: &'static str,
}

pub(crate) static BIT_PREFIXES_DECIMAL: [ScaleTier; 5] = [
    ScaleTier { multiple: 1.0, next: Some(KILO), symbol: "bit/s" },
    ScaleTier { multiple: KILO, next: Some(MEGA), symbol: "kbit/s" },
    ScaleTier { multiple: MEGA, next: Some(GIGA), symbol: "Mbit/s" },
    ScaleTier { multiple: GIGA, next: Some(TERA), symbol: "Gbit/s" },
    ScaleTier { multiple: TERA, next: None, symbol: "Tbit/s" },
];

pub(crate) static BIT_PREFIXES_BINARY: [ScaleTier; 5] = [
    ScaleTier { multiple: 1.0, next: Some(KIBI), symbol: "bit/s" },
    ScaleTier { multiple: KIBI, next: Some(MEBI), symbol: "Kibit/s" },
    ScaleTier { multiple: MEBI, next: Some(GIBI), symbol: "Mibit/s" },
    ScaleTier { multiple: GIBI, next: Some(TEBI), symbol: "Gibit/s" },
    ScaleTier { multiple: TEBI, next: None, symbol: "Tibit/s" },
];

pub(crate) static BYTE_PREFIXES_DECIMAL: [ScaleTier; 5] = [
    ScaleTier { multiple: 1.0, next: Some(KILO), symbol: "B/s" },
    ScaleTier { multiple: KILO, next: Some(MEGA), symbol: "kB/s" },
    ScaleTier { multiple: MEGA, next: Some(GIGA), symbol: "MB/s" },
    ScaleTier { multiple: GIGA, next: Some(TERA), symbol: "GB/s" },
    ScaleTier { multiple: TERA, next: None, symbol: "TB/s" },
];

pub(crate) static BYTE_PREFIXES_BINARY: [ScaleTier; 5] = [
    ScaleTier { multiple: 1.0, next: Some(KIBI), symbol: "B/s" },
    ScaleTier { multiple: KIBI, next: Some(MEBI), symbol: "KiB/s" },
    ScaleTier { multiple: MEBI, next: Some(GIBI), symbol: "MiB/s" },
    ScaleTier { multiple: GIBI, next: Some(TEBI), symbol: "GiB/s" },
    ScaleTier { multiple: TEBI, next: None, symbol: "TiB/s" },
];

/// Selects which of the four fixed scale tables a rate is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitSystem {
    /// bit/s, kbit/s, Mbit/s, ... (1 kbit = 1000 bits)
    #[default]
    BitsDecimal,
    /// bit/s, Kibit/s, Mibit/s, ... (1 Kibit = 1024 bits)
    BitsBinary,
    /// B/s, kB/s, MB/s, ... (1 kB = 1000 bytes)
    BytesDecimal,
    /// B/s, KiB/s, MiB/s, ... (1 KiB = 1024 bytes)
    BytesBinary,
}

impl UnitSystem {
    pub(crate) fn table(self) -> &'static [ScaleTier; 5] {
        match self {
            UnitSystem::BitsDecimal => &BIT_PREFIXES_DECIMAL,
            UnitSystem::BitsBinary => &BIT_PREFIXES_BINARY,
            UnitSystem::BytesDecimal => &BYTE_PREFIXES_DECIMAL,
            UnitSystem::BytesBinary => &BYTE_PREFIXES_BINARY,
        }
    }

    /// Whether rates in this system count bits rather than bytes.
    pub fn counts_bits(self) -> bool {
        matches!(self, UnitSystem::BitsDecimal | UnitSystem::BitsBinary)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::BitsDecimal => write!(f, "bits-decimal"),
            UnitSystem::BitsBinary => write!(f, "bits-binary"),
            UnitSystem::BytesDecimal => write!(f, "bytes-decimal"),
            UnitSystem::BytesBinary => write!(f, "bytes-binary"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tables() -> [&'static [ScaleTier; 5]; 4] {
        [
            &BIT_PREFIXES_DECIMAL,
            &BIT_PREFIXES_BINARY,
            &BYTE_PREFIXES_DECIMAL,
            &BYTE_PREFIXES_BINARY,
        ]
    }

    #[test]
    fn test_tables_are_contiguous() {
        for table in all_tables() {
            assert_eq!(table[0].multiple, 1.0);
            for pair in table.windows(2) {
                assert_eq!(pair[0].next, Some(pair[1].multiple));
                assert!(pair[0].multiple < pair[1].multiple);
            }
            assert_eq!(table[4].next, None);
        }
    }

    #[test]
    fn test_tables_step_by_fixed_base() {
        for (table, base) in [
            (&BIT_PREFIXES_DECIMAL, 1000.0),
            (&BYTE_PREFIXES_DECIMAL, 1000.0),
            (&BIT_PREFIXES_BINARY, 1024.0),
            (&BYTE_PREFIXES_BINARY, 1024.0),
        ] {
            for pair in table.windows(2) {
                assert_eq!(pair[1].multiple, pair[0].multiple * base);
            }
        }
    }

    #[test]
    fn test_unit_system_display() {
        assert_eq!(UnitSystem::BitsDecimal.to_string(), "bits-decimal");
        assert_eq!(UnitSystem::BytesBinary.to_string(), "bytes-binary");
    }

    #[test]
    fn test_unit_system_serde_round_trip() {
        for system in [
            UnitSystem::BitsDecimal,
            UnitSystem::BitsBinary,
            UnitSystem::BytesDecimal,
            UnitSystem::BytesBinary,
        ] {
            let json = serde_json::to_string(&system).unwrap();
            let back: UnitSystem = serde_json::from_str(&json).unwrap();
            assert_eq!(system, back);
        }
        assert_eq!(
            serde_json::to_string(&UnitSystem::BitsBinary).unwrap(),
            "\"bits-binary\""
        );
    }
}
