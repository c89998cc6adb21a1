//! Core NR radio types: frequency range and duplex mode.

use std::fmt;

/// NR frequency range (3GPP TS 38.104 clause 5.1).
///
/// - FR1: 410 MHz - 7125 MHz
/// - FR2: 24250 MHz - 52600 MHz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyRange {
    /// Frequency Range 1 (sub-6 GHz)
    Fr1,
    /// Frequency Range 2 (mmWave)
    Fr2,
}

impl FrequencyRange {
    /// Returns the canonical name used as lookup key ("FR1" / "FR2").
    pub const fn as_str(&self) -> &'static str {
        match self {
            FrequencyRange::Fr1 => "FR1",
            FrequencyRange::Fr2 => "FR2",
        }
    }
}

impl fmt::Display for FrequencyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Duplex mode of an operating band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuplexMode {
    /// Frequency Division Duplex - paired DL/UL spectrum
    Fdd,
    /// Time Division Duplex - DL and UL share one carrier
    Tdd,
}

impl DuplexMode {
    /// Returns the short name ("FDD" / "TDD").
    pub const fn as_str(&self) -> &'static str {
        match self {
            DuplexMode::Fdd => "FDD",
            DuplexMode::Tdd => "TDD",
        }
    }
}

impl fmt::Display for DuplexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
