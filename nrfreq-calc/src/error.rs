//! Error types for band lookups and frequency conversions

use thiserror::Error;

/// Errors raised by the band reference store and the frequency calculator.
///
/// Every variant is caused by caller input and is reported as soon as it is
/// detected; nothing is retried or recovered locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The band key is not registered in the band table.
    #[error("Unknown band: {0}")]
    UnknownBand(String),

    /// The subcarrier spacing is not permitted for the band.
    #[error("Invalid SCS {scs_khz} kHz for band {band}")]
    InvalidScs { band: String, scs_khz: u32 },

    /// No resource block table exists for the subcarrier spacing.
    #[error("Unsupported SCS: {0} kHz")]
    UnsupportedScs(u32),

    /// The channel bandwidth is not permitted for the band.
    #[error("Invalid bandwidth {bandwidth_mhz} MHz for band {band}")]
    InvalidBandwidth { band: String, bandwidth_mhz: u32 },

    /// The resource block table for the SCS has no entry for the bandwidth.
    #[error("Unsupported bandwidth {bandwidth_mhz} MHz for SCS {scs_khz} kHz")]
    UnsupportedBandwidth { scs_khz: u32, bandwidth_mhz: u32 },

    /// No GSCN range is registered for the frequency range key.
    #[error("Unknown frequency range: {0}")]
    UnknownFrequencyRange(String),

    /// The operation is declared but has no implementation.
    #[error("{0} not implemented yet")]
    NotImplemented(&'static str),
}

/// Result alias used throughout this crate.
pub type CalcResult<T> = Result<T, CalcError>;
