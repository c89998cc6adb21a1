//! 5G NR frequency calculations
//!
//! Conversion between NR-ARFCN and frequency and derivation of Point A for
//! TDD and FDD carriers, based on 3GPP TS 38.104 and TS 38.101-1.
//!
//! - [`band_data`] - static band, resource block and GSCN tables
//! - [`calculator`] - the stateless [`FrequencyCalculator`]
//!
//! # Example
//!
//! ```
//! use nrfreq_calc::FrequencyCalculator;
//!
//! let calc = FrequencyCalculator::new();
//! let (dl, ul) = calc.calculate_point_a_arfcn_fdd("n1", 15, 10, 432000, 394000).unwrap();
//! assert_eq!((dl, ul), (431064, 393064));
//! ```

pub mod band_data;
pub mod calculator;
pub mod error;

pub use band_data::{
    band_names, get_band_info, get_gscn_range, get_max_rb, is_valid_bandwidth, is_valid_scs,
    BandDescriptor, GscnInterval, GscnRange,
};
pub use calculator::{CarrierOffsets, FrequencyCalculator, SUBCARRIERS_PER_RB};
pub use error::{CalcError, CalcResult};
