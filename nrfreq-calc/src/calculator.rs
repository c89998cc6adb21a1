//! NR ARFCN / frequency / Point A calculator
//!
//! Implements the global frequency raster of 3GPP TS 38.104 clause 5.4.2.1:
//!
//! ```text
//! F_REF = F_REF_Offs + ΔF_Global * (N_REF - N_REF_Offs)
//! ```
//!
//! and derives Point A as the lower edge of the carrier's resource block
//! grid: `Point A = F_center - N_RB * 12 * SCS / 2`, quantized back onto the
//! global raster.

use tracing::{debug, trace};

use crate::band_data::{self, BandDescriptor};
use crate::error::{CalcError, CalcResult};

/// Number of subcarriers per resource block
pub const SUBCARRIERS_PER_RB: u32 = 12;

/// Carrier offsets that refine Point A in the full procedure.
///
/// These are accepted for interface completeness only. The simplified
/// derivation used by [`FrequencyCalculator`] does not apply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarrierOffsets {
    /// controlResourceSetZero index (TS 38.213 Table 13-1..13-10)
    pub coreset_zero: u8,
    /// offsetToCarrier in resource blocks
    pub offset_to_carrier_rb: u32,
}

/// Stateless NR frequency calculator.
///
/// All data comes from the static band tables in [`crate::band_data`], so the
/// calculator is a zero-sized value that can be copied and shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyCalculator;

/// Half of the occupied RB grid in kHz.
fn half_grid_khz(n_rb: u16, scs_khz: u32) -> f64 {
    (n_rb as u32 * SUBCARRIERS_PER_RB * scs_khz) as f64 / 2.0
}

/// Global raster formula, with ARFCN numbering anchored on `arfcn_offset`.
///
/// The offset subtraction is widened so that every `i64` ARFCN converts.
fn raster_frequency_mhz(band: &BandDescriptor, arfcn: i64, arfcn_offset: i64) -> f64 {
    let steps = i128::from(arfcn) - i128::from(arfcn_offset);
    band.freq_ref_offset + band.delta_f_global * steps as f64 / 1000.0
}

/// Inverse of the global raster formula, anchored on `arfcn_offset`.
///
/// Ties round to even.
fn quantize_to_arfcn(freq_mhz: f64, band: &BandDescriptor, arfcn_offset: i64) -> i64 {
    ((freq_mhz - band.freq_ref_offset) * 1000.0 / band.delta_f_global + arfcn_offset as f64)
        .round_ties_even() as i64
}

impl FrequencyCalculator {
    /// Creates a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// Converts an NR-ARFCN to its frequency in MHz.
    ///
    /// The ARFCN is not checked against the band's operating range; any value
    /// is converted.
    ///
    /// # Errors
    /// [`CalcError::UnknownBand`] if the band is not registered.
    ///
    /// # Example
    /// ```
    /// use nrfreq_calc::FrequencyCalculator;
    ///
    /// let calc = FrequencyCalculator::new();
    /// let freq = calc.arfcn_to_frequency("n77", 650000).unwrap();
    /// assert!((freq - 3450.0).abs() < 1e-9);
    /// ```
    pub fn arfcn_to_frequency(&self, band: &str, arfcn: i64) -> CalcResult<f64> {
        let info = band_data::get_band_info(band)?;
        Ok(raster_frequency_mhz(&info, arfcn, info.arfcn_offset))
    }

    /// Derives the Point A ARFCN of a single carrier from its center ARFCN.
    ///
    /// Preconditions are checked in order: band registered, SCS permitted for
    /// the band, bandwidth permitted for the band. The RB table lookup can still fail
    /// afterwards when the combination is not standardized.
    ///
    /// # Example
    /// ```
    /// use nrfreq_calc::FrequencyCalculator;
    ///
    /// let calc = FrequencyCalculator::new();
    /// assert_eq!(calc.calculate_point_a_arfcn("n77", 30, 100, 650000), Ok(646724));
    /// ```
    pub fn calculate_point_a_arfcn(
        &self,
        band: &str,
        scs_khz: u32,
        bandwidth_mhz: u32,
        center_arfcn: i64,
    ) -> CalcResult<i64> {
        self.calculate_point_a_arfcn_with_offsets(
            band,
            scs_khz,
            bandwidth_mhz,
            center_arfcn,
            CarrierOffsets::default(),
        )
    }

    /// Same as [`calculate_point_a_arfcn`](Self::calculate_point_a_arfcn),
    /// taking the carrier offsets of the full procedure. The offsets are not
    /// applied.
    pub fn calculate_point_a_arfcn_with_offsets(
        &self,
        band: &str,
        scs_khz: u32,
        bandwidth_mhz: u32,
        center_arfcn: i64,
        offsets: CarrierOffsets,
    ) -> CalcResult<i64> {
        check_numerology(band, scs_khz, bandwidth_mhz)?;
        trace!(
            band,
            coreset_zero = offsets.coreset_zero,
            offset_to_carrier_rb = offsets.offset_to_carrier_rb,
            "carrier offsets ignored by simplified Point A derivation"
        );

        let info = band_data::get_band_info(band)?;
        let center_freq_mhz = self.arfcn_to_frequency(band, center_arfcn)?;

        let n_rb = band_data::get_max_rb(scs_khz, bandwidth_mhz)?;
        let half_grid_khz = half_grid_khz(n_rb, scs_khz);

        let point_a_freq_mhz = center_freq_mhz - half_grid_khz / 1000.0;
        let point_a_arfcn = quantize_to_arfcn(point_a_freq_mhz, &info, info.arfcn_offset);

        debug!(
            band,
            scs_khz,
            bandwidth_mhz,
            center_arfcn,
            center_freq_mhz,
            n_rb,
            half_grid_khz,
            point_a_freq_mhz,
            point_a_arfcn,
            "Point A derived"
        );
        Ok(point_a_arfcn)
    }

    /// Derives DL and UL Point A ARFCNs of a paired (FDD) carrier.
    ///
    /// Returns `(dl_point_a, ul_point_a)`.
    pub fn calculate_point_a_arfcn_fdd(
        &self,
        band: &str,
        scs_khz: u32,
        bandwidth_mhz: u32,
        dl_center_arfcn: i64,
        ul_center_arfcn: i64,
    ) -> CalcResult<(i64, i64)> {
        check_numerology(band, scs_khz, bandwidth_mhz)?;

        let dl_point_a =
            self.calculate_point_a_arfcn(band, scs_khz, bandwidth_mhz, dl_center_arfcn)?;
        let ul_point_a =
            self.calculate_point_a_arfcn_ul(band, scs_khz, bandwidth_mhz, ul_center_arfcn)?;

        Ok((dl_point_a, ul_point_a))
    }

    /// Derives the UL Point A ARFCN of an FDD carrier.
    ///
    /// UL numbering is anchored on `ul_arfcn_offset` when the band defines
    /// one, otherwise on `arfcn_offset`. F_REF_Offs and ΔF_Global are shared
    /// with DL. Band-level SCS/bandwidth checks are the caller's job; see
    /// [`calculate_point_a_arfcn_fdd`](Self::calculate_point_a_arfcn_fdd).
    pub fn calculate_point_a_arfcn_ul(
        &self,
        band: &str,
        scs_khz: u32,
        bandwidth_mhz: u32,
        ul_center_arfcn: i64,
    ) -> CalcResult<i64> {
        let info = band_data::get_band_info(band)?;
        let ul_arfcn_offset = info.effective_ul_arfcn_offset();

        let ul_center_freq_mhz = raster_frequency_mhz(&info, ul_center_arfcn, ul_arfcn_offset);

        let n_rb = band_data::get_max_rb(scs_khz, bandwidth_mhz)?;
        let half_grid_khz = half_grid_khz(n_rb, scs_khz);

        let ul_point_a_freq_mhz = ul_center_freq_mhz - half_grid_khz / 1000.0;
        let ul_point_a_arfcn = quantize_to_arfcn(ul_point_a_freq_mhz, &info, ul_arfcn_offset);

        debug!(
            band,
            ul_center_arfcn,
            ul_center_freq_mhz,
            n_rb,
            ul_point_a_freq_mhz,
            ul_point_a_arfcn,
            "UL Point A derived"
        );
        Ok(ul_point_a_arfcn)
    }

    /// Returns a copy of the band record. Forwards to
    /// [`band_data::get_band_info`].
    pub fn get_band_info(&self, band: &str) -> CalcResult<BandDescriptor> {
        band_data::get_band_info(band)
    }

    /// SSB candidate enumeration. Not implemented.
    pub fn calculate_ssb_candidates(
        &self,
        _band: &str,
        _scs_khz: u32,
        _bandwidth_mhz: u32,
        _center_arfcn: i64,
        _coreset_zero: u8,
    ) -> CalcResult<Vec<(i64, i64)>> {
        Err(CalcError::NotImplemented("SSB candidate calculation"))
    }

    /// ARFCN to GSCN conversion. Not implemented.
    pub fn arfcn_to_gscn(&self, _band: &str, _arfcn: i64) -> CalcResult<u32> {
        Err(CalcError::NotImplemented("ARFCN to GSCN conversion"))
    }

    /// GSCN to ARFCN conversion. Not implemented.
    pub fn gscn_to_arfcn(&self, _band: &str, _gscn: u32) -> CalcResult<i64> {
        Err(CalcError::NotImplemented("GSCN to ARFCN conversion"))
    }
}

/// Band-level checks shared by the TDD and FDD entry points.
///
/// An unregistered band is reported as such before the SCS check runs.
fn check_numerology(band: &str, scs_khz: u32, bandwidth_mhz: u32) -> CalcResult<()> {
    band_data::get_band_info(band)?;
    if !band_data::is_valid_scs(band, scs_khz) {
        return Err(CalcError::InvalidScs {
            band: band.to_string(),
            scs_khz,
        });
    }
    if !band_data::is_valid_bandwidth(band, bandwidth_mhz) {
        return Err(CalcError::InvalidBandwidth {
            band: band.to_string(),
            bandwidth_mhz,
        });
    }
    Ok(())
}
