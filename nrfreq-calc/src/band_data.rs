//! NR band reference data
//!
//! Static operating band records (3GPP TS 38.104 Table 5.4.2.1-1 and
//! 5.2-1), maximum transmission bandwidth configuration per numerology
//! (TS 38.101-1 Table 5.3.2-1) and GSCN ranges (TS 38.104 Table 5.4.3.1-1).
//!
//! The tables are process-wide constants. They are only reachable through the
//! accessor functions of this module, which hand out copies.

use nrfreq_common::{DuplexMode, FrequencyRange};

use crate::error::{CalcError, CalcResult};

/// Static description of one NR operating band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandDescriptor {
    /// Band identifier, also the lookup key (e.g. "n77")
    pub name: &'static str,
    /// Frequency range the band belongs to
    pub frequency_range: FrequencyRange,
    /// Duplex mode
    pub duplex_mode: DuplexMode,
    /// Lower edge of the downlink operating band in MHz
    pub dl_freq_low: f64,
    /// Upper edge of the downlink operating band in MHz
    pub dl_freq_high: f64,
    /// Lower edge of the uplink operating band in MHz
    pub ul_freq_low: f64,
    /// Upper edge of the uplink operating band in MHz
    pub ul_freq_high: f64,
    /// N_REF_Offs used for downlink (and uplink unless overridden)
    pub arfcn_offset: i64,
    /// N_REF_Offs override for uplink frequency math
    pub ul_arfcn_offset: Option<i64>,
    /// F_REF_Offs in MHz
    pub freq_ref_offset: f64,
    /// ΔF_Global in kHz
    pub delta_f_global: f64,
    /// Channel raster step ΔF_Raster in kHz
    pub delta_f_raster: f64,
    /// Permitted subcarrier spacings in kHz
    pub supported_scs: &'static [u32],
    /// Permitted channel bandwidths in MHz
    pub supported_bandwidths: &'static [u32],
}

impl BandDescriptor {
    /// ARFCN offset anchoring uplink numbering.
    pub fn effective_ul_arfcn_offset(&self) -> i64 {
        self.ul_arfcn_offset.unwrap_or(self.arfcn_offset)
    }

    /// Returns true if the band permits the given subcarrier spacing.
    pub fn supports_scs(&self, scs_khz: u32) -> bool {
        self.supported_scs.contains(&scs_khz)
    }

    /// Returns true if the band permits the given channel bandwidth.
    pub fn supports_bandwidth(&self, bandwidth_mhz: u32) -> bool {
        self.supported_bandwidths.contains(&bandwidth_mhz)
    }
}

/// One contiguous GSCN interval of the synchronization raster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GscnInterval {
    pub gscn_min: u32,
    pub gscn_max: u32,
    /// MHz
    pub freq_min: f64,
    /// MHz
    pub freq_max: f64,
    /// MHz
    pub step: f64,
}

/// GSCN intervals registered for one frequency range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GscnRange {
    pub frequency_range: FrequencyRange,
    pub intervals: &'static [GscnInterval],
}

// Shared SCS / bandwidth sets
const SCS_15_30: &[u32] = &[15, 30];
const SCS_15_30_60: &[u32] = &[15, 30, 60];
const BW_LOW_BAND: &[u32] = &[5, 10, 15, 20, 25, 30, 40, 50];
const BW_MID_BAND: &[u32] = &[10, 15, 20, 25, 30, 40, 50, 60, 70, 80, 90, 100];

/// FDD band below 3000 MHz: N_REF_Offs 0, F_REF_Offs 0 MHz, 5 kHz grid,
/// 100 kHz channel raster.
const fn fdd_low_band(
    name: &'static str,
    dl: (f64, f64),
    ul: (f64, f64),
) -> BandDescriptor {
    BandDescriptor {
        name,
        frequency_range: FrequencyRange::Fr1,
        duplex_mode: DuplexMode::Fdd,
        dl_freq_low: dl.0,
        dl_freq_high: dl.1,
        ul_freq_low: ul.0,
        ul_freq_high: ul.1,
        arfcn_offset: 0,
        ul_arfcn_offset: Some(0),
        freq_ref_offset: 0.0,
        delta_f_global: 5.0,
        delta_f_raster: 100.0,
        supported_scs: SCS_15_30,
        supported_bandwidths: BW_LOW_BAND,
    }
}

const BAND_TABLE: [BandDescriptor; 9] = [
    fdd_low_band("n1", (2110.0, 2170.0), (1920.0, 1980.0)),
    fdd_low_band("n5", (869.0, 894.0), (824.0, 849.0)),
    fdd_low_band("n7", (2620.0, 2690.0), (2500.0, 2570.0)),
    fdd_low_band("n8", (925.0, 960.0), (880.0, 915.0)),
    fdd_low_band("n12", (729.0, 746.0), (699.0, 716.0)),
    fdd_low_band("n2", (1930.0, 1990.0), (1850.0, 1910.0)),
    fdd_low_band("n3", (1805.0, 1880.0), (1710.0, 1785.0)),
    BandDescriptor {
        name: "n48",
        frequency_range: FrequencyRange::Fr1,
        duplex_mode: DuplexMode::Tdd,
        dl_freq_low: 3550.0,
        dl_freq_high: 3700.0,
        ul_freq_low: 3550.0,
        ul_freq_high: 3700.0,
        arfcn_offset: 600_000,
        ul_arfcn_offset: None,
        freq_ref_offset: 3000.0,
        delta_f_global: 15.0,
        delta_f_raster: 15.0,
        supported_scs: SCS_15_30,
        supported_bandwidths: BW_MID_BAND,
    },
    BandDescriptor {
        name: "n77",
        frequency_range: FrequencyRange::Fr1,
        duplex_mode: DuplexMode::Tdd,
        dl_freq_low: 3300.0,
        dl_freq_high: 4200.0,
        ul_freq_low: 3300.0,
        ul_freq_high: 4200.0,
        arfcn_offset: 620_000,
        ul_arfcn_offset: None,
        freq_ref_offset: 3000.0,
        delta_f_global: 15.0,
        delta_f_raster: 15.0,
        supported_scs: SCS_15_30_60,
        supported_bandwidths: BW_MID_BAND,
    },
];

// Every record must be internally consistent; a bad entry fails the build.
const _: () = {
    let mut i = 0;
    while i < BAND_TABLE.len() {
        let band = &BAND_TABLE[i];
        assert!(!band.name.is_empty(), "band table: empty band name");
        assert!(!band.supported_scs.is_empty(), "band table: band without SCS");
        assert!(
            !band.supported_bandwidths.is_empty(),
            "band table: band without bandwidth"
        );
        assert!(band.dl_freq_low <= band.dl_freq_high, "band table: inverted DL range");
        assert!(band.ul_freq_low <= band.ul_freq_high, "band table: inverted UL range");
        assert!(
            band.delta_f_global > 0.0 && band.delta_f_raster > 0.0,
            "band table: non-positive grid step"
        );
        i += 1;
    }
};

static NR_BANDS: [BandDescriptor; 9] = BAND_TABLE;

/// Maximum RB count per (SCS kHz, bandwidth MHz), TS 38.101-1 Table 5.3.2-1.
/// The 120 kHz row is the FR2 stub.
static MAX_RB_TABLE: &[(u32, &[(u32, u16)])] = &[
    (
        15,
        &[(5, 25), (10, 52), (15, 79), (20, 106), (25, 133), (30, 160), (40, 216), (50, 270)],
    ),
    (
        30,
        &[
            (5, 11),
            (10, 24),
            (15, 38),
            (20, 51),
            (25, 65),
            (30, 78),
            (40, 106),
            (50, 133),
            (60, 162),
            (70, 189),
            (80, 217),
            (90, 245),
            (100, 273),
        ],
    ),
    (
        60,
        &[
            (10, 11),
            (15, 18),
            (20, 24),
            (25, 31),
            (30, 38),
            (40, 51),
            (50, 65),
            (60, 79),
            (70, 93),
            (80, 107),
            (90, 121),
            (100, 135),
        ],
    ),
    (120, &[(50, 32), (100, 66), (200, 132), (400, 264)]),
];

static GSCN_RANGES: &[GscnRange] = &[GscnRange {
    frequency_range: FrequencyRange::Fr1,
    intervals: &[
        GscnInterval {
            gscn_min: 7499,
            gscn_max: 7499,
            freq_min: 3000.0,
            freq_max: 3000.0,
            step: 1.44,
        },
        GscnInterval {
            gscn_min: 7500,
            gscn_max: 8255,
            freq_min: 3001.44,
            freq_max: 4200.0,
            step: 1.44,
        },
    ],
}];

fn find_band(band: &str) -> Option<&'static BandDescriptor> {
    NR_BANDS.iter().find(|b| b.name == band)
}

/// Returns a copy of the band record registered under `band`.
///
/// # Errors
/// [`CalcError::UnknownBand`] if the key is not registered.
pub fn get_band_info(band: &str) -> CalcResult<BandDescriptor> {
    find_band(band)
        .copied()
        .ok_or_else(|| CalcError::UnknownBand(band.to_string()))
}

/// Iterates over all registered band keys in table order.
pub fn band_names() -> impl Iterator<Item = &'static str> {
    NR_BANDS.iter().map(|b| b.name)
}

/// Returns true if `scs_khz` is permitted for `band`. Unknown bands yield false.
pub fn is_valid_scs(band: &str, scs_khz: u32) -> bool {
    find_band(band).is_some_and(|b| b.supports_scs(scs_khz))
}

/// Returns true if `bandwidth_mhz` is permitted for `band`. Unknown bands yield false.
pub fn is_valid_bandwidth(band: &str, bandwidth_mhz: u32) -> bool {
    find_band(band).is_some_and(|b| b.supports_bandwidth(bandwidth_mhz))
}

/// Maximum transmission bandwidth configuration N_RB for the numerology.
///
/// # Errors
/// * [`CalcError::UnsupportedScs`] - no table exists for `scs_khz`
/// * [`CalcError::UnsupportedBandwidth`] - the SCS table has no entry for `bandwidth_mhz`
pub fn get_max_rb(scs_khz: u32, bandwidth_mhz: u32) -> CalcResult<u16> {
    let (_, entries) = MAX_RB_TABLE
        .iter()
        .find(|(scs, _)| *scs == scs_khz)
        .ok_or(CalcError::UnsupportedScs(scs_khz))?;

    entries
        .iter()
        .find(|(bw, _)| *bw == bandwidth_mhz)
        .map(|(_, n_rb)| *n_rb)
        .ok_or(CalcError::UnsupportedBandwidth {
            scs_khz,
            bandwidth_mhz,
        })
}

/// Returns the GSCN intervals registered for `frequency_range` ("FR1", "FR2").
///
/// Only FR1 is registered.
///
/// # Errors
/// [`CalcError::UnknownFrequencyRange`] if nothing is registered under the key.
pub fn get_gscn_range(frequency_range: &str) -> CalcResult<GscnRange> {
    GSCN_RANGES
        .iter()
        .find(|r| r.frequency_range.as_str() == frequency_range)
        .copied()
        .ok_or_else(|| CalcError::UnknownFrequencyRange(frequency_range.to_string()))
}
