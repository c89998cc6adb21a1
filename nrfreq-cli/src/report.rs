//! Text reports printed by the `nr-freq` subcommands

use std::fmt::Write;

use nrfreq_calc::{CalcResult, FrequencyCalculator};

const SECTION_RULE: usize = 50;
const BAND_INFO_RULE: usize = 30;

/// Formats calculator results as the multi-line text printed on stdout.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    calc: FrequencyCalculator,
    precision: usize,
}

impl Reporter {
    /// Creates a reporter printing frequencies with `precision` decimals.
    pub fn new(precision: usize) -> Self {
        Self {
            calc: FrequencyCalculator::new(),
            precision,
        }
    }

    fn mhz(&self, freq: f64) -> String {
        format!("{:.*} MHz", self.precision, freq)
    }

    /// Single carrier Point A.
    pub fn point_a(
        &self,
        band: &str,
        scs_khz: u32,
        bandwidth_mhz: u32,
        center_arfcn: i64,
    ) -> CalcResult<String> {
        let point_a = self
            .calc
            .calculate_point_a_arfcn(band, scs_khz, bandwidth_mhz, center_arfcn)?;
        let info = self.calc.get_band_info(band)?;
        let center_freq = self.calc.arfcn_to_frequency(band, center_arfcn)?;
        let point_a_freq = self.calc.arfcn_to_frequency(band, point_a)?;

        let mut out = String::new();
        let _ = writeln!(out, "Band: {} ({})", band, info.duplex_mode);
        let _ = writeln!(out, "SCS: {} kHz", scs_khz);
        let _ = writeln!(out, "Bandwidth: {} MHz", bandwidth_mhz);
        let _ = writeln!(out, "Center ARFCN: {}", center_arfcn);
        let _ = writeln!(out, "Center Frequency: {}", self.mhz(center_freq));
        let _ = writeln!(out, "{}", "-".repeat(SECTION_RULE));
        let _ = write!(out, "Point A ARFCN: {} ({})", point_a, self.mhz(point_a_freq));
        Ok(out)
    }

    /// Paired DL/UL Point A.
    pub fn point_a_fdd(
        &self,
        band: &str,
        scs_khz: u32,
        bandwidth_mhz: u32,
        dl_center_arfcn: i64,
        ul_center_arfcn: i64,
    ) -> CalcResult<String> {
        let (dl_point_a, ul_point_a) = self.calc.calculate_point_a_arfcn_fdd(
            band,
            scs_khz,
            bandwidth_mhz,
            dl_center_arfcn,
            ul_center_arfcn,
        )?;
        let info = self.calc.get_band_info(band)?;

        let mut out = String::new();
        let _ = writeln!(out, "Band: {} ({})", band, info.duplex_mode);
        let _ = writeln!(out, "SCS: {} kHz", scs_khz);
        let _ = writeln!(out, "Bandwidth: {} MHz", bandwidth_mhz);
        let _ = writeln!(out, "DL Center ARFCN: {}", dl_center_arfcn);
        let _ = writeln!(
            out,
            "DL Center Frequency: {}",
            self.mhz(self.calc.arfcn_to_frequency(band, dl_center_arfcn)?)
        );
        let _ = writeln!(out, "UL Center ARFCN: {}", ul_center_arfcn);
        let _ = writeln!(
            out,
            "UL Center Frequency: {}",
            self.mhz(self.calc.arfcn_to_frequency(band, ul_center_arfcn)?)
        );
        let _ = writeln!(out, "{}", "-".repeat(SECTION_RULE));
        let _ = writeln!(
            out,
            "DL Point A ARFCN: {} ({})",
            dl_point_a,
            self.mhz(self.calc.arfcn_to_frequency(band, dl_point_a)?)
        );
        let _ = write!(
            out,
            "UL Point A ARFCN: {} ({})",
            ul_point_a,
            self.mhz(self.calc.arfcn_to_frequency(band, ul_point_a)?)
        );
        Ok(out)
    }

    /// ARFCN to frequency conversion.
    pub fn convert(&self, band: &str, arfcn: i64) -> CalcResult<String> {
        let frequency = self.calc.arfcn_to_frequency(band, arfcn)?;
        Ok(format!(
            "Band: {}\nARFCN: {}\nFrequency: {}",
            band,
            arfcn,
            self.mhz(frequency)
        ))
    }

    /// Band descriptor dump.
    pub fn band_info(&self, band: &str) -> CalcResult<String> {
        let info = self.calc.get_band_info(band)?;

        let mut out = String::new();
        let _ = writeln!(out, "Band Information: {}", band);
        let _ = writeln!(out, "{}", "-".repeat(BAND_INFO_RULE));
        let _ = writeln!(out, "Name: {}", info.name);
        let _ = writeln!(out, "Frequency Range: {}", info.frequency_range);
        let _ = writeln!(out, "Duplex Mode: {}", info.duplex_mode);
        let _ = writeln!(
            out,
            "DL Frequency Range: {:.1} - {:.1} MHz",
            info.dl_freq_low, info.dl_freq_high
        );
        let _ = writeln!(
            out,
            "UL Frequency Range: {:.1} - {:.1} MHz",
            info.ul_freq_low, info.ul_freq_high
        );
        let _ = writeln!(out, "Delta F Global: {:.1} kHz", info.delta_f_global);
        let _ = writeln!(out, "Delta F Raster: {:.1} kHz", info.delta_f_raster);
        let _ = writeln!(out, "Supported SCS: {:?} kHz", info.supported_scs);
        let _ = write!(out, "Supported Bandwidths: {:?} MHz", info.supported_bandwidths);
        Ok(out)
    }
}
