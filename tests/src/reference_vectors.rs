//! Reference vector tests
//!
//! Exact ARFCN results and two-decimal frequencies for the n77 (TDD) and
//! n1 (FDD) reference carriers, plus the validation failures.

use nrfreq_calc::{get_max_rb, CalcError, FrequencyCalculator};
use nrfreq_common::DuplexMode;

use crate::test_fixtures::{ARFCN_FREQUENCY_CASES, N1_FDD_CASES, N77_POINT_A_CASES};
use crate::test_utils::{assert_frequency, init_test_logging};

// ============================================================================
// ARFCN -> frequency
// ============================================================================

#[test]
fn test_arfcn_to_frequency_reference_values() {
    init_test_logging();
    let calc = FrequencyCalculator::new();

    for &(band, arfcn, expected) in ARFCN_FREQUENCY_CASES {
        let freq = calc.arfcn_to_frequency(band, arfcn).unwrap();
        assert_frequency(freq, expected);
    }
}

#[test]
fn test_grid_is_affine() {
    let calc = FrequencyCalculator::new();

    // 5 kHz steps below 3 GHz, 15 kHz steps above
    for (band, step_mhz) in [("n1", 0.005), ("n77", 0.015)] {
        let f0 = calc.arfcn_to_frequency(band, 500_000).unwrap();
        let f1 = calc.arfcn_to_frequency(band, 500_001).unwrap();
        let f1000 = calc.arfcn_to_frequency(band, 501_000).unwrap();
        assert!((f1 - f0 - step_mhz).abs() < 1e-9);
        assert!((f1000 - f0 - 1000.0 * step_mhz).abs() < 1e-6);
    }
}

// ============================================================================
// Point A
// ============================================================================

#[test]
fn test_point_a_n77_reference_cases() {
    init_test_logging();
    let calc = FrequencyCalculator::new();

    for case in N77_POINT_A_CASES {
        let point_a = calc
            .calculate_point_a_arfcn(case.band, case.scs_khz, case.bandwidth_mhz, case.center_arfcn)
            .unwrap();
        assert_eq!(point_a, case.point_a_arfcn, "{case:?}");

        // Point A sits half the RB grid below the center
        let n_rb = get_max_rb(case.scs_khz, case.bandwidth_mhz).unwrap();
        let half_grid_mhz = f64::from(n_rb) * 12.0 * f64::from(case.scs_khz) / 2.0 / 1000.0;
        let center = calc.arfcn_to_frequency(case.band, case.center_arfcn).unwrap();
        let freq = calc.arfcn_to_frequency(case.band, point_a).unwrap();
        assert_frequency(freq, center - half_grid_mhz);
    }
}

#[test]
fn test_point_a_n77_100mhz_frequency() {
    let calc = FrequencyCalculator::new();
    let point_a = calc.calculate_point_a_arfcn("n77", 30, 100, 650000).unwrap();
    assert_eq!(point_a, 646724);
    assert_frequency(calc.arfcn_to_frequency("n77", point_a).unwrap(), 3400.86);
}

#[test]
fn test_point_a_n1_fdd_reference_cases() {
    init_test_logging();
    let calc = FrequencyCalculator::new();

    for case in N1_FDD_CASES {
        let (dl, ul) = calc
            .calculate_point_a_arfcn_fdd(
                case.band,
                case.scs_khz,
                case.bandwidth_mhz,
                case.dl_center_arfcn,
                case.ul_center_arfcn,
            )
            .unwrap();
        assert_eq!(dl, case.dl_point_a_arfcn, "{case:?}");
        assert_eq!(ul, case.ul_point_a_arfcn, "{case:?}");
        assert_frequency(calc.arfcn_to_frequency(case.band, dl).unwrap(), case.dl_point_a_freq);
        assert_frequency(calc.arfcn_to_frequency(case.band, ul).unwrap(), case.ul_point_a_freq);
    }
}

#[test]
fn test_point_a_every_supported_combination() {
    let calc = FrequencyCalculator::new();

    for name in nrfreq_calc::band_names() {
        let band = calc.get_band_info(name).unwrap();
        let center = band.arfcn_offset + 30_000;
        for &scs in band.supported_scs {
            for &bw in band.supported_bandwidths {
                match calc.calculate_point_a_arfcn(name, scs, bw, center) {
                    // Point A always lies below the center
                    Ok(point_a) => assert!(point_a < center, "{name} {scs} {bw}"),
                    // Band allows both values but the pair is not standardized
                    Err(CalcError::UnsupportedBandwidth { .. }) => {}
                    Err(e) => panic!("{name} SCS={scs} BW={bw}: {e}"),
                }
            }
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_invalid_inputs() {
    let calc = FrequencyCalculator::new();

    assert!(matches!(
        calc.calculate_point_a_arfcn("n999", 30, 100, 650000),
        Err(CalcError::UnknownBand(_))
    ));
    assert!(matches!(
        calc.calculate_point_a_arfcn("n77", 25, 100, 650000),
        Err(CalcError::InvalidScs { scs_khz: 25, .. })
    ));
    assert!(matches!(
        calc.calculate_point_a_arfcn("n77", 30, 150, 650000),
        Err(CalcError::InvalidBandwidth { bandwidth_mhz: 150, .. })
    ));
    // 5 MHz is not in n77's bandwidth set (and has no 60 kHz RB entry)
    assert!(matches!(
        calc.calculate_point_a_arfcn("n77", 60, 5, 650000),
        Err(CalcError::InvalidBandwidth { bandwidth_mhz: 5, .. })
    ));
    assert!(matches!(
        calc.arfcn_to_frequency("n999", 650000),
        Err(CalcError::UnknownBand(_))
    ));
}

#[test]
fn test_band_info_reference() {
    let calc = FrequencyCalculator::new();

    let n1 = calc.get_band_info("n1").unwrap();
    assert_eq!(n1.name, "n1");
    assert_eq!(n1.duplex_mode, DuplexMode::Fdd);
    assert_eq!(n1.delta_f_global, 5.0);

    let n77 = calc.get_band_info("n77").unwrap();
    assert_eq!(n77.name, "n77");
    assert_eq!(n77.duplex_mode, DuplexMode::Tdd);
    assert_eq!(n77.frequency_range.as_str(), "FR1");
}

#[test]
fn test_max_rb_reference() {
    assert_eq!(get_max_rb(30, 100), Ok(273));
    assert_eq!(get_max_rb(15, 50), Ok(270));
    assert_eq!(get_max_rb(60, 100), Ok(135));
}
