//! Cross-crate integration tests
//!
//! Configuration, logging and the calculator used together the way the
//! command line tool wires them.

use std::sync::Arc;
use std::thread;

use nrfreq_calc::{get_gscn_range, CalcError, FrequencyCalculator};
use nrfreq_common::{CalculatorConfig, FrequencyRange, LogLevel};

use crate::test_fixtures::N77_POINT_A_CASES;
use crate::test_utils::{init_test_logging, TestResult};

#[test]
fn test_config_precision_formats_reference_frequency() -> TestResult {
    let config = CalculatorConfig::from_yaml("log_level: debug\nfrequency_precision: 3\n")?;
    assert_eq!(config.log_level, LogLevel::Debug);

    let calc = FrequencyCalculator::new();
    let point_a = calc.calculate_point_a_arfcn("n77", 30, 100, 650000)?;
    let freq = calc.arfcn_to_frequency("n77", point_a)?;
    assert_eq!(format!("{:.*}", config.frequency_precision, freq), "3400.860");
    Ok(())
}

#[test]
fn test_calculator_shared_across_threads() {
    init_test_logging();
    let calc = Arc::new(FrequencyCalculator::new());

    let handles: Vec<_> = N77_POINT_A_CASES
        .iter()
        .map(|case| {
            let calc = Arc::clone(&calc);
            let case = *case;
            thread::spawn(move || {
                let point_a = calc
                    .calculate_point_a_arfcn(case.band, case.scs_khz, case.bandwidth_mhz, case.center_arfcn)
                    .unwrap();
                (point_a, case.point_a_arfcn)
            })
        })
        .collect();

    for handle in handles {
        let (actual, expected) = handle.join().unwrap();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_gscn_range_keyed_by_frequency_range_name() {
    let range = get_gscn_range(FrequencyRange::Fr1.as_str()).unwrap();
    assert_eq!(range.frequency_range, FrequencyRange::Fr1);
    assert_eq!(range.intervals[0].gscn_min, 7499);

    assert_eq!(
        get_gscn_range(FrequencyRange::Fr2.as_str()),
        Err(CalcError::UnknownFrequencyRange("FR2".to_string()))
    );
}

#[test]
fn test_declared_operations_not_implemented() {
    let calc = FrequencyCalculator::new();
    assert!(matches!(
        calc.calculate_ssb_candidates("n77", 30, 100, 650000, 0),
        Err(CalcError::NotImplemented(_))
    ));
    assert!(matches!(calc.arfcn_to_gscn("n77", 650000), Err(CalcError::NotImplemented(_))));
    assert!(matches!(calc.gscn_to_arfcn("n77", 7711), Err(CalcError::NotImplemented(_))));
}
