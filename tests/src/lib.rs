//! Integration test framework for nrfreq
#![allow(missing_docs)]
//!
//! This crate provides reference vectors and helpers for testing the band
//! tables, the calculator and the shared configuration together.
//!
//! # Components
//!
//! - [`test_fixtures`] - Known-good ARFCN / frequency / Point A values
//! - [`test_utils`] - Logging setup and frequency assertions
//!
//! # Test Categories
//!
//! 1. **Reference vectors** - Exact Point A ARFCNs and two-decimal frequencies
//! 2. **Validation** - Error kinds for invalid band, SCS and bandwidth input
//! 3. **Cross-crate** - Configuration, logging and calculator used together


#[cfg(test)]
mod cross_crate_integration;
#[cfg(test)]
mod reference_vectors;

pub use test_fixtures::{FddPointACase, PointACase, ARFCN_FREQUENCY_CASES, N1_FDD_CASES, N77_POINT_A_CASES};
pub use test_utils::{almost_equal, assert_frequency, init_test_logging, TestResult, FREQUENCY_PLACES};
