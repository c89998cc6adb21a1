//! nr-freq: 5G NR Point A and ARFCN calculator

mod report;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use nrfreq_common::{init_logging, CalculatorConfig, LogLevel};
use tracing::debug;

use report::Reporter;

const SUPPORTED_SCS_KHZ: [u32; 4] = [15, 30, 60, 120];

#[derive(Parser, Debug)]
#[command(name = "nr-freq")]
#[command(author, version, about = "5G NR Frequency Calculator", long_about = None)]
pub struct Args {
    /// YAML configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (overrides the configuration file)
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Calculate Point A for a single (TDD) carrier
    #[command(name = "point-a")]
    PointA {
        /// 5G NR band (e.g. n77)
        #[arg(long)]
        band: String,
        /// Subcarrier spacing in kHz
        #[arg(long, value_parser = parse_scs)]
        scs: u32,
        /// Channel bandwidth in MHz
        #[arg(long)]
        bandwidth: u32,
        /// Center ARFCN
        #[arg(long = "center-arfcn")]
        center_arfcn: i64,
    },

    /// Calculate DL and UL Point A for an FDD carrier
    #[command(name = "point-a-fdd")]
    PointAFdd {
        /// 5G NR band (e.g. n1)
        #[arg(long)]
        band: String,
        /// Subcarrier spacing in kHz
        #[arg(long, value_parser = parse_scs)]
        scs: u32,
        /// Channel bandwidth in MHz
        #[arg(long)]
        bandwidth: u32,
        /// DL center ARFCN
        #[arg(long = "dl-center-arfcn")]
        dl_center_arfcn: i64,
        /// UL center ARFCN
        #[arg(long = "ul-center-arfcn")]
        ul_center_arfcn: i64,
    },

    /// Convert an ARFCN to frequency
    Convert {
        /// 5G NR band (e.g. n77)
        #[arg(long)]
        band: String,
        /// ARFCN to convert
        #[arg(long)]
        arfcn: i64,
    },

    /// Show band information
    #[command(name = "band-info")]
    BandInfo {
        /// 5G NR band (e.g. n77)
        #[arg(long)]
        band: String,
    },
}

fn parse_scs(s: &str) -> Result<u32, String> {
    let scs: u32 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if SUPPORTED_SCS_KHZ.contains(&scs) {
        Ok(scs)
    } else {
        Err(format!("SCS must be one of {:?} kHz", SUPPORTED_SCS_KHZ))
    }
}

fn main() -> ExitCode {
    ExitCode::from(exit_status(run(Args::parse()), &mut std::io::stderr()))
}

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Maps the outcome of a run to the process exit status, printing a failure
/// as a single `Error: ...` line.
fn exit_status(result: Result<()>, stderr: &mut impl Write) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let _ = writeln!(stderr, "Error: {:#}", e);
            EXIT_FAILURE
        }
    }
}

fn load_config(args: &Args) -> Result<CalculatorConfig> {
    let mut config = match &args.config {
        Some(path) => CalculatorConfig::from_yaml_file(path)
            .with_context(|| format!("could not load config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    init_logging(config.log_level);
    debug!(?config, "configuration loaded");

    let Some(command) = args.command else {
        Args::command().print_help()?;
        println!();
        return Ok(());
    };

    println!("{}", execute(&command, &config)?);
    Ok(())
}

fn execute(command: &Command, config: &CalculatorConfig) -> Result<String> {
    let reporter = Reporter::new(config.frequency_precision);
    let output = match command {
        Command::PointA {
            band,
            scs,
            bandwidth,
            center_arfcn,
        } => reporter.point_a(band, *scs, *bandwidth, *center_arfcn)?,
        Command::PointAFdd {
            band,
            scs,
            bandwidth,
            dl_center_arfcn,
            ul_center_arfcn,
        } => reporter.point_a_fdd(band, *scs, *bandwidth, *dl_center_arfcn, *ul_center_arfcn)?,
        Command::Convert { band, arfcn } => reporter.convert(band, *arfcn)?,
        Command::BandInfo { band } => reporter.band_info(band)?,
    };
    Ok(output)
}
