use std::{fs, path::Path};

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::error::SweepError;

lazy_static! {
    static ref CYCLE_RE: Regex = Regex::new(r"Cycle : (.*) cycles").unwrap();
    static ref POWER_RE: Regex = Regex::new(r"Avg Power: (.*) mW").unwrap();
    static ref AREA_RE: Regex = Regex::new(r"Total Area: (.*) uM").unwrap();
}

/// the metrics scraped from one simulator run. built once per run and never
/// modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    pub cycle: u64,
    /// average power in milliwatts
    pub power: f64,
    /// total area in square micrometers
    pub area: f64,
}

/// collect the results from a simulation run.
///
/// scans the simulator stdout log for the cycle count, average power and
/// total area lines. only the first occurrence of each pattern is used.
/// # Arguments
/// * `results_file_path` - the simulator stdout log
/// # Return
/// * the parsed metrics, or a parse error naming the first missing field
pub fn collect_results(results_file_path: &Path) -> Result<SimulationResult, SweepError> {
    let contents = fs::read_to_string(results_file_path)?;

    let cycle = first_match(&CYCLE_RE, &contents, "cycle")?
        .parse::<u64>()
        .map_err(|_| SweepError::Parse { field: "cycle" })?;

    let power = first_match(&POWER_RE, &contents, "power")?
        .parse::<f64>()
        .map_err(|_| SweepError::Parse { field: "power" })?;

    let area = first_match(&AREA_RE, &contents, "area")?
        .parse::<f64>()
        .map_err(|_| SweepError::Parse { field: "area" })?;

    Ok(SimulationResult { cycle, power, area })
}

fn first_match<'a>(
    re: &Regex,
    contents: &'a str,
    field: &'static str,
) -> Result<&'a str, SweepError> {
    re.captures(contents)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
        .ok_or(SweepError::Parse { field })
}
