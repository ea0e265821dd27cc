use std::{fs, path::Path};

use log::warn;
use serde::Serialize;

use crate::{
    error::SweepError,
    extract::SimulationResult,
    settings::{NormalizationSettings, Settings},
    target::{self, TargetSelector},
};

/// the full record of one driver invocation, written as json next to the
/// scalar result file for later inspection
#[derive(Debug, Serialize)]
pub struct SweepRecord {
    pub settings: Option<Settings>,
    pub results: Option<SimulationResult>,
    pub target: Option<f64>,
    pub simulation_time: String,
}

impl SweepRecord {
    pub fn new() -> Self {
        SweepRecord {
            settings: None,
            results: None,
            target: None,
            simulation_time: String::new(),
        }
    }
}

impl Default for SweepRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// write the scalar target value for the optimizer to pick up.
///
/// a failed sweep collapses to a literal `0.0` here, after its actual kind
/// has been logged; the optimizer only ever sees the scalar. the returned
/// value is whatever was written.
pub fn report_target(
    outcome: Result<SimulationResult, SweepError>,
    selector: TargetSelector,
    norm: &NormalizationSettings,
    results_file: &Path,
) -> Result<f64, SweepError> {
    let value = match outcome {
        Ok(results) => target::target_value(&results, selector, norm),
        Err(e) => {
            warn!("sweep failed ({}), reporting 0.0", e);
            0.0
        }
    };
    // {:?} keeps the trailing `.0` the optimizer side expects
    fs::write(results_file, format!("{:?}", value))?;
    Ok(value)
}
