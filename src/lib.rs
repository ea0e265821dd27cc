//! the crate gem5_sweep drives the gem5-aladdin accelerator simulator for an
//! external bayesian-optimization loop. there are 5 parts in the crate:
//!
//! - template: fills the accelerator header template with sweep parameters.
//! - toggle: selects the benchmark by commenting/uncommenting its block.
//! - runner: generates the design sweep and runs the benchmark as subprocesses.
//! - extract: scrapes cycle, power and area from the simulator stdout log.
//! - target: maps the scraped metrics and a selector to one scalar value.
//!
//! any failure on the simulate-and-extract path is collapsed to a `0.0`
//! result by the reporting step, so the optimizer always gets a number.
//!

pub mod cmd_args;
pub mod error;
pub mod extract;
pub mod report;
pub mod runner;
pub mod settings;
pub mod target;
pub mod template;
pub mod toggle;

pub use error::SweepError;
pub use extract::SimulationResult;
pub use report::SweepRecord;
pub use target::TargetSelector;
pub use template::{ParamValue, ParameterSet};
