use std::{
    env, fs,
    path::{Path, PathBuf},
    process::Command,
};

use chrono::Local;
use log::{debug, info};

use crate::{
    error::SweepError,
    extract::{self, SimulationResult},
    settings::Settings,
    template::{self, ParameterSet},
    toggle,
};

const BENCH_DIR_NAME: &str = "benchmarks";
const SWEEPS_DIR_NAME: &str = "sweeps";
const DESIGN_SWEEPS_PY: &str = "generate_design_sweeps.py";
const MACHSUITE_PY: &str = "machsuite.py";
const BENCH_OUT_PARTIAL_PATH: &str = "0";
const BENCH_OUT_FILE: &str = "outputs/stdout";

const ALADDIN_HOME_ENV: &str = "ALADDIN_HOME";

/// the directory layout of the gem5-aladdin checkout, resolved once from the
/// `ALADDIN_HOME` environment variable
#[derive(Debug)]
pub struct SweepPaths {
    pub sweeps: PathBuf,
    pub benchmarks: PathBuf,
    pub design_script: PathBuf,
    pub machsuite: PathBuf,
}

impl SweepPaths {
    /// resolve the toolchain layout. the gem5 root sits two levels above
    /// the aladdin submodule.
    pub fn from_env() -> Result<Self, SweepError> {
        let aladdin_home = env::var(ALADDIN_HOME_ENV)
            .map_err(|_| SweepError::Config(format!("{} is not set", ALADDIN_HOME_ENV)))?;
        let gem5_root = Path::new(&aladdin_home).join("..").join("..");
        let sweeps = gem5_root.join(SWEEPS_DIR_NAME);
        let benchmarks = sweeps.join(BENCH_DIR_NAME);
        let design_script = sweeps.join(DESIGN_SWEEPS_PY);
        let machsuite = benchmarks.join(MACHSUITE_PY);
        Ok(SweepPaths {
            sweeps,
            benchmarks,
            design_script,
            machsuite,
        })
    }

    /// the directory under sweeps/ that this run's simulator output goes to
    pub fn sim_output_dir(&self, sim_name: &str) -> PathBuf {
        self.sweeps.join(sim_name)
    }
}

/// a fresh sweep directory name for runs where the caller did not pick one
pub fn default_sim_name() -> String {
    format!("sim_{}", Local::now().format("%Y-%m-%d-%H-%M-%S%.6f"))
}

/// execute one benchmark with the simulator and collect its results.
///
/// templates the accelerator header under the sweeps benchmark directory,
/// selects the benchmark, generates the design sweep and runs it, then
/// scrapes the metrics from the simulator stdout log. fully sequential; each
/// subprocess blocks until it finishes. every failure along this path comes
/// back as a `SweepError` for the reporting step to collapse.
pub fn run_sweep(
    params: &ParameterSet,
    settings: &Settings,
    paths: &SweepPaths,
    sim_output_dir: &Path,
) -> Result<SimulationResult, SweepError> {
    // the header file lives in the shared benchmarks directory, so give it
    // a name unique to this invocation
    let header_name = format!("header-{}.xe", Local::now().format("%Y-%m-%d-%H-%M-%S%.6f"));
    let header_path = paths.benchmarks.join(&header_name);

    template::create_header(
        params,
        &header_path,
        sim_output_dir,
        Path::new(&settings.template_path),
    )?;

    // comment/uncomment the required benchmark
    toggle::comment_uncomment(&paths.machsuite, &settings.benchmark_name)?;

    // the sweep generator expects to be executed from the sweeps directory
    // with the header path given relative to it
    info!("generating design sweep for {}", settings.benchmark_name);
    let status = Command::new("python2")
        .current_dir(&paths.sweeps)
        .arg(&paths.design_script)
        .arg(Path::new(BENCH_DIR_NAME).join(&header_name))
        .status();

    // the temporary header is not needed once the sweep is generated
    if header_path.exists() {
        fs::remove_file(&header_path)?;
    }

    let status = status?;
    if !status.success() {
        return Err(SweepError::Subprocess {
            command: DESIGN_SWEEPS_PY.to_string(),
            code: status.code(),
        });
    }

    // run the benchmark from inside its generated design point directory
    let bench_path = sim_output_dir
        .join(&settings.benchmark_name)
        .join(BENCH_OUT_PARTIAL_PATH);
    debug!("running benchmark in {}", bench_path.display());
    let status = Command::new("sh")
        .current_dir(&bench_path)
        .arg("run.sh")
        .status()?;
    if !status.success() {
        return Err(SweepError::Subprocess {
            command: "run.sh".to_string(),
            code: status.code(),
        });
    }

    extract::collect_results(&bench_path.join(BENCH_OUT_FILE))
}

#[cfg(test)]
mod runner_test {
    use super::*;

    // both cases touch the same environment variable, so keep them in one test
    #[test]
    fn test_paths_from_env() {
        env::remove_var(ALADDIN_HOME_ENV);
        let err = SweepPaths::from_env().unwrap_err();
        assert!(matches!(err, SweepError::Config(_)));

        env::set_var(ALADDIN_HOME_ENV, "/opt/gem5-aladdin/src/aladdin");
        let paths = SweepPaths::from_env().unwrap();
        assert_eq!(
            paths.sweeps,
            Path::new("/opt/gem5-aladdin/src/aladdin/../../sweeps")
        );
        assert_eq!(paths.machsuite, paths.benchmarks.join("machsuite.py"));
        assert_eq!(
            paths.sim_output_dir("sim_abc"),
            paths.sweeps.join("sim_abc")
        );
        env::remove_var(ALADDIN_HOME_ENV);
    }

    #[test]
    fn test_default_sim_name_unique() {
        let a = default_sim_name();
        let b = default_sim_name();
        assert!(a.starts_with("sim_"));
        assert_ne!(a, b);
    }
}
