use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use itertools::Itertools;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::SweepError;

/// the output-directory placeholder token inside the template file
const OUTPUT_DIR_TOKEN: &str = "$OUTPUT_DIR";
/// the marker line replaced by the generated `set` lines
const INSERT_MARKER: &str = "# Insert here\n";

lazy_static! {
    /// the accelerator parameters the sweep generator understands; keys
    /// outside this list are silently dropped from the header
    static ref AVAILABLE_PARAMS: HashSet<&'static str> = HashSet::from([
        "cycle_time",
        "pipelining",
        "cache_size",
        "cache_assoc",
        "cache_hit_latency",
        "cache_line_sz",
        "cache_queue_size",
        "cache_bandwith",
        "tlb_hit_latency",
        "tlb_miss_latency",
        "tlb_page_size",
        "tlb_entries",
        "tlb_max_outstanding_walks",
        "tlb_assoc",
        "tlb_bandwidth",
        "l2cache_size",
        "enable_l2",
        "pipelined_dma",
        "ready_mode",
        "ignore_cache_flush",
    ]);
}

/// a single accelerator parameter value as supplied by the optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // the sweep generator expects numeric flags
            ParamValue::Bool(b) => write!(f, "{}", *b as u8),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(v) => write!(f, "{}", v),
        }
    }
}

pub type ParameterSet = HashMap<String, ParamValue>;

/// prepare a simulator header file based on a template.
///
/// reads the template, points the simulator at `sim_output_dir` and replaces
/// the insertion marker with one `set <name> <value>` line per recognized
/// parameter. the emitted lines are sorted by parameter name so the output
/// is reproducible.
/// # Arguments
/// * `params` - the accelerator parameters for this run
/// * `header_path` - where the generated header is written
/// * `sim_output_dir` - directory the simulator should write its results to
/// * `template_path` - the template file
pub fn create_header(
    params: &ParameterSet,
    header_path: &Path,
    sim_output_dir: &Path,
    template_path: &Path,
) -> Result<(), SweepError> {
    let out_src = fs::read_to_string(template_path)?;

    // set the output directory for the simulator results
    let out_src = out_src.replace(OUTPUT_DIR_TOKEN, &sim_output_dir.to_string_lossy());

    // keep only the parameters the sweep generator knows about
    let params_src: String = params
        .iter()
        .filter(|(key, _)| AVAILABLE_PARAMS.contains(key.as_str()))
        .sorted_by(|a, b| a.0.cmp(b.0))
        .map(|(key, value)| format!(" set {} {}\n", key, value))
        .collect();

    let out_src = out_src.replace(INSERT_MARKER, &params_src);

    fs::write(header_path, out_src)?;
    Ok(())
}

#[cfg(test)]
mod template_test {
    use super::*;
    use std::path::PathBuf;

    const TEMPLATE: &str = "begin sweep\n output_dir $OUTPUT_DIR\n# Insert here\nend sweep\n";

    fn write_template(name: &str) -> PathBuf {
        std::fs::create_dir_all("test_data").unwrap();
        let path = PathBuf::from(format!("test_data/{}", name));
        std::fs::write(&path, TEMPLATE).unwrap();
        path
    }

    #[test]
    fn test_create_header() {
        let template = write_template("template_basic.xe");
        let header = PathBuf::from("test_data/header_basic");

        let mut params = ParameterSet::new();
        params.insert("cache_size".into(), ParamValue::Int(16384));
        params.insert("cycle_time".into(), ParamValue::Int(6));
        params.insert("enable_l2".into(), ParamValue::Bool(true));

        create_header(&params, &header, Path::new("/tmp/sim_out"), &template).unwrap();
        let out = std::fs::read_to_string(&header).unwrap();

        // placeholder fully replaced
        assert!(!out.contains("$OUTPUT_DIR"));
        assert!(out.contains(" output_dir /tmp/sim_out\n"));
        // one set line per key, sorted by name
        assert!(out.contains(" set cache_size 16384\n set cycle_time 6\n set enable_l2 1\n"));
        assert!(!out.contains("# Insert here"));

        std::fs::remove_file(template).unwrap();
        std::fs::remove_file(header).unwrap();
    }

    #[test]
    fn test_unknown_params_dropped() {
        let template = write_template("template_unknown.xe");
        let header = PathBuf::from("test_data/header_unknown");

        let mut params = ParameterSet::new();
        params.insert("tlb_entries".into(), ParamValue::Int(8));
        params.insert("warp_count".into(), ParamValue::Int(32));

        create_header(&params, &header, Path::new("/tmp/sim_out"), &template).unwrap();
        let out = std::fs::read_to_string(&header).unwrap();

        assert!(out.contains(" set tlb_entries 8\n"));
        assert!(!out.contains("warp_count"));

        std::fs::remove_file(template).unwrap();
        std::fs::remove_file(header).unwrap();
    }

    #[test]
    fn test_missing_template_is_io_error() {
        let params = ParameterSet::new();
        let err = create_header(
            &params,
            Path::new("test_data/never_written"),
            Path::new("/tmp/sim_out"),
            Path::new("test_data/no_such_template.xe"),
        )
        .unwrap_err();
        assert!(matches!(err, SweepError::Io(_)));
    }
}
