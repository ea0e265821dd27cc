use clap::Parser;
use clap_complete::Shell;

/// Run a gem5-aladdin benchmark and report the target value
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Args {
    /// accelerator parameters as a json mapping, e.g. '{"cache_size": 16384}'
    #[clap(required_unless_present = "generator")]
    pub sim_params: Option<String>,

    /// targeted accelerator specification: cycle|power|area|P1|P2|P3|P4|P5
    #[clap(required_unless_present = "generator")]
    pub results_key: Option<String>,

    /// name of the directory where the simulator's production runs are saved
    #[clap(long)]
    pub sim_name: Option<String>,

    /// filename to save the scalar result
    #[clap(long, default_value = "gem5_sim_res.txt")]
    pub results_file: String,

    /// extra config files merged on top of configs/default.toml
    #[clap(short, long)]
    pub config_names: Vec<String>,

    /// generate a shell completion file
    #[clap(long, arg_enum)]
    pub generator: Option<Shell>,
}
