use chrono::Local;
use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use gem5_sweep::{
    cmd_args::Args, report, runner, settings::Settings, ParameterSet, SweepRecord, TargetSelector,
};
use std::{io, path::Path};

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(log::Level::Info)?;
    let start_time = std::time::Instant::now();

    let mut config_names = vec![String::from("configs/default.toml")];
    let args = Args::parse();
    if let Some(generator) = args.generator {
        let mut cmd = Args::command();
        eprintln!("Generating completion file for {:?}...", generator);
        print_completions(generator, &mut cmd);
        return Ok(());
    }
    println!("{:?}", args);
    let margs = args.config_names;

    // config_names append args
    for arg in margs.into_iter() {
        config_names.push(arg);
    }

    let mut record = SweepRecord::new();
    let settings = Settings::new(config_names)?;
    record.settings = Some(settings.clone());
    println!("{}", serde_json::to_string_pretty(&settings)?);
    // create the folder for output
    std::fs::create_dir_all("output")?;

    // a bad parameter string or selector is a caller error and must surface,
    // unlike failures of the sweep itself
    let sim_params = args.sim_params.ok_or("sim_params is required")?;
    let results_key = args.results_key.ok_or("results_key is required")?;
    let params: ParameterSet = serde_json::from_str(&sim_params)?;
    let selector: TargetSelector = results_key.parse()?;

    let sim_name = match args.sim_name {
        Some(name) => name.trim().to_string(),
        None => runner::default_sim_name(),
    };

    // a missing toolchain root is a fatal configuration error, not a sweep
    // failure, so it surfaces here
    let paths = runner::SweepPaths::from_env()?;
    let sim_output_dir = paths.sim_output_dir(&sim_name);

    // execute the benchmark with the simulator. if it fails at some point
    // the reporting step writes 0.0 instead.
    let outcome = runner::run_sweep(&params, &settings, &paths, &sim_output_dir);
    record.results = outcome.as_ref().ok().copied();

    let value = report::report_target(
        outcome,
        selector,
        &settings.normalization,
        Path::new(&args.results_file),
    )?;
    record.target = Some(value);

    // record the simulation time
    let simulation_time = start_time.elapsed().as_secs();
    let seconds = simulation_time % 60;
    let minutes = (simulation_time / 60) % 60;
    let hours = (simulation_time / 60) / 60;
    record.simulation_time = format!("{}:{}:{}", hours, minutes, seconds);

    let current_time: String = Local::now().format("%Y-%m-%d-%H-%M-%S%.6f").to_string();
    let output_path = format!("output/{}.json", current_time);

    println!("{}", serde_json::to_string_pretty(&record)?);
    // write json of the record to output_path
    std::fs::write(output_path, serde_json::to_string_pretty(&record)?)?;
    Ok(())
}
