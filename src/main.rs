mod input;
mod logging;
mod model;
mod report;
mod scoring;

use std::path::PathBuf;

use crate::input::{find_sessions_path, load_sessions};
use crate::model::dynamics::UpdateDynamics;
use crate::model::session::Experiment;
use crate::report::{build_summary, write_summary_json};
use crate::scoring::batch::{BatchOptions, score_batch};

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let config = parse_args(&args)?;

    let sessions_path = find_sessions_path(&config.input_dir).map_err(|e| e.to_string())?;
    let bundle = load_sessions(&sessions_path).map_err(|e| e.to_string())?;

    let mut experiments: Vec<Experiment> = Vec::with_capacity(bundle.sessions.len());
    let mut agents: Vec<&dyn UpdateDynamics> = Vec::with_capacity(bundle.sessions.len());
    let mut n_parameters: Vec<u32> = Vec::with_capacity(bundle.sessions.len());
    for session in &bundle.sessions {
        experiments.push(session.experiment.clone());
        agents.push(&session.dynamics);
        n_parameters.push(session.n_parameters);
    }

    std::fs::create_dir_all(&config.out_dir).map_err(|e| e.to_string())?;

    let options = BatchOptions {
        verbose: config.verbose,
        save: Some(config.out_dir.join(&config.save_name)),
    };
    let report = score_batch(&experiments, &agents, &n_parameters, &options)
        .map_err(|e| e.to_string())?;

    let summary = build_summary(&report);
    let summary_path = config.out_dir.join("summary.json");
    write_summary_json(&summary, &summary_path).map_err(|e| e.to_string())?;

    Ok(())
}

#[derive(Debug, Clone)]
struct RunConfig {
    input_dir: PathBuf,
    out_dir: PathBuf,
    save_name: String,
    verbose: bool,
}

fn parse_args(args: &[String]) -> Result<RunConfig, String> {
    if args.is_empty() {
        return Err("missing command".to_string());
    }
    let mut args = args.to_vec();
    let cmd = args.remove(0);
    if cmd != "run" {
        return Err("unsupported command".to_string());
    }

    let mut input_dir: Option<PathBuf> = None;
    let mut out_dir: Option<PathBuf> = None;
    let mut save_name = "scores.csv".to_string();
    let mut verbose = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                if i >= args.len() {
                    return Err("missing value for --input".to_string());
                }
                input_dir = Some(PathBuf::from(&args[i]));
            }
            "--out" => {
                i += 1;
                if i >= args.len() {
                    return Err("missing value for --out".to_string());
                }
                out_dir = Some(PathBuf::from(&args[i]));
            }
            "--save" => {
                i += 1;
                if i >= args.len() {
                    return Err("missing value for --save".to_string());
                }
                save_name = args[i].clone();
            }
            "--verbose" => {
                verbose = true;
            }
            other => {
                return Err(format!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(RunConfig {
        input_dir: input_dir.ok_or_else(|| "missing --input".to_string())?,
        out_dir: out_dir.ok_or_else(|| "missing --out".to_string())?,
        save_name,
        verbose,
    })
}
