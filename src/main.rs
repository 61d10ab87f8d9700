#![allow(non_snake_case)]
use RustedFunctionTree::Examples::function_tree_examples::{demo_function, fn_examples};
use RustedFunctionTree::Utils::logger::{default_log_file_name, init_logger};
use RustedFunctionTree::Utils::task::{TaskConfig, run_task};
use log::{error, info};
use simplelog::LevelFilter;
use std::env;
use std::process::ExitCode;

fn usage() {
    println!("usage: RustedFunctionTree [example number]");
    println!("       RustedFunctionTree --config <task.toml> [function name]");
    println!("function names: sin, cos, mixed, poly_cos, chain");
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--config") => {
            let Some(path) = args.get(1) else {
                usage();
                return ExitCode::FAILURE;
            };
            let config = match TaskConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("cannot read task {}: {}", path, e);
                    return ExitCode::FAILURE;
                }
            };
            if let Err(e) = init_logger(
                config.logging.level,
                config.logging.console,
                config.logging.file.as_deref(),
            ) {
                eprintln!("cannot set up logging: {}", e);
                return ExitCode::FAILURE;
            }
            let name = args.get(2).map(String::as_str).unwrap_or("mixed");
            let Some(function) = demo_function(name) else {
                error!("unknown function {}", name);
                usage();
                return ExitCode::FAILURE;
            };
            match run_task(&config, &function) {
                Ok(report) => {
                    info!("{:?}", report);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!("task failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Some("--help") | Some("-h") => {
            usage();
            ExitCode::SUCCESS
        }
        other => {
            let example = match other.map(str::parse::<usize>) {
                None => 0,
                Some(Ok(example)) => example,
                Some(Err(_)) => {
                    usage();
                    return ExitCode::FAILURE;
                }
            };
            let log_file = default_log_file_name();
            if let Err(e) = init_logger(LevelFilter::Info, true, Some(&log_file)) {
                eprintln!("cannot create log file {}: {}", log_file, e);
            }
            info!("running example {}", example);
            fn_examples(example);
            ExitCode::SUCCESS
        }
    }
}
