use crate::symbolic::function_errors::FunctionError;
use crate::symbolic::function_tree::MathFunction;
use crate::symbolic::utils::linspace;
use chrono::Local;
use csv::Writer;
use log::info;
use simplelog::*;
use std::fs::File;
use std::io::Write;

/// Sets up the global logger: terminal output and/or a log file.
///
/// A second call is harmless, the logger that was installed first stays in place.
///
/// # Errors
/// `Io` when the log file cannot be created; nothing is installed in that case.
pub fn init_logger(
    level: LevelFilter,
    log_to_console: bool,
    log_to_file: Option<&str>,
) -> Result<(), FunctionError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    // Console logger
    if log_to_console {
        loggers.push(TermLogger::new(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }

    // File logger
    if let Some(filename) = log_to_file {
        let file = File::create(filename)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
    Ok(())
}

/// log file name stamped with the current date and time
pub fn default_log_file_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("function_tree_{}.log", date_and_time)
}

/// Samples `x`, `f(x)` and `f'(x)` on a linspace.
pub fn function_table(
    function: &MathFunction,
    start: f64,
    end: f64,
    num_values: usize,
) -> Vec<[f64; 3]> {
    let derivative = function.derivative();
    linspace(start, end, num_values)
        .into_iter()
        .map(|x| [x, function.evaluate(x), derivative.evaluate(x)])
        .collect()
}

/// Writes the table of `function_table` as tab separated text with a header line.
pub fn save_table_to_file(
    function: &MathFunction,
    start: f64,
    end: f64,
    num_values: usize,
    filename: &str,
) -> Result<(), FunctionError> {
    let mut file = File::create(filename)?;
    writeln!(file, "# f(x) = {}", function)?;
    writeln!(file, "x\tf(x)\tdf/dx")?;
    for row in function_table(function, start, end, num_values) {
        writeln!(file, "{}\t{}\t{}", row[0], row[1], row[2])?;
    }
    info!("table of {} saved to {}", function, filename);
    Ok(())
}

/// Writes the table of `function_table` as CSV with the header `x,f(x),df/dx`.
pub fn save_table_to_csv(
    function: &MathFunction,
    start: f64,
    end: f64,
    num_values: usize,
    filename: &str,
) -> Result<(), FunctionError> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(["x", "f(x)", "df/dx"])?;
    for row in function_table(function, start, end, num_values) {
        writer.write_record(row.iter().map(|val| val.to_string()))?;
    }

    writer.flush()?;
    info!("table of {} saved to {}", function, filename);
    Ok(())
}
