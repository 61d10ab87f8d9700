//! Task files: which grid to sample, which interval to integrate, where to log and save.
//!
//! A task file is TOML with four optional sections; every key has a default:
//! ```toml
//! [logging]
//! level = "info"
//! console = true
//! file = "function_tree.log"
//!
//! [sampling]
//! start = 0.0
//! end = 3.141592653589793
//! num_values = 11
//!
//! [integration]
//! lower = 0.0
//! upper = 3.141592653589793
//! accuracy = 1000
//! gauss_degree = 10
//!
//! [output]
//! csv = "table.csv"
//! ```
use crate::Utils::logger::save_table_to_csv;
use crate::symbolic::function_errors::FunctionError;
use crate::symbolic::function_tree::MathFunction;
use log::info;
use simplelog::LevelFilter;
use std::f64::consts::PI;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use toml::{Table, Value};

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub level: LevelFilter,
    pub console: bool,
    pub file: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SamplingConfig {
    pub start: f64,
    pub end: f64,
    pub num_values: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationConfig {
    pub lower: f64,
    pub upper: f64,
    pub accuracy: u32,
    pub gauss_degree: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TaskConfig {
    pub logging: LoggingConfig,
    pub sampling: SamplingConfig,
    pub integration: IntegrationConfig,
    /// where to save the table of x, f(x), f'(x)
    pub csv: Option<String>,
}

impl Default for TaskConfig {
    fn default() -> Self {
        TaskConfig {
            logging: LoggingConfig {
                level: LevelFilter::Info,
                console: true,
                file: None,
            },
            sampling: SamplingConfig {
                start: 0.0,
                end: PI,
                num_values: 11,
            },
            integration: IntegrationConfig {
                lower: 0.0,
                upper: PI,
                accuracy: 1000,
                gauss_degree: 10,
            },
            csv: None,
        }
    }
}

impl FromStr for TaskConfig {
    type Err = FunctionError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let document: Table = content
            .parse()
            .map_err(|e: toml::de::Error| FunctionError::Config(e.to_string()))?;
        let mut config = TaskConfig::default();

        if let Some(logging) = section(&document, "logging")? {
            if let Some(level) = get_str(logging, "level")? {
                config.logging.level = level.parse().map_err(|_| {
                    FunctionError::Config(format!("unknown log level '{}'", level))
                })?;
            }
            if let Some(console) = get_bool(logging, "console")? {
                config.logging.console = console;
            }
            config.logging.file = get_str(logging, "file")?.map(String::from);
        }

        if let Some(sampling) = section(&document, "sampling")? {
            let s = &mut config.sampling;
            s.start = get_f64(sampling, "start")?.unwrap_or(s.start);
            s.end = get_f64(sampling, "end")?.unwrap_or(s.end);
            s.num_values = get_usize(sampling, "num_values")?.unwrap_or(s.num_values);
        }

        if let Some(integration) = section(&document, "integration")? {
            let i = &mut config.integration;
            i.lower = get_f64(integration, "lower")?.unwrap_or(i.lower);
            i.upper = get_f64(integration, "upper")?.unwrap_or(i.upper);
            if let Some(accuracy) = get_usize(integration, "accuracy")? {
                i.accuracy = u32::try_from(accuracy).map_err(|_| {
                    FunctionError::Config(format!("accuracy {} is too large", accuracy))
                })?;
            }
            i.gauss_degree = get_usize(integration, "gauss_degree")?.unwrap_or(i.gauss_degree);
        }

        if let Some(output) = section(&document, "output")? {
            config.csv = get_str(output, "csv")?.map(String::from);
        }

        config.validate()?;
        Ok(config)
    }
}

impl TaskConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FunctionError> {
        let content = fs::read_to_string(path.as_ref())?;
        content.parse()
    }

    fn validate(&self) -> Result<(), FunctionError> {
        if self.integration.accuracy == 0 {
            return Err(FunctionError::Config(
                "integration.accuracy must be at least 1".to_string(),
            ));
        }
        if self.sampling.num_values < 2 {
            return Err(FunctionError::Config(
                "sampling.num_values must be at least 2".to_string(),
            ));
        }
        let bounds = [
            self.sampling.start,
            self.sampling.end,
            self.integration.lower,
            self.integration.upper,
        ];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(FunctionError::Config("bounds must be finite".to_string()));
        }
        Ok(())
    }
}

fn section<'a>(document: &'a Table, name: &str) -> Result<Option<&'a Table>, FunctionError> {
    match document.get(name) {
        None => Ok(None),
        Some(Value::Table(table)) => Ok(Some(table)),
        Some(other) => Err(FunctionError::Config(format!(
            "[{}] must be a table, found {}",
            name,
            other.type_str()
        ))),
    }
}

fn type_error(key: &str, expected: &str, found: &Value) -> FunctionError {
    FunctionError::Config(format!(
        "'{}' must be {}, found {}",
        key,
        expected,
        found.type_str()
    ))
}

fn get_f64(table: &Table, key: &str) -> Result<Option<f64>, FunctionError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::Float(val)) => Ok(Some(*val)),
        Some(Value::Integer(val)) => Ok(Some(*val as f64)),
        Some(other) => Err(type_error(key, "a number", other)),
    }
}

fn get_usize(table: &Table, key: &str) -> Result<Option<usize>, FunctionError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::Integer(val)) => usize::try_from(*val)
            .map(Some)
            .map_err(|_| FunctionError::Config(format!("'{}' must not be negative", key))),
        Some(other) => Err(type_error(key, "an integer", other)),
    }
}

fn get_bool(table: &Table, key: &str) -> Result<Option<bool>, FunctionError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::Boolean(val)) => Ok(Some(*val)),
        Some(other) => Err(type_error(key, "a boolean", other)),
    }
}

fn get_str<'a>(table: &'a Table, key: &str) -> Result<Option<&'a str>, FunctionError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::String(val)) => Ok(Some(val.as_str())),
        Some(other) => Err(type_error(key, "a string", other)),
    }
}

/// What a task computed for one function.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskReport {
    pub function: String,
    pub derivative: String,
    pub samples: Vec<f64>,
    pub integral: f64,
    /// only when the number of subintervals is even
    pub simpson: Option<f64>,
    pub gauss_legendre: f64,
}

/// Samples, differentiates and integrates `function` as the task describes.
pub fn run_task(config: &TaskConfig, function: &MathFunction) -> Result<TaskReport, FunctionError> {
    let SamplingConfig {
        start,
        end,
        num_values,
    } = config.sampling;
    let IntegrationConfig {
        lower,
        upper,
        accuracy,
        gauss_degree,
    } = config.integration;

    info!("task for f(x) = {}", function);
    let derivative = function.derivative();
    info!("df/dx = {}", derivative);

    let samples = function.par_evaluate_on_linspace(start, end, num_values);
    info!("{} samples on [{}, {}]", samples.len(), start, end);

    let integral = function.integral(lower, upper, accuracy)?;
    let simpson = if accuracy % 2 == 0 {
        Some(function.simpson(lower, upper, accuracy)?)
    } else {
        None
    };
    let gauss_legendre = function.quad_gauss_legendre(lower, upper, gauss_degree)?;
    info!(
        "integral on [{}, {}]: {} (accuracy {}), Simpson {:?}, Gauss-Legendre {}",
        lower, upper, integral, accuracy, simpson, gauss_legendre
    );

    if let Some(filename) = &config.csv {
        save_table_to_csv(function, start, end, num_values, filename)?;
    }

    Ok(TaskReport {
        function: function.to_string(),
        derivative: derivative.to_string(),
        samples,
        integral,
        simpson,
        gauss_legendre,
    })
}
