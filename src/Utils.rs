//! different utility modules used throughout the project
/// tiny module to set up logging and save tables of a function and its derivative into files
pub mod logger;
/// task files in TOML: sampling grid, integration interval, logging and output options; and the task runner
pub mod task;
