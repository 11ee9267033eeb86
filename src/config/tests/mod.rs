//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Layer composition shared by the other modules
//! - `cli_args`: Loading from command-line arguments and the environment
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode and derived value tests

mod helpers;
mod operation_mode;
