//! svm-ix CLI library
//!
//! Command handlers are exposed so they can be driven without a process.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
