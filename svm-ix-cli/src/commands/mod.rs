//! Command implementations for the svm-ix CLI

pub mod build;
pub mod decode;
pub mod derive;
