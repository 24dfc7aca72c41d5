//! Command line interface for textbayes.

pub mod args;
pub mod commands;
pub mod output;
