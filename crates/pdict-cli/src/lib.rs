//! Library side of the polishdict command-line tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
