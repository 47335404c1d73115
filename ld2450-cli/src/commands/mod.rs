//! CLI subcommand implementations

pub mod decode;
pub mod scan;
pub mod synth;
