//! CLI subcommands.

pub mod decode;
pub mod info;
