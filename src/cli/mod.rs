pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{AddArgs, CliArgs, Commands, OutputFormatArg};
pub use output::{OutputFormat, OutputFormatter};
