use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Registers planned source files into an Xcode project manifest
#[derive(Parser, Debug)]
#[command(
    name = "pbxadd",
    about = "Register source files into an Xcode project manifest",
    version,
    long_about = "pbxadd splices file references and per-target build memberships into an \
                  existing project.pbxproj without rewriting any line the project already \
                  has. The files to add and their target assignments come from a TOML \
                  plan; re-running the same plan is a no-op."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Increase verbosity (debug-level logging)"
    )]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Add planned files to a project manifest",
        long_about = "Reads a TOML plan of target-to-file assignments and inserts the \
                      matching file-reference, build-file, and sources-list entries into \
                      the project manifest. Files the manifest already references are \
                      skipped, so the command is safe to re-run.\n\n\
                      Examples:\n  \
                      pbxadd add Demo.xcodeproj --plan newfiles.toml\n  \
                      pbxadd add Demo.xcodeproj/project.pbxproj --plan newfiles.toml --dry-run\n  \
                      pbxadd add Demo.xcodeproj --plan newfiles.toml --format json"
    )]
    Add(AddArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    #[arg(
        value_name = "PROJECT",
        help = "Path to a project.pbxproj file or the enclosing .xcodeproj bundle"
    )]
    pub project: PathBuf,

    #[arg(
        short = 'p',
        long,
        value_name = "FILE",
        help = "TOML plan mapping targets to the files they gain"
    )]
    pub plan: PathBuf,

    #[arg(
        long,
        help = "Compute and report the changes without writing the manifest"
    )]
    pub dry_run: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

/// Output format as parsed from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Human,
    Json,
}
