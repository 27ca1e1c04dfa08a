use std::path::PathBuf;

use clap::{Parser, Subcommand};

use fnpack::config::LogFormat;

/// fnpack - package compiled serverless functions into deployable archives
#[derive(Parser, Debug)]
#[command(name = "fnpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress everything except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Logger that receives packaging messages
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Project root
    #[arg(short = 'C', long, default_value = ".", global = true)]
    pub project: PathBuf,

    /// Configuration file (defaults to <project>/fnpack.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Archive compiled output and bind artifacts to functions
    Package {
        /// Only package these functions (individual mode)
        #[arg(short, long = "function", value_name = "NAME")]
        functions: Vec<String>,

        /// Copy archives from a previous build instead of rebuilding
        #[arg(long)]
        reuse_artifacts: bool,

        /// Regex of relative paths to leave out of archives
        #[arg(long, value_name = "REGEX")]
        exclude: Option<String>,

        /// Concurrent archive builds
        #[arg(long, value_name = "N")]
        concurrency: Option<usize>,

        /// Directory holding compiled output, relative to the project
        #[arg(long, value_name = "DIR")]
        build_output: Option<PathBuf>,
    },

    /// Install external modules into every compiled output
    Deps {
        /// Packager to use (overrides configuration)
        #[arg(long, value_name = "ID")]
        packager: Option<String>,
    },

    /// List registered packagers
    Packagers,
}
