use clap::Parser;

use technique_core::VERSION;

/// Technique - interactive data entry for technique records
///
/// Prompts for every field of a technique record, lets you review and
/// re-edit fields, then writes `<technique_id>.json`.
#[derive(Parser)]
#[command(name = "technique")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Directory the record file is written to (default: current directory)
    #[arg(short, long, env = "TECHNIQUE_OUTPUT_DIR", value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Author used when the author prompt is left blank
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Path to the config file
    #[arg(long, env = "TECHNIQUE_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long)]
    pub ascii: bool,
}
