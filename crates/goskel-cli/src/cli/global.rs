//! Flags shared by every goskel subcommand.
//!
//! All of them are `global`, so `goskel -v usecase Order` and
//! `goskel usecase Order -v` mean the same thing.

use std::path::PathBuf;

use clap::{ArgAction, Args, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of what generation does; repeat for more detail.
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Log more detail (-v, -vv, -vvv)",
        long_help = "Log more of each run to stderr:
    (none)  - Warnings and errors only
    -v      - Each file and directory written, external tools located
    -vv     - Plans, render and collision checks, resolved config
    -vvv    - Everything, including override scans
`list -v` also shows the placeholders of every template."
    )]
    pub verbose: u8,

    /// Print only errors. Success lines and dry-run previews are dropped.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain diagnostics and success lines.
    ///
    /// `NO_COLOR` counts when set to anything but an empty, `0`, `false`,
    /// `no` or `off` value.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output (also NO_COLOR)"
    )]
    pub no_color: bool,

    /// TOML file read instead of the platform default; it must exist.
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// `auto` is `human` on a terminal and `plain` when piped.
    #[arg(long = "output-format", global = true, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Auto,
    /// Colored, with the list of written files.
    Human,
    /// Bare messages, no file list.
    Plain,
}
