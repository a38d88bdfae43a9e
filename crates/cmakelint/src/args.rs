use crate::logging::LogLevel;
use crate::output_format::OutputFormat;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

// Configures Clap v3-style help menu colors
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(
    author,
    name = "cmakelint",
    about = "cmakelint: a style checker for CMake files",
    disable_version_flag = true
)]
#[command(version)]
#[command(styles = STYLES)]
pub struct Args {
    #[arg(
        help = "Files to lint. Defaults to `CMakeLists.txt` in the current directory."
    )]
    pub files: Vec<String>,
    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Version,
        help = "Print version"
    )]
    pub version: Option<bool>,
    #[arg(
        long,
        value_name = "-X,+Y",
        allow_hyphen_values = true,
        help = "Comma-separated list of category filters to apply, for example `--filter=-whitespace,+whitespace/tabs`. Pass an empty value to list the categories."
    )]
    pub filter: Option<String>,
    #[arg(
        long,
        help = "Use the given configuration file. By default `./.cmakelintrc`, `$XDG_CONFIG_DIR/cmakelintrc` (or `~/.config/cmakelintrc`) and `~/.cmakelintrc` are tried in this order. Use `None` to disable configuration files."
    )]
    pub config: Option<String>,
    #[arg(long, help = "Indentation should be a multiple of N spaces (default: 2).")]
    pub spaces: Option<usize>,
    #[arg(long, help = "The maximum allowed line length (default: 80).")]
    pub linelength: Option<usize>,
    #[arg(
        long,
        default_value = "false",
        help = "Don't print the error summary when no errors were found."
    )]
    pub quiet: bool,
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::default(),
        help = "Output serialization format for findings."
    )]
    pub output_format: OutputFormat,
    #[clap(flatten)]
    pub(crate) global_options: GlobalOptions,
}

/// All configuration options that can be passed "globally"
#[derive(Debug, Default, clap::Args)]
#[command(next_help_heading = "Global options")]
pub(crate) struct GlobalOptions {
    /// The log level. One of: `error`, `warn`, `info`, `debug`, or `trace`. Defaults
    /// to `warn`.
    #[arg(long, global = true)]
    pub(crate) log_level: Option<LogLevel>,
    /// Disable colored output. The `NO_COLOR` environment variable is also
    /// respected.
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}
