use std::fs;
use std::path::{Path, PathBuf};

use crate::filter::{FilterError, FilterSet, parse_filter_list};
use crate::settings::Settings;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid value for `{key}`: expected a positive integer, got `{value}`")]
    InvalidNumber { key: &'static str, value: String },
    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Options read from a `.cmakelintrc` file. Values are kept raw here and
/// validated when the settings are built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RcOptions {
    pub filter: Option<String>,
    pub spaces: Option<String>,
    pub line_length: Option<String>,
    pub quiet: bool,
}

impl RcOptions {
    /// Parse the contents of an rc file.
    ///
    /// ```text
    /// # comment
    /// filter=-whitespace/indent,+whitespace/tabs
    /// spaces=4
    /// linelength=120
    /// quiet
    /// ```
    ///
    /// Unknown lines are ignored. When a key appears several times the last
    /// occurrence wins.
    pub fn parse(contents: &str) -> Self {
        let mut options = RcOptions::default();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(value) = line.strip_prefix("filter=") {
                options.filter = Some(value.to_string());
            } else if let Some(value) = line.strip_prefix("spaces=") {
                options.spaces = Some(value.to_string());
            } else if let Some(value) = line.strip_prefix("linelength=") {
                options.line_length = Some(value.to_string());
            } else if line == "quiet" {
                options.quiet = true;
            }
        }
        options
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Ok(Self::parse(&contents))
    }
}

/// Options passed on the command line.
#[derive(Debug, Clone, Default)]
pub struct ArgsConfig {
    pub filter: Option<String>,
    pub spaces: Option<usize>,
    pub line_length: Option<usize>,
    pub quiet: bool,
}

/// Merge rc-file options and command-line options into [Settings].
///
/// Filters from the rc file come first and the command-line filters are
/// appended after them. `--spaces` and `--linelength` win over the rc file.
pub fn build_config(args: &ArgsConfig, rc: Option<&RcOptions>) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();
    let mut filters = FilterSet::new();

    if let Some(rc) = rc {
        if let Some(filter) = &rc.filter {
            filters.extend(parse_filter_list(filter)?);
        }
        if let Some(spaces) = &rc.spaces {
            settings.spaces = parse_positive("spaces", spaces)?;
        }
        if let Some(line_length) = &rc.line_length {
            settings.line_length = parse_positive("linelength", line_length)?;
        }
        settings.quiet = rc.quiet;
    }

    if let Some(filter) = &args.filter {
        filters.extend(parse_filter_list(filter)?);
    }
    if let Some(spaces) = args.spaces {
        settings.spaces = check_positive("spaces", spaces)?;
    }
    if let Some(line_length) = args.line_length {
        settings.line_length = check_positive("linelength", line_length)?;
    }
    settings.quiet |= args.quiet;
    settings.filters = filters;

    Ok(settings)
}

fn parse_positive(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    let invalid = || ConfigError::InvalidNumber { key, value: value.to_string() };
    let number = value.trim().parse::<usize>().map_err(|_| invalid())?;
    if number == 0 {
        return Err(invalid());
    }
    Ok(number)
}

fn check_positive(key: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidNumber { key, value: value.to_string() });
    }
    Ok(value)
}
