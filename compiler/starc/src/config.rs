//! Options shared by `run` and `check`.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing file path")]
    MissingPath,
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub path: String,
    /// Treat warnings (unreachable patterns) as errors.
    pub deny_warnings: bool,
    /// Define the prelude natives. Off with `--no-prelude`.
    pub prelude: bool,
}

impl RunConfig {
    pub fn new(path: impl Into<String>) -> Self {
        RunConfig {
            path: path.into(),
            deny_warnings: false,
            prelude: true,
        }
    }

    /// Parse the arguments after the command name. Flags may come before
    /// or after the path.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut path = None;
        let mut deny_warnings = false;
        let mut prelude = true;

        for arg in args {
            match arg.as_str() {
                "--deny-warnings" | "-D" => deny_warnings = true,
                "--no-prelude" => prelude = false,
                flag if flag.starts_with('-') => {
                    return Err(ConfigError::UnknownOption(flag.to_owned()));
                }
                file if path.is_none() => path = Some(file.to_owned()),
                extra => return Err(ConfigError::UnexpectedArgument(extra.to_owned())),
            }
        }

        let path = path.ok_or(ConfigError::MissingPath)?;
        Ok(RunConfig {
            path,
            deny_warnings,
            prelude,
        })
    }
}
