//! Command-line configuration for the `letlang` driver.

use std::{ffi::OsString, path::PathBuf, str::FromStr};

use clap::{App, Arg, ArgMatches};
use thiserror::Error;

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the driver prints for a successfully parsed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// The program rendered back to source text.
    Ast,
    /// The `{:#?}` tree.
    Tree,
    /// One token per line.
    Tokens,
}

impl FromStr for Emit {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "ast" => Ok(Emit::Ast),
            "tree" => Ok(Emit::Tree),
            "tokens" => Ok(Emit::Tokens),
            other => Err(ConfigError::UnknownEmit {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub emit: Emit,
    pub verbose: bool,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown emit kind {value:?}, expected one of ast, tree, tokens")]
    UnknownEmit { value: String },
    #[error(transparent)]
    Args(#[from] clap::Error),
}

impl Config {
    /// Parses `args`, the program name included.
    pub fn from_args<I, T>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(args)?;
        Config::from_matches(&matches)
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Config, ConfigError> {
        let emit = matches
            .value_of("emit")
            .map_or(Ok(Emit::Ast), Emit::from_str)?;

        Ok(Config {
            path: PathBuf::from(matches.value_of_os("source-file").unwrap_or_default()),
            emit,
            verbose: matches.is_present("verbose"),
        })
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new(NAME)
        .version(VERSION)
        .about("Parses let-bindings and if-expressions and reports located syntax errors")
        .arg(
            Arg::with_name("emit")
                .short("e")
                .long("emit")
                .value_name("kind")
                .help("what to print for a file that parses")
                .possible_values(&["ast", "tree", "tokens"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("log parser progress to stderr"),
        )
        .arg(Arg::with_name("source-file").required(true))
}
