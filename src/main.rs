use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use letlang::{
    config::{Config, ConfigError, Emit},
    errors::errors::Error,
    format_error,
    lexer::{lexer::tokenize, stream::TokenBuffer},
    parser::parser::parse,
};
use log::{info, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> ExitCode {
    let config = match Config::from_args(env::args_os()) {
        Ok(config) => config,
        Err(ConfigError::Args(err)) => err.exit(),
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(if config.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        });
    }

    let source = match read_to_string(&config.path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", config.path.display(), err);
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => return report(&error, &config),
    };

    info!("Tokenized in {:?}", start.elapsed());

    if config.emit == Emit::Tokens {
        for token in &tokens {
            println!("{}", token);
        }
        return ExitCode::SUCCESS;
    }

    let parse_start = Instant::now();
    let program = match parse(TokenBuffer::new(tokens, source.as_str())) {
        Ok(program) => program,
        Err(error) => return report(&error, &config),
    };

    info!("Parsed in {:?}", parse_start.elapsed());

    match config.emit {
        Emit::Tree => println!("{:#?}", program),
        _ => print!("{}", program),
    }

    ExitCode::SUCCESS
}

fn report(error: &Error, config: &Config) -> ExitCode {
    eprintln!("{}", format_error(error, &config.path));

    if error.is_internal() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}
