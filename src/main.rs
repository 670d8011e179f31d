use std::io::Write;
use std::{env, io, process};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use methodcli::cli::commands::execute_command;
use methodcli::cli::output;
use methodcli::cli::{CliError, CliResult, TangoCli};
use methodcli::config::Settings;
use methodcli::exitcode;

/// Environment variable holding the log verbosity, 0 (warn) to 3 (trace).
const DEBUG_ENV: &str = "TANGO_DEBUG";

fn main() {
    setup_logging(verbosity_from_env());

    if let Err(e) = run() {
        output::error(&e);
        process::exit(e.exit_code());
    }
    process::exit(exitcode::OK);
}

fn run() -> CliResult<()> {
    let settings = Settings::load()?;
    let args: Vec<String> = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    run_with(&settings, &args, &mut io::stderr())
}

/// Parse `args` and dispatch; on failure the usage table goes to `diag`.
fn run_with<W: Write>(settings: &Settings, args: &[String], diag: &mut W) -> CliResult<()> {
    let cli = TangoCli::new(settings)?;
    let program = args.first().map_or("tango", String::as_str);

    let method = match cli.parse_args(args) {
        Ok(method) => method,
        Err(failure) => {
            cli.print_usage(diag, program)
                .map_err(|e| CliError::io("write usage", e))?;
            return Err(failure.into());
        }
    };
    execute_command(&cli, method)
}

fn verbosity_from_env() -> u8 {
    env::var(DEBUG_ENV)
        .ok()
        .and_then(|level| level.trim().parse().ok())
        .unwrap_or(0)
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is {DEBUG_ENV}=3");
            LevelFilter::TRACE
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use methodcli::util::testing;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn verify_cli() {
        testing::init_test_setup();

        let cli = TangoCli::new(&Settings::default()).expect("declarations are consistent");

        assert_eq!(cli.registry().option_names(), "-adfkrstx");
    }

    #[test]
    fn given_invalid_arguments_when_run_then_usage_on_diag_and_usage_exit_code() {
        // Arrange
        testing::init_test_setup();
        let mut diag = Vec::new();

        // Act
        let result = run_with(
            &Settings::default(),
            &args(&["tango", "-m", "kanji", "-z"]),
            &mut diag,
        );

        // Assert
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), exitcode::USAGE);
        assert_eq!(
            err.to_string(),
            "unknown option '-z'\nmandatory option '-d' is not presented"
        );
        let usage = String::from_utf8(diag).unwrap();
        assert!(usage.starts_with("Usage: tango -m <method>"), "got: {usage}");
    }

    #[test]
    fn given_valid_arguments_when_run_then_nothing_on_diag() {
        // Arrange
        testing::init_test_setup();
        let mut diag = Vec::new();

        // Act
        let result = run_with(
            &Settings::default(),
            &args(&["tango", "-m", "audio", "-d", "words.txt"]),
            &mut diag,
        );

        // Assert
        assert!(result.is_ok());
        assert!(diag.is_empty());
    }
}
