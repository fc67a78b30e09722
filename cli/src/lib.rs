#[macro_use]
extern crate log;

use clap::{App, Arg};
use simplelog::{LevelFilter, TermLogger, WriteLogger};

pub mod settings;

/// Add the options shared by all tools to `app`.
pub fn with_common_args<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
    app.arg(
        Arg::with_name("debug")
            .short("d")
            .long("debug")
            .help("Enables debug output")
            .takes_value(false),
    )
    .arg(
        Arg::with_name("config")
            .short("c")
            .long("config")
            .help("Settings file in TOML format")
            .takes_value(true),
    )
    .arg(
        Arg::with_name("output-dir")
            .short("o")
            .long("output-dir")
            .help("Directory in which the output file is created (default: current directory)")
            .takes_value(true),
    )
}

/// Initialize logging to standard error, standard output is kept for data.
pub fn init_logging(debug: bool) {
    let log_filter = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_config = simplelog::ConfigBuilder::new().build();

    if let Err(e) = TermLogger::init(
        log_filter,
        log_config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Error, can't initialize the terminal log output: {}.\nWill degrade to a more simple logger", e);
        if let Err(e_simple) = WriteLogger::init(log_filter, log_config, std::io::stderr()) {
            eprintln!("Simple logging failed too: {}", e_simple);
        }
    }

    debug!("Logging with level {}", log_filter);
}

/// Interpret the optional directedness argument: only `1` means directed.
pub fn parse_directed_flag(value: Option<&str>) -> bool {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map(|v| v == 1)
        .unwrap_or(false)
}
