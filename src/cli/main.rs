//! Command-line interface entry point for `rbviz`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use commands::render::RenderOptions;
use rbviz::config::Config;
use rbviz::info;
use rbviz::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Plain invocation needs exactly one input; anything else touches no files at all
    let input_file = match (&args.command, args.single_input()) {
        (None, None) => {
            println!("usage error");
            return;
        }
        (_, input) => input.cloned(),
    };

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    init_logging(&args, &config);

    match args.command {
        Some(Command::Config { subcommand }) => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Some(Command::Check { input_file }) => commands::check::run(&input_file),
        None => {
            let Some(input_file) = input_file else {
                return;
            };
            let options = RenderOptions {
                output: args.output,
                print_document: args.print_document,
            };
            commands::render::run(&input_file, &options, &config);
        }
    }
}

/// Apply level, debug, verbose and file logging from CLI flags and config
fn init_logging(args: &Cli, config: &Config) {
    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path =
        (!config.logging.file.is_empty()).then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let display_path = log_path.display();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }
}
