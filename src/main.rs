use std::panic;
use std::path::PathBuf;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::Colorize;
use slog::{crit, error};

use tracklist_chapter_fetch::{command_handlers, download, utils};

fn cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract a tracklist from 1001tracklists and convert it to FFMETADATA chapter markers")
        .arg(
            Arg::new("url")
                .required(true)
                .help("URL of the 1001tracklists page to extract"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .default_value(command_handlers::DEFAULT_OUTPUT)
                .help("Output file path"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress progress messages"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Show detailed processing information"),
        )
}

fn run(matches: &ArgMatches) -> i32 {
    let quiet = matches.get_flag("quiet");
    let logger = utils::get_logger(utils::log_level(quiet, matches.get_flag("verbose")));

    let url = matches.get_one::<String>("url").map(String::as_str).unwrap_or_default();
    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(command_handlers::DEFAULT_OUTPUT));

    let result = download::HttpFetcher::new(&download::FetchConfig::from_env(), &logger)
        .and_then(|fetcher| command_handlers::fetch(url, &output, &fetcher, &logger));

    match result {
        Ok(summary) => {
            if !quiet {
                println!("Wrote {} chapters to {}", summary.chapters, summary.output.display());
            }
            0
        }
        Err(e) => {
            error!(logger, "run failed"; "error" => e.to_string(), "exit_code" => e.exit_code());
            eprintln!("{}", format!("Error: {}", e).yellow());
            e.exit_code()
        }
    }
}

fn main() {
    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { utils::EXIT_VALIDATION } else { 0 });
        }
    };

    let code = match panic::catch_unwind(panic::AssertUnwindSafe(|| run(&matches))) {
        Ok(code) => code,
        Err(_) => {
            let logger = utils::get_logger(slog::Level::Error);
            crit!(logger, "unexpected failure");
            eprintln!("{}", "Error: unexpected failure".red());
            utils::EXIT_UNEXPECTED
        }
    };
    process::exit(code);
}
