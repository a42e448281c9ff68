//! Settings directory inspector binary

use clap::Parser;
use std::{env, panic, path::PathBuf, process};
use xamprofile::exit_codes::{EXIT_FORMAT_ERROR, EXIT_IO_ERROR, EXIT_PANIC, EXIT_SUCCESS};
use xamprofile::{ProfileError, inspect_settings};

const VERSION: &str = xamprofile::version::VERSION;

#[derive(Parser, Debug)]
#[command(version = VERSION, about = "Inspect a profile settings directory")]
struct Args {
    /// Settings directory to decode
    #[arg(short, long)]
    dir: PathBuf,

    /// Emit the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error; json: prefix for JSON logs)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    // Set up panic handler to return specific exit code
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in inspector");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    // Handle --version before clap
    if env::args().nth(1).as_deref() == Some("--version") {
        println!("xamprofile-inspect {}", xamprofile::version::full_version());
        return EXIT_SUCCESS;
    }

    let args = Args::parse();

    if let Some(ref level) = args.log_level {
        xamprofile::logger::JsonLogger::init_with_level(level);
    } else {
        xamprofile::logger::JsonLogger::init();
    }

    let report = match inspect_settings(&args.dir) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Inspect error: {e}");
            return match e {
                ProfileError::IoError(_) => EXIT_IO_ERROR,
                _ => EXIT_FORMAT_ERROR,
            };
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Report serialization failed: {e}");
                return EXIT_FORMAT_ERROR;
            }
        }
        return EXIT_SUCCESS;
    }

    println!("{}", report.directory);
    println!("{:<12} {:<14} {:<8} {:<6} value", "id", "type", "source", "title");
    for entry in &report.settings {
        println!(
            "{:<12} {:<14} {:<8} {:<6} {}",
            entry.setting_id, entry.data_type, entry.source, entry.title_specific, entry.value
        );
    }
    for entry in &report.errors {
        eprintln!("{:<12} ERROR {}", entry.setting_id, entry.error);
    }

    if report.errors.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_FORMAT_ERROR
    }
}
