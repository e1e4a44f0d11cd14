/// Content Linter: validates referential integrity of a generated pack.
///
/// Usage: content_linter [game_data_dir]

use disorder_content::core::lint::lint_directory;
use disorder_content::core::pipeline::DEFAULT_AGGREGATE_ROOT;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        println!("Usage: content_linter [game_data_dir]");
        process::exit(0);
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();

    let dir = args.get(1).map(String::as_str).unwrap_or(DEFAULT_AGGREGATE_ROOT);
    let report = match lint_directory(Path::new(dir)) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    println!("\n=== Content Lint Report ===\n");

    if report.errors.is_empty() && report.warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &report.warnings {
        println!("WARNING: {}", warning);
    }

    for error in &report.errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        report.errors.len(),
        report.warnings.len()
    );

    if !report.is_clean() {
        process::exit(1);
    }
}
