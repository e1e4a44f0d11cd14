/// Content generator: builds the full card-game content pack from a theme.
///
/// Usage: gen_content [THEME] [--seed <n>] [--data-dir <dir>] [--game-dir <dir>]
///                    [--log-level <level>]
///
/// THEME defaults to config/theme.yaml when that file exists, otherwise the
/// built-in theme is used.

use disorder_content::core::pipeline::{run, RunOptions};
use disorder_content::core::theme::{resolve_theme_path, DEFAULT_THEME_PATH};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let mut options = RunOptions::default();
    let mut theme_path: Option<PathBuf> = None;
    let mut log_level = LevelFilter::Info;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" if i + 1 < args.len() => {
                i += 1;
                options.seed = match args[i].parse() {
                    Ok(seed) => seed,
                    Err(_) => {
                        eprintln!("ERROR: invalid seed '{}'", args[i]);
                        process::exit(1);
                    }
                };
            }
            "--data-dir" if i + 1 < args.len() => {
                i += 1;
                options.authoring_root = PathBuf::from(&args[i]);
            }
            "--game-dir" if i + 1 < args.len() => {
                i += 1;
                options.aggregate_root = PathBuf::from(&args[i]);
            }
            "--log-level" if i + 1 < args.len() => {
                i += 1;
                log_level = match parse_log_level(&args[i]) {
                    Some(level) => level,
                    None => {
                        eprintln!("ERROR: invalid log level '{}'", args[i]);
                        process::exit(1);
                    }
                };
            }
            arg if !arg.starts_with("--") && theme_path.is_none() => {
                theme_path = Some(PathBuf::from(arg));
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .init();

    options.theme_path = resolve_theme_path(theme_path.as_deref(), Path::new(DEFAULT_THEME_PATH));

    match run(&options) {
        Ok(summary) => {
            println!("Seed: {}", summary.seed);
            println!("  cards:    {}", summary.cards);
            println!("  leaders:  {}", summary.leaders);
            println!("  crises:   {}", summary.crises);
            println!("  factions: {}", summary.factions);
            for report in &summary.reports {
                println!(
                    "  {} -> {} authoring files, {}",
                    report.category,
                    report.authoring_files.len(),
                    report.aggregate_file.display()
                );
            }
            println!(
                "\n{} files written, {} stale files removed",
                summary.files_written, summary.files_removed
            );
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
}

/// `off`, `error`, `warn`, `info`, `debug` or `trace`, any case.
fn parse_log_level(value: &str) -> Option<LevelFilter> {
    value.parse().ok()
}

fn print_usage() {
    println!(
        "Usage: gen_content [THEME] [--seed <n>] [--data-dir <dir>] [--game-dir <dir>] [--log-level <level>]"
    );
    println!();
    println!("  THEME        theme descriptor (.yaml, .json or .ron), default {}", DEFAULT_THEME_PATH);
    println!("  --seed       random seed, default 42");
    println!("  --data-dir   authoring root, default data");
    println!("  --game-dir   aggregate root, default unity/Assets/Game/Data");
    println!("  --log-level  error, warn, info, debug or trace (RUST_LOG overrides)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_levels() {
        assert_eq!(parse_log_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_log_level("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_log_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_log_level("loud"), None);
        assert_eq!(parse_log_level(""), None);
    }
}
