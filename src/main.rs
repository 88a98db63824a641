mod calc;
mod cmd;
mod data;
mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "whatday", about = "find the weekday of any date from 1800 to 2300")]
struct Cli {
    /// Path to the data directory containing config.yaml (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default config.yaml
    Init,
    /// Print the weekday of a date, e.g. `whatday weekday 14 5 2024`
    Weekday {
        day: u32,
        month: u32,
        year: i32,
        /// Print a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Print the number of days in a month
    Days { month: u32, year: i32 },
    /// List the promoted apps
    Apps,
    /// Open a promoted app's link in the browser
    Try {
        /// App name as shown by `whatday apps`
        name: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };
    data::persistence::set_data_dir(data_dir.clone());

    // Only the interactive view needs a config on disk; the other commands
    // fall back to built-in defaults.
    if cli.command.is_none() && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty, running init...",
            data_dir.display()
        );
        cmd::init::run()?;
    }

    match cli.command {
        None => cmd::root::run(),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Weekday {
            day,
            month,
            year,
            json,
        }) => cmd::weekday::run(day, month, year, json),
        Some(Commands::Days { month, year }) => cmd::days::run(month, year),
        Some(Commands::Apps) => cmd::apps::run(),
        Some(Commands::Try { name }) => cmd::apps::run_try(&name),
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dir_needs_init_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does_not_exist");
        assert!(dir_needs_init(&missing));
    }

    #[test]
    fn test_dir_needs_init_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_dir_needs_init_nonempty_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.yaml"), "settings: {}").unwrap();
        assert!(!dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_weekday_with_json() {
        let cli = Cli::try_parse_from(["whatday", "weekday", "14", "5", "2024", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Weekday {
                day,
                month,
                year,
                json,
            }) => assert_eq!((day, month, year, json), (14, 5, 2024, true)),
            _ => panic!("expected weekday command"),
        }
    }

    #[test]
    fn test_cli_defaults_to_interactive_view() {
        let cli = Cli::try_parse_from(["whatday"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.data_dir, PathBuf::from("./config"));
    }
}
