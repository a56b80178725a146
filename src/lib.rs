//! Core library entry for the `strata` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod model;
pub mod ports;
pub mod store;
pub mod validate;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_status() {
        let _env = crate::commands::env_lock();
        let dir = std::env::temp_dir().join("strata_lib_run_status");
        std::env::set_var("STRATA_STORE", dir.join("items.yaml").to_str().unwrap());

        let result = run(["strata", "status"]);

        std::env::remove_var("STRATA_STORE");
        let _ = std::fs::remove_dir_all(&dir);

        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["strata", "unknown"]);
        assert!(result.is_err());
    }
}
