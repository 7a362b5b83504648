//! `try` binary entry point.
//!
//! A thin shim over the library: parse arguments, load config, set up
//! logging, dispatch the route, and translate the result into output and an
//! exit status.
//!
//! # Output Contract
//!
//! - stdout: the shell script to evaluate (or the `init` wrapper), or
//!   `Cancelled.` when the user backed out
//! - stderr: the interactive UI, help text and `Error: ...` messages
//!
//! # Exit Status
//!
//! - `0`: stdout holds something to evaluate (or print, for `init`)
//! - `1`: cancelled, or an error occurred
//! - `2`: no arguments or invalid arguments (help printed to stderr)

use chrono::Local;
use clap::Parser;
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tries::catalog::list_entries;
use tries::cli::{clone_script, Cli, Route};
use tries::infrastructure::{absolutize, resolve_root, root_from_env};
use tries::script::{for_outcome, init_script, Shell};
use tries::terminal::run_selector;
use tries::{initialize, observability, Config, Result};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stderr; stdout is reserved for the script.
            eprint!("{}", e.render());
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    observability::init_tracing(&config);

    let env_root = root_from_env();
    let root = resolve_root(cli.path.as_deref(), env_root.as_deref(), config.path.as_deref());
    let route = cli.route();
    tracing::debug!(root = %root.display(), route = ?route, "dispatching");

    match run(route, &config, root) {
        Ok(Some(output)) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("Cancelled.");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Executes a route. `Ok(None)` means the selector was cancelled.
fn run(route: Route, config: &Config, root: PathBuf) -> Result<Option<String>> {
    match route {
        Route::Init(path) => {
            let root = path
                .filter(|p| Path::new(p).is_absolute())
                .map_or(root, |p| absolutize(&p));
            let exe = env::current_exe()?;
            let shell = Shell::from_shell_var(env::var("SHELL").ok().as_deref());
            Ok(Some(init_script(&exe, Some(&root), shell)))
        }
        Route::Clone { uri, name } => {
            clone_script(&uri, name.as_deref(), &root, Local::now().date_naive()).map(Some)
        }
        Route::Select(query) => {
            let entries = list_entries(&root)?;
            let state = initialize(config, root.clone(), entries, &query);
            let outcome = run_selector(state)?;
            Ok(for_outcome(&outcome, &root))
        }
    }
}
