//! Command-line interface entry point for the `qRate` client

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use qrate::config::Config;
use qrate::core::gateway::ApiClient;
use qrate::core::session::SessionStore;
use qrate::logger;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Effective runtime log level: --debug wins, then --log-level, then config
    let effective_level = if args.debug_flag {
        "debug".to_string()
    } else {
        args.log_level
            .map_or_else(|| config.logging.level.clone(), |lvl| lvl.to_string())
    };

    let verbose = args.verbose || config.logging.verbose;

    // Initialize logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };
    let log_path = args.log_file.clone().or(config_log_path);

    if let Some(path) = log_path {
        let display_path = path.to_string_lossy().to_string();
        if logger::init_logging(&effective_level, Some(&path)) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    } else {
        let _ = logger::init_logging(&effective_level, None);
    }

    let session = SessionStore::load_from(config.session_file_path());
    let api = ApiClient::from_config(&config);

    // Handle subcommands
    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Login { email, password } => {
            commands::auth::login(&api, session, &email, &password).await;
        }
        Command::Register {
            email,
            password,
            confirm,
        } => {
            commands::auth::register(&api, session, &email, &password, confirm.as_deref()).await;
        }
        Command::Logout => {
            commands::auth::logout(session);
        }
        Command::Whoami => {
            commands::auth::whoami(&session);
        }
        Command::Courses {
            search,
            department,
            rating,
        } => {
            commands::browse::courses(
                &api,
                &search,
                department.as_deref(),
                rating.as_deref(),
                verbose,
            )
            .await;
        }
        Command::Professors {
            search,
            department,
            rating,
        } => {
            commands::browse::professors(
                &api,
                &search,
                department.as_deref(),
                rating.as_deref(),
                verbose,
            )
            .await;
        }
        Command::Course { id } => {
            commands::detail::course(&api, &id).await;
        }
        Command::Professor { name } => {
            commands::detail::professor(&api, &name).await;
        }
        Command::Review { target } => {
            commands::review::run(&api, &session, target).await;
        }
    }
}
