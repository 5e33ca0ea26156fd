mod cli;
mod commands;
mod config;
mod error;
mod feedback;
mod output;

use std::sync::Arc;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use eventdesk_core::ViewController;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;
use crate::feedback::{PromptConfirm, TerminalFeedback};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Held until exit so buffered file logs are flushed
    let _guard = match init_tracing(&cli.global) {
        Ok(guard) => guard,
        Err(err) => {
            let code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            std::process::exit(code);
        }
    };

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(global: &GlobalOpts) -> Result<Option<WorkerGuard>, CliError> {
    let level = match global.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(ref path) = global.log_file {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::path::Path::new("."));
        let name = path.file_name().ok_or_else(|| CliError::Validation {
            field: "log-file".into(),
            reason: format!("not a file path: {}", path.display()),
        })?;
        std::fs::create_dir_all(dir)?;

        let appender = tracing_appender::rolling::never(dir, name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .init();
        return Ok(Some(guard));
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
    Ok(None)
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands work without a reachable service
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "eventdesk", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let cfg = config::load_config()?;
            let client_config = config::resolve_client_config(&cli.global, &cfg)?;
            let format = config::output_format(&cli.global, &cfg);
            let color = output::should_color(config::color_mode(&cli.global, &cfg));

            let feedback = Arc::new(TerminalFeedback::new(
                cli.global.quiet,
                cli.global.verbose,
                color,
            ));
            let confirm = Arc::new(PromptConfirm::new(cli.global.yes));
            let mut controller = ViewController::new(&client_config, feedback, confirm)?;

            tracing::debug!(command = ?cmd, server = %client_config.server, "dispatching command");
            let ctx = commands::Context {
                global: &cli.global,
                format,
            };
            commands::dispatch(cmd, &mut controller, &ctx).await
        }
    }
}
