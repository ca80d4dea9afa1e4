//! Command dispatch

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{total_line, Scope, TreeNodeConvert};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, ColorMode, Settings};
use crate::domain::sample;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::{InfraError, OrganisationLoader};

/// Execute the parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if cli.no_color {
        settings.color = ColorMode::Never;
    }
    apply_color_mode(settings.color);
    debug!(?settings, "effective settings");

    // Commands that need no organisation
    match &cli.command {
        Commands::Config { command } => return cmd_config(command, &settings, cli),
        Commands::Completion { shell } => {
            cmd_completion(*shell);
            return Ok(());
        }
        Commands::Sample => return cmd_sample(),
        _ => {}
    }

    let container = ServiceContainer::new(settings);
    let organisation = container.organisation(cli.file.as_ref())?;
    let reports = container.report_service();

    match &cli.command {
        Commands::Report => write_stdout(&reports.full_report(&organisation).to_string()),
        Commands::Total => {
            output::info(&total_line(reports.total_duration(&organisation)));
            Ok(())
        }
        Commands::Tree { scope } => write_stdout(&reports.render(&organisation, Scope::from(*scope))),
        Commands::Outline => write_stdout(&organisation.to_tree_string().to_string()),
        Commands::Config { .. } | Commands::Completion { .. } | Commands::Sample => Ok(()),
    }
}

/// Make `colored` follow the resolved mode, including error output.
fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }
}

fn write_stdout(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| InfraError::io("write to stdout", e))?;
    Ok(())
}

#[instrument(level = "debug")]
fn cmd_sample() -> CliResult<()> {
    let text = OrganisationLoader::to_toml(&sample::push_based())?;
    write_stdout(&text)
}

fn cmd_config(command: &ConfigCommands, settings: &Settings, cli: &Cli) -> CliResult<()> {
    match command {
        ConfigCommands::Show => write_stdout(&settings.to_toml()?),
        ConfigCommands::Template => write_stdout(&Settings::template()),
        ConfigCommands::Path => {
            output::header("Config paths");
            match global_config_path() {
                Some(path) => {
                    let state = if path.exists() { "" } else { " (not found)" };
                    output::action("global", &format!("{}{}", path.display(), state));
                }
                None => output::action("global", "unavailable"),
            }
            match &cli.config {
                Some(path) => output::action("explicit", &path.display()),
                None => output::action("explicit", "none"),
            }
            Ok(())
        }
    }
}

fn cmd_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
