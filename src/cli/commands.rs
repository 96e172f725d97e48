//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::forest_tree;
use crate::infrastructure::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    if !settings.color {
        colored::control::set_override(false);
    }
    debug!(?settings, "settings loaded");
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Grid { file }) => cmd_grid(&container, file),
        Some(Commands::Leaves { file }) => cmd_leaves(&container, file),
        Some(Commands::Tree { file }) => cmd_tree(&container, file),
        Some(Commands::Config { command }) => cmd_config(&container, command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => Err(CliError::Usage(
            "no command given, see `headergrid --help`".into(),
        )),
    }
}

#[instrument(skip(container))]
fn cmd_grid(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let layout = container.header_service.layout(file)?;
    let settings = &container.settings;

    if layout.grid.is_empty() {
        output::warning("no column groups, header is a single row");
    }
    let mut lines: Vec<String> = layout
        .grid
        .iter()
        .map(|row| output::grid_row(row, settings))
        .collect();
    lines.push(output::format_leaf_row(&layout.leaves, settings));
    output::write_lines(&mut io::stdout().lock(), &lines)?;
    Ok(())
}

#[instrument(skip(container))]
fn cmd_leaves(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let layout = container.header_service.layout(file)?;
    let mut lines = vec![output::header(&format!("{} data columns", layout.leaves.len()))];
    lines.extend(
        layout
            .leaves
            .iter()
            .map(|leaf| output::detail(&format!("{}\t{}", leaf.accessor, leaf.header))),
    );
    output::write_lines(&mut io::stdout().lock(), &lines)?;
    Ok(())
}

#[instrument(skip(container))]
fn cmd_tree(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let forest = container.header_service.load_forest(file)?;
    let root = file.display().to_string();
    output::info(&forest_tree(&root, &forest));
    Ok(())
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&container.settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available on this platform"),
        },
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
