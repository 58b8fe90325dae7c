//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::EvaluationService;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{Scenario, TreeDisplay};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None => cmd_eval(cli, None, false),
        Some(Commands::Eval { scenario, tree }) => cmd_eval(cli, scenario.as_deref(), *tree),
        Some(Commands::List) => cmd_list(),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    Ok(Settings::load(cli.config.as_deref())?)
}

#[instrument(level = "debug", skip(cli))]
fn cmd_eval(cli: &Cli, scenario: Option<&str>, tree: bool) -> CliResult<()> {
    let settings = load_settings(cli)?;
    debug!(?settings, "effective settings");
    let service = EvaluationService::new(settings);

    let evaluation = service.run(scenario)?;
    if tree || service.settings().show_tree {
        output::header(&evaluation.scenario);
        output::info(&evaluation.tree.to_tree());
    }
    output::info(&evaluation.result_line(service.settings().precision));
    Ok(())
}

fn cmd_list() -> CliResult<()> {
    output::header("Scenarios");
    for scenario in Scenario::ALL {
        let rendered = match scenario.build() {
            Ok(tree) => tree.to_string(),
            Err(e) => format!("<{e}>"),
        };
        output::action(scenario.name(), &format!("{rendered}  {}", scenario.description()));
    }
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Init => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("cannot determine global config directory".to_string())
            })?;
            init_config(&path)?;
            output::action("Created", &path.display());
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("Global", &path.display()),
                None => output::action("Global", "unavailable"),
            }
            if let Some(path) = &cli.config {
                output::action("Explicit", &path.display());
            }
        }
    }
    Ok(())
}

/// Write the config template to `path`, creating parent directories.
///
/// An existing file is left untouched and reported as a usage error.
pub fn init_config(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::Usage(format!(
            "config already exists: {}",
            path.display()
        )));
    }
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, Settings::template())
    };
    write().map_err(|e| {
        CliError::Application(ApplicationError::Config {
            message: format!("write {}: {}", path.display(), e),
        })
    })
}
