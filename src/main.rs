use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use xbarmenu::{config, demos::Demo, document, logging, Plugin};

#[derive(Parser, Debug)]
#[command(name = "xbarmenu", version, about = "Prints an xbar menu from a JSON definition")]
struct Cli {
    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// With no subcommand the resolved config document is rendered, which is
    /// what xbar does when it runs the plugin.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Renders a menu document (defaults to the resolved config path).
    Render {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Renders one of the built-in example plugins.
    Demo {
        #[arg(value_enum)]
        name: Demo,
    },
    /// Prints the config path that would be used (if any).
    ConfigPath,
    /// Writes a starter menu document if none exists and prints its path.
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command.unwrap_or(Command::Render { file: None }) {
        Command::Render { file: Some(path) } => {
            let plugin =
                document::load(&path).with_context(|| format!("loading {}", path.display()))?;
            emit(&plugin)?;
        }
        Command::Render { file: None } => {
            let Some(plugin) = config::load_optional()? else {
                bail!(
                    "No menu document found (run `xbarmenu init` or set {})",
                    config::CONFIG_ENV
                );
            };
            emit(&plugin)?;
        }
        Command::Demo { name } => emit(&name.build())?,
        Command::ConfigPath => {
            if let Some(path) = config::resolve_config_path() {
                println!("{}", path.display());
            }
        }
        Command::Init => {
            let path = config::ensure_config_file_exists().context("ensure config exists")?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn emit(plugin: &Plugin) -> Result<()> {
    plugin.run().context("render plugin to stdout").inspect_err(|e| {
        tracing::warn!(error = %e, "render aborted");
    })
}
