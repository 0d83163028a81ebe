//! Config Registry CLI
//!
//! Declares a handful of variables, applies `config.json` on top of them and
//! lets you inspect, change, export or live-reload the result.
//!
//! # Commands
//!
//! ```text
//! config-registry [--config <path>] show            list every variable, then save
//! config-registry [--config <path>] get <name>
//! config-registry [--config <path>] info <name>     metadata as JSON
//! config-registry [--config <path>] set <name> <value>
//! config-registry [--config <path>] reset [<name>]
//! config-registry [--config <path>] export <path>   template with types and defaults
//! config-registry [--config <path>] watch           reload on every file change
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use config_registry::registry::{RegistryWatcher, ReloadEvent};
use config_registry::validator::{PipelineBuilder, presets};
use config_registry::{ConfigError, Registry, Variable, logging};

#[derive(Parser)]
#[command(name = "config-registry")]
#[command(about = "Inspect and edit a typed JSON configuration", long_about = None)]
struct Cli {
    /// Config file to load from and save to.
    #[arg(short, long, default_value = "config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every variable with its type, value and default
    Show,
    /// Print one variable's current value
    Get { name: String },
    /// Print one variable's metadata as JSON
    Info { name: String },
    /// Validate and store a new value, then save
    Set { name: String, value: String },
    /// Restore one variable (or all of them) to the default, then save
    Reset { name: Option<String> },
    /// Write a template with types, defaults and descriptions
    Export { path: PathBuf },
    /// Reload the config file whenever it changes
    Watch,
}

fn declare(registry: &Registry) {
    registry.register(Variable::new(
        "veryImportantString",
        "fas".to_string(),
        presets::string_non_empty(),
    ));
    registry.register(Variable::new("integer", 512, presets::int_ranged(0, 500)));
    registry.register(Variable::new("getReal", 22.8f32, presets::float_ranged(0.0, 200.0)));

    registry.register(
        Variable::new("server.host", "127.0.0.1".to_string(), presets::string_non_empty())
            .with_description("Interface the server binds to"),
    );
    registry.register(
        Variable::new("server.port", 8080, presets::int_ranged(1, 65535))
            .with_description("TCP port the server listens on"),
    );
    registry.register(
        Variable::new("server.debug", false, presets::boolean())
            .with_description("Verbose request logging"),
    );
    registry.register(
        Variable::new(
            "server.name",
            "config-registry".to_string(),
            PipelineBuilder::<String>::new().trim().not_empty().custom(|value| {
                if value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                    Ok(value)
                } else {
                    Err("Value should only contain letters, digits and '-'".into())
                }
            }),
        )
        .readonly()
        .with_description("Name reported to clients"),
    );
}

/// Apply the config file if there is one. Failures are reported, not fatal.
fn load_existing(registry: &Registry) {
    match registry.load() {
        Ok(()) => {}
        Err(ConfigError::MissingFile(path)) => {
            tracing::info!(path = %path.display(), "No config file yet, using defaults");
        }
        Err(e) => tracing::warn!("{}", e),
    }
}

fn show(registry: &Registry) {
    let mut names = registry.list_all();
    names.sort();

    for name in names {
        if let Some(info) = registry.get_info(&name) {
            println!(
                "{}: {} = {}(def: {}){}",
                info.name,
                info.type_label,
                info.value,
                info.default_value,
                if info.readonly { " [readonly]" } else { "" }
            );
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("config_registry=info");

    let cli = Cli::parse();

    let registry = Arc::new(Registry::new());
    declare(&registry);
    registry.set_config_path(&cli.config);
    load_existing(&registry);

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => {
            show(&registry);
            registry.save()?;
        }
        Commands::Get { name } => match registry.get_as_string(&name) {
            Some(value) => println!("{}", value),
            None => return Err(ConfigError::NotFound(name).into()),
        },
        Commands::Info { name } => match registry.get_info(&name) {
            Some(info) => println!("{}", serde_json::to_string_pretty(&info)?),
            None => return Err(ConfigError::NotFound(name).into()),
        },
        Commands::Set { name, value } => {
            registry.set(&name, &value)?;
            registry.save()?;
            println!("{} = {}", name, registry.get_as_string(&name).unwrap_or_default());
        }
        Commands::Reset { name: Some(name) } => {
            if !registry.reset(&name) {
                return Err(ConfigError::NotFound(name).into());
            }
            registry.save()?;
        }
        Commands::Reset { name: None } => {
            registry.reset_all();
            registry.save()?;
        }
        Commands::Export { path } => {
            registry.export_template(&path)?;
        }
        Commands::Watch => {
            if !cli.config.exists() {
                registry.save()?;
            }

            let (watcher, mut events) = RegistryWatcher::new(&cli.config, registry.clone());
            let _handle = watcher.run()?;

            loop {
                tokio::select! {
                    Some(event) = events.recv() => match event {
                        ReloadEvent::Applied => show(&registry),
                        ReloadEvent::Rejected(message) => eprintln!("{}", message),
                    },
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Shutdown signal received");
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}
