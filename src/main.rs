//! CLI entry point for input-send-events
//!
//! Runs `input ... events ...` commands against a device snapshot file
//! and shows the configs they would stage.

use clap::{Parser, Subcommand};
use colored::*;
use input_send_events::commands::{run_command, run_script, CommandStatus};
use input_send_events::config::{HandlerContext, InputConfigStore};
use input_send_events::devices::{DeviceList, InputDevice};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "input-send-events")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List devices and their send-events modes
    Devices {
        /// Path to the device snapshot file
        #[arg(short, long, default_value = "~/.config/input-send-events/devices.toml")]
        devices: PathBuf,
    },

    /// Run commands interactively (toggle allowed)
    Exec {
        /// Path to the device snapshot file
        #[arg(short, long, default_value = "~/.config/input-send-events/devices.toml")]
        devices: PathBuf,

        /// Command lines, e.g. 'input * events toggle'
        #[arg(required = true)]
        commands: Vec<String>,
    },

    /// Run a config script as if read at startup (toggle rejected)
    Load {
        /// Path to the device snapshot file
        #[arg(short, long, default_value = "~/.config/input-send-events/devices.toml")]
        devices: PathBuf,

        /// Path to the config script
        script: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Devices { devices } => list_devices(&devices)?,
        Commands::Exec { devices, commands } => exec_commands(&devices, &commands)?,
        Commands::Load { devices, script } => load_script(&devices, &script)?,
    }

    Ok(())
}

/// Expand tilde in a user-supplied path
fn expand_path(path: &Path) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    Ok(PathBuf::from(expanded.as_ref()))
}

fn load_devices(path: &Path) -> anyhow::Result<DeviceList> {
    let path = expand_path(path)?;
    let devices = DeviceList::load(&path)?;
    println!(
        "{} Loaded {} device{} from {}",
        "→".cyan(),
        devices.len(),
        if devices.len() == 1 { "" } else { "s" },
        path.display()
    );
    Ok(devices)
}

/// List every device with its current and supported modes
fn list_devices(path: &Path) -> anyhow::Result<()> {
    let devices = load_devices(path)?;
    println!();

    for device in devices.snapshots() {
        let identifier = device.identifier().cyan().bold();

        match device.send_events() {
            Some(state) => {
                let supported = state
                    .supported
                    .modes()
                    .iter()
                    .map(|mode| mode.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!(
                    "{} → {} {}",
                    identifier,
                    state.current.to_string().green(),
                    format!("[{}]", supported).dimmed()
                );
            }
            None => println!("{} → {}", identifier, "no send-events control".yellow()),
        }
    }

    Ok(())
}

/// Run command lines with toggling allowed
fn exec_commands(path: &Path, commands: &[String]) -> anyhow::Result<()> {
    let devices = load_devices(path)?;
    let mut store = InputConfigStore::new();
    let mut ctx = HandlerContext::new();
    let mut failed = false;

    for command in commands {
        if let Err(e) = run_command(command, &mut ctx, &devices, &mut store) {
            report_failure(command, e.status(), &e.to_string());
            failed = true;
        }
    }

    print_staged(&store);

    if failed {
        std::process::exit(1);
    }

    Ok(())
}

/// Run a script the way a startup config is read
fn load_script(devices_path: &Path, script_path: &Path) -> anyhow::Result<()> {
    let devices = load_devices(devices_path)?;
    let script_path = expand_path(script_path)?;
    let script = fs::read_to_string(&script_path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", script_path.display(), e))?;

    let mut store = InputConfigStore::new();
    let failures = run_script(&script, &devices, &mut store);

    for failure in &failures {
        report_failure(
            &format!("line {}", failure.line),
            failure.error.status(),
            &failure.error.to_string(),
        );
    }

    print_staged(&store);

    if !failures.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn report_failure(what: &str, status: CommandStatus, message: &str) {
    let label = match status {
        CommandStatus::Invalid => "invalid".red().bold(),
        CommandStatus::Failure => "failed".red().bold(),
    };
    eprintln!("{} {}: {}", label, what.dimmed(), message);
}

fn print_staged(store: &InputConfigStore) {
    println!();

    if store.is_empty() {
        println!("{} Nothing staged", "✓".green());
        return;
    }

    for config in store.iter() {
        let mode = match config.send_events {
            Some(mode) => mode.to_string().green(),
            None => "unset".dimmed(),
        };
        println!("{} → {}", config.identifier.cyan().bold(), mode);
    }

    println!("\n{} Staged: {} config{}", "✓".green(), store.len(), if store.len() == 1 { "" } else { "s" });
}
