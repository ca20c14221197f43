use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use coinsend::cli::{handle_presets_command, handle_send_command, SendArgs, SendOutcome};
use coinsend::config::{CoinSendPaths, Settings};
use coinsend::logging::init_logging;
use coinsend::models::Coins;

#[derive(Parser)]
#[command(
    name = "coinsend",
    author = "Kaylee Beyene",
    version,
    about = "Send coins from a terminal wallet",
    long_about = "coinsend is a mock wallet: pick a preset amount, name a receiver \
                  and watch the balance count down once the transfer goes through. \
                  Nothing leaves your machine."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Send coins without the TUI
    Send(SendArgs),

    /// List the preset amounts
    Presets,

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = CoinSendPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let _log_guard = init_logging(&paths)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            coinsend::tui::run_tui(&settings, &paths)?;
        }
        Commands::Send(args) => {
            if let SendOutcome::Rejected = handle_send_command(&settings, args)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Presets => handle_presets_command(&settings),
        Commands::Init => {
            println!("Initializing coinsend at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
            println!();
            println!("Run 'coinsend' to open your wallet.");
        }
        Commands::Config => print_config(&paths, &settings),
    }

    Ok(ExitCode::SUCCESS)
}

fn print_config(paths: &CoinSendPaths, settings: &Settings) {
    println!("coinsend Configuration");
    println!("======================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Log directory:  {}", paths.log_dir().display());
    println!();
    println!("Settings:");
    println!("  Initial balance:    {}", Coins::new(settings.initial_balance));
    println!("  Presets:            {}", settings.preset_amounts.len());
    println!("  Network delay:      {} ms", settings.network_delay_ms);
    println!("  Animation duration: {} ms", settings.animation_duration_ms);
    println!("  Frame interval:     {} ms", settings.frame_interval_ms);
    println!("  Sound enabled:      {}", settings.sound_enabled);
    match &settings.profile_image {
        Some(path) => println!("  Profile image:      {}", path.display()),
        None => println!("  Profile image:      (none)"),
    }
    println!("  Time format:        {}", settings.time_format);
}
