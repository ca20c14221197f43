//! Headless send command
//!
//! Runs the same wallet the TUI uses, printing popups as plain lines and
//! sleeping between frames instead of waiting on terminal events.

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::models::{Coins, TransactionRecord};
use crate::services::{
    AudioSurface, DisplaySurface, HistorySurface, InputSurface, Popup, PopupKind, PopupSurface,
    ProfilePicture, SoundCue, Wallet,
};

/// Arguments for `coinsend send`
#[derive(Debug, Clone, Args)]
pub struct SendArgs {
    /// Receiver username
    #[arg(short, long)]
    pub to: String,

    /// Amount of coins (e.g. 100000 or 100,000)
    #[arg(short, long, value_parser = parse_coins)]
    pub amount: Coins,

    /// Starting balance (defaults to the configured balance)
    #[arg(long)]
    pub balance: Option<u64>,

    /// Simulated network delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Balance animation length in milliseconds
    #[arg(long)]
    pub duration_ms: Option<u64>,
}

fn parse_coins(s: &str) -> Result<Coins, String> {
    Coins::parse(s).map_err(|e| e.to_string())
}

/// How a headless send ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Committed(TransactionRecord),
    Rejected,
}

/// Surfaces that print to a pair of writers
pub struct ConsoleSurfaces<O: Write, E: Write> {
    out: O,
    err: E,
    sound_enabled: bool,
    time_format: String,
    /// Last balance text handed to the display
    pub balance_text: String,
}

impl<O: Write, E: Write> ConsoleSurfaces<O, E> {
    pub fn new(out: O, err: E, settings: &Settings) -> Self {
        Self {
            out,
            err,
            sound_enabled: settings.sound_enabled,
            time_format: settings.time_format.clone(),
            balance_text: String::new(),
        }
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }
}

// Console output is best effort; a closed pipe must not abort the flow.
impl<O: Write, E: Write> DisplaySurface for ConsoleSurfaces<O, E> {
    fn render_balance(&mut self, text: &str) {
        self.balance_text = text.to_string();
    }

    fn render_profile(&mut self, picture: &ProfilePicture) {
        tracing::debug!(picture = %picture.label(), "profile picture not shown on console");
    }
}

impl<O: Write, E: Write> PopupSurface for ConsoleSurfaces<O, E> {
    fn show(&mut self, popup: Popup) {
        let _ = match popup {
            Popup::Error(message) => writeln!(self.err, "Error: {}", message),
            Popup::Loading => writeln!(self.out, "Sending..."),
            Popup::Success(message) => writeln!(self.out, "{}", message),
        };
    }

    fn hide(&mut self, _kind: PopupKind) {}
}

impl<O: Write, E: Write> HistorySurface for ConsoleSurfaces<O, E> {
    fn prepend(&mut self, record: &TransactionRecord) {
        let _ = writeln!(
            self.out,
            "{} @ {} {}",
            record.receiver_label(),
            record.time_label(&self.time_format),
            record.amount_label()
        );
    }
}

impl<O: Write, E: Write> InputSurface for ConsoleSurfaces<O, E> {
    fn reset_inputs(&mut self) {}
}

impl<O: Write, E: Write> AudioSurface for ConsoleSurfaces<O, E> {
    fn play(&mut self, cue: SoundCue) {
        if self.sound_enabled && cue == SoundCue::Success {
            let _ = self.out.write_all(b"\x07");
        }
    }
}

/// Run one transfer to completion on the given surfaces
pub fn run_send<O: Write, E: Write>(
    settings: &Settings,
    args: &SendArgs,
    console: &mut ConsoleSurfaces<O, E>,
) -> SendOutcome {
    let balance = Coins::new(args.balance.unwrap_or(settings.initial_balance));
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| settings.network_delay());
    let duration = args
        .duration_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| settings.animation_duration());

    let mut wallet = Wallet::new(balance, delay, duration);
    console.render_balance(&balance.to_string());
    wallet.select(args.amount, console);

    if wallet.submit(&args.to, Instant::now(), console).is_err() {
        let _ = writeln!(console.out, "Balance: {}", wallet.balance());
        return SendOutcome::Rejected;
    }

    let mut committed = None;
    while !wallet.is_settled() {
        std::thread::sleep(settings.frame_interval());
        if let Some(record) = wallet.tick(Instant::now(), console) {
            committed = Some(record);
        }
    }

    let _ = writeln!(console.out, "New balance: {}", console.balance_text);
    match committed {
        Some(record) => SendOutcome::Committed(record),
        None => SendOutcome::Rejected,
    }
}

/// Handle `coinsend send`
pub fn handle_send_command(settings: &Settings, args: SendArgs) -> Result<SendOutcome> {
    let mut console = ConsoleSurfaces::new(io::stdout().lock(), io::stderr().lock(), settings);
    let outcome = run_send(settings, &args, &mut console);
    let (mut out, _) = console.into_writers();
    out.flush()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(to: &str, amount: u64, balance: u64) -> SendArgs {
        SendArgs {
            to: to.to_string(),
            amount: Coins::new(amount),
            balance: Some(balance),
            delay_ms: Some(0),
            duration_ms: Some(0),
        }
    }

    fn quiet_settings() -> Settings {
        let mut settings = Settings::default();
        settings.sound_enabled = false;
        settings.frame_interval_ms = 1;
        settings
    }

    #[test]
    fn test_headless_send_commits() {
        let settings = quiet_settings();
        let mut console = ConsoleSurfaces::new(Vec::new(), Vec::new(), &settings);

        let outcome = run_send(&settings, &args("alice", 100_000, 92_538_280), &mut console);
        let (out, err) = console.into_writers();
        let out = String::from_utf8(out).unwrap();

        match outcome {
            SendOutcome::Committed(record) => assert_eq!(record.receiver, "alice"),
            SendOutcome::Rejected => panic!("transfer should commit"),
        }
        assert!(out.contains("Sending..."));
        assert!(out.contains("100,000 coins successfully sent to alice!"));
        assert!(out.contains("Sent to: alice @"));
        assert!(out.contains("New balance: 92,438,280"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_headless_send_rejects() {
        let settings = quiet_settings();
        let mut console = ConsoleSurfaces::new(Vec::new(), Vec::new(), &settings);

        let outcome = run_send(&settings, &args("bob", 1_000, 500), &mut console);
        let (out, err) = console.into_writers();

        assert_eq!(outcome, SendOutcome::Rejected);
        assert!(String::from_utf8(err)
            .unwrap()
            .contains("You only have 500 coins. The selected amount (1,000) is too high."));
        assert!(String::from_utf8(out).unwrap().contains("Balance: 500"));
    }

    #[test]
    fn test_parse_coins_arg() {
        assert_eq!(parse_coins("100,000"), Ok(Coins::new(100_000)));
        assert!(parse_coins("lots").is_err());
    }
}
