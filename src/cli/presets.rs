//! Preset amount listing

use tabled::{settings::Style, Table, Tabled};

use crate::config::Settings;
use crate::models::Coins;

#[derive(Tabled)]
struct PresetRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Affordable")]
    affordable: &'static str,
}

/// Render the configured presets as a table
pub fn format_presets(settings: &Settings) -> String {
    let balance = Coins::new(settings.initial_balance);
    let rows: Vec<PresetRow> = settings
        .presets()
        .into_iter()
        .enumerate()
        .map(|(i, amount)| PresetRow {
            key: if i < 9 { (i + 1).to_string() } else { "-".to_string() },
            amount: amount.to_string(),
            affordable: if amount <= balance { "yes" } else { "no" },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Handle `coinsend presets`
pub fn handle_presets_command(settings: &Settings) {
    println!("Starting balance: {}", Coins::new(settings.initial_balance));
    println!("{}", format_presets(settings));
}
