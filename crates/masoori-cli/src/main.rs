//! Masoori CLI
//!
//! Thin wrapper around masoori-core for looking up cards without the desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # Show the card for consume id 4
//! masoori card 4
//!
//! # Same, as the raw JSON the API returned
//! masoori card 4 --json
//!
//! # Show the most recent card, if any
//! masoori recent
//!
//! # Talk to another server
//! masoori --api-url https://api.example.com card 4
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use masoori_core::config::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use masoori_core::{ApiClient, ApiConfig, CardView, ConsumeId, ConsumeInfo};

/// Masoori - tarot cards drawn from your spending
#[derive(Parser)]
#[command(name = "masoori")]
#[command(version = "0.1.0")]
#[command(about = "Masoori - tarot cards drawn from your spending")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Card API base URL
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the card for a consume id
    Card {
        /// Consume id
        id: ConsumeId,

        /// Print the decoded response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the most recent card
    Recent {
        /// Print the decoded response as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Human-readable rendering of one card.
fn describe(info: &ConsumeInfo) -> String {
    let view = CardView::from(info);
    let mut out = String::new();

    out.push_str(&format!("Card: {}\n", view.bottom_text()));
    out.push_str(&format!("  ID: {}\n", info.card.id));
    if let Some(path) = view.image_path() {
        out.push_str(&format!("  Image: {}\n", path));
    }
    let tags: Vec<String> = view.hashtags().iter().map(|t| t.label()).collect();
    if !tags.is_empty() {
        out.push_str(&format!("  Tags: {}\n", tags.join(" ")));
    }
    let description = view.description();
    if !description.is_empty() {
        out.push('\n');
        out.push_str(&description);
        out.push('\n');
    }
    out
}

fn print_info(info: &ConsumeInfo, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(info)?);
    } else {
        print!("{}", describe(info));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    masoori_core::logging::init(cli.verbose);

    let config =
        ApiConfig::new(&cli.api_url).with_request_timeout(Duration::from_secs(cli.timeout));
    let client = ApiClient::new(config).context("invalid API settings")?;

    match cli.command {
        Commands::Card { id, json } => {
            let info = client
                .get_consume(id)
                .await
                .with_context(|| format!("failed to load card for consume {}", id))?;
            print_info(&info, json)?;
        }

        Commands::Recent { json } => {
            match client
                .get_recent_card()
                .await
                .context("failed to load the recent card")?
            {
                Some(info) => print_info(&info, json)?,
                None => println!("No card this week"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use masoori_core::{BasicItem, Card};

    fn sample() -> ConsumeInfo {
        ConsumeInfo {
            card: Card {
                id: 12,
                name: "The Star".to_string(),
                description: "Hope returns.\r\nSave a little.".to_string(),
                image_path: "https://img.example.com/star.png".to_string(),
                ..Card::default()
            },
            basic_list: vec![
                BasicItem { id: 1, keyword: "coffee".to_string() },
                BasicItem { id: 2, keyword: "taxi".to_string() },
            ],
        }
    }

    #[test]
    fn describe_lists_card_details() {
        let text = describe(&sample());
        assert!(text.starts_with("Card: The Star\n"));
        assert!(text.contains("  ID: 12\n"));
        assert!(text.contains("  Image: https://img.example.com/star.png\n"));
        assert!(text.contains("  Tags: #coffee #taxi\n"));
        assert!(text.contains("Hope returns.\nSave a little."));
    }

    #[test]
    fn describe_skips_empty_fields() {
        let text = describe(&ConsumeInfo::default());
        assert!(!text.contains("Image:"));
        assert!(!text.contains("Tags:"));
    }

    #[test]
    fn cli_parses_card_command() {
        let cli = Cli::try_parse_from(["masoori", "card", "4", "--json"]).unwrap();
        match cli.command {
            Commands::Card { id, json } => {
                assert_eq!(id, ConsumeId(4));
                assert!(json);
            }
            _ => panic!("expected card command"),
        }
        assert_eq!(cli.api_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn cli_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["masoori", "card", "four"]).is_err());
    }
}
