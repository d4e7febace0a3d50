#![allow(non_snake_case)]

mod app;
mod assets;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use masoori_core::config::{DEFAULT_BASE_URL, DEFAULT_CONSUME_ID, DEFAULT_REQUEST_TIMEOUT_SECS};
use masoori_core::{ApiClient, ApiConfig, ConsumeId};

/// Client and defaults chosen on the command line, set once before launch
static SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Launch-time settings shared with the component tree.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub client: ApiClient,
    /// Consume id shown by `/spend`
    pub default_consume_id: ConsumeId,
}

/// Get the launch settings (`None` only if `main` did not run first)
pub fn get_settings() -> Option<AppSettings> {
    SETTINGS.get().cloned()
}

/// Masoori - tarot card from your spending pattern
#[derive(Parser, Debug)]
#[command(name = "masoori-desktop")]
#[command(about = "Masoori - your weekly tarot card, drawn from your spending")]
struct Args {
    /// Card API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Consume id opened by the spend-pattern page
    #[arg(long, default_value_t = DEFAULT_CONSUME_ID)]
    consume_id: u64,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    timeout: u64,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    masoori_core::logging::init(args.verbose);

    let config = ApiConfig::new(&args.api_url).with_request_timeout(Duration::from_secs(args.timeout));
    let client = ApiClient::new(config).context("invalid API settings")?;

    tracing::info!(
        "Starting with API {} (default consume id {})",
        client.config().base_url,
        args.consume_id
    );

    let _ = SETTINGS.set(AppSettings {
        client,
        default_consume_id: ConsumeId(args.consume_id),
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Masoori")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use masoori_core::logging::default_directive;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["masoori-desktop"]).unwrap();
        assert_eq!(args.api_url, DEFAULT_BASE_URL);
        assert_eq!(args.consume_id, DEFAULT_CONSUME_ID);
        assert_eq!(args.timeout, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(default_directive(args.verbose), "warn");
    }

    #[test]
    fn verbose_flag_raises_level() {
        let args = Args::try_parse_from(["masoori-desktop", "-vv"]).unwrap();
        assert_eq!(default_directive(args.verbose), "debug");
    }
}
