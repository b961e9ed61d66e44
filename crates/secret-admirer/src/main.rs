//! Entry point for the Secret Admirer desktop app.

use std::path::PathBuf;

use admirer_core::AdmirerConfig;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use secret_admirer::components::app::App;
use secret_admirer::state;
use secret_admirer::ADMIRER_CSS;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "secret-admirer")]
#[command(about = "Send anonymous notes and guess who sent yours")]
struct Args {
    /// TOML config file (overrides ADMIRER_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme (neon or midnight), overrides the config file
    #[arg(short, long)]
    theme: Option<String>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("secret_admirer=info,admirer_core=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => AdmirerConfig::load(path),
        None => AdmirerConfig::from_env(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load config, using defaults");
        AdmirerConfig::default()
    });
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    tracing::info!(user = %config.user.username, theme = %config.theme, "Starting Secret Admirer");
    state::install_config(config);

    // Optional window size from env
    let win_w = std::env::var("ADMIRER_WIN_W").ok().and_then(|v| v.parse::<f64>().ok());
    let win_h = std::env::var("ADMIRER_WIN_H").ok().and_then(|v| v.parse::<f64>().ok());

    let mut wb = WindowBuilder::new().with_title("Secret Admirer");
    if let (Some(w), Some(h)) = (win_w, win_h) {
        wb = wb.with_inner_size(LogicalSize::new(w, h));
    } else {
        wb = wb.with_inner_size(LogicalSize::new(520.0, 820.0));
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!(r#"<style>{}</style>"#, ADMIRER_CSS)),
        )
        .launch(App);
}
