#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use msi_core::config::CONFIG_FILE_NAME;
use msi_core::SiteConfig;
use tracing_subscriber::EnvFilter;

/// Global site config, set once at startup
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site config (loaded at startup or built-in defaults)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Maths and Science Infinity - brochure site
#[derive(Parser, Debug)]
#[command(name = "msi-site")]
#[command(about = "Maths and Science Infinity - Empowering Through Education")]
struct Args {
    /// Site config JSON (default: <config dir>/msi-site/site.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

/// Default config location, only if the file exists.
fn default_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("msi-site").join(CONFIG_FILE_NAME);
    path.exists().then_some(path)
}

/// Explicit `--config` must load; the default location falls back quietly.
fn resolve_config(explicit: Option<PathBuf>) -> anyhow::Result<SiteConfig> {
    match explicit {
        Some(path) => Ok(SiteConfig::load(&path)?),
        None => match default_config_path() {
            Some(path) => match SiteConfig::load(&path) {
                Ok(config) => Ok(config),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid site config");
                    Ok(SiteConfig::default())
                }
            },
            None => Ok(SiteConfig::default()),
        },
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = resolve_config(args.config)?;
    let title = format!("{} - {}", config.short_name, config.organization);

    tracing::info!(
        organization = %config.organization,
        nav_items = config.nav_items.len(),
        "Starting site"
    );

    // Store config globally
    let _ = SITE_CONFIG.set(config);

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
