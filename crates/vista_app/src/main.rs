//! Vista
//!
//! Shows the running platform and the live viewport size.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vista_platform::{PlatformOs, ViewportDimensions};

mod app;
mod config;

use config::VistaConfig;

#[derive(Parser)]
#[command(name = "vista")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Cross-platform viewport info screen", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a window showing the screen
    Run {
        /// Config file (defaults to ./vista.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Window title
        #[arg(long)]
        title: Option<String>,

        /// Initial window width in logical pixels
        #[arg(long)]
        width: Option<u32>,

        /// Initial window height in logical pixels
        #[arg(long)]
        height: Option<u32>,

        /// Platform name to display instead of the detected one
        #[arg(long, value_parser = parse_platform)]
        platform: Option<PlatformOs>,
    },

    /// Render the screen once without a window and print its text
    Render {
        /// Initial viewport size, e.g. 375x812
        #[arg(short, long, default_value = "375x812", value_parser = parse_size)]
        size: ViewportDimensions,

        /// Size change delivered after activation; repeatable
        #[arg(short, long = "resize", value_parser = parse_size)]
        resize: Vec<ViewportDimensions>,

        /// Platform name to display instead of the detected one
        #[arg(long, value_parser = parse_platform)]
        platform: Option<PlatformOs>,
    },
}

fn parse_size(s: &str) -> Result<ViewportDimensions, String> {
    app::parse_size(s).map_err(|e| e.to_string())
}

fn parse_platform(s: &str) -> Result<PlatformOs, String> {
    s.parse::<PlatformOs>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over the verbosity flag
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Run {
            config,
            title,
            width,
            height,
            platform,
        } => cmd_run(config, title, width, height, platform),

        Commands::Render {
            size,
            resize,
            platform,
        } => cmd_render(size, &resize, platform),
    }
}

fn cmd_run(
    config_path: Option<PathBuf>,
    title: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    platform: Option<PlatformOs>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => VistaConfig::load(&path)?,
        None => VistaConfig::load_from_dir(&std::env::current_dir()?)?,
    };

    let mut window = config.window_config();
    if let Some(title) = title {
        window = window.title(title);
    }
    let (width, height) = (
        width.unwrap_or(window.width),
        height.unwrap_or(window.height),
    );
    window = window.size(width, height);
    if window.width == 0 || window.height == 0 {
        anyhow::bail!("window size must be non-zero");
    }
    let platform = platform.unwrap_or_else(|| config.platform());

    info!(
        "Opening '{}' at {}x{} as {}",
        window.title, window.width, window.height, platform
    );
    run_window(window, platform)
}

#[cfg(not(any(target_os = "android", target_os = "ios")))]
fn run_window(window: vista_platform::WindowConfig, platform: PlatformOs) -> Result<()> {
    app::run_desktop(window, platform)
}

#[cfg(any(target_os = "android", target_os = "ios"))]
fn run_window(_window: vista_platform::WindowConfig, platform: PlatformOs) -> Result<()> {
    anyhow::bail!("windowed mode is not available on {platform}; use `vista render`")
}

fn cmd_render(
    size: ViewportDimensions,
    resize: &[ViewportDimensions],
    platform: Option<PlatformOs>,
) -> Result<()> {
    let platform = platform.unwrap_or_else(PlatformOs::current);
    let text = app::render_headless(platform, size, resize)?;
    println!("{text}");
    Ok(())
}
