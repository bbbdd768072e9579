//! Common utilities for the demos.

use anyhow::Result;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use wavegraph::{FfplayPlayer, RenderConfig, Wave, play_wave};

/// Sample rate used by every demo.
pub const SAMPLE_RATE: u32 = 44_100;

/// Installs a log subscriber honoring `RUST_LOG` (default `info`).
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Renders `seconds` of `wave` and plays it with ffplay.
pub fn play<W: Wave>(wave: W, name: &str, seconds: u64) -> Result<()> {
    tracing::info!("Playing {} for {} seconds", name, seconds);
    let config = RenderConfig::default()
        .with_sample_rate(SAMPLE_RATE)
        .with_duration(Duration::from_secs(seconds));
    let mut player = FfplayPlayer::default();
    play_wave(&mut player, wave, config)?;
    Ok(())
}
