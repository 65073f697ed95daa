//! Renders one interval to a WAV file.
//!
//! ```text
//! cargo run --example render_interval --features wav -- <interval> [root] [up|down] [out.wav]
//! cargo run --example render_interval --features wav -- quinte A4 down quinte.wav
//! ```

use anyhow::{Context, Result};
use earshot::music::{Interval, NoteName, resolve_down, resolve_up};
use earshot::player::{AudioPlayer, SynthPlayer, WavSink};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE_RATE: u32 = 44100;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(interval) = args.first() else {
        anyhow::bail!("usage: render_interval <interval> [root] [up|down] [out.wav]");
    };
    let interval: Interval = interval.parse()?;
    let root: NoteName = match args.get(1) {
        Some(root) => root.parse()?,
        None => "A4".parse()?,
    };
    let pair = match args.get(2).map(String::as_str) {
        None | Some("up") => resolve_up(root, interval),
        Some("down") => resolve_down(root, interval),
        Some(other) => anyhow::bail!("unknown direction '{other}'"),
    };
    let path = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| format!("{}.wav", interval.name()));

    let mut player = SynthPlayer::<SAMPLE_RATE, _>::new(WavSink::new(&path, SAMPLE_RATE));
    player.initialize()?;
    player
        .play_pair(&pair.notes())
        .with_context(|| format!("rendering {pair}"))?;
    player.into_sink().finish()?;

    info!(%interval, %pair, %path, "interval written");
    println!("{interval}: {pair} -> {path}");
    Ok(())
}
