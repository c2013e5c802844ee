use std::env;
use std::path::PathBuf;

use anyhow::Context;
use glam::Vec3;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use oubliette::asset::load_summary;
use oubliette::map::builder::{BuildConfig, LayoutBuilder};
use oubliette::map::parser::SummaryParser;
use oubliette::map::render::{Instantiator, LoggingInstantiator};

/// Routes log output through an env-filtered fmt subscriber; `RUST_LOG`
/// overrides the default `info` level.
fn init_tracing() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    tracing::subscriber::set_global_default(subscriber).context("could not set tracing subscriber")?;
    Ok(())
}

/// The summary file to load, if one was given on the command line.
fn parse_args() -> anyhow::Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);
    let path = args.next().map(PathBuf::from);
    if let Some(extra) = args.next() {
        anyhow::bail!("unexpected argument: {extra}");
    }
    Ok(path)
}

pub fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let path = parse_args()?;
    let text = load_summary(path.as_deref()).context("could not load maze summary")?;

    let parsed = SummaryParser::parse(&text);
    for warning in &parsed.warnings {
        warn!("{warning}");
    }
    info!(
        cells = parsed.model.len(),
        floors = parsed.model.floor_count(),
        warnings = parsed.warnings.len(),
        "Summary parsed"
    );

    let commands = LayoutBuilder::build(&parsed.model, Vec3::ZERO, &BuildConfig::default());
    let mut sink = LoggingInstantiator::default();
    sink.place_all(&commands);
    info!(placed = sink.placed, "Layout complete");

    Ok(())
}
