use anyhow::Context;
use tracing::info;

use gridloop::config::Config;
use gridloop::logging::setup_logging;
use gridloop::rng::seeded_rng;
use gridloop::terrain::Slope;
use gridloop::track::render::render_ascii;
use gridloop::track::{LoopGenerator, SegmentKind, TrackLayout, TrackSource};

fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = Config::load().context("Failed to load configuration")?;
    let mut rng = seeded_rng(config.track.seed);

    let generator = LoopGenerator::new(config.track.clone())?;
    let track = generator.generate(&mut rng);
    let layout = TrackLayout::from_path(&track.path, config.track.tile_size);
    let bounds = layout.bounds();

    match track.source {
        TrackSource::Generated { attempt } => info!(attempt, nodes = track.path.len(), "Track generated"),
        TrackSource::Fallback => info!(nodes = track.path.len(), "Track fell back to rectangle"),
    }
    info!(
        straight = layout.count(SegmentKind::Straight),
        curved = layout.count(SegmentKind::Curved),
        width = bounds.size().x,
        height = bounds.size().y,
        "Track layout"
    );

    let slope = Slope::generate(&config.slope, &mut rng).context("Failed to generate slope")?;
    info!(
        samples = slope.samples.len(),
        outline = slope.outline.len(),
        drop = slope.total_drop(),
        "Slope generated"
    );

    println!("{}", render_ascii(&track.path));

    Ok(())
}
