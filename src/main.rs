use anyhow::{Context, Result};
use clap::Parser;
use sitegraph::config::{Config, View};
use sitegraph::{parse_reader, JsonRenderer, NeighborGraph, PlotRenderer, Renderer, Scene};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    let sites = parse_reader(io::stdin().lock()).context("failed to parse neighbor records")?;
    let graph = NeighborGraph::from(sites);

    let scene = match config.view() {
        View::PointOfInterest(poi) => Scene::point_of_interest(&graph, &poi)
            .with_context(|| format!("failed to select neighbors of site {poi:?}"))?,
        View::WholeGraph => Scene::whole_graph(&graph).context("failed to collect neighbor edges")?,
    };

    if let Some(path) = &config.json {
        JsonRenderer::create(path)
            .and_then(|mut json| json.render(&scene))
            .with_context(|| format!("failed to export scene to {}", path.display()))?;
    }

    PlotRenderer::new(&config.output, config.size)
        .render(&scene)
        .with_context(|| format!("failed to plot to {}", config.output.display()))?;

    println!("Plot saved to {}", config.output.display());
    Ok(())
}
