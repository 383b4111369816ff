use clap::Parser;
use std::path::PathBuf;

/// Point of interest used when none is given on the command line.
pub const DEFAULT_POI: &str = "250";

/// Which partition of the sites to draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// One site, its first and second neighbors, and everything else as background.
    PointOfInterest(String),
    /// Every site with all first and second neighbor edges.
    WholeGraph,
}

/// Sitegraph - plot a lattice site with its first and second neighbors.
///
/// Neighbor records are read from standard input.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[command(name = "sitegraph", version, about)]
pub struct Config {
    /// Site to partition the lattice around
    #[arg(long, value_name = "ID", default_value = DEFAULT_POI)]
    pub poi: String,

    /// Draw every site with all neighbor edges instead of a single point of interest
    #[arg(long, conflicts_with = "poi")]
    pub all: bool,

    /// Plot file, SVG for .svg and a bitmap otherwise
    #[arg(long, value_name = "FILE", default_value = "neighbors.svg")]
    pub output: PathBuf,

    /// Additionally export the scene as JSON
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Image size in pixels
    #[arg(long, value_name = "WxH", default_value = "1024x768", value_parser = parse_size)]
    pub size: (u32, u32),
}

impl Config {
    pub fn view(&self) -> View {
        if self.all {
            View::WholeGraph
        } else {
            View::PointOfInterest(self.poi.clone())
        }
    }
}

fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let invalid = || format!("invalid image size {:?}, expected <width>x<height>", value);
    let (w, h) = value.split_once(['x', 'X']).ok_or_else(invalid)?;
    let w: u32 = w.parse().map_err(|_| invalid())?;
    let h: u32 = h.parse().map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }
    Ok((w, h))
}
