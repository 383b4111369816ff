//! # sitegraph
//!
//! `sitegraph` reads a line-oriented description of a 3D lattice, where every site
//! lists its first (nearest) and second (next-nearest) neighbors, and turns it into
//! coordinate groups for visual inspection of the neighbor relation.
//!
//! ## Pipeline
//!
//! - **Parsing**: [`parse_line`] turns one record into a [`Site`], [`parse_reader`],
//!   [`parse_lines`] and [`parse_lines_par`] fold a whole stream into a [`SiteMap`].
//!   Neighbor counts are checked strictly since they are the only field delimiters.
//! - **Queries**: [`NeighborGraph`] answers which coordinates belong to a site's first
//!   or second neighbors, and which sites are background to a point of interest.
//! - **Rendering**: a [`Scene`] of style-tagged layers is handed to a [`Renderer`],
//!   either [`PlotRenderer`] (plotters, SVG or bitmap) or [`JsonRenderer`].
//!
//! Parsing and queries do not depend on any plotting code.
//!
//! ## Example
//!
//! ```
//! use sitegraph::{parse_lines, NeighborGraph};
//!
//! let graph = NeighborGraph::new(parse_lines([
//!     "1 0.0 0.0 0.0 2 2 3 1 4",
//!     "2 1.0 0.0 0.0 1 1 0",
//!     "3 0.0 1.0 0.0 1 1 0",
//!     "4 1.0 1.0 0.0 0 1 1",
//! ])?);
//!
//! assert_eq!(graph.first_neighbor_coordinates("1")?, vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
//! assert_eq!(graph.second_neighbor_coordinates("1")?, vec![[1.0, 1.0, 0.0]]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bounds;
pub mod config;
mod error;
mod graph;
mod parser;
mod render;
mod scene;
mod site;
mod site_map;

pub use bounds::BoundingBox;
pub use error::ParseError;
pub use error::QueryError;
pub use error::RecordError;
pub use error::RenderError;
pub use graph::NeighborGraph;
pub use graph::Segment;
pub use parser::parse_line;
pub use parser::parse_lines;
pub use parser::parse_lines_par;
pub use parser::parse_reader;
pub use parser::PREFIX_TOKENS;
pub use render::JsonRenderer;
pub use render::PlotRenderer;
pub use render::Renderer;
pub use scene::Layer;
pub use scene::Primitive;
pub use scene::Scene;
pub use scene::Style;
pub use site::Axis;
pub use site::NeighborKind;
pub use site::Point;
pub use site::Site;
pub use site_map::SiteMap;
