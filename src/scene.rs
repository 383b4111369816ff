use crate::bounds::BoundingBox;
use crate::error::QueryError;
use crate::graph::{NeighborGraph, Segment};
use crate::site::{NeighborKind, Point};
use serde::Serialize;

/// Rendering class of a coordinate group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Background,
    PointOfInterest,
    FirstNeighbor,
    SecondNeighbor,
    FirstNeighborEdge,
    SecondNeighborEdge,
}

impl Style {
    pub fn edge(kind: NeighborKind) -> Self {
        match kind {
            NeighborKind::First => Style::FirstNeighborEdge,
            NeighborKind::Second => Style::SecondNeighborEdge,
        }
    }

    pub fn neighbor(kind: NeighborKind) -> Self {
        match kind {
            NeighborKind::First => Style::FirstNeighbor,
            NeighborKind::Second => Style::SecondNeighbor,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    Points(Vec<Point>),
    Segments(Vec<Segment>),
}

impl Primitive {
    pub fn len(&self) -> usize {
        match self {
            Primitive::Points(points) => points.len(),
            Primitive::Segments(segments) => segments.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every position the primitive touches, segment endpoints included.
    pub fn positions(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        match self {
            Primitive::Points(points) => Box::new(points.iter()),
            Primitive::Segments(segments) => Box::new(segments.iter().flatten()),
        }
    }
}

/// One style-tagged group of coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layer {
    pub style: Style,
    pub primitive: Primitive,
}

impl Layer {
    pub fn points(style: Style, points: Vec<Point>) -> Self {
        Self { style, primitive: Primitive::Points(points) }
    }

    pub fn segments(style: Style, segments: Vec<Segment>) -> Self {
        Self { style, primitive: Primitive::Segments(segments) }
    }
}

/// The pre-classified coordinate groups handed to a renderer.
///
/// Layers are drawn in order, so later layers end up on top.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub title: String,
    pub layers: Vec<Layer>,
}

impl Scene {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), layers: Vec::new() }
    }

    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Partitions the sites around a point of interest.
    ///
    /// The background holds every other site. The point of interest and its first
    /// and second neighbors get their own point layers, plus edges from the point
    /// of interest to each neighbor.
    pub fn point_of_interest(graph: &NeighborGraph, poi: &str) -> Result<Self, QueryError> {
        let poi_site = graph.site(poi)?;
        let mut scene = Scene::new(format!("Neighbors of site {}", poi));

        scene.push(Layer::points(Style::Background, graph.background_coordinates(poi)?));
        for kind in [NeighborKind::First, NeighborKind::Second] {
            scene.push(Layer::segments(Style::edge(kind), graph.neighbor_edges(poi, kind)?));
        }
        for kind in [NeighborKind::First, NeighborKind::Second] {
            scene.push(Layer::points(Style::neighbor(kind), graph.neighbor_coordinates(poi, kind)?));
        }
        scene.push(Layer::points(Style::PointOfInterest, vec![poi_site.position]));

        tracing::info!(
            poi,
            background = scene.layer_len(Style::Background),
            first = scene.layer_len(Style::FirstNeighbor),
            second = scene.layer_len(Style::SecondNeighbor),
            "built point of interest scene"
        );
        Ok(scene)
    }

    /// Every site with all of its first and second neighbor edges.
    pub fn whole_graph(graph: &NeighborGraph) -> Result<Self, QueryError> {
        let mut scene = Scene::new(format!("Neighbor graph of {} sites", graph.count_sites()));
        scene.push(Layer::segments(Style::FirstNeighborEdge, graph.all_edges(NeighborKind::First)?));
        scene.push(Layer::segments(Style::SecondNeighborEdge, graph.all_edges(NeighborKind::Second)?));
        scene.push(Layer::points(Style::Background, graph.all_coordinates_sorted()));
        Ok(scene)
    }

    /// Total number of elements in the layers of the given style.
    pub fn layer_len(&self, style: Style) -> usize {
        self.layers
            .iter()
            .filter(|layer| layer.style == style)
            .map(|layer| layer.primitive.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.primitive.is_empty())
    }

    /// Bounding box of every position in the scene.
    pub fn bounds(&self) -> Option<BoundingBox<3>> {
        BoundingBox::from_points(self.layers.iter().flat_map(|layer| layer.primitive.positions()))
    }
}
