//! Renderers consuming a [`Scene`].
//!
//! Nothing here feeds back into parsing or queries. A renderer receives the
//! finished coordinate groups and produces output.

use crate::bounds::BoundingBox;
use crate::error::RenderError;
use crate::scene::{Primitive, Scene, Style};
use crate::site::Point;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Trait implemented by every consumer of a finished scene.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError>;
}

/// Draws a 3D scatter and line chart with plotters.
///
/// Paths ending in `.svg` use the SVG backend; anything else is drawn as a bitmap
/// whose format follows the extension.
pub struct PlotRenderer {
    path: PathBuf,
    size: (u32, u32),
}

impl PlotRenderer {
    pub fn new(path: impl Into<PathBuf>, size: (u32, u32)) -> Self {
        Self { path: path.into(), size }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_svg(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    }
}

impl Renderer for PlotRenderer {
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError> {
        let bounds = chart_bounds(scene)?;
        if self.is_svg() {
            let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
            draw_scene(&root, scene, &bounds)?;
        } else {
            let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
            draw_scene(&root, scene, &bounds)?;
        }
        tracing::info!(path = %self.path.display(), "plot written");
        Ok(())
    }
}

fn draw_error<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Draw(err.to_string())
}

fn to_coord(p: &Point) -> (f64, f64, f64) {
    (p[0], p[1], p[2])
}

fn edge_color(style: Style) -> RGBColor {
    match style {
        Style::SecondNeighborEdge | Style::SecondNeighbor => RED,
        _ => BLUE,
    }
}

/// Padded chart ranges for the scene. Plotters cannot lay out axes over empty or
/// non-finite ranges, so those scenes are rejected before a backend is created.
fn chart_bounds(scene: &Scene) -> Result<BoundingBox<3>, RenderError> {
    let bounds = scene.bounds().ok_or(RenderError::EmptyScene)?.padded();
    if !bounds.is_finite() {
        return Err(RenderError::UnboundedScene { min: bounds.min, max: bounds.max });
    }
    Ok(bounds)
}

fn draw_scene<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &Scene,
    bounds: &BoundingBox<3>,
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&scene.title, ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_3d(bounds.range(0), bounds.range(1), bounds.range(2))
        .map_err(draw_error)?;

    chart.configure_axes().draw().map_err(draw_error)?;

    for layer in &scene.layers {
        match (&layer.primitive, layer.style) {
            (Primitive::Segments(segments), style) => {
                let color = edge_color(style);
                chart
                    .draw_series(
                        segments
                            .iter()
                            .map(|[a, b]| PathElement::new(vec![to_coord(a), to_coord(b)], color)),
                    )
                    .map_err(draw_error)?;
            }
            (Primitive::Points(points), Style::Background) => {
                chart
                    .draw_series(points.iter().map(|p| Circle::new(to_coord(p), 1, BLACK.filled())))
                    .map_err(draw_error)?;
            }
            (Primitive::Points(points), Style::PointOfInterest) => {
                chart
                    .draw_series(points.iter().map(|p| TriangleMarker::new(to_coord(p), 7, BLUE.filled())))
                    .map_err(draw_error)?;
            }
            (Primitive::Points(points), Style::FirstNeighbor) => {
                chart
                    .draw_series(points.iter().map(|p| {
                        EmptyElement::at(to_coord(p)) + Rectangle::new([(-4, -4), (4, 4)], RED.filled())
                    }))
                    .map_err(draw_error)?;
            }
            (Primitive::Points(points), Style::SecondNeighbor) => {
                chart
                    .draw_series(points.iter().map(|p| {
                        EmptyElement::at(to_coord(p))
                            + Polygon::new(vec![(0, -5), (5, 0), (0, 5), (-5, 0)], GREEN.filled())
                    }))
                    .map_err(draw_error)?;
            }
            (Primitive::Points(points), style) => {
                let color = edge_color(style);
                chart
                    .draw_series(points.iter().map(|p| Circle::new(to_coord(p), 2, color.filled())))
                    .map_err(draw_error)?;
            }
        }
    }

    root.present().map_err(draw_error)?;
    Ok(())
}

/// Writes the scene as JSON, one document per call.
pub struct JsonRenderer<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, pretty: false }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl JsonRenderer<BufWriter<File>> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, scene: &Scene) -> Result<(), RenderError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, scene)?;
        } else {
            serde_json::to_writer(&mut self.writer, scene)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
