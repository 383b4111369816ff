mod common;

use sitegraph::{
    parse_lines, JsonRenderer, NeighborGraph, PlotRenderer, RenderError, Renderer, Scene, SiteMap, Style,
};

fn lattice_graph(n: i64) -> NeighborGraph {
    let sites: SiteMap = common::cubic_lattice(n).into_iter().collect();
    NeighborGraph::new(sites)
}

#[test]
fn test_point_of_interest_scene() {
    let graph = lattice_graph(4);
    let scene = Scene::point_of_interest(&graph, "1_1_1").unwrap();

    assert_eq!(scene.layer_len(Style::PointOfInterest), 1);
    assert_eq!(scene.layer_len(Style::FirstNeighbor), 6);
    assert_eq!(scene.layer_len(Style::SecondNeighbor), 12);
    assert_eq!(scene.layer_len(Style::FirstNeighborEdge), 6);
    assert_eq!(scene.layer_len(Style::SecondNeighborEdge), 12);
    assert_eq!(scene.layer_len(Style::Background), 64 - 1 - 6 - 12);

    let bounds = scene.bounds().unwrap();
    assert_eq!(bounds.min, [0.0, 0.0, 0.0]);
    assert_eq!(bounds.max, [3.0, 3.0, 3.0]);
}

#[test]
fn test_whole_graph_scene() {
    let graph = lattice_graph(2);
    let scene = Scene::whole_graph(&graph).unwrap();

    // 8 sites, each with 3 first and 3 second neighbors
    assert_eq!(scene.layer_len(Style::Background), 8);
    assert_eq!(scene.layer_len(Style::FirstNeighborEdge), 24);
    assert_eq!(scene.layer_len(Style::SecondNeighborEdge), 24);
}

#[test]
fn test_json_export() {
    let graph = lattice_graph(2);
    let scene = Scene::point_of_interest(&graph, "0_0_0").unwrap();

    let mut renderer = JsonRenderer::new(Vec::new()).pretty(true);
    renderer.render(&scene).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&renderer.into_inner()).unwrap();

    let layers = json["layers"].as_array().unwrap();
    assert_eq!(layers.len(), scene.layers.len());
    let styles: Vec<&str> = layers.iter().map(|l| l["style"].as_str().unwrap()).collect();
    assert_eq!(
        styles,
        vec![
            "background",
            "first_neighbor_edge",
            "second_neighbor_edge",
            "first_neighbor",
            "second_neighbor",
            "point_of_interest",
        ]
    );
    // The far corner is the only background site
    assert_eq!(json["layers"][0]["primitive"]["points"], serde_json::json!([[1.0, 1.0, 1.0]]));
}

#[test]
fn test_extreme_coordinates_give_render_error() {
    let graph: NeighborGraph = parse_lines(["1 1e308 0 0 1 2 0", "2 -1e308 0 0 1 1 0"]).unwrap().into();
    let scene = Scene::point_of_interest(&graph, "1").unwrap();

    // The raw bounds are finite, only their extent overflows
    let bounds = scene.bounds().unwrap();
    assert_eq!(bounds.min[0], -1e308);
    assert_eq!(bounds.max[0], 1e308);
    assert!(!bounds.padded().is_finite());

    let mut renderer = PlotRenderer::new("extreme_coordinates.svg", (320, 240));
    let err = renderer.render(&scene).unwrap_err();
    assert!(matches!(err, RenderError::UnboundedScene { .. }), "got {:?}", err);
    assert!(!renderer.path().exists());
}
