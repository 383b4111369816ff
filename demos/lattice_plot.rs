use sitegraph::{parse_lines, JsonRenderer, NeighborGraph, PlotRenderer, Renderer, Scene, Site};

/// Face-centered cubic lattice records: 12 first neighbors at a/sqrt(2), 6 second at a.
fn fcc_records(cells: i64) -> Vec<String> {
    let n = 2 * cells;
    let id = |x: i64, y: i64, z: i64| format!("{}", (x * n + y) * n + z);
    let mut records = Vec::new();

    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                if (x + y + z) % 2 != 0 {
                    continue;
                }
                let mut first = Vec::new();
                let mut second = Vec::new();
                for dx in -2..=2i64 {
                    for dy in -2..=2i64 {
                        for dz in -2..=2i64 {
                            let (nx, ny, nz) = (x + dx, y + dy, z + dz);
                            if !(0..n).contains(&nx) || !(0..n).contains(&ny) || !(0..n).contains(&nz) {
                                continue;
                            }
                            match dx * dx + dy * dy + dz * dz {
                                2 if (nx + ny + nz) % 2 == 0 => first.push(id(nx, ny, nz)),
                                4 if dx == 0 || dy == 0 || dz == 0 => second.push(id(nx, ny, nz)),
                                _ => {}
                            }
                        }
                    }
                }
                let site = Site::new(id(x, y, z), [x as f64 * 0.5, y as f64 * 0.5, z as f64 * 0.5])
                    .with_neighbors(first, second);
                records.push(site.to_string());
            }
        }
    }
    records
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let records = fcc_records(4);
    let graph = NeighborGraph::new(parse_lines(&records)?);
    graph.validate()?;

    // A site near the middle of the block
    let poi = format!("{}", (4 * 8 + 4) * 8 + 4);
    let scene = Scene::point_of_interest(&graph, &poi)?;

    PlotRenderer::new("fcc_neighbors.svg", (1024, 768)).render(&scene)?;
    JsonRenderer::create("fcc_neighbors.json")?.pretty(true).render(&scene)?;

    PlotRenderer::new("fcc_graph.svg", (1024, 768)).render(&Scene::whole_graph(&graph)?)?;

    println!("Output saved to fcc_neighbors.svg, fcc_neighbors.json and fcc_graph.svg");
    Ok(())
}
