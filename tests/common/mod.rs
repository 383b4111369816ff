#![allow(dead_code)]

use sitegraph::Site;

/// Builds a simple cubic lattice of `n * n * n` sites with unit spacing.
///
/// First neighbors are the axis-aligned sites at distance 1, second neighbors the
/// face-diagonal sites at distance sqrt(2). Ids are `"x_y_z"`.
pub fn cubic_lattice(n: i64) -> Vec<Site> {
    let id = |x: i64, y: i64, z: i64| format!("{}_{}_{}", x, y, z);
    let inside = |v: i64| (0..n).contains(&v);

    let mut sites = Vec::new();
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let mut first = Vec::new();
                let mut second = Vec::new();
                for dx in -1..=1i64 {
                    for dy in -1..=1i64 {
                        for dz in -1..=1i64 {
                            let (nx, ny, nz) = (x + dx, y + dy, z + dz);
                            if !(inside(nx) && inside(ny) && inside(nz)) {
                                continue;
                            }
                            match dx.abs() + dy.abs() + dz.abs() {
                                1 => first.push(id(nx, ny, nz)),
                                2 => second.push(id(nx, ny, nz)),
                                _ => {}
                            }
                        }
                    }
                }
                sites.push(
                    Site::new(id(x, y, z), [x as f64, y as f64, z as f64]).with_neighbors(first, second),
                );
            }
        }
    }
    sites
}

/// The lattice written out as record lines.
pub fn cubic_lattice_records(n: i64) -> Vec<String> {
    cubic_lattice(n).iter().map(|site| site.to_string()).collect()
}

pub fn sort_points(mut points: Vec<[f64; 3]>) -> Vec<[f64; 3]> {
    points.sort_by(|a, b| a.partial_cmp(b).unwrap());
    points
}
