use crate::error::QueryError;
use crate::site::{NeighborKind, Point, Site};
use crate::site_map::SiteMap;
use std::collections::HashSet;

/// A straight segment between two sites.
pub type Segment = [Point; 2];

/// Read-only queries over a fully parsed [`SiteMap`].
///
/// The graph owns the mapping, so once it is built no further records can be
/// added. Neighbor ids are resolved lazily: a listed id with no site behind it is
/// only reported when a query touches it.
#[derive(Clone, Debug)]
pub struct NeighborGraph {
    sites: SiteMap,
}

impl NeighborGraph {
    pub fn new(sites: SiteMap) -> Self {
        Self { sites }
    }

    pub fn sites(&self) -> &SiteMap {
        &self.sites
    }

    pub fn count_sites(&self) -> usize {
        self.sites.len()
    }

    /// Looks up a site by id.
    pub fn site(&self, id: &str) -> Result<&Site, QueryError> {
        self.sites
            .get(id)
            .ok_or_else(|| QueryError::UnknownSite(id.to_string()))
    }

    /// The position of every site, in map order.
    pub fn all_coordinates(&self) -> Vec<Point> {
        self.sites.iter().map(|site| site.position).collect()
    }

    /// The position of every site, ordered by site id.
    pub fn all_coordinates_sorted(&self) -> Vec<Point> {
        self.sites.iter_sorted().map(|site| site.position).collect()
    }

    /// Positions of the first neighbors of `id`, in list order.
    pub fn first_neighbor_coordinates(&self, id: &str) -> Result<Vec<Point>, QueryError> {
        self.neighbor_coordinates(id, NeighborKind::First)
    }

    /// Positions of the second neighbors of `id`, in list order.
    pub fn second_neighbor_coordinates(&self, id: &str) -> Result<Vec<Point>, QueryError> {
        self.neighbor_coordinates(id, NeighborKind::Second)
    }

    pub fn neighbor_coordinates(&self, id: &str, kind: NeighborKind) -> Result<Vec<Point>, QueryError> {
        let site = self.site(id)?;
        site.neighbors(kind)
            .iter()
            .map(|n_id| self.resolve(site, n_id).map(|n| n.position))
            .collect()
    }

    /// Positions of every site that is neither `poi` nor one of its first or second
    /// neighbors, ordered by site id.
    pub fn background_coordinates(&self, poi: &str) -> Result<Vec<Point>, QueryError> {
        let poi_site = self.site(poi)?;
        let excluded: HashSet<&str> = poi_site
            .first_neighbors
            .iter()
            .chain(&poi_site.second_neighbors)
            .map(String::as_str)
            .chain(std::iter::once(poi))
            .collect();

        let points: Vec<Point> = self
            .sites
            .iter_sorted()
            .filter(|site| !excluded.contains(site.id.as_str()))
            .map(|site| site.position)
            .collect();
        tracing::debug!(poi, background = points.len(), "selected background sites");
        Ok(points)
    }

    /// Segments from `id` to each of its neighbors of the given kind.
    pub fn neighbor_edges(&self, id: &str, kind: NeighborKind) -> Result<Vec<Segment>, QueryError> {
        let site = self.site(id)?;
        site.neighbors(kind)
            .iter()
            .map(|n_id| self.resolve(site, n_id).map(|n| [site.position, n.position]))
            .collect()
    }

    /// Segments from every site to its neighbors of the given kind, sites ordered by id.
    pub fn all_edges(&self, kind: NeighborKind) -> Result<Vec<Segment>, QueryError> {
        let mut edges = Vec::new();
        for site in self.sites.iter_sorted() {
            for n_id in site.neighbors(kind) {
                let neighbor = self.resolve(site, n_id)?;
                edges.push([site.position, neighbor.position]);
            }
        }
        tracing::debug!(%kind, edges = edges.len(), "collected neighbor edges");
        Ok(edges)
    }

    /// Checks that every neighbor id of every site names a known site.
    ///
    /// Sites are visited in id order and first neighbors before second neighbors, so
    /// the reported reference is deterministic.
    pub fn validate(&self) -> Result<(), QueryError> {
        for site in self.sites.iter_sorted() {
            for n_id in site.first_neighbors.iter().chain(&site.second_neighbors) {
                self.resolve(site, n_id)?;
            }
        }
        Ok(())
    }

    fn resolve(&self, site: &Site, n_id: &str) -> Result<&Site, QueryError> {
        self.sites.get(n_id).ok_or_else(|| QueryError::DanglingReference {
            site_id: site.id.clone(),
            missing: n_id.to_string(),
        })
    }
}

impl From<SiteMap> for NeighborGraph {
    fn from(sites: SiteMap) -> Self {
        Self::new(sites)
    }
}
