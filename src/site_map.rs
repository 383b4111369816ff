use crate::site::Site;
use std::collections::HashMap;
use std::collections::hash_map;

/// Mapping from site id to [`Site`], built one record at a time.
///
/// Iteration order is unspecified. Use [`SiteMap::sorted_ids`] or
/// [`SiteMap::iter_sorted`] wherever the order is observable.
#[derive(Clone, Debug, Default)]
pub struct SiteMap {
    sites: HashMap<String, Site>,
}

impl SiteMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a site, replacing any earlier site with the same id.
    /// Returns the replaced site.
    pub fn insert(&mut self, site: Site) -> Option<Site> {
        let previous = self.sites.insert(site.id.clone(), site);
        if let Some(previous) = &previous {
            tracing::debug!(id = %previous.id, "duplicate site id, keeping the later record");
        }
        previous
    }

    pub fn get(&self, id: &str) -> Option<&Site> {
        self.sites.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sites.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Iterates in map order.
    pub fn iter(&self) -> hash_map::Values<'_, String, Site> {
        self.sites.values()
    }

    /// All ids, sorted lexicographically as opaque strings.
    pub fn sorted_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sites.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Iterates sites ordered by id.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Site> {
        let mut sites: Vec<&Site> = self.sites.values().collect();
        sites.sort_unstable_by(|a, b| a.id.cmp(&b.id));
        sites.into_iter()
    }
}

impl Extend<Site> for SiteMap {
    fn extend<T: IntoIterator<Item = Site>>(&mut self, iter: T) {
        for site in iter {
            self.insert(site);
        }
    }
}

impl FromIterator<Site> for SiteMap {
    fn from_iter<T: IntoIterator<Item = Site>>(iter: T) -> Self {
        let mut map = SiteMap::new();
        map.extend(iter);
        map
    }
}
