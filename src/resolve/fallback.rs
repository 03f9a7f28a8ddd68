// src/resolve/fallback.rs
use std::collections::{HashMap, HashSet};

use crate::config::pools::PoolSet;

/// Picks curated replacements per category, never handing out the same URL
/// twice in one run until a category's list is exhausted (then it wraps and
/// reuses). Owns the used-set; callers just ask.
pub struct FallbackResolver {
    categories: HashMap<String, Vec<String>>,
    default_list: Vec<String>,
    used: HashSet<String>,
}

impl FallbackResolver {
    pub fn new(pools: &PoolSet) -> Self {
        Self {
            categories: pools.categories.clone(),
            default_list: pools.default_list.clone(),
            used: HashSet::new(),
        }
    }

    /// First not-yet-used candidate from the category's list; unknown
    /// categories use the generic default list. Once every candidate has
    /// been handed out, wrap around and reuse.
    pub fn pick(&mut self, category: &str) -> String {
        let list = self
            .categories
            .get(category)
            .unwrap_or(&self.default_list);

        for url in list {
            if !self.used.contains(url) {
                let url = url.clone();
                self.used.insert(url.clone());
                return url;
            }
        }

        list[self.used.len() % list.len()].clone()
    }
}
