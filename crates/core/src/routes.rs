//! Edits to a designated-route set and the id lookup table behind the
//! add dialog.

use std::collections::HashMap;

use crate::models::Route;
use crate::types::RouteId;

// ---------------------------------------------------------------------------
// Lookup table
// ---------------------------------------------------------------------------

/// Route options offered by the add dialog, keyed by id.
///
/// Holds every active route of the current source data center. A lookup
/// miss is an explicit `None`; nothing is inserted or invented on miss.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    by_id: HashMap<RouteId, Route>,
}

impl RouteTable {
    /// Index `routes` by id. If the same id appears twice, the later
    /// entry wins.
    pub fn from_routes(routes: &[Route]) -> Self {
        let mut by_id = HashMap::with_capacity(routes.len());
        for route in routes {
            by_id.insert(route.id, route.clone());
        }
        Self { by_id }
    }

    pub fn resolve(&self, id: RouteId) -> Option<&Route> {
        self.by_id.get(&id)
    }

    pub fn contains(&self, id: RouteId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_id.clear();
    }
}

// ---------------------------------------------------------------------------
// Designated-set edits
// ---------------------------------------------------------------------------

/// Remove the first route in `routes` whose id matches.
///
/// Returns `true` if a route was removed. Later routes with the same id
/// are left in place.
pub fn remove_first(routes: &mut Vec<Route>, id: RouteId) -> bool {
    match routes.iter().position(|route| route.id == id) {
        Some(index) => {
            routes.remove(index);
            true
        }
        None => false,
    }
}

/// Ids that occur more than once in `routes`, in first-occurrence order.
pub fn duplicate_ids(routes: &[Route]) -> Vec<RouteId> {
    let mut seen: HashMap<RouteId, usize> = HashMap::new();
    for route in routes {
        *seen.entry(route.id).or_insert(0) += 1;
    }
    let mut duplicates = Vec::new();
    for route in routes {
        if seen.get(&route.id).copied().unwrap_or(0) > 1 && !duplicates.contains(&route.id) {
            duplicates.push(route.id);
        }
    }
    duplicates
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
