//! The add-dialog staging list.
//!
//! Each dialog row is a [`StagedRoute`]: an optional selection out of the
//! current [`RouteTable`](crate::routes::RouteTable). Confirming the dialog
//! resolves the staged rows into concrete routes; rows that can not be
//! resolved are reported rather than silently dropped or invented.

use crate::models::Route;
use crate::routes::RouteTable;
use crate::types::RouteId;

/// One selectable row in the add dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StagedRoute {
    /// The route picked for this row, once the user has picked one.
    pub route_id: Option<RouteId>,
}

impl StagedRoute {
    /// A row with a selection already made.
    pub fn selected(id: RouteId) -> Self {
        Self { route_id: Some(id) }
    }

    /// A fresh row with no selection yet.
    pub fn blank() -> Self {
        Self::default()
    }
}

/// Outcome of resolving the staged rows against the lookup table.
#[derive(Debug, Clone, Default)]
pub struct StagedResolution {
    /// Routes resolved from staged rows, in staged order.
    pub resolved: Vec<Route>,
    /// Indexes of rows that had no selection.
    pub blank_rows: Vec<usize>,
    /// Selected ids missing from the lookup table.
    pub unknown_ids: Vec<RouteId>,
}

impl StagedResolution {
    pub fn is_fully_resolved(&self) -> bool {
        self.blank_rows.is_empty() && self.unknown_ids.is_empty()
    }

    /// Number of rows that did not resolve to a route.
    pub fn skipped(&self) -> usize {
        self.blank_rows.len() + self.unknown_ids.len()
    }
}

/// Resolve every staged row against `table`.
///
/// Rows resolve independently; one bad row never blocks the others.
/// Resolved routes are cloned out of the table so the caller can append
/// them to the designated set without borrowing it.
pub fn resolve_staged(staged: &[StagedRoute], table: &RouteTable) -> StagedResolution {
    let mut resolution = StagedResolution::default();
    for (index, row) in staged.iter().enumerate() {
        match row.route_id {
            Some(id) => match table.resolve(id) {
                Some(route) => resolution.resolved.push(route.clone()),
                None => resolution.unknown_ids.push(id),
            },
            None => resolution.blank_rows.push(index),
        }
    }
    resolution
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::from_routes(&[
            Route::new(1, "dc-east", "dc-west"),
            Route::new(2, "dc-east", "dc-north"),
        ])
    }

    #[test]
    fn resolves_all_rows_in_staged_order() {
        let staged = vec![StagedRoute::selected(2), StagedRoute::selected(1)];
        let resolution = resolve_staged(&staged, &table());
        assert!(resolution.is_fully_resolved());
        let ids: Vec<_> = resolution.resolved.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn blank_rows_are_reported_by_index() {
        let staged = vec![
            StagedRoute::selected(1),
            StagedRoute::blank(),
            StagedRoute::blank(),
        ];
        let resolution = resolve_staged(&staged, &table());
        assert_eq!(resolution.resolved.len(), 1);
        assert_eq!(resolution.blank_rows, vec![1, 2]);
        assert_eq!(resolution.skipped(), 2);
        assert!(!resolution.is_fully_resolved());
    }

    #[test]
    fn unknown_ids_are_reported_without_blocking_the_rest() {
        let staged = vec![
            StagedRoute::selected(99),
            StagedRoute::selected(2),
        ];
        let resolution = resolve_staged(&staged, &table());
        let ids: Vec<_> = resolution.resolved.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(resolution.unknown_ids, vec![99]);
        assert_eq!(resolution.skipped(), 1);
    }

    /// The same route staged twice resolves twice. Deduplication is not
    /// this layer's call to make.
    #[test]
    fn duplicate_selections_resolve_independently() {
        let staged = vec![StagedRoute::selected(1), StagedRoute::selected(1)];
        let resolution = resolve_staged(&staged, &table());
        assert!(resolution.is_fully_resolved());
        assert_eq!(resolution.resolved.len(), 2);
        assert_eq!(resolution.resolved[0].id, 1);
        assert_eq!(resolution.resolved[1].id, 1);
    }

    #[test]
    fn empty_staging_resolves_to_nothing() {
        let resolution = resolve_staged(&[], &table());
        assert!(resolution.is_fully_resolved());
        assert!(resolution.resolved.is_empty());
    }
}
