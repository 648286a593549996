//! The designated-routes editor controller.
//!
//! [`RouteEditor`] owns the working state of the designated-routes edit
//! view for one cluster: the data-center list, the route set being
//! edited, the add-dialog staging list, and the dialog visibility flags.
//! It talks to the console through the [`ClusterService`] /
//! [`RouteService`] contracts, reports outcomes on a [`NoticeBus`], and
//! sends the view elsewhere through a [`Navigator`].
//!
//! Methods take `&self`; state lives behind an async `RwLock` so one
//! editor can be shared across an event-driven view layer. Fetches record
//! a generation before awaiting and responses carrying a superseded
//! generation are discarded instead of clobbering newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use meridian_client::{ClusterService, RouteService, ServiceError};
use meridian_core::models::{DataCenter, Route};
use meridian_core::routes::{self, RouteTable};
use meridian_core::staging::{self, StagedRoute};
use meridian_core::types::RouteId;

use crate::config::EditorConfig;
use crate::navigation::{Destination, Navigator};
use crate::notice::{Notice, NoticeBus};

/// Notice body published after an accepted submission.
const UPDATED_MESSAGE: &str = "Designated routes updated";

/// Notice title attached to rejected or failed submissions.
const UPDATE_FAILED_TITLE: &str = "Update failed";

// ---------------------------------------------------------------------------
// Editor state
// ---------------------------------------------------------------------------

/// How the initial data center is chosen when the editor loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DcSelection {
    /// Use the first data center the console returns.
    First,
    /// Use this data-center name as given, e.g. from a route parameter.
    Named(String),
}

/// Mutable editor state guarded by the controller's lock.
#[derive(Debug, Default)]
struct EditorState {
    /// Data centers the cluster is deployed in.
    dcs: Vec<DataCenter>,
    /// Name of the data center whose route set is being edited.
    current_dc_name: Option<String>,
    /// The designated-route set being edited (not yet submitted).
    designated_routes: Vec<Route>,
    /// Selectable routes for the add dialog, in console order.
    available_routes: Vec<Route>,
    /// Lookup table over `available_routes`, keyed by route id.
    route_table: RouteTable,
    /// Add-dialog staging rows.
    staged: Vec<StagedRoute>,
    add_dialog_open: bool,
    confirm_dialog_open: bool,
    /// Cancels the redirect scheduled by the last successful submission.
    pending_redirect: Option<CancellationToken>,
}

/// Read-only copy of the render-relevant editor state.
#[derive(Debug, Clone)]
pub struct EditorSnapshot {
    pub cluster_name: String,
    pub dcs: Vec<DataCenter>,
    pub current_dc_name: Option<String>,
    pub designated_routes: Vec<Route>,
    pub available_routes: Vec<Route>,
    pub staged: Vec<StagedRoute>,
    pub add_dialog_open: bool,
    pub confirm_dialog_open: bool,
}

// ---------------------------------------------------------------------------
// RouteEditor
// ---------------------------------------------------------------------------

/// Controller for the designated-routes edit view of one cluster.
///
/// Created per cluster; safe to wrap in an `Arc` and share.
pub struct RouteEditor {
    cluster_name: String,
    clusters: Arc<dyn ClusterService>,
    routes: Arc<dyn RouteService>,
    config: EditorConfig,
    notices: NoticeBus,
    navigator: Navigator,
    state: RwLock<EditorState>,
    /// Bumped by every operation that fetches and applies console data.
    /// A response whose recorded generation no longer matches is stale.
    generation: AtomicU64,
}

impl RouteEditor {
    pub fn new(
        cluster_name: impl Into<String>,
        clusters: Arc<dyn ClusterService>,
        routes: Arc<dyn RouteService>,
        config: EditorConfig,
    ) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            clusters,
            routes,
            config,
            notices: NoticeBus::default(),
            navigator: Navigator::new(),
            state: RwLock::new(EditorState::default()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    /// Notice stream for the view layer to render as toasts.
    pub fn notices(&self) -> &NoticeBus {
        &self.notices
    }

    /// Navigation stream for the view layer to act on.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Copy the render-relevant state out of the lock.
    pub async fn snapshot(&self) -> EditorSnapshot {
        let state = self.state.read().await;
        EditorSnapshot {
            cluster_name: self.cluster_name.clone(),
            dcs: state.dcs.clone(),
            current_dc_name: state.current_dc_name.clone(),
            designated_routes: state.designated_routes.clone(),
            available_routes: state.available_routes.clone(),
            staged: state.staged.clone(),
            add_dialog_open: state.add_dialog_open,
            confirm_dialog_open: state.confirm_dialog_open,
        }
    }

    // ---- loading ----

    /// Load the cluster's data centers, pick the current one, and fetch
    /// its designated-route set.
    ///
    /// A cluster name is required context: with an empty one the editor
    /// stays inert. A cluster deployed in no data center clears the
    /// selection and stops; there is no route set to edit.
    pub async fn initialize(&self, initial: DcSelection) {
        if self.cluster_name.is_empty() {
            return;
        }

        let generation = self.bump_generation();
        match self.clusters.data_centers(&self.cluster_name).await {
            Ok(dcs) => {
                let (current, generation) = {
                    let mut state = self.state.write().await;
                    if self.is_stale(generation) {
                        tracing::debug!(cluster = %self.cluster_name, "Discarding stale data-center response");
                        return;
                    }
                    if dcs.is_empty() {
                        state.dcs.clear();
                        state.current_dc_name = None;
                        return;
                    }

                    let current = match &initial {
                        DcSelection::First => dcs[0].dc_name.clone(),
                        DcSelection::Named(name) => name.clone(),
                    };
                    state.dcs = dcs;
                    state.current_dc_name = Some(current.clone());
                    (current, self.bump_generation())
                };
                tracing::info!(
                    cluster = %self.cluster_name,
                    dc = %current,
                    "Cluster data centers loaded",
                );

                self.reload_designated_routes(&current, generation).await;
            }
            Err(e) => self.notify_service_error(e),
        }
    }

    /// Make `dc` current and reload its designated-route set.
    ///
    /// Staged additions and the add-dialog options belong to the previous
    /// data center and are discarded.
    pub async fn switch_dc(&self, dc: &DataCenter) {
        let generation = {
            let mut state = self.state.write().await;
            state.current_dc_name = Some(dc.dc_name.clone());
            state.staged.clear();
            state.available_routes.clear();
            state.route_table.clear();
            self.bump_generation()
        };
        self.reload_designated_routes(&dc.dc_name, generation).await;
    }

    /// Fetch the designated-route set for (cluster, `dc_name`) and apply
    /// it, unless `generation` was superseded while the fetch was out.
    async fn reload_designated_routes(&self, dc_name: &str, generation: u64) {
        match self
            .clusters
            .designated_routes(dc_name, &self.cluster_name)
            .await
        {
            Ok(designated) => {
                let count = designated.len();
                {
                    let mut state = self.state.write().await;
                    if self.is_stale(generation) {
                        tracing::debug!(dc = %dc_name, "Discarding stale designated-route response");
                        return;
                    }
                    state.designated_routes = designated;
                }
                tracing::debug!(
                    cluster = %self.cluster_name,
                    dc = %dc_name,
                    count,
                    "Designated routes loaded",
                );
            }
            Err(e) => self.notify_service_error(e),
        }
    }

    // ---- add dialog ----

    /// Open the add dialog and load the selectable routes for it.
    ///
    /// Previous staging and options are cleared up front, so a failed
    /// fetch leaves an empty dialog rather than one offering routes from
    /// another data center. The dialog opens regardless of the fetch
    /// outcome.
    pub async fn open_add_dialog(&self) {
        let (current_dc, generation) = {
            let mut state = self.state.write().await;
            state.staged.clear();
            state.available_routes.clear();
            state.route_table.clear();
            state.add_dialog_open = true;
            (state.current_dc_name.clone(), self.bump_generation())
        };

        let Some(src_dc_name) = current_dc else {
            self.notices
                .publish(Notice::error("No data center selected"));
            return;
        };

        match self.routes.active_routes_from(&src_dc_name).await {
            Ok(active) => {
                let table = RouteTable::from_routes(&active);
                // Seed one row, pre-selecting the first option, so the
                // dialog never opens on an empty form.
                let seeded: Vec<StagedRoute> = active
                    .first()
                    .map(|route| StagedRoute::selected(route.id))
                    .into_iter()
                    .collect();

                let mut state = self.state.write().await;
                if self.is_stale(generation) {
                    tracing::debug!(dc = %src_dc_name, "Discarding stale active-route response");
                    return;
                }
                state.available_routes = active;
                state.route_table = table;
                state.staged = seeded;
            }
            Err(e) => self.notify_service_error(e),
        }
    }

    /// Close the add dialog, keeping any staged rows.
    pub async fn close_add_dialog(&self) {
        self.state.write().await.add_dialog_open = false;
    }

    /// Set the selection of staging row `index`. Out-of-bounds indexes
    /// are ignored.
    pub async fn select_staged_route(&self, index: usize, route_id: RouteId) {
        let mut state = self.state.write().await;
        if let Some(row) = state.staged.get_mut(index) {
            row.route_id = Some(route_id);
        }
    }

    /// Append a fresh, unselected staging row.
    pub async fn add_staged_row(&self) {
        self.state.write().await.staged.push(StagedRoute::blank());
    }

    /// Remove staging row `index`. Out-of-bounds indexes are ignored.
    pub async fn remove_staged_row(&self, index: usize) {
        let mut state = self.state.write().await;
        if index < state.staged.len() {
            state.staged.remove(index);
        }
    }

    /// Append the staged selections to the designated-route set and close
    /// the dialog.
    ///
    /// Rows that do not resolve against the dialog's option table are
    /// skipped and reported in a single error notice; the rows that do
    /// resolve are appended regardless. Appending does not deduplicate:
    /// the set is submitted exactly as the user assembled it.
    pub async fn confirm_add_routes(&self) {
        let resolution = {
            let mut state = self.state.write().await;
            let resolution = staging::resolve_staged(&state.staged, &state.route_table);

            state.designated_routes.extend(resolution.resolved.iter().cloned());
            state.staged.clear();
            state.add_dialog_open = false;

            let duplicates = routes::duplicate_ids(&state.designated_routes);
            if !duplicates.is_empty() {
                tracing::warn!(
                    cluster = %self.cluster_name,
                    ?duplicates,
                    "Designated-route set now contains duplicate ids",
                );
            }
            resolution
        };

        if !resolution.resolved.is_empty() {
            tracing::debug!(
                cluster = %self.cluster_name,
                appended = resolution.resolved.len(),
                "Staged routes appended to designated set",
            );
        }

        let skipped = resolution.skipped();
        if skipped > 0 {
            let mut details = Vec::new();
            if !resolution.blank_rows.is_empty() {
                details.push(format!("{} with no selection", resolution.blank_rows.len()));
            }
            if !resolution.unknown_ids.is_empty() {
                details.push(format!("unknown route ids {:?}", resolution.unknown_ids));
            }
            self.notices.publish(Notice::error(format!(
                "Skipped {} staged row(s): {}",
                skipped,
                details.join(", ")
            )));
        }
    }

    // ---- designated-set edits ----

    /// Remove the first designated route with the given id. Unknown ids
    /// are ignored.
    pub async fn delete_designated_route(&self, id: RouteId) {
        let mut state = self.state.write().await;
        if routes::remove_first(&mut state.designated_routes, id) {
            tracing::debug!(cluster = %self.cluster_name, route_id = id, "Designated route removed");
        }
    }

    // ---- submission ----

    /// Open the submit-confirmation dialog.
    pub async fn open_submit_confirmation(&self) {
        self.state.write().await.confirm_dialog_open = true;
    }

    /// Close the submit-confirmation dialog without submitting.
    pub async fn close_submit_confirmation(&self) {
        self.state.write().await.confirm_dialog_open = false;
    }

    /// Submit the edited route set as a full replacement for the current
    /// data center.
    ///
    /// On acceptance: success notice, confirmation dialog closed, and a
    /// redirect to the cluster-routes summary scheduled after
    /// [`EditorConfig::redirect_delay`]. A newly scheduled redirect
    /// replaces a still-pending one. On rejection or transport failure:
    /// error notice, dialog left open, no navigation.
    pub async fn submit_changes(&self) {
        let (dc_name, outgoing) = {
            let state = self.state.read().await;
            (state.current_dc_name.clone(), state.designated_routes.clone())
        };

        let Some(dc_name) = dc_name else {
            self.notices.publish(
                Notice::error("No data center selected").with_title(UPDATE_FAILED_TITLE),
            );
            return;
        };

        let submission_id = Uuid::new_v4();
        tracing::info!(
            %submission_id,
            cluster = %self.cluster_name,
            dc = %dc_name,
            routes = outgoing.len(),
            "Submitting designated-route replacement",
        );

        match self
            .clusters
            .replace_designated_routes(&self.cluster_name, &dc_name, &outgoing)
            .await
        {
            Ok(outcome) if outcome.is_success() => {
                tracing::info!(%submission_id, "Designated-route replacement accepted");
                self.notices.publish(Notice::success(UPDATED_MESSAGE));

                let cancel = CancellationToken::new();
                {
                    let mut state = self.state.write().await;
                    state.confirm_dialog_open = false;
                    if let Some(previous) = state.pending_redirect.replace(cancel.clone()) {
                        previous.cancel();
                    }
                }

                self.navigator.defer(
                    Destination::ClusterRoutes {
                        cluster_name: self.cluster_name.clone(),
                        dc_name,
                    },
                    self.config.redirect_delay,
                    cancel,
                );
            }
            Ok(outcome) => {
                tracing::warn!(
                    %submission_id,
                    message = %outcome.message,
                    "Console rejected designated-route replacement",
                );
                self.notices
                    .publish(Notice::error(outcome.message).with_title(UPDATE_FAILED_TITLE));
            }
            Err(e) => {
                tracing::warn!(
                    %submission_id,
                    error = %e,
                    "Designated-route replacement failed",
                );
                self.notices
                    .publish(Notice::error(e.to_string()).with_title(UPDATE_FAILED_TITLE));
            }
        }
    }

    /// Cancel any still-pending redirect. Call when tearing the view down.
    pub async fn shutdown(&self) {
        if let Some(pending) = self.state.write().await.pending_redirect.take() {
            pending.cancel();
        }
    }

    // ---- private helpers ----

    /// Advance the fetch generation. A bump that accompanies a state
    /// change must happen inside the same write-lock critical section as
    /// that change.
    fn bump_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True when `generation` has been superseded. Appliers check this
    /// with the write lock held, immediately before writing.
    fn is_stale(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != generation
    }

    fn notify_service_error(&self, error: ServiceError) {
        tracing::warn!(cluster = %self.cluster_name, error = %error, "Console request failed");
        self.notices.publish(Notice::error(error.to_string()));
    }
}
