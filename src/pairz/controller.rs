//! # Application Controller
//!
//! [`AppController`] is the single entry point for user actions. It owns the
//! [`PairStore`], the [`PersistenceGateway`] and the [`ListPresenter`]; nothing else
//! touches the store.
//!
//! Every action is one synchronous transition:
//!
//! ```text
//! action → command (commands/*.rs) → persist → render
//! ```
//!
//! `persist` and `render` are separate steps. The controller calls both after each
//! mutation; if persisting fails it still renders, so the screen matches memory, and
//! then returns the storage error for the caller to report.
//!
//! A rejected add is not an error: the reason is shown through the presenter and
//! returned in [`CmdResult::rejection`], and the store is left alone.
//!
//! The controller is generic over the backend and the presenter:
//! - Production: `AppController<FsBackend, TerminalPresenter>`
//! - Testing: `AppController<MemBackend, BufferPresenter>`

use crate::collection::{PairStore, SortField};
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_pairs;
use crate::presenter::ListPresenter;
use crate::store::{PersistenceGateway, StorageBackend};
use std::collections::BTreeSet;
use tracing::{debug, warn};

pub struct AppController<B: StorageBackend, P: ListPresenter> {
    store: PairStore,
    gateway: PersistenceGateway<B>,
    presenter: P,
}

impl<B: StorageBackend, P: ListPresenter> AppController<B, P> {
    pub fn new(gateway: PersistenceGateway<B>, presenter: P) -> Self {
        Self {
            store: PairStore::new(),
            gateway,
            presenter,
        }
    }

    /// Load the stored list (or seed it), then persist and render.
    pub fn on_startup(&mut self) -> Result<CmdResult> {
        let loaded = self.gateway.load()?;
        let result = commands::startup::run(&mut self.store, loaded);
        debug!(count = self.store.len(), seeded = result.mutated, "startup");
        self.commit()?;
        Ok(result)
    }

    pub fn on_add(&mut self, raw: &str) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.store, raw);

        if let Some(reason) = result.rejection {
            debug!(?reason, "add rejected");
            self.presenter
                .show_message(&CmdMessage::error(reason.message()));
            return Ok(result);
        }

        self.presenter.clear_message();
        let committed = self.commit();
        self.presenter.clear_input();
        committed?;
        Ok(result)
    }

    pub fn on_sort_by_name(&mut self) -> Result<CmdResult> {
        self.on_sort(SortField::Name)
    }

    pub fn on_sort_by_value(&mut self) -> Result<CmdResult> {
        self.on_sort(SortField::Value)
    }

    pub fn on_sort(&mut self, field: SortField) -> Result<CmdResult> {
        let result = commands::sort::run(&mut self.store, field);
        debug!(%field, "sorted");
        self.commit()?;
        Ok(result)
    }

    /// Delete the pairs at `indices`. An empty set does nothing at all.
    pub fn on_delete(&mut self, indices: &BTreeSet<usize>) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, indices);
        if !result.mutated {
            return Ok(result);
        }
        debug!(requested = indices.len(), removed = result.affected_pairs.len(), "deleted");
        self.commit()?;
        Ok(result)
    }

    /// Delete whatever the presenter currently has selected.
    pub fn on_delete_selected(&mut self) -> Result<CmdResult> {
        let selection = self.presenter.selection();
        self.on_delete(&selection)
    }

    /// Write the full list to storage.
    pub fn persist(&self) -> Result<()> {
        self.gateway.save(self.store.snapshot())
    }

    /// Push the current list to the presenter.
    pub fn render(&mut self) {
        let rows = index_pairs(self.store.snapshot());
        self.presenter.render(&rows);
    }

    fn commit(&mut self) -> Result<()> {
        let saved = self.persist();
        if let Err(e) = &saved {
            warn!(error = %e, key = self.gateway.key(), "failed to persist pairs");
        }
        self.render();
        saved
    }

    pub fn store(&self) -> &PairStore {
        &self.store
    }

    pub fn gateway(&self) -> &PersistenceGateway<B> {
        &self.gateway
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Scope;
    use crate::presenter::BufferPresenter;
    use crate::store::mem_backend::MemBackend;
    use crate::store::DEFAULT_STORAGE_KEY;

    pub type MemController = AppController<MemBackend, BufferPresenter>;

    /// A controller over an empty in-memory backend. Startup has not run yet.
    pub fn mem_controller() -> MemController {
        mem_controller_with(MemBackend::new())
    }

    pub fn mem_controller_with(backend: MemBackend) -> MemController {
        let gateway = PersistenceGateway::new(backend, Scope::Project, DEFAULT_STORAGE_KEY);
        AppController::new(gateway, BufferPresenter::new())
    }

    /// A controller that has already run startup against an empty backend.
    pub fn started_controller() -> MemController {
        let mut controller = mem_controller();
        controller
            .on_startup()
            .expect("startup on an empty memory backend");
        controller
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{Pair, Scope};
    use crate::store::mem_backend::MemBackend;
    use crate::validate::RejectionReason;

    fn stored(controller: &MemController) -> Option<String> {
        controller
            .gateway()
            .backend()
            .load_blob(Scope::Project, "pairs")
            .unwrap()
    }

    #[test]
    fn startup_without_snapshot_seeds_defaults() {
        let controller = started_controller();

        assert_eq!(
            controller.presenter().labels(),
            vec!["Hello=World", "Happy=Coding"]
        );
        assert_eq!(controller.store().snapshot(), Pair::seeds().as_slice());
        assert_eq!(
            stored(&controller).as_deref(),
            Some(r#"[{"name":"Hello","value":"World"},{"name":"Happy","value":"Coding"}]"#)
        );
    }

    #[test]
    fn startup_loads_existing_snapshot() {
        let backend = MemBackend::new();
        backend
            .save_blob(Scope::Project, "pairs", r#"[{"name":"Saved","value":"1"}]"#)
            .unwrap();
        let mut controller = mem_controller_with(backend);
        let result = controller.on_startup().unwrap();

        assert!(!result.mutated);
        assert_eq!(controller.presenter().labels(), vec!["Saved=1"]);
    }

    #[test]
    fn startup_with_corrupt_snapshot_fails() {
        let backend = MemBackend::new();
        backend.save_blob(Scope::Project, "pairs", "[{").unwrap();
        let mut controller = mem_controller_with(backend);

        assert!(controller.on_startup().is_err());
        assert_eq!(controller.presenter().render_count(), 0);
    }

    #[test]
    fn add_appends_persists_renders_and_clears_input() {
        let mut controller = started_controller();
        let renders = controller.presenter().render_count();

        let result = controller.on_add(" Key = Value ").unwrap();

        assert!(!result.is_rejected());
        assert_eq!(
            controller.presenter().labels(),
            vec!["Hello=World", "Happy=Coding", "Key=Value"]
        );
        assert_eq!(controller.presenter().render_count(), renders + 1);
        assert_eq!(controller.presenter().input_clears(), 1);
        assert!(stored(&controller).unwrap().contains(r#""name":"Key""#));
    }

    #[test]
    fn rejected_add_shows_message_and_changes_nothing() {
        let mut controller = started_controller();
        let before = stored(&controller);
        let renders = controller.presenter().render_count();

        let result = controller.on_add("Key Value").unwrap();

        assert_eq!(result.rejection, Some(RejectionReason::MissingSeparator));
        let message = controller.presenter().message().unwrap();
        assert_eq!(message.level, MessageLevel::Error);
        assert_eq!(message.content, "Missing '='. Use format Name=Value");
        assert_eq!(controller.store().len(), 2);
        assert_eq!(stored(&controller), before);
        assert_eq!(controller.presenter().render_count(), renders);
        assert_eq!(controller.presenter().input_clears(), 0);
    }

    #[test]
    fn successful_add_clears_previous_message() {
        let mut controller = started_controller();
        controller.on_add("bad input").unwrap();
        assert!(controller.presenter().message().is_some());

        controller.on_add("Good=Input").unwrap();
        assert!(controller.presenter().message().is_none());
    }

    #[test]
    fn sorts_persist_and_render() {
        let mut controller = started_controller();
        controller.on_add("apple=Zed").unwrap();

        controller.on_sort_by_name().unwrap();
        assert_eq!(
            controller.presenter().labels(),
            vec!["apple=Zed", "Happy=Coding", "Hello=World"]
        );

        controller.on_sort_by_value().unwrap();
        assert_eq!(
            controller.presenter().labels(),
            vec!["Happy=Coding", "Hello=World", "apple=Zed"]
        );
        assert!(stored(&controller)
            .unwrap()
            .starts_with(r#"[{"name":"Happy""#));
    }

    #[test]
    fn delete_selected_uses_presenter_selection() {
        let mut controller = started_controller();
        controller.on_add("Third=3").unwrap();
        controller.presenter_mut().select([0, 2]);

        let result = controller.on_delete_selected().unwrap();

        assert_eq!(result.affected_pairs.len(), 2);
        assert_eq!(controller.presenter().labels(), vec!["Happy=Coding"]);
        assert!(controller.presenter().selection().is_empty());
    }

    #[test]
    fn empty_delete_does_not_persist_or_render() {
        let mut controller = started_controller();
        let renders = controller.presenter().render_count();

        let result = controller.on_delete(&BTreeSet::new()).unwrap();

        assert!(!result.mutated);
        assert_eq!(controller.presenter().render_count(), renders);
        assert_eq!(controller.store().len(), 2);
    }

    #[test]
    fn delete_ignores_out_of_range_positions() {
        let mut controller = started_controller();
        controller.on_delete(&BTreeSet::from([1, 5])).unwrap();
        assert_eq!(controller.presenter().labels(), vec!["Hello=World"]);
    }

    #[test]
    fn write_failure_still_renders_and_is_reported() {
        let mut controller = started_controller();
        controller.gateway().backend().set_simulate_write_error(true);

        let result = controller.on_add("New=Pair");

        assert!(result.is_err());
        assert_eq!(controller.store().len(), 3);
        assert_eq!(controller.presenter().labels().len(), 3);
        assert_eq!(controller.presenter().input_clears(), 1);
    }

    #[test]
    fn reload_reproduces_the_list() {
        let mut first = started_controller();
        first.on_add("Zed=1").unwrap();
        first.on_sort_by_name().unwrap();
        let blob = stored(&first).unwrap();

        let backend = MemBackend::new();
        backend.save_blob(Scope::Project, "pairs", &blob).unwrap();
        let mut second = mem_controller_with(backend);
        second.on_startup().unwrap();

        assert_eq!(second.store(), first.store());
    }

    #[test]
    fn instances_are_independent() {
        let mut a = started_controller();
        let b = started_controller();
        a.on_add("Only=A").unwrap();

        assert_eq!(a.store().len(), 3);
        assert_eq!(b.store().len(), 2);
    }
}
