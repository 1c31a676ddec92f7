use crate::commit::{commit_change, ChangeKind};
use crate::config::EnvConfig;
use crate::errors::NavError;
use crate::models::{NavItemInput, NavItemPatch, NavigationItem};
use crate::tree;
use leptos::logging::debug_warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{HashMap, HashSet};

/// What a save in flight (and its error) belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum UiKey {
    /// The root-level add form.
    Root,
    Node(String),
}

impl UiKey {
    pub fn node(id: impl Into<String>) -> Self {
        UiKey::Node(id.into())
    }
}

/// Which inline form, if any, a node currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum NodeMode {
    #[default]
    Viewing,
    Editing,
    AddingChild,
}

/// Ephemeral view state of the editor. Never part of the tree itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct UiState {
    pub show_add_form: bool,
    modes: HashMap<String, NodeMode>,
    pending: HashSet<UiKey>,
    errors: HashMap<UiKey, String>,
}

impl UiState {
    pub fn mode_of(&self, id: &str) -> NodeMode {
        self.modes.get(id).copied().unwrap_or_default()
    }

    /// Switching mode replaces the previous one and clears the node's error.
    pub fn set_mode(&mut self, id: &str, mode: NodeMode) {
        self.errors.remove(&UiKey::node(id));
        match mode {
            NodeMode::Viewing => {
                self.modes.remove(id);
            }
            other => {
                self.modes.insert(id.to_string(), other);
            }
        }
    }

    pub fn open_add_form(&mut self) {
        self.show_add_form = true;
    }

    pub fn close_add_form(&mut self) {
        self.show_add_form = false;
        self.errors.remove(&UiKey::Root);
    }

    pub fn is_pending(&self, key: &UiKey) -> bool {
        self.pending.contains(key)
    }

    pub fn error_of(&self, key: &UiKey) -> Option<String> {
        self.errors.get(key).cloned()
    }

    /// Mark `key` as having a save in flight. Returns `false` if one already is.
    pub fn begin(&mut self, key: &UiKey) -> bool {
        if !self.pending.insert(key.clone()) {
            return false;
        }
        self.errors.remove(key);
        true
    }

    /// End the save for `key`. Does nothing if `key` is no longer pending,
    /// e.g. its item was removed while the save was in flight.
    pub fn finish(&mut self, key: &UiKey, error: Option<String>) {
        if !self.pending.remove(key) {
            return;
        }
        match error {
            Some(msg) => {
                self.errors.insert(key.clone(), msg);
            }
            None => {
                self.errors.remove(key);
            }
        }
    }

    /// Drop everything remembered about items that left the tree.
    pub fn forget(&mut self, ids: &[String]) {
        for id in ids {
            self.modes.remove(id);
            let key = UiKey::node(id.as_str());
            self.pending.remove(&key);
            self.errors.remove(&key);
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct NavState {
    pub items: RwSignal<Vec<NavigationItem>>,
    pub ui: RwSignal<UiState>,
    pub config: StoredValue<EnvConfig>,
}

impl NavState {
    pub fn new(config: EnvConfig) -> Self {
        let items = config.menu.clone();
        Self {
            items: RwSignal::new(items),
            ui: RwSignal::new(UiState::default()),
            config: StoredValue::new(config),
        }
    }

    pub fn add_root(self, input: NavItemInput) {
        self.run(UiKey::Root, ChangeKind::Add, move |items, ui| {
            tree::insert_root(items, NavigationItem::from_input(input));
            ui.close_add_form();
        });
    }

    pub fn add_child(self, parent_id: String, input: NavItemInput) {
        self.run(UiKey::node(parent_id.as_str()), ChangeKind::Add, move |items, ui| {
            if !tree::insert_child(items, &parent_id, NavigationItem::from_input(input)) {
                debug_warn!("add child: {}", NavError::NotFound(parent_id.clone()));
            }
            ui.set_mode(&parent_id, NodeMode::Viewing);
        });
    }

    pub fn edit(self, id: String, input: NavItemInput) {
        self.run(UiKey::node(id.as_str()), ChangeKind::Edit, move |items, ui| {
            if !tree::update_by_id(items, &id, &NavItemPatch::from(input)) {
                debug_warn!("edit: {}", NavError::NotFound(id.clone()));
            }
            ui.set_mode(&id, NodeMode::Viewing);
        });
    }

    pub fn delete(self, id: String) {
        self.run(UiKey::node(id.as_str()), ChangeKind::Delete, move |items, ui| {
            match tree::remove_by_id(items, &id) {
                Some(removed) => ui.forget(&tree::collect_ids(std::slice::from_ref(&removed))),
                None => {
                    debug_warn!("delete: {}", NavError::NotFound(id.clone()));
                }
            }
        });
    }

    /// Drag end. Applied immediately; there is nothing to save.
    pub fn move_item(self, active_id: &str, over_id: &str) {
        let mut moved = false;
        self.items
            .update(|items| moved = tree::move_item(items, active_id, over_id));
        if !moved && active_id != over_id {
            debug_warn!("move {active_id} -> {over_id} ignored");
        }
    }

    /// Save a change, then apply it to the tree as it is at that moment.
    ///
    /// While the save is in flight `key` is pending; a rejected save leaves the
    /// tree alone and records the error under `key`.
    fn run(
        self,
        key: UiKey,
        kind: ChangeKind,
        apply: impl FnOnce(&mut Vec<NavigationItem>, &mut UiState) + 'static,
    ) {
        let mut started = false;
        self.ui.update(|ui| started = ui.begin(&key));
        if !started {
            return;
        }

        let cfg = self.config.get_value();
        spawn_local(async move {
            let result = commit_change(&cfg, kind).await;
            // Only a successful save touches the tree (and notifies its readers).
            self.items.maybe_update(|items| {
                let mut applied = false;
                self.ui
                    .update(|ui| applied = settle(items, ui, &key, result, apply));
                applied
            });
        });
    }
}

/// Finish the save for `key` with `result`. `apply` runs only on success,
/// against `items` as they are now. Returns whether the tree was changed.
fn settle(
    items: &mut Vec<NavigationItem>,
    ui: &mut UiState,
    key: &UiKey,
    result: Result<(), NavError>,
    apply: impl FnOnce(&mut Vec<NavigationItem>, &mut UiState),
) -> bool {
    match result {
        Ok(()) => {
            ui.finish(key, None);
            apply(items, ui);
            true
        }
        Err(e) => {
            ui.finish(key, Some(e.to_string()));
            false
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct NavContext(pub NavState);
