use std::collections::BTreeSet;

use crate::character::CharacterId;
use crate::view_model::{AppViewModel, CharacterButtonView};

/// A newly detected comic update, as handed over from the poll worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSnapshot {
    /// Feed-level updated timestamp the detection keyed on.
    pub date: String,
    /// Title of the first page of the new update, when known.
    pub page_title: Option<String>,
    /// Link to the first page of the new update, when known.
    pub page_url: Option<String>,
    /// Number of pages in the new update, when known.
    pub page_count: Option<usize>,
}

/// Selection-window application state. Mutated only through
/// [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    active: BTreeSet<CharacterId>,
    window_visible: bool,
    minimized_once: bool,
    last_update: Option<UpdateSnapshot>,
    notification_armed: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active: BTreeSet::new(),
            window_visible: true,
            minimized_once: false,
            last_update: None,
            notification_armed: false,
        }
    }

    pub fn is_active(&self, id: CharacterId) -> bool {
        self.active.contains(&id)
    }

    /// Currently spawned characters, in selection-grid order.
    pub fn active(&self) -> impl Iterator<Item = CharacterId> + '_ {
        self.active.iter().copied()
    }

    pub fn window_visible(&self) -> bool {
        self.window_visible
    }

    /// The most recently detected update, if any.
    pub fn last_update(&self) -> Option<&UpdateSnapshot> {
        self.last_update.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            window_visible: self.window_visible,
            buttons: CharacterId::ALL
                .iter()
                .map(|&id| CharacterButtonView {
                    id,
                    name: id.descriptor().name,
                    checked: self.active.contains(&id),
                })
                .collect(),
        }
    }

    /// Flip a character's membership; true when it is now active.
    pub(crate) fn toggle(&mut self, id: CharacterId) -> bool {
        if self.active.remove(&id) {
            false
        } else {
            self.active.insert(id);
            true
        }
    }

    /// Hide the window; true only on the first minimize-to-tray.
    pub(crate) fn hide_window(&mut self) -> bool {
        self.window_visible = false;
        if self.minimized_once {
            false
        } else {
            self.minimized_once = true;
            true
        }
    }

    pub(crate) fn show_window(&mut self) {
        self.window_visible = true;
    }

    /// Remember a detected update and arm the notification click-through.
    pub(crate) fn record_update(&mut self, snapshot: UpdateSnapshot) {
        self.last_update = Some(snapshot);
        self.notification_armed = true;
    }

    /// Disarm and hand out the update link, if a celebration notification
    /// is current and carries one.
    pub(crate) fn take_armed_update_url(&mut self) -> Option<String> {
        if !self.notification_armed {
            return None;
        }
        self.notification_armed = false;
        self.last_update
            .as_ref()
            .and_then(|update| update.page_url.clone())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
