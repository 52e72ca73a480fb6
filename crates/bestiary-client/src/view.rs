//! UI view state for the catalog screen.
//!
//! [`ViewState`] is a plain serializable value. Every change goes through
//! one of its transition methods, so a renderer can snapshot, diff or
//! persist it freely. Nothing here performs I/O; see
//! [`Controller`](crate::Controller) for the request flows.

use bestiary_types::{CreatureWithSpecies, Species};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Creatures shown per page.
pub const PAGE_SIZE: usize = 6;

/// How long a toast stays up before it is dismissed automatically.
pub const TOAST_DURATION: Duration = Duration::seconds(3);

// ---------------------------------------------------------------------------
// Action status
// ---------------------------------------------------------------------------

/// Progress of one user-triggered action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "camelCase")]
pub enum ActionStatus {
    /// Never started, or reset.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Succeeded,
    /// The last request failed with this message.
    Failed(String),
}

impl ActionStatus {
    /// Whether a request is in flight.
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The failure message, if the last request failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// The independently tracked actions on the catalog screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Loading the full creature list.
    List,
    /// Looking up one creature by id.
    Lookup,
    /// Submitting the create-creature form.
    Create,
    /// Saving an inline lore edit.
    UpdateLore,
    /// Loading the species list.
    Species,
}

/// One [`ActionStatus`] per [`Action`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionStatuses {
    /// Status of [`Action::List`].
    pub list: ActionStatus,
    /// Status of [`Action::Lookup`].
    pub lookup: ActionStatus,
    /// Status of [`Action::Create`].
    pub create: ActionStatus,
    /// Status of [`Action::UpdateLore`].
    pub update_lore: ActionStatus,
    /// Status of [`Action::Species`].
    pub species: ActionStatus,
}

impl ActionStatuses {
    /// Status of `action`.
    pub const fn get(&self, action: Action) -> &ActionStatus {
        match action {
            Action::List => &self.list,
            Action::Lookup => &self.lookup,
            Action::Create => &self.create,
            Action::UpdateLore => &self.update_lore,
            Action::Species => &self.species,
        }
    }

    const fn slot(&mut self, action: Action) -> &mut ActionStatus {
        match action {
            Action::List => &mut self.list,
            Action::Lookup => &mut self.lookup,
            Action::Create => &mut self.create,
            Action::UpdateLore => &mut self.update_lore,
            Action::Species => &mut self.species,
        }
    }
}

// ---------------------------------------------------------------------------
// Toast
// ---------------------------------------------------------------------------

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToastKind {
    /// Confirmation.
    Success,
    /// Something went wrong.
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    /// Sequence number; newer toasts have larger ids.
    pub id: u64,
    /// Text to show.
    pub message: String,
    /// Success or error styling.
    pub kind: ToastKind,
    /// When the toast should disappear.
    pub expires_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// The create-creature form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatureDraft {
    /// Name input.
    pub name: String,
    /// Selected species, empty when none is chosen.
    pub species_name: String,
}

/// An in-progress inline edit of one species' lore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoreDraft {
    /// Species being edited.
    pub species_name: String,
    /// Current text of the editor.
    pub lore: String,
}

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// Everything the catalog screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// The last fetched creature list.
    pub creatures: Vec<CreatureWithSpecies>,
    /// The creature found by the last id lookup.
    pub selected_creature: Option<CreatureWithSpecies>,
    /// Known species, for the form's dropdown.
    pub species: Vec<Species>,
    /// 1-based page of `creatures` being shown.
    pub current_page: usize,
    /// Raw text of the id lookup input.
    pub creature_id_input: String,
    /// The create-creature form.
    pub draft: CreatureDraft,
    /// The open lore editor, if any.
    pub lore_edit: Option<LoreDraft>,
    /// Per-action progress.
    pub status: ActionStatuses,
    /// The toast on screen, if any.
    pub toast: Option<Toast>,
    next_toast_id: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            creatures: Vec::new(),
            selected_creature: None,
            species: Vec::new(),
            current_page: 1,
            creature_id_input: String::new(),
            draft: CreatureDraft::default(),
            lore_edit: None,
            status: ActionStatuses::default(),
            toast: None,
            next_toast_id: 1,
        }
    }
}

impl ViewState {
    /// A fresh screen.
    pub fn new() -> Self {
        Self::default()
    }

    // -- status ------------------------------------------------------------

    /// Mark `action` as in flight.
    pub fn begin(&mut self, action: Action) {
        *self.status.slot(action) = ActionStatus::Loading;
    }

    /// Mark `action` as succeeded.
    pub fn succeed(&mut self, action: Action) {
        *self.status.slot(action) = ActionStatus::Succeeded;
    }

    /// Mark `action` as failed with `message`.
    pub fn fail(&mut self, action: Action, message: impl Into<String>) {
        *self.status.slot(action) = ActionStatus::Failed(message.into());
    }

    /// Whether `action` has a request in flight.
    pub const fn is_loading(&self, action: Action) -> bool {
        self.status.get(action).is_loading()
    }

    // -- creatures -----------------------------------------------------------

    /// Replace the creature list and return to the first page.
    pub fn set_creatures(&mut self, creatures: Vec<CreatureWithSpecies>) {
        self.creatures = creatures;
        self.current_page = 1;
    }

    /// Drop the creature list.
    pub fn clear_creatures(&mut self) {
        self.set_creatures(Vec::new());
    }

    /// Show (or clear) the looked-up creature.
    pub fn select_creature(&mut self, creature: Option<CreatureWithSpecies>) {
        self.selected_creature = creature;
    }

    // -- pagination ----------------------------------------------------------

    /// Number of pages, never less than one.
    pub fn page_count(&self) -> usize {
        let pages = self.creatures.len().div_ceil(PAGE_SIZE);
        if pages == 0 { 1 } else { pages }
    }

    /// The creatures on the current page.
    pub fn visible_creatures(&self) -> &[CreatureWithSpecies] {
        let start = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(PAGE_SIZE)
            .min(self.creatures.len());
        let end = start.saturating_add(PAGE_SIZE).min(self.creatures.len());
        self.creatures.get(start..end).unwrap_or_default()
    }

    /// Whether a later page exists.
    pub fn can_go_next(&self) -> bool {
        self.current_page < self.page_count()
    }

    /// Whether an earlier page exists.
    pub const fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Advance one page; no-op on the last page.
    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.current_page = self.current_page.saturating_add(1);
        }
    }

    /// Go back one page; no-op on the first page.
    pub const fn previous_page(&mut self) {
        if self.can_go_previous() {
            self.current_page = self.current_page.saturating_sub(1);
        }
    }

    // -- species -------------------------------------------------------------

    /// Replace the species list.
    pub fn set_species(&mut self, species: Vec<Species>) {
        self.species = species;
    }

    /// Swap in an updated species by name, appending it if unknown.
    pub fn replace_species(&mut self, updated: Species) {
        if let Some(existing) = self.species.iter_mut().find(|s| s.name == updated.name) {
            *existing = updated;
        } else {
            self.species.push(updated);
        }
    }

    /// The species currently chosen in the form, if it is known.
    pub fn selected_species(&self) -> Option<&Species> {
        self.species
            .iter()
            .find(|s| s.name == self.draft.species_name)
    }

    // -- drafts --------------------------------------------------------------

    /// Set the id lookup input.
    pub fn set_creature_id_input(&mut self, input: impl Into<String>) {
        self.creature_id_input = input.into();
    }

    /// Set the form's name input.
    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Choose a species in the form.
    pub fn set_draft_species(&mut self, species_name: impl Into<String>) {
        self.draft.species_name = species_name.into();
    }

    /// Clear the form, preselecting the first known species.
    pub fn reset_draft(&mut self) {
        self.draft = CreatureDraft {
            name: String::new(),
            species_name: self
                .species
                .first()
                .map(|s| s.name.clone())
                .unwrap_or_default(),
        };
    }

    /// Open the lore editor for `species_name`, prefilled with its lore.
    pub fn begin_lore_edit(&mut self, species_name: &str) {
        let lore = self
            .species
            .iter()
            .find(|s| s.name == species_name)
            .and_then(|s| s.lore.clone())
            .unwrap_or_default();
        self.lore_edit = Some(LoreDraft {
            species_name: species_name.to_owned(),
            lore,
        });
    }

    /// Update the editor text; no-op when no editor is open.
    pub fn change_lore_draft(&mut self, lore: impl Into<String>) {
        if let Some(edit) = self.lore_edit.as_mut() {
            edit.lore = lore.into();
        }
    }

    /// Close the editor without saving.
    pub fn cancel_lore_edit(&mut self) {
        self.lore_edit = None;
    }

    // -- toast ---------------------------------------------------------------

    /// Show a toast, replacing any current one. Returns its id.
    pub fn show_toast(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        now: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id = self.next_toast_id.saturating_add(1);
        self.toast = Some(Toast {
            id,
            message: message.into(),
            kind,
            expires_at: now.checked_add_signed(TOAST_DURATION).unwrap_or(now),
        });
        id
    }

    /// Dismiss the toast with `id`. A stale id leaves a newer toast up.
    /// Returns whether a toast was removed.
    pub fn dismiss_toast(&mut self, id: u64) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
            true
        } else {
            false
        }
    }

    /// Drop the toast if it has expired by `now`.
    pub fn expire_toast(&mut self, now: DateTime<Utc>) {
        if self.toast.as_ref().is_some_and(|t| t.expires_at <= now) {
            self.toast = None;
        }
    }
}
