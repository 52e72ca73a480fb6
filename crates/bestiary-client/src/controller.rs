//! Request flows for the catalog screen.
//!
//! A [`Controller`] pairs a [`ViewState`] with a [`CatalogClient`]. Each
//! flow validates local input, marks its action as loading, awaits one
//! request (two when a create refreshes the list), and records the outcome
//! as a status plus a toast. Failures never escape as errors; they end up
//! on screen.

use bestiary_types::{CreatureId, NO_DATA_PROVIDED};
use chrono::Utc;
use tracing::{debug, info};

use crate::api::CatalogClient;
use crate::view::{Action, ToastKind, ViewState};

const ENTER_CREATURE_ID: &str = "Please enter a creature ID";
const ENTER_CREATURE_NAME: &str = "Please enter a creature name";
const CREATURE_FOUND: &str = "Creature found!";

/// Drives the catalog screen against a live server.
#[derive(Debug, Clone)]
pub struct Controller {
    client: CatalogClient,
    view: ViewState,
}

impl Controller {
    /// A controller over a fresh [`ViewState`].
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            view: ViewState::new(),
        }
    }

    /// The current view state.
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Mutable access for input bindings (drafts, pagination, toasts).
    pub const fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Consume the controller, keeping its view state.
    pub fn into_view(self) -> ViewState {
        self.view
    }

    /// Fetch every creature.
    ///
    /// Clears the looked-up creature first. On success the list replaces
    /// the previous one and the view returns to page 1.
    pub async fn load_creatures(&mut self) {
        self.view.begin(Action::List);
        self.view.select_creature(None);

        match self.client.list_creatures().await {
            Ok(creatures) => {
                let count = creatures.len();
                info!(count, "creatures loaded");
                self.view.set_creatures(creatures);
                self.view.succeed(Action::List);
                self.toast(format!("Loaded {count} creatures successfully!"), ToastKind::Success);
            }
            Err(e) => {
                let message = e.to_string();
                self.view.fail(Action::List, message.clone());
                self.toast(message, ToastKind::Error);
            }
        }
    }

    /// Look up the creature whose id is in the lookup input.
    ///
    /// An empty input only raises a toast. Otherwise the creature list is
    /// cleared and the result replaces the selected creature.
    pub async fn lookup_creature(&mut self) {
        let input = self.view.creature_id_input.trim().to_owned();
        if input.is_empty() {
            self.toast(ENTER_CREATURE_ID, ToastKind::Error);
            return;
        }

        self.view.begin(Action::Lookup);
        self.view.clear_creatures();

        let found = match input.parse::<CreatureId>() {
            Ok(id) => match self.client.get_creature(id).await {
                Ok(creature) => Some(creature),
                Err(e) => {
                    debug!(%id, error = %e, "creature lookup failed");
                    None
                }
            },
            Err(e) => {
                debug!(input, error = %e, "creature id rejected locally");
                None
            }
        };

        if let Some(creature) = found {
            self.view.select_creature(Some(creature));
            self.view.succeed(Action::Lookup);
            self.toast(CREATURE_FOUND, ToastKind::Success);
        } else {
            let message = format!("Could not fetch creature with ID {input}");
            self.view.select_creature(None);
            self.view.fail(Action::Lookup, message.clone());
            self.toast(message, ToastKind::Error);
        }
    }

    /// Submit the create-creature form.
    ///
    /// An empty name only raises a toast. On success the form is reset and,
    /// if a list is showing, the list is fetched again.
    pub async fn create_creature(&mut self) {
        if self.view.draft.name.is_empty() {
            self.toast(ENTER_CREATURE_NAME, ToastKind::Error);
            return;
        }

        self.view.begin(Action::Create);
        let draft = self.view.draft.clone();

        match self
            .client
            .create_creature(&draft.name, &draft.species_name)
            .await
        {
            Ok(created) => {
                info!(id = %created.id, name = created.name, "creature created");
                self.view.succeed(Action::Create);
                self.toast(format!("{} created successfully!", created.name), ToastKind::Success);
                self.view.reset_draft();
                if !self.view.creatures.is_empty() {
                    self.load_creatures().await;
                }
            }
            Err(e) => {
                let message = e.to_string();
                self.view.fail(Action::Create, message.clone());
                self.toast(message, ToastKind::Error);
            }
        }
    }

    /// Fetch the species list used by the form.
    pub async fn load_species(&mut self) {
        self.view.begin(Action::Species);

        match self.client.list_species().await {
            Ok(species) => {
                debug!(count = species.len(), "species loaded");
                self.view.set_species(species);
                self.view.succeed(Action::Species);
            }
            Err(e) => {
                let message = e.to_string();
                self.view.fail(Action::Species, message.clone());
                self.toast(message, ToastKind::Error);
            }
        }
    }

    /// Open the lore editor for `species_name`.
    pub fn begin_lore_edit(&mut self, species_name: &str) {
        self.view.begin_lore_edit(species_name);
    }

    /// Update the lore editor text.
    pub fn change_lore(&mut self, lore: impl Into<String>) {
        self.view.change_lore_draft(lore);
    }

    /// Close the lore editor without saving.
    pub fn cancel_lore_edit(&mut self) {
        self.view.cancel_lore_edit();
    }

    /// Save the open lore editor.
    ///
    /// Blank lore is refused locally with the same message the server
    /// would send. On success the species is replaced in the list and the
    /// editor closes; on failure the editor stays open.
    pub async fn save_lore(&mut self) {
        let Some(edit) = self.view.lore_edit.clone() else {
            return;
        };

        if edit.lore.trim().is_empty() {
            self.view.fail(Action::UpdateLore, NO_DATA_PROVIDED);
            self.toast(NO_DATA_PROVIDED, ToastKind::Error);
            return;
        }

        self.view.begin(Action::UpdateLore);

        match self
            .client
            .update_species_lore(&edit.species_name, &edit.lore)
            .await
        {
            Ok(species) => {
                let message = format!("Lore updated for {}", species.name);
                info!(species = species.name, "lore updated");
                self.view.replace_species(species);
                self.view.cancel_lore_edit();
                self.view.succeed(Action::UpdateLore);
                self.toast(message, ToastKind::Success);
            }
            Err(e) => {
                let message = e.to_string();
                self.view.fail(Action::UpdateLore, message.clone());
                self.toast(message, ToastKind::Error);
            }
        }
    }

    /// Drop the toast if its three seconds are up.
    pub fn expire_toast(&mut self) {
        self.view.expire_toast(Utc::now());
    }

    fn toast(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.view.show_toast(message, kind, Utc::now())
    }
}
