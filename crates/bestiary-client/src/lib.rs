//! Client side of the Bestiary creature catalog.
//!
//! - [`CatalogClient`] is a typed wrapper over the HTTP API. Every call is
//!   one awaited request; failures come back as [`ClientError`] whose
//!   display text is the server's message.
//! - [`ViewState`] is the serializable state of the catalog screen:
//!   per-action status, pagination, toast and form drafts.
//! - [`Controller`] runs the screen's flows against a client and records
//!   their outcomes in the view state.

pub mod api;
pub mod controller;
pub mod error;
pub mod view;

pub use api::{CatalogClient, DEFAULT_BASE_URL};
pub use controller::Controller;
pub use error::ClientError;
pub use view::{
    Action, ActionStatus, ActionStatuses, CreatureDraft, LoreDraft, PAGE_SIZE, TOAST_DURATION,
    Toast, ToastKind, ViewState,
};
