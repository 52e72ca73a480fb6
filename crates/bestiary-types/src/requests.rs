//! Request payloads for the write endpoints and their validation.
//!
//! Every field is an `Option` so that a missing field is reported as a
//! validation failure with a readable message instead of a decode error.
//! Validation is declared with the `validator` derive; a successful
//! [`validate`](CreateCreatureRequest::validated) yields a value type
//! with non-optional fields that the data layer accepts.
//!
//! | Endpoint | Request | Validated value |
//! |----------|---------|-----------------|
//! | `POST /creatures` | [`CreateCreatureRequest`] | [`NewCreature`] |
//! | `POST /creatures/species` | [`CreateSpeciesRequest`] | [`NewSpecies`] |
//! | `PATCH /creatures/species/{name}` | [`UpdateSpeciesLoreRequest`] | [`LorePatch`] |

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::{Validate, ValidationErrors};

/// Message used when a species lore patch carries no usable lore.
pub const NO_DATA_PROVIDED: &str = "No data provided";

/// Message used when a creature has no name.
pub const CREATURE_NAME_REQUIRED: &str = "Creature name is required";

/// Message used when a species name is missing.
pub const SPECIES_NAME_REQUIRED: &str = "Species name is required";

/// Client input was missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable description of what was wrong.
    pub message: String,
}

impl ValidationError {
    /// Create a validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// POST /creatures
// ---------------------------------------------------------------------------

/// Body of `POST /creatures`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CreateCreatureRequest {
    /// Creature display name.
    #[validate(
        required(message = "Creature name is required"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,
    /// Name of an existing species.
    #[validate(
        required(message = "Species name is required"),
        custom(function = "not_blank")
    )]
    pub species_name: Option<String>,
}

/// A creature ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCreature {
    /// Creature display name.
    pub name: String,
    /// Name of the species the creature references.
    pub species_name: String,
}

impl CreateCreatureRequest {
    /// Build a request from its two fields.
    pub fn new(name: impl Into<String>, species_name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            species_name: Some(species_name.into()),
        }
    }

    /// Validate the request and convert it into a [`NewCreature`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if either field is absent or blank.
    pub fn validated(self) -> Result<NewCreature, ValidationError> {
        self.validate().map_err(|e| {
            summarize(
                &e,
                &[
                    ("name", CREATURE_NAME_REQUIRED),
                    ("species_name", SPECIES_NAME_REQUIRED),
                ],
            )
        })?;
        match (self.name, self.species_name) {
            (Some(name), Some(species_name)) => Ok(NewCreature { name, species_name }),
            (None, _) => Err(ValidationError::new(CREATURE_NAME_REQUIRED)),
            (_, None) => Err(ValidationError::new(SPECIES_NAME_REQUIRED)),
        }
    }
}

// ---------------------------------------------------------------------------
// POST /creatures/species
// ---------------------------------------------------------------------------

/// Body of `POST /creatures/species`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CreateSpeciesRequest {
    /// Unique species name.
    #[validate(
        required(message = "Species name is required"),
        custom(function = "not_blank")
    )]
    pub name: Option<String>,
    /// Optional lore. Absent or empty lore is stored as `null`.
    #[serde(default)]
    pub lore: Option<String>,
}

/// A species ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSpecies {
    /// Unique species name.
    pub name: String,
    /// Lore, if any.
    pub lore: Option<String>,
}

impl CreateSpeciesRequest {
    /// Build a request from a name and optional lore.
    pub fn new(name: impl Into<String>, lore: Option<String>) -> Self {
        Self {
            name: Some(name.into()),
            lore,
        }
    }

    /// Validate the request and convert it into a [`NewSpecies`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `name` is absent or blank.
    pub fn validated(self) -> Result<NewSpecies, ValidationError> {
        self.validate()
            .map_err(|e| summarize(&e, &[("name", SPECIES_NAME_REQUIRED)]))?;
        let name = self
            .name
            .ok_or_else(|| ValidationError::new(SPECIES_NAME_REQUIRED))?;
        let lore = self.lore.filter(|lore| !lore.is_empty());
        Ok(NewSpecies { name, lore })
    }
}

// ---------------------------------------------------------------------------
// PATCH /creatures/species/{name}
// ---------------------------------------------------------------------------

/// Body of `PATCH /creatures/species/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, TS)]
#[ts(export, export_to = "bindings/")]
pub struct UpdateSpeciesLoreRequest {
    /// Replacement lore. Must contain at least one non-whitespace character.
    #[validate(
        required(message = "No data provided"),
        custom(function = "not_blank")
    )]
    pub lore: Option<String>,
}

/// A validated lore replacement for the species named `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LorePatch {
    /// Name of the species to update.
    pub name: String,
    /// New lore, stored exactly as given.
    pub lore: String,
}

impl UpdateSpeciesLoreRequest {
    /// Build a request carrying the given lore.
    pub fn new(lore: impl Into<String>) -> Self {
        Self {
            lore: Some(lore.into()),
        }
    }

    /// Validate the request against the species named in the path.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] with [`NO_DATA_PROVIDED`] if the lore
    /// is absent or blank, or [`SPECIES_NAME_REQUIRED`] if `name` is empty.
    pub fn validated(self, name: &str) -> Result<LorePatch, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::new(SPECIES_NAME_REQUIRED));
        }
        self.validate()
            .map_err(|e| summarize(&e, &[("lore", NO_DATA_PROVIDED)]))?;
        let lore = self
            .lore
            .ok_or_else(|| ValidationError::new(NO_DATA_PROVIDED))?;
        Ok(LorePatch {
            name: name.to_owned(),
            lore,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject strings that are empty or contain only whitespace.
fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// Flatten `validator` output into one message, fields in declaration order.
///
/// Each field reports a single fixed message whichever rule failed.
/// Keys are looked up by Rust name and by their camelCase wire name.
fn summarize(errors: &ValidationErrors, fields: &[(&str, &str)]) -> ValidationError {
    let by_field = errors.field_errors();
    let messages: Vec<&str> = fields
        .iter()
        .filter(|(field, _)| {
            by_field.contains_key(*field) || by_field.contains_key(camel_case(field).as_str())
        })
        .map(|(_, message)| *message)
        .collect();

    if messages.is_empty() {
        ValidationError::new(errors.to_string())
    } else {
        ValidationError::new(messages.join("; "))
    }
}

/// `species_name` -> `speciesName`.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
