//! Type-safe identifier wrapper for creatures.
//!
//! Creatures are keyed by a datastore-assigned `BIGSERIAL`, so the id is
//! a plain signed 64-bit integer on the wire. Species have no surrogate
//! key; they are addressed by their unique name.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Surrogate key of a creature, assigned by the datastore on insert.
///
/// Serializes transparently as a JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct CreatureId(#[ts(type = "number")] pub i64);

impl CreatureId {
    /// Return the inner integer value.
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CreatureId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<CreatureId> for i64 {
    fn from(id: CreatureId) -> Self {
        id.0
    }
}

/// A path segment could not be read as a creature id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid ID")]
pub struct InvalidCreatureId;

impl FromStr for CreatureId {
    type Err = InvalidCreatureId;

    /// Parse an id from a path segment.
    ///
    /// Surrounding whitespace is ignored. Any value that is not an
    /// integer in the `i64` range is rejected; zero and negative values
    /// parse fine and simply never match a stored creature.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().ok().map(Self).ok_or(InvalidCreatureId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!("1".parse::<CreatureId>(), Ok(CreatureId(1)));
        assert_eq!(" 42 ".parse::<CreatureId>(), Ok(CreatureId(42)));
        assert_eq!("-3".parse::<CreatureId>(), Ok(CreatureId(-3)));
    }

    #[test]
    fn rejects_non_numeric_segments() {
        for raw in ["abc", "", "1.5", "1e3", "0x10", "99999999999999999999"] {
            assert_eq!(raw.parse::<CreatureId>(), Err(InvalidCreatureId), "{raw}");
        }
    }

    #[test]
    fn error_message_matches_api_contract() {
        assert_eq!(InvalidCreatureId.to_string(), "Invalid ID");
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&CreatureId(7)).ok();
        assert_eq!(json.as_deref(), Some("7"));
    }
}
