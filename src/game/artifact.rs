//! # Artifacts
//!
//! Collectible items. An artifact either grants stat bonuses or works as a key
//! for the exit door; [`ArtifactKind`] makes the two mutually exclusive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies which exit lock a key opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyId {
    Golden,
    Crystal,
    Runic,
}

impl KeyId {
    /// Returns all key identifiers.
    pub fn all() -> [KeyId; 3] {
        [KeyId::Golden, KeyId::Crystal, KeyId::Runic]
    }

    /// The lock identifier string, e.g. `golden_lock`.
    pub fn as_str(self) -> &'static str {
        match self {
            KeyId::Golden => "golden_lock",
            KeyId::Crystal => "crystal_lock",
            KeyId::Runic => "runic_lock",
        }
    }

    /// Parses a lock identifier string.
    pub fn from_id(id: &str) -> Option<KeyId> {
        KeyId::all().into_iter().find(|key| key.as_str() == id)
    }

    /// Display name of the matching key.
    pub fn key_name(self) -> &'static str {
        match self {
            KeyId::Golden => "Golden Key",
            KeyId::Crystal => "Crystal Key",
            KeyId::Runic => "Runic Key",
        }
    }

    /// Adjective used when describing the lock.
    pub fn lock_kind(self) -> &'static str {
        match self {
            KeyId::Golden => "golden",
            KeyId::Crystal => "crystal",
            KeyId::Runic => "runic",
        }
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an artifact does for its holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// Permanent stat bonuses applied on pickup
    Bonus {
        health: i32,
        attack: i32,
        defense: i32,
    },
    /// Unlocks the exit door with the matching lock
    Key(KeyId),
}

/// A collectible item found in treasure, puzzle and monster rooms.
///
/// # Examples
///
/// ```
/// use labyrinth::{Artifact, KeyId};
///
/// let potion = Artifact::bonus("Health Potion", "A red potion", 20, 0, 0);
/// assert!(!potion.is_key());
/// assert_eq!(potion.health_bonus(), 20);
///
/// let key = Artifact::key("Golden Key", "A key that seems important", KeyId::Golden);
/// assert_eq!(key.key_id(), Some(KeyId::Golden));
/// assert_eq!(key.attack_bonus(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub description: String,
    pub kind: ArtifactKind,
}

impl Artifact {
    /// Creates a stat-bonus artifact.
    pub fn bonus(
        name: impl Into<String>,
        description: impl Into<String>,
        health: i32,
        attack: i32,
        defense: i32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ArtifactKind::Bonus {
                health,
                attack,
                defense,
            },
        }
    }

    /// Creates a key artifact.
    pub fn key(name: impl Into<String>, description: impl Into<String>, key_id: KeyId) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: ArtifactKind::Key(key_id),
        }
    }

    pub fn is_key(&self) -> bool {
        matches!(self.kind, ArtifactKind::Key(_))
    }

    /// The lock this key opens, or None for bonus artifacts.
    pub fn key_id(&self) -> Option<KeyId> {
        match self.kind {
            ArtifactKind::Key(key_id) => Some(key_id),
            ArtifactKind::Bonus { .. } => None,
        }
    }

    pub fn health_bonus(&self) -> i32 {
        match self.kind {
            ArtifactKind::Bonus { health, .. } => health,
            ArtifactKind::Key(_) => 0,
        }
    }

    pub fn attack_bonus(&self) -> i32 {
        match self.kind {
            ArtifactKind::Bonus { attack, .. } => attack,
            ArtifactKind::Key(_) => 0,
        }
    }

    pub fn defense_bonus(&self) -> i32 {
        match self.kind {
            ArtifactKind::Bonus { defense, .. } => defense,
            ArtifactKind::Key(_) => 0,
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)?;

        match self.kind {
            ArtifactKind::Key(_) => f.write_str(" (Key)"),
            ArtifactKind::Bonus {
                health,
                attack,
                defense,
            } => {
                if health != 0 {
                    write!(f, " HP+{health}")?;
                }
                if attack != 0 {
                    write!(f, " ATK+{attack}")?;
                }
                if defense != 0 {
                    write!(f, " DEF+{defense}")?;
                }
                Ok(())
            }
        }
    }
}
