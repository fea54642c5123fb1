//! Identity record stored per registered address.

use soroban_sdk::{contracttype, String};

/// A registered identity.
///
/// Presence of the record in storage is what marks an address as
/// registered; blank fields are valid and mean "unset".
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Identity {
    /// Display name, at most 20 bytes.
    pub name: String,

    /// Content hash of the profile image, empty or exactly 46 bytes.
    pub image_hash: String,

    /// Ledger sequence at registration.
    pub created_at: u64,

    /// Ledger sequence of the last field update.
    pub updated_at: u64,
}

impl Identity {
    /// Create a new identity.
    pub fn new(name: String, image_hash: String, created_at: u64) -> Self {
        Self {
            name,
            image_hash,
            created_at,
            updated_at: created_at,
        }
    }

    /// The `(name, image_hash)` pair handed out to readers.
    pub fn view(&self) -> (String, String) {
        (self.name.clone(), self.image_hash.clone())
    }
}
