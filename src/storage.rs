//! Storage key definitions for the identity registry.

use soroban_sdk::{contracttype, Address};

/// Storage keys for the identity registry.
#[contracttype]
#[derive(Clone, Debug)]
pub enum RegistryKey {
    /// Controller address, allowed to change the lifecycle.
    Admin,

    /// Current `Lifecycle` of the contract.
    Lifecycle,

    /// Number of pending-request slots per identity.
    RequestCapacity,

    /// Total count of registered identities.
    IdentityCount,

    /// Maps Address to Identity.
    Identity(Address),

    /// Ordered pending approval requests against an owner.
    Requests(Address),

    /// Standing approval of (owner, requester). Absent means not approved.
    Approval(Address, Address),
}

/// Time-to-live for identity data in ledger entries.
pub const TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const TTL_EXTEND: u32 = 2592000; // ~150 days
