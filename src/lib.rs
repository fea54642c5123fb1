//! # Soroban Identity Registry
//!
//! An ownership-gated identity registry. Each address may register one
//! identity (a short name plus a content hash pointing at a profile image)
//! and decides who else may read it.
//!
//! Visibility is negotiated through a request/approve protocol:
//!
//! - A registered user asks an owner for approval; the request is queued in
//!   the owner's bounded pending list
//! - The owner approves (granting standing read access) or removes the request
//! - An approval can later be revoked with `unapprove_requester`
//! - Approved requesters read the owner's identity with `get_identity_from`
//!
//! The controller set at `init` can pause the registry (reads keep working,
//! writes are rejected) or terminate it permanently.
//!
//! ## Usage
//!
//! ```rust,ignore
//! client.init(&admin, &Some(10));
//!
//! client.register(&name, &image_hash, &alice);
//! client.request_for_approval(&bob, &alice);
//! client.approve_requester(&alice, &bob);
//!
//! let (name, image_hash) = client.get_identity_from(&bob, &alice);
//! ```

#![no_std]

mod events;
mod identity;
mod lifecycle;
mod requests;
mod storage;
mod validation;


pub use identity::Identity;
pub use lifecycle::Lifecycle;
pub use requests::{ApprovalRequests, DEFAULT_REQUEST_CAPACITY, MAX_REQUEST_CAPACITY};
pub use storage::RegistryKey;
pub use validation::{validate_image_hash, validate_name, IMAGE_HASH_LENGTH, MAX_NAME_LENGTH};

use soroban_sdk::{
    contract, contracterror, contractimpl, log, Address, BytesN, Env, String,
};

use crate::events::*;
use crate::requests::PendingRequests;
use crate::storage::{TTL_EXTEND, TTL_THRESHOLD};

/// Error codes for the identity registry.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// Contract has already been initialized.
    AlreadyInitialized = 1,
    /// Contract has not been initialized.
    NotInitialized = 2,
    /// Caller is not the controller.
    Unauthorized = 3,
    /// A name, image hash or capacity is out of bounds.
    InvalidArgument = 4,
    /// Caller already has an identity.
    AlreadyRegistered = 5,
    /// Caller or counterparty has no identity.
    NotRegistered = 6,
    /// Caller targeted their own identity.
    SelfRequest = 7,
    /// Requester is already queued with this owner.
    DuplicateRequest = 8,
    /// Owner's pending queue has no free slot.
    RequestQueueFull = 9,
    /// Requester is not in the caller's pending queue.
    RequestNotFound = 10,
    /// Caller has not been approved by the owner.
    NotApproved = 11,
    /// Contract is paused; writes are rejected.
    ContractPaused = 12,
    /// Contract has been terminated permanently.
    ContractTerminated = 13,
}

#[contract]
pub struct IdentityRegistryContract;

#[contractimpl]
impl IdentityRegistryContract {
    // ========== Initialization ==========

    /// Initialize the registry with a controller and pending-queue capacity.
    ///
    /// `request_capacity` defaults to `DEFAULT_REQUEST_CAPACITY` and must lie
    /// in `1..=MAX_REQUEST_CAPACITY`.
    pub fn init(
        env: Env,
        admin: Address,
        request_capacity: Option<u32>,
    ) -> Result<(), RegistryError> {
        if env.storage().instance().has(&RegistryKey::Admin) {
            return Err(RegistryError::AlreadyInitialized);
        }

        admin.require_auth();

        let capacity = request_capacity.unwrap_or(DEFAULT_REQUEST_CAPACITY);
        if capacity == 0 || capacity > MAX_REQUEST_CAPACITY {
            return Err(RegistryError::InvalidArgument);
        }

        env.storage().instance().set(&RegistryKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&RegistryKey::RequestCapacity, &capacity);
        env.storage().instance().set(&RegistryKey::IdentityCount, &0u64);
        lifecycle::store(&env, Lifecycle::Active);

        log!(&env, "registry initialized", admin, capacity);
        Ok(())
    }

    /// Get the controller address.
    pub fn admin(env: Env) -> Result<Address, RegistryError> {
        env.storage()
            .instance()
            .get(&RegistryKey::Admin)
            .ok_or(RegistryError::NotInitialized)
    }

    /// Get the current lifecycle state.
    pub fn lifecycle(env: Env) -> Result<Lifecycle, RegistryError> {
        lifecycle::load(&env)
    }

    /// Number of pending-request slots per identity.
    pub fn request_capacity(env: Env) -> Result<u32, RegistryError> {
        Self::capacity(&env)
    }

    /// Total number of registered identities.
    pub fn identity_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&RegistryKey::IdentityCount)
            .unwrap_or(0)
    }

    // ========== Registration ==========

    /// Register an identity for `caller`.
    ///
    /// # Errors
    /// - `InvalidArgument` if the name exceeds 20 bytes or the image hash is
    ///   neither empty nor 46 bytes
    /// - `AlreadyRegistered` if the caller already has an identity
    /// - `ContractPaused` / `ContractTerminated` per lifecycle
    pub fn register(
        env: Env,
        name: String,
        image_hash: String,
        caller: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        lifecycle::load(&env)?.check_write()?;

        if !validate_name(&name) || !validate_image_hash(&image_hash) {
            return Err(RegistryError::InvalidArgument);
        }

        if Self::load_identity(&env, &caller).is_some() {
            return Err(RegistryError::AlreadyRegistered);
        }

        let identity = Identity::new(name, image_hash, env.ledger().sequence() as u64);
        Self::save_identity(&env, &caller, &identity);

        let count = Self::identity_count(env.clone());
        env.storage()
            .instance()
            .set(&RegistryKey::IdentityCount, &(count + 1));

        log!(&env, "identity registered", caller);
        emit_identity_created(&env, &caller);

        Ok(())
    }

    /// Check whether `address` has registered an identity.
    pub fn is_registered(env: Env, address: Address) -> Result<bool, RegistryError> {
        lifecycle::load(&env)?.check_read()?;
        Ok(Self::load_identity(&env, &address).is_some())
    }

    /// Get the caller's own `(name, image_hash)`.
    pub fn get_my_identity(env: Env, caller: Address) -> Result<(String, String), RegistryError> {
        caller.require_auth();
        lifecycle::load(&env)?.check_read()?;

        let identity = Self::require_identity(&env, &caller)?;
        Ok(identity.view())
    }

    // ========== Identity Updates ==========

    /// Replace the caller's name. An empty name clears it.
    pub fn update_name(env: Env, name: String, caller: Address) -> Result<(), RegistryError> {
        caller.require_auth();
        lifecycle::load(&env)?.check_write()?;

        if !validate_name(&name) {
            return Err(RegistryError::InvalidArgument);
        }

        let mut identity = Self::require_identity(&env, &caller)?;
        let old = identity.name.clone();
        identity.name = name;
        identity.updated_at = env.ledger().sequence() as u64;
        Self::save_identity(&env, &caller, &identity);

        emit_name_updated(&env, &caller, &old, &identity.name);
        Ok(())
    }

    /// Replace the caller's image hash. An empty hash clears it.
    pub fn update_image_hash(
        env: Env,
        image_hash: String,
        caller: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        lifecycle::load(&env)?.check_write()?;

        if !validate_image_hash(&image_hash) {
            return Err(RegistryError::InvalidArgument);
        }

        let mut identity = Self::require_identity(&env, &caller)?;
        let old = identity.image_hash.clone();
        identity.image_hash = image_hash;
        identity.updated_at = env.ledger().sequence() as u64;
        Self::save_identity(&env, &caller, &identity);

        emit_image_updated(&env, &caller, &old, &identity.image_hash);
        Ok(())
    }

    /// Replace both fields at once. Both values are validated before either
    /// is written.
    pub fn update_name_and_image(
        env: Env,
        name: String,
        image_hash: String,
        caller: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        lifecycle::load(&env)?.check_write()?;

        if !validate_name(&name) || !validate_image_hash(&image_hash) {
            return Err(RegistryError::InvalidArgument);
        }

        let mut identity = Self::require_identity(&env, &caller)?;
        let old_name = identity.name.clone();
        let old_image_hash = identity.image_hash.clone();
        identity.name = name;
        identity.image_hash = image_hash;
        identity.updated_at = env.ledger().sequence() as u64;
        Self::save_identity(&env, &caller, &identity);

        emit_name_updated(&env, &caller, &old_name, &identity.name);
        emit_image_updated(&env, &caller, &old_image_hash, &identity.image_hash);
        Ok(())
    }

    // ========== Approval Requests ==========

    /// Get the caller's pending queue, padded with `None` to capacity.
    pub fn get_approval_requests(
        env: Env,
        caller: Address,
    ) -> Result<ApprovalRequests, RegistryError> {
        caller.require_auth();
        lifecycle::load(&env)?.check_read()?;

        Self::require_identity(&env, &caller)?;

        let queue = PendingRequests::load(&env, &caller, Self::capacity(&env)?);
        Ok(queue.view(&env))
    }

    /// Ask `owner` for access to their identity.
    ///
    /// # Errors
    /// - `SelfRequest` if `owner` is the caller
    /// - `NotRegistered` if either party has no identity
    /// - `DuplicateRequest` if the caller is already queued with `owner`
    /// - `RequestQueueFull` if `owner` has no free slot
    pub fn request_for_approval(
        env: Env,
        owner: Address,
        caller: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        lifecycle::load(&env)?.check_write()?;

        Self::require_pair(&env, &caller, &owner)?;

        let mut queue = PendingRequests::load(&env, &owner, Self::capacity(&env)?);
        if queue.contains(&caller) {
            return Err(RegistryError::DuplicateRequest);
        }
        if !queue.push(caller.clone()) {
            return Err(RegistryError::RequestQueueFull);
        }
        queue.save(&env);

        log!(&env, "approval requested", caller, owner, queue.len());
        emit_requesting_for_approval(&env, &caller, &owner);

        Ok(())
    }

    /// Drop `requester` from the caller's pending queue without approving.
    pub fn remove_request(
        env: Env,
        requester: Address,
        caller: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        lifecycle::load(&env)?.check_write()?;

        Self::require_pair(&env, &caller, &requester)?;

        let mut queue = PendingRequests::load(&env, &caller, Self::capacity(&env)?);
        if !queue.remove(&requester) {
            return Err(RegistryError::RequestNotFound);
        }
        queue.save(&env);

        log!(&env, "approval request removed", requester, caller, queue.len());
        emit_remove_request_for_approval(&env, &requester, &caller);

        Ok(())
    }

    /// Whether the caller has granted `requester` read access.
    pub fn get_requester_approval_status(
        env: Env,
        requester: Address,
        caller: Address,
    ) -> Result<bool, RegistryError> {
        caller.require_auth();
        lifecycle::load(&env)?.check_read()?;

        Self::require_pair(&env, &caller, &requester)?;
        Ok(Self::is_approved(&env, &caller, &requester))
    }

    /// Grant a queued `requester` read access and dequeue them.
    pub fn approve_requester(
        env: Env,
        requester: Address,
        caller: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        lifecycle::load(&env)?.check_write()?;

        Self::require_pair(&env, &caller, &requester)?;

        let mut queue = PendingRequests::load(&env, &caller, Self::capacity(&env)?);
        if !queue.remove(&requester) {
            return Err(RegistryError::RequestNotFound);
        }
        queue.save(&env);
        Self::set_approval(&env, &caller, &requester, true);

        log!(&env, "requester approved", requester, caller);
        emit_requester_approved(&env, &requester, &caller);

        Ok(())
    }

    /// Revoke `requester`'s access and drop any pending request they hold.
    ///
    /// Serves both as "revoke" for a previously approved requester and as
    /// "reject" for a pending one, so it succeeds whether or not the
    /// requester is currently queued.
    pub fn unapprove_requester(
        env: Env,
        requester: Address,
        caller: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        lifecycle::load(&env)?.check_write()?;

        Self::require_pair(&env, &caller, &requester)?;

        Self::set_approval(&env, &caller, &requester, false);

        let mut queue = PendingRequests::load(&env, &caller, Self::capacity(&env)?);
        if queue.remove(&requester) {
            queue.save(&env);
        }

        log!(&env, "requester unapproved", requester, caller);
        emit_requester_unapproved(&env, &requester, &caller);

        Ok(())
    }

    /// Read `owner`'s `(name, image_hash)`. The caller must be approved.
    pub fn get_identity_from(
        env: Env,
        owner: Address,
        caller: Address,
    ) -> Result<(String, String), RegistryError> {
        caller.require_auth();
        lifecycle::load(&env)?.check_read()?;

        Self::require_pair(&env, &caller, &owner)?;

        if !Self::is_approved(&env, &owner, &caller) {
            return Err(RegistryError::NotApproved);
        }

        let identity = Self::require_identity(&env, &owner)?;
        Ok(identity.view())
    }

    // ========== Admin Functions ==========

    /// Flip between `Active` and `Paused` (admin only). Returns the new state.
    pub fn toggle_contract_active(env: Env, caller: Address) -> Result<Lifecycle, RegistryError> {
        let current = lifecycle::load(&env)?;
        current.check_read()?;
        Self::require_admin(&env, &caller)?;

        let next = current.toggled()?;
        lifecycle::store(&env, next);

        log!(&env, "lifecycle toggled", next);
        emit_lifecycle_changed(&env, next);

        Ok(next)
    }

    /// Disable the registry for good (admin only).
    pub fn terminate_contract_permanently(env: Env, caller: Address) -> Result<(), RegistryError> {
        lifecycle::load(&env)?.check_read()?;
        Self::require_admin(&env, &caller)?;

        lifecycle::store(&env, Lifecycle::Terminated);

        log!(&env, "registry terminated", caller);
        emit_lifecycle_changed(&env, Lifecycle::Terminated);

        Ok(())
    }

    /// Hand control to `new_admin` (admin only). Both parties authorize.
    pub fn transfer_admin(env: Env, new_admin: Address, caller: Address) -> Result<(), RegistryError> {
        lifecycle::load(&env)?.check_read()?;
        Self::require_admin(&env, &caller)?;
        new_admin.require_auth();

        env.storage().instance().set(&RegistryKey::Admin, &new_admin);

        emit_admin_transferred(&env, &caller, &new_admin);
        Ok(())
    }

    /// Upgrade the contract WASM (admin only).
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), RegistryError> {
        lifecycle::load(&env)?.check_read()?;

        let admin: Address = env
            .storage()
            .instance()
            .get(&RegistryKey::Admin)
            .ok_or(RegistryError::NotInitialized)?;

        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    // ========== Internal Helpers ==========

    fn require_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&RegistryKey::Admin)
            .ok_or(RegistryError::NotInitialized)?;

        if *caller != admin {
            return Err(RegistryError::Unauthorized);
        }

        caller.require_auth();
        Ok(())
    }

    fn capacity(env: &Env) -> Result<u32, RegistryError> {
        env.storage()
            .instance()
            .get(&RegistryKey::RequestCapacity)
            .ok_or(RegistryError::NotInitialized)
    }

    fn load_identity(env: &Env, address: &Address) -> Option<Identity> {
        env.storage()
            .persistent()
            .get(&RegistryKey::Identity(address.clone()))
    }

    fn require_identity(env: &Env, address: &Address) -> Result<Identity, RegistryError> {
        Self::load_identity(env, address).ok_or(RegistryError::NotRegistered)
    }

    fn save_identity(env: &Env, address: &Address, identity: &Identity) {
        let key = RegistryKey::Identity(address.clone());
        env.storage().persistent().set(&key, identity);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND);
    }

    /// Checks shared by every two-party operation: distinct parties, both
    /// registered.
    fn require_pair(env: &Env, caller: &Address, other: &Address) -> Result<(), RegistryError> {
        if caller == other {
            return Err(RegistryError::SelfRequest);
        }
        Self::require_identity(env, caller)?;
        Self::require_identity(env, other)?;
        Ok(())
    }

    fn is_approved(env: &Env, owner: &Address, requester: &Address) -> bool {
        env.storage()
            .persistent()
            .get(&RegistryKey::Approval(owner.clone(), requester.clone()))
            .unwrap_or(false)
    }

    fn set_approval(env: &Env, owner: &Address, requester: &Address, approved: bool) {
        let key = RegistryKey::Approval(owner.clone(), requester.clone());

        if !approved {
            env.storage().persistent().remove(&key);
            return;
        }

        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND);
    }
}
