//! Pending approval requests held against an identity.
//!
//! Each owner has an ordered queue of requesters, bounded by the
//! contract-wide capacity. Removal shifts later entries left so the
//! remaining requests keep their arrival order. A full queue rejects new
//! requests; nothing is ever evicted implicitly.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::storage::{RegistryKey, TTL_EXTEND, TTL_THRESHOLD};

/// Upper bound on the configurable queue capacity.
pub const MAX_REQUEST_CAPACITY: u32 = 32;

/// Capacity used when `init` is not given one.
pub const DEFAULT_REQUEST_CAPACITY: u32 = 10;

/// Snapshot of an owner's queue as returned to readers.
///
/// `slots` always has `capacity` entries: occupied slots first, in arrival
/// order, followed by `None` for every free slot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalRequests {
    pub slots: Vec<Option<Address>>,
    pub count: u32,
}

/// In-memory working copy of one owner's queue.
pub struct PendingRequests {
    owner: Address,
    requesters: Vec<Address>,
    capacity: u32,
}

impl PendingRequests {
    /// An empty queue for `owner`.
    pub fn new(env: &Env, owner: Address, capacity: u32) -> Self {
        Self {
            owner,
            requesters: Vec::new(env),
            capacity,
        }
    }

    /// Load the stored queue for `owner`, empty if none was written.
    pub fn load(env: &Env, owner: &Address, capacity: u32) -> Self {
        match env
            .storage()
            .persistent()
            .get(&RegistryKey::Requests(owner.clone()))
        {
            Some(requesters) => Self {
                owner: owner.clone(),
                requesters,
                capacity,
            },
            None => Self::new(env, owner.clone(), capacity),
        }
    }

    pub fn len(&self) -> u32 {
        self.requesters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requesters.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.requesters.len() >= self.capacity
    }

    pub fn contains(&self, requester: &Address) -> bool {
        self.requesters.contains(requester)
    }

    /// Append a requester. Returns false if the queue is full or the
    /// requester is already queued.
    pub fn push(&mut self, requester: Address) -> bool {
        if self.is_full() || self.contains(&requester) {
            return false;
        }
        self.requesters.push_back(requester);
        true
    }

    /// Remove a requester, shifting later entries left.
    ///
    /// Returns false if the requester was not queued.
    pub fn remove(&mut self, requester: &Address) -> bool {
        match self.requesters.first_index_of(requester) {
            Some(index) => {
                self.requesters.remove(index);
                true
            }
            None => false,
        }
    }

    /// Persist the queue. An empty queue drops its storage entry.
    pub fn save(&self, env: &Env) {
        let key = RegistryKey::Requests(self.owner.clone());

        if self.is_empty() {
            env.storage().persistent().remove(&key);
            return;
        }

        env.storage().persistent().set(&key, &self.requesters);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND);
    }

    /// Fixed-size view padded with `None` up to capacity.
    pub fn view(&self, env: &Env) -> ApprovalRequests {
        let mut slots = Vec::new(env);
        for requester in self.requesters.iter() {
            slots.push_back(Some(requester));
        }
        for _ in self.requesters.len()..self.capacity {
            slots.push_back(None);
        }

        ApprovalRequests {
            slots,
            count: self.requesters.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IdentityRegistryContract;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_push_respects_capacity_and_duplicates() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        let c = Address::generate(&env);

        let mut queue = PendingRequests::new(&env, owner, 2);
        assert!(queue.push(a.clone()));
        assert!(!queue.push(a.clone()));
        assert!(queue.push(b));
        assert!(queue.is_full());
        assert!(!queue.push(c));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_remove_preserves_order() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        let c = Address::generate(&env);
        let d = Address::generate(&env);

        let mut queue = PendingRequests::new(&env, owner, 5);
        queue.push(a.clone());
        queue.push(b.clone());
        queue.push(c.clone());
        queue.push(d.clone());

        assert!(queue.remove(&a));
        assert!(!queue.remove(&a));

        let view = queue.view(&env);
        assert_eq!(view.count, 3);
        assert_eq!(view.slots.len(), 5);
        assert_eq!(view.slots.get(0).unwrap(), Some(b));
        assert_eq!(view.slots.get(1).unwrap(), Some(c));
        assert_eq!(view.slots.get(2).unwrap(), Some(d));
        assert_eq!(view.slots.get(3).unwrap(), None);
        assert_eq!(view.slots.get(4).unwrap(), None);
    }

    #[test]
    fn test_save_and_load() {
        let env = Env::default();
        let contract_id = env.register(IdentityRegistryContract, ());
        let owner = Address::generate(&env);
        let a = Address::generate(&env);

        env.as_contract(&contract_id, || {
            let mut queue = PendingRequests::load(&env, &owner, 5);
            assert!(queue.is_empty());
            queue.push(a.clone());
            queue.save(&env);

            let mut reloaded = PendingRequests::load(&env, &owner, 5);
            assert!(reloaded.contains(&a));

            reloaded.remove(&a);
            reloaded.save(&env);
            assert!(!env
                .storage()
                .persistent()
                .has(&RegistryKey::Requests(owner.clone())));
        });
    }
}
