//! Event emission helpers for the identity registry.

use soroban_sdk::{Address, Env, String, Symbol};

use crate::lifecycle::Lifecycle;

/// Emit an event when an identity is registered.
pub fn emit_identity_created(env: &Env, address: &Address) {
    let topics = (Symbol::new(env, "identity_created"), address.clone());
    env.events().publish(topics, ());
}

/// Emit an event when an identity's name changes.
pub fn emit_name_updated(env: &Env, address: &Address, old: &String, new: &String) {
    let topics = (Symbol::new(env, "name_updated"), address.clone());
    env.events().publish(topics, (old.clone(), new.clone()));
}

/// Emit an event when an identity's image hash changes.
pub fn emit_image_updated(env: &Env, address: &Address, old: &String, new: &String) {
    let topics = (Symbol::new(env, "image_updated"), address.clone());
    env.events().publish(topics, (old.clone(), new.clone()));
}

/// Emit an event when a requester asks to see the requestee's identity.
pub fn emit_requesting_for_approval(env: &Env, requester: &Address, requestee: &Address) {
    let topics = (Symbol::new(env, "requesting_for_approval"), requester.clone());
    env.events().publish(topics, requestee.clone());
}

/// Emit an event when a requestee drops a pending request.
pub fn emit_remove_request_for_approval(env: &Env, requester: &Address, requestee: &Address) {
    let topics = (Symbol::new(env, "remove_request_for_approval"), requester.clone());
    env.events().publish(topics, requestee.clone());
}

pub fn emit_requester_approved(env: &Env, requester: &Address, requestee: &Address) {
    let topics = (Symbol::new(env, "requester_approved"), requester.clone());
    env.events().publish(topics, requestee.clone());
}

pub fn emit_requester_unapproved(env: &Env, requester: &Address, requestee: &Address) {
    let topics = (Symbol::new(env, "requester_unapproved"), requester.clone());
    env.events().publish(topics, requestee.clone());
}

/// Emit an event when the controller pauses, resumes or terminates the registry.
pub fn emit_lifecycle_changed(env: &Env, lifecycle: Lifecycle) {
    let topics = (Symbol::new(env, "lifecycle_changed"),);
    env.events().publish(topics, lifecycle);
}

/// Emit an event when control passes to a new admin.
pub fn emit_admin_transferred(env: &Env, old: &Address, new: &Address) {
    let topics = (Symbol::new(env, "admin_transferred"),);
    env.events().publish(topics, (old.clone(), new.clone()));
}
