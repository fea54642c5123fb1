//! Contract lifecycle: the emergency stop and permanent shutdown.

use soroban_sdk::{contracttype, Env};

use crate::storage::RegistryKey;
use crate::RegistryError;

/// Lifecycle state of the registry.
///
/// `Active` and `Paused` toggle back and forth; `Terminated` is final.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lifecycle {
    /// All operations accepted.
    Active,
    /// Emergency stop. Reads succeed, writes are rejected.
    Paused,
    /// Permanently disabled. Nothing is accepted.
    Terminated,
}

impl Lifecycle {
    /// Gate for read operations.
    pub fn check_read(self) -> Result<(), RegistryError> {
        match self {
            Lifecycle::Terminated => Err(RegistryError::ContractTerminated),
            _ => Ok(()),
        }
    }

    /// Gate for state-changing identity and request operations.
    pub fn check_write(self) -> Result<(), RegistryError> {
        match self {
            Lifecycle::Active => Ok(()),
            Lifecycle::Paused => Err(RegistryError::ContractPaused),
            Lifecycle::Terminated => Err(RegistryError::ContractTerminated),
        }
    }

    /// The state reached by toggling, or an error once terminated.
    pub fn toggled(self) -> Result<Lifecycle, RegistryError> {
        match self {
            Lifecycle::Active => Ok(Lifecycle::Paused),
            Lifecycle::Paused => Ok(Lifecycle::Active),
            Lifecycle::Terminated => Err(RegistryError::ContractTerminated),
        }
    }
}

/// Read the stored lifecycle. Fails if the contract was never initialized.
pub fn load(env: &Env) -> Result<Lifecycle, RegistryError> {
    env.storage()
        .instance()
        .get(&RegistryKey::Lifecycle)
        .ok_or(RegistryError::NotInitialized)
}

pub fn store(env: &Env, lifecycle: Lifecycle) {
    env.storage()
        .instance()
        .set(&RegistryKey::Lifecycle, &lifecycle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gates() {
        assert_eq!(Lifecycle::Active.check_read(), Ok(()));
        assert_eq!(Lifecycle::Active.check_write(), Ok(()));

        assert_eq!(Lifecycle::Paused.check_read(), Ok(()));
        assert_eq!(
            Lifecycle::Paused.check_write(),
            Err(RegistryError::ContractPaused)
        );

        assert_eq!(
            Lifecycle::Terminated.check_read(),
            Err(RegistryError::ContractTerminated)
        );
        assert_eq!(
            Lifecycle::Terminated.check_write(),
            Err(RegistryError::ContractTerminated)
        );
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Lifecycle::Active.toggled(), Ok(Lifecycle::Paused));
        assert_eq!(Lifecycle::Paused.toggled(), Ok(Lifecycle::Active));
        assert_eq!(
            Lifecycle::Terminated.toggled(),
            Err(RegistryError::ContractTerminated)
        );
    }
}
