//! Round state: target word and attempt counter

use super::store::KeyValueStore;
use crate::core::TargetWord;
use crate::error::StoreError;

/// Name of the store namespace holding game state
pub const STORE_NAMESPACE: &str = "gameState";

/// Key of the persisted attempt counter
pub const ATTEMPTS_KEY: &str = "attempts";

/// Current target word and attempt counter
///
/// Only the attempt counter is persisted; the target word lives for one round.
pub struct GameState<S: KeyValueStore> {
    store: S,
    target: Option<TargetWord>,
    attempts: u32,
}

impl<S: KeyValueStore> GameState<S> {
    pub const fn new(store: S) -> Self {
        Self {
            store,
            target: None,
            attempts: 0,
        }
    }

    /// Restore the attempt counter from the store
    ///
    /// An absent, negative or out-of-range value restores as 0.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read; the counter is left
    /// unchanged.
    pub fn load(&mut self) -> Result<u32, StoreError> {
        let stored = self.store.get_int(ATTEMPTS_KEY)?;
        self.attempts = stored.and_then(|n| u32::try_from(n).ok()).unwrap_or(0);
        Ok(self.attempts)
    }

    /// Persist 0 when `reset`, otherwise the current counter
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be written.
    pub fn save(&mut self, reset: bool) -> Result<(), StoreError> {
        let value = if reset { 0 } else { self.attempts };
        self.store.put_int(ATTEMPTS_KEY, i64::from(value))
    }

    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Count one evaluated guess, returning the new total
    pub const fn increment_attempts(&mut self) -> u32 {
        self.attempts += 1;
        self.attempts
    }

    pub const fn reset_attempts(&mut self) {
        self.attempts = 0;
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> Option<&TargetWord> {
        self.target.as_ref()
    }

    pub fn set_target(&mut self, word: TargetWord) {
        self.target = Some(word);
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
