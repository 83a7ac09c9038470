//! Persisted state inspection and reset

use crate::state::{GameState, KeyValueStore};

/// Snapshot of the persisted game state
#[derive(Debug)]
pub struct StatusReport {
    pub attempts: u32,
    pub location: String,
}

/// Read the persisted attempt count
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn read_status<S: KeyValueStore>(
    state: &mut GameState<S>,
    location: String,
) -> Result<StatusReport, String> {
    let attempts = state.load().map_err(|e| e.to_string())?;
    Ok(StatusReport { attempts, location })
}

/// Reset the persisted attempt count to 0
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn reset_attempts<S: KeyValueStore>(state: &mut GameState<S>) -> Result<(), String> {
    state.reset_attempts();
    state.save(true).map_err(|e| e.to_string())?;
    log::info!("persisted attempts reset");
    Ok(())
}
