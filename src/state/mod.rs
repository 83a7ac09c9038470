//! Game state and its persistence

mod game_state;
pub mod store;

pub use game_state::{ATTEMPTS_KEY, GameState, STORE_NAMESPACE};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreBackend};
