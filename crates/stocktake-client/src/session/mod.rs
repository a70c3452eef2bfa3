/*
[INPUT]:  Persisted tokens and validation outcomes
[OUTPUT]: Authentication state, transitions, and token persistence
[POS]:    Session layer - handles the sign-in lifecycle
[UPDATE]: When session states or persistence strategy change
*/

pub mod manager;
pub mod state;
pub mod store;

pub use manager::SessionManager;
pub use state::Session;
pub use store::{FileTokenStore, MemoryTokenStore, StoreError, TokenRecord, TokenStore};
