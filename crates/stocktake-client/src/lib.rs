/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public stocktake client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod session;
pub mod types;

// Re-export commonly used types from session
pub use session::{
    FileTokenStore,
    MemoryTokenStore,
    Session,
    SessionManager,
    StoreError,
    TokenRecord,
    TokenStore,
};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    NormalizedError,
    Result,
    StocktakeClient,
    StocktakeError,
};

// Re-export all types
pub use types::*;
