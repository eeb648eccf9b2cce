//! Service layer for application state.
//!
//! The palette store is the only write path for palette state; views read it
//! and call its mutation methods in response to user input.

pub mod palette_store;

// Re-export commonly used types
pub use palette_store::{PaletteStore, StoreEvent, StoreResult, SubscriptionId};
