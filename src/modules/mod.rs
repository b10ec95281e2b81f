// Declare all modules
pub mod cancel;
pub mod cipher;
pub mod logging;

// No re-exports here as they're handled in lib.rs
