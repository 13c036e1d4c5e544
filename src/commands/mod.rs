//! Command implementations
//!
//! Each command is a module with execute functions that take parsed CLI
//! args and run the operation against the store. Every mutation is followed
//! by a full re-list for display; nothing is patched in memory.

pub mod category;
pub mod product;
pub mod tag;
