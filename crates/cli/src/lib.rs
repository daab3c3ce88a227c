//! Interactive console front-end for the vending machine.
//!
//! The menu loop is generic over its input/output streams; `main` wires it
//! to stdin/stdout, the tests drive it with scripted buffers.

pub mod menu;
pub mod prompt;
pub mod seed;
pub mod style;

pub use menu::{MainMenu, PurchaseRecord};
