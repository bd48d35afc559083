//! Terminal mockup of a food-delivery checkout screen.
//!
//! The core is deliberately small: a cart of line items with a pure
//! quantity updater, a derived total, and a reversible share-link encoding.
//! The `ui` module renders it with ratatui and wires user input through
//! MVI reducers.

pub mod cart;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod share;
pub mod ui;
