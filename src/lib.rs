//! Cartela Library
//!
//! This library provides core functionality for the Cartela application:
//! the card data model, the cartela layout catalog and resolver, the card
//! store with its persistence side effect, and the storage backends.

// Module declarations
pub mod catalog;
pub mod config;
pub mod constants;
pub mod models;
pub mod storage;
pub mod store;
pub mod tui;
