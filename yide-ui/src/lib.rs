//! Dioxus components for the Yide top bar.
//!
//! This crate provides:
//! - `state`: reactive `FormState` with Dioxus Signals
//! - `components`: the quick-search bar, share-a-ride dialog and their inputs

pub mod components;
pub mod state;
