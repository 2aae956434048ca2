//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data with pure transitions. Components own it through
//! `RwSignal`s and replace it on write; nothing here touches the DOM.

pub mod disclosure;
pub mod query;
pub mod search;
