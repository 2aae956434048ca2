//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the search surface. Each one owns its
//! local state; nothing is shared through context.

pub mod disclosure;
pub mod header;
pub mod icons;
pub mod ingredient_tags;
pub mod search_card;
