//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page composes layout and delegates rendering details to
//! `components`.

pub mod home;
