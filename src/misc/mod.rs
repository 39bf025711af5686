//! Miscelanous items.

pub mod log;
