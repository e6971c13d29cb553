//! Reactive application state

pub mod notice;
pub mod wallet;
