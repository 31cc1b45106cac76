//! Core value types for the TinyUid short-identifier generator.
//!
//! This crate provides the shared character dictionary and the [`Uid`]
//! value type used by the generator crate.

pub mod alphabet;
pub mod uid;

pub use uid::Uid;
