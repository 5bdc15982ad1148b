//! Cucumber acceptance suite for Coursegate
//!
//! Feature files live in `features/`; step definitions in
//! [`features::steps`].

pub mod features;
