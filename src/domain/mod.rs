//! Domain layer containing the school entities and data-access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (users, students, courses)
//! - [`repositories`] - Data access trait definitions and [`repositories::StoreError`]
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Operations on the entities live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
