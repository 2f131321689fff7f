//! Domain layer for Roast Central
//!
//! Contains the roast value objects, entities, and domain errors.
//! Every value here is transient: nothing is persisted or shared between requests.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
