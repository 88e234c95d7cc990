//! Infrastructure layer: concrete adapters for the domain ports plus the
//! DTOs used at the process boundary.

pub mod broadcast;
pub mod directory;
pub mod dto;
pub mod identity;
pub mod registry;
pub mod store;
