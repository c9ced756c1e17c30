//! Role aggregate
//!
//! A named permission category applied to users.

pub mod dto;
pub mod model;
pub mod repository;

pub use dto::{CreateRoleDto, UpdateRoleDto};
pub use model::Role;
pub use repository::RoleRepository;
