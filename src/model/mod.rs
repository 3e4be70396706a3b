//! Pure data structures (DTOs). [`User`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod technology;
pub mod timestamp;
pub mod user;

pub use technology::*;
pub use timestamp::Deadline;
pub use user::*;
