//! Domain models with validation at construction
//!
//! All user input is validated before it reaches the store.
//! Invalid input returns ValidationError, not panic.

pub mod user;
pub mod validation;

pub use user::{CreateUserRequest, NewUser, UpdateUserRequest, User, UserChanges, UserResponse};
pub use validation::{is_valid_email, ValidationError};
