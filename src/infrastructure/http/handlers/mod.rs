//! HTTP Handlers

mod game;
mod root;
mod secret;
mod user;

pub use game::*;
pub use root::*;
pub use secret::*;
pub use user::*;
