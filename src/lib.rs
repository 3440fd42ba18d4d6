//! Typed client for the repository endpoints of Github's v3 API
//! https://developer.github.com/v3/repos/

pub mod client;
mod commit;
mod common;
mod repo;
mod user;

pub use client::Client;
pub use commit::*;
pub use common::*;
pub use repo::*;
pub use user::*;
