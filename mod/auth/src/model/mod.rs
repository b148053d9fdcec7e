//! Data structures for authentication entities: users, principals,
//! JWT claims, refresh-token records, and the session request/response
//! bodies.

mod principal;
mod token;
mod user;

pub use principal::{Authorities, Principal};
pub use token::{Claims, LoginRequest, RefreshTokenRecord, RefreshTokenRequest, SessionTokens};
pub use user::{CreateUser, User};
