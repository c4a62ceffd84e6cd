//! Access token issuing and verification for the freelancer matching platform.
//!
//! The platform's authentication layer hands this crate a [`Member`]
//! snapshot and gets back a signed, time-boxed token string. The request
//! filter hands back an arbitrary token string and gets the normalized
//! claims, or nothing.

mod claims;
mod config;
mod member;
mod service;
mod token;

pub use claims::{Claims, Role};
pub use config::AuthConfig;
pub use member::Member;
pub use service::{AccessTokenService, TokenPayload};
pub use token::{decode_token, encode_token};
