// Common types shared between the auth layer and the API client
pub mod common;

// Client library (public API for the app core)
mod client;
mod error;

pub use client::{
    login_with_kakao, logout, restore_session, AuthClient, SessionEvent, SessionEvents, Settings,
    TokenStore,
};
pub use common::TokenPair;
pub use error::AuthError;
