pub mod auth;

pub use auth::{use_auth_store, AuthProvider, AuthStore};
