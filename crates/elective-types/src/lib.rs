#![allow(non_snake_case)]

pub mod auth;
pub mod elective;
pub mod route;

pub use auth::{AccessToken, AuthState, TokenError};
pub use elective::*;
pub use route::{
    resolve, AppRoute, ELECTIVES_PATH, ELECTIVES_SEGMENT, ELECTIVE_PARAM, LOGIN_SEGMENT, ROUTES,
};
