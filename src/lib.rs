pub mod app;
pub mod defaults;
pub mod error;
pub mod exchange;
pub mod handler;
pub mod login;
pub mod profile;
pub mod resolve;
pub mod run;
pub mod sso;
pub mod token;

pub use error::{Error, Result};
