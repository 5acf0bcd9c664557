//! Azure Resource Manager access with a service principal.
//!
//! - [`auth`] - client-credentials token acquisition
//! - [`client`] - the subscription endpoints
//! - [`cloud`] - login and management hosts per Azure cloud

mod auth;
mod client;
mod cloud;
mod error;
mod subscription;

pub use auth::Authorizer;
pub use client::ArmClient;
pub use cloud::{Cloud, CloudEndpoints};
pub use error::*;
pub use subscription::Subscription;
