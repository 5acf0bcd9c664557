pub mod account;
mod error;
mod run;

pub use error::*;
