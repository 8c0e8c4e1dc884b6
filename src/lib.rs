// src/lib.rs
// medassist - health assistant backend for watsonx.ai Granite models

pub mod config;
pub mod error;
pub mod formatter;
pub mod gateway;
pub mod prompt;
pub mod server;

pub use error::{GatewayError, PageError, Result};
