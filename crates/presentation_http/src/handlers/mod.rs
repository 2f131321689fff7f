//! HTTP request handlers

pub mod health;
pub mod roast;
pub mod social;
pub mod voice;
