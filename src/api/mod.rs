//! API Layer
//!
//! Thin fetch wrappers around the Execute REST backend.

pub mod client;

pub use client::*;
