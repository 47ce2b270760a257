//! Durable local storage layer.

pub mod local;

pub use local::LocalStorage;
