//! Concrete implementations of the ports.

pub mod http_api;
pub mod json_store;
pub mod memory_store;

pub use http_api::HttpVerificationApi;
pub use json_store::JsonFileHistoryStore;
pub use memory_store::InMemoryHistoryStore;
