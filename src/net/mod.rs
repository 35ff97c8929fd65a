//! Request execution and response assembly.

pub mod client;
pub mod hosts;
pub mod response;

pub use client::ApiClient;
pub use hosts::{DEFAULT_MONEY_API_URL, DefaultHostsProvider, HostsProvider, MONEY_API_SERVICE};
pub use response::{MethodResponse, assemble};
