//! Money API Client: typed access to a payment-processing HTTP API
//!
//! The crate builds and validates outgoing requests, sends them through a
//! pluggable transport, and decodes JSON responses into typed domain entities,
//! including polymorphic ones such as fee schedules and money sources.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   build()    ┌──────────────┐
//! │ Request builders │─────────────▶│  ApiRequest  │  validated, immutable
//! │   (methods::*)   │              └──────┬───────┘
//! └──────────────────┘                     │ ApiClient::execute
//!                                          ▼
//! ┌──────────────────┐  base URL   ┌──────────────┐  raw bytes  ┌──────────────┐
//! │  HostsProvider   │────────────▶│  Transport   │────────────▶│  assemble()  │
//! └──────────────────┘             └──────────────┘             └──────┬───────┘
//!                                                                      │ Registry
//!                                                                      ▼
//!                                                               typed response
//! ```
//!
//! - [`codec`]: scalar readers and the process-wide type-adapter registry
//! - [`model`]: domain entities (money amounts, balances, cards, fees, operations)
//! - [`methods`]: request builders and their response types
//! - [`net`]: request execution, host resolution and response assembly
//! - [`process`]: multi-step operations with cancellable steps
//! - [`transport`]: the transport contract and its reqwest implementation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use money_api_client::{
//!     config::ClientConfig,
//!     methods::operation_history::{FilterType, OperationHistoryRequest},
//!     net::{ApiClient, MethodResponse},
//! };
//!
//! # async fn example() -> money_api_client::Result<()> {
//! let client = ApiClient::from_config(&ClientConfig::from_file("money-api.toml")?)?;
//!
//! let request = OperationHistoryRequest::builder()
//!     .filter_type(FilterType::Payment)
//!     .records(20)
//!     .build()?;
//! let history = client.execute(&request).await?;
//!
//! if !history.is_success() {
//!     eprintln!("server refused: {:?}", history.error);
//! }
//! for operation in &history.operations {
//!     println!("{:?} {:?}", operation.title, operation.amount);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Validation and decode failures are returned as [`Error`]. A server-reported
//! failure is part of a successfully decoded response and must be checked with
//! [`MethodResponse::is_success`](net::MethodResponse::is_success).
//!
//! ```rust
//! use money_api_client::{Error, methods::instance_id::InstanceIdRequest};
//!
//! match InstanceIdRequest::new("") {
//!     Err(Error::Validation(msg)) => assert!(msg.contains("client_id")),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! # Logging
//!
//! Request execution, HTTP submission and process steps emit `tracing` events.
//! Parameter values are never logged. The library installs no subscriber.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![allow(
    clippy::multiple_crate_versions,
    reason = "transitive dependencies from reqwest"
)]

pub mod codec;
pub mod config;
pub mod error;
pub mod methods;
pub mod model;
pub mod net;
pub mod process;
pub mod transport;

pub use config::ClientConfig;
pub use error::{Error, Result};
pub use net::ApiClient;
pub use process::{Process, ProcessState};
