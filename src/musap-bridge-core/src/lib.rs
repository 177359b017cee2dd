//! # musap-bridge-core
//!
//! Exposes the MUSAP signing SDK's active SSCD enumeration to a cross-runtime
//! application layer.
//!
//! ## Architecture
//!
//! ```text
//! application layer
//!        │  {"method": "listSscds", "args": []}
//!        ▼
//! ┌──────────────────────┐
//! │   BridgeDispatcher   │  schema, argument checks, response envelope
//! └──────────────────────┘
//!        │
//!        ▼
//! ┌──────────────────────┐     ┌──────────────────────┐
//! │  SscdListingAdapter  │────▶│ DiagnosticGate/Sink  │  debug line, API ≥ 24
//! └──────────────────────┘     └──────────────────────┘
//!        │
//!        ▼
//!   SscdProvider::list_active_sscds()   (signing SDK)
//! ```
//!
//! ## Properties
//!
//! - **Pure relay**: the provider's sequence comes back in order, unfiltered
//! - **Stateless**: every call reaches the provider; nothing is cached
//! - **Explicit failure**: provider errors are returned, never turned into `[]`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::pedantic)] // Too strict for production code
#![allow(clippy::doc_markdown)] // Allow product names without backticks
#![allow(clippy::missing_errors_doc)] // Error documentation not required
#![allow(clippy::missing_panics_doc)] // Panic documentation not required
#![allow(clippy::module_name_repetitions)] // Allow Type in module::Type
#![allow(clippy::must_use_candidate)] // Not all functions need must_use

pub mod adapter;
pub mod config;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod schema;

pub use adapter::SscdListingAdapter;
pub use config::BridgeConfig;
pub use diagnostics::{DiagnosticGate, DiagnosticSink, TracingSink};
pub use dispatch::{BridgeDispatcher, BridgeRequest, BridgeResponse};
pub use error::{BridgeError, BridgeErrorCode};
pub use schema::{module_schema, ModuleSchema};
