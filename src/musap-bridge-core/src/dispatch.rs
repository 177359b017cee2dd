//! JSON bridge dispatch.
//!
//! Turns a method call from the application layer into an adapter call and
//! the outcome into a response envelope. Success and failure are separate
//! variants, so an empty list can never be mistaken for a failed enumeration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, trace, warn};

use crate::adapter::SscdListingAdapter;
use crate::error::{BridgeError, BridgeErrorCode};
use crate::schema::{
    module_schema, ModuleSchema, GET_SETTINGS, GET_SSCD_INFO, LIST_ACTIVE_SSCDS,
    LIST_ENABLED_SSCDS, LIST_SSCDS,
};

/// A method call from the application layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeRequest {
    /// Method name.
    pub method: String,
    /// Positional arguments.
    #[serde(default)]
    pub args: Vec<Value>,
}

impl BridgeRequest {
    /// A call without arguments.
    #[must_use]
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }
}

/// Outcome of a method call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BridgeResponse {
    /// The call returned a value.
    Ok {
        /// Returned value.
        value: Value,
    },
    /// The call failed.
    Error {
        /// Error code.
        code: BridgeErrorCode,
        /// Human readable description.
        message: String,
    },
}

impl BridgeResponse {
    /// Whether this is a success.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

impl From<Result<Value, BridgeError>> for BridgeResponse {
    fn from(result: Result<Value, BridgeError>) -> Self {
        match result {
            Ok(value) => Self::Ok { value },
            Err(e) => Self::Error {
                code: e.code(),
                message: e.to_string(),
            },
        }
    }
}

/// Routes bridge calls to an [`SscdListingAdapter`].
pub struct BridgeDispatcher {
    adapter: SscdListingAdapter,
    schema: ModuleSchema,
}

impl BridgeDispatcher {
    /// Create a dispatcher over `adapter`.
    pub fn new(adapter: SscdListingAdapter) -> Self {
        let schema = module_schema(adapter.config());
        Self { adapter, schema }
    }

    /// The adapter calls are routed to.
    pub fn adapter(&self) -> &SscdListingAdapter {
        &self.adapter
    }

    /// The schema of the exposed methods.
    pub fn schema(&self) -> &ModuleSchema {
        &self.schema
    }

    /// Execute a call and wrap the outcome.
    pub fn dispatch(&self, request: &BridgeRequest) -> BridgeResponse {
        trace!(method = %request.method, args = request.args.len(), "dispatch");
        let result = self.call(request);
        if let Err(e) = &result {
            match e {
                BridgeError::Provider(_) => {
                    error!(method = %request.method, "Provider call failed: {}", e)
                }
                _ => warn!(method = %request.method, "Call rejected: {}", e),
            }
        }
        result.into()
    }

    /// Decode a JSON request, execute it, and encode the response.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Serialization`] if the request is not valid
    /// JSON for a [`BridgeRequest`] or the response cannot be encoded.
    pub fn dispatch_json(&self, request: &[u8]) -> Result<Vec<u8>, BridgeError> {
        let request: BridgeRequest = serde_json::from_slice(request)?;
        Ok(serde_json::to_vec(&self.dispatch(&request))?)
    }

    /// Execute a call.
    ///
    /// # Errors
    ///
    /// Returns the adapter's error, or a dispatch error for unknown methods
    /// and mismatched arguments.
    pub fn call(&self, request: &BridgeRequest) -> Result<Value, BridgeError> {
        let method = request.method.as_str();
        match method {
            LIST_SSCDS | LIST_ACTIVE_SSCDS => {
                expect_arity(method, &request.args, 0)?;
                Ok(serde_json::to_value(self.adapter.list_sscds()?)?)
            }
            LIST_ENABLED_SSCDS => {
                expect_arity(method, &request.args, 0)?;
                Ok(serde_json::to_value(self.adapter.list_enabled_sscds()?)?)
            }
            GET_SSCD_INFO => {
                let sscd_id = sscd_id_arg(method, &request.args)?;
                Ok(serde_json::to_value(self.adapter.get_sscd_info(sscd_id)?)?)
            }
            GET_SETTINGS => {
                let sscd_id = sscd_id_arg(method, &request.args)?;
                Ok(serde_json::to_value(self.adapter.get_settings(sscd_id)?)?)
            }
            _ => Err(BridgeError::UnknownMethod {
                method: method.to_string(),
            }),
        }
    }
}

fn expect_arity(method: &str, args: &[Value], expected: usize) -> Result<(), BridgeError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(BridgeError::invalid_arguments(
            method,
            format!("expected {} argument(s), got {}", expected, args.len()),
        ))
    }
}

fn sscd_id_arg<'a>(method: &str, args: &'a [Value]) -> Result<&'a str, BridgeError> {
    expect_arity(method, args, 1)?;
    args[0]
        .as_str()
        .ok_or_else(|| BridgeError::invalid_arguments(method, "sscdId must be a string"))
}
