//! Bridge schema.
//!
//! Declares, independent of any runtime binding mechanism, which methods the
//! module exposes, what they take, and what shape they return. Bridge layers
//! generate their bindings from this.

use serde::{Deserialize, Serialize};

use crate::config::BridgeConfig;

/// Method listing the active SSCDs.
pub const LIST_SSCDS: &str = "listSscds";
/// Alias of [`LIST_SSCDS`] under the SDK's own name.
pub const LIST_ACTIVE_SSCDS: &str = "listActiveSscds";
/// Method listing the enabled SSCDs.
pub const LIST_ENABLED_SSCDS: &str = "listEnabledSscds";
/// Method returning one SSCD's info.
pub const GET_SSCD_INFO: &str = "getSscdInfo";
/// Method returning one SSCD's settings.
pub const GET_SETTINGS: &str = "getSettings";

/// JSON type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// JSON string.
    String,
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    #[serde(rename = "type")]
    pub param_type: ParamType,
}

/// Shape of a method's return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnShape {
    /// Array of the named record type.
    Array(String),
    /// Single record of the named type.
    Object(String),
    /// String-keyed map with values of the named type.
    Map(String),
}

/// One exposed method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name as called from the application layer.
    pub name: String,
    /// Parameters, in call order.
    pub params: Vec<ParamDescriptor>,
    /// Return shape.
    pub returns: ReturnShape,
    /// Whether the call blocks the calling thread until it returns.
    pub blocking: bool,
}

impl MethodDescriptor {
    fn blocking(name: &str, params: Vec<ParamDescriptor>, returns: ReturnShape) -> Self {
        Self {
            name: name.to_string(),
            params,
            returns,
            blocking: true,
        }
    }
}

/// The module's full interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSchema {
    /// Module name.
    pub module: String,
    /// Exposed methods.
    pub methods: Vec<MethodDescriptor>,
}

impl ModuleSchema {
    /// Look up a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }
}

fn sscd_id_param() -> Vec<ParamDescriptor> {
    vec![ParamDescriptor {
        name: "sscdId".into(),
        param_type: ParamType::String,
    }]
}

/// Build the schema for a module configured with `config`.
pub fn module_schema(config: &BridgeConfig) -> ModuleSchema {
    ModuleSchema {
        module: config.module_name.clone(),
        methods: vec![
            MethodDescriptor::blocking(LIST_SSCDS, vec![], ReturnShape::Array("Sscd".into())),
            MethodDescriptor::blocking(
                LIST_ENABLED_SSCDS,
                vec![],
                ReturnShape::Array("Sscd".into()),
            ),
            MethodDescriptor::blocking(
                GET_SSCD_INFO,
                sscd_id_param(),
                ReturnShape::Object("SscdInfo".into()),
            ),
            MethodDescriptor::blocking(
                GET_SETTINGS,
                sscd_id_param(),
                ReturnShape::Map("string".into()),
            ),
        ],
    }
}
