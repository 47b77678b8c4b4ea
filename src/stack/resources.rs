use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::defs::{Architecture, LogRetention, PermissionStatement, RemovalPolicy};

/// Function declaration handed to the provisioning engine
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResource {
    /// handler is the code entry point of the function
    pub handler: String,

    /// runtime of the function, e.g. python3.12
    pub runtime: String,

    pub architecture: Architecture,

    /// timeout in the engine's duration notation, e.g. "30 seconds"
    pub timeout: String,

    /// memory in the engine's size notation, e.g. "1024 MB"
    pub memory: String,

    pub url: FunctionUrl,

    pub logging: FunctionLogging,

    pub environment: BTreeMap<String, String>,

    pub permissions: Vec<PermissionStatement>,
}

/// Public URL attached to the function
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct FunctionUrl {
    pub cors: FunctionUrlCors,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FunctionUrlCors {
    pub allow_methods: Vec<String>,

    pub allow_headers: Vec<String>,

    pub allow_origins: Vec<String>,

    pub max_age: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FunctionLogging {
    pub retention: LogRetention,

    pub format: LogFormat,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub enum LogFormat {
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "text")]
    Text,
}

/// The full set of declarations for the stack
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StackResources {
    /// functionName is the physical name of the deployed function
    pub function_name: String,

    /// removal decides what happens to resources on stack teardown
    pub removal: RemovalPolicy,

    pub function: FunctionResource,
}
