use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error as ThisError;

use crate::consts::PRODUCTION_STAGE;

/// A named deployment environment, e.g. "dev" or "production"
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(transparent)]
pub struct Stage(String);

#[derive(ThisError, Debug)]
pub enum ParseStageError {
    #[error("Stage must not be empty")]
    Empty,
}

impl FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseStageError::Empty);
        }

        Ok(Stage(s.to_string()))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Stage {
    pub fn is_production(&self) -> bool {
        self.0 == PRODUCTION_STAGE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Inputs that parameterize a single function deployment
#[derive(Debug, PartialEq, Clone)]
pub struct StackContext {
    /// app is the name of the application the stack belongs to
    pub app: String,

    /// stage is the deployment environment identifier
    pub stage: Stage,
}

/// The resolved descriptor for a single function deployment.
/// Every derived field is a pure function of the stage; the record is
/// never mutated after construction.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    /// app is the name of the application the function belongs to
    pub app: String,

    /// stage is the deployment environment identifier
    pub stage: Stage,

    /// runtimeVersion is the target language runtime of the function
    pub runtime_version: String,

    /// architecture of the underlying compute
    pub architecture: Architecture,

    pub timeout_seconds: u32,

    pub memory_mb: u32,

    /// logLevel for the function runtime and its powertools logger
    pub log_level: LogLevel,

    /// logRetention for the function's log group
    pub log_retention: LogRetention,

    /// removalPolicy decides whether resources survive a stack teardown
    pub removal_policy: RemovalPolicy,

    /// allowedOrigins for the function URL
    pub allowed_origins: Vec<String>,

    /// permissions granted to the function role, in declaration order
    pub permissions: Vec<PermissionStatement>,

    /// environment variables propagated to the function runtime
    pub environment: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub enum Architecture {
    #[serde(rename = "x86_64")]
    X86_64,
    #[serde(rename = "arm64")]
    Arm64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub enum LogLevel {
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "DEBUG")]
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub enum LogRetention {
    #[serde(rename = "1 week")]
    OneWeek,
    #[serde(rename = "1 month")]
    OneMonth,
}

impl fmt::Display for LogRetention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogRetention::OneWeek => write!(f, "1 week"),
            LogRetention::OneMonth => write!(f, "1 month"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub enum RemovalPolicy {
    #[serde(rename = "retain")]
    Retain,
    #[serde(rename = "remove")]
    Remove,
}

/// A single allow statement granted to the function role
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PermissionStatement {
    /// actions the statement allows
    pub actions: Vec<String>,

    /// resources the statement applies to
    pub resources: Vec<String>,
}
