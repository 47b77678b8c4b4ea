use super::defs::{
    Architecture, DeploymentConfig, LogLevel, LogRetention, PermissionStatement, RemovalPolicy,
    Stage, StackContext,
};
use super::resources::{
    FunctionLogging, FunctionResource, FunctionUrl, FunctionUrlCors, LogFormat, StackResources,
};
use crate::consts::{
    AI_TIMEOUT_ENV_VAR, AI_TIMEOUT_SECONDS, BEDROCK_MODEL_ID_ENV_VAR, DEFAULT_BEDROCK_MODEL_ARN,
    DEFAULT_BEDROCK_MODEL_ID, FALLBACK_BEDROCK_MODEL_ARN, FUNCTION_HANDLER, FUNCTION_LOGICAL_NAME,
    FUNCTION_RUNTIME, LOG_GROUP_ARN_PREFIX, LOG_LEVEL_ENV_VAR, POWERTOOLS_LOG_LEVEL_ENV_VAR,
    POWERTOOLS_SERVICE_NAME_ENV_VAR, PRODUCTION_ALLOWED_ORIGIN, STAGE_ENV_VAR, WILDCARD_ORIGIN,
};
use crate::util::remove_trailing_slash;
use convert_case::{Case, Casing};
use std::collections::BTreeMap;

impl StackContext {
    pub fn new(app: String, stage: Stage) -> Self {
        Self { app, stage }
    }

    /// Resolves the deployment descriptor for this stack
    pub fn resolve(&self) -> DeploymentConfig {
        DeploymentConfig::from(self)
    }

    fn to_function_name(&self) -> String {
        format!("{}-{}-{}", self.app, self.stage, FUNCTION_LOGICAL_NAME)
    }

    fn to_service_name(&self) -> String {
        FUNCTION_LOGICAL_NAME.to_case(Case::Kebab)
    }

    fn to_log_group_arn(&self) -> String {
        format!("{}{}*", LOG_GROUP_ARN_PREFIX, self.to_function_name())
    }

    fn to_timeout_seconds(&self) -> u32 {
        if self.stage.is_production() {
            30
        } else {
            15
        }
    }

    fn to_memory_mb(&self) -> u32 {
        if self.stage.is_production() {
            1024
        } else {
            512
        }
    }

    fn to_log_level(&self) -> LogLevel {
        if self.stage.is_production() {
            LogLevel::Info
        } else {
            LogLevel::Debug
        }
    }

    fn to_log_retention(&self) -> LogRetention {
        if self.stage.is_production() {
            LogRetention::OneMonth
        } else {
            LogRetention::OneWeek
        }
    }

    fn to_removal_policy(&self) -> RemovalPolicy {
        if self.stage.is_production() {
            RemovalPolicy::Retain
        } else {
            RemovalPolicy::Remove
        }
    }

    fn to_allowed_origins(&self) -> Vec<String> {
        if self.stage.is_production() {
            vec![remove_trailing_slash(PRODUCTION_ALLOWED_ORIGIN)]
        } else {
            vec![String::from(WILDCARD_ORIGIN)]
        }
    }

    fn to_permissions(&self) -> Vec<PermissionStatement> {
        vec![
            PermissionStatement {
                actions: vec![
                    String::from("bedrock:InvokeModel"),
                    String::from("bedrock:InvokeModelWithResponseStream"),
                ],
                resources: vec![
                    String::from(DEFAULT_BEDROCK_MODEL_ARN),
                    String::from(FALLBACK_BEDROCK_MODEL_ARN),
                ],
            },
            PermissionStatement {
                actions: vec![
                    String::from("logs:CreateLogGroup"),
                    String::from("logs:CreateLogStream"),
                    String::from("logs:PutLogEvents"),
                ],
                resources: vec![self.to_log_group_arn()],
            },
        ]
    }

    fn to_environment(&self) -> BTreeMap<String, String> {
        let log_level = self.to_log_level();

        [
            (STAGE_ENV_VAR, self.stage.to_string()),
            (LOG_LEVEL_ENV_VAR, log_level.to_string()),
            (POWERTOOLS_SERVICE_NAME_ENV_VAR, self.to_service_name()),
            (POWERTOOLS_LOG_LEVEL_ENV_VAR, log_level.to_string()),
            (
                BEDROCK_MODEL_ID_ENV_VAR,
                String::from(DEFAULT_BEDROCK_MODEL_ID),
            ),
            (AI_TIMEOUT_ENV_VAR, String::from(AI_TIMEOUT_SECONDS)),
        ]
        .into_iter()
        .map(|(key, value)| (String::from(key), value))
        .collect()
    }
}

/// Derive a fresh descriptor. Unrecognized stages take the
/// non-production branch.
impl From<&StackContext> for DeploymentConfig {
    fn from(value: &StackContext) -> Self {
        DeploymentConfig {
            app: value.app.clone(),
            stage: value.stage.clone(),
            runtime_version: String::from(FUNCTION_RUNTIME),
            architecture: Architecture::Arm64,
            timeout_seconds: value.to_timeout_seconds(),
            memory_mb: value.to_memory_mb(),
            log_level: value.to_log_level(),
            log_retention: value.to_log_retention(),
            removal_policy: value.to_removal_policy(),
            allowed_origins: value.to_allowed_origins(),
            permissions: value.to_permissions(),
            environment: value.to_environment(),
        }
    }
}

impl DeploymentConfig {
    fn to_function_name(&self) -> String {
        format!("{}-{}-{}", self.app, self.stage, FUNCTION_LOGICAL_NAME)
    }

    fn to_timeout(&self) -> String {
        format!("{} seconds", self.timeout_seconds)
    }

    fn to_memory(&self) -> String {
        format!("{} MB", self.memory_mb)
    }

    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl From<&DeploymentConfig> for FunctionUrlCors {
    fn from(value: &DeploymentConfig) -> Self {
        FunctionUrlCors {
            allow_methods: vec![String::from("GET"), String::from("POST")],
            allow_headers: vec![String::from("Content-Type")],
            allow_origins: value.allowed_origins.clone(),
            max_age: String::from("1 day"),
        }
    }
}

impl From<&DeploymentConfig> for FunctionUrl {
    fn from(value: &DeploymentConfig) -> Self {
        FunctionUrl {
            cors: FunctionUrlCors::from(value),
        }
    }
}

impl From<&DeploymentConfig> for FunctionLogging {
    fn from(value: &DeploymentConfig) -> Self {
        FunctionLogging {
            retention: value.log_retention.clone(),
            format: LogFormat::Json,
        }
    }
}

/// Generate a fresh function declaration
impl From<&DeploymentConfig> for FunctionResource {
    fn from(value: &DeploymentConfig) -> Self {
        FunctionResource {
            handler: String::from(FUNCTION_HANDLER),
            runtime: value.runtime_version.clone(),
            architecture: value.architecture.clone(),
            timeout: value.to_timeout(),
            memory: value.to_memory(),
            url: FunctionUrl::from(value),
            logging: FunctionLogging::from(value),
            environment: value.environment.clone(),
            permissions: value.permissions.clone(),
        }
    }
}

/// Generate the full set of stack declarations
impl From<&DeploymentConfig> for StackResources {
    fn from(value: &DeploymentConfig) -> Self {
        StackResources {
            function_name: value.to_function_name(),
            removal: value.removal_policy.clone(),
            function: FunctionResource::from(value),
        }
    }
}

impl StackResources {
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_APP_NAME;

    fn context(stage: &str) -> StackContext {
        StackContext::new(
            String::from(DEFAULT_APP_NAME),
            stage.parse().expect("stage should parse"),
        )
    }

    #[test]
    fn dev_stage_takes_the_non_production_branch() {
        let config = context("dev").resolve();

        assert_eq!(config.timeout_seconds, 15);
        assert_eq!(config.memory_mb, 512);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_retention, LogRetention::OneWeek);
        assert_eq!(config.removal_policy, RemovalPolicy::Remove);
        assert_eq!(config.allowed_origins, vec![String::from("*")]);
    }

    #[test]
    fn production_stage_takes_the_production_branch() {
        let config = context("production").resolve();

        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.memory_mb, 1024);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.log_retention, LogRetention::OneMonth);
        assert_eq!(config.removal_policy, RemovalPolicy::Retain);
        assert_eq!(
            config.allowed_origins,
            vec![String::from("https://yourdomain.com")]
        );
    }

    #[test]
    fn unrecognized_stages_resolve_like_dev() {
        let dev = context("dev").resolve();

        for stage in ["staging", "test", "qa-17", "Production"] {
            let config = context(stage).resolve();

            assert_eq!(config.timeout_seconds, dev.timeout_seconds);
            assert_eq!(config.memory_mb, dev.memory_mb);
            assert_eq!(config.log_level, dev.log_level);
            assert_eq!(config.log_retention, dev.log_retention);
            assert_eq!(config.allowed_origins, dev.allowed_origins);
        }
    }

    #[test]
    fn resolve_is_idempotent() {
        let context = context("staging");

        assert_eq!(context.resolve(), context.resolve());
    }

    #[test]
    fn log_group_resource_carries_the_stage() {
        let config = context("staging").resolve();

        let log_statement = &config.permissions[1];
        assert_eq!(
            log_statement.resources,
            vec![String::from(
                "arn:aws:logs:*:*:log-group:/aws/lambda/my-python-app-staging-ApiFunction*"
            )]
        );
        assert!(log_statement.resources[0].contains("staging"));
    }

    #[test]
    fn model_invocation_is_granted_on_both_foundation_models() {
        let config = context("dev").resolve();

        let model_statement = &config.permissions[0];
        assert!(model_statement
            .actions
            .contains(&String::from("bedrock:InvokeModel")));
        assert_eq!(
            model_statement.resources,
            vec![
                String::from("arn:aws:bedrock:*::foundation-model/amazon.nova-lite-v1:0"),
                String::from("arn:aws:bedrock:*::foundation-model/amazon.nova-micro-v1:0"),
            ]
        );
    }

    #[test]
    fn permissions_do_not_depend_on_the_stage_branch() {
        let dev = context("dev").resolve();
        let production = context("production").resolve();

        assert_eq!(dev.permissions[0], production.permissions[0]);
        assert_eq!(dev.permissions.len(), production.permissions.len());
    }

    #[test]
    fn environment_carries_the_fixed_keys() {
        let config = context("dev").resolve();

        let keys: Vec<&str> = config.environment.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "AI_TIMEOUT",
                "BEDROCK_MODEL_ID",
                "LOG_LEVEL",
                "POWERTOOLS_LOG_LEVEL",
                "POWERTOOLS_SERVICE_NAME",
                "STAGE",
            ]
        );

        assert_eq!(config.environment["STAGE"], "dev");
        assert_eq!(config.environment["LOG_LEVEL"], "DEBUG");
        assert_eq!(config.environment["POWERTOOLS_LOG_LEVEL"], "DEBUG");
        assert_eq!(config.environment["POWERTOOLS_SERVICE_NAME"], "api-function");
        assert_eq!(config.environment["BEDROCK_MODEL_ID"], "amazon.nova-lite-v1:0");
        assert_eq!(config.environment["AI_TIMEOUT"], "30");
    }

    #[test]
    fn production_environment_logs_at_info() {
        let config = context("production").resolve();

        assert_eq!(config.environment["LOG_LEVEL"], "INFO");
        assert_eq!(config.environment["POWERTOOLS_LOG_LEVEL"], "INFO");
    }

    #[test]
    fn function_resource_renders_engine_notation() {
        let config = context("production").resolve();

        let function = FunctionResource::from(&config);
        assert_eq!(function.timeout, "30 seconds");
        assert_eq!(function.memory, "1024 MB");
        assert_eq!(function.runtime, "python3.12");
        assert_eq!(function.handler, "functions/src/functions/api.handler");
        assert_eq!(function.logging.format, LogFormat::Json);
        assert_eq!(function.url.cors.allow_origins, config.allowed_origins);
    }

    #[test]
    fn stack_resources_name_the_function_after_app_and_stage() {
        let config = context("production").resolve();

        let resources = StackResources::from(&config);
        assert_eq!(
            resources.function_name,
            "my-python-app-production-ApiFunction"
        );
        assert_eq!(resources.removal, RemovalPolicy::Retain);
    }

    #[test]
    fn descriptor_serializes_to_yaml() {
        let yaml = context("dev")
            .resolve()
            .to_yaml_string()
            .expect("descriptor should serialize");

        assert!(yaml.contains("timeoutSeconds: 15"));
        assert!(yaml.contains("memoryMb: 512"));
        assert!(yaml.contains("logRetention: 1 week"));
    }
}
