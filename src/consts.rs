use const_format::concatcp;

pub const STAGE_ENV_VAR: &str = "STAGE";
pub const DEFAULT_STAGE: &str = "dev";
pub const PRODUCTION_STAGE: &str = "production";

pub const APP_NAME_ENV_VAR: &str = "APP_NAME";
pub const DEFAULT_APP_NAME: &str = "my-python-app";

pub const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";
pub const POWERTOOLS_SERVICE_NAME_ENV_VAR: &str = "POWERTOOLS_SERVICE_NAME";
pub const POWERTOOLS_LOG_LEVEL_ENV_VAR: &str = "POWERTOOLS_LOG_LEVEL";
pub const BEDROCK_MODEL_ID_ENV_VAR: &str = "BEDROCK_MODEL_ID";
pub const AI_TIMEOUT_ENV_VAR: &str = "AI_TIMEOUT";

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

pub const DISPLAY_NAME: &str = "DescriptoRS";

pub const DEFAULT_RUST_LOG: &str = concatcp!(PKG_NAME, "=info");

pub const FUNCTION_LOGICAL_NAME: &str = "ApiFunction";
pub const FUNCTION_HANDLER: &str = "functions/src/functions/api.handler";
pub const FUNCTION_RUNTIME: &str = "python3.12";

pub const DEFAULT_BEDROCK_MODEL_ID: &str = "amazon.nova-lite-v1:0";
pub const FALLBACK_BEDROCK_MODEL_ID: &str = "amazon.nova-micro-v1:0";

const FOUNDATION_MODEL_ARN_PREFIX: &str = "arn:aws:bedrock:*::foundation-model/";

pub const DEFAULT_BEDROCK_MODEL_ARN: &str =
    concatcp!(FOUNDATION_MODEL_ARN_PREFIX, DEFAULT_BEDROCK_MODEL_ID);
pub const FALLBACK_BEDROCK_MODEL_ARN: &str =
    concatcp!(FOUNDATION_MODEL_ARN_PREFIX, FALLBACK_BEDROCK_MODEL_ID);

pub const LOG_GROUP_ARN_PREFIX: &str = "arn:aws:logs:*:*:log-group:/aws/lambda/";

pub const PRODUCTION_ALLOWED_ORIGIN: &str = "https://yourdomain.com";
pub const WILDCARD_ORIGIN: &str = "*";

pub const AI_TIMEOUT_SECONDS: &str = "30";
