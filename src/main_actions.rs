use crate::{
    events::todo_created::{self, TodoCreatedEvent},
    stack::{
        defs::{DeploymentConfig, StackContext},
        resources::StackResources,
    },
};
use anyhow::{Context, Result as AnyResult};
use itertools::Itertools;
use std::path::PathBuf;

pub fn resolve_descriptor(context: &StackContext) -> DeploymentConfig {
    let config = context.resolve();

    tracing::info!(
        stage = %config.stage,
        timeout_seconds = config.timeout_seconds,
        memory_mb = config.memory_mb,
        log_level = %config.log_level,
        allowed_origins = %config.allowed_origins.iter().join(", "),
        "Descriptor resolved."
    );

    config
}

pub fn print_descriptor(config: &DeploymentConfig) -> AnyResult<()> {
    println!("{}", config.to_yaml_string()?);
    Ok(())
}

pub async fn write_descriptor_to_file(file: PathBuf, config: &DeploymentConfig) -> AnyResult<()> {
    tokio::fs::write(file, config.to_yaml_string()?)
        .await
        .context("Failed to write descriptor to file")?;
    Ok(())
}

pub fn print_stack_resources(config: &DeploymentConfig) -> AnyResult<()> {
    let resources = StackResources::from(config);

    println!("{}", resources.to_yaml_string()?);
    Ok(())
}

pub async fn write_stack_resources_to_file(
    file: PathBuf,
    config: &DeploymentConfig,
) -> AnyResult<()> {
    let resources = StackResources::from(config);

    tokio::fs::write(file, resources.to_yaml_string()?)
        .await
        .context("Failed to write resource declarations to file")?;
    Ok(())
}

pub async fn handle_event_from_file(path: PathBuf) -> AnyResult<()> {
    let payload = tokio::fs::read_to_string(path)
        .await
        .context("Failed to read event payload from file")?;

    let event = TodoCreatedEvent::from_json(&payload).context("Failed to parse event payload")?;

    todo_created::handle(event);

    Ok(())
}
