use std::path::PathBuf;

use crate::{
    consts::{APP_NAME_ENV_VAR, DEFAULT_APP_NAME, DEFAULT_STAGE, STAGE_ENV_VAR},
    stack::defs::Stage,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deployment descriptor commands
    #[clap(visible_alias = "d")]
    Descriptor {
        #[command(subcommand)]
        command: DescriptorCommands,
    },
    /// Domain event commands
    #[clap(visible_alias = "e")]
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum DescriptorCommands {
    /// Prints the resolved descriptor to stdout
    #[clap(visible_alias = "p")]
    Print {
        /// The deployment stage to resolve for
        #[clap(short, long, env = STAGE_ENV_VAR, default_value = DEFAULT_STAGE)]
        stage: Stage,
        /// The name of the application
        #[clap(short, long, env = APP_NAME_ENV_VAR, default_value = DEFAULT_APP_NAME)]
        app: String,
    },
    /// Writes the resolved descriptor to a file
    #[clap(visible_alias = "w")]
    Write {
        /// The deployment stage to resolve for
        #[clap(short, long, env = STAGE_ENV_VAR, default_value = DEFAULT_STAGE)]
        stage: Stage,
        /// The name of the application
        #[clap(short, long, env = APP_NAME_ENV_VAR, default_value = DEFAULT_APP_NAME)]
        app: String,
        /// The path to the file to write the descriptor to
        #[clap(short, long)]
        file: PathBuf,
    },
    /// Converts the descriptor to provider resource declarations
    #[clap(visible_alias = "c")]
    Convert {
        /// The deployment stage to resolve for
        #[clap(short, long, env = STAGE_ENV_VAR, default_value = DEFAULT_STAGE)]
        stage: Stage,
        /// The name of the application
        #[clap(short, long, env = APP_NAME_ENV_VAR, default_value = DEFAULT_APP_NAME)]
        app: String,

        #[command(subcommand)]
        command: DescriptorConvertCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum DescriptorConvertCommands {
    /// Writes the resource declarations to a file
    #[clap(visible_alias = "w")]
    Write {
        /// The path to the file to write the resource declarations to
        #[clap(short = 'f', long)]
        resource_file: PathBuf,
    },
    /// Prints the resource declarations to stdout
    #[clap(visible_alias = "p")]
    Print {},
}

#[derive(Subcommand, Debug)]
pub enum EventCommands {
    /// Handles a Todo.Created event payload read from a file
    #[clap(visible_alias = "h")]
    Handle {
        /// The path to the file containing the JSON event payload
        #[clap(short, long)]
        payload_file: PathBuf,
    },
}
