use clap::Parser;
use lambda_functions_descripto_rs::{
    cli::{Cli, Commands, DescriptorCommands, DescriptorConvertCommands, EventCommands},
    consts::{DEFAULT_RUST_LOG, DISPLAY_NAME},
    main_actions::{
        handle_event_from_file, print_descriptor, print_stack_resources, resolve_descriptor,
        write_descriptor_to_file, write_stack_resources_to_file,
    },
    stack::defs::StackContext,
};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", DEFAULT_RUST_LOG);
    }

    tracing_subscriber::fmt()
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_level(true)
        .with_ansi(true)
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

fn print_banner() {
    if atty::is(atty::Stream::Stdout) {
        cfonts::say(cfonts::Options {
            text: String::from(DISPLAY_NAME),
            font: cfonts::Fonts::FontBlock,
            ..cfonts::Options::default()
        });
    }
}

#[tokio::main]
async fn main() {
    print_banner();
    init_tracing();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        tracing::error!(%error, "Exiting with error.");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Descriptor { command } => match command {
            DescriptorCommands::Print { stage, app } => {
                let config = resolve_descriptor(&StackContext::new(app, stage));
                print_descriptor(&config)?;
            }
            DescriptorCommands::Write { stage, app, file } => {
                let config = resolve_descriptor(&StackContext::new(app, stage));
                write_descriptor_to_file(file, &config).await?;
            }
            DescriptorCommands::Convert {
                stage,
                app,
                command,
            } => {
                let config = resolve_descriptor(&StackContext::new(app, stage));
                match command {
                    DescriptorConvertCommands::Print {} => print_stack_resources(&config)?,
                    DescriptorConvertCommands::Write { resource_file } => {
                        write_stack_resources_to_file(resource_file, &config).await?
                    }
                }
            }
        },
        Commands::Event { command } => match command {
            EventCommands::Handle { payload_file } => handle_event_from_file(payload_file).await?,
        },
    }

    Ok(())
}
