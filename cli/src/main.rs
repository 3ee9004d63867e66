//! msgscan CLI - serves the message scanning project contact page.

mod commands;
mod ui;

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use msgscan_core::{Config, PhoneNumber, ProviderKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "msgscan")]
#[command(about = "Message scanning project contact page", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, env = "MSGSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Contact number in international format, e.g. +15551540430
    #[arg(long, env = "MSGSCAN_PHONE")]
    phone: Option<PhoneNumber>,

    /// QR image strategy: "local" or "remote"
    #[arg(long, env = "MSGSCAN_QR_PROVIDER")]
    provider: Option<ProviderKind>,

    /// QR image edge length in pixels
    #[arg(long)]
    size: Option<u32>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the contact page (default)
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "MSGSCAN_PORT")]
        port: Option<u16>,

        /// Address to bind to
        #[arg(short, long)]
        bind: Option<IpAddr>,
    },
    /// Show the deep link and its QR code in the terminal
    Link,
    /// Write the QR image to a file
    Qr {
        /// Output path for the PNG
        #[arg(short, long, default_value = "contact-qr.png")]
        output: PathBuf,
    },
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(phone) = &self.phone {
            config.contact_phone_number = phone.clone();
        }
        if let Some(provider) = self.provider {
            config.qr_provider = provider;
        }
        if let Some(size) = self.size {
            config.qr_size = size;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("msgscan=info".parse()?)
                .add_directive("msgscan_core=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    tracing::info!(
        "configuration loaded: contact {} via {} QR provider",
        config.contact_phone_number,
        config.qr_provider
    );

    match cli.command.unwrap_or(Commands::Serve { port: None, bind: None }) {
        Commands::Serve { port, bind } => commands::serve(config, port, bind).await?,
        Commands::Link => commands::show_link(config),
        Commands::Qr { output } => commands::write_qr(config, &output)?,
    }

    Ok(())
}
