mod archive;
mod config;
mod connect;
mod credentials;
mod login;
mod prompt;
mod registry;

use camino::Utf8PathBuf;
use chemcaster::types::{ServiceUrl, Username};
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::credentials::Credentials;

#[derive(Parser)]
#[clap(
    author, version, about, long_about = None,
    propagate_version = false, disable_help_subcommand = true
)]
struct Cli {
    /// Chemcaster service URL
    #[clap(long, env = "CHEMCASTER_URL")]
    url: Option<ServiceUrl>,

    /// account username
    #[clap(long, env = "CHEMCASTER_USERNAME")]
    username: Option<Username>,

    /// account password
    #[clap(long, env = "CHEMCASTER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Number of times to retry a request which failed with a server error
    #[clap(long)]
    retries: Option<u32>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the service version and list registries
    Connect {},

    /// Create a registry
    Create {
        /// Name of the new registry
        name: String,

        /// Allow the registry to be deleted later
        #[clap(long)]
        deletable: bool,
    },

    /// Rename a registry
    Rename {
        /// Current name or URI of the registry
        registry: String,

        /// New name
        new_name: String,
    },

    /// Describe a registry
    Show {
        /// Name or URI of the registry. Default is the first registry.
        registry: Option<String>,
    },

    /// Delete a registry and everything in it
    Delete {
        /// Name or URI of the registry
        registry: String,
    },

    /// Archive a registry and download the archive as a zip file
    Archive {
        /// Name or URI of the registry
        registry: String,

        /// Where to save the zip file
        #[clap(short, long, default_value = "registry.zip")]
        output: Utf8PathBuf,

        /// Overwrite an existing file
        #[clap(long)]
        clobber: bool,

        /// Seconds between checks of whether the archive is done
        #[clap(long, default_value_t = 5)]
        interval: u64,
    },

    /// Remember the service URL and username
    Login {},
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chemcast=info,chemcaster=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Cli = Cli::parse();
    let credentials = Credentials {
        url: args.url,
        username: args.username,
        password: args.password,
        retries: args.retries,
        config_path: None,
    };

    match args.command {
        Commands::Connect {} => connect::connect(credentials).await,
        Commands::Create { name, deletable } => {
            registry::create(credentials, &name, deletable).await
        }
        Commands::Rename { registry, new_name } => {
            registry::rename(credentials, &registry, &new_name).await
        }
        Commands::Show { registry } => registry::show(credentials, registry.as_deref()).await,
        Commands::Delete { registry } => registry::delete(credentials, &registry).await,
        Commands::Archive {
            registry,
            output,
            clobber,
            interval,
        } => archive::archive(credentials, &registry, &output, clobber, interval).await,
        Commands::Login {} => login::login(credentials),
    }
}
