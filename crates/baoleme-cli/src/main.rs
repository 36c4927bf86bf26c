mod commands;

use baoleme_http::{ApiClient, ClientConfig, FileStore, KeyValueStore, Role, SessionManager};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "baoleme")]
#[command(about = "Baoleme delivery platform client")]
struct Cli {
    /// API base URL, e.g. http://localhost:8080/api
    #[arg(long, env = "BAOLEME_BASE_URL", global = true)]
    base_url: Option<String>,
    /// JSON file holding the per-role tokens
    #[arg(long, env = "BAOLEME_TOKEN_FILE", global = true)]
    token_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and keep the role's token
    Login {
        role: Role,
        /// Phone for users and riders, username for merchants, id for admins
        account: String,
        #[arg(short, long, env = "BAOLEME_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout {
        role: Role,
    },
    /// Fetch the role's profile
    Info {
        role: Role,
    },
    /// Show which roles hold a token
    Status,
    /// Send one request with the role's token and print the envelope data
    Call {
        role: Role,
        method: String,
        path: String,
        /// JSON body
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Remember settings for later runs
    Config {
        #[arg(long)]
        base_url: Option<String>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "baoleme=info".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn build_client(cli: &Cli) -> anyhow::Result<ApiClient> {
    let mut config = ClientConfig::from_env()?;
    let settings = baoleme_common::load_settings();
    if let Some(url) = cli.base_url.clone().or(settings.base_url) {
        config.base_url = url;
    }

    let token_file = cli
        .token_file
        .clone()
        .unwrap_or_else(baoleme_common::token_file);
    baoleme_common::ensure_parent(&token_file)?;
    debug!("[Cli] base {} tokens {:?}", config.base_url, token_file);

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&token_file)?);
    let session = Arc::new(SessionManager::new(store));
    Ok(ApiClient::with_config(config, session)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Command::Config { base_url } = &cli.command {
        let mut settings = baoleme_common::load_settings();
        if let Some(url) = base_url {
            settings.base_url = Some(url.clone());
            baoleme_common::save_settings(&settings)?;
            info!("Saved base URL {}", url);
        }
        return commands::print_json(&settings);
    }

    let client = build_client(&cli)?;
    match cli.command {
        Command::Login {
            role,
            account,
            password,
        } => commands::login(&client, role, &account, &password).await,
        Command::Logout { role } => commands::logout(&client, role).await,
        Command::Info { role } => commands::info(&client, role).await,
        Command::Status => commands::status(&client),
        Command::Call {
            role,
            method,
            path,
            data,
        } => commands::call(&client, role, &method, &path, data.as_deref()).await,
        Command::Config { .. } => Ok(()),
    }
}
