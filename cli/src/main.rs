use std::path::PathBuf;
use std::sync::Arc;

use admin_client::config::ConfigError;
use admin_client::nav::{self, Route};
use admin_client::{
    ApiClient, ApiError, Authenticator, ClientConfig, DemoAuthenticator, FileStorage, ProfileDefaults, SessionGate,
    StorageError,
};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("session store failed: {0}")]
    Storage(#[from] StorageError),
    #[error("login failed")]
    LoginFailed,
    #[error("not logged in; run `admin-cli login` first")]
    NotLoggedIn,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("payload must be a JSON object")]
    NotAnObject,
}

#[derive(Parser, Debug)]
#[command(name = "admin-cli", about = "Admin console session and resource CLI")]
struct Cli {
    #[arg(long, env = "ADMIN_API_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "ADMIN_STATE_DIR")]
    state_dir: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Use the built-in demo account instead of the backend")]
    demo: bool,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Login {
        #[arg(long, short)]
        username: String,
        #[arg(long, short, env = "ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    Whoami,
    /// Show where navigating to PATH would land.
    Open {
        path: String,
    },
    Dashboard(DashboardCommand),
    Users(ResourceCommand),
    Products(ProductCommand),
    Data(ResourceCommand),
}

#[derive(Args, Debug)]
struct DashboardCommand {
    #[command(subcommand)]
    command: DashboardSubcommand,
}

#[derive(Subcommand, Debug)]
enum DashboardSubcommand {
    Stats,
    Charts,
}

#[derive(Args, Debug)]
struct ResourceCommand {
    #[command(subcommand)]
    command: ResourceSubcommand,
}

#[derive(Subcommand, Debug)]
enum ResourceSubcommand {
    List,
    Create {
        #[arg(long)]
        data: String,
    },
    Update {
        id: u64,
        #[arg(long)]
        data: String,
    },
    Delete {
        id: u64,
    },
}

#[derive(Args, Debug)]
struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProductSubcommand {
    #[command(flatten)]
    Crud(ResourceSubcommand),
    Status {
        id: u64,
        status: String,
    },
}

type Gate = SessionGate<Arc<dyn Authenticator>, FileStorage>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, ".env file ignored");
        }
    }

    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.api_base_url = base_url.trim_end_matches('/').to_owned();
    }
    if let Some(state_dir) = cli.state_dir {
        config.state_dir = state_dir;
    }

    let client = ApiClient::new(&config)?;
    let auth: Arc<dyn Authenticator> = if cli.demo { Arc::new(DemoAuthenticator) } else { Arc::new(client.clone()) };
    let mut gate = SessionGate::restore(auth, FileStorage::new(&config.state_dir), ProfileDefaults::from(&config));
    tracing::debug!(base_url = client.base_url(), state_dir = %config.state_dir.display(), demo = cli.demo, "cli ready");

    match cli.command {
        Command::Login { username, password } => run_login(&mut gate, &username, &password).await,
        Command::Logout => run_logout(&mut gate),
        Command::Whoami => run_whoami(&mut gate),
        Command::Open { path } => run_open(&gate, &path),
        Command::Dashboard(dashboard) => run_dashboard(&gate, &client, dashboard).await,
        Command::Users(users) => run_users(&gate, &client, users).await,
        Command::Products(products) => run_products(&gate, &client, products).await,
        Command::Data(data) => run_data(&gate, &client, data).await,
    }
}

async fn run_login(gate: &mut Gate, username: &str, password: &str) -> Result<(), CliError> {
    if !gate.login(username, password).await {
        return Err(CliError::LoginFailed);
    }
    if let Some(profile) = gate.profile() {
        print_json(&serde_json::to_value(profile)?)?;
    }
    Ok(())
}

fn run_logout(gate: &mut Gate) -> Result<(), CliError> {
    gate.logout()?;
    println!("logged out");
    Ok(())
}

fn run_whoami(gate: &mut Gate) -> Result<(), CliError> {
    let profile = gate.ensure_profile().ok_or(CliError::NotLoggedIn)?;
    print_json(&serde_json::to_value(profile)?)
}

fn run_open(gate: &Gate, path: &str) -> Result<(), CliError> {
    let landing = nav::navigate(path, gate.is_authenticated());
    let title = landing.route.title().unwrap_or("-");
    if landing.redirected {
        println!("{path} -> {} ({title})", landing.path);
    } else {
        println!("{} ({title})", landing.path);
    }
    Ok(())
}

/// Guard a screen the same way the console does before showing it.
fn enter(gate: &Gate, route: Route) -> Result<(), CliError> {
    let path = route.path().unwrap_or(nav::routes::HOME_PATH);
    let landing = nav::navigate(path, gate.is_authenticated());
    if landing.route == route {
        return Ok(());
    }
    tracing::debug!(from = path, to = %landing.path, "navigation redirected");
    Err(CliError::NotLoggedIn)
}

async fn run_dashboard(gate: &Gate, client: &ApiClient, dashboard: DashboardCommand) -> Result<(), CliError> {
    enter(gate, Route::Dashboard)?;
    let json = match dashboard.command {
        DashboardSubcommand::Stats => serde_json::to_value(client.dashboard_stats().await?)?,
        DashboardSubcommand::Charts => serde_json::to_value(client.dashboard_charts().await?)?,
    };
    print_json(&json)
}

async fn run_users(gate: &Gate, client: &ApiClient, users: ResourceCommand) -> Result<(), CliError> {
    enter(gate, Route::Users)?;
    let json = match users.command {
        ResourceSubcommand::List => serde_json::to_value(client.list_users().await?)?,
        ResourceSubcommand::Create { data } => client.create_user(&parse_object(&data)?).await?,
        ResourceSubcommand::Update { id, data } => client.update_user(id, &parse_object(&data)?).await?,
        ResourceSubcommand::Delete { id } => client.delete_user(id).await?,
    };
    print_json(&json)
}

async fn run_products(gate: &Gate, client: &ApiClient, products: ProductCommand) -> Result<(), CliError> {
    enter(gate, Route::Products)?;
    let json = match products.command {
        ProductSubcommand::Crud(ResourceSubcommand::List) => serde_json::to_value(client.list_products().await?)?,
        ProductSubcommand::Crud(ResourceSubcommand::Create { data }) => {
            client.create_product(&parse_object(&data)?).await?
        }
        ProductSubcommand::Crud(ResourceSubcommand::Update { id, data }) => {
            client.update_product(id, &parse_object(&data)?).await?
        }
        ProductSubcommand::Crud(ResourceSubcommand::Delete { id }) => client.delete_product(id).await?,
        ProductSubcommand::Status { id, status } => client.update_product_status(id, &status).await?,
    };
    print_json(&json)
}

async fn run_data(gate: &Gate, client: &ApiClient, data: ResourceCommand) -> Result<(), CliError> {
    enter(gate, Route::Data)?;
    let json = match data.command {
        ResourceSubcommand::List => serde_json::to_value(client.list_data_items().await?)?,
        ResourceSubcommand::Create { data } => client.create_data_item(&parse_object(&data)?).await?,
        ResourceSubcommand::Update { id, data } => client.update_data_item(id, &parse_object(&data)?).await?,
        ResourceSubcommand::Delete { id } => client.delete_data_item(id).await?,
    };
    print_json(&json)
}

fn parse_object(raw: &str) -> Result<Value, CliError> {
    let value = serde_json::from_str::<Value>(raw)?;
    if !value.is_object() {
        return Err(CliError::NotAnObject);
    }
    Ok(value)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
