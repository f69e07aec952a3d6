//! User Service - command line access to user records.

use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::AppError;
use user_service_lib::config::UserServiceConfig;
use user_service_lib::repository::UserRepository;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User record management")]
struct Cli {
    /// Table to operate on (defaults to the configured table)
    #[arg(long, global = true)]
    table: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a single user by email
    Get {
        #[arg(long)]
        email: String,
    },
    /// Fetch every user in the table
    List,
    /// Create a user from a JSON body
    Create {
        #[arg(long)]
        body: String,
    },
    /// Replace an existing user from a JSON body
    Update {
        #[arg(long)]
        body: String,
    },
    /// Delete a user by email
    Delete {
        #[arg(long)]
        email: String,
    },
}

/// Exit status for a failed operation: 2 for rejected input, 1 for store failures.
fn exit_status(err: &AppError) -> u8 {
    if err.is_client_error() {
        2
    } else {
        1
    }
}

async fn run(
    repo: &dyn UserRepository,
    command: Commands,
    table: &str,
) -> Result<String, Box<dyn Error>> {
    let output = match command {
        Commands::Get { email } => to_json(&repo.fetch(&email, table).await?)?,
        Commands::List => to_json(&repo.fetch_all(table).await?)?,
        Commands::Create { body } => to_json(&repo.create(&body, table).await?)?,
        Commands::Update { body } => to_json(&repo.update(&body, table).await?)?,
        Commands::Delete { email } => {
            repo.delete(&email, table).await?;
            format!("deleted {}", email)
        }
    };

    Ok(output)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = UserServiceConfig::from_env();
    let table = cli.table.unwrap_or_else(|| config.store.table_name.clone());

    let repo = user_service_lib::build_repository(&config).await?;

    match run(repo.as_ref(), cli.command, &table).await {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => match e.downcast_ref::<AppError>() {
            Some(app_err) => {
                eprintln!("{}: {}", app_err.code(), app_err);
                Ok(ExitCode::from(exit_status(app_err)))
            }
            None => Err(e),
        },
    }
}
