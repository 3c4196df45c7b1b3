//! services/api/src/bin/portal.rs
//!
//! Command-line portal client. Talks to the gateway at `GATEWAY_URL` and keeps
//! its session under `SESSION_DIR`.

use api_lib::{config::ClientConfig, error::ApiError, init_tracing, portal::PortalClient};
use clap::{Parser, Subcommand};
use hr_portal_core::views::{filter_documents, filter_employees, DocumentQuery, EmployeeQuery, ANY};

#[derive(Parser)]
#[command(name = "portal", about = "HR portal client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in; any credentials are accepted.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Sign out and clear the stored session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// List documents from the gateway.
    Documents {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = ANY)]
        category: String,
        #[arg(long, default_value = ANY)]
        status: String,
    },
    /// List employees.
    Employees {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = ANY)]
        department: String,
        #[arg(long, default_value = ANY)]
        status: String,
    },
    /// Dashboard headline numbers.
    Summary,
}

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;
    init_tracing(config.log_level);
    let client = PortalClient::from_config(&config);

    match cli.command {
        Command::Login { email, password } => {
            let user = client.login(&email, &password).await?;
            println!("Signed in as {} ({})", user.email, user.role);
        }
        Command::Logout => {
            client.logout()?;
            println!("Signed out");
        }
        Command::Whoami => match client.auth.user() {
            Some(user) => println!("{} <{}> {}", user.name, user.email, user.role),
            None => println!("Not signed in"),
        },
        Command::Documents {
            search,
            category,
            status,
        } => {
            let documents = client.refresh_documents().await?;
            let query = DocumentQuery {
                search,
                category,
                status,
            };
            for doc in filter_documents(&documents, &query) {
                println!(
                    "{:>3}  {:<36} {:<8} {:<9} {}",
                    doc.id,
                    doc.name,
                    doc.size,
                    doc.status.as_str(),
                    doc.category
                );
            }
        }
        Command::Employees {
            search,
            department,
            status,
        } => {
            let employees = client.employees.employees();
            let query = EmployeeQuery {
                search,
                department,
                status,
            };
            for emp in filter_employees(&employees, &query) {
                println!(
                    "{:>3}  {:<18} {:<12} {:<11} {:>3}% signed",
                    emp.id,
                    emp.name,
                    emp.department,
                    emp.status.as_str(),
                    emp.completion_percent()
                );
            }
        }
        Command::Summary => {
            let summary = client.summary().await?;
            println!("Total documents:    {}", summary.total_documents);
            println!("Active employees:   {}", summary.active_employees);
            println!("Pending signatures: {}", summary.pending_signatures);
        }
    }

    for note in client.ui.notifications() {
        tracing::debug!(id = note.id, "{}", note.message);
    }
    Ok(())
}
