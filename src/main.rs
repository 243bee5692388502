use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use configuration::{LogFormat, LoggingSettings};
use core_types::Employee;
use database::schema::MYSQL_INIT;
use database::{EmployeeRepository, connect};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Workday employee tool.
#[tokio::main]
async fn main() -> Result<()> {
    // Load WORKDAY__* overrides from a .env file if one is present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config(&cli.config).with_context(|| {
        format!("failed to load configuration from {}", cli.config.display())
    })?;
    init_tracing(&config.logging, cli.log_format);

    let pool = connect(&config.database)
        .await
        .context("failed to open the employee database")?;
    let repo = EmployeeRepository::new(pool);

    // Execute the appropriate command, then release the handle on every path
    let outcome = run(cli.command, &repo).await;
    repo.pool().close().await;
    outcome
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Manage employee records in the Workday database.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, short, default_value = "config.toml")]
    config: PathBuf,

    /// Overrides the log format from the configuration file.
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the employee table if it does not exist.
    InitSchema,
    /// Insert a new employee.
    Add(AddArgs),
    /// List every employee.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser)]
struct AddArgs {
    #[arg(long)]
    firstname: String,

    #[arg(long)]
    lastname: String,

    /// Free-form job title (e.g. "engineer").
    #[arg(long)]
    role: String,

    /// Stored as given, in plain text.
    #[arg(long)]
    password: String,
}

// ==============================================================================
// Command Logic
// ==============================================================================

async fn run(command: Commands, repo: &EmployeeRepository) -> Result<()> {
    match command {
        Commands::InitSchema => {
            repo.init_schema(MYSQL_INIT)
                .await
                .context("failed to create the employee table")?;
            info!("employee table is ready");
        }
        Commands::Add(args) => {
            let employee = Employee::new(args.firstname, args.lastname, args.role, args.password);
            let receipt = repo
                .insert_employee(&employee)
                .await
                .context("failed to insert employee")?;
            println!(
                "Inserted employee {} ({} row(s) affected)",
                receipt.id, receipt.rows_affected
            );
        }
        Commands::List { json } => {
            let employees = repo
                .find_all_employees()
                .await
                .context("failed to list employees")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&employees)?);
            } else {
                println!("{}", employee_table(&employees));
            }
        }
    }
    Ok(())
}

/// Renders employees as a table. Passwords are never shown.
fn employee_table(employees: &[Employee]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["ID", "First name", "Last name", "Role"]);
    for employee in employees {
        table.add_row(vec![
            employee.id.to_string(),
            employee.firstname.clone(),
            employee.lastname.clone(),
            employee.role.clone(),
        ]);
    }
    table
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured filter.
fn init_tracing(settings: &LoggingSettings, format_override: Option<LogFormat>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format_override.unwrap_or(settings.format) {
        LogFormat::Full => builder.init(),
        LogFormat::Compact => builder.compact().init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_employees_without_passwords() {
        let employees = vec![
            Employee {
                id: 1,
                ..Employee::new("Ada", "Lovelace", "engineer", "hunter2")
            },
            Employee {
                id: 2,
                ..Employee::new("Grace", "Hopper", "admiral", "cobol")
            },
        ];
        let rendered = employee_table(&employees).to_string();
        assert!(rendered.contains("Lovelace"));
        assert!(rendered.contains("Hopper"));
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("cobol"));
    }

    #[test]
    fn parses_add_command() {
        let cli = Cli::try_parse_from([
            "workday",
            "--config",
            "dev.toml",
            "add",
            "--firstname",
            "Ada",
            "--lastname",
            "Lovelace",
            "--role",
            "engineer",
            "--password",
            "x",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("dev.toml"));
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.firstname, "Ada");
                assert_eq!(args.password, "x");
            }
            _ => panic!("expected the add command"),
        }
    }

    #[test]
    fn parses_list_with_defaults() {
        let cli = Cli::try_parse_from(["workday", "--log-format", "compact", "list", "--json"])
            .unwrap();
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert_eq!(cli.log_format, Some(LogFormat::Compact));
        assert!(matches!(cli.command, Commands::List { json: true }));
    }

    #[test]
    fn add_requires_every_field() {
        assert!(Cli::try_parse_from(["workday", "add", "--firstname", "Ada"]).is_err());
    }
}
