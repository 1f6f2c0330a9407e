//! Site Admin CLI
//!
//! Operator entry point for the admin account and site utilities.
//!
//! # Usage
//!
//! ```bash
//! siteadmin setup --username admin --password secret1 --confirm-password secret1
//! printf 'secret1\nsecret1\n' | siteadmin setup --username admin --password-stdin
//! siteadmin login --username admin --password-stdin < password.txt
//! siteadmin check-domain www.example.org
//! siteadmin language english
//! siteadmin logout
//! ```
//!
//! Logs go to stderr; replies go to stdout (success) or stderr (failure) in
//! the stored language. The exit code follows the failure's `ErrorKind`.

use auth::{AuthError, SetupForm};
use clap::{Parser, Subcommand};
use kernel::Language;
use kernel::error::ErrorKind;
use platform::storage::StorageError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod secret;

use commands::{Context, Outcome, Reply};
use config::AppConfig;

const DEFAULT_LOG_FILTER: &str = "siteadmin=info,auth=info,site=info,platform=info";

#[derive(Parser)]
#[command(name = "siteadmin")]
#[command(author, version, about = "Site administration tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show account, session and language state
    Status,
    /// Create the admin account
    Setup {
        /// Admin ID
        #[arg(short, long)]
        username: String,

        #[arg(short, long, required_unless_present = "password_stdin")]
        password: Option<String>,

        #[arg(short, long, required_unless_present = "password_stdin")]
        confirm_password: Option<String>,

        /// Read the password and its confirmation as two lines from stdin
        #[arg(long, conflicts_with_all = ["password", "confirm_password"])]
        password_stdin: bool,

        /// Replace an existing admin account
        #[arg(long)]
        force: bool,
    },
    /// Log in as the admin
    Login {
        /// Admin ID
        #[arg(short, long)]
        username: String,

        #[arg(short, long, required_unless_present = "password_stdin")]
        password: Option<String>,

        /// Read the password as one line from stdin
        #[arg(long, conflicts_with = "password")]
        password_stdin: bool,
    },
    /// End the admin session
    Logout,
    /// Validate a custom domain name
    CheckDomain {
        domain: String,
    },
    /// Show or set the site language (`english`, `hindi`)
    Language {
        language: Option<Language>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let code = match run(cli).await {
        Ok(Outcome::Success) => 0,
        Ok(Outcome::Failed(kind)) => kind.exit_code(),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Command failed");
            error_kind(&e).exit_code()
        }
    };

    std::process::exit(code);
}

async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let config = AppConfig::from_env()?;
    let mut ctx = Context::open(&config).await;

    let reply = match cli.command {
        Commands::Status => commands::admin::status(&ctx).await,
        Commands::Setup {
            username,
            password,
            confirm_password,
            password_stdin,
            force,
        } => {
            let (password, confirm_password) = if password_stdin {
                let mut lines = secret::read_lines(std::io::stdin().lock(), 2)?.into_iter();
                (lines.next(), lines.next())
            } else {
                (password, confirm_password)
            };
            let form = SetupForm {
                username,
                password: secret::required(password, "--password")?,
                confirm_password: secret::required(confirm_password, "--confirm-password")?,
            };
            match commands::admin::setup(&ctx, form, force).await {
                Ok(reply) => reply,
                Err(e) => {
                    print_reply(
                        &Reply::fail(
                            error_kind(&e),
                            "Failed to create admin account",
                            "व्यवस्थापक खाता बनाने में विफल",
                        ),
                        ctx.language,
                    );
                    return Err(e);
                }
            }
        }
        Commands::Login {
            username,
            password,
            password_stdin,
        } => {
            let password = if password_stdin {
                secret::read_lines(std::io::stdin().lock(), 1)?.into_iter().next()
            } else {
                password
            };
            let password = secret::required(password, "--password")?;
            commands::admin::login(&ctx, &username, &password).await
        }
        Commands::Logout => commands::admin::logout(&ctx).await,
        Commands::CheckDomain { domain } => commands::domain::check(&ctx, &domain).await,
        Commands::Language { language } => {
            commands::language::language(&mut ctx, language).await?
        }
    };

    print_reply(&reply, ctx.language);
    Ok(reply.outcome)
}

fn print_reply(reply: &Reply, language: Language) {
    let text = reply.message.pick(language);
    if reply.is_success() {
        println!("{text}");
    } else {
        eprintln!("{text}");
    }
}

fn error_kind(err: &anyhow::Error) -> ErrorKind {
    if let Some(e) = err.downcast_ref::<AuthError>() {
        return e.kind();
    }
    match err.downcast_ref::<StorageError>() {
        Some(StorageError::Corrupted(_)) => ErrorKind::CorruptedData,
        Some(_) => ErrorKind::StorageUnavailable,
        None => ErrorKind::Internal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "siteadmin",
            "setup",
            "--username",
            "admin",
            "--password",
            "secret1",
            "--confirm-password",
            "secret1",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Setup { force: false, .. }));

        let cli = Cli::try_parse_from(["siteadmin", "language", "english"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Language {
                language: Some(Language::English)
            }
        ));

        assert!(Cli::try_parse_from(["siteadmin", "language", "French"]).is_err());
    }

    #[test]
    fn test_password_from_stdin_flag() {
        let cli = Cli::try_parse_from([
            "siteadmin",
            "setup",
            "--username",
            "admin",
            "--password-stdin",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Setup {
                password: None,
                confirm_password: None,
                password_stdin: true,
                ..
            }
        ));

        let cli =
            Cli::try_parse_from(["siteadmin", "login", "-u", "admin", "--password-stdin"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Login {
                password: None,
                password_stdin: true,
                ..
            }
        ));

        // Either source, not both, and not neither
        assert!(
            Cli::try_parse_from([
                "siteadmin",
                "login",
                "-u",
                "admin",
                "-p",
                "secret1",
                "--password-stdin"
            ])
            .is_err()
        );
        assert!(Cli::try_parse_from(["siteadmin", "login", "-u", "admin"]).is_err());
        assert!(
            Cli::try_parse_from(["siteadmin", "setup", "-u", "admin", "-p", "secret1"]).is_err()
        );
    }

    #[test]
    fn test_error_kind() {
        let err = anyhow::Error::new(AuthError::from(StorageError::QuotaExceeded { limit: 1 }))
            .context("Failed to create admin account");
        assert_eq!(error_kind(&err), ErrorKind::StorageUnavailable);

        let err = anyhow::Error::new(StorageError::Corrupted("bad".into()));
        assert_eq!(error_kind(&err), ErrorKind::CorruptedData);

        assert_eq!(error_kind(&anyhow::anyhow!("boom")), ErrorKind::Internal);
    }
}
