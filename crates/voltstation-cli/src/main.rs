mod configuration;
mod error;

use anyhow::{anyhow, bail, Context, Result};
use bat::PrettyPrinter;
use clap::{Parser, Subcommand};
use cliclack::{input, spinner};
use console::style;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use configuration::Settings;
use voltstation::assistant::Assistant;
use voltstation::errors::AuthError;
use voltstation::providers::gigachat::GigaChatProvider;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a single question and print the answer
    Ask {
        /// The question to ask
        question: String,

        /// Situational context sent ahead of the question
        #[arg(short, long)]
        context: Option<String>,
    },

    /// Start an interactive session (default)
    Chat,

    /// Check that an access token can be obtained with the configured credentials
    Token,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = Settings::new().context("Failed to load GigaChat settings")?;
    info!(
        credentials = settings.has_credentials(),
        model = %settings.model,
        "GigaChat settings loaded"
    );
    let provider = GigaChatProvider::new(settings.into_config())?;

    match cli.command.unwrap_or(Command::Chat) {
        Command::Ask { question, context } => {
            let assistant = Assistant::new(Box::new(provider));
            let answer = assistant.ask(&question, context.as_deref()).await;
            render(&answer)?;
            println!();
        }
        Command::Chat => chat(Assistant::new(Box::new(provider))).await?,
        Command::Token => check_token(&provider).await?,
    }
    Ok(())
}

async fn chat(assistant: Assistant) -> Result<()> {
    println!(
        "VoltStation assistant {}",
        style("- type \"exit\" to end the session, \"/stats\" to see counters").dim()
    );
    println!("\n");

    loop {
        let message_text: String = input("Message:").placeholder("").multiline().interact()?;
        let message_text = message_text.trim();

        if message_text.eq_ignore_ascii_case("exit") {
            break;
        }
        if message_text == "/stats" {
            println!("{}", serde_json::to_string_pretty(&assistant.stats())?);
            continue;
        }
        if !worth_asking(message_text) {
            continue;
        }

        let spin = spinner();
        spin.start("awaiting reply");
        let answer = assistant.ask(message_text, None).await;
        spin.stop("");

        render(&answer)?;
        println!("\n");
    }

    info!(stats = ?assistant.stats(), "session finished");
    Ok(())
}

async fn check_token(provider: &GigaChatProvider) -> Result<()> {
    let tokens = provider.token_cache();
    match tokens.get_token().await {
        Ok(_) => {
            let remaining = tokens.expires_in().await.unwrap_or_default().as_secs();
            println!(
                "{} access token acquired, cached for {}m {}s",
                style("✓").green(),
                remaining / 60,
                remaining % 60
            );
            Ok(())
        }
        Err(AuthError::NotConfigured) => {
            bail!("GIGACHAT_CLIENT_ID and GIGACHAT_CLIENT_SECRET must be set")
        }
        Err(err) => Err(err).context("Failed to acquire GigaChat access token"),
    }
}

/// Single characters and blank input are not worth a model call.
fn worth_asking(text: &str) -> bool {
    text.trim().chars().count() >= 2
}

fn render(content: &str) -> Result<()> {
    PrettyPrinter::new()
        .input_from_bytes(content.as_bytes())
        .language("markdown")
        .print()
        .map_err(|e| anyhow!("Failed to render answer: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worth_asking() {
        assert!(!worth_asking(""));
        assert!(!worth_asking("   "));
        assert!(!worth_asking(" ?"));
        assert!(!worth_asking("я"));
        assert!(worth_asking("hi"));
        assert!(worth_asking("где станция?"));
    }

    #[test]
    fn test_cli_parses_ask_with_context() {
        let cli = Cli::try_parse_from(["voltstation", "ask", "where?", "--context", "station 2"])
            .unwrap();
        match cli.command {
            Some(Command::Ask { question, context }) => {
                assert_eq!(question, "where?");
                assert_eq!(context.as_deref(), Some("station 2"));
            }
            _ => panic!("Expected ask command"),
        }
    }

    #[test]
    fn test_cli_defaults_to_no_command() {
        let cli = Cli::try_parse_from(["voltstation"]).unwrap();
        assert!(cli.command.is_none());
    }
}
