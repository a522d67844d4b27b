//! Interactive Corvit shell.
//!
//! One blocking read loop; each line is fully processed before the next
//! prompt. Lookups run on a current-thread tokio runtime so the turn loop
//! itself stays synchronous.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use corvit_core::config::CorvitConfig;
use corvit_core::persistence::FileStateStore;
use corvit_core::session::Session;
use corvit_core::transcript::TranscriptLogger;
use corvit_lookup::{EncyclopediaClient, LookupError};

/// Lines printed before the screen is wiped.
const SCREEN_CLEAR_INTERVAL: u32 = 15;

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    Reset,
    Lookup(&'a str),
    /// `/lookup` with no title.
    LookupUsage,
    Say(&'a str),
}

fn parse_command(input: &str) -> Command<'_> {
    if input.eq_ignore_ascii_case("quit") {
        Command::Quit
    } else if input.eq_ignore_ascii_case("/reset") {
        Command::Reset
    } else if let Some(rest) = input.strip_prefix("/lookup") {
        let title = rest.trim();
        if title.is_empty() {
            Command::LookupUsage
        } else {
            Command::Lookup(title)
        }
    } else {
        Command::Say(input)
    }
}

#[derive(Parser)]
#[command(name = "corvit")]
#[command(about = "Stateful conversational text generator")]
#[command(version)]
struct Cli {
    /// Name Corvit knows the user by.
    #[arg(short, long, default_value = "John")]
    name: String,

    /// Configuration file (TOML). Defaults apply if absent.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the state directory from the config.
    #[arg(long)]
    data_dir: Option<String>,

    /// Fix the RNG seed (reproducible replies).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => CorvitConfig::from_file(path)?,
        None => CorvitConfig::default(),
    };
    if let Some(data_dir) = cli.data_dir {
        config.persistence.data_dir = data_dir;
    }

    let store = FileStateStore::new(&config.persistence.data_dir);
    let transcript = TranscriptLogger::new(&config.persistence.transcript_file);
    let lookup = EncyclopediaClient::new(&config.lookup.base_url, config.lookup.timeout_ms);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut session = match cli.seed {
        Some(seed) => Session::open_seeded(config, cli.name, store, seed),
        None => Session::open(config, cli.name, store),
    }
    .with_transcript(transcript);

    println!("Welcome to Corvit! Type 'quit' to exit.");
    prompt()?;
    let stdin = std::io::stdin();
    let mut lines_printed = 0u32;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        match parse_command(input) {
            Command::Quit => break,
            Command::Reset => {
                session.reset_emotions();
                println!("CORVIT: Let's start fresh.");
            }
            Command::LookupUsage => {
                println!("CORVIT: Usage: /lookup <article title>");
            }
            Command::Lookup(title) => match runtime.block_on(lookup.fetch_summary(title)) {
                Ok(text) => {
                    session.learn_external(&text);
                    println!("CORVIT: I just read about {title}.");
                }
                Err(LookupError::NotFound { title }) => {
                    println!("CORVIT: I couldn't find anything about {title}.");
                }
                Err(e) => {
                    warn!(error = %e, "lookup failed");
                    println!("CORVIT: The encyclopedia isn't answering right now.");
                }
            },
            Command::Say(text) => {
                let reply = session.process_turn(text);
                println!("CORVIT: {reply}");
            }
        }

        lines_printed += 1;
        if lines_printed == SCREEN_CLEAR_INTERVAL {
            clear_screen();
            lines_printed = 0;
        }
        prompt()?;
    }

    println!("Goodbye! Thanks for chatting with Corvit.");
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

fn clear_screen() {
    // ANSI clear + cursor home; harmless on terminals that ignore it.
    print!("\x1b[2J\x1b[H");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_by_prefix() {
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("/reset"), Command::Reset);
        assert_eq!(
            parse_command("/lookup Rust (programming language)"),
            Command::Lookup("Rust (programming language)")
        );
        assert_eq!(parse_command("hello there"), Command::Say("hello there"));
    }

    #[test]
    fn bare_lookup_asks_for_a_title_instead_of_learning_it() {
        assert_eq!(parse_command("/lookup"), Command::LookupUsage);
        assert_eq!(parse_command("/lookup   "), Command::LookupUsage);
    }
}
