//! Interactive shell over the synoscope session.
//!
//! Reads one command per line from stdin, dispatches it to the session, waits
//! for every lookup and animation it started, and prints the resulting view.
//!
//! # Commands
//!
//! - `search <word>`: submit a word (empty word returns to editing)
//! - `open <n>`: drill down into result bubble `#n`
//! - `define <n>`: long-press bubble `#n` (`0` = central label)
//! - `dismiss`: dismiss the definition overlay or notice
//! - `reset`: tap the central label
//! - `type <text>`: edit the placeholder text
//! - `history`: list past searches
//! - `pick <n>`: search history entry `n`
//! - `show`: print the current view
//! - `quit`: exit

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::error::Error;
use synoscope::domain::{BubbleId, CanvasSize, Point};
use synoscope::infrastructure::expand_tilde;
use synoscope::{Config, Session};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "synoscope", about = "Explore related words as bubbles", version)]
struct Cli {
    /// Configuration file (default: ~/.config/synoscope/config.toml).
    #[arg(long)]
    config: Option<String>,

    /// Log filter, overrides the configuration file.
    #[arg(long)]
    trace_level: Option<String>,

    /// Print the view as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Canvas width used for layout.
    #[arg(long, default_value_t = 390.0)]
    width: f64,

    /// Canvas height used for layout.
    #[arg(long, default_value_t = 844.0)]
    height: f64,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Search(String),
    Open(u64),
    Define(u64),
    Dismiss,
    Reset,
    Type(String),
    History,
    Pick(usize),
    Show,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let number = |what: &str| {
            rest.parse::<u64>()
                .map_err(|_| format!("{name} expects a {what} number, got {rest:?}"))
        };

        match name {
            "search" | "s" => Ok(Self::Search(rest.to_string())),
            "open" | "o" => number("bubble").map(Self::Open),
            "define" | "d" => number("bubble").map(Self::Define),
            "dismiss" => Ok(Self::Dismiss),
            "reset" | "r" => Ok(Self::Reset),
            "type" | "t" => Ok(Self::Type(rest.to_string())),
            "history" | "h" => Ok(Self::History),
            "pick" | "p" => number("history")
                .and_then(|n| usize::try_from(n).map_err(|e| e.to_string()))
                .map(Self::Pick),
            "show" | "" => Ok(Self::Show),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command {other:?}")),
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config_path = cli.config.as_deref().map(expand_tilde);
    let mut config = Config::load(config_path.as_deref())?;
    if let Some(level) = cli.trace_level {
        config.trace_level = Some(level);
    }

    let mut session = synoscope::initialize(&config)?.with_canvas(CanvasSize::new(cli.width, cli.height));
    tracing::info!(width = cli.width, height = cli.height, "session started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    print_view(&session, cli.json)?;

    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::History => {
                print!("{}", synoscope::ui::render_history(session.state().history()));
                continue;
            }
            Command::Show => {}
            Command::Search(word) => {
                session.submit(&word);
            }
            Command::Open(n) => {
                session.select_bubble(BubbleId(n));
            }
            Command::Define(n) => {
                let target = BubbleId(n);
                let anchor = anchor_of(&session, target);
                session.long_press(target, anchor);
            }
            Command::Dismiss => {
                session.dismiss_overlay();
            }
            Command::Reset => {
                session.reset();
            }
            Command::Type(text) => {
                session.type_text(&text);
            }
            Command::Pick(index) => {
                session.select_history(index);
            }
        }

        session.settle().await;
        print_view(&session, cli.json)?;
    }

    tracing::info!("session ended");
    Ok(())
}

/// Where a long press on `target` would land.
fn anchor_of(session: &Session, target: BubbleId) -> Point {
    session
        .state()
        .bubble(target)
        .map_or_else(|| session.canvas().center(), |bubble| bubble.position)
}

fn print_view(session: &Session, as_json: bool) -> Result<(), Box<dyn Error>> {
    let view = session.view();
    if as_json {
        println!("{}", serde_json::to_string(&view)?);
    } else {
        print!("{}", synoscope::ui::render(&view));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(Command::parse("search ice cream"), Ok(Command::Search("ice cream".into())));
        assert_eq!(Command::parse("open 3"), Ok(Command::Open(3)));
        assert_eq!(Command::parse("d 0"), Ok(Command::Define(0)));
        assert_eq!(Command::parse("pick 1"), Ok(Command::Pick(1)));
        assert_eq!(Command::parse("  type hap "), Ok(Command::Type("hap".into())));
    }

    #[test]
    fn bare_search_submits_empty_word() {
        assert_eq!(Command::parse("search"), Ok(Command::Search(String::new())));
        assert_eq!(Command::parse(""), Ok(Command::Show));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Command::parse("open x").is_err());
        assert!(Command::parse("fly").is_err());
    }
}
