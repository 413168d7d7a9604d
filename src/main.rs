//! Terminal score entry (default binary).
//!
//! Reads one roll or command per line from stdin, forwards rolls to the
//! scoring engine, and prints the score sheet after every accepted roll.
//! Finished games are saved through the store selected by the environment
//! (see `bowling_tracker::adapter`). Logs go to stderr; set `RUST_LOG` to
//! change the level.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use bowling_tracker::adapter::{ConfiguredStore, Recorder, StaticIdentity};
use bowling_tracker::core::GameSession;
use bowling_tracker::entry::spare_pins;
use bowling_tracker::input::{parse_line, EntryCommand, HELP_TEXT};
use bowling_tracker::sheet;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut recorder = Recorder::start_from_env()?;
    let mut session = GameSession::new();

    println!("{}\n", HELP_TEXT);
    println!("{}", sheet::render(&session));
    run(&mut recorder, &mut session)
}

fn run(
    recorder: &mut Recorder<ConfiguredStore, StaticIdentity>,
    session: &mut GameSession,
) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let Some(command) = parse_line(&line?) else {
            continue;
        };

        match command {
            EntryCommand::Roll(raw) => enter(session, &raw),
            EntryCommand::Strike => enter(session, "10"),
            EntryCommand::Spare => match spare_pins(session) {
                Some(pins) => enter(session, &pins.to_string()),
                None => println!("no spare possible on a fresh rack"),
            },
            EntryCommand::Save => match recorder.submit(session) {
                Ok(id) => {
                    tracing::info!(%id, "game saved");
                    println!("{}", sheet::render(session));
                }
                Err(e) => tracing::warn!("could not save: {}", e),
            },
            EntryCommand::Stats => match recorder.stats() {
                Ok(stats) => println!(
                    "games: {}  average: {}  highest: {}  lowest: {}",
                    stats.total_games, stats.average, stats.highest, stats.lowest
                ),
                Err(e) => println!("{}", e),
            },
            EntryCommand::History => match recorder.history() {
                Ok(games) if games.is_empty() => {
                    println!("No scores recorded yet. Start by entering your first score!")
                }
                Ok(games) => {
                    for game in games {
                        println!(
                            "game {:>3}  {:>3}  {}",
                            game.record.game_number, game.record.total_score, game.id
                        );
                    }
                }
                Err(e) => println!("{}", e),
            },
            EntryCommand::Trend => match recorder.trend() {
                Ok(points) if points.is_empty() => {
                    println!("No scores recorded yet. Start by entering your first score!")
                }
                Ok(points) => print!("{}", sheet::render_trend(&points)),
                Err(e) => println!("{}", e),
            },
            EntryCommand::New => {
                session.reset();
                println!("{}", sheet::render(session));
            }
            EntryCommand::Help => println!("{}", HELP_TEXT),
            EntryCommand::Quit => return Ok(()),
        }
    }
}

fn enter(session: &mut GameSession, raw: &str) {
    match session.submit_next(raw) {
        Ok(()) => {
            println!("{}", sheet::render(session));
            if session.is_complete() {
                println!(
                    "Game complete: {}. Type 'save' to keep it.",
                    session.total_score()
                );
            }
        }
        Err(e) => println!("rejected: {}", e),
    }
}
