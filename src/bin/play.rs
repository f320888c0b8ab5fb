//! Terminal Game Binary
//!
//! Deals five-card rounds against the robot opponent and keeps running
//! statistics per session key.
//!
//! Options: --session, --stats-dir, --seed, --delay-ms, --rounds, --reset

use clap::Parser;
use colored::Colorize;
use fivecard::cards::Hand;
use fivecard::cards::Suit;
use fivecard::gameplay::Disk;
use fivecard::gameplay::Opening;
use fivecard::gameplay::Outcome;
use fivecard::gameplay::Session;
use fivecard::players::Human;
use fivecard::players::Player;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Call or fold against a five-card opponent", long_about = None)]
struct Args {
    /// Statistics are kept per session key
    #[arg(long, default_value = "default")]
    session: String,
    #[arg(long, default_value = "stats")]
    stats_dir: String,
    /// Seed the deck for a reproducible sequence of rounds
    #[arg(long)]
    seed: Option<u64>,
    /// Pause between rounds
    #[arg(long, default_value_t = 5000)]
    delay_ms: u64,
    /// Stop after this many rounds
    #[arg(long)]
    rounds: Option<u32>,
    /// Zero the session's statistics before playing
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fivecard::log()?;
    let args = Args::parse();
    let store = Disk::new(&args.stats_dir, &args.session)?;
    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let mut session = Session::load(store, rng)?.with_delay(Duration::from_millis(args.delay_ms));
    if args.reset {
        session.reset()?;
    }
    let ref mut human = Human;
    let mut played = 0;
    while args.rounds.is_none_or(|n| played < n) {
        if let Err(e) = round(&mut session, human).await {
            log::warn!("[session] {}", e);
            break;
        }
        played += 1;
        println!("{}\n", session.stats().to_string().dimmed());
        if args.rounds.is_some_and(|n| played >= n) {
            break;
        }
        tokio::select! {
            fired = session.advance() => {
                if !fired {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        }
    }
    let stats = session.close()?;
    println!("{}", stats);
    Ok(())
}

async fn round(session: &mut Session<Disk>, human: &mut Human) -> anyhow::Result<()> {
    if session.stats().opponent_first() {
        think().await;
    }
    let outcome = match session.begin()? {
        Opening::Folded(outcome) => outcome,
        Opening::Awaiting(round) => {
            if round.opponent_first() {
                println!("{}", "Opponent calls".yellow());
            }
            println!("Opponent  {}", vec!["??".dimmed().to_string(); fivecard::HAND_SIZE].join(" "));
            println!("Player    {}", paint(round.player()));
            let action = human.decide(&round.table())?;
            session.resolve(round, action)?
        }
    };
    show(&outcome);
    Ok(())
}

async fn think() {
    println!("{}", "Opponent is thinking...".dimmed());
    tokio::time::sleep(fivecard::THINK_DELAY).await;
}

fn show(outcome: &Outcome) {
    let table = outcome.table();
    if let Some(opponent) = table.opponent() {
        println!("Opponent  {}  {}", paint(opponent), outcome.opponent_ranking());
    }
    println!("Player    {}  {}", paint(table.player()), outcome.player_ranking());
    println!("{}", outcome.to_string().bold());
}

fn paint(hand: Hand) -> String {
    hand.cards()
        .iter()
        .map(|card| match card.suit() {
            Suit::Heart | Suit::Diamond => card.to_string().red().to_string(),
            Suit::Club | Suit::Spade => card.to_string().normal().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
