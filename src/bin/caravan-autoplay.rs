//! Headless self-play: a random human stand-in against the built-in AI.
//!
//! Useful for smoke-testing the engine over many deals. Logs go to stderr
//! (`RUST_LOG` overrides the default `info`); one summary line per game goes
//! to stdout.

use std::sync::Arc;

use clap::Parser;
use tokio::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use caravan_engine::{
    propose_move, run_ai_turn, AiTurnOutcome, ConfigError, GameConfig, GameResult, GameRng,
    GameSession, GameState, InvariantReport, RandomStrategy, Side,
};

#[derive(Debug, Parser)]
#[command(name = "caravan-autoplay")]
#[command(about = "Play Caravan games headlessly against the built-in AI", long_about = None)]
#[command(version)]
struct Args {
    /// Seed for the first game; later games use the following seeds.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop a game after this many committed moves.
    #[arg(long, default_value = "300")]
    max_moves: u32,

    /// Number of games to play.
    #[arg(short, long, default_value = "1")]
    games: u32,
}

/// How a game ended.
#[derive(Debug)]
enum Finish {
    Over(GameResult),
    /// The human stand-in had no legal move.
    Stalled,
    MoveCap,
}

impl std::fmt::Display for Finish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finish::Over(GameResult::Winner(side)) => write!(f, "{side} won"),
            Finish::Over(GameResult::Tie) => write!(f, "tie"),
            Finish::Stalled => write!(f, "stalled"),
            Finish::MoveCap => write!(f, "move cap reached"),
        }
    }
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn play_one(
    config: GameConfig,
    max_moves: u32,
) -> Result<(Finish, GameState, InvariantReport), ConfigError> {
    let mut human_rng = GameRng::from_seed_or_entropy(config.seed).for_context("human");
    let session = Arc::new(Mutex::new(GameSession::new(config)?));
    let mut ai_skips = 0u32;

    let finish = loop {
        let mut guard = session.lock().await;
        let state = guard.state();
        if let Some(result) = state.winner {
            break Finish::Over(result);
        }
        if state.move_count >= max_moves {
            break Finish::MoveCap;
        }

        match state.turn {
            Side::Player => {
                match propose_move(state, Side::Player, &RandomStrategy, &mut human_rng) {
                    Some(mv) => {
                        guard.apply_move(mv);
                    }
                    None => break Finish::Stalled,
                }
            }
            Side::Ai => {
                drop(guard);
                if run_ai_turn(&session, &RandomStrategy).await == Some(AiTurnOutcome::Skipped) {
                    ai_skips += 1;
                }
            }
        }
    };

    tracing::debug!(ai_skips, "game finished");

    let session = session.lock().await;
    Ok((finish, session.state().clone(), session.run_invariants()))
}

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    setup_logging();
    let args = Args::parse();

    let base = GameConfig::default().with_ai_delay_ms(0, 0);
    let first_seed = args.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
    let (min_delay, max_delay) = base.ai_delay_bounds();
    tracing::info!(games = args.games, first_seed, ?min_delay, ?max_delay, "starting autoplay");

    let mut clean = true;
    for game in 0..args.games {
        let seed = first_seed.wrapping_add(u64::from(game));
        let (finish, state, report) = play_one(base.clone().with_seed(seed), args.max_moves).await?;
        clean &= report.is_clean();

        let totals = |side: Side| state.totals(side).piles;
        println!(
            "game {game} seed {seed}: {finish} after {} moves, player {:?} ai {:?}, invariants {}",
            state.move_count,
            totals(Side::Player),
            totals(Side::Ai),
            if report.is_clean() { "ok" } else { "VIOLATED" },
        );
    }

    if !clean {
        tracing::warn!("at least one game broke an invariant");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_names_the_result() {
        assert_eq!(Finish::Over(GameResult::Winner(Side::Ai)).to_string(), "ai won");
        assert_eq!(Finish::Over(GameResult::Tie).to_string(), "tie");
        assert_eq!(Finish::Stalled.to_string(), "stalled");
        assert_eq!(Finish::MoveCap.to_string(), "move cap reached");
    }
}
