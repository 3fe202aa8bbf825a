//! Checkers bot arena - runs matches between two bots.
//!
//! Pits two bots (each either random or minimax at a configured depth)
//! against each other for a number of games, alternating colors between
//! games, and prints aggregate statistics.

use checkers_bot::Bot;
use checkers_core::Color;
use checkers_engine::{Game, GameResult};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Runs checkers matches between two bots.
#[derive(Parser)]
#[command(name = "bot-arena")]
#[command(about = "Checkers bot comparison tool")]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long, default_value = "100")]
    num_games: u32,

    /// Search depth of the first bot (0 plays random moves)
    #[arg(long, default_value = "2")]
    bot1: u8,

    /// Search depth of the second bot (0 plays random moves)
    #[arg(long, default_value = "0")]
    bot2: u8,

    /// Starting rows of pieces per player; the board side is 2n+2
    #[arg(long, default_value = "3")]
    start_rows: u8,

    /// RNG seed for reproducible matches
    #[arg(long)]
    seed: Option<u64>,
}

fn describe(depth: u8) -> String {
    if depth == 0 {
        "Random".to_string()
    } else {
        format!("Minimax, depth {depth}")
    }
}

fn percent(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!(
        games = args.num_games,
        bot1 = %describe(args.bot1),
        bot2 = %describe(args.bot2),
        start_rows = args.start_rows,
        "starting match"
    );

    let mut bot1_wins = 0u32;
    let mut bot2_wins = 0u32;
    let mut ties = 0u32;
    let mut total_time = 0.0f64;

    for i in 0..args.num_games {
        // Bot1 takes Light on even games, Dark on odd ones.
        let bot1_color = if i % 2 == 0 { Color::Light } else { Color::Dark };
        let bot1 = Bot::new(args.bot1, bot1_color);
        let bot2 = Bot::new(args.bot2, bot1_color.opposite());

        let start = Instant::now();
        let mut game = Game::new(args.start_rows);
        while game.check_winner().is_none() {
            let mover = if game.turn() == bot1_color { bot1 } else { bot2 };
            if mover.play(&mut game, &mut rng).is_none() {
                break;
            }
        }
        let elapsed = start.elapsed().as_secs_f64();
        total_time += elapsed;

        let result = game.result();
        match result {
            Some(GameResult::LightWins) if bot1_color == Color::Light => bot1_wins += 1,
            Some(GameResult::DarkWins) if bot1_color == Color::Dark => bot1_wins += 1,
            Some(GameResult::LightWins) | Some(GameResult::DarkWins) => bot2_wins += 1,
            Some(GameResult::Draw(_)) | None => ties += 1,
        }
        let outcome = result.map(|r| r.to_string()).unwrap_or_else(|| "unfinished".to_string());
        tracing::info!(game = i + 1, seconds = elapsed, result = %outcome, "game finished");
    }

    let n = args.num_games;
    println!(
        "Bot1 ({}): won {}/{} or {:.1}% of games",
        describe(args.bot1),
        bot1_wins,
        n,
        percent(bot1_wins, n)
    );
    println!(
        "Bot2 ({}): won {}/{} or {:.1}% of games",
        describe(args.bot2),
        bot2_wins,
        n,
        percent(bot2_wins, n)
    );
    println!("Ties: {:.1}%", percent(ties, n));
    if n > 0 {
        println!("Average time per game: {:.3}s", total_time / n as f64);
    }
}
