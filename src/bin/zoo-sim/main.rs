//! Headless AI-vs-AI simulator.
//!
//! Usage: zoo-sim [--games N] [--seed S] [--random-seats SEAT]...
//!
//! Every seat is played by the heuristic AI unless listed in
//! `--random-seats`. Set `RUST_LOG=franks_zoo=debug` to see every move.

use std::sync::mpsc;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use franks_zoo::{
    AiConfig, Game, GameAi, GameEvent, GameRng, HeuristicAi, PlayerId, PlayerMap, RandomAi,
    PLAYER_COUNT,
};

/// Games that have not ended after this many turns are abandoned.
const MAX_TURNS: usize = 2_000;

#[derive(Parser)]
#[command(name = "zoo-sim")]
#[command(about = "Play Frank's Zoo games between computer players")]
#[command(version)]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long = "games", default_value_t = 100)]
    games: u64,

    /// Seed of the first game; game i uses seed + i
    #[arg(short = 's', long = "seed", default_value_t = 0)]
    seed: u64,

    /// Seats played by the random AI instead of the heuristic AI
    #[arg(short = 'r', long = "random-seats", value_parser = clap::value_parser!(u8).range(0..4))]
    random_seats: Vec<u8>,
}

/// Play one game to the end and return the seats in finishing order.
fn play_game(seed: u64, random_seats: &[PlayerId], config: &AiConfig) -> Option<Vec<PlayerId>> {
    let mut rng = GameRng::new(seed);
    let mut game = Game::deal(&mut rng);
    let mut ai_rng = rng.fork();

    let (tx, rx) = mpsc::channel();
    game.set_listener(Box::new(tx));

    let mut turns = 0;
    while !game.ended() {
        if turns == MAX_TURNS {
            warn!(seed, turns, "game stalled, abandoning");
            return None;
        }
        turns += 1;

        let seat = game.current_turn();
        let mv = if random_seats.contains(&seat) {
            RandomAi::new(&game, seat, ai_rng.fork()).next_move()
        } else {
            HeuristicAi::with_config(&game, seat, config.clone())
                .with_rng(ai_rng.fork())
                .next_move()
        };
        debug!(%seat, %mv, "ai move");

        if !game.make_move(&mv) {
            warn!(seed, %seat, %mv, "ai produced a rejected move");
            return None;
        }
    }

    let mut order: Vec<PlayerId> = rx
        .try_iter()
        .filter_map(|event| match event {
            GameEvent::PlayerWon { seat, .. } => Some(seat),
            GameEvent::TurnChanged { .. } => None,
        })
        .collect();
    let last: Vec<PlayerId> = PlayerId::all(PLAYER_COUNT)
        .filter(|seat| !order.contains(seat))
        .collect();
    order.extend(last);

    info!(seed, turns, "game finished");
    Some(order)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "franks_zoo=info".into()),
        )
        .init();

    let args = Args::parse();
    let random_seats: Vec<PlayerId> = args.random_seats.iter().copied().map(PlayerId::new).collect();
    let config = AiConfig::default().with_seed(args.seed);

    let mut first_places: PlayerMap<u64> = PlayerMap::with_value(PLAYER_COUNT, 0);
    let mut abandoned = 0u64;

    for i in 0..args.games {
        let seed = args.seed.wrapping_add(i);
        match play_game(seed, &random_seats, &config) {
            Some(order) => {
                let names: Vec<String> = order.iter().map(ToString::to_string).collect();
                println!("game {} (seed {}): {}", i, seed, names.join(", "));
                first_places[order[0]] += 1;
            }
            None => abandoned += 1,
        }
    }

    println!();
    println!("First places after {} games:", args.games);
    for (seat, wins) in first_places.iter() {
        let kind = if random_seats.contains(&seat) { "random" } else { "heuristic" };
        println!("  {} ({}): {}", seat, kind, wins);
    }
    if abandoned > 0 {
        println!("  abandoned: {}", abandoned);
    }
}
