#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_battle::{
    init_logging, outcome_message, render_side_by_side, AiPlayer, CliPlayer, Game, GameConfig,
    Player, Side, TurnReport,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = sea_battle::BOARD_SIZE, help = "Board side length")]
        size: usize,
    },
    /// Watch two computer players fight each other.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = sea_battle::BOARD_SIZE, help = "Board side length")]
        size: usize,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn greet() {
    println!("-------------------");
    println!("    Welcome to     ");
    println!("    sea battle     ");
    println!("-------------------");
    println!(" input format: x y ");
    println!(" x - row number    ");
    println!(" y - column number ");
}

#[cfg(feature = "std")]
fn print_boards(game: &Game, titles: (&str, &str), hide_right: bool) {
    let size = game.board(Side::First).size();
    println!("{}", "-".repeat(size * 10));
    println!(
        "{:<width$}{}",
        titles.0,
        titles.1,
        width = 4 * size + 9
    );
    println!(
        "{}",
        render_side_by_side(game.board(Side::First), game.board(Side::Second), hide_right)
    );
}

#[cfg(feature = "std")]
fn announce(winner: Side, names: (&str, &str)) {
    println!("{}", "-".repeat(20));
    match winner {
        Side::First => println!("{} won!", names.0),
        Side::Second => println!("{} won!", names.1),
    }
}

#[cfg(feature = "std")]
fn play(seed: Option<u64>, size: usize) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let players: [Box<dyn Player>; 2] = [Box::new(CliPlayer::stdio()), Box::new(AiPlayer::new())];
    let mut game = Game::new(&GameConfig::with_size(size), players, &mut rng)?;
    greet();
    let winner = loop {
        if let Some(winner) = game.winner() {
            break winner;
        }
        print_boards(&game, ("Your board:", "Computer board:"), true);
        match game.turn() {
            Side::First => println!("Your turn!"),
            Side::Second => println!("Computer's turn!"),
        }
        game.step(&mut rng)?;
    };
    print_boards(&game, ("Your board:", "Computer board:"), false);
    announce(winner, ("You", "The computer"));
    Ok(())
}

#[cfg(feature = "std")]
fn auto(seed: Option<u64>, size: usize) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let players: [Box<dyn Player>; 2] = [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())];
    let mut game = Game::new(&GameConfig::with_size(size), players, &mut rng)?;
    let winner = loop {
        if let Some(winner) = game.winner() {
            break winner;
        }
        print_boards(&game, ("First board:", "Second board:"), false);
        let TurnReport {
            shooter,
            target,
            outcome,
        } = game.step(&mut rng)?;
        println!("{:?} fires at {}: {}", shooter, target, outcome_message(outcome));
    };
    print_boards(&game, ("First board:", "Second board:"), false);
    announce(winner, ("First player", "Second player"));
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, size } => play(seed, size),
        Commands::Auto { seed, size } => auto(seed, size),
    }
}
