use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{init_logging_with, random_board, AiPlayer, Game, GameConfig, Player};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging_with(log::LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    // Each seed drives its own side's fleet; the first one also drives the shots.
    let config = GameConfig::default();
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let b1 = random_board(&config, &mut rng1).map_err(|e| anyhow::anyhow!(e))?;
    let b2 = random_board(&config, &mut rng2).map_err(|e| anyhow::anyhow!(e))?;

    let players: [Box<dyn Player>; 2] = [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())];
    let mut game = Game::from_boards([b1, b2], players);
    let summary = game.run(&mut rng1)?;

    let result = json!({
        "winner": summary.winner,
        "shots": summary.shots,
        "turns": summary.turns,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
