// Replay a recorded game through the engine, offline.
//
// Reads the setup line and then one state line per tick from stdin, and
// prints the command the engine would send for each.
//
//   cargo run --example replay -- --policy greedy < game.txt

use std::env;
use std::io::{self, BufRead};

use evasion_hunter::decision::{GreedyWallPolicy, Policy, RandomPolicy};
use evasion_hunter::{EngineConfig, EngineError, Player};

fn main() {
    let args: Vec<String> = env::args().collect();
    let policy_name = arg_value(&args, "--policy").unwrap_or("greedy");
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let config = EngineConfig::default();
    let policy: Box<dyn Policy> = match policy_name {
        "random" => Box::new(RandomPolicy::seeded(config.action_dim(), seed)),
        "greedy" => Box::new(GreedyWallPolicy::new()),
        other => {
            eprintln!("Unknown --policy '{}'; expected 'greedy' or 'random'.", other);
            std::process::exit(2);
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines().map_while(Result::ok);

    let Some(setup) = lines.next() else {
        eprintln!("No setup line on stdin.");
        std::process::exit(2);
    };
    let mut player = match Player::from_setup(&setup, config, policy) {
        Ok(player) => player,
        Err(e) => {
            eprintln!("Bad setup line: {}", e);
            std::process::exit(2);
        }
    };

    for line in lines {
        match player.respond(&line) {
            Ok(Some(command)) => println!("{}", command),
            Ok(None) => break,
            Err(EngineError::UnknownVelocity(v)) => {
                eprintln!("No prey response for {}; sending none", v);
                println!("none");
            }
            Err(e) => {
                eprintln!("Skipping line: {}", e);
                println!("none");
            }
        }
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
