//! Terminal front end for the number-string game.
//!
//! The shell keeps no game state of its own: every prompt is derived from
//! `GameEngine::phase`, and the computer replies in a single engine call
//! between player turns.
//!
//! ## Usage
//! `numstring --length 20 --seed 7`, then enter 1-based positions.
//! `reset` abandons the round, `quit` exits.

use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};

use numstring::{GameEngine, GameError, MoveResult, Phase, RoundConfig, Side, StrategyChoice};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OpponentArg {
    /// Re-roll between first and random every turn
    CoinFlip,
    /// Always take the leftmost digit
    First,
    /// Take a uniformly random digit
    Random,
}

impl From<OpponentArg> for StrategyChoice {
    fn from(arg: OpponentArg) -> Self {
        match arg {
            OpponentArg::CoinFlip => StrategyChoice::CoinFlip,
            OpponentArg::First => StrategyChoice::First,
            OpponentArg::Random => StrategyChoice::Random,
        }
    }
}

/// Play the number-string game against the computer.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Digit string length; prompts when omitted
    #[arg(short, long)]
    length: Option<usize>,

    /// RNG seed; a random one is used when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Score both sides start with
    #[arg(long, default_value_t = 100)]
    starting_score: i64,

    /// Opponent policy
    #[arg(long, value_enum, default_value_t = OpponentArg::CoinFlip)]
    strategy: OpponentArg,

    /// Log every move
    #[arg(short, long)]
    verbose: bool,
}

enum Command {
    Quit,
    Reset,
    Input(String),
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = RoundConfig::default()
        .with_seed(seed)
        .with_starting_score(args.starting_score);
    log::info!("seed {seed}");

    let mut engine =
        GameEngine::new(config).with_strategy(StrategyChoice::from(args.strategy).build());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut requested_length = args.length;

    loop {
        match engine.phase() {
            Phase::NotStarted => {
                let length = match requested_length.take() {
                    Some(length) => length,
                    None => {
                        let (min, max) = (engine.config().min_length, engine.config().max_length);
                        match read_command(&mut lines, &format!("String Length ({min}-{max}): "))? {
                            Command::Quit => return Ok(()),
                            Command::Reset => continue,
                            Command::Input(text) => match text.parse() {
                                Ok(length) => length,
                                Err(_) => {
                                    println!("Invalid length. Please enter a number between {min} and {max}.");
                                    continue;
                                }
                            },
                        }
                    }
                };
                match engine.start_round(length) {
                    Ok(_) => print_board(&engine),
                    Err(err) => println!("{err}"),
                }
            }
            Phase::InProgress { turn: Side::Computer } => {
                match engine.computer_move() {
                    Ok(result) => {
                        print_move(&result);
                        print_board(&engine);
                    }
                    Err(err @ GameError::ScoreOverflow { .. }) => {
                        println!("{err}");
                        engine.reset_round();
                    }
                    Err(err) => println!("{err}"),
                }
            }
            Phase::InProgress { turn: Side::Player } => {
                match read_command(&mut lines, "Your move (position): ")? {
                    Command::Quit => return Ok(()),
                    Command::Reset => engine.reset_round(),
                    Command::Input(text) => match engine.submit_player_input(&text) {
                        Ok(result) => {
                            print_move(&result);
                            print_board(&engine);
                        }
                        Err(err @ GameError::InvalidMove { .. }) | Err(err @ GameError::NotPlayerTurn) => {
                            println!("{err}");
                        }
                        Err(err) => {
                            println!("{err}");
                            engine.reset_round();
                        }
                    },
                }
            }
            Phase::Finished => {
                match engine.summary() {
                    Ok(summary) => println!("\nGame Over\n{summary}\n"),
                    Err(err) => println!("{err}"),
                }
                engine.reset_round();
            }
        }
    }
}

fn read_command<B: BufRead>(lines: &mut io::Lines<B>, prompt: &str) -> io::Result<Command> {
    print!("{prompt}");
    io::stdout().flush()?;

    let Some(line) = lines.next() else {
        return Ok(Command::Quit);
    };
    let line = line?;
    Ok(match line.trim() {
        "quit" | "q" => Command::Quit,
        "reset" => Command::Reset,
        text => Command::Input(text.to_string()),
    })
}

fn print_move(result: &MoveResult) {
    let record = &result.record;
    match record.strategy {
        Some(kind) => println!(
            "{} ({kind}) removed {} at position {}",
            record.actor,
            record.digit,
            record.position()
        ),
        None => println!(
            "{} removed {} at position {}",
            record.actor,
            record.digit,
            record.position()
        ),
    }
}

fn print_board(engine: &GameEngine) {
    let Some(state) = engine.state() else {
        return;
    };
    println!();
    println!("  {}", state.digit_string());
    println!(
        "Player Score: {} | Computer Score: {}",
        state.score(Side::Player),
        state.score(Side::Computer)
    );
    if !state.is_finished() {
        println!("{}'s Turn", state.turn());
    }
}
