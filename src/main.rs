use arbiter::controller::{GameController, MoveResultType};
use arbiter::game::{Rules, perft_divide};
use arbiter::utils::ConsoleCommand;
use clap::Parser;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "arbiter",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about = "Play chess against yourself on the console"
)]
struct Args {
    /// Half-moves without a capture or pawn move before the game is drawn
    #[arg(long, default_value_t = 50)]
    fifty_move_limit: u32,

    /// Occurrences of the same placement that draw the game
    #[arg(long, default_value_t = 3)]
    repetition_limit: u32,

    /// Keep playing when neither side has mating material
    #[arg(long)]
    no_material_draws: bool,

    /// Count move paths from the starting position to this depth and exit
    #[arg(long)]
    perft: Option<usize>,
}

const HELP: &str = "\
commands:
  moves <square>     show where the piece on <square> can go
  <from><to>         play a move, e.g. e2e4 (append q/r/b/n to promote)
  promote <q|r|b|n>  choose the promotion piece
  board              print the board
  log                print the moves so far
  perft <depth>      count move paths from the current position
  restart            start a new game
  quit";

fn run_perft(controller: &GameController, depth: usize) {
    let start = Instant::now();
    let breakdown = perft_divide(&controller.board, depth);

    for (notation, count) in &breakdown {
        println!("{}: {}", notation, count);
    }

    let nodes = breakdown.iter().map(|(_, count)| count).sum::<u64>();
    println!("\nNodes: {}", nodes);
    log::info!("perft {} took {:?}", depth, start.elapsed());
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let rules = Rules {
        fifty_move_limit: args.fifty_move_limit,
        repetition_limit: args.repetition_limit,
        insufficient_material: !args.no_material_draws,
    };
    log::debug!("starting with {:?}", rules);

    let mut controller = GameController::new(rules);

    if let Some(depth) = args.perft {
        run_perft(&controller, depth);
        return;
    }

    controller.print();

    loop {
        match ConsoleCommand::receive() {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Help => println!("{}", HELP),
            ConsoleCommand::Board => controller.print(),
            ConsoleCommand::Log => println!("{}", controller.describe_log()),
            ConsoleCommand::Restart => {
                controller.restart();
                controller.print();
            }
            ConsoleCommand::Moves(square) => match controller.get_valid_moves(&square) {
                Some(moves) => {
                    let listed = moves.iter().map(|m| m.unparse()).collect::<Vec<_>>();
                    println!("{}", listed.join(" "));
                    controller.print_with_moves(&moves);
                }
                None => println!("not a square: {}", square),
            },
            ConsoleCommand::Move(notation) => match controller.try_move_piece(&notation) {
                MoveResultType::Success => {
                    controller.print();
                    if let Some(record) = controller.board.move_log().last() {
                        println!("{}", record);
                    }
                }
                MoveResultType::PromotionRequired => {
                    println!("promote to? (promote q|r|b|n)")
                }
                result => log::info!("{:?}", result),
            },
            ConsoleCommand::Promote(kind) => match controller.try_promote(&kind) {
                MoveResultType::Success => controller.print(),
                result => log::info!("{:?}", result),
            },
            ConsoleCommand::Perft(depth) => match depth.parse::<usize>() {
                Ok(depth) => run_perft(&controller, depth),
                Err(_) => println!("not a depth: {}", depth),
            },
            ConsoleCommand::Invalid(input) => {
                println!("unknown command: {} (try help)", input)
            }
        }
    }
}
