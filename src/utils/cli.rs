use std::io;

#[derive(Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Moves(String),   // moves <square>
    Move(String),    // move <from><to>[kind], or just <from><to>[kind]
    Promote(String), // promote <q|r|b|n>
    Board,           // board - print the position
    Log,             // log - print the moves so far
    Restart,         // restart - throw the game away and start over
    Perft(String),   // perft <depth>
    Help,            // help
    Quit,            // quit the program

    Invalid(String), // placeholder for invalid commands so we can pattern match
}

impl ConsoleCommand {
    /// Read one command from stdin; end of input reads as `quit`.
    pub fn receive() -> ConsoleCommand {
        let mut input = String::new();

        match io::stdin().read_line(&mut input) {
            Ok(0) => ConsoleCommand::Quit,
            Ok(_) => ConsoleCommand::parse(&input),
            Err(error) => {
                log::error!("failed to read from stdin: {}", error);
                ConsoleCommand::Quit
            }
        }
    }

    pub fn parse(input: &str) -> ConsoleCommand {
        let parts = input.trim().split_whitespace().collect::<Vec<_>>();

        match parts.as_slice() {
            ["moves", square] => ConsoleCommand::Moves(square.to_string()),
            ["move", notation] => ConsoleCommand::Move(notation.to_string()),
            ["promote", kind] => ConsoleCommand::Promote(kind.to_string()),
            ["board"] => ConsoleCommand::Board,
            ["log"] => ConsoleCommand::Log,
            ["restart"] => ConsoleCommand::Restart,
            ["perft", depth] => ConsoleCommand::Perft(depth.to_string()),
            ["help"] => ConsoleCommand::Help,
            ["quit"] => ConsoleCommand::Quit,
            [notation] if notation.len() == 4 || notation.len() == 5 => {
                ConsoleCommand::Move(notation.to_string())
            }
            _ => ConsoleCommand::Invalid(input.trim().to_string()),
        }
    }
}
