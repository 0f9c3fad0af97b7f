//////////////////////////
// main.rs
//////////////////////////

// Local hot-seat front end: two players share a terminal, and the board is
// shown from the configured perspective after every command.

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::io::{self, BufRead, Write};

use fog_chess::api::{PerspectiveRequest, Session};
use fog_chess::config::GameConfig;
use fog_chess::types::*;

fn print_help() {
    println!("Commands:");
    println!("  'e2 e4' or 'e2e4'  - Move a piece");
    println!("  'moves e2'         - List where the piece on e2 can go");
    println!("  'view audience'    - Show every piece");
    println!("  'view white|black' - Show the board through one player's fog");
    println!("  'view turn'        - Follow whoever is to move");
    println!("  'board'            - Show the board again");
    println!("  'reset'            - Start a new game");
    println!("  'quit'             - Exit the program");
}

fn parse_move_input(input: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts.as_slice() {
        [from, to] => Some((from.to_string(), to.to_string())),
        [both] if both.len() == 4 && both.is_ascii() => {
            Some((both[0..2].to_string(), both[2..4].to_string()))
        }
        _ => None,
    }
}

fn parse_view(name: &str) -> Option<PerspectiveRequest> {
    match name {
        "turn" | "to_move" => Some(PerspectiveRequest::ToMove),
        other => other.parse::<Perspective>().ok().map(PerspectiveRequest::from),
    }
}

/// One terminal's game plus how it wants boards printed.
struct Terminal {
    session: Session,
    colored: bool,
}

impl Terminal {
    fn new(config: &GameConfig) -> Self {
        Terminal {
            session: Session::new(config),
            colored: config.colored_output,
        }
    }

    fn show_board(&self) {
        let engine = self.session.engine();
        let perspective = self.session.view().resolve(engine.side_to_move());
        let board = engine.get_board(perspective);
        println!("\n{} {}", "Viewing as".bright_black(), perspective.to_string().bold());
        if self.colored {
            print!("{}", board);
        } else {
            print!("{}", board.to_plain_string());
        }
        match engine.get_game_state().winner() {
            Some(color) => {
                let banner = format!("{} captured the king and wins!", color);
                println!("{}", banner.green().bold());
            }
            None => println!("{}'s turn", engine.side_to_move()),
        }
    }

    fn list_moves(&self, target: &str) {
        let square = match Square::from_algebraic(target) {
            Ok(square) => square,
            Err(e) => {
                println!("{}", e.to_string().red());
                return;
            }
        };
        let engine = self.session.engine();
        match engine.board_state().cell_at(square) {
            Some(piece) if piece.color == engine.side_to_move() => {
                let mut dests: Vec<Square> =
                    engine.legal_destinations(square).into_iter().collect();
                dests.sort();
                let names: Vec<String> = dests.iter().map(Square::to_algebraic).collect();
                if names.is_empty() {
                    println!("{} has no moves", square);
                } else {
                    println!("{} -> {}", square, names.join(" "));
                }
            }
            _ => println!("{}", "You have no piece there".red()),
        }
    }

    /// Runs one line of input. Returns false when the player wants to leave.
    fn handle_command(&mut self, input: &str) -> bool {
        match input {
            "quit" | "exit" => return false,
            "help" => print_help(),
            "board" => self.show_board(),
            "reset" => {
                println!("{}", self.session.reset().message);
                self.show_board();
            }
            cmd if cmd.starts_with("view ") => {
                match parse_view(cmd.trim_start_matches("view ").trim()) {
                    Some(view) => {
                        self.session.set_view(view);
                        self.show_board();
                    }
                    None => {
                        println!("{}", "Unknown view. Use audience, white, black or turn".red())
                    }
                }
            }
            cmd if cmd.starts_with("moves ") => {
                self.list_moves(cmd.trim_start_matches("moves ").trim());
            }
            cmd => match parse_move_input(cmd) {
                Some((from, to)) => match self.session.engine_mut().try_move(&from, &to) {
                    Ok(record) => {
                        if let Some(captured) = record.piece_captured {
                            println!(
                                "{} captures {:?} on {}",
                                record.piece_moved.color, captured.piece_type, record.to
                            );
                        }
                        self.show_board();
                    }
                    Err(e) => println!("{} {}", "Invalid move:".red(), e),
                },
                None => println!("Unknown command, type 'help' for a list"),
            },
        }
        true
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::load_from_env().context("loading game config")?;
    if !config.colored_output {
        colored::control::set_override(false);
    }
    info!("Starting with rules {:?}", config.rules);

    ctrlc::set_handler(|| {
        println!("\nGoodbye!");
        std::process::exit(0);
    })
    .context("installing Ctrl+C handler")?;

    println!("{}", "Fog of War Chess".bold());
    print_help();

    let mut terminal = Terminal::new(&config);
    terminal.show_board();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\n> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if !terminal.handle_command(input) {
            break;
        }
    }

    println!("Goodbye!");
    Ok(())
}
