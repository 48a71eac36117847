use clap::arg;
use clap::command;
use clap::Command;
use othello_cli::config::{DEFAULT_GAMES_DIR, DEFAULT_OUTPUT_DIR};
use othello_cli::Config;
use othello_core::{Color, Location};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

fn cli() -> Command {
    command!()
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(arg!(
            -d --debug "Print each resulting board to stderr"
        ))
        .arg(
            arg!(
            --"games-dir" <DIR> "Directory holding the save files"
                    )
            .default_value(DEFAULT_GAMES_DIR)
            .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(
            --"output-dir" <DIR> "Directory receiving the drawings"
                    )
            .default_value(DEFAULT_OUTPUT_DIR)
            .value_parser(clap::value_parser!(PathBuf)),
        )
        .subcommand(
            Command::new("new")
                .about("Create a new game with the given name")
                .arg(arg!(<name> "The name of the game (without extension) to create"))
                .arg(arg!(
                    -f --force "Create the game even if it overwrites an existing one"
                )),
        )
        .subcommand(
            Command::new("draw")
                .about("Draw the specified game")
                .arg(arg!(<name> "The name of the game (without extension) to draw")),
        )
        .subcommand(
            Command::new("move")
                .about("Make a move on the specified game")
                .arg(arg!(<name> "The name of the game (without extension) to move in"))
                .arg(
                    arg!(<color> "The colour of the player making the move: w, b, white or black")
                        .value_parser(Color::from_str),
                )
                .arg(
                    arg!(<position> "The cell to play, as <column letter><row number>, e.g. D3")
                        .value_parser(Location::from_str),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    let config = Config {
        games_dir: matches.get_one::<PathBuf>("games-dir").unwrap().clone(),
        output_dir: matches.get_one::<PathBuf>("output-dir").unwrap().clone(),
        debug: matches.get_flag("debug"),
    };
    let mut session = config.session();

    let result = match matches.subcommand() {
        Some(("new", arg_matches)) => {
            let name = arg_matches.get_one::<String>("name").unwrap();
            session.new_game(name, arg_matches.get_flag("force"))
        }
        Some(("draw", arg_matches)) => {
            let name = arg_matches.get_one::<String>("name").unwrap();
            session.draw(name)
        }
        Some(("move", arg_matches)) => {
            let name = arg_matches.get_one::<String>("name").unwrap();
            let color = *arg_matches.get_one::<Color>("color").unwrap();
            let position = *arg_matches.get_one::<Location>("position").unwrap();
            session.make_move(name, color, position)
        }
        _ => unreachable!("a subcommand is required"),
    };

    match result {
        Ok(outcome) => println!("{}", outcome),
        Err(error) => {
            eprintln!("error: {}", error);
            process::exit(1);
        }
    }
}
