use std::io;

use clap::{arg, Command};

use netcheckers::client::{self, ClientConfig};
use netcheckers::server;


fn main() -> io::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Checkers")
        .version(clap::crate_version!())
        .about("Two-player networked checkers, played in the terminal")
        .subcommand_required(true)
        .subcommand(Command::new("server").about("Host a game and wait for an opponent"))
        .subcommand(
            Command::new("client").about("Join a hosted game").arg(
                arg!([server_address] "Server address").default_value("127.0.0.1"),
            ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("server", _)) => server::run(),
        Some(("client", sub)) => {
            let server_address = sub
                .get_one::<String>("server_address")
                .cloned()
                .unwrap_or_else(|| "127.0.0.1".to_owned());
            client::run(ClientConfig { server_address })
        }
        _ => unreachable!("subcommand_required"),
    }
}
