use std::io;
use std::net::TcpStream;

use log::info;

use crate::force::Force;
use crate::game::Game;
use crate::network;
use crate::session;
use crate::tui;


pub struct ClientConfig {
    pub server_address: String,
}

/// The connecting peer. Plays Red and moves first; each round is
/// local turn -> send -> blocking receive -> apply -> termination check.
pub fn run(config: ClientConfig) -> io::Result<()> {
    println!("## Welcome to Checkers! ##");
    info!("Connecting to {}...", config.server_address);
    let mut stream = TcpStream::connect((config.server_address.as_str(), network::PORT))?;
    info!("Connected to {}", stream.peer_addr()?);

    let mut game = Game::new(Force::Red);
    println!("{}", tui::render_board(game.board()));

    loop {
        let record = session::play_local_turn(&mut game)?;
        if game.is_over() {
            break;
        }
        network::send_turn(&mut stream, &record)?;

        let Some(remote) = network::recv_turn(&mut stream)? else {
            break;
        };
        session::apply_remote_turn(&mut game, &remote);
        if game.is_over() {
            break;
        }
    }

    session::announce_result(&game);
    println!("Disconnected");
    Ok(())
}
