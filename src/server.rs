use std::io;
use std::net::TcpListener;

use log::info;

use crate::force::Force;
use crate::game::Game;
use crate::network;
use crate::session;
use crate::tui;


/// The listening peer. Plays Black and receives first; each round is
/// blocking receive -> apply -> termination check -> local turn -> send.
pub fn run() -> io::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", network::PORT))?;
    info!("Checkers server started. Listening on {}", listener.local_addr()?);

    let (mut stream, addr) = listener.accept()?;
    info!("Connected by {addr}");

    let mut game = Game::new(Force::Black);
    println!("{}", tui::render_board(game.board()));

    loop {
        let Some(remote) = network::recv_turn(&mut stream)? else {
            break;
        };
        session::apply_remote_turn(&mut game, &remote);
        if game.is_over() {
            break;
        }

        let record = session::play_local_turn(&mut game)?;
        network::send_turn(&mut stream, &record)?;
        if game.is_over() {
            break;
        }
    }

    session::announce_result(&game);
    println!("Disconnected");
    Ok(())
}
