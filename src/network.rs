use std::io;

use byteorder::{ByteOrder, LittleEndian};
use log::trace;

use crate::game::TurnRecord;


pub const PORT: u16 = 65433;

fn write_str(writer: &mut impl io::Write, data: &str) -> io::Result<()> {
    let mut buf = [0u8; 4];
    LittleEndian::write_u32(&mut buf, data.len() as u32);
    writer.write_all(&buf)?;
    writer.write_all(data.as_bytes())?;
    Ok(())
}

// `Ok(None)` means the stream ended cleanly before a frame started: the
// peer disconnected. EOF in the middle of a frame is still an error.
fn read_str(reader: &mut impl io::Read) -> io::Result<Option<String>> {
    let mut len_buf = [0u8; 4];
    match reader.read_exact(&mut len_buf) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(err) => return Err(err),
    }
    let len = LittleEndian::read_u32(&len_buf);
    let mut content_buf = vec![0; len as usize];
    reader.read_exact(&mut content_buf)?;
    String::from_utf8(content_buf)
        .map(Some)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

pub fn send_turn(writer: &mut impl io::Write, turn: &TurnRecord) -> io::Result<()> {
    let payload = serde_json::to_string(turn)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    trace!("sending {payload}");
    write_str(writer, &payload)?;
    writer.flush()
}

/// Receives the peer's turn; `None` signals disconnection and the end of
/// the session.
pub fn recv_turn(reader: &mut impl io::Read) -> io::Result<Option<TurnRecord>> {
    let Some(payload) = read_str(reader)? else {
        return Ok(None);
    };
    trace!("received {payload}");
    serde_json::from_str(&payload)
        .map(Some)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}


#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::coord::Coord;

    #[test]
    fn turn_framing() {
        let turn = TurnRecord {
            piece: Coord::new(2, 2),
            moves: vec![Coord::new(4, 4), Coord::new(6, 6)],
        };
        let mut buf = Vec::new();
        send_turn(&mut buf, &turn).unwrap();
        let received = recv_turn(&mut Cursor::new(buf)).unwrap();
        assert_eq!(received, Some(turn));
    }

    #[test]
    fn eof_means_disconnect() {
        assert_eq!(recv_turn(&mut Cursor::new(Vec::new())).unwrap(), None);
    }

    #[test]
    fn truncated_frame_is_an_error() {
        let mut buf = Vec::new();
        write_str(&mut buf, "{\"piece\"").unwrap();
        buf.truncate(6);
        assert!(recv_turn(&mut Cursor::new(buf)).is_err());
    }
}
