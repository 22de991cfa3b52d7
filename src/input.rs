use std::io::{self, BufRead, Write};

use itertools::Itertools;

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};


fn parse_coordinate(line: &str) -> Option<Coord> {
    let (row, col) = line.trim().split(',').map(str::trim).collect_tuple()?;
    let row: u8 = row.parse().ok()?;
    let col: u8 = col.parse().ok()?;
    (row < NUM_ROWS && col < NUM_COLS).then(|| Coord::new(row, col))
}

/// Blocks until the human supplies a well-formed `row,col` pair, reprompting
/// on anything malformed. Only stdin closing escapes as an error.
pub fn read_coordinate(prompt: &str) -> io::Result<Coord> {
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("{prompt}: ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        }
        match parse_coordinate(&line) {
            Some(coord) => return Ok(coord),
            None => println!("Invalid input format. Please provide coordinates in \"row,col\" form."),
        }
    }
}
