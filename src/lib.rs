#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod board;
pub mod client;
pub mod coord;
pub mod force;
pub mod game;
pub mod input;
pub mod network;
pub mod rules;
pub mod server;
pub mod session;
pub mod tui;
