#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;
use thiserror::Error;

use crate::{
    common::{BoardError, Coordinate, ShotResult},
    player::Player,
};

/// Why a line of player input is not a target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Enter the shot coordinates!")]
    TokenCount(usize),
    #[error("Enter numbers!")]
    NotANumber(String),
}

/// Parse "row col" (one-based, whitespace separated) into a zero-based
/// coordinate. Range is not checked here; `0 3` becomes `(-1, 2)` and the
/// board rejects it.
pub fn parse_coord(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens[..] else {
        return Err(InputError::TokenCount(tokens.len()));
    };
    Ok(Coordinate::new(parse_index(row)? - 1, parse_index(col)? - 1))
}

fn parse_index(token: &str) -> Result<i32, InputError> {
    if token.is_empty() || !token.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(InputError::NotANumber(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))
}

/// Human player typing targets on a terminal.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player reading from stdin and prompting on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect prompts in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_target(&mut self) -> io::Result<Option<Coordinate>> {
        loop {
            write!(self.output, "Take aim: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_coord(&line) {
                Ok(target) => return Ok(Some(target)),
                Err(e) => writeln!(self.output, " {} ", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng, _board_size: usize) -> Option<Coordinate> {
        match self.read_target() {
            Ok(target) => target,
            Err(e) => {
                log::warn!("reading player input failed: {}", e);
                None
            }
        }
    }

    fn handle_rejected(&mut self, _target: Coordinate, err: &BoardError) {
        let _ = match err {
            BoardError::OutOfBounds(_) => writeln!(self.output, "Don't shoot off the board!"),
            BoardError::AlreadyTargeted(_) => {
                writeln!(self.output, "You already fired at that cell!")
            }
            other => writeln!(self.output, "{}", other),
        };
    }

    fn handle_shot_result(&mut self, target: Coordinate, result: ShotResult) {
        log::debug!("player shot {} -> {:?}", target, result);
    }
}
