#![cfg(feature = "std")]

//! Console front end: banner, board printing and the interactive loop.

use std::io::Write;

use crate::game::{Game, GameError, Side};

const DIVIDER: &str = "--------------------";

/// Print the greeting and the input format.
pub fn print_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "-------------------")?;
    writeln!(out, "     Sea Battle    ")?;
    writeln!(out, "-------------------")?;
    writeln!(out, " input format: x y ")?;
    writeln!(out, " x - row number    ")?;
    writeln!(out, " y - column number ")
}

/// Print the user's board (ships shown) above the computer's (ships hidden).
pub fn print_boards<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    writeln!(out, "{}", DIVIDER)?;
    writeln!(out, "Your board:")?;
    writeln!(out, "{}", game.user_board())?;
    writeln!(out, "{}", DIVIDER)?;
    writeln!(out, "Computer's board:")?;
    writeln!(out, "{}", game.computer_board())
}

/// Run `game` to the end, narrating every move on `out`.
///
/// A player that abandons the game ends the loop with
/// [`GameError::Abandoned`].
pub fn run_console<W: Write>(game: &mut Game, out: &mut W) -> anyhow::Result<Side> {
    print_banner(out)?;
    loop {
        if let Some(winner) = game.winner() {
            writeln!(out, "{}", DIVIDER)?;
            print_boards(out, game)?;
            writeln!(out, "{}", DIVIDER)?;
            match winner {
                Side::User => writeln!(out, "You win!")?,
                Side::Computer => writeln!(out, "The computer wins!")?,
            }
            return Ok(winner);
        }

        print_boards(out, game)?;
        writeln!(out, "{}", DIVIDER)?;
        match game.current_side() {
            Some(Side::User) => writeln!(out, "Your move!")?,
            Some(Side::Computer) => writeln!(out, "Computer's move!")?,
            None => return Err(GameError::Finished.into()),
        }
        out.flush()?;

        let mv = game.step()?;
        if mv.side == Side::Computer {
            writeln!(out, "Computer fires at: {}", mv.target)?;
        }
        writeln!(out, "{}", mv.result)?;
    }
}
