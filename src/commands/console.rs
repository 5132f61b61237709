//! Line-oriented human participant

use crate::core::{Board, Move, MoveRequest, Rack};
use crate::game::Participant;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::warn;

/// Reads moves from `input`, prompting and reporting on `output`
///
/// Re-prompts until the line is both well formed and playable. End of input
/// (or a read error) is taken as a pass and marks the console closed.
#[derive(Debug)]
pub struct ConsoleHuman<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl ConsoleHuman<StdinLock<'static>, Stdout> {
    /// Human at the terminal
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleHuman<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// Input has run out; every further turn is a pass
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until a legal move is entered
    ///
    /// # Errors
    /// Only I/O failures on `output`.
    pub fn read_move(&mut self, board: &Board, rack: &Rack) -> io::Result<Move> {
        loop {
            let Some(line) = self.prompt(rack)? else {
                self.closed = true;
                writeln!(self.output, "\nNo more input; passing.")?;
                return Ok(Move::Pass);
            };

            let request = match MoveRequest::parse(&line) {
                Ok(request) => request,
                Err(e) => {
                    writeln!(self.output, "Illegal move format: {e}")?;
                    continue;
                }
            };

            match request.resolve(board, rack) {
                Ok(mv) => return Ok(mv),
                Err(e) => writeln!(self.output, "Illegal move: {e}")?,
            }
        }
    }

    /// One prompt and one line of input; `None` at end of input
    fn prompt(&mut self, rack: &Rack) -> io::Result<Option<String>> {
        writeln!(self.output, "Your tiles: {rack}")?;
        writeln!(
            self.output,
            "Please enter your move in the format \"word,square\" (without the quotes)."
        )?;
        writeln!(
            self.output,
            "For example, \"HI,f4\" plays down from f4 and \"HI,4f\" plays across from f4."
        )?;
        writeln!(self.output, "Lowercase letters use a wildcard. Entering \",\" passes the turn.")?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line.trim().to_string())),
            Err(e) => {
                warn!(error = %e, "failed to read move");
                Ok(None)
            }
        }
    }
}

impl<R: BufRead, W: Write> Participant for ConsoleHuman<R, W> {
    fn take_turn(&mut self, board: &Board, rack: &Rack) -> Move {
        if self.closed {
            return Move::Pass;
        }
        self.read_move(board, rack).unwrap_or_else(|e| {
            warn!(error = %e, "console output failed; passing");
            self.closed = true;
            Move::Pass
        })
    }
}
