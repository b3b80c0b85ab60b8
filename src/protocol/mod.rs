//! Line-oriented text protocol over the move validator.
//!
//! One command per line on stdin, answers on stdout:
//! `check rook a1 a7` prints `legal`, `moves knight c3` lists destinations,
//! `coordinates` and `pieces` print the constant tables.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{
    all_coordinates, is_legal_move, legal_destinations, Coordinate, Piece, PieceError, PieceKind,
    Square, SquareError,
};

pub mod command;
pub mod options;

use command::{parse_command, Command};
use options::{parse_setoption, ProtocolOptions};

/// Error type for protocol command handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Command is missing arguments
    MissingParts { command: String },
    /// Invalid square argument
    InvalidSquare(SquareError),
    /// Invalid piece argument
    InvalidPiece(PieceError),
    /// `setoption` named an option that does not exist
    UnknownOption(String),
    /// Unrecognized command word
    UnknownCommand(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MissingParts { command } => {
                write!(f, "Missing required parts in {command} command")
            }
            ProtocolError::InvalidSquare(e) => write!(f, "{e}"),
            ProtocolError::InvalidPiece(e) => write!(f, "{e}"),
            ProtocolError::UnknownOption(name) => write!(f, "Unknown option '{name}'"),
            ProtocolError::UnknownCommand(line) => write!(f, "Unknown command '{line}'"),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<SquareError> for ProtocolError {
    fn from(e: SquareError) -> Self {
        ProtocolError::InvalidSquare(e)
    }
}

impl From<PieceError> for ProtocolError {
    fn from(e: PieceError) -> Self {
        ProtocolError::InvalidPiece(e)
    }
}

/// Parse a piece argument: a letter (`N`, `q`), a name (`knight`) or a
/// piece-kind constant name (`WHITE_KNIGHT`).
pub fn parse_piece(s: &str) -> Result<Piece, PieceError> {
    s.parse::<Piece>()
        .or_else(|e| s.parse::<PieceKind>().map(|kind| kind.piece).map_err(|_| e))
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// State carried between commands of one protocol session.
#[derive(Debug, Default)]
pub struct Session {
    pub options: ProtocolOptions,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one command, writing its answer to `out`.
    ///
    /// Command failures are reported on `out` as `error <message>` and do
    /// not end the session; only write failures are returned.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        #[cfg(feature = "logging")]
        log::debug!("command: {command:?}");

        match self.dispatch(command, out) {
            Ok(flow) => Ok(flow),
            Err(CommandFailure::Io(e)) => Err(e),
            Err(CommandFailure::Protocol(e)) => {
                writeln!(out, "error {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(
        &mut self,
        command: Command,
        out: &mut impl Write,
    ) -> Result<Flow, CommandFailure> {
        match command {
            Command::Check(parts) => {
                let (piece, src, dst) = match parts.as_slice() {
                    [_, piece, src, dst, ..] => {
                        (parse_piece(piece)?, parse_square(src)?, parse_square(dst)?)
                    }
                    _ => return Err(missing("check").into()),
                };
                let legal = is_legal_move(piece, src, dst);
                if self.options.verbose {
                    writeln!(
                        out,
                        "info string {piece} {src} -> {dst} rank_distance {} file_distance {}",
                        src.rank_distance(dst),
                        src.file_distance(dst)
                    )?;
                }
                writeln!(out, "{}", if legal { "legal" } else { "illegal" })?;
            }
            Command::Moves(parts) => {
                let (piece, src) = match parts.as_slice() {
                    [_, piece, src, ..] => (parse_piece(piece)?, parse_square(src)?),
                    _ => return Err(missing("moves").into()),
                };
                let destinations = legal_destinations(piece, src);
                writeln!(out, "moves {}", self.join(&destinations))?;
            }
            Command::Coordinates => {
                writeln!(out, "coordinates {}", self.join(all_coordinates()))?;
            }
            Command::Pieces => {
                for kind in PieceKind::ALL {
                    writeln!(out, "piece {} {}", kind.name(), kind.to_char())?;
                }
            }
            Command::SetOption(parts) => {
                let parts_ref: Vec<&str> = parts.iter().map(String::as_str).collect();
                let (name, value) =
                    parse_setoption(&parts_ref).ok_or_else(|| missing("setoption"))?;
                if !self.options.apply_setoption(&name, value.as_deref()) {
                    return Err(ProtocolError::UnknownOption(name).into());
                }
            }
            Command::Options => self.options.print(out)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(line) => return Err(ProtocolError::UnknownCommand(line).into()),
        }
        Ok(Flow::Continue)
    }

    fn join(&self, coordinates: &[Coordinate]) -> String {
        coordinates
            .iter()
            .map(Coordinate::as_str)
            .collect::<Vec<_>>()
            .join(&self.options.separator)
    }
}

enum CommandFailure {
    Io(io::Error),
    Protocol(ProtocolError),
}

impl From<io::Error> for CommandFailure {
    fn from(e: io::Error) -> Self {
        CommandFailure::Io(e)
    }
}

impl From<ProtocolError> for CommandFailure {
    fn from(e: ProtocolError) -> Self {
        CommandFailure::Protocol(e)
    }
}

impl From<SquareError> for CommandFailure {
    fn from(e: SquareError) -> Self {
        CommandFailure::Protocol(e.into())
    }
}

impl From<PieceError> for CommandFailure {
    fn from(e: PieceError) -> Self {
        CommandFailure::Protocol(e.into())
    }
}

fn missing(command: &str) -> ProtocolError {
    ProtocolError::MissingParts {
        command: command.to_string(),
    }
}

fn parse_square(s: &str) -> Result<Square, SquareError> {
    s.parse()
}

/// Read commands from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut session = Session::new();
    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            continue;
        };
        let flow = session.execute(command, out)?;
        out.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Run the protocol on stdin/stdout.
pub fn run_loop() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run(stdin.lock(), &mut stdout) {
        eprintln!("Error: {e}");
    }
}
