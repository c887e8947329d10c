//! Interactive session loop.
//!
//! Reads one command per line, dispatches it to the handlers and prints the
//! result. The book is saved when the user exits, when input ends, when
//! reading input fails, or when the interrupt future resolves (Ctrl-C in the
//! binary). Bytes that are not valid UTF-8 are replaced, not treated as fatal.

use crate::error::SessionResult;
use crate::handlers::{handle_add, handle_change, handle_phone, handle_show_all};
use crate::models::AddressBook;
use crate::storage::save_data;
use std::future::Future;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

pub const PROMPT: &str = "Enter command: ";
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a command.";
pub const UNKNOWN_COMMAND_MESSAGE: &str =
    "Unknown command. Available commands: add, change, phone, all, exit";

/// A command keyword understood by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Change,
    Phone,
    All,
    /// `exit`, `close` or `quit`
    Exit,
    Unknown(String),
}

impl Command {
    /// Map an already-lowercased keyword to a command.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "exit" | "close" | "quit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Split a line into a lowercased keyword and its positional arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let keyword = parts.next()?.to_lowercase();
    Some((keyword, parts.collect()))
}

/// What the loop should do after one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Exit,
}

/// Run one line against the book.
pub fn dispatch(line: &str, book: &mut AddressBook) -> Outcome {
    let Some((keyword, args)) = parse_input(line) else {
        return Outcome::Reply(EMPTY_INPUT_MESSAGE.to_string());
    };

    let command = Command::from_keyword(&keyword);
    debug!(?command, args = args.len(), "Dispatching command");

    let reply = match command {
        Command::Add => handle_add(&args, book),
        Command::Change => handle_change(&args, book),
        Command::Phone => handle_phone(&args, book),
        Command::All => handle_show_all(book),
        Command::Exit => return Outcome::Exit,
        Command::Unknown(_) => UNKNOWN_COMMAND_MESSAGE.to_string(),
    };
    Outcome::Reply(reply)
}

/// A prompt/response session over an input reader and an output writer.
pub struct Session<R, W> {
    input: R,
    line_buf: Vec<u8>,
    output: W,
    book: AddressBook,
    data_path: PathBuf,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W, book: AddressBook, data_path: impl Into<PathBuf>) -> Self {
        Self {
            input,
            line_buf: Vec::new(),
            output,
            book,
            data_path: data_path.into(),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    async fn say(&mut self, message: &str) -> SessionResult<()> {
        self.output.write_all(message.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn prompt(&mut self) -> SessionResult<()> {
        self.output.write_all(PROMPT.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    fn save(&self) -> SessionResult<()> {
        save_data(&self.book, &self.data_path)?;
        Ok(())
    }

    /// Print the startup banner for the loaded book.
    pub async fn greet(&mut self) -> SessionResult<()> {
        let loaded = format!("Loaded {} contact(s).", self.book.len());
        self.say(&loaded).await
    }

    async fn finish(&mut self) -> SessionResult<()> {
        self.say("Saving data...").await?;
        self.save()?;
        self.say("Goodbye!").await
    }

    /// Run until exit, end of input, or `interrupt` resolves. Saves before returning.
    pub async fn run<F>(&mut self, interrupt: F) -> SessionResult<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(interrupt);

        loop {
            self.prompt().await?;

            // read_until keeps partial bytes in line_buf if the interrupt wins
            let read = tokio::select! {
                read = self.input.read_until(b'\n', &mut self.line_buf) => read,
                _ = &mut interrupt => {
                    info!("Interrupted, saving address book");
                    self.say("\nForce exit. Saving data...").await?;
                    return self.save();
                }
            };

            match read {
                Ok(0) => {
                    info!("Input closed, saving address book");
                    self.say("").await?;
                    return self.finish().await;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "Reading input failed, saving address book");
                    self.save()?;
                    return Err(e.into());
                }
            }

            let line = String::from_utf8_lossy(&self.line_buf).into_owned();
            self.line_buf.clear();

            match dispatch(&line, &mut self.book) {
                Outcome::Reply(reply) => self.say(&reply).await?,
                Outcome::Exit => return self.finish().await,
            }
        }
    }
}
