//! Line-oriented interactive front end over a [`Session`].
//!
//! Lines starting with `/` are commands; anything else is a follow-up
//! question. Failures are reported inline and the loop keeps going.
use std::path::{Path, PathBuf};

use anyhow::Context;
use neuroassess_core::provider::CompletionProvider;
use neuroassess_types::patient::PatientRecord;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::session::Session;

pub const HELP: &str = "\
Commands:
  /analyze <file>  analyze the patient record stored in <file> (JSON)
  /history         show the analysis transcript and the follow-up chat
  /clear           clear the follow-up chat (the analysis is kept)
  /reset           forget everything, including the analysis
  /help            show this help
  /quit            leave
Any other input is sent as a follow-up question.
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Analyze(PathBuf),
    History,
    Clear,
    Reset,
    Help,
    Quit,
    Ask(String),
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Empty);
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Command::Ask(line.to_owned()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        match (name, arg) {
            ("analyze", "") => Err("usage: /analyze <file>".into()),
            ("analyze", path) => Ok(Command::Analyze(PathBuf::from(path))),
            ("history", _) => Ok(Command::History),
            ("clear", _) => Ok(Command::Clear),
            ("reset", _) => Ok(Command::Reset),
            ("help", _) => Ok(Command::Help),
            ("quit" | "exit", _) => Ok(Command::Quit),
            (other, _) => Err(format!("unknown command `/{other}`; try /help")),
        }
    }
}

/// Read a patient record from a JSON file.
pub async fn load_record(path: &Path) -> anyhow::Result<PatientRecord> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    PatientRecord::from_json(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Drive `session` from `input` until end of input or `/quit`.
pub async fn run<B, R, W>(session: &mut Session<B>, input: R, mut out: W) -> std::io::Result<()>
where
    B: CompletionProvider,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    out.write_all(b"Type /help for commands.\n").await?;

    loop {
        out.write_all(b"> ").await?;
        out.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                write_line(&mut out, &message).await?;
                continue;
            }
        };
        debug!(?command, "repl command");

        match command {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => out.write_all(HELP.as_bytes()).await?,
            Command::Clear => {
                session.clear_chat();
                write_line(&mut out, "Follow-up chat cleared.").await?;
            }
            Command::Reset => {
                session.reset();
                write_line(&mut out, "Session reset.").await?;
            }
            Command::History => {
                let analysis = session.transcript().history();
                let chat = session.chat_log().history();
                write_line(&mut out, "== Analysis transcript ==").await?;
                write_line(&mut out, or_empty(&analysis)).await?;
                write_line(&mut out, "== Follow-up chat ==").await?;
                write_line(&mut out, or_empty(&chat)).await?;
            }
            Command::Analyze(path) => {
                let record = match load_record(&path).await {
                    Ok(record) => record,
                    Err(err) => {
                        write_line(&mut out, &format!("error: {err:#}")).await?;
                        continue;
                    }
                };
                match session.analyze(&record).await {
                    Ok(report) => write_line(&mut out, report.as_str()).await?,
                    Err(err) => write_line(&mut out, &format!("error: {err}")).await?,
                }
            }
            Command::Ask(question) => match session.ask(&question).await {
                Ok(answer) => write_line(&mut out, answer).await?,
                Err(err) => write_line(&mut out, &format!("error: {err}")).await?,
            },
        }
    }

    out.flush().await
}

fn or_empty(text: &str) -> &str {
    if text.is_empty() { "(empty)" } else { text }
}

async fn write_line<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> std::io::Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.write_all(b"\n").await
}
