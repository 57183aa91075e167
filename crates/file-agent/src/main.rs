//! A small program that drives the file tools from the terminal.
//!
//! `file-agent schema` prints the tool definitions as JSON. Without
//! arguments, the program reads one JSON tool call per line from stdin,
//! asks for approval, runs it, and prints the outcome. For example:
//!
//! ```text
//! {"name": "create_directory", "arguments": {"working_directory": "/tmp/sandbox", "directory_path": "x/y"}}
//! ```
//!
//! Set `FILE_AGENT_AUTO_APPROVE=1` when piping calls in, since approval
//! answers are read from the same stdin.

#[macro_use]
extern crate tracing;

use std::env;
use std::io::Write as _;
use std::process::ExitCode;

use file_agent::core::ToolCall;
use file_agent::core::tool::Approval as ToolApproval;
use file_agent::{Toolset, ToolsetBuilder, ToolsetConfig};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufReadExt, BufReader, Stdin};
use tokio::select;
use tokio::sync::mpsc;

const BAR_CHAR: &str = "▎";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = ToolsetConfig::from_env();
    debug!("loaded config: {config:?}");

    let (approval_tx, mut approval_rx) = mpsc::unbounded_channel();
    let toolset = ToolsetBuilder::with_config(config)
        .on_tool_call_request(move |approval| {
            approval_tx.send(approval).ok();
        })
        .build();

    match env::args().nth(1).as_deref() {
        None => {}
        Some("schema") => return print_schema(&toolset),
        Some(other) => {
            eprintln!("unknown command: {other}");
            eprintln!("usage: file-agent [schema]");
            return ExitCode::from(2);
        }
    }

    let mut stdin = BufReader::new(io::stdin());

    'outer: loop {
        eprint!("> ");
        std::io::stderr().flush().ok();

        let Some(line) = read_line(&mut stdin).await else {
            break;
        };
        let call = match parse_call(&line) {
            None => continue,
            Some(Ok(call)) => call,
            Some(Err(err)) => {
                eprintln!("{} {err}", "invalid tool call:".bright_red());
                continue;
            }
        };
        let id = call.id.clone();

        let mut pending = toolset.call(call);
        let result = loop {
            select! {
                result = &mut pending => break result,
                Some(approval) = approval_rx.recv() => {
                    if !ask_approval(approval, &mut stdin).await {
                        break 'outer;
                    }
                }
            }
        };

        let bar = BAR_CHAR.bright_cyan();
        let id = if id.is_empty() { id } else { format!("[{id}] ") };
        match result {
            Ok(output) => println!("{bar}{id}ok: {}", output.bright_white()),
            Err(err) => println!("{bar}{id}error: {}", err.reason().red()),
        }
    }

    ExitCode::SUCCESS
}

fn print_schema(toolset: &Toolset) -> ExitCode {
    match serde_json::to_string_pretty(&toolset.definitions()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("failed to serialize tool definitions: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Prompts for an approval. Returns `false` if stdin is closed, in which
/// case the request is rejected.
async fn ask_approval(
    approval: ToolApproval,
    stdin: &mut BufReader<Stdin>,
) -> bool {
    let bar = BAR_CHAR.bright_yellow();
    eprintln!("\n{bar}⚠️  {}:", approval.justification());
    eprintln!("{bar}{}", approval.what().bright_white().bold());
    eprint!("Proceed? [Y/n]: ");
    std::io::stderr().flush().ok();

    let Some(line) = read_line(stdin).await else {
        approval.reject(Some("No answer from the user".to_owned()));
        return false;
    };
    if is_approval(&line) {
        approval.approve();
    } else {
        approval.reject(None);
    }
    true
}

/// Parses one input line as a tool call. Blank lines yield `None`.
fn parse_call(line: &str) -> Option<serde_json::Result<ToolCall>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(serde_json::from_str(line))
}

/// An empty answer or `y` approves, anything else rejects.
fn is_approval(answer: &str) -> bool {
    let answer = answer.trim();
    answer.is_empty() || answer.eq_ignore_ascii_case("y")
}

async fn read_line(stdin: &mut BufReader<Stdin>) -> Option<String> {
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
