extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::config::Config;
use crate::lang::Column;
use crate::mach::{function, Event, History, Runtime};
use ansi_term::Colour::{Blue, Red, Yellow};
use ansi_term::Style;
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Signal, Terminal};
use std::io::{BufRead, IsTerminal, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

const COMMANDS: [&str; 8] = ["history", "clear", "cls", "ls", "la", "func", "exit", "quit"];

/// Parsing and evaluation recurse on the tree.
const SESSION_STACK_SIZE: usize = 64 * 1024 * 1024;

pub fn main() {
    let spawned = std::thread::Builder::new()
        .name("calc-session".to_string())
        .stack_size(SESSION_STACK_SIZE)
        .spawn(session);
    match spawned {
        Ok(handle) => {
            if handle.join().is_err() {
                std::process::exit(1);
            }
        }
        Err(error) => eprintln!("Unable to start session: {}", error),
    }
}

fn session() {
    let config = Config::from_env();
    init_logging(config.log_level);
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    let mut runtime = Runtime::new(config);
    if let Some(path) = runtime.config().history_file.clone() {
        runtime.set_history(load_history(&path));
    }
    let result = if std::io::stdin().is_terminal() {
        interactive_loop(&mut runtime, interrupted)
    } else {
        batch_loop(&mut runtime)
    };
    if let Err(error) = result {
        eprintln!("{}", error);
    }
    if let Some(path) = runtime.config().history_file.clone() {
        if let Err(error) = save_history(&path, runtime.history()) {
            eprintln!("{}", Yellow.paint(format!("Unable to save history: {}", error)));
        }
    }
}

/// Compact `LEVEL message` lines on stderr.
fn init_logging(level: LevelFilter) {
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(level);
    Registry::default().with(layer).init();
}

fn interactive_loop(runtime: &mut Runtime, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let interface = Interface::new("calc")?;
    interface.set_report_signal(Signal::Interrupt, true);
    interface.set_prompt(&prompt())?;
    for line in runtime.history().iter() {
        interface.add_history(line.clone());
    }
    loop {
        interface.set_completer(Arc::new(NameCompleter::new(runtime)));
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(Signal::Interrupt) => {
                interface.set_buffer("")?;
                interface.write_fmt(format_args!("{}\n", exit_warning()))?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let event = runtime.enter(&string);
        if runtime.history().last() == Some(string.trim()) {
            interface.add_history_unique(string.trim().to_string());
        }
        match event {
            Event::Stopped => {
                if runtime.history().is_empty() {
                    interface.clear_history();
                }
            }
            Event::Result(s) => interface.write_fmt(format_args!("{}\n", s))?,
            Event::Print(s) => interface.write_fmt(format_args!("{}", s))?,
            Event::Error(error) => interface.write_fmt(format_args!(
                "{}\n  {}\n",
                Style::new().bold().paint(error.to_string()),
                decorate_error(string.trim(), &error.column())
            ))?,
            Event::ClearScreen => clear_screen(),
            Event::Exit => break,
        }
        if interrupted.swap(false, Ordering::SeqCst) {
            interface.write_fmt(format_args!("{}\n", exit_warning()))?;
        }
    }
    Ok(())
}

fn batch_loop(runtime: &mut Runtime) -> std::io::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        match runtime.enter(&line) {
            Event::Stopped | Event::ClearScreen => {}
            Event::Result(s) => writeln!(stdout, "{}", s)?,
            Event::Print(s) => write!(stdout, "{}", s)?,
            Event::Error(error) => writeln!(stdout, "{}\n  {}", error, line.trim())?,
            Event::Exit => break,
        }
    }
    stdout.flush()
}

/// Escape sequences are wrapped in `\x01`/`\x02` so the editor does not
/// count them toward the prompt width.
fn prompt() -> String {
    let tag = Style::new().on(Blue);
    format!("\x01{}\x02 Calc \x01{}\x02 ", tag.prefix(), tag.suffix())
}

/// The failed line in red with the offending column underlined.
fn decorate_error(line: &str, column: &Column) -> String {
    let chars: Vec<char> = line.chars().collect();
    let end = column.end.min(chars.len());
    let start = column.start.min(end);
    let before: String = chars[..start].iter().collect();
    let marked: String = chars[start..end].iter().collect();
    let after: String = chars[end..].iter().collect();
    if marked.is_empty() {
        return Red.paint(line).to_string();
    }
    format!(
        "{}{}{}",
        Red.paint(before),
        Red.underline().paint(marked),
        Red.paint(after)
    )
}

fn exit_warning() -> String {
    Yellow.paint("Use `exit` or `quit` to exit").to_string()
}

fn clear_screen() {
    let result = mortal::Terminal::new().and_then(|terminal| terminal.clear_screen());
    if let Err(error) = result {
        debug!(%error, "clear screen failed");
    }
}

/// Newest first on disk, oldest first in memory.
fn load_history(path: &Path) -> History {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => return History::default(),
    };
    match serde_json::from_str::<Vec<String>>(&text) {
        Ok(mut lines) => {
            lines.reverse();
            History::from_lines(lines)
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "ignoring unreadable history file");
            History::default()
        }
    }
}

fn save_history(path: &Path, history: &History) -> std::io::Result<()> {
    let lines: Vec<&String> = history.iter().rev().collect();
    let json = serde_json::to_string_pretty(&lines)?;
    std::fs::write(path, json)
}

/// Completes command names, builtin names, and names bound in the scope.
struct NameCompleter {
    names: Vec<String>,
}

impl NameCompleter {
    fn new(runtime: &Runtime) -> NameCompleter {
        let mut names: Vec<String> = COMMANDS.iter().map(|s| s.to_string()).collect();
        names.extend(function::builtins().map(|b| b.name.to_string()));
        names.extend(
            runtime
                .scope()
                .iter()
                .filter(|(name, _)| !crate::lang::is_internal(name))
                .map(|(name, _)| name.to_string()),
        );
        names.sort();
        names.dedup();
        NameCompleter { names }
    }
}

impl<Term: Terminal> Completer<Term> for NameCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let found: Vec<Completion> = self
            .names
            .iter()
            .filter(|name| name.starts_with(word))
            .map(|name| Completion::simple(name.clone()))
            .collect();
        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_column_is_underlined() {
        let expected = format!(
            "{}{}{}",
            Red.paint("1 + "),
            Red.underline().paint(")"),
            Red.paint("")
        );
        assert_eq!(decorate_error("1 + )", &(4..5)), expected);
    }

    #[test]
    fn test_error_without_column() {
        assert_eq!(decorate_error("1 +", &(0..0)), Red.paint("1 +").to_string());
        assert_eq!(decorate_error("x", &(7..9)), Red.paint("x").to_string());
    }
}
