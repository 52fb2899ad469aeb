//! Terminal confirmation and password prompts.

use std::io::{self, BufRead, IsTerminal, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tracing::debug;

use crate::domain::ports::ConfirmPort;

/// Source of the keystrokes a password is typed with.
trait SecretSource: Send + Sync {
    fn read_secret(&self) -> io::Result<String>;
}

/// Reads from the controlling terminal in raw mode so nothing is echoed.
struct TerminalKeys;

impl SecretSource for TerminalKeys {
    fn read_secret(&self) -> io::Result<String> {
        // Piped input has no echo to hide.
        if !io::stdin().is_terminal() {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            return Ok(line.trim_end_matches(['\r', '\n']).to_string());
        }

        let _raw = RawMode::enable()?;
        collect_secret(event::read)
    }
}

struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Asks yes/no questions and reads passwords on the terminal.
pub struct TerminalPrompt {
    assume_yes: bool,
    secrets: Box<dyn SecretSource>,
}

impl TerminalPrompt {
    /// Creates prompt; `assume_yes` answers every question affirmatively.
    #[must_use]
    pub fn new(assume_yes: bool) -> Self {
        Self {
            assume_yes,
            secrets: Box::new(TerminalKeys),
        }
    }

    /// Prompt whose password entry replays `text` followed by Enter.
    #[cfg(test)]
    pub(crate) fn typing(assume_yes: bool, text: &str) -> Self {
        let mut events: Vec<Event> = text
            .chars()
            .map(|c| key(KeyCode::Char(c), KeyModifiers::NONE))
            .collect();
        events.push(key(KeyCode::Enter, KeyModifiers::NONE));
        Self {
            assume_yes,
            secrets: Box::new(ScriptedKeys::new(events)),
        }
    }

    fn ask(&self, title: &str, message: &str) -> io::Result<bool> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "{title}: {message} [y/N] ")?;
        stderr.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }

    /// Reads a secret without echoing it.
    ///
    /// # Errors
    /// Returns `Interrupted` when the user presses Ctrl-C or Esc, or the
    /// terminal error.
    pub fn read_secret(&self, label: &str) -> io::Result<String> {
        {
            let mut stderr = io::stderr().lock();
            write!(stderr, "{label}: ")?;
            stderr.flush()?;
        }

        let secret = self.secrets.read_secret();
        writeln!(io::stderr())?;
        secret
    }
}

impl ConfirmPort for TerminalPrompt {
    fn confirm(&self, title: &str, message: &str) -> bool {
        if self.assume_yes {
            debug!(title, "Confirmation assumed");
            return true;
        }
        self.ask(title, message).unwrap_or(false)
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "s" | "si" | "sì")
}

fn collect_secret(mut next: impl FnMut() -> io::Result<Event>) -> io::Result<String> {
    let mut secret = String::new();
    loop {
        match next()? {
            Event::Key(KeyEvent {
                kind: KeyEventKind::Release,
                ..
            }) => {}
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers,
                ..
            }) if modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "input cancelled"));
            }
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Enter => return Ok(secret),
                KeyCode::Esc => {
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "input cancelled"));
                }
                KeyCode::Backspace => {
                    secret.pop();
                }
                KeyCode::Char(c) => secret.push(c),
                _ => {}
            },
            Event::Paste(text) => secret.push_str(text.trim_end_matches(['\r', '\n'])),
            _ => {}
        }
    }
}

#[cfg(test)]
fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

#[cfg(test)]
struct ScriptedKeys {
    events: parking_lot::Mutex<std::collections::VecDeque<Event>>,
}

#[cfg(test)]
impl ScriptedKeys {
    fn new(events: Vec<Event>) -> Self {
        Self {
            events: parking_lot::Mutex::new(events.into()),
        }
    }
}

#[cfg(test)]
impl SecretSource for ScriptedKeys {
    fn read_secret(&self) -> io::Result<String> {
        collect_secret(|| {
            self.events
                .lock()
                .pop_front()
                .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
        })
    }
}
