use super::command::Command;
use super::eval::evaluate;
use super::format;
use super::scope::{Binding, Scope};
use super::simplify::RuleSet;
use super::subst::{substitute, value_node};
use super::{History, Val};
use crate::config::Config;
use crate::error;
use crate::lang::ast::Node;
use crate::lang::{Error, Line, CONTINUATION};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// What one processed line produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Stopped,
    Result(String),
    Print(String),
    Error(Error),
    ClearScreen,
    Exit,
}

/// ## Session driver
///
/// Owns the scope store and history for one session and runs each line
/// through preparation, substitution, evaluation, and classification.
pub struct Runtime {
    scope: Scope,
    history: History,
    rules: RuleSet,
    config: Config,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        Runtime {
            scope: Scope::default(),
            history: History::default(),
            rules: RuleSet::formatting(),
            config,
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn set_history(&mut self, history: History) {
        self.history = history;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn enter(&mut self, input: &str) -> Event {
        let text = input.trim();
        if text.is_empty() {
            return Event::Stopped;
        }
        self.history.push(text);
        match self.process(text) {
            Ok(event) => event,
            Err(error) => {
                debug!(fault = ?error.fault(), %error, "line failed");
                if !error.keeps_history() {
                    self.history.discard_last();
                }
                Event::Error(error)
            }
        }
    }

    fn process(&mut self, text: &str) -> Result<Event> {
        let line = Line::new(text)?;
        debug!(prepared = line.text(), "line");
        let root = line.ast()?;
        if let Node::Comment(_) = root {
            return Ok(Event::Stopped);
        }
        if root.assigns_to(CONTINUATION) {
            return Err(error!(ReservedAssignment));
        }
        let root = substitute(root, &self.scope)?;
        debug!(tree = %root, "substituted");
        if root.mentions(CONTINUATION) {
            return Err(error!(EmptyContinuation));
        }
        if let Node::Ident(name) = &root {
            self.history.discard_last();
            let command = Command::from_name(name)?;
            debug!(?command, "command");
            return Ok(command.run(&self.scope, &mut self.history, self.config.width));
        }
        let root = self.rules.simplify_operands(root);
        let val = evaluate(&root, &mut self.scope)?;
        debug!(kind = val.type_name(), "evaluated");
        if let Val::Function(_) = val {
            return Ok(Event::Result(root.to_string()));
        }
        let value = match root.innermost_value() {
            Node::Ident(_) => value_node(&val),
            value => RuleSet::folding().simplify(value.clone()),
        };
        let shown = format::display(val, self.config.round_places, self.config.width);
        for target in root.assignment_targets() {
            self.scope.set(target, Binding::Expression(value.clone()));
        }
        self.scope.set_continuation(self.rules.simplify(value));
        Ok(Event::Result(shown))
    }
}
