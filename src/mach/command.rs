use super::format::truncate;
use super::function::Callable;
use super::scope::{Binding, Scope};
use super::{Event, History};
use crate::error;
use crate::lang::{is_internal, public_name, Error, CONTINUATION};

/// A bare word typed on its own line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    History,
    Clear,
    Cls,
    Ls,
    La,
    Func,
    Exit,
}

impl Command {
    pub fn from_name(name: &str) -> Result<Command, Error> {
        use Command::*;
        match public_name(name) {
            "history" => Ok(History),
            "clear" => Ok(Clear),
            "cls" => Ok(Cls),
            "ls" => Ok(Ls),
            "la" => Ok(La),
            "func" => Ok(Func),
            "exit" | "quit" => Ok(Exit),
            _ => Err(error!(UnknownCommand)),
        }
    }

    pub fn run(self, scope: &Scope, history: &mut History, width: usize) -> Event {
        use Command::*;
        match self {
            History => Event::Print(history.to_string()),
            Clear => {
                history.clear();
                Event::Stopped
            }
            Cls => Event::ClearScreen,
            Ls => Event::Print(list(scope, width)),
            La => Event::Print(list_all(scope)),
            Func => Event::Print(functions(scope)),
            Exit => Event::Exit,
        }
    }
}

fn list(scope: &Scope, width: usize) -> String {
    let mut s = String::new();
    for (name, binding) in scope.iter() {
        if binding.is_function() || is_internal(name) || name == CONTINUATION {
            continue;
        }
        s.push_str(&format!("{}: {}\n", name, truncate(&binding.to_string(), width)));
    }
    if let Some(at) = scope.continuation() {
        s.push_str(&format!(
            "{}: {}\n",
            public_name(CONTINUATION),
            truncate(&at.to_string(), width)
        ));
    }
    s
}

fn list_all(scope: &Scope) -> String {
    let mut s = String::new();
    for (name, binding) in scope.iter() {
        s.push_str(&format!("{}: {}\n", name, binding));
    }
    s
}

fn functions(scope: &Scope) -> String {
    let mut s = String::new();
    for (name, binding) in scope.iter() {
        if let Binding::Function(Callable::Builtin(b)) = binding {
            s.push_str(&format!("{} = {}\n\n", name, b.syntax));
        }
    }
    let mut user = scope.user_functions().peekable();
    if user.peek().is_some() {
        s.push_str("User Defined Function:\n\n");
        for f in user {
            s.push_str(&format!("{}\n\n", f.source));
        }
    }
    s
}
