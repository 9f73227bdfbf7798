use super::Column;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn fault(&self) -> Fault {
        self.code.fault()
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn detail(&self) -> &str {
        &self.message
    }

    /// Ordinary input mistakes stay in history so they can be recalled
    /// and edited. Unexpected evaluation failures do not.
    pub fn keeps_history(&self) -> bool {
        self.fault() != Fault::Evaluation
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn without_column(self) -> Error {
        Error {
            column: 0..0,
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MalformedLiteral,
    SyntaxError,
    TypeMismatch,
    EmptyContinuation,
    ReservedAssignment,
    UnknownCommand,
    UndefinedSymbol,
    DivisionByZero,
    DimensionMismatch,
    IllegalFunctionCall,
    Overflow,
    CallDepth,
    InternalError,
}

/// How a line failed, which decides what is reported and whether the
/// line stays in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    MalformedLiteral,
    Syntax,
    Type,
    State,
    Protocol,
    UnknownCommand,
    Evaluation,
}

impl ErrorCode {
    pub fn fault(self) -> Fault {
        use ErrorCode::*;
        match self {
            MalformedLiteral => Fault::MalformedLiteral,
            SyntaxError => Fault::Syntax,
            TypeMismatch => Fault::Type,
            EmptyContinuation => Fault::State,
            ReservedAssignment => Fault::Protocol,
            UnknownCommand => Fault::UnknownCommand,
            UndefinedSymbol | DivisionByZero | DimensionMismatch | IllegalFunctionCall
            | Overflow | CallDepth | InternalError => Fault::Evaluation,
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {:?}: {} }}", self.code, self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            MalformedLiteral => "Malformed literal",
            SyntaxError | TypeMismatch => "Invalid expression",
            EmptyContinuation => "`@` is empty",
            ReservedAssignment => "`@` cannot be assigned",
            UnknownCommand => "Unknown Command",
            UndefinedSymbol => "Undefined symbol",
            DivisionByZero => "Division by zero",
            DimensionMismatch => "Dimension mismatch",
            IllegalFunctionCall => "Illegal function call",
            Overflow => "Overflow",
            CallDepth => "Maximum call depth exceeded",
            InternalError => "Internal error",
        };
        match self.fault() {
            Fault::Evaluation if !self.message.is_empty() => write!(f, "{}", self.message),
            _ if self.message.is_empty() => write!(f, "{}", code_str),
            _ => write!(f, "{}; {}", code_str, self.message),
        }
    }
}
