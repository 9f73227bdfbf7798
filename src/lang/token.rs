#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Number(String),
    Text(String),
    Ident(String),
    Operator(Operator),
    Assign,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Comment(String),
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        use Token::*;
        match s {
            "=" => Some(Assign),
            "(" => Some(LParen),
            ")" => Some(RParen),
            "[" => Some(LBracket),
            "]" => Some(RBracket),
            "," => Some(Comma),
            ";" => Some(Semicolon),
            _ => self::Operator::from_string(s).map(Token::Operator),
        }
    }

    /// Words that lex as operators rather than identifiers.
    pub fn from_word(s: &str) -> Option<Token> {
        use self::Operator::*;
        match s {
            "mod" => Some(Token::Operator(Modulus)),
            "and" => Some(Token::Operator(And)),
            "or" => Some(Token::Operator(Or)),
            "xor" => Some(Token::Operator(Xor)),
            "not" => Some(Token::Operator(Not)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Number(s) => write!(f, "{}", s),
            Text(s) => write!(f, "{:?}", s),
            Ident(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Assign => write!(f, "="),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            LBracket => write!(f, "["),
            RBracket => write!(f, "]"),
            Comma => write!(f, ","),
            Semicolon => write!(f, ";"),
            Comment(s) => write!(f, "#{}", s),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Modulus,
    Plus,
    Minus,
    Factorial,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    ShiftLeft,
    ShiftRight,
    Not,
    And,
    Or,
    Xor,
}

impl Operator {
    pub fn from_string(s: &str) -> Option<Operator> {
        use Operator::*;
        match s {
            "^" => Some(Caret),
            "*" => Some(Multiply),
            "/" => Some(Divide),
            "%" => Some(Modulus),
            "+" => Some(Plus),
            "-" => Some(Minus),
            "!" => Some(Factorial),
            "==" => Some(Equal),
            "!=" => Some(NotEqual),
            "<" => Some(Less),
            "<=" => Some(LessEqual),
            ">" => Some(Greater),
            ">=" => Some(GreaterEqual),
            "&" => Some(BitAnd),
            "|" => Some(BitOr),
            "^|" => Some(BitXor),
            "~" => Some(BitNot),
            "<<" => Some(ShiftLeft),
            ">>" => Some(ShiftRight),
            _ => None,
        }
    }

    /// Binding power of the infix form; tighter binds higher.
    /// `^` and the prefix/postfix operators are parsed separately.
    pub fn precedence(self) -> Option<usize> {
        use Operator::*;
        match self {
            Or => Some(1),
            Xor => Some(2),
            And => Some(3),
            BitOr => Some(4),
            BitXor => Some(5),
            BitAnd => Some(6),
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => Some(7),
            ShiftLeft | ShiftRight => Some(8),
            Plus | Minus => Some(9),
            Multiply | Divide | Modulus => Some(10),
            Caret => Some(12),
            Factorial | BitNot | Not => None,
        }
    }

    pub fn is_word(self) -> bool {
        use Operator::*;
        matches!(self, Not | And | Or | Xor)
    }
}

pub const UNARY_PRECEDENCE: usize = 11;
pub const POSTFIX_PRECEDENCE: usize = 13;

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "mod"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Factorial => write!(f, "!"),
            Equal => write!(f, "=="),
            NotEqual => write!(f, "!="),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            BitAnd => write!(f, "&"),
            BitOr => write!(f, "|"),
            BitXor => write!(f, "^|"),
            BitNot => write!(f, "~"),
            ShiftLeft => write!(f, "<<"),
            ShiftRight => write!(f, ">>"),
            Not => write!(f, "not"),
            And => write!(f, "and"),
            Or => write!(f, "or"),
            Xor => write!(f, "xor"),
        }
    }
}
