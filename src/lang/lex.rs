use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    CalcLexer {
        chars: s.chars().peekable(),
    }
    .collect()
}

fn is_calc_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

fn is_calc_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        while let Some(pk) = self.chars().peek() {
            if !is_calc_whitespace(*pk) {
                break;
            }
            self.chars().next();
            len += 1;
        }
        Some(Token::Whitespace(len))
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_calc_digit(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        if let Some('.') = self.chars().peek() {
            self.chars().next();
            if s.is_empty() {
                s.push('0');
            }
            s.push('.');
            let mut fraction = false;
            while let Some(pk) = self.chars().peek() {
                if !is_calc_digit(*pk) {
                    break;
                }
                s.push(*pk);
                self.chars().next();
                fraction = true;
            }
            if !fraction {
                s.push('0');
            }
        }
        // An exponent needs at least one digit; otherwise `e` starts a word.
        if let Some('e') | Some('E') = self.chars().peek() {
            let mut probe = self.chars().clone();
            probe.next();
            let mut exponent = String::from("e");
            if let Some(sign @ '+') | Some(sign @ '-') = probe.peek().copied() {
                exponent.push(sign);
                probe.next();
            }
            if let Some(digit) = probe.peek() {
                if is_calc_digit(*digit) {
                    for _ in 0..exponent.len() {
                        self.chars().next();
                    }
                    s.push_str(&exponent);
                    while let Some(pk) = self.chars().peek() {
                        if !is_calc_digit(*pk) {
                            break;
                        }
                        s.push(*pk);
                        self.chars().next();
                    }
                }
            }
        }
        Some(Token::Number(s))
    }

    fn text(&mut self) -> Option<Token> {
        let quote = self.chars().next()?;
        let mut s = String::new();
        let mut raw = String::new();
        raw.push(quote);
        loop {
            let ch = match self.chars().next() {
                Some(ch) => ch,
                None => return Some(Token::Unknown(raw)),
            };
            raw.push(ch);
            if ch == quote {
                return Some(Token::Text(s));
            }
            if ch == '\\' {
                let escaped = match self.chars().next() {
                    Some(ch) => ch,
                    None => return Some(Token::Unknown(raw)),
                };
                raw.push(escaped);
                s.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    other => other,
                });
                continue;
            }
            s.push(ch);
        }
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_ident_continue(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        Token::from_word(&s).or(Some(Token::Ident(s)))
    }

    fn comment(&mut self) -> Option<Token> {
        self.chars().next();
        Some(Token::Comment(self.chars().by_ref().collect()))
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        let mut s = ch.to_string();
        if let Some(pk) = self.chars().peek() {
            s.push(*pk);
            if let Some(t) = Token::from_string(&s) {
                self.chars().next();
                return Some(t);
            }
            s.pop();
        }
        Some(Token::from_string(&s).unwrap_or(Token::Unknown(s)))
    }
}

struct CalcLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for CalcLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for CalcLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = *self.chars.peek()?;
        if is_calc_whitespace(pk) {
            return self.whitespace();
        }
        if is_calc_digit(pk) {
            return self.number();
        }
        if pk == '.' {
            let mut probe = self.chars.clone();
            probe.next();
            if let Some(d) = probe.peek() {
                if is_calc_digit(*d) {
                    return self.number();
                }
            }
        }
        if is_ident_start(pk) {
            return self.alphabetic();
        }
        if pk == '"' || pk == '\'' {
            return self.text();
        }
        if pk == '#' {
            return self.comment();
        }
        self.minutia()
    }
}
