use super::{ast::*, token::*, Column, Error};
use crate::mach::Number;

type Result<T> = std::result::Result<T, Error>;

pub fn parse(tokens: &[Token]) -> Result<Node> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Node> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
            depth: 0,
        };
        if let Some(comment) = Parser::comment_only(tokens) {
            return Ok(comment);
        }
        match parse.statement() {
            Ok(node) => Ok(node),
            Err(e) => Err(e.in_column(&parse.col)),
        }
    }

    fn comment_only(tokens: &[Token]) -> Option<Node> {
        for t in tokens {
            match t {
                Token::Whitespace(_) => continue,
                Token::Comment(text) => return Some(Node::Comment(text.clone())),
                _ => return None,
            }
        }
        None
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) | Token::Comment(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    /// Runs `f` one level deeper, refusing input nested past [`MAX_NESTING`].
    fn nested<F>(&mut self, f: F) -> Result<Node>
    where
        F: FnOnce(&mut Parser<'a>) -> Result<Node>,
    {
        if self.depth >= MAX_NESTING {
            return Err(error!(SyntaxError; "Expression nested too deeply"));
        }
        self.depth += 1;
        let node = f(self);
        self.depth -= 1;
        node
    }

    fn statement(&mut self) -> Result<Node> {
        if self.peek().is_none() {
            return Err(error!(SyntaxError; "Empty expression"));
        }
        let node = self.assignment()?;
        match self.next() {
            None => Ok(node),
            Some(t) => Err(error!(SyntaxError; &format!("Unexpected \"{}\"", t))),
        }
    }

    fn assignment(&mut self) -> Result<Node> {
        let lhs = self.expression(1)?;
        if let Some(Token::Assign) = self.peek() {
            self.next();
            let value = self.nested(Parser::assignment)?;
            return match lhs {
                Node::Ident(name) => Ok(Node::Assign(name, Box::new(value))),
                Node::Call(name, args) => {
                    let mut params = vec![];
                    for arg in args {
                        match arg {
                            Node::Ident(p) => params.push(p),
                            _ => {
                                return Err(error!(SyntaxError; "Invalid parameter"));
                            }
                        }
                    }
                    Ok(Node::Function(name, params, Box::new(value)))
                }
                _ => Err(error!(SyntaxError; "Invalid left hand side of assignment")),
            };
        }
        Ok(lhs)
    }

    fn expression(&mut self, precedence: usize) -> Result<Node> {
        let mut lhs = self.nested(Parser::unary)?;
        loop {
            match self.peek() {
                Some(Token::Operator(op)) => {
                    let op = *op;
                    let op_precedence = match op.precedence() {
                        Some(p) if op != Operator::Caret => p,
                        _ => break,
                    };
                    if op_precedence < precedence {
                        break;
                    }
                    self.next();
                    let rhs = self.expression(op_precedence + 1)?;
                    lhs = Node::Binary(op, Box::new(lhs), Box::new(rhs));
                }
                Some(Token::Ident(_)) | Some(Token::LParen) if is_coefficient(&lhs) => {
                    let rhs = self.expression(UNARY_PRECEDENCE)?;
                    lhs = Node::Binary(Operator::Multiply, Box::new(lhs), Box::new(rhs));
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Node> {
        use Operator::*;
        match self.peek() {
            Some(Token::Operator(op @ Minus))
            | Some(Token::Operator(op @ Plus))
            | Some(Token::Operator(op @ BitNot))
            | Some(Token::Operator(op @ Not)) => {
                let op = *op;
                self.next();
                let operand = self.nested(Parser::unary)?;
                Ok(Node::Unary(op, Box::new(operand)))
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Node> {
        let base = self.postfix()?;
        if let Some(Token::Operator(Operator::Caret)) = self.peek() {
            self.next();
            let exponent = self.nested(Parser::unary)?;
            return Ok(Node::Binary(
                Operator::Caret,
                Box::new(base),
                Box::new(exponent),
            ));
        }
        Ok(base)
    }

    fn postfix(&mut self) -> Result<Node> {
        let mut node = self.primary()?;
        while let Some(Token::Operator(Operator::Factorial)) = self.peek() {
            self.next();
            node = Node::Unary(Operator::Factorial, Box::new(node));
        }
        Ok(node)
    }

    fn primary(&mut self) -> Result<Node> {
        match self.next() {
            Some(Token::Number(s)) => Ok(Node::number(s.parse::<Number>()?)),
            Some(Token::Text(s)) => Ok(Node::text(s)),
            Some(Token::Ident(i)) => match i.as_str() {
                "true" => Ok(Node::boolean(true)),
                "false" => Ok(Node::boolean(false)),
                _ => match self.peek() {
                    Some(&&Token::LParen) => Ok(Node::Call(i.clone(), self.argument_list()?)),
                    _ => Ok(Node::Ident(i.clone())),
                },
            },
            Some(Token::LParen) => {
                let node = self.assignment()?;
                self.expect(Token::RParen)?;
                Ok(node)
            }
            Some(Token::LBracket) => self.matrix(),
            Some(Token::Operator(Operator::Modulus)) if self.peek() == Some(&&Token::LParen) => {
                Ok(Node::Call("mod".to_string(), self.argument_list()?))
            }
            Some(Token::Unknown(s)) => Err(error!(SyntaxError; &format!("Unexpected \"{}\"", s))),
            Some(t) => Err(error!(SyntaxError; &format!("Unexpected \"{}\"", t))),
            None => Err(error!(SyntaxError; "Unexpected end of expression")),
        }
    }

    fn argument_list(&mut self) -> Result<Vec<Node>> {
        self.expect(Token::LParen)?;
        let mut v: Vec<Node> = vec![];
        if let Some(Token::RParen) = self.peek() {
            self.next();
            return Ok(v);
        }
        loop {
            v.push(self.assignment()?);
            match self.next() {
                Some(Token::RParen) => return Ok(v),
                Some(Token::Comma) => continue,
                _ => return Err(error!(SyntaxError; "Expected \",\" or \")\"")),
            }
        }
    }

    fn matrix(&mut self) -> Result<Node> {
        let mut rows: Vec<Node> = vec![];
        let mut items: Vec<Node> = vec![];
        let mut semicolon = false;
        if let Some(Token::RBracket) = self.peek() {
            self.next();
            return Ok(Node::Matrix(items));
        }
        loop {
            items.push(self.assignment()?);
            match self.next() {
                Some(Token::Comma) => continue,
                Some(Token::Semicolon) => {
                    semicolon = true;
                    rows.push(Node::Matrix(std::mem::take(&mut items)));
                }
                Some(Token::RBracket) => break,
                _ => return Err(error!(SyntaxError; "Expected \",\", \";\" or \"]\"")),
            }
        }
        if semicolon {
            rows.push(Node::Matrix(items));
            Ok(Node::Matrix(rows))
        } else {
            Ok(Node::Matrix(items))
        }
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        Err(error!(SyntaxError; &format!("Expected \"{}\"", token)))
    }
}

/// A number written directly before a name or a parenthesis multiplies it.
fn is_coefficient(node: &Node) -> bool {
    match node {
        Node::Literal(Literal::Number(_)) => true,
        Node::Unary(Operator::Minus, operand) | Node::Unary(Operator::Plus, operand) => {
            matches!(**operand, Node::Literal(Literal::Number(_)))
        }
        _ => false,
    }
}
