use crate::{
    error::{ParseError, ParseErrorKind},
    lexer::{Spanned, Token, tokenize},
    program::{Instruction, Program},
    registry,
};

/// Maximum nesting of parentheses, unary minus and exponent chains.
const MAX_DEPTH: usize = 128;

/// Parses `source` into a postfix program.
pub(crate) fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::new(ParseErrorKind::Empty, 0));
    }

    let mut parser = Parser {
        tokens,
        next: 0,
        end: source.len(),
        depth: 0,
        program: Program::default(),
    };
    parser.expr()?;

    match parser.peek() {
        None => Ok(parser.program),
        Some(extra) if extra.token == Token::RParen => Err(ParseError::new(
            ParseErrorKind::UnbalancedParen,
            extra.position,
        )),
        Some(extra) => Err(unexpected(extra)),
    }
}

struct Parser<'a> {
    tokens: Vec<Spanned<'a>>,
    next: usize,
    end: usize,
    depth: usize,
    program: Program,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Spanned<'a>> {
        self.tokens.get(self.next).copied()
    }

    fn bump(&mut self) -> Option<Spanned<'a>> {
        let token = self.peek()?;
        self.next += 1;
        Some(token)
    }

    fn eat(&mut self, token: Token<'_>) -> bool {
        if self.peek().is_some_and(|s| s.token == token) {
            self.next += 1;
            true
        } else {
            false
        }
    }

    fn descend(&mut self, position: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::new(ParseErrorKind::TooDeep, position));
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// `expr := term (('+' | '-') term)*`
    fn expr(&mut self) -> Result<(), ParseError> {
        self.term()?;
        loop {
            let op = if self.eat(Token::Plus) {
                Instruction::Add
            } else if self.eat(Token::Minus) {
                Instruction::Sub
            } else {
                return Ok(());
            };
            self.term()?;
            self.program.emit(op);
        }
    }

    /// `term := unary (('*' | '/') unary)*`
    fn term(&mut self) -> Result<(), ParseError> {
        self.unary()?;
        loop {
            let op = if self.eat(Token::Star) {
                Instruction::Mul
            } else if self.eat(Token::Slash) {
                Instruction::Div
            } else {
                return Ok(());
            };
            self.unary()?;
            self.program.emit(op);
        }
    }

    /// `unary := '-' unary | power`
    fn unary(&mut self) -> Result<(), ParseError> {
        let Some(minus) = self.peek().filter(|s| s.token == Token::Minus) else {
            return self.power();
        };
        self.next += 1;

        self.descend(minus.position)?;
        self.unary()?;
        self.ascend();
        self.program.emit(Instruction::Neg);
        Ok(())
    }

    /// `power := primary ('^' unary)?`
    ///
    /// The exponent is parsed as `unary`, which makes `^` right-associative
    /// and allows a signed exponent such as `2^-1`.
    fn power(&mut self) -> Result<(), ParseError> {
        self.primary()?;
        let Some(caret) = self.peek().filter(|s| s.token == Token::Caret) else {
            return Ok(());
        };
        self.next += 1;

        self.descend(caret.position)?;
        self.unary()?;
        self.ascend();
        self.program.emit(Instruction::Pow);
        Ok(())
    }

    fn primary(&mut self) -> Result<(), ParseError> {
        let Some(spanned) = self.bump() else {
            return Err(ParseError::new(ParseErrorKind::UnexpectedEnd, self.end));
        };

        match spanned.token {
            Token::Number(value) => {
                self.program.emit(Instruction::Push(value));
                Ok(())
            }
            Token::Ident(name) => self.identifier(name, spanned.position),
            Token::LParen => {
                self.descend(spanned.position)?;
                self.expr()?;
                self.close_paren(spanned.position)?;
                self.ascend();
                Ok(())
            }
            _ => Err(unexpected(spanned)),
        }
    }

    fn identifier(&mut self, name: &str, position: usize) -> Result<(), ParseError> {
        if let Some(function) = registry::function(name) {
            return self.call(function, position);
        }

        let instruction = if name == "x" {
            Instruction::LoadX
        } else if let Some(value) = registry::constant(name) {
            Instruction::Push(value)
        } else {
            return Err(ParseError::new(
                ParseErrorKind::UnknownIdentifier(name.to_owned()),
                position,
            ));
        };

        if let Some(paren) = self.peek().filter(|s| s.token == Token::LParen) {
            return Err(ParseError::new(
                ParseErrorKind::NotCallable(name.to_owned()),
                paren.position,
            ));
        }

        self.program.emit(instruction);
        Ok(())
    }

    /// `function '(' expr ')'`
    fn call(&mut self, function: registry::Function, position: usize) -> Result<(), ParseError> {
        let Some(open) = self.peek().filter(|s| s.token == Token::LParen) else {
            return Err(ParseError::new(
                ParseErrorKind::MissingCallParen(function),
                position,
            ));
        };
        self.next += 1;

        if let Some(close) = self.peek().filter(|s| s.token == Token::RParen) {
            return Err(ParseError::new(
                ParseErrorKind::FunctionArity(function),
                close.position,
            ));
        }

        self.descend(open.position)?;
        self.expr()?;
        if let Some(comma) = self.peek().filter(|s| s.token == Token::Comma) {
            return Err(ParseError::new(
                ParseErrorKind::FunctionArity(function),
                comma.position,
            ));
        }
        self.close_paren(open.position)?;
        self.ascend();

        self.program.emit(Instruction::Call(function));
        Ok(())
    }

    fn close_paren(&mut self, open_position: usize) -> Result<(), ParseError> {
        match self.bump() {
            Some(s) if s.token == Token::RParen => Ok(()),
            Some(s) => Err(unexpected(s)),
            None => Err(ParseError::new(
                ParseErrorKind::UnbalancedParen,
                open_position,
            )),
        }
    }
}

fn unexpected(spanned: Spanned<'_>) -> ParseError {
    ParseError::new(
        ParseErrorKind::UnexpectedToken(spanned.text.to_owned()),
        spanned.position,
    )
}
