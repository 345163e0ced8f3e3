//! Arithmetic expression evaluator
//!
//! Recursive descent over decimal literals, `+ - * /` and parentheses.
//! Nothing else is accepted: there are no names, no functions, no powers.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! Integers stay integers through `+ - *` and fall back to floats on i64
//! overflow. `/` is true division and always yields a float.

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Shown on the display in place of a result when evaluation fails.
pub const ERROR_SENTINEL: &str = "ERROR";

/// Parentheses and unary signs nest no deeper than this.
const MAX_DEPTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character {ch:?} at {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("unexpected {found} at {pos}")]
    UnexpectedToken { found: String, pos: usize },
    #[error("expression ends early")]
    UnexpectedEnd,
    #[error("unbalanced parenthesis at {0}")]
    UnbalancedParen(usize),
    #[error("expression nested too deeply")]
    TooDeep,
    #[error("division by zero")]
    DivisionByZero,
    #[error("result out of range")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, EvalError>;

/// A computed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::Float(x) => x == 0.0,
        }
    }

    fn plus(self, rhs: Number) -> Result<Number> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(n) => Ok(Number::Int(n)),
                None => finite(a as f64 + b as f64),
            },
            (a, b) => finite(a.as_f64() + b.as_f64()),
        }
    }

    fn minus(self, rhs: Number) -> Result<Number> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_sub(b) {
                Some(n) => Ok(Number::Int(n)),
                None => finite(a as f64 - b as f64),
            },
            (a, b) => finite(a.as_f64() - b.as_f64()),
        }
    }

    fn times(self, rhs: Number) -> Result<Number> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_mul(b) {
                Some(n) => Ok(Number::Int(n)),
                None => finite(a as f64 * b as f64),
            },
            (a, b) => finite(a.as_f64() * b.as_f64()),
        }
    }

    fn over(self, rhs: Number) -> Result<Number> {
        if rhs.is_zero() {
            return Err(EvalError::DivisionByZero);
        }
        finite(self.as_f64() / rhs.as_f64())
    }

    fn negate(self) -> Result<Number> {
        match self {
            Number::Int(n) => match n.checked_neg() {
                Some(n) => Ok(Number::Int(n)),
                None => finite(-(n as f64)),
            },
            Number::Float(x) => Ok(Number::Float(-x)),
        }
    }
}

fn finite(x: f64) -> Result<Number> {
    if x.is_finite() {
        Ok(Number::Float(x))
    } else {
        Err(EvalError::Overflow)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(x) => f.write_str(&format_float(x)),
        }
    }
}

/// Shortest round-tripping form, always with a fraction or an exponent.
/// Exponent form (`1e+16`, `1.5e-05`) outside `1e-4 <= |x| < 1e16`.
fn format_float(x: f64) -> String {
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let magnitude = x.abs();
    if magnitude >= 1e16 || magnitude < 1e-4 {
        let s = format!("{x:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => s,
        };
    }

    let s = format!("{x}");
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Num(Number),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Num(n) => write!(f, "number {n}"),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Star => f.write_str("'*'"),
            Token::Slash => f.write_str("'/'"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
        }
    }
}

/// Split `src` into tokens paired with their byte offsets.
fn tokenize(src: &str) -> Result<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        let token = match ch {
            ' ' | '\t' => {
                chars.next();
                continue;
            }
            '0'..='9' | '.' => {
                let mut end = pos;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_ascii_digit() || c == '.' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push((Token::Num(parse_literal(&src[pos..end])?), pos));
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => return Err(EvalError::UnexpectedChar { ch: other, pos }),
        };
        chars.next();
        tokens.push((token, pos));
    }

    Ok(tokens)
}

/// `12`, `00`, `1.5`, `007.5`, `5.`, `.5`. A lone `.`, a second `.`, or an
/// integer with a leading zero before a non-zero digit (`07`) is invalid.
fn parse_literal(text: &str) -> Result<Number> {
    let invalid = || EvalError::InvalidNumber(text.to_string());

    if text.contains('.') {
        if text == "." || text.matches('.').count() > 1 {
            return Err(invalid());
        }
        let x: f64 = text.parse().map_err(|_| invalid())?;
        return finite(x);
    }

    if text.starts_with('0') && text.bytes().any(|b| b != b'0') {
        return Err(invalid());
    }

    match text.parse::<i64>() {
        Ok(n) => Ok(Number::Int(n)),
        // only digits reach here, so the one failure is overflow
        Err(_) => {
            let x: f64 = text.parse().map_err(|_| invalid())?;
            finite(x)
        }
    }
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(tokens: Vec<(Token, usize)>) -> Self {
        Self { tokens, pos: 0, depth: 0 }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|&(token, _)| token)
    }

    fn offset(&self) -> usize {
        self.tokens.get(self.pos).map_or(0, |&(_, offset)| offset)
    }

    fn unexpected(&self) -> EvalError {
        match self.tokens.get(self.pos) {
            Some(&(token, pos)) => EvalError::UnexpectedToken { found: token.to_string(), pos },
            None => EvalError::UnexpectedEnd,
        }
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::TooDeep);
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<Number> {
        let mut acc = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    acc = acc.plus(self.term()?)?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    acc = acc.minus(self.term()?)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn term(&mut self) -> Result<Number> {
        let mut acc = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    acc = acc.times(self.unary()?)?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    acc = acc.over(self.unary()?)?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn unary(&mut self) -> Result<Number> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.descend()?;
                let value = self.unary();
                self.depth -= 1;
                value
            }
            Some(Token::Minus) => {
                self.pos += 1;
                self.descend()?;
                let value = self.unary().and_then(Number::negate);
                self.depth -= 1;
                value
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<Number> {
        match self.peek() {
            Some(Token::Num(n)) => {
                self.pos += 1;
                Ok(n)
            }
            Some(Token::LParen) => {
                let open = self.offset();
                self.pos += 1;
                self.descend()?;
                let value = self.expr()?;
                self.depth -= 1;
                match self.peek() {
                    Some(Token::RParen) => {
                        self.pos += 1;
                        Ok(value)
                    }
                    None => Err(EvalError::UnbalancedParen(open)),
                    Some(_) => Err(self.unexpected()),
                }
            }
            _ => Err(self.unexpected()),
        }
    }
}

/// Parse and compute `expression`, keeping the reason for any failure.
pub fn parse_and_compute(expression: &str) -> Result<Number> {
    let tokens = tokenize(expression)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser::new(tokens);
    let value = parser.expr()?;
    match parser.peek() {
        None => Ok(value),
        Some(Token::RParen) => Err(EvalError::UnbalancedParen(parser.offset())),
        Some(_) => Err(parser.unexpected()),
    }
}

/// Evaluate `expression` for the display: the result's text, or
/// [`ERROR_SENTINEL`] whatever went wrong.
pub fn evaluate(expression: &str) -> String {
    match parse_and_compute(expression) {
        Ok(value) => value.to_string(),
        Err(err) => {
            debug!(expression, error = %err, "evaluation failed");
            ERROR_SENTINEL.to_string()
        }
    }
}
