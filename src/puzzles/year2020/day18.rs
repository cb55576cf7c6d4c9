//! Operation Order: arithmetic with unusual precedence

use crate::io::error::{Result, parse_error};
use crate::io::input::lines;
use crate::puzzles::answer::Answers;

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `*`
    Multiply,
}

/// Lexical token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Non-negative integer literal
    Number(u64),
    /// `+` or `*`
    Operator(Operator),
    /// `(`
    Open,
    /// `)`
    Close,
}

/// Parsed expression: operands joined by operators, no precedence applied yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A literal
    Value(u64),
    /// `first op operand op operand ...`
    Chain {
        /// Leftmost operand
        first: Box<Expression>,
        /// Remaining operators and their right operands
        rest: Vec<(Operator, Expression)>,
    },
}

/// Split a line into tokens; numbers may have several digits
///
/// # Errors
///
/// Returns an error for any other character
pub fn tokenize(line: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        let token = match c {
            ' ' => continue,
            '+' => Token::Operator(Operator::Add),
            '*' => Token::Operator(Operator::Multiply),
            '(' => Token::Open,
            ')' => Token::Close,
            digit if digit.is_ascii_digit() => {
                let mut value = u64::from(digit.to_digit(10).unwrap_or(0));
                while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                    value = value * 10 + u64::from(next);
                    chars.next();
                }
                Token::Number(value)
            }
            other => return Err(parse_error(line, &format!("unexpected character '{other}'"))),
        };
        tokens.push(token);
    }
    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    line: &'a str,
}

impl Parser<'_> {
    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).copied();
        self.position += 1;
        token
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.position).copied()
    }

    fn operand(&mut self) -> Result<Expression> {
        match self.next() {
            Some(Token::Number(value)) => Ok(Expression::Value(value)),
            Some(Token::Open) => {
                let inner = self.chain()?;
                match self.next() {
                    Some(Token::Close) => Ok(inner),
                    _ => Err(parse_error(self.line, &"no matching closing parenthesis")),
                }
            }
            Some(token) => Err(parse_error(self.line, &format!("unexpected {token:?}"))),
            None => Err(parse_error(self.line, &"expression ends early")),
        }
    }

    fn chain(&mut self) -> Result<Expression> {
        let first = self.operand()?;
        let mut rest = Vec::new();
        while let Some(Token::Operator(operator)) = self.peek() {
            self.position += 1;
            rest.push((operator, self.operand()?));
        }
        if rest.is_empty() {
            Ok(first)
        } else {
            Ok(Expression::Chain {
                first: Box::new(first),
                rest,
            })
        }
    }
}

/// Parse one line into an expression tree
///
/// # Errors
///
/// Returns an error for bad characters, unbalanced parentheses or a
/// missing operand
pub fn parse_expression(line: &str) -> Result<Expression> {
    let tokens = tokenize(line)?;
    let mut parser = Parser {
        tokens: &tokens,
        position: 0,
        line,
    };
    let expression = parser.chain()?;
    match parser.peek() {
        None => Ok(expression),
        Some(Token::Close) => Err(parse_error(line, &"unexpected closing parenthesis")),
        Some(token) => Err(parse_error(line, &format!("unexpected {token:?}"))),
    }
}

/// Parse every line
///
/// # Errors
///
/// Returns an error for the first malformed line
pub fn parse(text: &str) -> Result<Vec<Expression>> {
    lines(text).map(parse_expression).collect()
}

impl Expression {
    /// Evaluate with `+` and `*` at equal precedence, left to right
    pub fn evaluate_left_to_right(&self) -> u64 {
        match self {
            Self::Value(value) => *value,
            Self::Chain { first, rest } => {
                rest.iter()
                    .fold(first.evaluate_left_to_right(), |acc, (operator, operand)| {
                        match operator {
                            Operator::Add => acc + operand.evaluate_left_to_right(),
                            Operator::Multiply => acc * operand.evaluate_left_to_right(),
                        }
                    })
            }
        }
    }

    /// Evaluate with `+` binding tighter than `*`
    ///
    /// Runs of additions form groups whose sums are multiplied together.
    pub fn evaluate_addition_first(&self) -> u64 {
        match self {
            Self::Value(value) => *value,
            Self::Chain { first, rest } => {
                let mut product = 1;
                let mut group_sum = first.evaluate_addition_first();
                for (operator, operand) in rest {
                    let value = operand.evaluate_addition_first();
                    match operator {
                        Operator::Add => group_sum += value,
                        Operator::Multiply => {
                            product *= group_sum;
                            group_sum = value;
                        }
                    }
                }
                product * group_sum
            }
        }
    }
}

/// Sum of every line evaluated left to right
pub fn part1(expressions: &[Expression]) -> u64 {
    expressions
        .iter()
        .map(Expression::evaluate_left_to_right)
        .sum()
}

/// Sum of every line evaluated with addition first
pub fn part2(expressions: &[Expression]) -> u64 {
    expressions
        .iter()
        .map(Expression::evaluate_addition_first)
        .sum()
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing fails
pub fn solve(text: &str) -> Result<Answers> {
    let expressions = parse(text)?;
    Ok(Answers::new(part1(&expressions), part2(&expressions)))
}
