use crate::utils::error::{KataError, Result};
use regex::Regex;
use std::fmt;
use std::io::{BufRead, Write};
use std::sync::OnceLock;

/// Operator slot, then two optionally signed integers.
const LINE_PATTERN: &str = r"^(\S)\s+(-?[0-9]+)\s+(-?[0-9]+)$";

fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LINE_PATTERN).unwrap())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Rem => '%',
        }
    }

    /// `+ - *` wrap on overflow. `/ %` fail on a zero divisor and on `i32::MIN / -1`.
    pub fn apply(self, lhs: i32, rhs: i32) -> Result<i32> {
        let checked = |value: Option<i32>| {
            value.ok_or(if rhs == 0 {
                KataError::DivisionByZero
            } else {
                KataError::ArithmeticOverflow {
                    operator: self.symbol(),
                    lhs,
                    rhs,
                }
            })
        };

        match self {
            Operator::Add => Ok(lhs.wrapping_add(rhs)),
            Operator::Sub => Ok(lhs.wrapping_sub(rhs)),
            Operator::Mul => Ok(lhs.wrapping_mul(rhs)),
            Operator::Div => checked(lhs.checked_div(rhs)),
            Operator::Rem => checked(lhs.checked_rem(rhs)),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = KataError;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            '%' => Ok(Operator::Rem),
            other => Err(KataError::InvalidOperator(other)),
        }
    }
}

/// A line that passed the grammar. The operator is not checked yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub operator: char,
    pub lhs: i32,
    pub rhs: i32,
}

/// What the evaluator writes to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Value(i32),
    MalformedLine,
    InvalidOperator(char),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(value) => write!(f, "{}", value),
            Outcome::MalformedLine => write!(f, "{}", KataError::MalformedLine),
            Outcome::InvalidOperator(op) => write!(f, "{}", KataError::InvalidOperator(*op)),
        }
    }
}

fn parse_operand(text: &str) -> Result<i32> {
    text.parse::<i32>().map_err(|_| KataError::OperandOutOfRange {
        value: text.to_string(),
    })
}

fn trim_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

pub fn parse_line(line: &str) -> Result<Expression> {
    let line = trim_line_terminator(line);
    let caps = line_regex().captures(line).ok_or(KataError::MalformedLine)?;

    let operator = caps[1].chars().next().ok_or(KataError::MalformedLine)?;
    Ok(Expression {
        operator,
        lhs: parse_operand(&caps[2])?,
        rhs: parse_operand(&caps[3])?,
    })
}

pub fn evaluate(expr: &Expression) -> Result<i32> {
    let operator = Operator::try_from(expr.operator)?;
    let value = operator.apply(expr.lhs, expr.rhs)?;
    tracing::debug!("{} {} {} = {}", expr.lhs, expr.operator, expr.rhs, value);
    Ok(value)
}

/// Evaluates one line. Only faults come back as `Err`; the two reported
/// conditions are folded into `Outcome`.
pub fn evaluate_line(line: &str) -> Result<Outcome> {
    let result = parse_line(line).and_then(|expr| evaluate(&expr));
    match result {
        Ok(value) => Ok(Outcome::Value(value)),
        Err(KataError::MalformedLine) => {
            tracing::debug!("Line rejected by grammar: {:?}", line);
            Ok(Outcome::MalformedLine)
        }
        Err(KataError::InvalidOperator(op)) => {
            tracing::debug!("Unsupported operator {:?}", op);
            Ok(Outcome::InvalidOperator(op))
        }
        Err(e) => Err(e),
    }
}

/// One read from `input`, one line written to `output`.
///
/// End of input counts as an empty line. Invalid UTF-8 is decoded lossily
/// and then fails the grammar. On a fault nothing is written.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Outcome> {
    let mut buf = Vec::new();
    let bytes = input.read_until(b'\n', &mut buf)?;
    if bytes == 0 {
        tracing::debug!("No input line available");
    }
    let line = String::from_utf8_lossy(&buf);

    let outcome = evaluate_line(&line)?;
    writeln!(output, "{}", outcome)?;
    output.flush()?;
    Ok(outcome)
}
