use colored::Colorize;
use rationals_number::{InvalidArgument, Rational};
use std::fmt;

/// A single expression, as given on the command line.
#[derive(Clone, Debug)]
pub enum Expr {
    Value(Rational),
    Neg(Rational),
    InfixOp(InfixOp, Rational, Rational),
    InRange {
        value: Rational,
        low: Rational,
        high: Rational,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InfixOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Neq,
    Lt,
    Leq,
    Gt,
    Geq,
}

impl InfixOp {
    pub fn from_token(token: &str) -> Option<InfixOp> {
        match token {
            "+" => Some(InfixOp::Add),
            "-" => Some(InfixOp::Sub),
            "*" => Some(InfixOp::Mul),
            "/" => Some(InfixOp::Div),
            "==" => Some(InfixOp::Eq),
            "!=" => Some(InfixOp::Neq),
            "<" => Some(InfixOp::Lt),
            "<=" => Some(InfixOp::Leq),
            ">" => Some(InfixOp::Gt),
            ">=" => Some(InfixOp::Geq),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Number(Rational),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Value::Number(n) => write!(fmt, "{n}"),
            Value::Bool(b) => write!(fmt, "{b}"),
        }
    }
}

impl Expr {
    pub fn parse(tokens: &[String]) -> Result<Expr, EvalError> {
        match tokens {
            [value] => Ok(Expr::Value(value.parse()?)),
            [neg, value] if neg == "neg" => Ok(Expr::Neg(value.parse()?)),
            [value, kw_in, range] if kw_in == "in" => {
                let (low, high) = match range.split_once("..") {
                    Some(bounds) => bounds,
                    None => {
                        return Err(EvalError::invalid_range(range));
                    },
                };

                Ok(Expr::InRange {
                    value: value.parse()?,
                    low: low.parse()?,
                    high: high.parse()?,
                })
            },
            [lhs, op, rhs] => match InfixOp::from_token(op) {
                Some(op) => Ok(Expr::InfixOp(op, lhs.parse()?, rhs.parse()?)),
                None => Err(EvalError::unknown_operator(op)),
            },
            _ => Err(EvalError::wrong_number_of_tokens(tokens.len())),
        }
    }

    pub fn eval(&self) -> Result<Value, EvalError> {
        let result = match self {
            Expr::Value(n) => Value::Number(n.clone()),
            Expr::Neg(n) => Value::Number(n.neg()),
            Expr::InfixOp(op, lhs, rhs) => match op {
                InfixOp::Add => Value::Number(lhs.add_rat(rhs)),
                InfixOp::Sub => Value::Number(lhs.sub_rat(rhs)),
                InfixOp::Mul => Value::Number(lhs.mul_rat(rhs)),
                InfixOp::Div => Value::Number(lhs.div_rat(rhs)?),
                InfixOp::Eq => Value::Bool(lhs.eq_rat(rhs)),
                InfixOp::Neq => Value::Bool(!lhs.eq_rat(rhs)),
                InfixOp::Lt => Value::Bool(lhs.lt_rat(rhs)),
                InfixOp::Leq => Value::Bool(lhs.leq_rat(rhs)),
                InfixOp::Gt => Value::Bool(lhs.gt_rat(rhs)),
                InfixOp::Geq => Value::Bool(lhs.geq_rat(rhs)),
            },
            Expr::InRange { value, low, high } => Value::Bool(value.in_range(low, high)),
        };

        Ok(result)
    }
}

pub fn eval_expression(tokens: &[String]) -> Result<Value, EvalError> {
    Expr::parse(tokens)?.eval()
}

#[derive(Clone, Debug)]
pub struct EvalError {
    kind: EvalErrorKind,
}

impl EvalError {
    pub fn unknown_operator(token: &str) -> Self {
        EvalError {
            kind: EvalErrorKind::UnknownOperator(token.to_string()),
        }
    }

    pub fn invalid_range(token: &str) -> Self {
        EvalError {
            kind: EvalErrorKind::InvalidRange(token.to_string()),
        }
    }

    pub fn wrong_number_of_tokens(count: usize) -> Self {
        EvalError {
            kind: EvalErrorKind::WrongNumberOfTokens(count),
        }
    }

    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    pub fn render_error(&self) -> String {
        let msg = match &self.kind {
            EvalErrorKind::InvalidArgument(e) => format!("invalid argument: {}", e.render_error()),
            EvalErrorKind::UnknownOperator(op) => format!(
                "unknown operator `{op}`\nAvailable operators are `+ - * / == != < <= > >=`."
            ),
            EvalErrorKind::InvalidRange(range) => format!("expected `<low>..<high>`, got `{range}`"),
            EvalErrorKind::WrongNumberOfTokens(count) => format!(
                "an expression has 1 to 3 tokens, got {count}\nTry `rationals --help` to see the available forms."
            ),
        };

        format!(
            "{}\n{msg}",
            "[Error while evaluating an expression]".red(),
        )
    }
}

#[derive(Clone, Debug)]
pub enum EvalErrorKind {
    InvalidArgument(InvalidArgument),
    UnknownOperator(String),
    InvalidRange(String),
    WrongNumberOfTokens(usize),
}

impl From<InvalidArgument> for EvalError {
    fn from(e: InvalidArgument) -> EvalError {
        EvalError {
            kind: EvalErrorKind::InvalidArgument(e),
        }
    }
}
