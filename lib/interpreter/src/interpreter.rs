use std::io::Write;

use cursor::Line;
use errors::LoxErrors;
use log::debug;
use parser::Expr;
use scanner::{Token, TokenType};

mod value;
pub use value::Value;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
    #[error("Operand must be a number.")]
    OperandMustBeNumber,
    #[error("both operands must be a number or a string.")]
    InvalidPlusOperands,
}

/// A type error raised while evaluating, attributed to the offending operator.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{error}\n[line {line}]")]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub operator: String,
    pub line: Line,
}

impl RuntimeError {
    fn new(error: RuntimeErrorType, operator: &Token) -> Self {
        Self { error, operator: operator.lexeme().to_string(), line: operator.line() }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum InterpretError {
    #[error(transparent)]
    CompileError(#[from] LoxErrors),
    #[error(transparent)]
    RuntimeError(#[from] RuntimeError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Tree-walking evaluator. Holds no state, so every run is independent.
#[derive(Debug, Default)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Self
    }

    /// Scans, parses and evaluates `source`, writing the resulting value to `output`.
    pub fn run_source(&self, source: &str, output: &mut impl Write) -> Result<(), InterpretError> {
        let expr = parser::parse_source(source)?;
        self.interpret(&expr, output)
    }

    pub fn interpret(&self, expr: &Expr, output: &mut impl Write) -> Result<(), InterpretError> {
        debug!("Interpreting {}", expr);
        let value = self.evaluate(expr)?;
        writeln!(output, "{}", value)?;
        Ok(())
    }

    pub fn evaluate(&self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Literal(literal) => Ok(literal.into()),

            Expr::Grouping(expr) => self.evaluate(expr),

            Expr::Unary { operator, right } => {
                let right = self.evaluate(right)?;
                match (operator.ty(), right) {
                    (TokenType::Minus, Value::Number(n)) => Ok((-n).into()),
                    (TokenType::Bang, v) => Ok((!v.is_truthy()).into()),
                    _ => Err(RuntimeError::new(RuntimeErrorType::OperandMustBeNumber, operator)),
                }
            }

            Expr::Binary { left, operator, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                self.binary(left, operator, right)
            }
        }
    }

    fn binary(&self, left: Value, operator: &Token, right: Value) -> Result<Value, RuntimeError> {
        use TokenType::*;
        use Value::Number;

        match (&left, operator.ty(), &right) {
            (_, EqualEqual, _) => Ok(left.eq_in_lox(&right).into()),
            (_, BangEqual, _) => Ok((!left.eq_in_lox(&right)).into()),

            (Number(l), Plus, Number(r)) => Ok((l + r).into()),
            (_, Plus, Value::Str(r)) => Ok(format!("{}{}", left, r).into()),
            (_, Plus, _) => {
                Err(RuntimeError::new(RuntimeErrorType::InvalidPlusOperands, operator))
            }

            (Number(l), Minus, Number(r)) => Ok((l - r).into()),
            (Number(l), Slash, Number(r)) => Ok((l / r).into()),
            (Number(l), Star, Number(r)) => Ok((l * r).into()),

            (Number(l), Greater, Number(r)) => Ok((l > r).into()),
            (Number(l), GreaterEqual, Number(r)) => Ok((l >= r).into()),
            (Number(l), Less, Number(r)) => Ok((l < r).into()),
            (Number(l), LessEqual, Number(r)) => Ok((l <= r).into()),

            _ => Err(RuntimeError::new(RuntimeErrorType::OperandMustBeNumber, operator)),
        }
    }
}
