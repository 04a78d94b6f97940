use std::{io, path::PathBuf};

use thiserror::Error;

use crate::render::RenderError;
use super::tokens::TokenKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("{line}:{col} Expected {expected}, got {found} '{text}'")]
    Expected { expected: TokenKind, found: TokenKind, text: String, line: usize, col: usize },

    #[error("{line}:{col} Unexpected {found} '{text}' in {context}")]
    Unexpected { context: &'static str, found: TokenKind, text: String, line: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Function {name} takes exactly one argument, got {found}")]
    Arity { name: String, found: usize },

    #[error("Coordinate pair used where a single value was expected")]
    UnexpectedPair,

    #[error("DRAW needs an (x, y) pair but the body evaluated to {0}")]
    MalformedDraw(f64),

    #[error("FOR {loop_var} has a STEP of zero and would never terminate")]
    ZeroStep { loop_var: String },

    #[error("FOR {loop_var} counts upward to its end with a negative STEP ({step}) and would never terminate")]
    NonTerminatingLoop { loop_var: String, step: f64 },

    #[error("FOR {loop_var} stopped advancing at {value}; STEP is too small for this range")]
    LoopStalled { loop_var: String, value: f64 },
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Script '{}' could not be read: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}
