pub mod ast;
pub mod environment;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod run_script;
pub mod tokens;
pub mod transform;

use std::{
    collections::HashMap,
    fs,
    path::Path,
    sync::LazyLock,
};

use tracing::{info, warn};

use crate::render::{PlotConfig, Plotter};
use ast::Statement;
use lexer::Lexer;
use parser::Parser;
use tokens::{Keyword, TokenKind};

pub use environment::Environment;
pub use error::{EvalError, ParseError, ScriptError};
pub use run_script::{evaluate, run, PointSink, Value};

static KEYWORDS: LazyLock<HashMap<&str, TokenKind>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    map.insert("ORIGIN", TokenKind::Keyword(Keyword::Origin));
    map.insert("IS", TokenKind::Keyword(Keyword::Is));
    map.insert("SCALE", TokenKind::Keyword(Keyword::Scale));
    map.insert("ROT", TokenKind::Keyword(Keyword::Rot));
    map.insert("FOR", TokenKind::Keyword(Keyword::For));
    map.insert("FROM", TokenKind::Keyword(Keyword::From));
    map.insert("TO", TokenKind::Keyword(Keyword::To));
    map.insert("STEP", TokenKind::Keyword(Keyword::Step));
    map.insert("DRAW", TokenKind::Keyword(Keyword::Draw));

    // named constants
    map.insert("PI", TokenKind::Constant);
    map.insert("E", TokenKind::Constant);

    map
});

pub fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
    Parser::new(Lexer::new(source)).parse_program()
}

/// Runs parsed statements against a fresh environment.
///
/// The sink is finished on every path; an evaluation error takes precedence
/// over a failure to finish.
pub fn evaluate_program(statements: &[Statement], sink: &mut dyn PointSink) -> Result<Environment, ScriptError> {
    let mut env = Environment::new();

    let outcome = run(statements, &mut env, sink);
    let finished = sink.finish();

    if let (Err(_), Err(error)) = (&outcome, &finished) {
        warn!(%error, "Output could not be finished after the run failed.");
    }

    outcome?;
    finished?;

    Ok(env)
}

/// Parses and runs `source`. A parse error returns before the sink sees any call.
pub fn execute(source: &str, sink: &mut dyn PointSink) -> Result<Environment, ScriptError> {
    let statements = parse(source)?;

    evaluate_program(&statements, sink)
}

pub fn run_script(path: impl AsRef<Path>, config: PlotConfig) -> Result<Environment, ScriptError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ScriptError::Io { path: path.to_path_buf(), source })?;

    let statements = parse(&source)?;
    info!(statements = statements.len(), "Parsed script '{}'.", path.display());

    let mut plotter = Plotter::new(config);
    let env = evaluate_program(&statements, &mut plotter)?;
    info!(drawn = plotter.drawn(), skipped = plotter.skipped(), "Finished script '{}'.", path.display());

    Ok(env)
}
