use std::f64::consts::{E, PI};

use tracing::{debug, trace};

use crate::render::RenderError;
use super::{
    ast::{Assignment, BinaryOp, Expression, Function, Statement},
    environment::Environment,
    error::EvalError,
    transform::transform,
};

/// Receives the transformed points a program draws, in emission order.
///
/// `finish` is called exactly once after the last point, whether or not the run succeeded.
pub trait PointSink {
    fn draw_point(&mut self, x: f64, y: f64);

    fn finish(&mut self) -> Result<(), RenderError>;
}

impl PointSink for Vec<(f64, f64)> {
    fn draw_point(&mut self, x: f64, y: f64) {
        self.push((x, y));
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Scalar(f64),
    Pair(f64, f64),
}

impl Value {
    pub fn scalar(self) -> Result<f64, EvalError> {
        match self {
            Value::Scalar(value) => Ok(value),
            Value::Pair(..) => Err(EvalError::UnexpectedPair),
        }
    }
}

pub fn run(statements: &[Statement], env: &mut Environment, sink: &mut dyn PointSink) -> Result<(), EvalError> {
    for statement in statements {
        execute_statement(statement, env, sink)?;
    }

    Ok(())
}

fn execute_statement(statement: &Statement, env: &mut Environment, sink: &mut dyn PointSink) -> Result<(), EvalError> {
    match statement {
        Statement::Origin { x, y } => {
            env.origin = (evaluate_scalar(x, env)?, evaluate_scalar(y, env)?);
            debug!(x = env.origin.0, y = env.origin.1, "origin set");
        }

        Statement::Scale { x, y } => {
            env.scale = (evaluate_scalar(x, env)?, evaluate_scalar(y, env)?);
            debug!(x = env.scale.0, y = env.scale.1, "scale set");
        }

        Statement::Rotation { angle } => {
            env.rotation = evaluate_scalar(angle, env)?;
            debug!(radians = env.rotation, degrees = env.rotation.to_degrees(), "rotation set");
        }

        Statement::Assignment(assignment) => {
            execute_assignment(assignment, env, sink)?;
        }

        Statement::For { loop_var, start, end, step, body } => {
            let start = evaluate_scalar(start, env)?;
            let end = evaluate_scalar(end, env)?;
            let step = evaluate_scalar(step, env)?;

            if step == 0.0 {
                return Err(EvalError::ZeroStep { loop_var: loop_var.clone() });
            }
            if step < 0.0 && start <= end {
                return Err(EvalError::NonTerminatingLoop { loop_var: loop_var.clone(), step });
            }

            let mut value = start;
            let mut iterations: usize = 0;

            while value <= end {
                env.assign(loop_var, value);
                execute_assignment(body, env, sink)?;
                iterations += 1;

                let next = value + step;
                if next == value {
                    return Err(EvalError::LoopStalled { loop_var: loop_var.clone(), value });
                }
                value = next;
            }

            debug!(loop_var = loop_var.as_str(), start, end, step, iterations, "loop finished");
        }
    }

    Ok(())
}

fn execute_assignment(assignment: &Assignment, env: &mut Environment, sink: &mut dyn PointSink) -> Result<(), EvalError> {
    let value = evaluate(&assignment.value, env)?;

    if assignment.is_draw() {
        let Value::Pair(x, y) = value else {
            return Err(EvalError::MalformedDraw(value.scalar()?));
        };

        let (x, y) = transform(x, y, env);
        trace!(x, y, "draw");
        sink.draw_point(x, y);
    } else {
        let value = value.scalar()?;
        env.assign(&assignment.identifier, value);
        debug!(identifier = assignment.identifier.as_str(), value, "assigned");
    }

    Ok(())
}

/// Evaluates an expression to one number, or to an `(x, y)` pair for the comma operator.
pub fn evaluate(expression: &Expression, env: &Environment) -> Result<Value, EvalError> {
    match expression {
        Expression::Constant(text) => evaluate_constant(text, env).map(Value::Scalar),

        Expression::Variable(name) => env
            .lookup(name)
            .map(Value::Scalar)
            .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),

        Expression::Binary { op, left, right } => {
            let left = evaluate_scalar(left, env)?;
            let right = evaluate_scalar(right, env)?;

            Ok(match op {
                BinaryOp::Plus => Value::Scalar(left + right),
                BinaryOp::Minus => Value::Scalar(left - right),
                BinaryOp::Multiply => Value::Scalar(left * right),
                BinaryOp::Divide => Value::Scalar(left / right),
                BinaryOp::Power => Value::Scalar(left.powf(right)),
                BinaryOp::Comma => Value::Pair(left, right),
            })
        }

        Expression::FunctionCall { name, args } => {
            let function = Function::from_name(name).ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;

            let [arg] = args.as_slice() else {
                return Err(EvalError::Arity { name: name.clone(), found: args.len() });
            };

            Ok(Value::Scalar(function.apply(evaluate_scalar(arg, env)?)))
        }
    }
}

fn evaluate_scalar(expression: &Expression, env: &Environment) -> Result<f64, EvalError> {
    evaluate(expression, env)?.scalar()
}

// named constants win over variables, variables win over literals
fn evaluate_constant(text: &str, env: &Environment) -> Result<f64, EvalError> {
    match text {
        "PI" => Ok(PI),
        "E" => Ok(E),
        _ => env
            .lookup(text)
            .or_else(|| parse_literal(text))
            .ok_or_else(|| EvalError::UndefinedVariable(text.to_string())),
    }
}

// accepts `12`, `1.5`, and the lexer's fraction form `100/3`
fn parse_literal(text: &str) -> Option<f64> {
    if !text.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    match text.split_once('/') {
        Some((numerator, denominator)) => Some(numerator.parse::<f64>().ok()? / denominator.parse::<f64>().ok()?),
        None => text.parse().ok(),
    }
}
