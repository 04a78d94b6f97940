/// Identifier of the synthetic assignment that a `FOR ... DRAW (x, y)` body becomes.
pub const DRAW_MARKER: &str = "DRAW";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BinaryOp {
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    // only legal as the top-level value of a draw body
    Comma,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    /// Numeric literal, `PI`/`E`, or an identifier whose lookup is deferred to evaluation.
    Constant(String),
    /// Direct variable reference. The parser never emits this; identifiers arrive as `Constant`.
    Variable(String),
    Binary { op: BinaryOp, left: Box<Expression>, right: Box<Expression> },
    FunctionCall { name: String, args: Vec<Expression> },
}

impl Expression {
    pub fn constant(text: impl Into<String>) -> Self {
        Expression::Constant(text.into())
    }

    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Self {
        Expression::Binary { op, left: Box::new(left), right: Box::new(right) }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub identifier: String,
    pub value: Expression,
}

impl Assignment {
    pub fn is_draw(&self) -> bool {
        self.identifier == DRAW_MARKER
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Origin { x: Expression, y: Expression },
    Scale { x: Expression, y: Expression },
    Rotation { angle: Expression },
    Assignment(Assignment),
    For { loop_var: String, start: Expression, end: Expression, step: Expression, body: Assignment },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Exp,
    Ln,
}

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SIN" => Some(Function::Sin),
            "COS" => Some(Function::Cos),
            "TAN" => Some(Function::Tan),
            "SQRT" => Some(Function::Sqrt),
            "EXP" => Some(Function::Exp),
            "LN" => Some(Function::Ln),
            _ => None,
        }
    }

    pub fn apply(&self, arg: f64) -> f64 {
        match self {
            Function::Sin => arg.sin(),
            Function::Cos => arg.cos(),
            Function::Tan => arg.tan(),
            Function::Sqrt => arg.sqrt(),
            Function::Exp => arg.exp(),
            Function::Ln => arg.ln(),
        }
    }
}
