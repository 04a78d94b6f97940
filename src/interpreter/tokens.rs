use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub col: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, col: usize) -> Self {
        Self { kind, text: text.into(), line, col }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    Eof,
    Identifier,
    Constant,

    // OPERATORS
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    Assign,

    // DELIMITERS
    Comma,
    Semicolon,
    LeftParen,
    RightParen,

    Keyword(Keyword),
    Comment,
    Illegal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Keyword {
    Origin,
    Is,
    Scale,
    Rot,
    For,
    From,
    To,
    Step,
    Draw,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Origin => "ORIGIN",
            Keyword::Is => "IS",
            Keyword::Scale => "SCALE",
            Keyword::Rot => "ROT",
            Keyword::For => "FOR",
            Keyword::From => "FROM",
            Keyword::To => "TO",
            Keyword::Step => "STEP",
            Keyword::Draw => "DRAW",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Constant => write!(f, "constant"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Multiply => write!(f, "'*'"),
            TokenKind::Divide => write!(f, "'/'"),
            TokenKind::Power => write!(f, "'**'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::LeftParen => write!(f, "'('"),
            TokenKind::RightParen => write!(f, "')'"),
            TokenKind::Keyword(keyword) => write!(f, "{}", keyword.as_str()),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::Illegal => write!(f, "illegal character"),
        }
    }
}
