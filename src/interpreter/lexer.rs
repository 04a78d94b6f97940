use std::sync::LazyLock;

use regex::{Captures, Regex};
use super::{tokens::{Token, TokenKind}, KEYWORDS};

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?x)
        ^(?:
            (?P<WhiteSpace> \s+) |
            (?P<Comment> (?://|--)[^\r\n]*) |
            (?P<Number> [0-9]+(?:\.[0-9]*)?(?:/[0-9]+)?) |
            (?P<Identifier> [\p{L}_][\p{L}\p{N}_]*) |
            (?P<Power> \*\*) |
            (?P<Symbol> [-+*/=,;()]) |
            (?P<Illegal> (?s:.))
        )"
    ).unwrap()
});

/// Splits source text into tokens on demand.
///
/// After the input is exhausted every call to [`Lexer::next_token`] returns
/// an `Eof` token; the [`Iterator`] impl yields that `Eof` once and then stops.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    col: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0, line: 1, col: 1, finished: false }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            let rest = &self.source[self.pos..];
            let (line, col) = (self.line, self.col);

            let Some(captures) = TOKEN_REGEX.captures(rest) else {
                return Token::new(TokenKind::Eof, "", line, col);
            };

            let text = captures.get(0).map_or("", |m| m.as_str());
            self.consume(text);

            if captures.name("WhiteSpace").is_some() {
                continue;
            }

            return Token::new(classify(&captures, text), text, line, col);
        }
    }

    fn consume(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }

        self.pos += text.len();
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }

        Some(token)
    }
}

pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

fn classify(captures: &Captures, text: &str) -> TokenKind {
    if captures.name("Comment").is_some() {
        TokenKind::Comment
    } else if captures.name("Number").is_some() {
        TokenKind::Constant
    } else if captures.name("Identifier").is_some() {
        KEYWORDS.get(text).copied().unwrap_or(TokenKind::Identifier)
    } else if captures.name("Power").is_some() {
        TokenKind::Power
    } else if captures.name("Symbol").is_some() {
        match text {
            "+" => TokenKind::Plus,
            "-" => TokenKind::Minus,
            "*" => TokenKind::Multiply,
            "/" => TokenKind::Divide,
            "=" => TokenKind::Assign,
            "," => TokenKind::Comma,
            ";" => TokenKind::Semicolon,
            "(" => TokenKind::LeftParen,
            _ => TokenKind::RightParen,
        }
    } else {
        TokenKind::Illegal
    }
}
