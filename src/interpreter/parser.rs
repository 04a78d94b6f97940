use std::collections::VecDeque;

use tracing::warn;

use super::{
    ast::{Assignment, BinaryOp, Expression, Function, Statement, DRAW_MARKER},
    error::ParseError,
    tokens::{Keyword, Token, TokenKind},
};

/// Recursive-descent parser over a token stream.
///
/// There is no error recovery: the first mismatch aborts the whole parse.
pub struct Parser {
    stack: VecDeque<Token>,
    eof: Token,
}

impl Parser {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        let stack: VecDeque<Token> = tokens.into_iter().collect();
        let (line, col) = stack.back().map_or((1, 1), |token| (token.line, token.col));

        Self { stack, eof: Token::new(TokenKind::Eof, "", line, col) }
    }

    fn peek(&self) -> &Token {
        self.stack.front().unwrap_or(&self.eof)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn pop(&mut self) -> Token {
        self.stack.pop_front().unwrap_or_else(|| self.eof.clone())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            return Ok(self.pop());
        }

        let token = self.peek();
        Err(ParseError::Expected {
            expected: kind,
            found: token.kind,
            text: token.text.clone(),
            line: token.line,
            col: token.col,
        })
    }

    fn unexpected(&self, context: &'static str) -> ParseError {
        let token = self.peek();
        ParseError::Unexpected {
            context,
            found: token.kind,
            text: token.text.clone(),
            line: token.line,
            col: token.col,
        }
    }

    fn skip_comments(&mut self) {
        while self.check(TokenKind::Comment) {
            self.pop();
        }
    }

    pub fn parse_program(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements: Vec<Statement> = vec![];

        loop {
            self.skip_comments();
            if self.check(TokenKind::Eof) {
                break;
            }

            statements.push(self.parse_statement()?);

            match self.peek().kind {
                TokenKind::Semicolon | TokenKind::Comment => { self.pop(); }
                _ => break,
            }
        }

        if !self.check(TokenKind::Eof) {
            let token = self.peek();
            warn!(line = token.line, col = token.col, "ignoring input after unterminated statement, starting at '{}'", token.text);
        }

        Ok(statements)
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek().kind {
            TokenKind::Keyword(Keyword::Origin) => self.handle_origin(),
            TokenKind::Keyword(Keyword::Scale) => self.handle_scale(),
            TokenKind::Keyword(Keyword::Rot) => self.handle_rotation(),
            TokenKind::Keyword(Keyword::For) => self.handle_for(),
            TokenKind::Identifier if Function::from_name(&self.peek().text).is_some() => self.handle_call_statement(),
            TokenKind::Identifier => self.handle_assignment(),
            _ => Err(self.unexpected("statement")),
        }
    }

    fn handle_origin(&mut self) -> Result<Statement, ParseError> {
        self.expect(TokenKind::Keyword(Keyword::Origin))?;
        self.expect(TokenKind::Keyword(Keyword::Is))?;
        let (x, y) = self.parse_pair()?;

        Ok(Statement::Origin { x, y })
    }

    fn handle_scale(&mut self) -> Result<Statement, ParseError> {
        self.expect(TokenKind::Keyword(Keyword::Scale))?;
        self.expect(TokenKind::Keyword(Keyword::Is))?;
        let (x, y) = self.parse_pair()?;

        Ok(Statement::Scale { x, y })
    }

    fn handle_rotation(&mut self) -> Result<Statement, ParseError> {
        self.expect(TokenKind::Keyword(Keyword::Rot))?;
        self.expect(TokenKind::Keyword(Keyword::Is))?;
        let angle = self.parse_expression()?;

        Ok(Statement::Rotation { angle })
    }

    fn handle_for(&mut self) -> Result<Statement, ParseError> {
        self.expect(TokenKind::Keyword(Keyword::For))?;
        let loop_var = self.expect(TokenKind::Identifier)?.text;
        self.expect(TokenKind::Keyword(Keyword::From))?;
        let start = self.parse_expression()?;
        self.expect(TokenKind::Keyword(Keyword::To))?;
        let end = self.parse_expression()?;
        self.expect(TokenKind::Keyword(Keyword::Step))?;
        let step = self.parse_expression()?;
        self.expect(TokenKind::Keyword(Keyword::Draw))?;
        let (x, y) = self.parse_pair()?;

        let body = Assignment {
            identifier: DRAW_MARKER.to_string(),
            value: Expression::binary(BinaryOp::Comma, x, y),
        };

        Ok(Statement::For { loop_var, start, end, step, body })
    }

    fn handle_assignment(&mut self) -> Result<Statement, ParseError> {
        let identifier = self.expect(TokenKind::Identifier)?.text;
        self.expect(TokenKind::Assign)?;
        let value = self.parse_expression()?;

        Ok(Statement::Assignment(Assignment { identifier, value }))
    }

    // `SIN(30);` stores the call's result under the function's own name
    fn handle_call_statement(&mut self) -> Result<Statement, ParseError> {
        let identifier = self.peek().text.clone();
        let value = self.parse_function_call()?;

        Ok(Statement::Assignment(Assignment { identifier, value }))
    }

    fn parse_pair(&mut self) -> Result<(Expression, Expression), ParseError> {
        self.expect(TokenKind::LeftParen)?;
        let x = self.parse_expression()?;
        self.expect(TokenKind::Comma)?;
        let y = self.parse_expression()?;
        self.expect(TokenKind::RightParen)?;

        Ok((x, y))
    }

    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_term()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOp::Plus,
                TokenKind::Minus => BinaryOp::Minus,
                _ => break,
            };
            self.pop();
            let right = self.parse_term()?;
            left = Expression::binary(op, left, right);
        }

        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_factor()?;

        loop {
            let op = match self.peek().kind {
                TokenKind::Multiply => BinaryOp::Multiply,
                TokenKind::Divide => BinaryOp::Divide,
                _ => break,
            };
            self.pop();
            let right = self.parse_factor()?;
            left = Expression::binary(op, left, right);
        }

        Ok(left)
    }

    // unary sign is desugared to `0 +/- component`
    fn parse_factor(&mut self) -> Result<Expression, ParseError> {
        let op = match self.peek().kind {
            TokenKind::Plus => BinaryOp::Plus,
            TokenKind::Minus => BinaryOp::Minus,
            _ => return self.parse_component(),
        };
        self.pop();
        let component = self.parse_component()?;

        Ok(Expression::binary(op, Expression::constant("0"), component))
    }

    fn parse_component(&mut self) -> Result<Expression, ParseError> {
        let base = self.parse_atom()?;

        if self.check(TokenKind::Power) {
            self.pop();
            let exponent = self.parse_component()?;
            return Ok(Expression::binary(BinaryOp::Power, base, exponent));
        }

        Ok(base)
    }

    fn parse_atom(&mut self) -> Result<Expression, ParseError> {
        match self.peek().kind {
            TokenKind::Constant => Ok(Expression::Constant(self.pop().text)),
            TokenKind::Identifier if Function::from_name(&self.peek().text).is_some() => self.parse_function_call(),
            TokenKind::Identifier => Ok(Expression::Constant(self.pop().text)),
            TokenKind::LeftParen => {
                self.pop();
                let expression = self.parse_expression()?;
                self.expect(TokenKind::RightParen)?;
                Ok(expression)
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    fn parse_function_call(&mut self) -> Result<Expression, ParseError> {
        let name = self.expect(TokenKind::Identifier)?.text;
        self.expect(TokenKind::LeftParen)?;

        let mut args: Vec<Expression> = vec![];
        if !self.check(TokenKind::RightParen) {
            args.push(self.parse_expression()?);
            while self.check(TokenKind::Comma) {
                self.pop();
                args.push(self.parse_expression()?);
            }
        }
        self.expect(TokenKind::RightParen)?;

        Ok(Expression::FunctionCall { name, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
        Parser::new(tokenize(source)).parse_program()
    }

    fn parse_expr(source: &str) -> Expression {
        Parser::new(tokenize(source)).parse_expression().unwrap()
    }

    fn c(text: &str) -> Expression {
        Expression::constant(text)
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(
            parse_expr("2+3*4"),
            Expression::binary(BinaryOp::Plus, c("2"), Expression::binary(BinaryOp::Multiply, c("3"), c("4")))
        );
    }

    #[test]
    fn same_precedence_is_left_associative() {
        assert_eq!(
            parse_expr("8-4-2"),
            Expression::binary(BinaryOp::Minus, Expression::binary(BinaryOp::Minus, c("8"), c("4")), c("2"))
        );
        assert_eq!(
            parse_expr("8/4*2"),
            Expression::binary(BinaryOp::Multiply, Expression::binary(BinaryOp::Divide, c("8"), c("4")), c("2"))
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(
            parse_expr("(2+3)*4"),
            Expression::binary(BinaryOp::Multiply, Expression::binary(BinaryOp::Plus, c("2"), c("3")), c("4"))
        );
    }

    #[test]
    fn unary_sign_is_desugared() {
        assert_eq!(parse_expr("-x"), Expression::binary(BinaryOp::Minus, c("0"), c("x")));
        assert_eq!(parse_expr("+5"), Expression::binary(BinaryOp::Plus, c("0"), c("5")));
    }

    #[test]
    fn power_is_right_associative_and_tighter_than_sign() {
        assert_eq!(
            parse_expr("2**3**2"),
            Expression::binary(BinaryOp::Power, c("2"), Expression::binary(BinaryOp::Power, c("3"), c("2")))
        );
        assert_eq!(
            parse_expr("-2**2"),
            Expression::binary(BinaryOp::Minus, c("0"), Expression::binary(BinaryOp::Power, c("2"), c("2")))
        );
    }

    #[test]
    fn signed_exponent_needs_parentheses() {
        let error = parse("x = 2**-1;").unwrap_err();
        assert!(matches!(
            error,
            ParseError::Unexpected { context: "expression", found: TokenKind::Minus, line: 1, col: 8, .. }
        ));

        assert_eq!(
            parse_expr("2**(-1)"),
            Expression::binary(BinaryOp::Power, c("2"), Expression::binary(BinaryOp::Minus, c("0"), c("1")))
        );
    }

    #[test]
    fn deeply_nested_operands_consume_one_token_each() {
        assert_eq!(
            parse_expr("((1+2)*(3-4))/SIN(5)"),
            Expression::binary(
                BinaryOp::Divide,
                Expression::binary(
                    BinaryOp::Multiply,
                    Expression::binary(BinaryOp::Plus, c("1"), c("2")),
                    Expression::binary(BinaryOp::Minus, c("3"), c("4")),
                ),
                Expression::FunctionCall { name: "SIN".into(), args: vec![c("5")] },
            )
        );
    }

    #[test]
    fn function_calls_take_any_number_of_arguments() {
        assert_eq!(parse_expr("COS()"), Expression::FunctionCall { name: "COS".into(), args: vec![] });
        assert_eq!(
            parse_expr("LN(1, x+1)"),
            Expression::FunctionCall {
                name: "LN".into(),
                args: vec![c("1"), Expression::binary(BinaryOp::Plus, c("x"), c("1"))],
            }
        );
    }

    #[test]
    fn origin_scale_and_rotation() {
        let statements = parse("ORIGIN IS (100, 200); SCALE IS (1.5, 2.5); ROT IS PI/4;").unwrap();
        assert_eq!(statements, vec![
            Statement::Origin { x: c("100"), y: c("200") },
            Statement::Scale { x: c("1.5"), y: c("2.5") },
            Statement::Rotation { angle: Expression::binary(BinaryOp::Divide, c("PI"), c("4")) },
        ]);
    }

    #[test]
    fn assignment() {
        assert_eq!(parse("myVar = 100;").unwrap(), vec![Statement::Assignment(Assignment {
            identifier: "myVar".into(),
            value: c("100"),
        })]);
    }

    #[test]
    fn for_loop_synthesizes_draw_body() {
        let statements = parse("FOR T FROM 0 TO 120 STEP 1 DRAW (T, 3*T);").unwrap();
        assert_eq!(statements, vec![Statement::For {
            loop_var: "T".into(),
            start: c("0"),
            end: c("120"),
            step: c("1"),
            body: Assignment {
                identifier: DRAW_MARKER.into(),
                value: Expression::binary(
                    BinaryOp::Comma,
                    c("T"),
                    Expression::binary(BinaryOp::Multiply, c("3"), c("T")),
                ),
            },
        }]);
    }

    #[test]
    fn bare_function_call_is_a_statement() {
        for name in ["SIN", "COS", "TAN", "SQRT", "EXP", "LN"] {
            let statements = parse(&format!("{name}(30);")).unwrap();
            assert_eq!(statements, vec![Statement::Assignment(Assignment {
                identifier: name.into(),
                value: Expression::FunctionCall { name: name.into(), args: vec![c("30")] },
            })]);
        }
    }

    #[test]
    fn comments_separate_statements() {
        let source = "// leading\nORIGIN IS (1, 2); -- after semicolon\nROT IS 0 // instead of semicolon\nx = 1;";
        let statements = parse(source).unwrap();
        assert_eq!(statements.len(), 3);
        assert!(matches!(statements[2], Statement::Assignment(_)));
    }

    #[test]
    fn final_semicolon_is_optional() {
        assert_eq!(parse("x = 1; y = 2").unwrap().len(), 2);
        assert!(parse("").unwrap().is_empty());
        assert!(parse("// only a comment").unwrap().is_empty());
    }

    #[test]
    fn parsing_stops_after_unterminated_statement() {
        let statements = parse("x = 1 y = 2;").unwrap();
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn mismatch_reports_expected_and_found() {
        let error = parse("ORIGIN (1, 2);").unwrap_err();
        assert_eq!(error, ParseError::Expected {
            expected: TokenKind::Keyword(Keyword::Is),
            found: TokenKind::LeftParen,
            text: "(".into(),
            line: 1,
            col: 8,
        });
    }

    #[test]
    fn missing_closing_paren_is_fatal() {
        let error = parse("SCALE IS (1, 2;").unwrap_err();
        assert!(matches!(error, ParseError::Expected { expected: TokenKind::RightParen, found: TokenKind::Semicolon, .. }));

        let error = parse("x = SIN(1;").unwrap_err();
        assert!(matches!(error, ParseError::Expected { expected: TokenKind::RightParen, .. }));
    }

    #[test]
    fn illegal_token_is_a_parse_error() {
        let error = parse("x = 3 + $;").unwrap_err();
        assert!(matches!(error, ParseError::Unexpected { found: TokenKind::Illegal, ref text, .. } if text == "$"));
        assert!(error.to_string().contains("illegal character"));
    }

    #[test]
    fn unexpected_statement_start() {
        let error = parse("42;").unwrap_err();
        assert!(matches!(error, ParseError::Unexpected { context: "statement", found: TokenKind::Constant, .. }));
    }

    #[test]
    fn for_requires_identifier_loop_variable() {
        let error = parse("FOR 1 FROM 0 TO 1 STEP 1 DRAW (1, 1);").unwrap_err();
        assert!(matches!(error, ParseError::Expected { expected: TokenKind::Identifier, .. }));
    }

    #[test]
    fn truncated_input_reports_end_of_input() {
        let error = parse("FOR T FROM 0 TO").unwrap_err();
        assert!(matches!(error, ParseError::Unexpected { found: TokenKind::Eof, .. }));
    }
}
