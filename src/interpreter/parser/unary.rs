use std::iter::Peekable;

use crate::{
    ast::{BoolOperator, Expr, LiteralValue, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_boolean,
            core::{ParseResult, parse_object},
            statement::parse_assignment,
        },
    },
};

/// Parses a call-member expression.
///
/// A member expression is parsed first; every following `(` turns the
/// accumulated expression into a call, so chained calls like `f(1)(2)`
/// nest left-to-right.
///
/// Grammar: `call-member := member ("(" args ")")*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::Call` chain or the bare member expression.
pub fn parse_call_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expr = parse_member(tokens)?;

    while let Some((Token::LParen, line)) = tokens.peek() {
        let line = *line;
        let args = parse_args(tokens)?;
        expr = Expr::Call { caller: Box::new(expr),
                            args,
                            line };
    }

    Ok(expr)
}

/// Parses a parenthesized argument list.
///
/// Arguments are assignment expressions separated by commas; the list may
/// be empty. The opening and closing parentheses are both consumed.
/// Function declarations re-use this machinery for their parameter lists.
///
/// Grammar: `args := "(" (assignment ("," assignment)*)? ")"`
///
/// # Errors
/// Returns a `ParseError` if:
/// - the opening parenthesis is missing,
/// - an argument fails to parse,
/// - the closing parenthesis is missing.
pub(in crate::interpreter::parser) fn parse_args<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected `(`, found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }

    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(Vec::new());
    }

    let mut args = vec![parse_assignment(tokens)?];

    loop {
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
                args.push(parse_assignment(tokens)?);
            },
            Some((Token::RParen, _)) => {
                tokens.next();
                break;
            },
            Some((_, line)) => return Err(ParseError::ExpectedClosingParen { line: *line }),
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(args)
}

/// Parses a member expression.
///
/// After the primary, a `.` begins a recursively parsed member chain. The
/// left-hand side of the dot must be a plain identifier.
///
/// Grammar: `member := primary ("." member)?`
///
/// # Errors
/// Returns `ParseError::InvalidMemberTarget` when the dot follows anything
/// other than an identifier.
fn parse_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let object = parse_primary(tokens)?;

    if let Some((Token::Dot, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let member = parse_member(tokens)?;

        let Expr::Identifier { name, .. } = object else {
            return Err(ParseError::InvalidMemberTarget { line });
        };

        return Ok(Expr::Member { object: name,
                                 member: Box::new(member),
                                 line });
    }

    Ok(object)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - literals (integers, floats, strings, booleans, `null`),
/// - identifiers,
/// - parenthesized boolean expressions,
/// - the `!` prefix, desugared to a `!= true` comparison,
/// - `return` followed by an object expression.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok(Expr::Identifier { name: name.clone(),
                                                                       line: *line, }),
        Some((Token::Int(value), line)) => Ok(Expr::Literal { value: LiteralValue::Int(*value),
                                                              line:  *line, }),
        Some((Token::Float(value), line)) => {
            Ok(Expr::Literal { value: LiteralValue::Float(*value),
                               line:  *line, })
        },
        Some((Token::Str(value), line)) => {
            Ok(Expr::Literal { value: LiteralValue::Str(value.clone()),
                               line:  *line, })
        },
        Some((Token::Bool(value), line)) => Ok(Expr::Literal { value: LiteralValue::Bool(*value),
                                                               line:  *line, }),
        Some((Token::Null, line)) => Ok(Expr::Literal { value: LiteralValue::Null,
                                                        line:  *line, }),

        // Grouping expression.
        Some((Token::LParen, _)) => {
            let expr = parse_boolean(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                Some((_, line)) => Err(ParseError::ExpectedClosingParen { line: *line }),
                None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
            }
        },

        // `!x` desugars to `x != true`.
        Some((Token::Bang, line)) => {
            let line = *line;
            let operand = parse_primary(tokens)?;

            Ok(Expr::Bool { lhs: Box::new(operand),
                            op: BoolOperator::NotEqual,
                            rhs: Box::new(Expr::Literal { value: LiteralValue::Bool(true),
                                                          line }),
                            line })
        },

        Some((Token::Return, line)) => {
            let line = *line;
            let expr = parse_object(tokens)?;

            Ok(Expr::Return { expr: Box::new(expr),
                              line })
        },

        Some((Token::EndOfFile, line)) => {
            Err(ParseError::UnexpectedEndOfInput { line: *line })
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("found {tok:?} during parsing"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
