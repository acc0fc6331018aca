use std::iter::Peekable;

use crate::{
    ast::{ConditionalClause, Expr, FunctionDecl, Stmt},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::{parse_additive, parse_boolean},
            core::{ParseResult, parse_object},
            unary::parse_args,
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// Dispatch is by the current token:
/// - `let` / `const` begin a variable declaration,
/// - `fn` begins a function declaration,
/// - `if` begins a conditional block,
/// - `for` / `while` begin loops,
/// - anything else is parsed as an assignment expression.
///
/// Every statement may carry one optional trailing `;`, consumed here.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statement = match tokens.peek() {
        Some((Token::Let | Token::Const, _)) => parse_declaration(tokens)?,
        Some((Token::Fn, _)) => parse_function(tokens)?,
        Some((Token::If, _)) => parse_conditional(tokens)?,
        Some((Token::For, _)) => parse_for(tokens)?,
        Some((Token::While, _)) => parse_while(tokens)?,
        _ => parse_assignment(tokens)?,
    };

    if let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }

    Ok(statement)
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `let|const <identifier> = <object-expr>` or
/// the bare form `let <identifier>;`. A bare `const` is an error: constants
/// must be initialized.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is missing,
/// - a `const` has no initializer,
/// - neither `=` nor `;` follows the identifier.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (constant, line) = match tokens.next() {
        Some((Token::Const, line)) => (true, *line),
        Some((_, line)) => (false, *line),
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let name = parse_identifier(tokens)?;

    match tokens.peek() {
        // Bare declaration; the trailing `;` is consumed by the dispatch.
        Some((Token::Semicolon, _)) => {
            if constant {
                return Err(ParseError::ConstWithoutValue { name, line });
            }

            Ok(Stmt::VarDeclaration { name,
                                      expr: None,
                                      constant,
                                      line })
        },

        Some((Token::Equals, _)) => {
            tokens.next();
            let expr = parse_object(tokens)?;

            Ok(Stmt::VarDeclaration { name,
                                      expr: Some(expr),
                                      constant,
                                      line })
        },

        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected equals `=` following identifier in variable declaration, found {tok:?}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a function declaration.
///
/// Syntax: `fn <name> ( <params> ) { <body> }`.
///
/// The parameter list is parsed with the call-argument machinery; each
/// resulting argument must be a plain identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name or parentheses are missing,
/// - a parameter is not an identifier,
/// - the body is malformed.
fn parse_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.next().map_or(0, |(_, l)| *l);
    let name = parse_identifier(tokens)?;

    let args = parse_args(tokens)?;
    let mut params = Vec::with_capacity(args.len());

    for arg in args {
        if let Stmt::Expression { expr: Expr::Identifier { name, .. },
                                  .. } = arg
        {
            params.push(name);
        } else {
            return Err(ParseError::InvalidFunctionParameter { line });
        }
    }

    let body = parse_body(tokens)?;

    Ok(Stmt::FunctionDeclaration(FunctionDecl { name,
                                                params,
                                                body,
                                                line }))
}

/// Parses a brace-delimited statement body.
///
/// Grammar: `body := "{" statement* "}"`
fn parse_body<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LBrace, "Expected `{` to open a body")?;
    let mut body = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                return Ok(body);
            },
            Some((Token::EndOfFile, line)) => {
                return Err(ParseError::UnexpectedEndOfInput { line: *line });
            },
            Some(_) => body.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
}

/// Parses a conditional block.
///
/// Syntax:
/// ```text
///     if (<boolean>) { ... }
///     elif (<boolean>) { ... }
///     else { ... }
/// ```
/// One `if` arm, any number of `elif` arms, and an optional trailing `else`
/// arm are collected into a single [`Stmt::Conditional`]. Only the `else`
/// arm has no condition.
fn parse_conditional<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.next().map_or(0, |(_, l)| *l);
    let mut clauses = vec![parse_guarded_clause(tokens)?];

    loop {
        match tokens.peek() {
            Some((Token::Elif, _)) => {
                tokens.next();
                clauses.push(parse_guarded_clause(tokens)?);
            },
            Some((Token::Else, _)) => {
                tokens.next();
                let body = parse_body(tokens)?;
                clauses.push(ConditionalClause { condition: None,
                                                 body });
                break;
            },
            _ => break,
        }
    }

    Ok(Stmt::Conditional { clauses, line })
}

/// Parses one `( <boolean> ) { <body> }` arm of a conditional block.
fn parse_guarded_clause<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ConditionalClause>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen, "Expected `(` before condition")?;
    let condition = parse_boolean(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => {},
        Some((_, line)) => return Err(ParseError::ExpectedClosingParen { line: *line }),
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }

    let body = parse_body(tokens)?;

    Ok(ConditionalClause { condition: Some(condition),
                           body })
}

/// Parses a for loop.
///
/// Syntax: `for ( <ident> = <object-expr> , <boolean> , <counter> ) { body }`.
///
/// The counter slot accepts an additive expression or an increment
/// (`i++` / `i--`) and is evaluated once per iteration.
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.next().map_or(0, |(_, l)| *l);
    expect_token(tokens, &Token::LParen, "Expected `(` after `for`")?;

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Equals, "Expected `=` in for-loop header")?;
    let init = parse_object(tokens)?;

    expect_token(tokens, &Token::Comma, "Expected `,` after for-loop assignment")?;
    let condition = parse_boolean(tokens)?;

    expect_token(tokens, &Token::Comma, "Expected `,` after for-loop condition")?;
    let counter = parse_additive(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => {},
        Some((_, l)) => return Err(ParseError::ExpectedClosingParen { line: *l }),
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let body = parse_body(tokens)?;

    Ok(Stmt::ForLoop { name,
                       init,
                       condition,
                       counter,
                       body,
                       line })
}

/// Parses a while loop.
///
/// Syntax: `while ( <boolean> ) { body }`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.next().map_or(0, |(_, l)| *l);
    expect_token(tokens, &Token::LParen, "Expected `(` after `while`")?;

    let condition = parse_boolean(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => {},
        Some((_, l)) => return Err(ParseError::ExpectedClosingParen { line: *l }),
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let body = parse_body(tokens)?;

    Ok(Stmt::WhileLoop { condition,
                         body,
                         line })
}

/// Parses an assignment expression.
///
/// An object expression is parsed first; when it turns out to be a bare
/// identifier followed by a single `=`, the right-hand side is parsed and a
/// [`Stmt::VarAssignment`] is produced. (A doubled `=` has already been
/// consumed as `==` by the boolean level.) Otherwise the expression itself
/// becomes the statement.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expression.
///
/// # Returns
/// A [`Stmt::VarAssignment`] or [`Stmt::Expression`].
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let current_line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_object(tokens)?;

    if let Expr::Identifier { name, line } = &expr
       && let Some((Token::Equals, _)) = tokens.peek()
    {
        let name = name.clone();
        let line = *line;
        tokens.next();
        let value = parse_object(tokens)?;

        return Ok(Stmt::VarAssignment { name,
                                        expr: value,
                                        line });
    }

    Ok(Stmt::Expression { expr,
                          line: current_line })
}
