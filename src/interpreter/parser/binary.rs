use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, BoolOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_call_member, utils::peek_cloned},
    },
};

/// Parses a boolean expression.
///
/// After the additive operand, at most one comparison is recognized,
/// followed by at most one logical connective. Compound operators are
/// merged here from adjacent single-character tokens, since the lexer never
/// produces them:
///
/// - `>` + `=` and `<` + `=` become `>=` / `<=`,
/// - `=` + `=` and `!` + `=` become `==` / `!=`,
/// - `&` + `&` and `|` + `|` become `&&` / `||`.
///
/// A single `=` is left in place for the assignment machinery. Logical
/// connectives recurse on the right-hand side, so chains nest
/// right-associatively.
///
/// Grammar:
/// ```text
///     boolean := additive (cmp-op additive)? (("&&" | "||") boolean)?
/// ```
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Bool` tree, or the bare additive expression when no operator
/// follows.
pub fn parse_boolean<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let lhs = parse_additive(tokens)?;

    let compared = if let Some((op, line)) = match_comparison(tokens) {
        let rhs = parse_additive(tokens)?;
        Expr::Bool { lhs: Box::new(lhs),
                     op,
                     rhs: Box::new(rhs),
                     line }
    } else {
        lhs
    };

    if let Some((op, line)) = match_connective(tokens) {
        let rhs = parse_boolean(tokens)?;

        return Ok(Expr::Bool { lhs: Box::new(compared),
                               op,
                               rhs: Box::new(rhs),
                               line });
    }

    Ok(compared)
}

/// Recognizes and consumes a comparison operator at the cursor.
///
/// Adjacent `=`/`!`/`>`/`<` + `=` pairs are merged into the compound
/// operators. A lone `=` or `!` is left untouched for the assignment and
/// prefix machinery.
///
/// # Returns
/// The operator and its source line, or `None` when the cursor is not on a
/// comparison.
fn match_comparison<'a, I>(tokens: &mut Peekable<I>) -> Option<(BoolOperator, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (first, line) = peek_cloned(tokens)?;
    let second = tokens.clone().nth(1).map(|(tok, _)| tok.clone());

    let (op, length) = match (first, second) {
        (Token::Greater, Some(Token::Equals)) => (BoolOperator::GreaterEqual, 2),
        (Token::Greater, _) => (BoolOperator::Greater, 1),
        (Token::Less, Some(Token::Equals)) => (BoolOperator::LessEqual, 2),
        (Token::Less, _) => (BoolOperator::Less, 1),
        (Token::Equals, Some(Token::Equals)) => (BoolOperator::Equal, 2),
        (Token::Bang, Some(Token::Equals)) => (BoolOperator::NotEqual, 2),
        _ => return None,
    };

    for _ in 0..length {
        tokens.next();
    }

    Some((op, line))
}

/// Recognizes and consumes a logical connective (`&&` or `||`) at the
/// cursor, formed from two adjacent `&` or `|` tokens.
fn match_connective<'a, I>(tokens: &mut Peekable<I>) -> Option<(BoolOperator, usize)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (first, line) = peek_cloned(tokens)?;
    let second = tokens.clone().nth(1).map(|(tok, _)| tok.clone());

    let op = match (first, second) {
        (Token::Ampersand, Some(Token::Ampersand)) => BoolOperator::And,
        (Token::Pipe, Some(Token::Pipe)) => BoolOperator::Or,
        _ => return None,
    };

    tokens.next();
    tokens.next();

    Some((op, line))
}

/// Parses addition and subtraction expressions.
///
/// An identifier followed by two adjacent `+` or `-` tokens is recognized
/// first and becomes an `Expr::Increment`. Otherwise the level is
/// left-associative over `+` and `-`.
///
/// Grammar:
/// ```text
///     additive := IDENT ("++" | "--")
///               | multiplicative (("+" | "-") multiplicative)*
/// ```
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree, an `Expr::Increment`, or the bare operand.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(increment) = match_increment(tokens) {
        return Ok(increment);
    }

    let mut lhs = parse_multiplicative(tokens)?;

    loop {
        let op = match tokens.peek() {
            Some((Token::Plus, _)) => BinaryOperator::Add,
            Some((Token::Minus, _)) => BinaryOperator::Sub,
            _ => break,
        };

        let line = tokens.next().map_or(0, |(_, l)| *l);
        let rhs = parse_multiplicative(tokens)?;
        lhs = Expr::Binary { lhs: Box::new(lhs),
                             op,
                             rhs: Box::new(rhs),
                             line };
    }

    Ok(lhs)
}

/// Recognizes and consumes `IDENT ++` or `IDENT --` at the cursor.
fn match_increment<'a, I>(tokens: &mut Peekable<I>) -> Option<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (first, line) = peek_cloned(tokens)?;
    let Token::Identifier(name) = first else {
        return None;
    };

    let mut lookahead = tokens.clone();
    lookahead.next();

    let op = match (lookahead.next(), lookahead.next()) {
        (Some((Token::Plus, _)), Some((Token::Plus, _))) => BinaryOperator::Add,
        (Some((Token::Minus, _)), Some((Token::Minus, _))) => BinaryOperator::Sub,
        _ => return None,
    };

    tokens.next();
    tokens.next();
    tokens.next();

    Some(Expr::Increment { name, op, line })
}

/// Parses multiplication, division and modulo expressions.
///
/// The right-hand side recurses at this same level, so the operators group
/// right-associatively: `10 / 2 / 5` parses as `10 / (2 / 5)`.
///
/// Grammar: `multiplicative := call-member (("*" | "/" | "%") multiplicative)?`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Binary` tree, or the bare operand when no operator follows.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let lhs = parse_call_member(tokens)?;

    let op = match tokens.peek() {
        Some((Token::Star, _)) => BinaryOperator::Mul,
        Some((Token::Slash, _)) => BinaryOperator::Div,
        Some((Token::Percent, _)) => BinaryOperator::Mod,
        _ => return Ok(lhs),
    };

    let line = tokens.next().map_or(0, |(_, l)| *l);
    let rhs = parse_multiplicative(tokens)?;

    Ok(Expr::Binary { lhs: Box::new(lhs),
                      op,
                      rhs: Box::new(rhs),
                      line })
}
