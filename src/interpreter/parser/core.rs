use std::iter::Peekable;

use crate::{
    ast::{Expr, Property},
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_boolean},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses an object expression.
///
/// This is the entry point for value expressions. When the current token is
/// `{`, an object literal is parsed; otherwise parsing falls through to the
/// boolean precedence level.
///
/// Grammar: `object := "{" properties "}" | boolean`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_object<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LBrace, line)) => {
            let line = *line;
            tokens.next();
            parse_object_body(tokens, line)
        },
        _ => parse_boolean(tokens),
    }
}

/// Parses the properties of an object literal, after the opening `{`.
///
/// Each property is `IDENT` (shorthand, re-using an existing binding) or
/// `IDENT = <object-expr>`; properties are separated by commas and the
/// literal is terminated by `}`.
///
/// # Errors
/// - A non-identifier where a key is expected.
/// - A missing `=`, `,` or `}` after a key or property.
/// - End of input inside the literal.
fn parse_object_body<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut properties = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },

            Some((Token::Identifier(_), _)) => {
                let (key, key_line) = match tokens.next() {
                    Some((Token::Identifier(name), l)) => (name.clone(), *l),
                    _ => unreachable!(),
                };

                match tokens.peek() {
                    // Shorthand property; the value is resolved from an
                    // existing binding at evaluation time.
                    Some((Token::Comma, _)) => {
                        tokens.next();
                        properties.push(Property { key,
                                                   value: None,
                                                   line: key_line, });
                    },
                    Some((Token::RBrace, _)) => {
                        properties.push(Property { key,
                                                   value: None,
                                                   line: key_line, });
                    },

                    Some((Token::Equals, _)) => {
                        tokens.next();
                        let value = parse_object(tokens)?;
                        properties.push(Property { key,
                                                   value: Some(value),
                                                   line: key_line, });

                        match tokens.peek() {
                            Some((Token::Comma, _)) => {
                                tokens.next();
                            },
                            Some((Token::RBrace, _)) => {},
                            Some((tok, l)) => {
                                return Err(ParseError::UnexpectedToken { token: format!("Expected closing bracket or comma following property, found {tok:?}"),
                                                                         line:  *l, });
                            },
                            None => {
                                return Err(ParseError::UnexpectedEndOfInput { line: key_line });
                            },
                        }
                    },

                    Some((tok, l)) => {
                        return Err(ParseError::UnexpectedToken { token: format!("Expected `=`, `,` or `}}` after object key, found {tok:?}"),
                                                                 line:  *l, });
                    },
                    None => return Err(ParseError::UnexpectedEndOfInput { line: key_line }),
                }
            },

            Some((Token::EndOfFile, l)) => {
                return Err(ParseError::UnexpectedEndOfInput { line: *l });
            },
            Some((tok, l)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Object key expected, found {tok:?}"),
                                                         line:  *l, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    Ok(Expr::Object { properties, line })
}
