//! Recursive-descent grammar.
//!
//! ```text
//! Block   := '{' [ Field (',' Field)* ] '}'
//! Field   := String ':' Value
//! Value   := String | Block | Array | Number | Boolean | Null
//! Array   := '[' [ Block (',' Block)* ] ']'
//! String  := '"' char* '"'
//! Number  := '-'? digit+
//! Boolean := "true" | "false"
//! Null    := "null"
//! ```
//!
//! Every production reads through the scanner, so insignificant characters
//! are skipped everywhere, including between the quotes of a string and
//! between the digits of a number.
//!
//! Objects and arrays count against the context's nesting limit, so hostile
//! input fails with [`ReadError::NestingTooDeep`] rather than overflowing the
//! stack.

use crate::error::{ParseContext, ReadError, Result};
use crate::scanner::Scanner;
use crate::value::{Array, Object, Value};

/// Parse the root object of a document.
///
/// Content after the root's closing brace is not inspected.
pub fn parse_root(source: &str, ctx: &ParseContext) -> Result<Object> {
    let mut sc = Scanner::new(source, ctx);
    parse_block(&mut sc)
}

/// Parse an object.
///
/// After a comma the next field's opening quote is required, so a trailing
/// comma such as `{"a":1,}` is reported as `expected '"', got '}'` at the
/// closing brace rather than as a misplaced comma.
fn parse_block(sc: &mut Scanner) -> Result<Object> {
    let mut block = Object::new();

    sc.enter()?;
    sc.expect('{')?;

    if sc.peek_is('"')? {
        loop {
            let (name, value) = parse_field(sc)?;
            block.insert(name, value);

            if !sc.peek_is(',')? {
                break;
            }
            // A comma commits to another field.
            sc.expect(',')?;
        }
    }

    sc.expect('}')?;
    sc.leave();

    Ok(block)
}

/// Parse an array. Elements are always objects.
fn parse_array(sc: &mut Scanner) -> Result<Array> {
    let mut array = Array::new();

    sc.enter()?;
    sc.expect('[')?;

    if sc.peek_is('{')? {
        loop {
            array.push(parse_block(sc)?);

            if !sc.peek_is(',')? {
                break;
            }
            sc.expect(',')?;
        }
    }

    sc.expect(']')?;
    sc.leave();

    Ok(array)
}

/// Parse a `name: value` pair.
fn parse_field(sc: &mut Scanner) -> Result<(String, Value)> {
    let name = parse_text(sc)?;
    sc.expect(':')?;
    let value = parse_value(sc)?;
    Ok((name, value))
}

/// Pick a value production from the lookahead character.
fn parse_value(sc: &mut Scanner) -> Result<Value> {
    match sc.peek()? {
        '"' => parse_text(sc).map(Value::Text),
        '{' => parse_block(sc).map(Value::Object),
        '[' => parse_array(sc).map(Value::Array),
        '-' | '0'..='9' => parse_number(sc).map(Value::Number),
        'n' => parse_null(sc),
        't' | 'f' => parse_boolean(sc).map(Value::Boolean),
        _ => Err(sc.unexpected_value()),
    }
}

/// Parse a quoted string. Backslashes have no special meaning.
fn parse_text(sc: &mut Scanner) -> Result<String> {
    let mut value = String::new();

    sc.expect('"')?;

    while !sc.peek_is('"')? {
        value.push(sc.advance()?);
    }

    sc.expect('"')?;

    Ok(value)
}

/// Parse an optionally negative run of ASCII digits.
fn parse_number(sc: &mut Scanner) -> Result<i32> {
    let start = sc.position_ahead()?;
    let mut digits = String::new();

    if sc.peek_is('-')? {
        sc.expect('-')?;
        digits.push('-');
    }

    while sc.peek()?.is_ascii_digit() {
        digits.push(sc.advance()?);
    }

    digits.parse().map_err(|_| ReadError::NumberFormat {
        origin: sc.origin(),
        position: Some(start),
        text: digits,
    })
}

fn parse_boolean(sc: &mut Scanner) -> Result<bool> {
    if sc.peek_is('t')? {
        sc.expect_literal("true")?;
        Ok(true)
    } else {
        sc.expect_literal("false")?;
        Ok(false)
    }
}

fn parse_null(sc: &mut Scanner) -> Result<Value> {
    sc.expect_literal("null")?;
    Ok(Value::Null)
}
