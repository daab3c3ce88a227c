//! Line-input validation for the menu.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::style;

/// Outcome of a prompt: a value, or an explicit user cancellation.
///
/// Cancellation is data, not an error. Callers match on it and fall back to
/// the menu with no side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt<T> {
    Value(T),
    Cancelled,
}

pub const PROMPT: &str = "> ";
const INVALID_INPUT: &str = "Invalid input.";
const CANCEL_TOKENS: [&str; 2] = ["", "q"];

fn is_cancel(line: &str) -> bool {
    CANCEL_TOKENS.contains(&line)
}

fn read_trimmed<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<String> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // Closed stdin cannot recover; let the loop shut down.
        return Err(io::ErrorKind::UnexpectedEof.into());
    }
    Ok(line.trim().to_string())
}

/// Read lines until one parses as `T` and satisfies `accept`.
///
/// Empty input or `q` cancels. Unparseable or rejected lines reprompt and
/// never escape this boundary.
pub fn read_parsed<T, R, W>(
    input: &mut R,
    out: &mut W,
    accept: impl Fn(&T) -> bool,
) -> io::Result<Prompt<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let line = read_trimmed(input, out)?;
        if is_cancel(&line) {
            return Ok(Prompt::Cancelled);
        }
        match line.parse::<T>() {
            Ok(value) if accept(&value) => return Ok(Prompt::Value(value)),
            _ => {
                writeln!(out)?;
                writeln!(out, "{INVALID_INPUT}")?;
                style::rule(out)?;
            }
        }
    }
}

/// Read a yes/no confirmation; only `y`/`Y` confirms.
pub fn read_yes<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    let line = read_trimmed(input, out)?;
    Ok(line.eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse_u32(script: &str, accept: impl Fn(&u32) -> bool) -> Prompt<u32> {
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        read_parsed(&mut input, &mut out, accept).unwrap()
    }

    #[test]
    fn accepts_a_valid_integer() {
        assert_eq!(parse_u32("42\n", |_| true), Prompt::Value(42));
    }

    #[test]
    fn empty_line_cancels() {
        assert_eq!(parse_u32("\n", |_| true), Prompt::Cancelled);
    }

    #[test]
    fn q_cancels_with_surrounding_whitespace() {
        assert_eq!(parse_u32("  q  \n", |_| true), Prompt::Cancelled);
    }

    #[test]
    fn reprompts_until_parseable_and_accepted() {
        assert_eq!(parse_u32("abc\n0\n7\n", |n| *n > 0), Prompt::Value(7));
    }

    #[test]
    fn eof_surfaces_as_unexpected_eof() {
        let mut input = Cursor::new(String::new());
        let mut out = Vec::new();
        let err = read_parsed::<u32, _, _>(&mut input, &mut out, |_| true).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn only_y_confirms() {
        for (line, expected) in [("y\n", true), ("Y\n", true), ("n\n", false), ("\n", false)] {
            let mut input = Cursor::new(line.to_string());
            let mut out = Vec::new();
            assert_eq!(read_yes(&mut input, &mut out).unwrap(), expected);
        }
    }
}
