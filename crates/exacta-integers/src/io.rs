//! Whitespace-delimited token input.
//!
//! Reads one token at a time from a buffered reader, the way a formatted
//! stream extraction would: leading ASCII whitespace is skipped, the token
//! ends at the next whitespace byte, and that delimiter is left unread.

use std::io::{BufRead, ErrorKind};

use crate::error::{Error, Result};
use crate::{BigInteger, Rational};

/// Reads the next whitespace-delimited token.
///
/// Returns `Ok(None)` once the input holds nothing but whitespace.
///
/// # Errors
///
/// Returns [`Error::Io`] if the reader fails, or [`Error::InvalidLiteral`]
/// if the token is not valid UTF-8.
pub fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> Result<Option<String>> {
    let mut token = Vec::new();

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if buf.is_empty() {
            break;
        }

        let mut consumed = 0;
        let mut complete = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    complete = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            consumed += 1;
        }

        reader.consume(consumed);
        if complete {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|e| Error::InvalidLiteral(String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

impl BigInteger {
    /// Reads and parses the next token as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on read failure and [`Error::InvalidLiteral`]
    /// if the token is not a decimal integer.
    pub fn read_from<R: BufRead + ?Sized>(reader: &mut R) -> Result<Option<Self>> {
        read_token(reader)?.map(|token| token.parse()).transpose()
    }
}

impl Rational {
    /// Reads the next token as an integer and returns it with denominator 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on read failure and [`Error::InvalidLiteral`]
    /// if the token is not a decimal integer.
    pub fn read_from<R: BufRead + ?Sized>(reader: &mut R) -> Result<Option<Self>> {
        Ok(BigInteger::read_from(reader)?.map(Rational::from))
    }
}
