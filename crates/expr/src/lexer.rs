use crate::error::{ParseError, ParseErrorKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token<'a> {
    Number(f64),
    Ident(&'a str),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
}

/// A token with its source text and byte offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Spanned<'a> {
    pub(crate) token: Token<'a>,
    pub(crate) text: &'a str,
    pub(crate) position: usize,
}

/// Splits `source` into tokens.
///
/// # Errors
///
/// Returns an error on characters outside the grammar or on numbers that are
/// immediately followed by letters (`2x`, `1e`).
pub(crate) fn tokenize(source: &str) -> Result<Vec<Spanned<'_>>, ParseError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = source[pos..].chars().next() {
        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }

        let start = pos;
        let token = match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            '0'..='9' | '.' => {
                pos = scan_number(bytes, start)?;
                let value = source[start..pos]
                    .parse()
                    .map_err(|_| ParseError::new(ParseErrorKind::MalformedNumber, start))?;
                tokens.push(Spanned {
                    token: Token::Number(value),
                    text: &source[start..pos],
                    position: start,
                });
                continue;
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                pos = scan_while(bytes, start, |b| b.is_ascii_alphanumeric() || b == b'_');
                let text = &source[start..pos];
                tokens.push(Spanned {
                    token: Token::Ident(text),
                    text,
                    position: start,
                });
                continue;
            }
            other => return Err(ParseError::new(ParseErrorKind::UnexpectedChar(other), start)),
        };

        pos += c.len_utf8();
        tokens.push(Spanned {
            token,
            text: &source[start..pos],
            position: start,
        });
    }

    Ok(tokens)
}

/// Returns the end of the number starting at `start`.
///
/// Accepts `12`, `1.5`, `.5`, `5.`, and an optional exponent such as `1e-3`.
fn scan_number(bytes: &[u8], start: usize) -> Result<usize, ParseError> {
    let malformed = || ParseError::new(ParseErrorKind::MalformedNumber, start);

    let int_end = scan_while(bytes, start, |b| b.is_ascii_digit());
    let mut end = int_end;
    let mut digits = int_end - start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = scan_while(bytes, end + 1, |b| b.is_ascii_digit());
        digits += frac_end - (end + 1);
        end = frac_end;
    }
    if digits == 0 {
        return Err(malformed());
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = scan_while(bytes, exp, |b| b.is_ascii_digit());
        if exp_end > exp {
            end = exp_end;
        }
    }

    // `2x` and `2e` are malformed literals, not implicit products.
    if bytes
        .get(end)
        .is_some_and(|&b| b.is_ascii_alphanumeric() || b == b'_' || b == b'.')
    {
        return Err(malformed());
    }

    Ok(end)
}

fn scan_while(bytes: &[u8], start: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| !pred(b))
        .map_or(bytes.len(), |offset| start + offset)
}
