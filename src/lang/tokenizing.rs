use crate::{
    lang::source_buffer::{SourceBuffer, SourceLocation},
    runtime::error,
};
use std::{
    collections::VecDeque,
    fmt::{self, Debug, Display, Formatter},
    fs::File,
    io::{BufRead, BufReader, Cursor},
};

/// All integers in the language, both in source text and on output, are written in base six.
pub const NUMBER_RADIX: u32 = 6;

/// Attempt to read a token as a senary integer.  An optional leading sign is allowed, anything
/// else that isn't a digit from 0 to 5 makes the token a word instead.
pub fn parse_number(text: &str) -> Option<i64> {
    i64::from_str_radix(text, NUMBER_RADIX).ok()
}

/// Render an integer as senary text.  The result always parses back to the same value with
/// `parse_number`.
pub fn format_number(value: i64) -> String {
    let radix = NUMBER_RADIX as u64;
    let mut magnitude = value.unsigned_abs();
    let mut digits = Vec::new();

    loop {
        digits.push(char::from(b'0' + (magnitude % radix) as u8));
        magnitude /= radix;

        if magnitude == 0 {
            break;
        }
    }

    if value < 0 {
        digits.push('-');
    }

    digits.iter().rev().collect()
}

/// A single whitespace delimited word from the input, along with where it was found.  The token
/// itself carries no interpretation, the dispatcher decides what it means based on the current
/// interpreter state.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    location: SourceLocation,
    text: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Include the original location when debugging.
impl Debug for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.text)
    }
}

impl Token {
    pub fn new(location: SourceLocation, text: String) -> Token {
        Token { location, text }
    }

    /// Get the token's location in the original source text.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// The raw text of the token.
    pub fn text(&self) -> &String {
        &self.text
    }

    /// Does this token read as a senary numeral?
    pub fn number(&self) -> Option<i64> {
        parse_number(&self.text)
    }
}

/// Split one chunk of text into tokens.  Tokens are separated by any amount of whitespace and are
/// never re-split, so `(foo` is a single token and not a comment start.
fn tokenize_chunk(buffer: &mut SourceBuffer, tokens: &mut VecDeque<Token>) {
    loop {
        while let Some(next) = buffer.peek_next() {
            if !next.is_whitespace() {
                break;
            }

            let _ = buffer.next_char();
        }

        let location = buffer.location().clone();
        let mut text = String::new();

        while let Some(next) = buffer.peek_next() {
            if next.is_whitespace() {
                break;
            }

            text.push(next);
            let _ = buffer.next_char();
        }

        if text.is_empty() {
            break;
        }

        tokens.push_back(Token::new(location, text));
    }
}

/// A lazily read stream of tokens over any byte source.  Input is pulled a line at a time so an
/// interactive source like the terminal is processed as it's typed.
pub struct TokenStream {
    reader: Box<dyn BufRead + Send>,

    /// Where the next line read from the reader starts.
    location: SourceLocation,

    /// Tokens already split from the current line but not yet handed out.
    pending: VecDeque<Token>,

    finished: bool,
}

impl TokenStream {
    /// Create a new stream reading from the given source.  The path is used to tag the tokens'
    /// locations.
    pub fn new(path: &str, reader: Box<dyn BufRead + Send>) -> TokenStream {
        TokenStream {
            reader,
            location: SourceLocation::new_from_path(path),
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// A stream that has nothing to give.
    pub fn empty() -> TokenStream {
        TokenStream::new("<empty>", Box::new(std::io::empty()))
    }

    /// Get the next token, reading more input if required.  Returns None once the source is
    /// exhausted.
    pub fn next_token(&mut self) -> error::Result<Option<Token>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            if self.finished {
                return Ok(None);
            }

            let mut bytes = Vec::new();

            if self.reader.read_until(b'\n', &mut bytes)? == 0 {
                self.finished = true;
                continue;
            }

            let line = String::from_utf8_lossy(&bytes);
            let mut buffer = SourceBuffer::new(self.location.clone(), &line);

            tokenize_chunk(&mut buffer, &mut self.pending);
            self.location = buffer.location().clone();
        }
    }
}

/// Create a token stream over an in-memory source string.
pub fn tokenize_from_source(path: &str, source: &str) -> TokenStream {
    TokenStream::new(path, Box::new(Cursor::new(source.as_bytes().to_vec())))
}

/// Create a token stream that reads from the given file.
pub fn tokenize_from_file(path: &str) -> error::Result<TokenStream> {
    let file = File::open(path)?;
    Ok(TokenStream::new(path, Box::new(BufReader::new(file))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(source: &str) -> Vec<Token> {
        let mut stream = tokenize_from_source("<test>", source);
        let mut tokens = Vec::new();

        while let Some(token) = stream.next_token().unwrap() {
            tokens.push(token);
        }

        tokens
    }

    #[test]
    fn senary_numbers_round_trip() {
        for value in [0, 1, 5, 6, 8, 35, 36, -1, -8, 1_000_000, i64::MAX, i64::MIN] {
            assert_eq!(parse_number(&format_number(value)), Some(value), "value {}", value);
        }
    }

    #[test]
    fn numbers_render_in_base_six() {
        assert_eq!(format_number(8), "12");
        assert_eq!(format_number(6), "10");
        assert_eq!(format_number(-7), "-11");
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn decimal_digits_are_not_numbers() {
        assert_eq!(parse_number("6"), None);
        assert_eq!(parse_number("19"), None);
        assert_eq!(parse_number("dup"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("+"), None);
        assert_eq!(parse_number("+12"), Some(8));
    }

    #[test]
    fn tokens_split_on_any_whitespace() {
        let texts: Vec<String> = collect("1 2\t+\n\n  print  ")
            .iter()
            .map(|token| token.text().clone())
            .collect();

        assert_eq!(texts, vec!["1", "2", "+", "print"]);
    }

    #[test]
    fn tokens_are_never_resplit() {
        let texts: Vec<String> = collect("(foo bar) [1")
            .iter()
            .map(|token| token.text().clone())
            .collect();

        assert_eq!(texts, vec!["(foo", "bar)", "[1"]);
    }

    #[test]
    fn tokens_remember_their_location() {
        let tokens = collect("dup\n  print");

        assert_eq!(tokens[0].location(), &SourceLocation::new_from_info("<test>", 1, 1));
        assert_eq!(tokens[1].location(), &SourceLocation::new_from_info("<test>", 2, 3));
    }
}
