use alloc::string::String;
use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// TokenSource

/// Input side of the text format: a stream of whitespace separated tokens.
pub trait TokenSource {
    /// The next token, without consuming it.
    fn peek(&self) -> Option<&str>;

    /// Consumes and returns up to `count` tokens.
    ///
    /// Fewer tokens are returned when the input or the current entry ends.
    fn consume(&mut self, count: usize) -> Vec<String>;

    /// Skips one entry that no serializer recognized.
    fn skip_entry(&mut self) {
        self.consume(1);
    }
}

// -----------------------------------------------------------------------------
// OutputSink

/// Output side of the text format: a sequence of lines.
pub trait OutputSink {
    /// Appends one line, without its terminator.
    fn write_line(&mut self, line: &str);

    /// Whether fields equal to their default are written too.
    fn write_defaults(&self) -> bool {
        false
    }

    /// Opens a `header {` block.
    fn begin_block(&mut self, header: &str) {
        let mut line = String::with_capacity(header.len() + 2);
        line.push_str(header);
        line.push_str(" {");
        self.write_line(&line);
    }

    /// Closes the innermost block.
    fn end_block(&mut self) {
        self.write_line("}");
    }
}

// -----------------------------------------------------------------------------
// TextInput

#[derive(Clone, Debug)]
struct Token {
    text: String,
    line: usize,
}

/// Tokenizer over an in-memory text.
///
/// - Tokens are separated by whitespace; `{` and `}` are tokens of their own.
/// - A token starting with `"` runs to the closing quote and may contain
///   whitespace; `\"`, `\\`, `\n` and `\t` are unescaped. An unterminated
///   string ends at the line break.
/// - An entry is the run of tokens on one line, [`consume`](TokenSource::consume)
///   never crosses a line break.
///
/// # Examples
///
/// ```
/// use vpb_serial::{TextInput, TokenSource};
///
/// let mut input = TextInput::new("Directory \"my tiles\"\nMaximumTileImageSize 512");
/// assert_eq!(input.peek(), Some("Directory"));
/// assert_eq!(input.consume(3), ["Directory", "my tiles"]);
/// assert_eq!(input.consume(2), ["MaximumTileImageSize", "512"]);
/// assert!(input.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TextInput {
    /// Tokenizes `text`.
    pub fn new(text: &str) -> Self {
        Self {
            tokens: tokenize(text),
            cursor: 0,
        }
    }

    /// Returns `true` if every token has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Number of tokens not consumed yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.cursor)
    }

    /// 1-based line of the next token.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        self.tokens.get(self.cursor).map(|token| token.line)
    }

    fn consume_line(&mut self) -> Option<String> {
        let line = self.line()?;
        let mut last = None;
        while let Some(token) = self.tokens.get(self.cursor) {
            if token.line != line {
                break;
            }
            last = Some(token.text.clone());
            self.cursor += 1;
        }
        last
    }
}

impl TokenSource for TextInput {
    #[inline]
    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.cursor).map(|token| token.text.as_str())
    }

    fn consume(&mut self, count: usize) -> Vec<String> {
        let Some(line) = self.line() else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(count);
        while out.len() < count {
            match self.tokens.get(self.cursor) {
                Some(token) if token.line == line => {
                    out.push(token.text.clone());
                    self.cursor += 1;
                }
                _ => break,
            }
        }
        out
    }

    /// Skips the rest of the current line, and the whole nested block when
    /// the line opens one.
    fn skip_entry(&mut self) {
        if self.consume_line().as_deref() != Some("{") {
            return;
        }
        let mut depth = 1_usize;
        while depth > 0 {
            match self.consume(1).pop().as_deref() {
                Some("{") => depth += 1,
                Some("}") => depth -= 1,
                Some(_) => {}
                None => break,
            }
        }
    }
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '\n' => {
                line += 1;
                chars.next();
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            '{' | '}' => {
                tokens.push(Token {
                    text: String::from(c),
                    line,
                });
                chars.next();
            }
            '"' => {
                chars.next();
                let mut quoted = String::new();
                let mut closed = false;
                while let Some(&c) = chars.peek() {
                    // A raw line break ends the token, the newline is left
                    // for the outer loop.
                    if c == '\n' {
                        break;
                    }
                    chars.next();
                    match c {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' => match chars.next_if(|&c| c != '\n') {
                            Some('n') => quoted.push('\n'),
                            Some('t') => quoted.push('\t'),
                            Some(other) => quoted.push(other),
                            None => {}
                        },
                        c => quoted.push(c),
                    }
                }
                if !closed {
                    log::warn!("line {line}: unterminated string `\"{quoted}`");
                }
                tokens.push(Token { text: quoted, line });
            }
            _ => {
                let mut bare = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() || c == '{' || c == '}' {
                        break;
                    }
                    bare.push(c);
                    chars.next();
                }
                tokens.push(Token { text: bare, line });
            }
        }
    }
    tokens
}

// -----------------------------------------------------------------------------
// TextOutput

/// In-memory output sink, indenting two spaces per open block.
///
/// # Examples
///
/// ```
/// use vpb_serial::{OutputSink, TextOutput};
///
/// let mut output = TextOutput::new();
/// output.begin_block("vpb::BuildOptions");
/// output.write_line("BuildOverlays true");
/// output.end_block();
///
/// assert_eq!(output.as_str(), "vpb::BuildOptions {\n  BuildOverlays true\n}\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextOutput {
    buffer: String,
    indent: usize,
    write_defaults: bool,
}

impl TextOutput {
    const INDENT_STEP: usize = 2;

    /// Creates a sink that skips fields equal to their default.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            indent: 0,
            write_defaults: false,
        }
    }

    /// Creates a sink, choosing whether defaults are written too.
    #[inline]
    pub const fn with_defaults(write_defaults: bool) -> Self {
        Self {
            buffer: String::new(),
            indent: 0,
            write_defaults,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Number of lines written so far.
    pub fn line_count(&self) -> usize {
        self.buffer.lines().count()
    }
}

impl OutputSink for TextOutput {
    fn write_line(&mut self, line: &str) {
        self.buffer.extend(core::iter::repeat_n(' ', self.indent));
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    #[inline]
    fn write_defaults(&self) -> bool {
        self.write_defaults
    }

    fn begin_block(&mut self, header: &str) {
        self.write_line(&alloc::format!("{header} {{"));
        self.indent += Self::INDENT_STEP;
    }

    fn end_block(&mut self) {
        self.indent = self.indent.saturating_sub(Self::INDENT_STEP);
        self.write_line("}");
    }
}

// -----------------------------------------------------------------------------
// IoSink

/// Output sink writing lines to a [`std::io::Write`].
///
/// The first I/O error stops further output and is returned by
/// [`finish`](IoSink::finish).
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W: std::io::Write> {
    writer: W,
    indent: usize,
    write_defaults: bool,
    error: Option<std::io::Error>,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    pub fn new(writer: W, write_defaults: bool) -> Self {
        Self {
            writer,
            indent: 0,
            write_defaults,
            error: None,
        }
    }

    /// Returns the writer, or the first error met while writing.
    pub fn finish(mut self) -> std::io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> OutputSink for IoSink<W> {
    fn write_line(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        let indent = self.indent;
        if let Err(err) = writeln!(self.writer, "{:indent$}{line}", "") {
            self.error = Some(err);
        }
    }

    #[inline]
    fn write_defaults(&self) -> bool {
        self.write_defaults
    }

    fn begin_block(&mut self, header: &str) {
        self.write_line(&alloc::format!("{header} {{"));
        self.indent += TextOutput::INDENT_STEP;
    }

    fn end_block(&mut self) {
        self.indent = self.indent.saturating_sub(TextOutput::INDENT_STEP);
        self.write_line("}");
    }
}
