//! Tokenizer for the DOT subset read by pathmark

use crate::bail_syntax;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Identifier, numeral or quoted string (quotes removed, escapes resolved)
    Id { text: String, quoted: bool },
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Equals,
    Semicolon,
    Comma,
    Colon,
    /// `--`
    UndirectedEdge,
    /// `->`
    DirectedEdge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

impl Token {
    /// Keyword check, case-insensitive, never matching quoted strings
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(&self.kind, TokenKind::Id { text, quoted: false } if text.eq_ignore_ascii_case(keyword))
    }
}

pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    at_line_start: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            at_line_start: true,
        }
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.at_line_start = true;
        } else if !c.is_whitespace() {
            self.at_line_start = false;
        }
        Some(c)
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self, start_line: usize) -> Result<()> {
        let mut prev = '\0';
        while let Some(c) = self.bump() {
            if prev == '*' && c == '/' {
                return Ok(());
            }
            prev = c;
        }
        bail_syntax!(start_line, "unterminated block comment")
    }

    fn quoted(&mut self, start_line: usize) -> Result<String> {
        let mut text = String::new();
        while let Some(c) = self.bump() {
            match c {
                '"' => return Ok(text),
                '\\' => match self.bump() {
                    Some('"') => text.push('"'),
                    // Line continuation
                    Some('\n') => {}
                    Some(other) => {
                        text.push('\\');
                        text.push(other);
                    }
                    None => break,
                },
                other => text.push(other),
            }
        }
        bail_syntax!(start_line, "unterminated string")
    }

    fn bare(&mut self, first: char) -> String {
        let mut text = String::from(first);
        while let Some(&c) = self.chars.peek() {
            if c.is_alphanumeric() || c == '_' || c == '.' || (c as u32) >= 0x80 {
                text.push(c);
                self.bump();
            } else {
                break;
            }
        }
        text
    }

    /// Tokenize the whole input
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            let line_start = self.at_line_start;
            let Some(c) = self.bump() else { break };
            let line = self.line;

            let kind = match c {
                c if c.is_whitespace() => continue,
                '#' if line_start => {
                    self.skip_line();
                    continue;
                }
                '/' => match self.chars.peek() {
                    Some('/') => {
                        self.skip_line();
                        continue;
                    }
                    Some('*') => {
                        self.bump();
                        self.skip_block_comment(line)?;
                        continue;
                    }
                    _ => bail_syntax!(line, "unexpected character '/'"),
                },
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                '[' => TokenKind::LBracket,
                ']' => TokenKind::RBracket,
                '=' => TokenKind::Equals,
                ';' => TokenKind::Semicolon,
                ',' => TokenKind::Comma,
                ':' => TokenKind::Colon,
                '"' => TokenKind::Id {
                    text: self.quoted(line)?,
                    quoted: true,
                },
                '-' => match self.chars.peek() {
                    Some('-') => {
                        self.bump();
                        TokenKind::UndirectedEdge
                    }
                    Some('>') => {
                        self.bump();
                        TokenKind::DirectedEdge
                    }
                    Some(&d) if d.is_ascii_digit() || d == '.' => TokenKind::Id {
                        text: self.bare('-'),
                        quoted: false,
                    },
                    _ => bail_syntax!(line, "unexpected character '-'"),
                },
                '<' => bail_syntax!(line, "HTML strings are not supported"),
                c if c.is_alphanumeric() || c == '_' || c == '.' || (c as u32) >= 0x80 => {
                    TokenKind::Id {
                        text: self.bare(c),
                        quoted: false,
                    }
                }
                other => bail_syntax!(line, "unexpected character '{}'", other),
            };

            tokens.push(Token { kind, line });
        }

        Ok(tokens)
    }
}
