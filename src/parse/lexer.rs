use logos::{Logos, SpannedIter};

use std::fmt;

use codespan::Span;

// Every character that is not reserved or whitespace is
// a one-character identifier, so the lexer has no failing input.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    #[token("!")]
    Bang,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("=")]
    Equals,
    #[token(".")]
    Dot,

    #[regex(r"[^!()=.\s]", |lex| lex.slice().chars().next())]
    Ident(char),

    #[error]
    #[regex(r"\s+", logos::skip)]
    Error,
}

impl Token {
    pub fn is_reserved(ch: char) -> bool {
        matches!(ch, '!' | '(' | ')' | '=' | '.')
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::Token::*;
        match self {
            Ident(c) => write!(f, "Id({})", c),
            _ => {
                let s = match self {
                    Bang => "\"!\"",
                    LParen => "\"(\"",
                    RParen => "\")\"",
                    Equals => "\"=\"",
                    Dot => "\".\"",
                    _ => "Unknown",
                };
                f.write_str(s)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LexicalError {
    UnexpectedChar(Span),
}

pub type Spanned = (usize, Token, usize);

pub struct Lexer<'input> {
    tokens: SpannedIter<'input, Token>,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Lexer {
            tokens: Token::lexer(input).spanned(),
        }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Result<Spanned, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (token, span) = self.tokens.next()?;
        Some(match token {
            Token::Error => Err(LexicalError::UnexpectedChar(Span::new(
                span.start as u32,
                span.end as u32,
            ))),
            token => Ok((span.start, token, span.end)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Lexer;
    use super::Token;
    use super::Token::*;

    fn tokens(src: &str) -> Vec<Token> {
        Lexer::new(src).map(|t| t.unwrap().1).collect()
    }

    #[test]
    fn tokenize_basic() {
        let mut lexer = Lexer::new("a = !x.x");

        assert_eq!(lexer.next().unwrap().unwrap(), (0, Ident('a'), 1));
        assert_eq!(lexer.next().unwrap().unwrap(), (2, Equals, 3));
        assert_eq!(lexer.next().unwrap().unwrap(), (4, Bang, 5));
        assert_eq!(lexer.next().unwrap().unwrap(), (5, Ident('x'), 6));
        assert_eq!(lexer.next().unwrap().unwrap(), (6, Dot, 7));
        assert_eq!(lexer.next().unwrap().unwrap(), (7, Ident('x'), 8));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(
            tokens(" ( f\n\t a )\r\n"),
            vec![LParen, Ident('f'), Ident('a'), RParen]
        );
        assert!(tokens(" \n\t ").is_empty());
    }

    #[test]
    fn any_other_char_is_identifier() {
        assert_eq!(
            tokens("1+λ_"),
            vec![Ident('1'), Ident('+'), Ident('λ'), Ident('_')]
        );
    }

    #[test]
    fn adjacent_identifiers_are_separate() {
        assert_eq!(tokens("ab"), vec![Ident('a'), Ident('b')]);
    }

    #[test]
    fn print_operator_is_two_tokens() {
        assert_eq!(tokens("!=a"), vec![Bang, Equals, Ident('a')]);
    }

    #[test]
    fn multibyte_spans_are_byte_offsets() {
        let spanned: Vec<_> = Lexer::new("λ=a").map(|t| t.unwrap()).collect();
        assert_eq!(spanned[0], (0, Ident('λ'), 2));
        assert_eq!(spanned[1], (2, Equals, 3));
    }
}
