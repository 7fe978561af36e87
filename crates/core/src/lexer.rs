use crate::error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};

/// Result of eagerly lexing a whole input.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

/// Lex `src` eagerly, keeping both the tokens and the lexical errors.
pub fn lex(src: &str) -> Lexed {
    let mut lexer = Lexer::new(src);
    let tokens: Vec<Token> = lexer.by_ref().collect();
    Lexed {
        tokens,
        errors: lexer.into_errors(),
    }
}

/// Lex `src` eagerly. Lexical errors only go to the log.
pub fn tokenize(src: &str) -> Vec<Token> {
    Lexer::new(src).collect()
}

/// On-demand lexer. Each call to `next` scans one token; malformed lexemes
/// are logged, recorded, and skipped, so only well-formed tokens come out.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    errors: Vec<LexError>,
}

impl Lexer {
    pub fn new(src: &str) -> Self {
        Lexer {
            chars: src.chars().collect(),
            pos: 0,
            errors: Vec::new(),
        }
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn slice(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    fn report(&mut self, kind: LexErrorKind, lexeme: String, position: usize) {
        let err = LexError {
            kind,
            lexeme,
            position,
        };
        log::warn!("{}", err);
        self.errors.push(err);
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn scan_string(&mut self) -> Option<Token> {
        let start = self.pos;
        self.pos += 1; // opening quote
        while let Some(c) = self.peek() {
            if c == '"' {
                let text: String = self.chars[start + 1..self.pos].iter().collect();
                self.pos += 1;
                return Some(Token::string(text));
            }
            self.pos += 1;
        }
        let lexeme = self.slice(start);
        self.report(LexErrorKind::UnterminatedString, lexeme, start);
        None
    }

    fn scan_keyword(&mut self) -> Option<Token> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphabetic()) {
            self.pos += 1;
        }
        let word = self.slice(start);
        match TokenKind::keyword(&word) {
            Some(kind) => Some(Token::new(kind, word)),
            None => {
                self.report(LexErrorKind::InvalidKeyword, word, start);
                None
            }
        }
    }

    /// Optional sign, then digits and at most one `.`. Leading zeros, `+`
    /// and a leading or trailing `.` pass through; the parser judges them.
    fn scan_number(&mut self) -> Option<Token> {
        let start = self.pos;
        let signed = matches!(self.peek(), Some('-' | '+'));
        if signed {
            self.pos += 1;
        }
        let body_start = self.pos;
        let mut seen_dot = false;
        let mut valid = true;
        while let Some(c) = self.peek() {
            if c == '.' {
                if seen_dot {
                    valid = false;
                }
                seen_dot = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            self.pos += 1;
        }

        let body = &self.chars[body_start..self.pos];
        let has_digit = body.iter().any(|c| c.is_ascii_digit());
        let sign_ok = !signed || body.first().is_some_and(|c| c.is_ascii_digit());
        let lexeme = self.slice(start);
        if valid && has_digit && sign_ok {
            Some(Token::number(lexeme))
        } else {
            self.report(LexErrorKind::InvalidNumber, lexeme, start);
            None
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace();
            let c = self.peek()?;

            let token = if c == '"' {
                self.scan_string()
            } else if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') {
                self.scan_number()
            } else if c.is_alphabetic() {
                self.scan_keyword()
            } else if let Some(kind) = TokenKind::punctuation(c) {
                self.pos += 1;
                Some(Token::new(kind, c.to_string()))
            } else {
                let at = self.pos;
                self.pos += 1;
                self.report(LexErrorKind::InvalidCharacter, c.to_string(), at);
                None
            };

            if token.is_some() {
                return token;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn punctuation_and_keywords() {
        assert_eq!(
            kinds("{ } [ ] : , true false null"),
            vec![
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::True,
                TokenKind::False,
                TokenKind::Null,
            ]
        );
    }

    #[test]
    fn string_keeps_raw_contents() {
        let toks = tokenize(r#""a \n b" "#);
        assert_eq!(toks, vec![Token::string(r"a \n b")]);
    }

    #[test]
    fn unterminated_string_emits_no_token() {
        let lexed = lex(r#"["abc"#);
        assert_eq!(lexed.tokens, vec![Token::bare(TokenKind::LBracket)]);
        assert_eq!(lexed.errors.len(), 1);
        assert_eq!(lexed.errors[0].kind, LexErrorKind::UnterminatedString);
        assert_eq!(lexed.errors[0].position, 1);
    }

    #[test]
    fn unknown_word_is_invalid_keyword() {
        let lexed = lex("[nil, true]");
        assert_eq!(
            lexed.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::LBracket,
                TokenKind::Comma,
                TokenKind::True,
                TokenKind::RBracket
            ]
        );
        assert_eq!(lexed.errors[0].kind, LexErrorKind::InvalidKeyword);
        assert_eq!(lexed.errors[0].lexeme, "nil");
    }

    #[test]
    fn numbers_keep_their_lexeme() {
        let texts: Vec<String> = tokenize("-12.5 007 +3 .5 5.")
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["-12.5", "007", "+3", ".5", "5."]);
    }

    #[test]
    fn second_decimal_point_is_invalid_number() {
        let lexed = lex("1.2.3 4");
        assert_eq!(lexed.tokens, vec![Token::number("4")]);
        assert_eq!(lexed.errors.len(), 1);
        assert_eq!(lexed.errors[0].kind, LexErrorKind::InvalidNumber);
        assert_eq!(lexed.errors[0].lexeme, "1.2.3");
    }

    #[test]
    fn sign_without_digit_is_invalid_number() {
        for src in ["-", "-.5", ".", "+"] {
            let lexed = lex(src);
            assert!(lexed.tokens.is_empty(), "{src} should produce no token");
            assert_eq!(lexed.errors[0].kind, LexErrorKind::InvalidNumber);
        }
    }

    #[test]
    fn invalid_character_advances_one_position() {
        let lexed = lex("[1; 2]");
        assert_eq!(lexed.tokens.len(), 4);
        assert_eq!(lexed.errors.len(), 1);
        assert_eq!(lexed.errors[0].kind, LexErrorKind::InvalidCharacter);
        assert_eq!(lexed.errors[0].lexeme, ";");
        assert_eq!(lexed.errors[0].position, 2);
    }

    #[test]
    fn lexing_is_idempotent() {
        let src = r#"{"grades": [90.8, 85.0], "ok": true, "none": null}"#;
        assert_eq!(lex(src), lex(src));
    }

    #[test]
    fn lazy_lexer_records_errors_as_it_goes() {
        let mut lexer = Lexer::new("@ 1");
        assert!(lexer.errors().is_empty());
        assert_eq!(lexer.next(), Some(Token::number("1")));
        assert_eq!(lexer.errors().len(), 1);
        assert_eq!(lexer.next(), None);
    }
}
