//! Token dumps: one `<KIND: literal>` token per line.

use std::io::{self, BufRead, Write};

use strictjson_core::{Token, TokenKind};

/// Tokens read from a dump, plus how many lines were rejected.
#[derive(Debug, Default)]
pub(crate) struct TokenDump {
    pub tokens: Vec<Token>,
    pub skipped: usize,
}

/// Read a token dump. Blank lines are ignored; malformed lines are logged
/// and skipped.
pub(crate) fn read_token_dump<R: BufRead>(reader: R) -> io::Result<TokenDump> {
    let mut dump = TokenDump::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(token) => dump.tokens.push(token),
            Err(reason) => {
                log::warn!("line {}: invalid token format ({}): {}", idx + 1, reason, line);
                dump.skipped += 1;
            }
        }
    }
    Ok(dump)
}

fn parse_line(line: &str) -> Result<Token, String> {
    let inner = line
        .strip_prefix('<')
        .and_then(|l| l.strip_suffix('>'))
        .ok_or_else(|| "expected <KIND: literal>".to_owned())?;
    let (kind, literal) = match inner.split_once(':') {
        Some((kind, literal)) => (kind, literal.trim()),
        None => (inner, ""),
    };
    let kind: TokenKind = kind.trim().parse().map_err(|e| format!("{}", e))?;
    Ok(Token::new(kind, literal))
}

pub(crate) fn write_token_dump(w: &mut dyn Write, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(w, "{}", token)?;
    }
    Ok(())
}
