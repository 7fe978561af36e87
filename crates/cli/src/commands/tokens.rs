use std::io::Write;
use std::path::Path;

use super::{finish, open_sink, read_input, ReportOptions};
use crate::{dump, OutputFormat};

pub(crate) fn cmd_tokens(file: &Path, opts: &ReportOptions) {
    let src = read_input(file, opts);
    let lexed = strictjson_core::lex(&src);

    let mut sink = open_sink(opts);
    let result = match opts.output {
        OutputFormat::Text => dump::write_token_dump(&mut sink, &lexed.tokens),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "tokens":     lexed.tokens,
                "lex_errors": lexed.errors,
            });
            serde_json::to_string_pretty(&value)
                .map_err(std::io::Error::other)
                .and_then(|json| writeln!(sink, "{}", json))
        }
    }
    .and_then(|()| sink.flush());
    finish(result, opts);
}
