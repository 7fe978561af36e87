use std::path::Path;

use super::{read_input, report_parsed, ReportOptions, Show};

pub(crate) fn cmd_parse(file: &Path, opts: &ReportOptions) {
    let src = read_input(file, opts);
    let parsed = strictjson_core::parse_str(&src);
    log::debug!(
        "parsed '{}': {} diagnostic(s), {} lexical error(s)",
        file.display(),
        parsed.diagnostics.len(),
        parsed.lex_errors.len()
    );
    report_parsed(&parsed, Show::Tree, opts);
}
