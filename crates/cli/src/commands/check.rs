use std::path::Path;

use super::{read_input, report_parsed, ReportOptions, Show};

pub(crate) fn cmd_check(file: &Path, opts: &ReportOptions) {
    let src = read_input(file, opts);
    let parsed = strictjson_core::parse_str(&src);
    report_parsed(&parsed, Show::Verdict, opts);
}
