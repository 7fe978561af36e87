use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process;

use super::{report_parsed, ReportOptions, Show};
use crate::{dump, report_error};

pub(crate) fn cmd_replay(dump_path: &Path, opts: &ReportOptions) {
    let token_dump = File::open(dump_path)
        .and_then(|f| dump::read_token_dump(BufReader::new(f)));
    let token_dump = match token_dump {
        Ok(d) => d,
        Err(e) => {
            let msg = format!("error reading token dump '{}': {}", dump_path.display(), e);
            report_error(&msg, opts.output, opts.quiet);
            process::exit(1);
        }
    };
    if token_dump.skipped > 0 {
        log::warn!(
            "{}: skipped {} malformed line(s)",
            dump_path.display(),
            token_dump.skipped
        );
    }

    let parsed = strictjson_core::parse_tokens(token_dump.tokens);
    report_parsed(&parsed, Show::Tree, opts);
}
