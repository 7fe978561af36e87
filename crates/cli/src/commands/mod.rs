pub(crate) mod check;
pub(crate) mod parse;
pub(crate) mod replay;
pub(crate) mod tokens;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use serde::Serialize;
use strictjson_core::{LexError, Parsed};

use crate::{render, report_error, OutputFormat};

/// Report settings shared by every subcommand.
pub(crate) struct ReportOptions {
    pub output: OutputFormat,
    pub quiet: bool,
    pub indent: usize,
    pub out: Option<PathBuf>,
}

/// What a successful parse should print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Show {
    Tree,
    Verdict,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    diagnostics: Vec<serde_json::Value>,
    lex_errors: &'a [LexError],
    #[serde(skip_serializing_if = "Option::is_none")]
    tree: Option<String>,
}

/// Read a whole input file, exiting with status 1 when it cannot be read.
pub(crate) fn read_input(path: &Path, opts: &ReportOptions) -> String {
    match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("error reading file '{}': {}", path.display(), e);
            report_error(&msg, opts.output, opts.quiet);
            process::exit(1);
        }
    }
}

/// Stdout, or the `--out` file.
pub(crate) fn open_sink(opts: &ReportOptions) -> Box<dyn Write> {
    match &opts.out {
        None => Box::new(io::stdout().lock()),
        Some(path) => match File::create(path) {
            Ok(f) => Box::new(BufWriter::new(f)),
            Err(e) => {
                let msg = format!("error creating file '{}': {}", path.display(), e);
                report_error(&msg, opts.output, opts.quiet);
                process::exit(1);
            }
        },
    }
}

/// Exit with status 1 if writing the report failed.
pub(crate) fn finish(result: io::Result<()>, opts: &ReportOptions) {
    if let Err(e) = result {
        let msg = format!("error writing report: {}", e);
        report_error(&msg, opts.output, opts.quiet);
        process::exit(1);
    }
}

/// Print the outcome of a parse and exit 1 when it produced diagnostics.
pub(crate) fn report_parsed(parsed: &Parsed, show: Show, opts: &ReportOptions) {
    let valid = parsed.is_valid();
    let mut sink = open_sink(opts);
    let result = write_report(&mut sink, parsed, show, opts).and_then(|()| sink.flush());
    finish(result, opts);
    if !valid {
        process::exit(1);
    }
}

fn write_report(
    sink: &mut dyn Write,
    parsed: &Parsed,
    show: Show,
    opts: &ReportOptions,
) -> io::Result<()> {
    let valid = parsed.is_valid();
    match opts.output {
        OutputFormat::Json => {
            let tree = match (&parsed.root, show) {
                (Some(root), Show::Tree) if valid => {
                    Some(render::tree_to_string(root, opts.indent))
                }
                _ => None,
            };
            let report = JsonReport {
                valid,
                diagnostics: parsed
                    .diagnostics
                    .iter()
                    .map(|d| d.to_json_value())
                    .collect(),
                lex_errors: &parsed.lex_errors,
                tree,
            };
            let json = serde_json::to_string_pretty(&report).map_err(io::Error::other)?;
            writeln!(sink, "{}", json)
        }
        OutputFormat::Text => match (&parsed.root, valid) {
            (Some(root), true) => match show {
                Show::Tree => render::write_tree(sink, root, opts.indent),
                Show::Verdict if opts.quiet => Ok(()),
                Show::Verdict => writeln!(sink, "valid"),
            },
            _ if opts.quiet => Ok(()),
            _ => render::write_errors(sink, &parsed.diagnostics),
        },
    }
}
