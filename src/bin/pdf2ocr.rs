//! CLI binary for pdf2ocr.
//!
//! A thin shim over the library crate. The stdout contract is strict: exactly
//! one JSON document per invocation — a result document on success, an
//! `{"error": "..."}` document on any failure — with the exit code mirroring
//! it (0/1). All diagnostics go to stderr.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Scan a document; result JSON on stdout
  pdf2ocr document.pdf

  # Pipe into a downstream OCR stage
  pdf2ocr scanned-invoices.pdf | jq '.ocrPages[].index'

  # Debug logs on stderr, JSON still clean on stdout
  pdf2ocr -v document.pdf 2>render.log > result.json

OUTPUT (success, exit 0):
  {"pageTexts": [...], "ocrPages": [{"index": n, "image": "data:image/jpeg;base64,..."}], "pageCount": n}

OUTPUT (failure, exit 1):
  {"error": "<message>"}

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Path to an existing libpdfium (file or directory).
                    Without it, pdf2ocr looks in the working directory and
                    then the system library path.
  RUST_LOG          Override the stderr log filter (tracing EnvFilter syntax).
"#;

/// Extract per-page text from a PDF and render text-poor pages for OCR.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2ocr",
    version,
    about = "Extract per-page PDF text and render text-poor pages to JPEG for external OCR",
    long_about = "Scan a PDF document and emit one JSON document on stdout: the trimmed \
embedded text of every page, a base64 JPEG snapshot of each page with fewer than 100 \
characters of text, and the total page count. Pages with sufficient text are never \
rendered.",
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Filesystem path to the PDF document.
    input: Option<PathBuf>,

    /// Enable DEBUG-level tracing logs (stderr).
    #[arg(short, long, env = "PDF2OCR_VERBOSE")]
    verbose: bool,

    /// Suppress all diagnostics except errors.
    #[arg(short, long, env = "PDF2OCR_QUIET")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // stdout belongs to the JSON document; every diagnostic goes to stderr.
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    // The missing-argument case must produce the JSON error document, not
    // clap's usage text, so the positional stays Option and is checked here.
    let Some(input) = cli.input else {
        emit_error("No PDF path provided");
        return ExitCode::FAILURE;
    };

    match pdf2ocr::scan(&input) {
        Ok(output) => match serde_json::to_string(&output) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                emit_error(&format!("Failed to serialise output: {e}"));
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            emit_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Write the single-line `{"error": "..."}` document to stdout.
fn emit_error(message: &str) {
    println!("{}", serde_json::json!({ "error": message }));
}
