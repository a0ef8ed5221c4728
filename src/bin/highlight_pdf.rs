//! Highlight a search term in a PDF using OCR.
//!
//! Renders each page, OCRs it with Tesseract, highlights every word containing
//! the term and adds a note to the first page.
//!
//! Usage:
//!   highlight_pdf <input_pdf> <output_pdf>
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`
//! (default: `warn`).

use std::path::PathBuf;
use std::process::ExitCode;

use ocr_highlight::rendering::{bind_pdfium, PdfiumRasterizer, RenderOptions};
use ocr_highlight::{
    Error, HighlightConfig, HighlightPipeline, LopdfAnnotationWriter, Reporter, Result,
    TesseractCli,
};

const USAGE: &str = "Usage: highlight_pdf <input_pdf> <output_pdf>";

struct Args {
    input: PathBuf,
    output: PathBuf,
}

impl Args {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        match args.as_slice() {
            [input, output] => Some(Self {
                input: PathBuf::from(input),
                output: PathBuf::from(output),
            }),
            _ => None,
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = HighlightConfig::default();
    let mut reporter = Reporter::new(std::io::stdout().lock(), &config);

    let pdfium = bind_pdfium()?;
    let rasterizer =
        PdfiumRasterizer::open(&pdfium, &args.input, RenderOptions::with_zoom(config.zoom))?;

    let detector = TesseractCli::new(config.ocr_language.clone());
    if !detector.is_available() {
        return Err(Error::Ocr("tesseract executable not found on PATH".to_string()));
    }

    let writer = LopdfAnnotationWriter::from_config(&config);
    let pipeline = HighlightPipeline::new(config, rasterizer, detector, writer)?;

    reporter.searching()?;
    let scan = pipeline.scan()?;
    reporter.scanned(&scan)?;

    if scan.is_empty() {
        return Ok(());
    }

    let summary = pipeline.write(&args.input, &args.output, &scan)?;
    reporter.written(&scan, &summary)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Some(args) = Args::from_args() else {
        println!("{}", USAGE);
        return ExitCode::from(1);
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        },
    }
}
