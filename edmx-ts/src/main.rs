//! `edmx-ts` command-line interface.
//!
//! Reads an OData v4 `$metadata` document from a file or stdin and writes
//! TypeScript declarations to stdout or a file. Logging goes to stderr and is
//! controlled with `RUST_LOG`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use edmx_ts::codegen::options::{DEFAULT_FALLBACK_TYPE, DEFAULT_PRIMITIVE_NAMESPACE};
use edmx_ts::host::{
    self, FileSink, FileSource, MetadataSource, OutputSink, ReaderSource, StderrReporter,
    WriterSink,
};
use edmx_ts::{GeneratorOptions, PrimitiveStyle};

/// Generate TypeScript declarations from an OData v4 $metadata document
#[derive(Parser, Debug)]
#[command(name = "edmx-ts", version)]
struct Cli {
    /// metadata XML file ('-' or omitted for stdin)
    input: Option<PathBuf>,

    /// output .ts file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// name of the emitted primitive namespace
    #[arg(long, default_value = DEFAULT_PRIMITIVE_NAMESPACE)]
    namespace: String,

    /// type used for primitives missing from the built-in table
    #[arg(long, default_value = DEFAULT_FALLBACK_TYPE)]
    fallback: String,

    /// keep `Edm.<Name>` references in member types instead of inlining them
    #[arg(long)]
    qualified_primitives: bool,
}

impl Cli {
    fn options(&self) -> GeneratorOptions {
        let style = if self.qualified_primitives {
            PrimitiveStyle::Qualified
        } else {
            PrimitiveStyle::Inline
        };
        GeneratorOptions::new()
            .primitive_namespace(self.namespace.clone())
            .fallback_type(self.fallback.clone())
            .primitive_style(style)
    }

    fn source(&self) -> Box<dyn MetadataSource> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => Box::new(FileSource::new(path.clone())),
            _ => Box::new(ReaderSource::new(std::io::stdin().lock())),
        }
    }

    fn sink(&self) -> Box<dyn OutputSink> {
        match &self.out {
            Some(path) => Box::new(FileSink::new(path.clone())),
            None => Box::new(WriterSink::new(std::io::stdout().lock())),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!("Starting edmx-ts with {:?}", cli);

    let options = cli.options();
    let mut source = cli.source();
    let mut sink = cli.sink();

    if host::run(
        source.as_mut(),
        sink.as_mut(),
        &mut StderrReporter,
        &options,
    ) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
