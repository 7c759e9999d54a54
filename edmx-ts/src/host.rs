//! Host-side adapters around the translator.
//!
//! The translator only turns a metadata document into text. Where the
//! document comes from, where the text goes and how failures are shown to a
//! user are host concerns, expressed here as small traits.

use std::io::{Read, Write};
use std::path::PathBuf;

use edmx_ts_codegen::{CodegenError, GeneratorOptions};

/// Supplies the raw `$metadata` XML for a run.
pub trait MetadataSource {
    /// Loads the metadata document text.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if the document cannot be read.
    fn load(&mut self) -> Result<String, CodegenError>;
}

/// Receives the generated declarations.
pub trait OutputSink {
    /// Inserts the generated text.
    ///
    /// # Errors
    /// Returns an IO error if the text cannot be written.
    fn insert(&mut self, text: &str) -> std::io::Result<()>;
}

/// Shows failure messages to the user.
pub trait ErrorReporter {
    /// Reports a human-readable message.
    fn report(&mut self, message: &str);
}

/// Reads metadata from a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source for the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MetadataSource for FileSource {
    fn load(&mut self) -> Result<String, CodegenError> {
        tracing::debug!("Reading metadata from {}", self.path.display());
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

/// Reads metadata from any reader, e.g. stdin.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> MetadataSource for ReaderSource<R> {
    fn load(&mut self) -> Result<String, CodegenError> {
        let mut xml = String::new();
        self.reader.read_to_string(&mut xml)?;
        Ok(xml)
    }
}

/// Writes generated text to any writer.
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn insert(&mut self, text: &str) -> std::io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

/// Writes generated text to a file, created only when there is text to write.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    /// Creates a sink for the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputSink for FileSink {
    fn insert(&mut self, text: &str) -> std::io::Result<()> {
        tracing::debug!("Writing {} bytes to {}", text.len(), self.path.display());
        std::fs::write(&self.path, text)
    }
}

/// Prints messages to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl ErrorReporter for StderrReporter {
    fn report(&mut self, message: &str) {
        eprintln!("error: {}", message);
    }
}

/// Runs one translation: load, translate, insert.
///
/// This is the boundary where failures become user-facing messages: the
/// detailed error is logged, the reporter gets the generic message, and the
/// sink receives nothing.
///
/// # Returns
/// `true` if the generated text was inserted.
pub fn run(
    source: &mut dyn MetadataSource,
    sink: &mut dyn OutputSink,
    reporter: &mut dyn ErrorReporter,
    options: &GeneratorOptions,
) -> bool {
    let result = source
        .load()
        .and_then(|xml| edmx_ts_codegen::generate_from_xml(&xml, options));

    let text = match result {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Translation failed ({:?}): {}", e.kind(), e);
            reporter.report(e.user_message());
            return false;
        }
    };

    if let Err(e) = sink.insert(&text) {
        tracing::error!("Failed to write generated declarations: {}", e);
        reporter.report(&format!("Could not write output: {}", e));
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects reported messages.
    #[derive(Default)]
    struct Messages(Vec<String>);

    impl ErrorReporter for Messages {
        fn report(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    #[test]
    fn test_run_unsupported_version() {
        let xml = r#"<edmx:Edmx Version="3.0" xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx">
    <edmx:DataServices/>
</edmx:Edmx>"#;
        let mut source = ReaderSource::new(xml.as_bytes());
        let mut sink = WriterSink::new(Vec::new());
        let mut messages = Messages::default();

        let ok = run(
            &mut source,
            &mut sink,
            &mut messages,
            &GeneratorOptions::default(),
        );

        assert!(!ok);
        assert!(sink.into_inner().is_empty());
        assert_eq!(
            messages.0,
            vec!["Metadata is not a supported OData version. Only 4.0 is supported."]
        );
    }

    #[test]
    fn test_run_writes_output() {
        let xml = r#"<edmx:Edmx Version="4.0" xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx">
    <edmx:DataServices>
        <Schema Namespace="Test"/>
    </edmx:DataServices>
</edmx:Edmx>"#;
        let mut source = ReaderSource::new(xml.as_bytes());
        let mut sink = WriterSink::new(Vec::new());
        let mut messages = Messages::default();

        assert!(run(
            &mut source,
            &mut sink,
            &mut messages,
            &GeneratorOptions::default(),
        ));

        let text = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert!(text.starts_with("namespace Test {\n}\n\nnamespace Edm {\n"));
        assert!(messages.0.is_empty());
    }

    #[test]
    fn test_file_sink_untouched_on_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("types.ts");
        let mut source = ReaderSource::new("not xml at all".as_bytes());
        let mut sink = FileSink::new(&out);
        let mut messages = Messages::default();

        assert!(!run(
            &mut source,
            &mut sink,
            &mut messages,
            &GeneratorOptions::default(),
        ));
        assert!(!out.exists());
        assert_eq!(
            messages.0,
            vec!["Response is not valid OData metadata. See log output for more information."]
        );
    }

    #[test]
    fn test_run_missing_file() {
        let mut source = FileSource::new("/nonexistent/$metadata.xml");
        let mut sink = WriterSink::new(Vec::new());
        let mut messages = Messages::default();

        assert!(!run(
            &mut source,
            &mut sink,
            &mut messages,
            &GeneratorOptions::default(),
        ));
        assert_eq!(
            messages.0,
            vec!["Unknown error occurred, see log output for more information."]
        );
    }
}
