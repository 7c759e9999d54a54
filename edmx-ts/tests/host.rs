//! Host adapter tests against real files.

use std::fs;

use edmx_ts::prelude::*;

const METADATA: &str = r#"<edmx:Edmx Version="4.0" xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx">
    <edmx:DataServices>
        <Schema Namespace="Shop">
            <EnumType Name="Size">
                <Member Name="Small" Value="1"/>
                <Member Name="Large" Value="2"/>
            </EnumType>
        </Schema>
    </edmx:DataServices>
</edmx:Edmx>"#;

#[derive(Default)]
struct Collect(Vec<String>);

impl ErrorReporter for Collect {
    fn report(&mut self, message: &str) {
        self.0.push(message.to_string());
    }
}

#[test]
fn test_file_to_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("metadata.xml");
    let output = dir.path().join("shop.d.ts");
    fs::write(&input, METADATA).expect("write input");

    let mut source = FileSource::new(&input);
    let mut sink = FileSink::new(&output);
    let mut reporter = Collect::default();

    assert!(run(
        &mut source,
        &mut sink,
        &mut reporter,
        &GeneratorOptions::default()
    ));
    assert!(reporter.0.is_empty());

    let text = fs::read_to_string(&output).expect("read output");
    assert!(text.starts_with("namespace Shop {\nexport enum Size {\nSmall = 1,Large = 2}\n}\n"));
    assert!(text.contains("\nnamespace Edm {\n"));
}

#[test]
fn test_custom_namespace_and_fallback() {
    let xml = r#"<edmx:Edmx Version="4.0" xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx">
    <edmx:DataServices>
        <Schema Namespace="Media">
            <ComplexType Name="Clip">
                <Property Name="Data" Type="Edm.Stream"/>
            </ComplexType>
        </Schema>
    </edmx:DataServices>
</edmx:Edmx>"#;
    let options = GeneratorOptions::new()
        .primitive_namespace("Prim")
        .fallback_type("unknown");

    let mut source = ReaderSource::new(xml.as_bytes());
    let mut sink = WriterSink::new(Vec::new());
    let mut reporter = Collect::default();
    assert!(run(&mut source, &mut sink, &mut reporter, &options));

    let text = String::from_utf8(sink.into_inner()).expect("utf-8");
    assert!(text.contains("Data?: unknown;\n"));
    assert!(text.contains("\nnamespace Prim {\n"));
    assert!(text.ends_with("export type Stream = unknown;\n}"));
}

#[test]
fn test_truncated_input_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = dir.path().join("shop.d.ts");
    let cut = METADATA.find("</EnumType>").expect("fixture has an enum");

    let mut source = ReaderSource::new(METADATA[..cut].as_bytes());
    let mut sink = FileSink::new(&output);
    let mut reporter = Collect::default();

    assert!(!run(
        &mut source,
        &mut sink,
        &mut reporter,
        &GeneratorOptions::default()
    ));
    assert!(!output.exists());
    assert_eq!(
        reporter.0,
        vec!["Response is not valid OData metadata. See log output for more information."]
    );
}
