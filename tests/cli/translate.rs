use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, backend::FakeBackend};

#[test]
fn test_translates_heading_and_content() -> Result<()> {
    let backend = FakeBackend::uppercase()?;
    let test = CliTest::with_file("doc.md", "# Title\n\nHello world\n")?;

    let output = test
        .translate_command(backend.endpoint())
        .args(["doc.md", "-t", "ja"])
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(test.read_file("doc-translated.md")?, "# TITLE\n\nHELLO WORLD\n");
    assert_eq!(backend.queries(), vec!["# Title", "Hello world"]);
    for request in backend.requests() {
        assert_eq!(request.body["target"], "ja");
        assert_eq!(request.body["format"], "text");
    }

    assert!(stdout.contains("Translating line 1/3..."));
    assert!(!stdout.contains("line 2/3"));
    assert!(stdout.contains("Translating line 3/3..."));
    assert!(stdout.contains("✓ Translation complete! Saved to: doc-translated.md"));

    Ok(())
}

#[test]
fn test_fence_markers_are_not_translated() -> Result<()> {
    let backend = FakeBackend::uppercase()?;
    let test = CliTest::with_file("doc.md", "```\ncode line\n```\n")?;

    let output = test
        .translate_command(backend.endpoint())
        .arg("doc.md")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());
    assert_eq!(test.read_file("doc-translated.md")?, "```\nCODE LINE\n```\n");
    assert_eq!(backend.queries(), vec!["code line"]);
    assert!(stdout.contains("Translating code block line 2/3..."));

    Ok(())
}

#[test]
fn test_preserve_code_blocks_flag() -> Result<()> {
    let backend = FakeBackend::uppercase()?;
    let input = "Intro\n~~~\ncode line\n~~~\n";
    let test = CliTest::with_file("doc.md", input)?;

    let output = test
        .translate_command(backend.endpoint())
        .args(["doc.md", "--preserve-code-blocks"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("doc-translated.md")?, "INTRO\n~~~\ncode line\n~~~\n");
    assert_eq!(backend.queries(), vec!["Intro"]);

    Ok(())
}

#[test]
fn test_explicit_output_path() -> Result<()> {
    let backend = FakeBackend::uppercase()?;
    let test = CliTest::with_file("README-ja.md", "こんにちは\n")?;

    let output = test
        .translate_command(backend.endpoint())
        .args(["README-ja.md", "out/README-en.md"])
        .output()?;

    // Parent directories are not created
    assert_eq!(output.status.code(), Some(2));

    test.write_file("out/.keep", "")?;
    let output = test
        .translate_command(backend.endpoint())
        .args(["README-ja.md", "out/README-en.md"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("out/README-en.md")?, "こんにちは\n");
    assert!(!test.root().join("README-ja-translated.md").exists());

    Ok(())
}

#[test]
fn test_config_file_sets_target_language() -> Result<()> {
    let backend = FakeBackend::uppercase()?;
    let test = CliTest::with_file(
        ".mdtranslaterc.json",
        r#"{ "targetLanguage": "fr", "sourceLanguage": "en" }"#,
    )?;
    test.write_file("doc.md", "Hello\n")?;

    let output = test
        .translate_command(backend.endpoint())
        .arg("doc.md")
        .output()?;

    assert!(output.status.success());
    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].body["target"], "fr");
    assert_eq!(requests[0].body["source"], "en");
    assert_eq!(requests[0].query, None);

    Ok(())
}

#[test]
fn test_cli_flag_overrides_config_file() -> Result<()> {
    let backend = FakeBackend::uppercase()?;
    let test = CliTest::with_file(".mdtranslaterc.json", r#"{ "targetLanguage": "fr" }"#)?;
    test.write_file("doc.md", "Hello\n")?;

    let output = test
        .translate_command(backend.endpoint())
        .args(["doc.md", "--target-language", "de"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(backend.requests()[0].body["target"], "de");

    Ok(())
}

#[test]
fn test_api_key_is_sent_as_query_parameter() -> Result<()> {
    let backend = FakeBackend::uppercase()?;
    let test = CliTest::with_file("doc.md", "Hello\n")?;

    let output = test
        .translate_command(backend.endpoint())
        .arg("doc.md")
        .env("GOOGLE_TRANSLATE_API_KEY", "secret")
        .output()?;

    assert!(output.status.success());
    assert_eq!(backend.requests()[0].query.as_deref(), Some("key=secret"));

    Ok(())
}

#[test]
fn test_backend_failure_writes_nothing() -> Result<()> {
    let backend = FakeBackend::failing()?;
    let test = CliTest::with_file("doc.md", "first\nsecond\n")?;

    let output = test
        .translate_command(backend.endpoint())
        .arg("doc.md")
        .output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("Failed to translate line 1"));
    assert!(stderr.contains("500"));
    assert!(!test.root().join("doc-translated.md").exists());
    // No retry and no further lines after the first failure
    assert_eq!(backend.requests().len(), 1);

    Ok(())
}

#[test]
fn test_backend_failure_keeps_existing_output() -> Result<()> {
    let backend = FakeBackend::failing()?;
    let test = CliTest::with_file("doc.md", "Hello\n")?;
    test.write_file("doc-translated.md", "previous run\n")?;

    let output = test
        .translate_command(backend.endpoint())
        .arg("doc.md")
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(test.read_file("doc-translated.md")?, "previous run\n");

    Ok(())
}

#[test]
fn test_crlf_input_is_normalized() -> Result<()> {
    let backend = FakeBackend::uppercase()?;
    let test = CliTest::with_file("doc.md", "a\r\n\r\n```\r\nb")?;

    let output = test
        .translate_command(backend.endpoint())
        .arg("doc.md")
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("doc-translated.md")?, "A\n\n```\nB\n");
    assert_eq!(backend.queries(), vec!["a", "b"]);

    Ok(())
}

#[test]
fn test_input_without_md_suffix_is_overwritten() -> Result<()> {
    let backend = FakeBackend::uppercase()?;
    let test = CliTest::with_file("NOTES", "hello\n")?;

    let output = test
        .translate_command(backend.endpoint())
        .arg("NOTES")
        .output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(output.status.success());
    assert_eq!(test.read_file("NOTES")?, "HELLO\n");
    assert!(stderr.contains("will be overwritten"));

    Ok(())
}

#[test]
fn test_empty_document() -> Result<()> {
    let backend = FakeBackend::uppercase()?;
    let test = CliTest::with_file("empty.md", "")?;

    let output = test
        .translate_command(backend.endpoint())
        .arg("empty.md")
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("empty-translated.md")?, "");
    assert!(backend.requests().is_empty());

    Ok(())
}

#[test]
fn test_trailing_arguments_are_ignored() -> Result<()> {
    let backend = FakeBackend::uppercase()?;
    let test = CliTest::with_file("doc.md", "Hello\n")?;

    let output = test
        .translate_command(backend.endpoint())
        .args(["doc.md", "out.md", "extra", "more"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("out.md")?, "HELLO\n");
    assert!(!test.root().join("extra").exists());

    Ok(())
}
