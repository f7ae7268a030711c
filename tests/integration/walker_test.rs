use gosyms::{core::Walker, error::Result, output::ListProcessor, ScanError};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

/// Shared buffer capturing everything the walker logs during a run.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with warnings redirected into the returned buffer.
fn with_captured_log<T>(f: impl FnOnce() -> T) -> (T, CapturedLog) {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, log)
}

/// Build a small Go source tree exercising the selection and skip policies.
fn create_source_tree(src: &Path) -> Result<()> {
    // Ordinary library package with a mix of visibilities.
    let bufio = src.join("bufio");
    fs::create_dir_all(&bufio)?;
    fs::write(
        bufio.join("bufio.go"),
        r#"package bufio

type Reader struct{}

type writer struct{}

func NewReader() *Reader { return nil }

func newWriter() *writer { return nil }

var ErrBufferFull = errors.New("buffer full")

const minReadBufferSize = 16
"#,
    )?;
    // Test file in the same directory; its declarations must never surface.
    fs::write(
        bufio.join("bufio_test.go"),
        "package bufio\n\ntype TestHarness struct{}\n\nfunc TestReader(t *testing.T) {}\n",
    )?;

    // Library package sharing its directory with an executable entry point.
    let mixed = src.join("mixed");
    fs::create_dir_all(&mixed)?;
    fs::write(mixed.join("lib.go"), "package mixed\n\ntype Thing struct{}\n")?;
    fs::write(mixed.join("gen.go"), "package main\n\nfunc main() {}\n")?;

    // Directory holding only an executable entry point.
    let cmd = src.join("cmd").join("tool");
    fs::create_dir_all(&cmd)?;
    fs::write(cmd.join("main.go"), "package main\n\nfunc main() {}\n")?;

    // Pruned subtrees: nothing below these may produce output.
    for skipped in ["internal", "testdata", "vendor"] {
        let dir = src.join(skipped).join("hidden");
        fs::create_dir_all(&dir)?;
        fs::write(
            dir.join("hidden.go"),
            "package hidden\n\ntype Secret struct{}\n",
        )?;
    }

    // Directory with no Go files at all.
    fs::create_dir_all(src.join("empty"))?;

    Ok(())
}

fn run_list(src: &Path) -> Result<String> {
    let mut processor = ListProcessor::new(src, Vec::new());
    let mut walker = Walker::new(src)?;
    walker.walk(&mut processor)?;
    Ok(String::from_utf8(processor.into_inner()).expect("output is UTF-8"))
}

#[test]
fn test_list_mode_emits_public_symbols_only() -> Result<()> {
    let temp = tempdir()?;
    create_source_tree(temp.path())?;
    let output = run_list(temp.path())?;

    assert!(output.contains("package: bufio\n"));
    assert!(output.contains("type: bufio.Reader\n"));
    assert!(output.contains("func: bufio.NewReader\n"));
    assert!(output.contains("value: bufio.ErrBufferFull\n"));

    // Private declarations are silently omitted.
    assert!(!output.contains("writer"));
    assert!(!output.contains("minReadBufferSize"));

    // Kind ordering within a package is types, then funcs, then values.
    let type_at = output.find("type: bufio.Reader").unwrap();
    let func_at = output.find("func: bufio.NewReader").unwrap();
    let value_at = output.find("value: bufio.ErrBufferFull").unwrap();
    assert!(type_at < func_at && func_at < value_at);
    Ok(())
}

#[test]
fn test_test_file_declarations_never_surface() -> Result<()> {
    let temp = tempdir()?;
    create_source_tree(temp.path())?;
    let output = run_list(temp.path())?;
    assert!(!output.contains("TestHarness"));
    assert!(!output.contains("TestReader"));
    Ok(())
}

#[test]
fn test_skip_directories_are_pruned() -> Result<()> {
    let temp = tempdir()?;
    create_source_tree(temp.path())?;
    let output = run_list(temp.path())?;
    assert!(!output.contains("Secret"));
    assert!(!output.contains("hidden"));
    Ok(())
}

#[test]
fn test_main_packages_are_never_selected() -> Result<()> {
    let temp = tempdir()?;
    create_source_tree(temp.path())?;
    let output = run_list(temp.path())?;

    // The directory holding only a main package produces no model at all.
    assert!(!output.contains("cmd/tool"));
    assert!(!output.contains("main."));

    // A library package beside a main package is still selected.
    assert!(output.contains("package: mixed\n"));
    assert!(output.contains("type: mixed.Thing\n"));
    Ok(())
}

#[test]
fn test_conflicting_packages_select_exactly_one() -> Result<()> {
    let temp = tempdir()?;
    let dir = temp.path().join("conflicted");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("a.go"), "package alpha\n\ntype Alpha struct{}\n")?;
    fs::write(dir.join("b.go"), "package beta\n\ntype Beta struct{}\n")?;

    let (output, log) = with_captured_log(|| run_list(temp.path()));
    let output = output?;

    // One header, and declarations from only the first-encountered package.
    assert_eq!(output.matches("package: conflicted\n").count(), 1);
    let has_alpha = output.contains("type: alpha.Alpha\n");
    let has_beta = output.contains("type: beta.Beta\n");
    assert!(has_alpha != has_beta, "exactly one package must win: {output}");

    // The loser triggers exactly one logged conflict naming both packages.
    let warnings = log.contents();
    assert_eq!(
        warnings.matches("conflict package names").count(),
        1,
        "expected one conflict warning: {warnings}"
    );
    assert!(warnings.contains("alpha") && warnings.contains("beta"));
    Ok(())
}

#[test]
fn test_no_conflict_logged_for_main_beside_library() -> Result<()> {
    let temp = tempdir()?;
    create_source_tree(temp.path())?;

    let (output, log) = with_captured_log(|| run_list(temp.path()));
    let output = output?;

    assert!(output.contains("type: mixed.Thing\n"));
    let warnings = log.contents();
    assert_eq!(
        warnings.matches("conflict package names").count(),
        0,
        "no conflict expected: {warnings}"
    );
    Ok(())
}

#[test]
fn test_empty_directories_produce_no_output() -> Result<()> {
    let temp = tempdir()?;
    fs::create_dir_all(temp.path().join("empty"))?;
    // Declarationless package: no model, no processor call.
    let bare = temp.path().join("bare");
    fs::create_dir_all(&bare)?;
    fs::write(bare.join("doc.go"), "package bare\n")?;

    let output = run_list(temp.path())?;
    assert!(output.is_empty(), "unexpected output: {output}");
    Ok(())
}

#[test]
fn test_parse_failure_aborts_the_walk() -> Result<()> {
    let temp = tempdir()?;
    let dir = temp.path().join("broken");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("bad.go"), "package broken\n\nfunc {{{ nope\n")?;

    let mut processor = ListProcessor::new(temp.path(), Vec::new());
    let mut walker = Walker::new(temp.path())?;
    let err = walker.walk(&mut processor).unwrap_err();
    assert!(matches!(err, ScanError::Parse { .. }), "got {err}");
    Ok(())
}

#[test]
fn test_cancellation_aborts_before_any_directory() -> Result<()> {
    let temp = tempdir()?;
    create_source_tree(temp.path())?;

    let mut processor = ListProcessor::new(temp.path(), Vec::new());
    let mut walker = Walker::new(temp.path())?;
    walker.cancel_flag().store(true, Ordering::Relaxed);
    let err = walker.walk(&mut processor).unwrap_err();
    assert!(matches!(err, ScanError::Interrupted));
    assert!(processor.into_inner().is_empty());
    Ok(())
}

#[test]
fn test_list_mode_is_idempotent() -> Result<()> {
    let temp = tempdir()?;
    create_source_tree(temp.path())?;
    let first = run_list(temp.path())?;
    let second = run_list(temp.path())?;
    assert_eq!(first, second);
    Ok(())
}
