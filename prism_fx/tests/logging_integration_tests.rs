//! Integration tests for the logging emitted while rendering chains
//!
//! The logger is process-global: every test is #[serial] and resets it.
//! No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests


use prism_fx::prism::Engine;
use prism_fx::prism::chain::ChainConfig;
use prism_fx::prism::geometry::{Color, Rect};
use prism_fx::prism::log::{Logger, LogEntry, LogSeverity};
use prism_fx::prism::node::{EffectNode, SolidContent};
use prism_fx::prism::render::DrawNode;
use prism_fx::prism::shader::{PipelineShader, ShaderRef, StepSequence};
use prism_fx::prism::time::ManualClock;
use serial_test::serial;
use std::sync::{Arc, Mutex};
use test_device_utils::{pipeline, RecordingCommandList, TestDevice};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn install() -> Arc<Mutex<Vec<LogEntry>>> {
        let entries = Arc::new(Mutex::new(Vec::new()));
        Engine::set_logger(TestLogger { entries: entries.clone() });
        Engine::set_min_severity(LogSeverity::Trace);
        entries
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn node() -> EffectNode {
    let mut node = EffectNode::new(
        "banner",
        Rect::new(0.0, 0.0, 8.0, 8.0),
        TestDevice::shared(),
        Arc::new(ManualClock::new(0.0)),
        ChainConfig::default(),
    );
    node.add_source(Arc::new(SolidContent::new(Rect::new(0.0, 0.0, 8.0, 8.0), Color::WHITE)));
    node
}

fn shader(name: &str) -> ShaderRef {
    ShaderRef::new(PipelineShader::new(name, pipeline(name)))
}

fn messages(entries: &Arc<Mutex<Vec<LogEntry>>>, severity: LogSeverity) -> Vec<String> {
    entries.lock().unwrap()
        .iter()
        .filter(|e| e.severity == severity)
        .map(|e| e.message.clone())
        .collect()
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_chain_change_logged_at_debug() {
    let entries = TestLogger::install();
    let mut node = node();
    node.set_shaders(vec![shader("a"), shader("b")]);
    let mut renderer = node.create_draw_node().unwrap();
    let mut cmd = RecordingCommandList::new();

    renderer.apply_state(&node).unwrap();
    renderer.draw(&mut cmd).unwrap();
    node.set_shaders(vec![shader("c")]);
    renderer.apply_state(&node).unwrap();

    let debug = messages(&entries, LogSeverity::Debug);
    assert!(debug.iter().any(|m| m.contains("'banner' changed: 2 shader(s), 0 buffer(s) released")));
    assert!(debug.iter().any(|m| m.contains("'banner' changed: 1 shader(s), 2 buffer(s) released")));
    assert!(entries.lock().unwrap().iter().all(|e| e.source.starts_with("prism::")));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_passes_traced() {
    let entries = TestLogger::install();
    let mut node = node();
    node.set_shaders(vec![shader("a")]);
    let mut renderer = node.create_draw_node().unwrap();
    let mut cmd = RecordingCommandList::new();

    renderer.apply_state(&node).unwrap();
    renderer.draw(&mut cmd).unwrap();

    let trace = messages(&entries, LogSeverity::Trace);
    assert!(trace.iter().any(|m| m.contains("pass 0 'a'")));
    assert!(trace.iter().any(|m| m.starts_with("Allocated buffer")));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_resolution_error_logged_with_location() {
    let entries = TestLogger::install();
    let mut node = node();
    let orphan = ShaderRef::new(
        StepSequence::new("orphan", vec![shader("x")])
            .unwrap()
            .with_predecessor(shader("ghost")),
    );
    node.set_shaders(vec![orphan]);
    let mut renderer = node.create_draw_node().unwrap();
    let mut cmd = RecordingCommandList::new();

    renderer.apply_state(&node).unwrap();
    assert!(renderer.draw(&mut cmd).is_err());

    let captured = entries.lock().unwrap();
    let error = captured.iter()
        .find(|e| e.severity == LogSeverity::Error)
        .unwrap();
    assert_eq!(error.source, "prism::ChainRenderer");
    assert!(error.message.contains("'ghost'"));
    assert!(error.file.is_some());
    assert!(error.line.is_some());
    drop(captured);

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_min_severity_silences_traces() {
    let entries = TestLogger::install();
    Engine::set_min_severity(LogSeverity::Warn);
    let mut node = node();
    node.set_shaders(vec![shader("a")]);
    let mut renderer = node.create_draw_node().unwrap();
    let mut cmd = RecordingCommandList::new();

    renderer.apply_state(&node).unwrap();
    renderer.draw(&mut cmd).unwrap();

    assert!(entries.lock().unwrap().is_empty());

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_empty_step_sequence_logged() {
    let entries = TestLogger::install();

    assert!(StepSequence::new("nothing", Vec::new()).is_err());

    let errors = messages(&entries, LogSeverity::Error);
    assert_eq!(errors, vec!["StepSequence 'nothing' has no steps".to_string()]);

    Engine::reset_logger();
}
