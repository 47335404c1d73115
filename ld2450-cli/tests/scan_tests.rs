use std::fs;
use tempfile::tempdir;

use ld2450_cli::commands::scan;
use ld2450_core::encoder::FrameBuilder;

/// Helper: a capture holding `num_frames` frames with one valid target each
fn create_test_capture(num_frames: usize) -> Vec<u8> {
    let mut capture = Vec::new();
    for i in 0..num_frames {
        let frame = FrameBuilder::new()
            .slot((i as i16 + 1) * 10, 500, -2)
            .build()
            .unwrap();
        capture.extend_from_slice(&frame);
    }
    capture
}

#[test]
fn test_scan_clean_capture() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("clean.bin");
    fs::write(&input, create_test_capture(3)).unwrap();

    let result = scan::execute(input.to_str().unwrap(), None, false);
    assert!(result.is_ok());
}

#[test]
fn test_scan_writes_json_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("capture.bin");
    let output = dir.path().join("recovered.json");

    let mut capture = Vec::new();
    capture.extend_from_slice(b"noise");
    capture.extend_from_slice(&create_test_capture(2));
    fs::write(&input, capture).unwrap();

    scan::execute(
        input.to_str().unwrap(),
        Some(output.to_str().unwrap()),
        false,
    )
    .unwrap();

    let json = fs::read_to_string(&output).unwrap();
    let recovered: serde_json::Value = serde_json::from_str(&json).unwrap();
    let frames = recovered.as_array().unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0]["offset"], 5);
    assert_eq!(frames[0]["valid_targets"], 1);
    assert_eq!(frames[0]["targets"][0]["x"], 10);
}

#[test]
fn test_scan_stats_only() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("capture.bin");
    fs::write(&input, create_test_capture(1)).unwrap();

    let result = scan::execute(input.to_str().unwrap(), None, true);
    assert!(result.is_ok());
}

#[test]
fn test_scan_missing_input_fails() {
    let result = scan::execute("/nonexistent/capture.bin", None, false);
    assert!(result.is_err());
}
