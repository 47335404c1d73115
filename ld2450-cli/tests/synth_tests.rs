use std::fs;
use tempfile::tempdir;

use ld2450_cli::commands::synth;
use ld2450_core::scanner::scan_stream;

#[test]
fn test_synth_round_trips_through_scanner() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("frames.json");
    let output = dir.path().join("capture.bin");

    fs::write(
        &input,
        r#"[
            [[100, 50, 10], [0, 0, 0], [-20, 30, -5]],
            [[7, 7, 7]]
        ]"#,
    )
    .unwrap();

    synth::execute(input.to_str().unwrap(), output.to_str().unwrap(), 0).unwrap();

    let capture = fs::read(&output).unwrap();
    assert_eq!(capture.len(), 48);

    let located = scan_stream(&capture);
    assert_eq!(located.len(), 2);
    assert_eq!(located[0].frame.valid_count(), 2);
    assert_eq!(located[0].frame.get(0).distance, 112);
    assert_eq!(located[1].frame.get(0).x, 7);
}

#[test]
fn test_synth_with_junk_still_scannable() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("frames.json");
    let output = dir.path().join("noisy.bin");

    fs::write(&input, r#"[[[1, 2, 3]], [[4, 5, 6]]]"#).unwrap();

    synth::execute(input.to_str().unwrap(), output.to_str().unwrap(), 9).unwrap();

    let capture = fs::read(&output).unwrap();
    assert_eq!(capture.len(), 2 * (24 + 9));

    let located = scan_stream(&capture);
    assert_eq!(located.len(), 2);
    assert_eq!(located[0].frame.get(0).x, 1);
    assert_eq!(located[1].frame.get(0).x, 4);
}

#[test]
fn test_synth_rejects_bad_json() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.json");
    let output = dir.path().join("capture.bin");

    fs::write(&input, "not json").unwrap();

    assert!(synth::execute(input.to_str().unwrap(), output.to_str().unwrap(), 0).is_err());
}

#[test]
fn test_synth_rejects_too_many_slots() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("frames.json");
    let output = dir.path().join("capture.bin");

    fs::write(
        &input,
        r#"[[[1, 1, 1], [2, 2, 2], [3, 3, 3], [4, 4, 4]]]"#,
    )
    .unwrap();

    assert!(synth::execute(input.to_str().unwrap(), output.to_str().unwrap(), 0).is_err());
}
