use anyhow::{Context, Result};
use ld2450_core::encoder::encode_frame;
use rand::Rng;
use std::fs;
use tracing::info;

/// Build a capture file from JSON target frames
///
/// The input is an array of frames, each an array of up to three
/// `[x, y, speed]` triples. With `junk > 0`, that many random bytes are
/// inserted before every frame to exercise resynchronization; junk stays
/// below 0xFD so it can never fake a frame header.
pub fn execute(input: &str, output: &str, junk: usize) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    let frames: Vec<Vec<(i16, i16, i16)>> =
        serde_json::from_str(&text).with_context(|| "Failed to parse input JSON")?;

    let mut rng = rand::thread_rng();
    let mut capture = Vec::new();

    for slots in &frames {
        for _ in 0..junk {
            capture.push(rng.gen_range(0x00u8..0xFD));
        }
        let frame = encode_frame(slots)?;
        capture.extend_from_slice(&frame);
    }

    fs::write(output, &capture)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!("Capture written to: {}", output);
    println!(
        "Wrote {} bytes ({} frame(s), {} junk byte(s) per frame) to {}",
        capture.len(),
        frames.len(),
        junk,
        output
    );

    Ok(())
}
