use anyhow::{Context, Result};
use ld2450_core::{ByteSource, StreamDecoder, TargetFrame};
use serde::Serialize;
use std::collections::VecDeque;
use std::fs;
use tracing::info;

#[derive(Serialize)]
struct Snapshot<'a> {
    poll: usize,
    valid_targets: usize,
    #[serde(flatten)]
    frame: &'a TargetFrame,
}

/// Replay a capture through the streaming decoder, releasing `chunk`
/// bytes per poll the way a UART would trickle them in.
pub fn execute(input: &str, chunk: usize) -> Result<()> {
    let chunk = chunk.max(1);
    let data = fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    info!("Replaying {} bytes in {}-byte chunks", data.len(), chunk);

    let mut decoder = StreamDecoder::bind(VecDeque::new());
    let mut polls = 0usize;
    let mut frames_seen = 0usize;

    for piece in data.chunks(chunk) {
        decoder.source_mut().extend(piece.iter().copied());

        // One chunk can leave bytes queued when the accumulation buffer
        // fills; keep polling until the source drains.
        loop {
            polls += 1;
            let valid = decoder.poll();
            if valid > 0 {
                frames_seen += 1;
                let snapshot = Snapshot {
                    poll: polls,
                    valid_targets: valid,
                    frame: decoder.targets(),
                };
                println!("{}", serde_json::to_string(&snapshot)?);
            }
            if decoder.source_mut().available() == 0 {
                break;
            }
        }
    }

    println!(
        "Replay complete: {} poll(s), {} poll(s) decoded a frame",
        polls, frames_seen
    );

    Ok(())
}
