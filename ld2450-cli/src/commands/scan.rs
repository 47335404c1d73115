use anyhow::{Context, Result};
use ld2450_core::scanner::scan_stream_with_stats;
use ld2450_core::Target;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::info;

#[derive(Serialize, Deserialize)]
struct RecoveredFrame {
    offset: usize,
    size: usize,
    valid_targets: usize,
    targets: Vec<Target>,
}

pub fn execute(input: &str, output: Option<&str>, stats_only: bool) -> Result<()> {
    info!("Scanning capture: {}", input);

    let data = fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    info!("Capture size: {} bytes", data.len());

    let (located_frames, stats) = scan_stream_with_stats(&data);

    println!("\n=== Scan Results ===");
    println!("Bytes scanned:     {} bytes", stats.bytes_scanned);
    println!("Headers found:     {}", stats.headers_found);
    println!("Valid frames:      {}", stats.frames_found);
    println!("Decode failures:   {}", stats.decode_failures);
    println!("Bytes recovered:   {} bytes", stats.bytes_recovered);
    println!("Recovery rate:     {:.2}%", stats.recovery_rate());
    println!();

    if stats_only {
        return Ok(());
    }

    let recovered: Vec<RecoveredFrame> = located_frames
        .iter()
        .map(|lf| RecoveredFrame {
            offset: lf.offset,
            size: lf.size,
            valid_targets: lf.frame.valid_count(),
            targets: lf.frame.targets.to_vec(),
        })
        .collect();

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&recovered)
            .with_context(|| "Failed to serialize recovered frames")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Recovered frames written to: {}", output_path);
    } else {
        println!("=== Recovered Frames ===");
        for frame in &recovered {
            println!(
                "Frame @ offset {}: {} bytes, {} valid target(s)",
                frame.offset, frame.size, frame.valid_targets
            );
            for (i, target) in frame.targets.iter().enumerate().filter(|(_, t)| t.valid) {
                println!(
                    "  slot {}: x={} mm, y={} mm, distance={} mm, speed={}",
                    i, target.x, target.y, target.distance, target.speed
                );
            }
        }
    }

    Ok(())
}
