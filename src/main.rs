use std::env;

use huffman_engine::{EngineConfig, FreqTable, HuffmanEngine};
use log::{error, info, warn};

fn parse_flag(arg: &str, name: &str) -> Option<usize> {
    let value = arg.strip_prefix(name)?.strip_prefix('=')?;
    match value.parse::<usize>() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!("Ignoring {}: '{}' is not a number", name, value);
            None
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        error!("Usage: {} [--width=N] [--limit=N] <text>", args[0]);
        eprintln!("  <text>:      symbols to count, encode and decode back.");
        eprintln!("  --width=N:   bits per symbol of the uncompressed text (default 8).");
        eprintln!("  --limit=N:   maximum number of distinct symbols (default 256).");
        std::process::exit(1);
    }

    let mut config = EngineConfig::default();
    let mut text: Option<&str> = None;

    for arg in &args[1..] {
        if arg.starts_with("--width") {
            if let Some(n) = parse_flag(arg, "--width") {
                config = config.with_symbol_width(n.clamp(1, 32) as u32);
            }
        } else if arg.starts_with("--limit") {
            if let Some(n) = parse_flag(arg, "--limit") {
                config = config.with_max_symbols(n);
            }
        } else {
            text = Some(arg.as_str());
        }
    }

    let Some(text) = text else {
        error!("No input text given.");
        std::process::exit(1);
    };

    info!("--- Start ---");

    let freq = match FreqTable::from_text_with_limit(text, config.max_symbols) {
        Ok(freq) => freq,
        Err(e) => {
            error!("Failed to count symbols: {}", e);
            std::process::exit(1);
        }
    };

    let mut engine = HuffmanEngine::with_config(config);
    for entry in freq.iter() {
        if let Err(e) = engine.add(entry.symbol, entry.freq) {
            error!("Failed to add {:?}: {}", entry.symbol, e);
            std::process::exit(1);
        }
    }

    if let Err(e) = engine.calculate() {
        error!("Could not build Huffman tree: {}", e);
        std::process::exit(1);
    }

    println!("Huffman Codes:");
    for row in engine.list_codes() {
        println!("  {:?} with frequency {} => {}", row.symbol, row.freq, row.code);
    }

    let report = match engine.encode(text) {
        Ok(report) => report,
        Err(e) => {
            error!("Encoding failed: {}", e);
            std::process::exit(1);
        }
    };

    let decoded = match engine.decode(&report.bits) {
        Ok(decoded) => decoded,
        Err(e) => {
            error!("Decoding failed: {}", e);
            std::process::exit(1);
        }
    };

    // a one-symbol alphabet encodes to nothing, so there is nothing to verify
    if engine.code_table().len() > 1 && decoded != text {
        error!("Round trip mismatch: decoded {:?}", decoded);
        std::process::exit(1);
    }

    println!(
        "\r\n✅ Encoding successful.\n\
         📂  Input:       {} symbols ({} bits)\n\
         💾  Output:      {} bits\n\
         ℹ️  Entropy:     {:.4} bits/symbol\n\
         📏  Avg code:    {:.4} bits/symbol\n\
         🗜️  Ratio:       {:.2}%",
        report.symbol_count,
        report.original_length,
        report.compressed_length,
        engine.frequencies().entropy(),
        report.average_code_length(),
        report.compression_rate()
    );
    println!("{}", report.bits);

    info!("--- End ---");
}
