// Replay a captured card session and print the snapshot.
//
// The capture file holds one raw card reply per line as hex (trailer
// included); blank lines and lines starting with '#' are skipped. Replies
// are handed out in order, whatever the request.
//
//   RUST_LOG=trace cargo run --example replay -- session.txt

use std::fs;

use anyhow::{Context, bail};
use libdesfire::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: replay <capture-file>");
    };
    let text = fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;

    let mut replies = Vec::new();
    for (n, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let bytes = parse_hex(line)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("{}:{}", path, n + 1))?;
        replies.push(bytes);
    }
    println!("loaded {} repl(ies) from {}", replies.len(), path);

    let mut device = DeviceBuilder::new()
        .with_transport(Box::new(MockTransport::with_responses(replies)))
        .build()
        .context("device without transport")?;
    let card = Card::read(&mut device)?;

    let m = &card.manufacturing;
    let (storage, exact) = m.hardware.storage_size_bytes();
    println!("UID        : {}", m.uid_hex());
    println!(
        "Hardware   : vendor {:02X} type {:02X} v{}.{} storage {}{} bytes",
        m.hardware.vendor_id,
        m.hardware.kind,
        m.hardware.major_version,
        m.hardware.minor_version,
        if exact { "" } else { ">" },
        storage
    );
    println!(
        "Software   : v{}.{}  batch {}  week {:02X}/{:02X}",
        m.software.major_version,
        m.software.minor_version,
        bytes_to_hex(&m.batch_number),
        m.production_week,
        m.production_year
    );

    for app in &card.applications {
        println!("\nApplication {}", app.id);
        for file in &app.files {
            let kind = file
                .file_type()
                .map(|t| format!("{:?}", t))
                .unwrap_or_else(|| "?".to_string());
            match &file.content {
                FileContent::Data(d) | FileContent::Records(d) => {
                    println!("  file {} {:<12} {}", file.id, kind, bytes_to_hex_spaced(d))
                }
                FileContent::Value(v) => println!("  file {} {:<12} {}", file.id, kind, v),
                FileContent::AccessDenied => {
                    println!("  file {} {:<12} (access denied)", file.id, kind)
                }
            }
        }
    }

    let registry = Registry::with_defaults();
    match registry.decode(&card) {
        Some(Ok(data)) => println!(
            "\n{}: balance {}",
            data.card_name,
            data.balance.map(|b| b.to_string()).unwrap_or_else(|| "-".into())
        ),
        Some(Err(e)) => println!("\nrecognised but not decodable: {}", e),
        None => println!("\nunknown card product"),
    }
    Ok(())
}
