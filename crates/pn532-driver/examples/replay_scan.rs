//! Run a complete tag scan against the scripted replay transport.
//!
//! Useful for watching the exchange sequence with logging enabled:
//!
//! ```text
//! RUST_LOG=trace cargo run --example replay_scan
//! ```

use pn532_driver::testing::{response_frame, ReplayTransport};
use pn532_driver::Pn532;
use pn532_protocol::{ACK_FRAME, STATUS_READY};

/// The five transactions of one command/response exchange.
fn exchange_script(response_payload: &[u8]) -> Vec<Vec<u8>> {
    vec![
        vec![],
        vec![0x00, STATUS_READY],
        ACK_FRAME.to_vec(),
        vec![0x00, STATUS_READY],
        response_frame(response_payload),
    ]
}

fn main() {
    env_logger::init();

    // SAMConfiguration answer, then a discovery answer reporting one
    // type-A target with NFCID 12 34 56 78.
    let mut script = exchange_script(&[0xD5, 0x15]);
    script.extend(exchange_script(&[
        0xD5, 0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, 0x04, 0x12, 0x34, 0x56, 0x78,
    ]));

    let mut reader = Pn532::new(ReplayTransport::new(script));
    reader.initialize();

    match reader.scan_for_card() {
        Ok(0) => println!("no card present"),
        Ok(id) => println!("card {:08X}", id),
        Err(error) => eprintln!("scan failed: {}", error),
    }
}
