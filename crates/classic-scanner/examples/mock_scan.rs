//! Bluetooth Classic scan against the mock radio
//!
//! Run with: cargo run -p classic-scanner --example mock_scan --features std,tracing
//! Set `RUST_LOG=debug` for more output.

use classic_scanner::ClassicScanner;
use platform::config;
use platform::mocks::MockClassicBluetooth;
use platform::{BdAddr, ScanDuration};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let radio = MockClassicBluetooth::new()
        .with_device("Headset", "00:1a:7d:da:71:13".parse()?)
        .with_device("", "f4:5c:89:ab:01:22".parse()?)
        .with_device("Car Kit", BdAddr::new([0x48, 0x2C, 0xA0, 0x00, 0x9E, 0x7B]));

    let mut scanner = ClassicScanner::new(radio);
    scanner.try_begin(config::DEFAULT_DEVICE_NAME)?;

    let devices = scanner.try_scan_classic_devices(ScanDuration::new(5))?;
    println!("{} device(s):", devices.len());
    for device in &devices {
        println!("  {}  {}", device.address, device.name);
    }

    scanner.end();
    Ok(())
}
