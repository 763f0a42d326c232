//! Logo background removal CLI
//!
//! Clears the border-connected background of a single image and writes it
//! out with transparency.

#[cfg(feature = "cli")]
use logo_bgremove::cli;

#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    cli::main()
}

#[cfg(not(feature = "cli"))]
fn main() {
    panic!("CLI feature not enabled. Please rebuild with --features cli");
}
