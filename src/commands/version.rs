use anyhow::Result;
use std::io::Write;

pub fn execute(_argv: &[String], out: &mut dyn Write) -> Result<()> {
    writeln!(out, "talka version {}", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
