use anyhow::Result;

pub fn run() -> Result<()> {
    println!("ratatoskrs {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
