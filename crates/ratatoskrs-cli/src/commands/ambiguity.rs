use anyhow::{Result, bail};
use ratatoskrs::ambiguity::decode_flags;
use ratatoskrs::util::to_upper_case;

pub fn run(symbols: &[String]) -> Result<()> {
    println!("symbol\tA\tC\tG\tT");
    let mut bytes: Vec<u8> = symbols.iter().flat_map(|s| s.bytes()).collect();
    to_upper_case(&mut bytes);
    for symbol in bytes {
        let Some(flags) = decode_flags(symbol) else {
            bail!("ambiguity failed: unknown symbol '{}'", symbol as char);
        };
        println!(
            "{}\t{}\t{}\t{}\t{}",
            symbol as char,
            flags.a as u8,
            flags.c as u8,
            flags.g as u8,
            flags.t as u8
        );
    }
    Ok(())
}
