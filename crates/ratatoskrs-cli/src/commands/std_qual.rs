use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use anyhow::{Result, anyhow};
use ratatoskrs::io::{ReadSource, open_fastq_reader};
use ratatoskrs::quality::clamp_to_standard_range;

pub fn run(reads_path: &Path, out_path: &Path) -> Result<()> {
    let mut reader =
        open_fastq_reader(reads_path).map_err(|err| anyhow!("std-qual failed: {err}"))?;
    let mut out = BufWriter::new(File::create(out_path)?);

    let mut nb_reads = 0usize;
    let mut nb_clamped = 0usize;
    while let Some(record) = reader.next_record() {
        let mut record = record.map_err(|err| anyhow!("std-qual failed: {err}"))?;
        let before = record.qual.clone();
        clamp_to_standard_range(&mut record.qual);
        if record.qual != before {
            nb_clamped += 1;
        }
        record
            .write_to(&mut out)
            .map_err(|err| anyhow!("std-qual failed: {err}"))?;
        nb_reads += 1;
    }
    out.flush()?;
    tracing::info!(reads = nb_reads, clamped = nb_clamped, "std-qual done");
    Ok(())
}
