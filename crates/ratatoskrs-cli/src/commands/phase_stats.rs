use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use ratatoskrs::io::{ReadIndex, load_phasing, open_fastq_reader};

pub fn run(reads_path: &Path, phase_paths: &[PathBuf]) -> Result<()> {
    let mut reader =
        open_fastq_reader(reads_path).map_err(|err| anyhow!("phase-stats failed: {err}"))?;
    let reads =
        ReadIndex::from_reads(&mut reader).map_err(|err| anyhow!("phase-stats failed: {err}"))?;

    let paths: Vec<&Path> = phase_paths.iter().map(PathBuf::as_path).collect();
    let (registry, summary) =
        load_phasing(&paths, &reads).map_err(|err| anyhow!("phase-stats failed: {err}"))?;

    println!("reads: {}", reads.len());
    println!("phased_records: {}", summary.phased);
    println!("unphased_records: {}", summary.unphased);
    println!("unknown_reads: {}", summary.unknown_reads);
    println!("haplotypes: {}", registry.haplotype_count());
    for hap in 0..registry.haplotype_count() as u32 {
        let nb = registry.phased_reads(hap).map_or(0, |set| set.len());
        println!("haplotype_{hap}: {nb}");
    }
    println!("unphased_reads: {}", registry.unphased_reads().len());
    Ok(())
}
