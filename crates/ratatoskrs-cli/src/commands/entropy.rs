use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use ratatoskrs::complexity::{SearchBound, entropy};
use ratatoskrs::io::{ReadSource, open_fastq_reader};
use ratatoskrs::options::CorrectionOptions;

pub struct EntropyArgs {
    pub reads: PathBuf,
    pub out: Option<PathBuf>,
    pub window: Option<usize>,
    pub k: usize,
    pub max_len_path: usize,
}

pub fn run(args: EntropyArgs) -> Result<()> {
    let options = CorrectionOptions {
        k: args.k,
        small_k: args.k.min(CorrectionOptions::default().small_k),
        max_len_weak_region: args.max_len_path,
        ..Default::default()
    };
    options
        .validate()
        .map_err(|err| anyhow!("entropy failed: {err}"))?;

    let mut reader =
        open_fastq_reader(&args.reads).map_err(|err| anyhow!("entropy failed: {err}"))?;
    let mut out: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    writeln!(out, "read\tstart\tlength\tentropy\tmax_paths\tmax_branch")?;
    let mut nb_reads = 0usize;
    while let Some(record) = reader.next_record() {
        let record = record.map_err(|err| anyhow!("entropy failed: {err}"))?;
        let name = String::from_utf8_lossy(record.name()).into_owned();
        let window = args.window.unwrap_or(record.seq.len()).max(1);
        for (i, chunk) in record.seq.chunks(window).enumerate() {
            let h = entropy(chunk);
            let bound = SearchBound::new(h, options.max_len_weak_region, options.k);
            writeln!(
                out,
                "{}\t{}\t{}\t{:.4}\t{}\t{}",
                name,
                i * window,
                chunk.len(),
                h,
                bound.max_paths,
                bound.max_branch
            )?;
        }
        nb_reads += 1;
    }
    out.flush()?;
    tracing::info!(reads = nb_reads, "entropy done");
    Ok(())
}
