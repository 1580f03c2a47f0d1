use std::io::BufRead;
use std::path::Path;

use super::{ReadIndex, open_text};
use crate::phase::{HaplotypeRegistry, HaplotypeRegistryBuilder};
use crate::{Error, Result};

/// One line of a haplotag list: `read<TAB>haplotype<TAB>phase block[...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseRecord {
    pub read_name: Vec<u8>,
    /// `None` when the read was not assigned to a haplotype.
    pub phase: Option<(String, String)>,
}

/// What happened to the records of one phasing input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhasingSummary {
    pub phased: usize,
    pub unphased: usize,
    pub unknown_reads: usize,
}

/// Parse phasing records from `reader`.
pub fn read_phasing<R: BufRead>(reader: R) -> Result<Vec<PhaseRecord>> {
    let mut records = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let read_name = fields.next().unwrap_or_default();
        if read_name.is_empty() {
            return Err(Error::InvalidFormat(format!(
                "missing read name at line {}",
                line_no + 1
            )));
        }
        let hap_type = fields.next().unwrap_or_default().trim();
        let block = fields.next().unwrap_or_default().trim();

        let unphased = matches!(hap_type, "" | "." | "none" | "None" | "NONE");
        let phase = if unphased {
            None
        } else {
            if block.is_empty() {
                return Err(Error::InvalidFormat(format!(
                    "missing phase block at line {}",
                    line_no + 1
                )));
            }
            Some((block.to_string(), hap_type.to_string()))
        };
        records.push(PhaseRecord {
            read_name: read_name.as_bytes().to_vec(),
            phase,
        });
    }
    Ok(records)
}

/// Load one or more phasing files into a registry, resolving read names
/// through `reads`. Records for reads missing from `reads` are skipped.
pub fn load_phasing(paths: &[&Path], reads: &ReadIndex) -> Result<(HaplotypeRegistry, PhasingSummary)> {
    let mut builder = HaplotypeRegistryBuilder::new();
    let mut summary = PhasingSummary::default();

    for path in paths {
        let records = read_phasing(open_text(path)?)?;
        for record in records {
            let Some(read) = reads.get(&record.read_name) else {
                summary.unknown_reads += 1;
                continue;
            };
            match &record.phase {
                Some((block, hap_type)) => {
                    builder.add_phased(read, block, hap_type);
                    summary.phased += 1;
                }
                None => {
                    builder.add_unphased(read);
                    summary.unphased += 1;
                }
            }
        }
    }

    if summary.unknown_reads > 0 {
        tracing::warn!(
            unknown_reads = summary.unknown_reads,
            "phasing records refer to reads absent from the input"
        );
    }
    tracing::info!(
        files = paths.len(),
        phased = summary.phased,
        unphased = summary.unphased,
        "loaded phasing"
    );

    Ok((builder.build(), summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn parses_haplotag_list() {
        let data = "#readname\thaplotype\tphaseset\tchromosome\n\
                    r1\tH1\t1200\tchr1\n\
                    r2\tnone\tnone\tchr1\n\
                    \n\
                    r3\tH2\t1200\n";
        let records = read_phasing(Cursor::new(data)).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].read_name, b"r1");
        assert_eq!(
            records[0].phase,
            Some(("1200".to_string(), "H1".to_string()))
        );
        assert_eq!(records[1].phase, None);
        assert_eq!(
            records[2].phase,
            Some(("1200".to_string(), "H2".to_string()))
        );
    }

    #[test]
    fn missing_block_is_an_error() {
        let err = read_phasing(Cursor::new("r1\tH1\n")).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(msg) if msg.contains("line 1")));
    }

    #[test]
    fn load_builds_registry() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "r1\tH1\tps1").unwrap();
        writeln!(tmp, "r2\tH2\tps1").unwrap();
        writeln!(tmp, "r3\tnone\tnone").unwrap();
        writeln!(tmp, "ghost\tH1\tps1").unwrap();

        let mut reads = ReadIndex::default();
        for name in [&b"r1"[..], b"r2", b"r3"] {
            reads.insert(name);
        }

        let (registry, summary) = load_phasing(&[tmp.path()], &reads).unwrap();
        assert_eq!(
            summary,
            PhasingSummary {
                phased: 2,
                unphased: 1,
                unknown_reads: 1
            }
        );
        assert_eq!(registry.haplotype_count(), 2);
        assert_eq!(registry.haplotype_of(0), registry.haplotype_id("ps1", "H1"));
        assert_eq!(registry.unphased_reads().to_vec(), vec![2]);
    }
}
