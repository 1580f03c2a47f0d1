//! FASTQ and phasing-file I/O.

mod phasing;

pub use phasing::{PhaseRecord, PhasingSummary, load_phasing, read_phasing};

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::{Error, Result};

/// A FASTQ record (raw bytes, no validation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub header: Vec<u8>,
    pub seq: Vec<u8>,
    pub plus: Vec<u8>,
    pub qual: Vec<u8>,
}

impl FastqRecord {
    /// Read name: first whitespace-delimited token of the header, without `@`.
    pub fn name(&self) -> &[u8] {
        read_name(&self.header)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(&self.header)?;
        out.write_all(b"\n")?;
        out.write_all(&self.seq)?;
        out.write_all(b"\n")?;
        out.write_all(&self.plus)?;
        out.write_all(b"\n")?;
        out.write_all(&self.qual)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

fn read_name(header: &[u8]) -> &[u8] {
    let header = header.strip_prefix(b"@").unwrap_or(header);
    let end = header
        .iter()
        .position(|b| b.is_ascii_whitespace())
        .unwrap_or(header.len());
    &header[..end]
}

/// Streaming source for FASTQ records.
pub trait ReadSource {
    fn next_record(&mut self) -> Option<Result<FastqRecord>>;
}

/// Open a plain or gzip-compressed (`.gz`) text file for buffered reading.
pub fn open_text(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|_| Error::MissingFile(path.to_path_buf()))?;
    let reader: Box<dyn BufRead> = if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(reader)
}

/// Open a FASTQ reader from a plain or gzip-compressed file.
pub fn open_fastq_reader(path: &Path) -> Result<FastqReader<Box<dyn BufRead>>> {
    Ok(FastqReader::new(open_text(path)?))
}

/// A buffered FASTQ reader.
pub struct FastqReader<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
        }
    }

    fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        while matches!(self.buf.last(), Some(b'\n' | b'\r')) {
            self.buf.pop();
        }
        Ok(Some(self.buf.clone()))
    }

    fn required_line(&mut self) -> Result<Vec<u8>> {
        self.read_line()?
            .ok_or_else(|| Error::InvalidFormat("truncated FASTQ".into()))
    }

    fn read_record(&mut self) -> Result<Option<FastqRecord>> {
        let header = loop {
            match self.read_line()? {
                Some(line) if line.is_empty() => continue,
                Some(line) => break line,
                None => return Ok(None),
            }
        };
        if !header.starts_with(b"@") {
            return Err(Error::InvalidFormat(format!(
                "FASTQ header must start with '@': {}",
                String::from_utf8_lossy(&header)
            )));
        }
        let seq = self.required_line()?;
        let plus = self.required_line()?;
        let qual = self.required_line()?;
        if qual.len() != seq.len() {
            return Err(Error::InvalidFormat(format!(
                "sequence and quality lengths differ for {}",
                String::from_utf8_lossy(read_name(&header))
            )));
        }
        Ok(Some(FastqRecord {
            header,
            seq,
            plus,
            qual,
        }))
    }
}

impl<R: BufRead> ReadSource for FastqReader<R> {
    fn next_record(&mut self) -> Option<Result<FastqRecord>> {
        self.read_record().transpose()
    }
}

/// Read names mapped to identifiers in file order.
#[derive(Debug, Clone, Default)]
pub struct ReadIndex {
    ids: HashMap<Vec<u8>, u32>,
}

impl ReadIndex {
    /// Index every record of `reader`; the n-th distinct name gets id n.
    pub fn from_reads<R: ReadSource>(reader: &mut R) -> Result<Self> {
        let mut index = Self::default();
        while let Some(record) = reader.next_record() {
            let record = record?;
            index.insert(record.name());
        }
        Ok(index)
    }

    /// Id of `name`, assigning the next one if it is new.
    pub fn insert(&mut self, name: &[u8]) -> u32 {
        let next = self.ids.len() as u32;
        *self.ids.entry(name.to_vec()).or_insert(next)
    }

    pub fn get(&self, name: &[u8]) -> Option<u32> {
        self.ids.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_single_record() {
        let data = b"@r1 extra\nACGT\n+\n!!!!\n";
        let mut reader = FastqReader::new(Cursor::new(data));
        let record = reader.next_record().unwrap().unwrap();
        assert_eq!(record.header, b"@r1 extra");
        assert_eq!(record.name(), b"r1");
        assert_eq!(record.seq, b"ACGT");
        assert_eq!(record.plus, b"+");
        assert_eq!(record.qual, b"!!!!");
        assert!(reader.next_record().is_none());
    }

    #[test]
    fn rejects_malformed_records() {
        let mut truncated = FastqReader::new(Cursor::new(b"@r1\nACGT\n+\n"));
        assert!(matches!(
            truncated.next_record(),
            Some(Err(Error::InvalidFormat(_)))
        ));

        let mut mismatched = FastqReader::new(Cursor::new(b"@r1\nACGT\n+\n!!\n"));
        assert!(matches!(
            mismatched.next_record(),
            Some(Err(Error::InvalidFormat(_)))
        ));

        let mut fasta = FastqReader::new(Cursor::new(b">r1\nACGT\n"));
        assert!(matches!(fasta.next_record(), Some(Err(Error::InvalidFormat(_)))));
    }

    #[test]
    fn skips_many_blank_lines() {
        let mut data = vec![b'\n'; 1_000_000];
        data.extend_from_slice(b"@r1\nACGT\n+\n!!!!\n\n\n");
        let mut reader = FastqReader::new(Cursor::new(data));
        let record = reader.next_record().unwrap().unwrap();
        assert_eq!(record.name(), b"r1");
        assert_eq!(record.seq, b"ACGT");
        assert!(reader.next_record().is_none());
    }

    #[test]
    fn write_round_trip() {
        let data = b"@r1\nACGT\n+\n!!!!\n@r2\nGG\n+\nII\n";
        let mut reader = FastqReader::new(Cursor::new(data));
        let mut out = Vec::new();
        while let Some(record) = reader.next_record() {
            record.unwrap().write_to(&mut out).unwrap();
        }
        assert_eq!(out, data);
    }

    #[test]
    fn read_index_in_file_order() {
        let data = b"@b\nA\n+\n!\n@a\nC\n+\n!\n@b\nG\n+\n!\n";
        let mut reader = FastqReader::new(Cursor::new(data));
        let index = ReadIndex::from_reads(&mut reader).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(b"b"), Some(0));
        assert_eq!(index.get(b"a"), Some(1));
        assert_eq!(index.get(b"c"), None);
    }

    #[test]
    fn open_fastq_reader_gz() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("reads.fq.gz");
        let mut encoder = flate2::write::GzEncoder::new(
            File::create(&path).expect("create gz"),
            flate2::Compression::default(),
        );
        encoder
            .write_all(b"@r1\nACGT\n+\n!!!!\n")
            .expect("write gz");
        encoder.finish().expect("finish gz");

        let mut reader = open_fastq_reader(&path).expect("open gz reader");
        let record = reader.next_record().unwrap().unwrap();
        assert_eq!(record.name(), b"r1");
        assert!(reader.next_record().is_none());
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.fq");
        assert!(matches!(open_fastq_reader(&path), Err(Error::MissingFile(_))));
    }
}
