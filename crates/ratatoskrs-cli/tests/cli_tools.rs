use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const READS: &str = "@r1 sample\nAAAAAAAAAA\n+\n\x1f!5IJJJJJJ\n@r2\nACGTACGTAC\n+\nIIIIIIIIII\n@r3\nGGGG\n+\n!!!!\n";

fn cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ratatoskrs-cli"))
        .args(args)
        .output()
        .expect("run ratatoskrs-cli")
}

fn write_reads(dir: &Path) -> String {
    let path = dir.join("reads.fq");
    fs::write(&path, READS).expect("write reads");
    path.to_string_lossy().into_owned()
}

#[test]
fn std_qual_clamps_qualities() {
    let dir = TempDir::new().expect("tempdir");
    let reads = write_reads(dir.path());
    let out = dir.path().join("out.fq");

    let output = cli(&["std-qual", "--reads", &reads, "--out", out.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let text = fs::read_to_string(&out).expect("read output");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "@r1 sample");
    assert_eq!(lines[3], "!!5IIIIIII");
    assert_eq!(lines[7], "IIIIIIIIII");
}

#[test]
fn entropy_reports_windows() {
    let dir = TempDir::new().expect("tempdir");
    let reads = write_reads(dir.path());

    let output = cli(&["entropy", "--reads", &reads, "--window", "4", "-k", "31"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let rows: Vec<Vec<&str>> = stdout.lines().skip(1).map(|l| l.split('\t').collect()).collect();
    // 3 + 3 + 1 windows
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0][..4], ["r1", "0", "4", "0.0000"]);
    assert_eq!(rows[3][..4], ["r2", "0", "4", "2.0000"]);
    assert_eq!(rows[5][..3], ["r2", "8", "2"]);
}

#[test]
fn phase_stats_counts_haplotypes() {
    let dir = TempDir::new().expect("tempdir");
    let reads = write_reads(dir.path());
    let phase = dir.path().join("haplotag.tsv");
    fs::write(&phase, "r1\tH1\t100\tchr1\nr2\tH2\t100\tchr1\nr3\tnone\tnone\tchr1\n")
        .expect("write phasing");

    let output = cli(&["phase-stats", "--reads", &reads, "--phase", phase.to_str().unwrap()]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("reads: 3"));
    assert!(stdout.contains("haplotypes: 2"));
    assert!(stdout.contains("haplotype_0: 1"));
    assert!(stdout.contains("unphased_reads: 1"));
}

#[test]
fn ambiguity_rejects_unknown_symbols() {
    let output = cli(&["ambiguity", "rN"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.contains("R\t1\t0\t1\t0"));
    assert!(stdout.contains("N\t1\t1\t1\t1"));

    let output = cli(&["ambiguity", "X"]);
    assert!(!output.status.success());
}
