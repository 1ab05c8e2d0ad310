//! Fixture I/O - write and load per-operation data files
//!
//! One plain-text file per operation, fully overwritten on every run.
//! Writing is the generator's only side effect; loading exists for the
//! test harnesses that consume the files.

use crate::models::TestCase;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

// ============================================================
// Constants for file names
// ============================================================

pub const ADDITION_DATA: &str = "addition.data";
pub const SUBTRACTION_DATA: &str = "subtraction.data";
pub const MULTIPLICATION_DATA: &str = "multiplication.data";
pub const REMAINDER_DATA: &str = "remainder.data";
pub const DIVISION_DATA: &str = "division.data";

/// Path of an operation's data file inside `output_dir`.
pub fn data_path(output_dir: &Path, file_name: &str) -> PathBuf {
    output_dir.join(file_name)
}

// ============================================================
// Writing
// ============================================================

/// Write cases to `path`, one wire line each, truncating any previous file.
///
/// Returns the number of lines written.
pub fn write_cases(path: &Path, cases: impl Iterator<Item = TestCase>) -> Result<usize> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut count = 0usize;
    for case in cases {
        writeln!(writer, "{}", case.to_line())
            .with_context(|| format!("Failed to write case to {}", path.display()))?;
        count += 1;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    println!("Wrote {} cases to {}", count, path.display());
    Ok(count)
}

// ============================================================
// Loading
// ============================================================

/// Load a data file back into cases.
pub fn load_cases(path: &Path) -> Result<Vec<TestCase>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut cases = Vec::new();
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        let case = TestCase::parse_line(&line)
            .with_context(|| format!("Bad fixture at {}:{}", path.display(), line_num + 1))?;
        cases.push(case);
    }
    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Operation;
    use num_bigint::BigUint;

    fn sample_cases(n: u64) -> Vec<TestCase> {
        (1..=n)
            .map(|i| TestCase::new(Operation::Addition, BigUint::from(i), BigUint::from(i * 7)))
            .collect()
    }

    #[test]
    fn test_write_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = data_path(dir.path(), ADDITION_DATA);

        let cases = sample_cases(5);
        let written = write_cases(&path, cases.iter().cloned()).unwrap();
        assert_eq!(written, 5);

        let loaded = load_cases(&path).unwrap();
        assert_eq!(loaded, cases);
    }

    #[test]
    fn test_rerun_truncates_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = data_path(dir.path(), DIVISION_DATA);

        write_cases(&path, sample_cases(5).into_iter()).unwrap();
        write_cases(&path, sample_cases(2).into_iter()).unwrap();

        assert_eq!(load_cases(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_load_reports_line_number_on_bad_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(REMAINDER_DATA);
        std::fs::write(&path, "10\t20\t30\nnot-hex\t1\t1\n").unwrap();

        let err = load_cases(&path).unwrap_err();
        assert!(err.to_string().contains(":2"), "unexpected error: {err:#}");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_cases(&dir.path().join("absent.data")).is_err());
    }
}
