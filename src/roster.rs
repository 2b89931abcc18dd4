//! # Roster I/O
//!
//! Reads student records from a comma-delimited roster and writes the final
//! groups back out. The format is plain `split(',')` with no quoting: fields
//! must not contain commas.
//!
//! Roster layout (first line is a header and is ignored):
//!
//! ```text
//! Tutorial Group,Student ID,School,Name,Gender,CGPA
//! G-1,5002,CCDS,Aarav Singh,Male,4.02
//! ```
//!
//! Output layout:
//!
//! ```text
//! Group Number,Tutorial Group,Student ID,School,Name,Gender,CGPA
//! 1,G-1,5002,CCDS,Aarav Singh,Male,4.02
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{GroupingError, Result, ResultExt};
use crate::group::Group;
use crate::student::{Gender, Student};

/// Header written at the top of a fresh output file.
pub const OUTPUT_HEADER: &str = "Group Number,Tutorial Group,Student ID,School,Name,Gender,CGPA";

const ROSTER_FIELDS: usize = 6;
const OUTPUT_FIELDS: usize = ROSTER_FIELDS + 1;

/// How [`save_groups`] treats an existing output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate and write a fresh header.
    #[default]
    Overwrite,
    /// Append rows; the header is only written when the file does not exist yet.
    Append,
}

fn parse_student(fields: &[&str], line: usize) -> Result<Student> {
    let gender: Gender = fields[4].parse().map_err(|e: GroupingError| GroupingError::Parse {
        line,
        message: e.to_string(),
    })?;

    let cgpa: f64 = fields[5].trim().parse().map_err(|e| GroupingError::Parse {
        line,
        message: format!("invalid CGPA '{}': {}", fields[5], e),
    })?;
    if !cgpa.is_finite() {
        return Err(GroupingError::Parse {
            line,
            message: format!("CGPA must be a finite number, got '{}'", fields[5]),
        });
    }

    Ok(Student::new(fields[0], fields[1], fields[2], fields[3], gender, cgpa))
}

/// Parses a roster. Rows without exactly six fields are skipped with a
/// warning; an unparsable gender or CGPA aborts with a `Parse` error.
pub fn parse_students<R: BufRead>(reader: R) -> Result<Vec<Student>> {
    let mut students = Vec::new();
    let mut skipped = 0usize;

    // Line 1 is the header
    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').collect();
        if fields.len() != ROSTER_FIELDS {
            warn!(
                line = line_no,
                fields = fields.len(),
                "Skipping roster row with wrong field count"
            );
            skipped += 1;
            continue;
        }

        students.push(parse_student(&fields, line_no)?);
    }

    debug!(students = students.len(), skipped, "Roster parsed");
    Ok(students)
}

/// Loads and parses the roster at `path`.
pub fn load_students(path: impl AsRef<Path>) -> Result<Vec<Student>> {
    let path = path.as_ref();
    let file = File::open(path).context(format!("Failed to open roster {}", path.display()))?;
    parse_students(BufReader::new(file))
}

/// Writes one row per student, numbering groups from 1 across the whole slice.
///
/// CGPA is written in its shortest round-trip form with a decimal point kept
/// for whole numbers (`4.0`, not `4`).
pub fn write_groups<W: Write>(mut writer: W, groups: &[Group], header: bool) -> Result<()> {
    if header {
        writeln!(writer, "{}", OUTPUT_HEADER)?;
    }

    for (number, group) in groups.iter().enumerate() {
        for s in group {
            writeln!(
                writer,
                "{},{},{},{},{},{},{:?}",
                number + 1,
                s.cohort,
                s.id,
                s.school,
                s.name,
                s.gender,
                s.cgpa
            )?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Writes `groups` to `path` according to `mode`.
pub fn save_groups(path: impl AsRef<Path>, groups: &[Group], mode: WriteMode) -> Result<()> {
    let path = path.as_ref();
    let (file, header) = match mode {
        WriteMode::Overwrite => (File::create(path)?, true),
        WriteMode::Append => {
            let exists = path.is_file();
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (file, !exists)
        }
    };

    write_groups(BufWriter::new(file), groups, header)?;
    debug!(path = %path.display(), groups = groups.len(), ?mode, "Groups saved");
    Ok(())
}

/// Parses an output file back into `(group_number, student)` rows.
///
/// Rows without exactly seven fields are skipped with a warning, like the
/// roster parser does.
pub fn read_group_rows<R: BufRead>(reader: R) -> Result<Vec<(usize, Student)>> {
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').collect();
        if fields.len() != OUTPUT_FIELDS {
            warn!(
                line = line_no,
                fields = fields.len(),
                "Skipping group row with wrong field count"
            );
            continue;
        }

        let number: usize = fields[0].trim().parse().map_err(|e| GroupingError::Parse {
            line: line_no,
            message: format!("invalid group number '{}': {}", fields[0], e),
        })?;
        rows.push((number, parse_student(&fields[1..], line_no)?));
    }

    Ok(rows)
}

/// Loads the output file at `path`, see [`read_group_rows`].
pub fn load_group_rows(path: impl AsRef<Path>) -> Result<Vec<(usize, Student)>> {
    let path = path.as_ref();
    let file = File::open(path).context(format!("Failed to open groups {}", path.display()))?;
    read_group_rows(BufReader::new(file))
}
