use crate::domain::model::LinePair;
use crate::utils::error::{MergeError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines};
use std::path::{Path, PathBuf};

/// Produces aligned line pairs from the two input files.
///
/// The reader is restartable: `ensure_aligned` and `pairs` each open the
/// files afresh, and the handles are dropped (and so closed) on every exit
/// path, including early returns on error.
#[derive(Debug)]
pub struct PairReader {
    st_path: PathBuf,
    tt_path: PathBuf,
}

impl PairReader {
    /// Checks that both inputs exist before anything is written.
    pub fn open(st_path: impl Into<PathBuf>, tt_path: impl Into<PathBuf>) -> Result<Self> {
        let st_path = st_path.into();
        let tt_path = tt_path.into();

        for path in [&st_path, &tt_path] {
            if !path.is_file() {
                return Err(MergeError::InputNotFound {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(Self { st_path, tt_path })
    }

    /// Counts lines in both files and fails with `MisalignedInput` when the
    /// counts differ. Counting is byte-wise, so it runs before any UTF-8
    /// decoding and before any output file is created.
    pub fn ensure_aligned(&self) -> Result<usize> {
        let st_lines = count_lines(&self.st_path)?;
        let tt_lines = count_lines(&self.tt_path)?;

        if st_lines != tt_lines {
            return Err(MergeError::MisalignedInput {
                st_path: self.st_path.display().to_string(),
                st_lines,
                tt_path: self.tt_path.display().to_string(),
                tt_lines,
            });
        }

        Ok(st_lines)
    }

    pub fn pairs(&self) -> Result<PairIter> {
        Ok(PairIter {
            st: open_lines(&self.st_path)?,
            st_path: self.st_path.display().to_string(),
            tt: open_lines(&self.tt_path)?,
            tt_path: self.tt_path.display().to_string(),
            index: 0,
        })
    }
}

fn open_lines(path: &Path) -> Result<Lines<BufReader<File>>> {
    let file = File::open(path).map_err(|e| map_open_error(path, e))?;
    Ok(BufReader::new(file).lines())
}

fn map_open_error(path: &Path, err: std::io::Error) -> MergeError {
    if err.kind() == ErrorKind::NotFound {
        MergeError::InputNotFound {
            path: path.display().to_string(),
        }
    } else {
        MergeError::IoError(err)
    }
}

fn count_lines(path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|e| map_open_error(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        count += 1;
    }

    Ok(count)
}

/// Lazy iterator over aligned pairs. Lines are whitespace-trimmed; `index`
/// is 1-based. Alignment is checked up front by `ensure_aligned`, so a
/// leftover tail on either side simply ends the stream.
pub struct PairIter {
    st: Lines<BufReader<File>>,
    st_path: String,
    tt: Lines<BufReader<File>>,
    tt_path: String,
    index: usize,
}

impl Iterator for PairIter {
    type Item = Result<LinePair>;

    fn next(&mut self) -> Option<Self::Item> {
        let (st, tt) = match (self.st.next(), self.tt.next()) {
            (Some(st), Some(tt)) => (st, tt),
            _ => return None,
        };
        self.index += 1;

        let source = match st {
            Ok(line) => line,
            Err(e) => return Some(Err(decode_error(&self.st_path, self.index, e))),
        };
        let target = match tt {
            Ok(line) => line,
            Err(e) => return Some(Err(decode_error(&self.tt_path, self.index, e))),
        };

        Some(Ok(LinePair {
            index: self.index,
            source: source.trim().to_string(),
            target: target.trim().to_string(),
        }))
    }
}

fn decode_error(path: &str, line: usize, err: std::io::Error) -> MergeError {
    if err.kind() == ErrorKind::InvalidData {
        MergeError::EncodingError {
            path: path.to_string(),
            line,
        }
    } else {
        MergeError::IoError(err)
    }
}
