//! `.fd` file format support
//!
//! An `.fd` file lists dependencies in the text notation, one or more per line
//! (separated by `;`). Blank lines and lines starting with `#` are ignored, and a
//! `.e` or `.end` line ends the input:
//!
//! ```text
//! # employee schema
//! emp -> dept, name
//! dept -> manager
//! .e
//! ```

mod error;

pub use error::{FdFileError, FdReadError, FdWriteError};

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::dependency::{DependencySet, FunctionalDependency};

/// Internal trait for types that can be read from and written to `.fd` files
pub(crate) trait FdSerialisable: Sized {
    /// The dependencies to write, in order
    fn fd_dependencies(&self) -> &[FunctionalDependency];

    /// Build an instance from the dependencies read from a file
    fn create_from_fd_parts(dependencies: Vec<FunctionalDependency>) -> Self;
}

impl FdSerialisable for DependencySet {
    fn fd_dependencies(&self) -> &[FunctionalDependency] {
        self.as_slice()
    }

    fn create_from_fd_parts(dependencies: Vec<FunctionalDependency>) -> Self {
        DependencySet::from_dependencies(dependencies)
    }
}

/// Trait for types that support `.fd` serialization (writing)
///
/// Automatically implemented for every type that can be read back with [`FdReader`].
pub trait FdWriter {
    /// Write in `.fd` format, one dependency per line followed by `.e`
    ///
    /// Both `to_fd_string` and `to_fd_file` delegate to this method.
    fn write_fd<W: Write>(&self, writer: &mut W) -> Result<(), FdWriteError>;

    /// Convert to an `.fd` format string
    ///
    /// # Examples
    ///
    /// ```
    /// use fd_cover::{DependencySet, FdWriter};
    ///
    /// let deps = DependencySet::parse("A,B->C; C->D").unwrap();
    /// assert_eq!(deps.to_fd_string().unwrap(), "A,B->C\nC->D\n.e\n");
    /// ```
    fn to_fd_string(&self) -> Result<String, FdWriteError> {
        let mut buffer = Vec::new();
        self.write_fd(&mut buffer)?;
        let text = String::from_utf8(buffer)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(text)
    }

    /// Write to an `.fd` file
    fn to_fd_file<P: AsRef<Path>>(&self, path: P) -> Result<(), FdWriteError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_fd(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<T: FdSerialisable> FdWriter for T {
    fn write_fd<W: Write>(&self, writer: &mut W) -> Result<(), FdWriteError> {
        write_dependencies(writer, self.fd_dependencies())?;
        writeln!(writer, ".e")?;
        Ok(())
    }
}

fn write_dependencies<W: Write>(
    writer: &mut W,
    dependencies: &[FunctionalDependency],
) -> io::Result<()> {
    for fd in dependencies {
        writeln!(writer, "{}", fd)?;
    }
    Ok(())
}

/// Write several covers to one `.fd` stream
///
/// Each cover is preceded by a `# cover N` comment (numbered from 1) and the
/// stream ends with a single `.e`. Reading the result back yields the union of
/// all covers.
///
/// # Examples
///
/// ```
/// use fd_cover::{write_covers, DependencySet};
///
/// let covers = vec![
///     DependencySet::parse("A->B; B->A; B->C").unwrap(),
///     DependencySet::parse("A->B; A->C; B->A").unwrap(),
/// ];
/// let mut out = Vec::new();
/// write_covers(&mut out, &covers).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("# cover 1\nA->B\n"));
/// assert!(text.contains("# cover 2\n"));
/// assert!(text.ends_with(".e\n"));
/// ```
pub fn write_covers<W: Write>(
    writer: &mut W,
    covers: &[DependencySet],
) -> Result<(), FdWriteError> {
    for (index, cover) in covers.iter().enumerate() {
        writeln!(writer, "# cover {}", index + 1)?;
        write_dependencies(writer, cover.as_slice())?;
    }
    writeln!(writer, ".e")?;
    Ok(())
}

/// Trait for types that support `.fd` deserialization (reading)
///
/// Automatically implemented for every type that can be written with [`FdWriter`].
pub trait FdReader: Sized {
    /// Parse from any `BufRead` implementation
    ///
    /// Both `from_fd_string` and `from_fd_file` delegate to this method.
    fn from_fd_reader<R: BufRead>(reader: R) -> Result<Self, FdReadError>;

    /// Parse from an `.fd` format string
    ///
    /// # Examples
    ///
    /// ```
    /// use fd_cover::{DependencySet, FdReader};
    ///
    /// let text = "# comment\nA,B->C\n\nC->D; D->E\n.e\nignored\n";
    /// let deps = DependencySet::from_fd_string(text).unwrap();
    /// assert_eq!(deps.len(), 3);
    /// ```
    fn from_fd_string(s: &str) -> Result<Self, FdReadError> {
        Self::from_fd_reader(io::Cursor::new(s.as_bytes()))
    }

    /// Load from an `.fd` file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fd_cover::{DependencySet, FdReader};
    ///
    /// let deps = DependencySet::from_fd_file("schema.fd").unwrap();
    /// println!("Loaded {} dependencies", deps.len());
    /// ```
    fn from_fd_file<P: AsRef<Path>>(path: P) -> Result<Self, FdReadError> {
        let file = File::open(path)?;
        Self::from_fd_reader(BufReader::new(file))
    }
}

impl<T: FdSerialisable> FdReader for T {
    fn from_fd_reader<R: BufRead>(reader: R) -> Result<Self, FdReadError> {
        let mut dependencies = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            let number = index + 1;

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('.') {
                match line.split_whitespace().next() {
                    Some(".e") | Some(".end") => break,
                    Some(directive) => {
                        return Err(FdFileError::UnknownDirective {
                            line: number,
                            directive: Arc::from(directive),
                        }
                        .into())
                    }
                    None => continue,
                }
            }

            let parsed = DependencySet::parse(line).map_err(|error| FdFileError::Syntax {
                line: number,
                error,
            })?;
            dependencies.extend(parsed);
        }

        debug!("read {} dependencies", dependencies.len());
        Ok(T::create_from_fd_parts(dependencies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_skips_comments_and_blank_lines() {
        let text = "\n# header\n  A -> B  \n\n# trailing\nB -> C\n";
        let deps = DependencySet::from_fd_string(text).unwrap();
        assert_eq!(deps, DependencySet::parse("A->B; B->C").unwrap());
    }

    #[test]
    fn test_read_stops_at_end_marker() {
        let text = "A->B\n.end\nnot a dependency\n";
        let deps = DependencySet::from_fd_string(text).unwrap();
        assert_eq!(deps.len(), 1);
    }

    #[test]
    fn test_read_reports_line_number() {
        let text = "A->B\n# fine\nA,B\n";
        match DependencySet::from_fd_string(text) {
            Err(FdReadError::Format(FdFileError::Syntax { line, .. })) => assert_eq!(line, 3),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_rejects_unknown_directive() {
        let text = ".i 3\nA->B\n";
        assert!(matches!(
            DependencySet::from_fd_string(text),
            Err(FdReadError::Format(FdFileError::UnknownDirective { line: 1, .. }))
        ));
    }

    #[test]
    fn test_write_then_read() {
        let deps = DependencySet::parse("A,B->C,D; \"first name\"->B").unwrap();
        let text = deps.to_fd_string().unwrap();
        assert_eq!(DependencySet::from_fd_string(&text).unwrap(), deps);
    }

    #[test]
    fn test_empty_set() {
        let deps = DependencySet::new();
        assert_eq!(deps.to_fd_string().unwrap(), ".e\n");
        assert!(DependencySet::from_fd_string("").unwrap().is_empty());
    }

    #[test]
    fn test_write_covers_union_reads_back() {
        let covers = vec![
            DependencySet::parse("A->B").unwrap(),
            DependencySet::parse("B->C").unwrap(),
        ];
        let mut out = Vec::new();
        write_covers(&mut out, &covers).unwrap();
        assert_eq!(
            String::from_utf8(out.clone()).unwrap(),
            "# cover 1\nA->B\n# cover 2\nB->C\n.e\n"
        );
        let back = DependencySet::from_fd_string(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(back, DependencySet::parse("A->B; B->C").unwrap());
    }
}
