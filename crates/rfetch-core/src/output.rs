//! Output destination resolution and buffered writing.
//!
//! The destination is resolved (fail-fast existence check) before the fetch,
//! but file creation is deferred until the body is in hand, so a failed fetch
//! leaves no empty file behind.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Errors from resolving or writing the output. Typed so callers can tell a
/// pre-existing file apart from a creation failure.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// A filesystem entry already exists at the requested path. Never
    /// overwritten, never merged.
    #[error("the file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    /// Creating the output file failed (permissions, missing parent, ...).
    #[error("failed to create output file {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing or flushing the body failed.
    #[error("failed to write output")]
    Write(#[from] io::Error),
}

/// Where the fetched body goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Resolves the `-o` value. Absent or empty means stdout; an existing
    /// entry at the path is a conflict; otherwise the path is recorded and
    /// created later by [`write_body`].
    ///
    /// The existence check is fail-fast only. A file appearing between this
    /// check and the write still fails (via `create_new`) rather than being
    /// overwritten.
    pub fn resolve(path: Option<&str>) -> Result<Self, OutputError> {
        match path {
            None | Some("") => Ok(Destination::Stdout),
            Some(p) => {
                let p = Path::new(p);
                if p.exists() {
                    return Err(OutputError::AlreadyExists(p.to_path_buf()));
                }
                Ok(Destination::File(p.to_path_buf()))
            }
        }
    }
}

/// Writes `body` plus a single trailing newline to `dest` through a
/// `BufWriter`, flushing on every exit path. The flush runs even when a
/// write fails.
pub fn write_body(dest: &Destination, body: &[u8]) -> Result<(), OutputError> {
    match dest {
        Destination::Stdout => {
            let stdout = io::stdout();
            let mut w = BufWriter::new(stdout.lock());
            write_contents(&mut w, body)?;
        }
        Destination::File(path) => {
            let file = File::options()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(|source| {
                    if source.kind() == io::ErrorKind::AlreadyExists {
                        OutputError::AlreadyExists(path.clone())
                    } else {
                        OutputError::Create {
                            path: path.clone(),
                            source,
                        }
                    }
                })?;
            let mut w = BufWriter::new(file);
            write_contents(&mut w, body)?;
        }
    }
    Ok(())
}

// Body then newline, then an unconditional flush (the write result is kept
// aside so a write failure cannot skip the flush).
fn write_contents<W: Write>(w: &mut W, body: &[u8]) -> io::Result<()> {
    let wrote = w.write_all(body).and_then(|()| w.write_all(b"\n"));
    let flushed = w.flush();
    wrote.and(flushed)
}
