//! Where sessions are written and how.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;

use crate::Locus;
use crate::Sample;
use crate::Session;
use crate::session::xml;

/// The directory all sessions are written to.
pub const SESSIONS_DIR: &str = "igv-sessions";

/// The file name used for multiple individuals when none is given.
pub const DEFAULT_MULTIPLE_FILE_NAME: &str = "multi_sample_session.xml";

/// An error related to writing a session (an I/O error).
#[derive(Debug)]
pub enum Error {
    /// The session could not be rendered.
    Render(xml::Error),

    /// The output directory could not be created.
    CreateDirectory(PathBuf, io::Error),

    /// The session could not be written.
    Write(PathBuf, io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Render(err) => write!(f, "render error: {err}"),
            Error::CreateDirectory(path, err) => {
                write!(f, "could not create directory `{}`: {err}", path.display())
            }
            Error::Write(path, err) => write!(f, "could not write `{}`: {err}", path.display()),
        }
    }
}

impl std::error::Error for Error {}

/// Gets the directory all sessions are written to.
pub fn sessions_dir() -> PathBuf {
    PathBuf::from(SESSIONS_DIR)
}

/// Gets the file name for a single individual viewed at a locus.
///
/// # Examples
///
/// ```
/// use igv_session::output;
///
/// let name = output::single_file_name(&"200081".parse()?, &"chr1:1-2".parse()?);
/// assert_eq!(name, "200081.chr1:1-2.xml");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn single_file_name(sample: &Sample, locus: &Locus) -> String {
    format!("{sample}.{locus}.xml")
}

/// Writes a session document verbatim to `path`.
///
/// The parent directory is created if it does not already exist. An existing
/// file is overwritten.
pub fn write(path: &Path, contents: &str) -> Result<(), Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| Error::CreateDirectory(parent.to_path_buf(), err))?;
    }

    debug!("writing {} bytes to {}", contents.len(), path.display());
    fs::write(path, contents).map_err(|err| Error::Write(path.to_path_buf(), err))
}

/// Renders a session and writes it to `path`.
pub fn write_session(path: &Path, session: &Session) -> Result<(), Error> {
    let contents = session.to_xml().map_err(Error::Render)?;
    write(path, &contents)
}
