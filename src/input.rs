//! Resolving command line input into a normalized request.
//!
//! Everything here is validation: nothing touches the filesystem. Any error
//! from this module means the input was invalid and no session should be
//! written.

use std::path::PathBuf;

use nonempty::NonEmpty;

use crate::Config;
use crate::Locus;
use crate::Sample;
use crate::Session;
use crate::locus;
use crate::output;
use crate::sample;
use crate::session;
use crate::session::Mode;

/// An error related to resolving input (a validation error).
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// An invalid locus.
    InvalidLocus(locus::ParseError),

    /// An invalid sample or list of samples.
    InvalidSample(sample::Error),

    /// An empty output file name.
    EmptyOutput,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLocus(err) => write!(f, "invalid locus: {err}"),
            Error::InvalidSample(err) => write!(f, "invalid sample: {err}"),
            Error::EmptyOutput => write!(f, "output file name cannot be empty"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A validated request for a session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    /// The mode.
    mode: Mode,

    /// The initial locus.
    locus: Locus,

    /// The samples in the order they were given.
    samples: NonEmpty<Sample>,

    /// Where the session will be written.
    output: PathBuf,
}

impl Request {
    /// Resolves a request for a single individual.
    ///
    /// The session is written to `igv-sessions/{individual}.{locus}.xml`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    ///
    /// use igv_session::input::Request;
    ///
    /// let request = Request::single("200081", "chr14:100826000-100827000")?;
    /// assert_eq!(
    ///     request.output(),
    ///     Path::new("igv-sessions/200081.chr14:100826000-100827000.xml")
    /// );
    ///
    /// assert!(Request::single("200081", "chr14:abc-200").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn single(individual: &str, locus: &str) -> Result<Self> {
        let locus = locus.parse::<Locus>().map_err(Error::InvalidLocus)?;
        let sample = Sample::try_new(individual).map_err(Error::InvalidSample)?;
        let output = output::sessions_dir().join(output::single_file_name(&sample, &locus));

        Ok(Self {
            mode: Mode::Single,
            locus,
            samples: NonEmpty::new(sample),
            output,
        })
    }

    /// Resolves a request for multiple individuals.
    ///
    /// `samples` is a comma-separated list of identifiers. The session is
    /// written to `igv-sessions/{out}`, where `out` defaults to
    /// `multi_sample_session.xml`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    ///
    /// use igv_session::input::Request;
    ///
    /// let request = Request::multiple(
    ///     "200081,200082,200083",
    ///     "chr14:100826000-100827000",
    ///     Some("trio_session.xml"),
    /// )?;
    ///
    /// assert_eq!(request.samples().len(), 3);
    /// assert_eq!(request.output(), Path::new("igv-sessions/trio_session.xml"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn multiple(samples: &str, locus: &str, out: Option<&str>) -> Result<Self> {
        let locus = locus.parse::<Locus>().map_err(Error::InvalidLocus)?;
        let samples = sample::parse_list(samples).map_err(Error::InvalidSample)?;

        let name = match out {
            Some(name) if name.trim().is_empty() => return Err(Error::EmptyOutput),
            Some(name) => name,
            None => output::DEFAULT_MULTIPLE_FILE_NAME,
        };

        Ok(Self {
            mode: Mode::Multiple,
            locus,
            samples,
            output: output::sessions_dir().join(name),
        })
    }

    /// Gets the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Gets the initial locus.
    pub fn locus(&self) -> &Locus {
        &self.locus
    }

    /// Gets the samples in the order they were given.
    pub fn samples(&self) -> &NonEmpty<Sample> {
        &self.samples
    }

    /// Gets the output path.
    pub fn output(&self) -> &std::path::Path {
        &self.output
    }

    /// Builds the session described by the request.
    pub fn session(&self, config: Config) -> std::result::Result<Session, session::builder::Error> {
        session::Builder::default()
            .config(config)
            .mode(self.mode)
            .locus(self.locus.clone())?
            .extend_samples(self.samples.iter().cloned())
            .try_build()
    }
}
