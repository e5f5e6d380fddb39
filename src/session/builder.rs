//! A builder for a [`Session`].

use nonempty::NonEmpty;

use crate::Config;
use crate::Locus;
use crate::Sample;
use crate::Session;
use crate::session::Mode;
use crate::track::Factory;

/// An error that occurs when a required field was never provided to the
/// [`Builder`].
#[derive(Debug, Eq, PartialEq)]
pub enum MissingError {
    /// No locus was provided to the [`Builder`].
    Locus,

    /// No mode was provided to the [`Builder`].
    Mode,

    /// No samples were provided to the [`Builder`].
    Samples,
}

impl std::fmt::Display for MissingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingError::Locus => write!(f, "locus"),
            MissingError::Mode => write!(f, "mode"),
            MissingError::Samples => write!(f, "samples"),
        }
    }
}

impl std::error::Error for MissingError {}

/// An error that occurs when a singular field was provided multiple times to
/// the [`Builder`].
#[derive(Debug, Eq, PartialEq)]
pub enum MultipleError {
    /// The locus was provided multiple times to the [`Builder`].
    Locus,

    /// More than one sample was provided for a single individual session.
    Sample,
}

impl std::fmt::Display for MultipleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultipleError::Locus => write!(f, "locus"),
            MultipleError::Sample => write!(f, "sample (single individual mode)"),
        }
    }
}

impl std::error::Error for MultipleError {}

/// An error related to a [`Builder`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// An error where a required field was never provided to the [`Builder`].
    Missing(MissingError),

    /// An error where a singular field was provided to the [`Builder`] more
    /// than once.
    Multiple(MultipleError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Missing(err) => write!(f, "missing required field: {err}"),
            Error::Multiple(err) => write!(f, "singular field set multiple times: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`Session`].
#[derive(Debug, Default)]
pub struct Builder {
    /// The configuration.
    config: Config,

    /// The mode.
    mode: Option<Mode>,

    /// The locus.
    locus: Option<Locus>,

    /// The samples in the order they were pushed.
    samples: Option<NonEmpty<Sample>>,
}

impl Builder {
    /// Sets the configuration for the [`Builder`].
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets the mode for the [`Builder`].
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the locus for the [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use igv_session::session::Builder;
    ///
    /// let builder = Builder::default().locus("chr1:1-2".parse()?)?;
    /// assert!(builder.locus("chr1:1-2".parse()?).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn locus(mut self, locus: Locus) -> Result<Self> {
        if self.locus.is_some() {
            return Err(Error::Multiple(MultipleError::Locus));
        }

        self.locus = Some(locus);
        Ok(self)
    }

    /// Pushes a sample into the [`Builder`].
    ///
    /// Samples are displayed in the order they are pushed. Pushing the same
    /// sample twice displays its tracks twice.
    pub fn push_sample(mut self, sample: Sample) -> Self {
        let samples = match self.samples {
            Some(mut samples) => {
                samples.push(sample);
                samples
            }
            None => NonEmpty::new(sample),
        };

        self.samples = Some(samples);
        self
    }

    /// Pushes multiple samples into the [`Builder`].
    pub fn extend_samples(self, samples: impl IntoIterator<Item = Sample>) -> Self {
        samples.into_iter().fold(self, Builder::push_sample)
    }

    /// Consumes `self` to attempt to build a [`Session`].
    ///
    /// Tracks are ordered as follows:
    ///
    /// * For a single individual, the reference sequence and gene annotation
    ///   come first, followed by the individual's tracks.
    /// * For multiple individuals, the cohort variants come first, followed
    ///   by each individual's tracks in the order they were pushed, and
    ///   finally the reference sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use igv_session::Mode;
    /// use igv_session::session::Builder;
    ///
    /// let session = Builder::default()
    ///     .mode(Mode::Multiple)
    ///     .locus("chr14:100826000-100827000".parse()?)?
    ///     .push_sample("200081".parse()?)
    ///     .push_sample("200082".parse()?)
    ///     .try_build()?;
    ///
    /// assert_eq!(session.tracks().len(), 2 + 4 + 4 + 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<Session> {
        let mode = self.mode.ok_or(Error::Missing(MissingError::Mode))?;
        let locus = self.locus.ok_or(Error::Missing(MissingError::Locus))?;
        let samples = self.samples.ok_or(Error::Missing(MissingError::Samples))?;

        if mode == Mode::Single && samples.len() > 1 {
            return Err(Error::Multiple(MultipleError::Sample));
        }

        let factory = Factory::new(&self.config, mode);
        let mut tracks = Vec::new();

        match mode {
            Mode::Single => {
                tracks.push(factory.reference_sequence());
                tracks.push(factory.gene_annotation());

                for sample in samples.iter() {
                    tracks.extend(factory.sample_tracks(sample));
                }
            }
            Mode::Multiple => {
                tracks.extend(factory.variants());

                for sample in samples.iter() {
                    tracks.extend(factory.sample_tracks(sample));
                }

                tracks.push(factory.reference_sequence());
            }
        }

        Ok(Session {
            genome: self.config.genome().to_string(),
            locus,
            mode,
            tracks,
        })
    }
}
