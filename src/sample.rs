//! Sample identifiers.

use std::str::FromStr;

use nonempty::NonEmpty;

/// The delimiter between identifiers in a list of samples.
pub const LIST_DELIMITER: char = ',';

/// An error related to a [`Sample`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// An empty identifier. The position within the list is included when the
    /// identifier came from a list.
    Empty(Option<usize>),

    /// A list without any identifiers.
    EmptyList,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Empty(None) => write!(f, "sample identifier cannot be empty"),
            Error::Empty(Some(i)) => {
                write!(f, "sample identifier at position {} cannot be empty", i + 1)
            }
            Error::EmptyList => write!(f, "at least one sample must be provided"),
        }
    }
}

impl std::error::Error for Error {}

/// An opaque identifier for an individual.
///
/// The identifier is only ever substituted into file paths, so nothing is
/// checked beyond it being non-empty. Surrounding whitespace is removed.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Sample(String);

impl Sample {
    /// Attempts to create a new [`Sample`].
    ///
    /// # Examples
    ///
    /// ```
    /// use igv_session::Sample;
    ///
    /// let sample = Sample::try_new(" 200081 ")?;
    /// assert_eq!(sample.as_str(), "200081");
    ///
    /// assert!(Sample::try_new("  ").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(value: impl AsRef<str>) -> Result<Self, Error> {
        let value = value.as_ref().trim();

        if value.is_empty() {
            return Err(Error::Empty(None));
        }

        Ok(Self(value.to_string()))
    }

    /// Gets the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes `self` and returns the inner identifier.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Sample {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sample::try_new(s)
    }
}

/// Parses a comma-separated list of samples.
///
/// Every entry must be non-empty. Duplicates are kept in the order they were
/// given.
///
/// # Examples
///
/// ```
/// use igv_session::sample;
///
/// let samples = sample::parse_list("200081,200082, 200083")?;
/// let samples = samples.iter().map(|s| s.as_str()).collect::<Vec<_>>();
/// assert_eq!(samples, ["200081", "200082", "200083"]);
///
/// assert!(sample::parse_list("200081,,200083").is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_list(value: &str) -> Result<NonEmpty<Sample>, Error> {
    if value.trim().is_empty() {
        return Err(Error::EmptyList);
    }

    let samples = value
        .split(LIST_DELIMITER)
        .enumerate()
        .map(|(i, id)| Sample::try_new(id).map_err(|_| Error::Empty(Some(i))))
        .collect::<Result<Vec<_>, _>>()?;

    NonEmpty::from_vec(samples).ok_or(Error::EmptyList)
}
