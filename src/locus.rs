//! A genomic locus to display.
//!
//! Loci are provided in the form `<chromosome>:<start>-<end>` (e.g.,
//! `chr14:100826000-100827000`). The text is passed through to the viewer
//! untouched, so no coordinate system conversion happens here. The only
//! constraint is that the start does not exceed the end.

use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// The delimiter between the chromosome and the range.
pub const CHROMOSOME_DELIMITER: char = ':';

/// The delimiter between the start and the end of the range.
pub const RANGE_DELIMITER: char = '-';

/// The shape of a locus. The bounds are only checked for shape here; they are
/// parsed as numbers afterwards so that a more specific error can be reported.
static REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:\s]+):([^:\s-]+)-([^:\s-]+)$").unwrap());

/// An error related to parsing a [`Locus`].
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The value does not have the form `<chromosome>:<start>-<end>`.
    Malformed(String),

    /// An invalid start position.
    InvalidStart(ParseIntError),

    /// An invalid end position.
    InvalidEnd(ParseIntError),

    /// The start position is greater than the end position.
    StartGreaterThanEnd(u64, u64),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Malformed(value) => write!(
                f,
                "expected a locus of the form `<chromosome>:<start>-<end>`, found `{value}`"
            ),
            ParseError::InvalidStart(err) => write!(f, "invalid start position: {err}"),
            ParseError::InvalidEnd(err) => write!(f, "invalid end position: {err}"),
            ParseError::StartGreaterThanEnd(start, end) => write!(
                f,
                "start position ({start}) cannot be greater than the end position ({end})"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// A genomic locus made up of a chromosome and a range.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Locus {
    /// The chromosome name.
    chromosome: String,

    /// The start position.
    start: u64,

    /// The end position.
    end: u64,

    /// The text the locus was given as.
    text: String,
}

impl Locus {
    /// Attempts to create a new [`Locus`].
    ///
    /// # Examples
    ///
    /// ```
    /// use igv_session::Locus;
    ///
    /// let locus = Locus::try_new("chr14", 100826000, 100827000)?;
    /// assert_eq!(locus.to_string(), "chr14:100826000-100827000");
    ///
    /// assert!(Locus::try_new("chr14", 10, 1).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(chromosome: impl Into<String>, start: u64, end: u64) -> Result<Self, ParseError> {
        let chromosome = chromosome.into();

        if chromosome.is_empty()
            || chromosome.contains(CHROMOSOME_DELIMITER)
            || chromosome.contains(char::is_whitespace)
        {
            return Err(ParseError::Malformed(format!(
                "{chromosome}{CHROMOSOME_DELIMITER}{start}{RANGE_DELIMITER}{end}"
            )));
        }

        if start > end {
            return Err(ParseError::StartGreaterThanEnd(start, end));
        }

        let text = format!("{chromosome}{CHROMOSOME_DELIMITER}{start}{RANGE_DELIMITER}{end}");

        Ok(Self {
            chromosome,
            start,
            end,
            text,
        })
    }

    /// Gets the chromosome name.
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// Gets the start position.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Gets the end position.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Gets the locus as it was given.
    ///
    /// # Examples
    ///
    /// ```
    /// use igv_session::Locus;
    ///
    /// let locus = "chr1:005-10".parse::<Locus>()?;
    /// assert_eq!(locus.start(), 5);
    /// assert_eq!(locus.as_str(), "chr1:005-10");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Locus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Locus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups = REGEX
            .captures(s)
            .ok_or_else(|| ParseError::Malformed(s.to_string()))?;

        // SAFETY: all three groups are required by the expression, so they are
        // always present when the expression matches.
        let chromosome = groups.get(1).unwrap().as_str();
        let start = groups
            .get(2)
            .unwrap()
            .as_str()
            .parse::<u64>()
            .map_err(ParseError::InvalidStart)?;
        let end = groups
            .get(3)
            .unwrap()
            .as_str()
            .parse::<u64>()
            .map_err(ParseError::InvalidEnd)?;

        let mut locus = Locus::try_new(chromosome, start, end)?;
        locus.text = s.to_string();

        Ok(locus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() -> Result<(), Box<dyn std::error::Error>> {
        let locus = "chr14:100826000-100827000".parse::<Locus>()?;
        assert_eq!(locus.chromosome(), "chr14");
        assert_eq!(locus.start(), 100826000);
        assert_eq!(locus.end(), 100827000);
        assert_eq!(locus.to_string(), "chr14:100826000-100827000");

        let locus = "HLA-A*01:01:01:01:0-1".parse::<Locus>();
        assert!(locus.is_err());

        let locus = "chrUn_KI270742v1:0-0".parse::<Locus>()?;
        assert_eq!(locus.chromosome(), "chrUn_KI270742v1");
        assert_eq!(locus.start(), 0);
        assert_eq!(locus.end(), 0);

        Ok(())
    }

    #[test]
    fn text_is_kept() -> Result<(), Box<dyn std::error::Error>> {
        for value in ["chr1:005-10", "chr1:+5-10", "chr1:5-010"] {
            let locus = value.parse::<Locus>()?;
            assert_eq!(locus.start(), 5);
            assert_eq!(locus.end(), 10);
            assert_eq!(locus.to_string(), value);
        }

        assert_ne!(
            "chr1:005-10".parse::<Locus>()?,
            "chr1:5-10".parse::<Locus>()?
        );

        Ok(())
    }

    #[test]
    fn start_greater_than_end() {
        let err = "chr1:200-100".parse::<Locus>().unwrap_err();
        assert_eq!(err, ParseError::StartGreaterThanEnd(200, 100));
        assert_eq!(
            err.to_string(),
            "start position (200) cannot be greater than the end position (100)"
        );
    }

    #[test]
    fn non_numeric_bounds() {
        let err = "chr14:abc-200".parse::<Locus>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidStart(_)));
        assert_eq!(
            err.to_string(),
            "invalid start position: invalid digit found in string"
        );

        let err = "chr14:100-2x0".parse::<Locus>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidEnd(_)));
    }

    #[test]
    fn malformed() {
        for value in [
            "",
            "chr14",
            "chr14:100",
            ":100-200",
            "chr14:100-200-300",
            "chr14 :100-200",
            "chr14:-100-200",
        ] {
            let err = value.parse::<Locus>().unwrap_err();
            assert_eq!(err, ParseError::Malformed(value.to_string()), "{value}");
        }
    }

    #[test]
    fn try_new_rejects_bad_chromosome() {
        assert!(Locus::try_new("", 0, 1).is_err());
        assert!(Locus::try_new("chr 1", 0, 1).is_err());
        assert!(Locus::try_new("chr1:", 0, 1).is_err());
    }
}
