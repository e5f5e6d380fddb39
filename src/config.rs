//! Configuration shared by every track in a session.

use std::str::FromStr;

/// The default genome build.
pub const DEFAULT_GENOME: &str = "hg38";

/// The default location of the static file server hosting the data.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// An error related to parsing a [`MethylationType`].
#[derive(Debug, Eq, PartialEq)]
pub struct ParseMethylationTypeError(String);

impl std::fmt::Display for ParseMethylationTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid methylation type `{}`: expected `count` or `model`",
            self.0
        )
    }
}

impl std::error::Error for ParseMethylationTypeError {}

/// The methylation calling approach whose bigWig files are displayed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MethylationType {
    /// Counts-based calls (`count`).
    #[default]
    Count,

    /// Model-based calls (`model`).
    Model,
}

impl std::fmt::Display for MethylationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MethylationType::Count => write!(f, "count"),
            MethylationType::Model => write!(f, "model"),
        }
    }
}

impl FromStr for MethylationType {
    type Err = ParseMethylationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "count" => Ok(Self::Count),
            "model" => Ok(Self::Model),
            v => Err(ParseMethylationTypeError(v.to_string())),
        }
    }
}

/// Session-wide configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The genome build (e.g., `hg38`).
    genome: String,

    /// The base URL that all data paths are appended to. Never ends with a
    /// slash.
    base_url: String,

    /// The methylation calling approach.
    methylation: MethylationType,

    /// Whether the haplotagged alignments are included. Only honored when
    /// viewing a single individual.
    alignments: bool,
}

impl Config {
    /// Sets the genome build.
    ///
    /// # Examples
    ///
    /// ```
    /// use igv_session::Config;
    ///
    /// let config = Config::default().with_genome("hg19");
    /// assert_eq!(config.genome(), "hg19");
    /// ```
    pub fn with_genome(mut self, genome: impl Into<String>) -> Self {
        self.genome = genome.into();
        self
    }

    /// Sets the base URL. Trailing slashes are removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use igv_session::Config;
    ///
    /// let config = Config::default().with_base_url("http://example.com:9000/");
    /// assert_eq!(config.base_url(), "http://example.com:9000");
    /// ```
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    /// Sets the methylation calling approach.
    pub fn with_methylation(mut self, methylation: MethylationType) -> Self {
        self.methylation = methylation;
        self
    }

    /// Sets whether the haplotagged alignments are included.
    pub fn with_alignments(mut self, alignments: bool) -> Self {
        self.alignments = alignments;
        self
    }

    /// Gets the genome build.
    pub fn genome(&self) -> &str {
        &self.genome
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Gets the methylation calling approach.
    pub fn methylation(&self) -> MethylationType {
        self.methylation
    }

    /// Gets whether the haplotagged alignments are included.
    pub fn alignments(&self) -> bool {
        self.alignments
    }

    /// Joins a path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            genome: DEFAULT_GENOME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            methylation: MethylationType::default(),
            alignments: true,
        }
    }
}
