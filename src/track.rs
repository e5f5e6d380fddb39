//! Tracks within a session.
//!
//! A [`Track`] is one named, typed layer in the viewer that is backed by (at
//! most) one external resource. Tracks never touch the resource they point
//! at: the identifier is just a URL that the viewer resolves later.

pub mod factory;

pub use factory::Factory;

use crate::Sample;

/// The kind of a track.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// A continuous signal (bigWig).
    Signal,

    /// A set of intervals (bgzipped BED).
    Intervals,

    /// Read alignments (BAM).
    Alignment,

    /// Variant calls (bgzipped VCF).
    Variants,

    /// The reference sequence that ships with the genome.
    Sequence,

    /// A gene annotation that the viewer fetches on its own.
    Annotation,
}

impl Kind {
    /// Gets the resource type understood by the viewer.
    ///
    /// [`None`] is returned for tracks that are not backed by a resource
    /// listed within the session.
    ///
    /// # Examples
    ///
    /// ```
    /// use igv_session::track::Kind;
    ///
    /// assert_eq!(Kind::Signal.resource_type(), Some("bw"));
    /// assert_eq!(Kind::Sequence.resource_type(), None);
    /// ```
    pub fn resource_type(&self) -> Option<&'static str> {
        match self {
            Kind::Signal => Some("bw"),
            Kind::Intervals => Some("bed"),
            Kind::Alignment => Some("bam"),
            Kind::Variants => Some("vcf"),
            Kind::Sequence | Kind::Annotation => None,
        }
    }
}

/// The parental haplotype a track was phased to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Parent {
    /// The paternal haplotype.
    Paternal,

    /// The maternal haplotype.
    Maternal,
}

impl Parent {
    /// Both haplotypes in display order.
    pub const ALL: [Parent; 2] = [Parent::Paternal, Parent::Maternal];

    /// Gets the short, lowercase name (`pat` or `mat`).
    pub fn short_name(&self) -> &'static str {
        match self {
            Parent::Paternal => "pat",
            Parent::Maternal => "mat",
        }
    }

    /// Gets the long, lowercase name (`paternal` or `maternal`).
    pub fn long_name(&self) -> &'static str {
        match self {
            Parent::Paternal => "paternal",
            Parent::Maternal => "maternal",
        }
    }

    /// Gets the label shown in track names (`PAT` or `MAT`).
    pub fn label(&self) -> &'static str {
        match self {
            Parent::Paternal => "PAT",
            Parent::Maternal => "MAT",
        }
    }
}

impl std::fmt::Display for Parent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

/// The option used to group alignments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GroupBy {
    /// Group by the `HP` phasing tag.
    Phase,
}

impl std::fmt::Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupBy::Phase => write!(f, "PHASE"),
        }
    }
}

/// The display mode of a track.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DisplayMode {
    /// Features are collapsed onto a single row.
    Collapsed,

    /// Every feature is shown on its own row.
    Full,
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayMode::Collapsed => write!(f, "COLLAPSED"),
            DisplayMode::Full => write!(f, "FULL"),
        }
    }
}

/// Optional rendering hints for a track.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Hints {
    /// The color as an `r,g,b` triple.
    color: Option<String>,

    /// How records are grouped.
    group_by: Option<GroupBy>,

    /// How records are laid out.
    display_mode: Option<DisplayMode>,
}

impl Hints {
    /// Sets the color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the grouping option.
    pub fn with_group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = Some(group_by);
        self
    }

    /// Sets the display mode.
    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = Some(display_mode);
        self
    }

    /// Gets the color.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Gets the grouping option.
    pub fn group_by(&self) -> Option<GroupBy> {
        self.group_by
    }

    /// Gets the display mode.
    pub fn display_mode(&self) -> Option<DisplayMode> {
        self.display_mode
    }
}

/// A track within a session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Track {
    /// The kind of track.
    kind: Kind,

    /// The displayed name.
    name: String,

    /// The key used to match sample attributes to the track.
    attribute_key: Option<String>,

    /// The identifier. For resource-backed tracks, this is the URL.
    id: String,

    /// The URL of the index for the resource, if one is needed.
    index: Option<String>,

    /// The sample the track belongs to.
    sample: Option<Sample>,

    /// The haplotype the track was phased to.
    parent: Option<Parent>,

    /// Rendering hints.
    hints: Hints,
}

impl Track {
    /// Creates a new [`Track`].
    ///
    /// # Examples
    ///
    /// ```
    /// use igv_session::track::Kind;
    /// use igv_session::track::Track;
    ///
    /// let track = Track::new(Kind::Intervals, "blocks", "http://localhost:8080/a.bed.gz")
    ///     .with_index("http://localhost:8080/a.bed.gz.tbi");
    ///
    /// assert_eq!(track.url(), Some("http://localhost:8080/a.bed.gz"));
    /// assert_eq!(track.index(), Some("http://localhost:8080/a.bed.gz.tbi"));
    /// ```
    pub fn new(kind: Kind, name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            attribute_key: None,
            id: id.into(),
            index: None,
            sample: None,
            parent: None,
            hints: Hints::default(),
        }
    }

    /// Sets the attribute key.
    pub fn with_attribute_key(mut self, key: impl Into<String>) -> Self {
        self.attribute_key = Some(key.into());
        self
    }

    /// Sets the index URL.
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Sets the sample that owns the track.
    pub fn with_sample(mut self, sample: Sample) -> Self {
        self.sample = Some(sample);
        self
    }

    /// Sets the haplotype the track was phased to.
    pub fn with_parent(mut self, parent: Parent) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Sets the rendering hints.
    pub fn with_hints(mut self, hints: Hints) -> Self {
        self.hints = hints;
        self
    }

    /// Gets the kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Gets the displayed name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the attribute key.
    pub fn attribute_key(&self) -> Option<&str> {
        self.attribute_key.as_deref()
    }

    /// Gets the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the resource URL if the track is backed by a listed resource.
    pub fn url(&self) -> Option<&str> {
        self.kind.resource_type().map(|_| self.id.as_str())
    }

    /// Gets the index URL.
    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// Gets the sample that owns the track.
    pub fn sample(&self) -> Option<&Sample> {
        self.sample.as_ref()
    }

    /// Gets the haplotype the track was phased to.
    pub fn parent(&self) -> Option<Parent> {
        self.parent
    }

    /// Gets the rendering hints.
    pub fn hints(&self) -> &Hints {
        &self.hints
    }
}
