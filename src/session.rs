//! Session documents.
//!
//! A [`Session`] holds everything the viewer needs to restore a view: the
//! genome build, the locus, and an ordered list of tracks. The order of the
//! tracks is the order they are stacked in, so it is part of the contract.
//! Sessions are constructed with a [`Builder`] and rendered with
//! [`Session::to_xml()`].

pub mod builder;
pub mod xml;

pub use builder::Builder;

use crate::Locus;
use crate::track::Kind;
use crate::track::Track;

/// The mode a session was generated in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
    /// A detailed view of a single individual, including the reference
    /// annotation and (optionally) the haplotagged alignments.
    Single,

    /// A side-by-side view of multiple individuals without alignments.
    Multiple,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Single => write!(f, "single individual"),
            Mode::Multiple => write!(f, "multiple individuals"),
        }
    }
}

/// A session document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Session {
    /// The genome build.
    genome: String,

    /// The initial locus.
    locus: Locus,

    /// The mode.
    mode: Mode,

    /// The tracks in display order.
    tracks: Vec<Track>,
}

impl Session {
    /// Gets the genome build.
    pub fn genome(&self) -> &str {
        &self.genome
    }

    /// Gets the initial locus.
    pub fn locus(&self) -> &Locus {
        &self.locus
    }

    /// Gets the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Gets the tracks in display order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Gets the tracks of a particular kind in display order.
    pub fn tracks_of(&self, kind: Kind) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(move |track| track.kind() == kind)
    }

    /// Renders the session as an XML document.
    ///
    /// # Examples
    ///
    /// ```
    /// use igv_session::Mode;
    /// use igv_session::session::Builder;
    ///
    /// let session = Builder::default()
    ///     .mode(Mode::Single)
    ///     .locus("chr14:100826000-100827000".parse()?)?
    ///     .push_sample("200081".parse()?)
    ///     .try_build()?;
    ///
    /// let xml = session.to_xml()?;
    /// assert!(xml.starts_with("<?xml version=\"1.0\" ?>\n<Session genome=\"hg38\""));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn to_xml(&self) -> Result<String, xml::Error> {
        xml::render(self)
    }
}
