//! `igv-session` is a crate for generating [IGV] session files that display
//! phased genomic data for one or more individuals.
//!
//! The crate does not read any genomic data. Instead, it knows how the data
//! for each individual is laid out on a static file server and produces a
//! session that points the viewer at those files. The crate provides two main
//! points of entry:
//!
//! - Resolving raw command line input into a validated
//!   [`Request`](crate::input::Request) that knows where its session should be
//!   written.
//! - Building a [`Session`] directly via a [`session::Builder`] and rendering
//!   it with [`Session::to_xml()`].
//!
//! ## Tracks
//!
//! Each individual contributes the following tracks, in order:
//!
//! - DNA methylation on the paternal and maternal haplotypes (bigWig).
//! - Haplotype map blocks on the paternal and maternal haplotypes (BED).
//! - When viewing a single individual, the haplotagged read alignments (BAM),
//!   grouped by phase.
//!
//! A single individual session starts with the reference sequence and the
//! RefSeq Select gene annotation. A session for multiple individuals starts
//! with the cohort variant calls and ends with the reference sequence.
//!
//! ## Example
//!
//! ```
//! use igv_session::Config;
//! use igv_session::input::Request;
//!
//! let request = Request::single("200081", "chr14:100826000-100827000")?;
//! let session = request.session(Config::default())?;
//!
//! for track in session.tracks() {
//!     println!("{} -> {}", track.name(), track.id());
//! }
//!
//! let xml = session.to_xml()?;
//! assert!(xml.contains(r#"locus="chr14:100826000-100827000""#));
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [IGV]: https://igv.org

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod input;
pub mod locus;
pub mod output;
pub mod sample;
pub mod session;
pub mod track;

pub use config::Config;
pub use locus::Locus;
pub use sample::Sample;
pub use session::Mode;
pub use session::Session;
pub use track::Track;
