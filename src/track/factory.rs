//! Constructing the tracks for a session.
//!
//! The data is laid out on the file server as follows:
//!
//! ```text
//! founder-phased/{id}.dna-methylation.founder-phased.{pat|mat}.{count|model}.{genome}.bw
//! founder-phased/{id}.hap-map-blocks.{paternal|maternal}.sorted.bed.gz(.tbi)
//! read-backed-phased/{id}.GRCh38.haplotagged.bam(.bai)
//! vcfs/CEPH-1463.joint.GRCh38.deepvariant.glnexus.phased.vcf.gz(.tbi)
//! vcfs-iht-phased/CEPH1463.GRCh38.pass.sorted.vcf.gz(.tbi)
//! ```
//!
//! Nothing here checks that any of these files exist.

use crate::Config;
use crate::Sample;
use crate::session::Mode;
use crate::track::DisplayMode;
use crate::track::GroupBy;
use crate::track::Hints;
use crate::track::Kind;
use crate::track::Parent;
use crate::track::Track;

/// The directory containing the founder-phased data.
pub const FOUNDER_PHASED_DIR: &str = "founder-phased";

/// The directory containing the read-backed phased data.
pub const READ_BACKED_PHASED_DIR: &str = "read-backed-phased";

/// The joint-called cohort variants.
pub const JOINT_VARIANTS_PATH: &str =
    "vcfs/CEPH-1463.joint.GRCh38.deepvariant.glnexus.phased.vcf.gz";

/// The cohort variants phased by inheritance.
pub const PHASED_VARIANTS_PATH: &str = "vcfs-iht-phased/CEPH1463.GRCh38.pass.sorted.vcf.gz";

/// The name (and identifier) of the reference sequence track.
pub const REFERENCE_SEQUENCE: &str = "Reference sequence";

/// The name of the gene annotation track.
pub const GENE_ANNOTATION: &str = "Refseq Select";

/// The color of the alignments.
pub const ALIGNMENT_COLOR: &str = "185,185,185";

/// The suffix of a tabix index.
const TABIX_SUFFIX: &str = ".tbi";

/// The suffix of a BAM index.
const BAI_SUFFIX: &str = ".bai";

/// A factory for the tracks within a session.
///
/// Every method is a pure function of the configuration, the mode, and its
/// arguments, so the same sample always yields the same tracks.
#[derive(Debug)]
pub struct Factory<'a> {
    /// The configuration.
    config: &'a Config,

    /// The mode tracks are named for.
    mode: Mode,
}

impl<'a> Factory<'a> {
    /// Creates a new [`Factory`].
    pub fn new(config: &'a Config, mode: Mode) -> Self {
        Self { config, mode }
    }

    /// Creates every track for a single sample.
    ///
    /// Tracks are returned as the paternal and then maternal methylation,
    /// followed by the paternal and then maternal haplotype blocks. The
    /// haplotagged alignments come last, but only when viewing a single
    /// individual with alignments enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use igv_session::Config;
    /// use igv_session::Mode;
    /// use igv_session::Sample;
    /// use igv_session::track::Factory;
    ///
    /// let config = Config::default();
    /// let sample = Sample::try_new("200081")?;
    ///
    /// let tracks = Factory::new(&config, Mode::Single).sample_tracks(&sample);
    /// assert_eq!(tracks.len(), 5);
    ///
    /// let tracks = Factory::new(&config, Mode::Multiple).sample_tracks(&sample);
    /// assert_eq!(tracks.len(), 4);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn sample_tracks(&self, sample: &Sample) -> Vec<Track> {
        let mut tracks = Parent::ALL
            .iter()
            .map(|parent| self.methylation(sample, *parent))
            .chain(
                Parent::ALL
                    .iter()
                    .map(|parent| self.haplotype_blocks(sample, *parent)),
            )
            .collect::<Vec<_>>();

        if self.mode == Mode::Single && self.config.alignments() {
            tracks.push(self.alignment(sample));
        }

        tracks
    }

    /// Creates the methylation track for one haplotype of a sample.
    pub fn methylation(&self, sample: &Sample, parent: Parent) -> Track {
        let file = format!(
            "{}.dna-methylation.founder-phased.{}.{}.{}.bw",
            sample,
            parent.short_name(),
            self.config.methylation(),
            self.config.genome()
        );
        let url = self.config.url(&format!("{FOUNDER_PHASED_DIR}/{file}"));

        let (name, key) = match self.mode {
            Mode::Single => (file.clone(), file),
            Mode::Multiple => (
                format!("{} {} Methylation", sample, parent.label()),
                format!("{}_{}_meth", sample, parent.short_name()),
            ),
        };

        Track::new(Kind::Signal, name, url)
            .with_attribute_key(key)
            .with_sample(sample.clone())
            .with_parent(parent)
    }

    /// Creates the haplotype block track for one haplotype of a sample.
    pub fn haplotype_blocks(&self, sample: &Sample, parent: Parent) -> Track {
        let file = format!(
            "{}.hap-map-blocks.{}.sorted.bed.gz",
            sample,
            parent.long_name()
        );
        let url = self.config.url(&format!("{FOUNDER_PHASED_DIR}/{file}"));
        let index = format!("{url}{TABIX_SUFFIX}");

        let (name, key) = match self.mode {
            Mode::Single => (file.clone(), file),
            Mode::Multiple => (
                format!("{} {} Blocks", sample, parent.label()),
                format!("{}_{}_blocks", sample, parent.long_name()),
            ),
        };

        Track::new(Kind::Intervals, name, url)
            .with_attribute_key(key)
            .with_index(index)
            .with_sample(sample.clone())
            .with_parent(parent)
    }

    /// Creates the haplotagged alignment track for a sample.
    pub fn alignment(&self, sample: &Sample) -> Track {
        let file = format!("{sample}.GRCh38.haplotagged.bam");
        let url = self.config.url(&format!("{READ_BACKED_PHASED_DIR}/{file}"));
        let index = format!("{url}{BAI_SUFFIX}");

        let hints = Hints::default()
            .with_color(ALIGNMENT_COLOR)
            .with_group_by(GroupBy::Phase)
            .with_display_mode(DisplayMode::Full);

        Track::new(Kind::Alignment, file.clone(), url)
            .with_attribute_key(file)
            .with_index(index)
            .with_sample(sample.clone())
            .with_hints(hints)
    }

    /// Creates the reference sequence track.
    pub fn reference_sequence(&self) -> Track {
        let track = Track::new(Kind::Sequence, REFERENCE_SEQUENCE, REFERENCE_SEQUENCE);

        match self.mode {
            Mode::Single => track.with_attribute_key(REFERENCE_SEQUENCE),
            Mode::Multiple => track,
        }
    }

    /// Creates the gene annotation track (RefSeq Select from UCSC).
    pub fn gene_annotation(&self) -> Track {
        let url = format!(
            "https://hgdownload.soe.ucsc.edu/goldenPath/{}/database/ncbiRefSeqSelect.txt.gz",
            self.config.genome()
        );

        Track::new(Kind::Annotation, GENE_ANNOTATION, url).with_attribute_key(GENE_ANNOTATION)
    }

    /// Creates the cohort-wide variant tracks: the joint calls followed by the
    /// calls phased by inheritance.
    pub fn variants(&self) -> Vec<Track> {
        let joint = self.config.url(JOINT_VARIANTS_PATH);
        let phased = self.config.url(PHASED_VARIANTS_PATH);

        vec![
            Track::new(Kind::Variants, "All variants", joint.clone())
                .with_attribute_key("joint_vcf")
                .with_index(format!("{joint}{TABIX_SUFFIX}"))
                .with_hints(Hints::default().with_display_mode(DisplayMode::Collapsed)),
            Track::new(Kind::Variants, "Phased variants (PAT|MAT)", phased.clone())
                .with_attribute_key("joint_vcf_iht_phased")
                .with_index(format!("{phased}{TABIX_SUFFIX}")),
        ]
    }
}
