//! Rendering sessions to (and reading sessions from) IGV session XML.
//!
//! The layout below is dictated by the viewer and is reproduced exactly,
//! including the ordering of attributes. Documents are indented with four
//! spaces, contain no blank lines, and have no trailing newline.
//!
//! ```text
//! <?xml version="1.0" ?>
//! <Session genome="hg38" locus="chr14:100826000-100827000" version="8">
//!     <Resources>
//!         <Resource path="..." type="bw"/>
//!         ...
//!     </Resources>
//!     <Panel name="DataPanel" height="200">
//!         ...
//!     </Panel>
//!     ...
//!     <PanelLayout dividerFractions="0.15,0.75"/>
//! </Session>
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::BytesEnd;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;

use crate::Locus;
use crate::Session;
use crate::locus;
use crate::session::Mode;
use crate::track::Kind;
use crate::track::Parent;
use crate::track::Track;

/// The XML declaration.
pub const DECLARATION: &str = r#"<?xml version="1.0" ?>"#;

/// The session schema version.
pub const VERSION: &str = "8";

/// The number of spaces per level of indentation.
const INDENT: usize = 4;

/// The name of the panel containing signal tracks.
const DATA_PANEL: &str = "DataPanel";

/// The name of the panel containing feature tracks.
const FEATURE_PANEL: &str = "FeaturePanel";

/// The largest possible visibility window, which means "always visible".
const FEATURE_VISIBILITY_WINDOW: &str = "2147483647";

/// The color scale of the gene annotation track.
const ANNOTATION_COLOR_SCALE: &str = "ContinuousColorScale;0.0;127.0;255,255,255;0,0,178";

/// An error related to rendering or reading a session.
#[derive(Debug)]
pub enum Error {
    /// An error writing the document.
    Write(String),

    /// The document is not well-formed.
    Read(String),

    /// The document has no `Session` element.
    MissingSession,

    /// A required attribute was missing from an element.
    MissingAttribute(&'static str, &'static str),

    /// The locus within the document is invalid.
    InvalidLocus(locus::ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Write(err) => write!(f, "write error: {err}"),
            Error::Read(err) => write!(f, "read error: {err}"),
            Error::MissingSession => write!(f, "missing `Session` element"),
            Error::MissingAttribute(element, attribute) => {
                write!(f, "missing `{attribute}` attribute on `{element}` element")
            }
            Error::InvalidLocus(err) => write!(f, "invalid locus: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Rendering
////////////////////////////////////////////////////////////////////////////////////////

/// An in-progress document.
struct Document(Writer<Vec<u8>>);

impl Document {
    /// Creates a new document that already contains the declaration.
    fn new() -> Self {
        let mut buffer = Vec::new();
        buffer.extend_from_slice(DECLARATION.as_bytes());
        buffer.push(b'\n');

        Self(Writer::new_with_indent(buffer, b' ', INDENT))
    }

    /// Writes an event.
    fn write(&mut self, event: Event<'_>) -> Result<()> {
        self.0
            .write_event(event)
            .map_err(|err| Error::Write(err.to_string()))
    }

    /// Opens an element.
    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.write(Event::Start(element))
    }

    /// Writes an element without any children.
    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.write(Event::Empty(element))
    }

    /// Closes an element.
    fn end(&mut self, name: &str) -> Result<()> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    /// Consumes the document and returns the text.
    fn finish(self) -> Result<String> {
        String::from_utf8(self.0.into_inner()).map_err(|err| Error::Write(err.to_string()))
    }
}

/// Renders a session as an XML document.
pub fn render(session: &Session) -> Result<String> {
    let mode = session.mode();
    let mut doc = Document::new();

    doc.start(
        "Session",
        &[
            ("genome", session.genome()),
            ("locus", session.locus().as_str()),
            ("version", VERSION),
        ],
    )?;

    let mut resources = session
        .tracks()
        .iter()
        .filter(|track| track.kind().resource_type().is_some())
        .collect::<Vec<_>>();

    if mode == Mode::Single {
        maternal_signals_first(&mut resources);
    }

    if resources.is_empty() {
        doc.empty("Resources", &[])?;
    } else {
        doc.start("Resources", &[])?;
        for track in resources {
            render_resource(&mut doc, track)?;
        }
        doc.end("Resources")?;
    }

    let (data_height, feature_height) = match mode {
        Mode::Single => ("200", "150"),
        Mode::Multiple => ("400", "200"),
    };

    doc.start("Panel", &[("name", DATA_PANEL), ("height", data_height)])?;
    for track in session.tracks_of(Kind::Signal) {
        render_signal(&mut doc, track, mode)?;
    }
    doc.end("Panel")?;

    let mut alignments = 0;
    for track in session.tracks_of(Kind::Alignment) {
        let name = format!(
            "Panel{}_bam",
            track.sample().map(|s| s.as_str()).unwrap_or_default()
        );

        doc.start("Panel", &[("name", name.as_str()), ("height", "400")])?;
        render_alignment(&mut doc, track)?;
        doc.end("Panel")?;

        alignments += 1;
    }

    doc.start("Panel", &[("name", FEATURE_PANEL), ("height", feature_height)])?;
    for track in session.tracks() {
        match track.kind() {
            Kind::Sequence => render_sequence(&mut doc, track, mode)?,
            Kind::Annotation => render_annotation(&mut doc, track)?,
            Kind::Intervals => render_intervals(&mut doc, track, mode)?,
            Kind::Variants => render_variants(&mut doc, track)?,
            Kind::Signal | Kind::Alignment => {}
        }
    }
    doc.end("Panel")?;

    let divider_fractions = match (mode, alignments) {
        (Mode::Multiple, _) => "0.60",
        (Mode::Single, 0) => "0.30",
        (Mode::Single, _) => "0.15,0.75",
    };
    doc.empty("PanelLayout", &[("dividerFractions", divider_fractions)])?;

    doc.end("Session")?;
    doc.finish()
}

/// Lists the maternal signal resources ahead of the paternal ones. All other
/// resources keep their positions.
fn maternal_signals_first(resources: &mut [&Track]) {
    let positions = resources
        .iter()
        .enumerate()
        .filter(|(_, track)| track.kind() == Kind::Signal)
        .map(|(i, _)| i)
        .collect::<Vec<_>>();

    let mut signals = positions.iter().map(|&i| resources[i]).collect::<Vec<_>>();
    signals.sort_by_key(|track| track.parent() != Some(Parent::Maternal));

    for (i, track) in positions.into_iter().zip(signals) {
        resources[i] = track;
    }
}

/// Renders the `Resource` entry for a track.
fn render_resource(doc: &mut Document, track: &Track) -> Result<()> {
    let mut attributes = Vec::new();

    if let Some(index) = track.index() {
        attributes.push(("index", index));
    }

    attributes.push(("path", track.id()));

    if let Some(kind) = track.kind().resource_type() {
        attributes.push(("type", kind));
    }

    doc.empty("Resource", &attributes)
}

/// Collects the attribute key (if any) as the leading attribute.
fn leading_key(track: &Track) -> Vec<(&'static str, &str)> {
    track
        .attribute_key()
        .map(|key| vec![("attributeKey", key)])
        .unwrap_or_default()
}

/// Renders a continuous signal track.
fn render_signal(doc: &mut Document, track: &Track, mode: Mode) -> Result<()> {
    let mut attributes = leading_key(track);
    attributes.extend([
        ("autoScale", "false"),
        ("clazz", "org.broad.igv.track.DataSourceTrack"),
        ("fontSize", "10"),
        ("id", track.id()),
        ("name", track.name()),
        ("renderer", "BAR_CHART"),
        ("visible", "true"),
        ("windowFunction", "mean"),
    ]);
    doc.start("Track", &attributes)?;

    let mut range = vec![("baseline", "0.0"), ("drawBaseline", "true")];
    if mode == Mode::Single {
        range.push(("flipAxis", "false"));
    }
    range.extend([("maximum", "1.0"), ("minimum", "0.0"), ("type", "LINEAR")]);
    doc.empty("DataRange", &range)?;

    doc.end("Track")
}

/// Renders an alignment track as a coverage track followed by the alignments
/// themselves.
fn render_alignment(doc: &mut Document, track: &Track) -> Result<()> {
    let coverage_name = format!("{} Coverage", track.name());
    let coverage_id = format!("{}_coverage", track.id());

    doc.start(
        "Track",
        &[
            ("attributeKey", coverage_name.as_str()),
            ("autoScale", "true"),
            ("clazz", "org.broad.igv.sam.CoverageTrack"),
            ("fontSize", "10"),
            ("id", coverage_id.as_str()),
            ("name", coverage_name.as_str()),
            ("snpThreshold", "0.2"),
            ("visible", "true"),
        ],
    )?;
    doc.empty(
        "DataRange",
        &[
            ("baseline", "0.0"),
            ("drawBaseline", "true"),
            ("flipAxis", "false"),
            ("minimum", "0.0"),
            ("type", "LINEAR"),
        ],
    )?;
    doc.end("Track")?;

    let hints = track.hints();
    let color = hints.color();
    let display_mode = hints.display_mode().map(|m| m.to_string());
    let group_by = hints.group_by().map(|g| g.to_string());

    let mut attributes = leading_key(track);
    attributes.push(("clazz", "org.broad.igv.sam.AlignmentTrack"));
    if let Some(color) = color {
        attributes.push(("color", color));
    }
    if let Some(display_mode) = display_mode.as_deref() {
        attributes.push(("displayMode", display_mode));
    }
    attributes.extend([
        ("experimentType", "THIRD_GEN"),
        ("fontSize", "10"),
        ("id", track.id()),
        ("name", track.name()),
        ("visible", "true"),
    ]);
    doc.start("Track", &attributes)?;

    let mut options = vec![
        ("basemodFilter", "m,"),
        ("colorOption", "BASE_MODIFICATION_2COLOR"),
        ("duplicatesOption", "FILTER"),
    ];
    if let Some(group_by) = group_by.as_deref() {
        options.push(("groupByOption", group_by));
    }
    options.extend([
        ("hideSmallIndels", "true"),
        ("shadeBasesOption", "false"),
        ("showMismatches", "true"),
        ("smallIndelThreshold", "50"),
    ]);
    doc.empty("RenderOptions", &options)?;

    doc.end("Track")
}

/// Renders the reference sequence track.
fn render_sequence(doc: &mut Document, track: &Track, mode: Mode) -> Result<()> {
    let mut attributes = leading_key(track);
    attributes.extend([
        ("clazz", "org.broad.igv.track.SequenceTrack"),
        ("fontSize", "10"),
        ("id", track.id()),
        ("name", track.name()),
    ]);
    if mode == Mode::Single {
        attributes.extend([
            ("sequenceTranslationStrandValue", "+"),
            ("shouldShowTranslation", "false"),
        ]);
    }
    attributes.push(("visible", "true"));

    doc.empty("Track", &attributes)
}

/// Renders the gene annotation track.
fn render_annotation(doc: &mut Document, track: &Track) -> Result<()> {
    let mut attributes = leading_key(track);
    attributes.extend([
        ("clazz", "org.broad.igv.track.FeatureTrack"),
        ("colorScale", ANNOTATION_COLOR_SCALE),
        ("fontSize", "10"),
        ("groupByStrand", "false"),
        ("id", track.id()),
        ("name", track.name()),
        ("visible", "true"),
    ]);

    doc.empty("Track", &attributes)
}

/// Renders an interval set track.
fn render_intervals(doc: &mut Document, track: &Track, mode: Mode) -> Result<()> {
    let mut attributes = leading_key(track);
    attributes.extend([
        ("clazz", "org.broad.igv.track.FeatureTrack"),
        ("featureVisibilityWindow", FEATURE_VISIBILITY_WINDOW),
        ("fontSize", "10"),
    ]);
    if mode == Mode::Single {
        attributes.push(("groupByStrand", "false"));
    }
    attributes.extend([
        ("id", track.id()),
        ("name", track.name()),
        ("visible", "true"),
    ]);

    doc.empty("Track", &attributes)
}

/// Renders a variant track.
fn render_variants(doc: &mut Document, track: &Track) -> Result<()> {
    let display_mode = track.hints().display_mode().map(|m| m.to_string());

    let mut attributes = leading_key(track);
    attributes.push(("clazz", "org.broad.igv.variant.VariantTrack"));
    if let Some(display_mode) = display_mode.as_deref() {
        attributes.push(("displayMode", display_mode));
    }
    attributes.extend([
        ("fontSize", "10"),
        ("id", track.id()),
        ("name", track.name()),
        ("visible", "true"),
    ]);

    doc.empty("Track", &attributes)
}

////////////////////////////////////////////////////////////////////////////////////////
// Reading
////////////////////////////////////////////////////////////////////////////////////////

/// A `Resource` entry within a session document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resource {
    /// The URL of the resource.
    pub path: String,

    /// The URL of the index, if any.
    pub index: Option<String>,

    /// The resource type (e.g., `bw`).
    pub kind: Option<String>,
}

/// A `Track` entry within a session document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrackEntry {
    /// The identifier.
    pub id: String,

    /// The displayed name.
    pub name: String,

    /// The fully qualified class of the track within the viewer.
    pub class: Option<String>,

    /// The attribute key.
    pub attribute_key: Option<String>,

    /// The panel the track was found in.
    pub panel: Option<String>,
}

/// The contents of a session document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Summary {
    /// The genome build.
    pub genome: String,

    /// The initial locus.
    pub locus: Locus,

    /// The schema version.
    pub version: Option<String>,

    /// The resources in document order.
    pub resources: Vec<Resource>,

    /// The tracks in document order.
    pub tracks: Vec<TrackEntry>,

    /// The panel names in document order.
    pub panels: Vec<String>,
}

impl FromStr for Summary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        read(s)
    }
}

/// Collects the attributes of an element.
fn attributes(element: &BytesStart<'_>) -> Result<HashMap<String, String>> {
    let mut result = HashMap::new();

    for attribute in element.attributes() {
        let attribute = attribute.map_err(|err| Error::Read(err.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|err| Error::Read(err.to_string()))?
            .into_owned();

        result.insert(key, value);
    }

    Ok(result)
}

/// Removes a required attribute.
fn required(
    attributes: &mut HashMap<String, String>,
    element: &'static str,
    attribute: &'static str,
) -> Result<String> {
    attributes
        .remove(attribute)
        .ok_or(Error::MissingAttribute(element, attribute))
}

/// Reads a session document.
///
/// The document must be well-formed. Elements that are not needed to
/// reconstruct the locus, resources, and tracks are skipped.
///
/// # Examples
///
/// ```
/// use igv_session::session::xml;
///
/// let summary = xml::read(
///     r#"<?xml version="1.0" ?>
/// <Session genome="hg38" locus="chr1:10-20" version="8">
///     <Resources>
///         <Resource path="http://localhost:8080/a.bw" type="bw"/>
///     </Resources>
/// </Session>"#,
/// )?;
///
/// assert_eq!(summary.locus.to_string(), "chr1:10-20");
/// assert_eq!(summary.resources[0].path, "http://localhost:8080/a.bw");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn read(xml: &str) -> Result<Summary> {
    let mut reader = Reader::from_str(xml);

    let mut session = None;
    let mut resources = Vec::new();
    let mut tracks = Vec::new();
    let mut panels = Vec::new();
    let mut panel = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|err| Error::Read(err.to_string()))?;

        match event {
            Event::Start(ref element) | Event::Empty(ref element) => {
                let is_start = matches!(event, Event::Start(_));

                match element.name().as_ref() {
                    b"Session" => {
                        let mut attrs = attributes(element)?;
                        let genome = required(&mut attrs, "Session", "genome")?;
                        let locus = required(&mut attrs, "Session", "locus")?
                            .parse::<Locus>()
                            .map_err(Error::InvalidLocus)?;
                        let version = attrs.remove("version");

                        session = Some((genome, locus, version));
                    }
                    b"Resource" => {
                        let mut attrs = attributes(element)?;
                        resources.push(Resource {
                            path: required(&mut attrs, "Resource", "path")?,
                            index: attrs.remove("index"),
                            kind: attrs.remove("type"),
                        });
                    }
                    b"Panel" => {
                        let mut attrs = attributes(element)?;
                        let name = required(&mut attrs, "Panel", "name")?;
                        panels.push(name.clone());

                        if is_start {
                            panel = Some(name);
                        }
                    }
                    b"Track" => {
                        let mut attrs = attributes(element)?;
                        tracks.push(TrackEntry {
                            id: required(&mut attrs, "Track", "id")?,
                            name: required(&mut attrs, "Track", "name")?,
                            class: attrs.remove("clazz"),
                            attribute_key: attrs.remove("attributeKey"),
                            panel: panel.clone(),
                        });
                    }
                    _ => {}
                }
            }
            Event::End(ref element) if element.name().as_ref() == b"Panel" => panel = None,
            Event::Eof => break,
            _ => {}
        }
    }

    let (genome, locus, version) = session.ok_or(Error::MissingSession)?;

    Ok(Summary {
        genome,
        locus,
        version,
        resources,
        tracks,
        panels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crate::Sample;
    use crate::session::Builder;

    const LOCUS: &str = "chr14:100826000-100827000";

    fn single(config: Config) -> Session {
        Builder::default()
            .config(config)
            .mode(Mode::Single)
            .locus(LOCUS.parse().unwrap())
            .unwrap()
            .push_sample(Sample::try_new("200081").unwrap())
            .try_build()
            .unwrap()
    }

    fn multiple(ids: &[&str]) -> Session {
        Builder::default()
            .mode(Mode::Multiple)
            .locus(LOCUS.parse().unwrap())
            .unwrap()
            .extend_samples(ids.iter().map(|id| Sample::try_new(id).unwrap()))
            .try_build()
            .unwrap()
    }

    #[test]
    fn single_individual_document() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let xml = render(&single(Config::default()))?;

        let expected = r#"<?xml version="1.0" ?>
<Session genome="hg38" locus="chr14:100826000-100827000" version="8">
    <Resources>
        <Resource path="http://localhost:8080/founder-phased/200081.dna-methylation.founder-phased.mat.count.hg38.bw" type="bw"/>
        <Resource path="http://localhost:8080/founder-phased/200081.dna-methylation.founder-phased.pat.count.hg38.bw" type="bw"/>
        <Resource index="http://localhost:8080/founder-phased/200081.hap-map-blocks.paternal.sorted.bed.gz.tbi" path="http://localhost:8080/founder-phased/200081.hap-map-blocks.paternal.sorted.bed.gz" type="bed"/>
        <Resource index="http://localhost:8080/founder-phased/200081.hap-map-blocks.maternal.sorted.bed.gz.tbi" path="http://localhost:8080/founder-phased/200081.hap-map-blocks.maternal.sorted.bed.gz" type="bed"/>
        <Resource index="http://localhost:8080/read-backed-phased/200081.GRCh38.haplotagged.bam.bai" path="http://localhost:8080/read-backed-phased/200081.GRCh38.haplotagged.bam" type="bam"/>
    </Resources>
    <Panel name="DataPanel" height="200">
        <Track attributeKey="200081.dna-methylation.founder-phased.pat.count.hg38.bw" autoScale="false" clazz="org.broad.igv.track.DataSourceTrack" fontSize="10" id="http://localhost:8080/founder-phased/200081.dna-methylation.founder-phased.pat.count.hg38.bw" name="200081.dna-methylation.founder-phased.pat.count.hg38.bw" renderer="BAR_CHART" visible="true" windowFunction="mean">
            <DataRange baseline="0.0" drawBaseline="true" flipAxis="false" maximum="1.0" minimum="0.0" type="LINEAR"/>
        </Track>
        <Track attributeKey="200081.dna-methylation.founder-phased.mat.count.hg38.bw" autoScale="false" clazz="org.broad.igv.track.DataSourceTrack" fontSize="10" id="http://localhost:8080/founder-phased/200081.dna-methylation.founder-phased.mat.count.hg38.bw" name="200081.dna-methylation.founder-phased.mat.count.hg38.bw" renderer="BAR_CHART" visible="true" windowFunction="mean">
            <DataRange baseline="0.0" drawBaseline="true" flipAxis="false" maximum="1.0" minimum="0.0" type="LINEAR"/>
        </Track>
    </Panel>
    <Panel name="Panel200081_bam" height="400">
        <Track attributeKey="200081.GRCh38.haplotagged.bam Coverage" autoScale="true" clazz="org.broad.igv.sam.CoverageTrack" fontSize="10" id="http://localhost:8080/read-backed-phased/200081.GRCh38.haplotagged.bam_coverage" name="200081.GRCh38.haplotagged.bam Coverage" snpThreshold="0.2" visible="true">
            <DataRange baseline="0.0" drawBaseline="true" flipAxis="false" minimum="0.0" type="LINEAR"/>
        </Track>
        <Track attributeKey="200081.GRCh38.haplotagged.bam" clazz="org.broad.igv.sam.AlignmentTrack" color="185,185,185" displayMode="FULL" experimentType="THIRD_GEN" fontSize="10" id="http://localhost:8080/read-backed-phased/200081.GRCh38.haplotagged.bam" name="200081.GRCh38.haplotagged.bam" visible="true">
            <RenderOptions basemodFilter="m," colorOption="BASE_MODIFICATION_2COLOR" duplicatesOption="FILTER" groupByOption="PHASE" hideSmallIndels="true" shadeBasesOption="false" showMismatches="true" smallIndelThreshold="50"/>
        </Track>
    </Panel>
    <Panel name="FeaturePanel" height="150">
        <Track attributeKey="Reference sequence" clazz="org.broad.igv.track.SequenceTrack" fontSize="10" id="Reference sequence" name="Reference sequence" sequenceTranslationStrandValue="+" shouldShowTranslation="false" visible="true"/>
        <Track attributeKey="Refseq Select" clazz="org.broad.igv.track.FeatureTrack" colorScale="ContinuousColorScale;0.0;127.0;255,255,255;0,0,178" fontSize="10" groupByStrand="false" id="https://hgdownload.soe.ucsc.edu/goldenPath/hg38/database/ncbiRefSeqSelect.txt.gz" name="Refseq Select" visible="true"/>
        <Track attributeKey="200081.hap-map-blocks.paternal.sorted.bed.gz" clazz="org.broad.igv.track.FeatureTrack" featureVisibilityWindow="2147483647" fontSize="10" groupByStrand="false" id="http://localhost:8080/founder-phased/200081.hap-map-blocks.paternal.sorted.bed.gz" name="200081.hap-map-blocks.paternal.sorted.bed.gz" visible="true"/>
        <Track attributeKey="200081.hap-map-blocks.maternal.sorted.bed.gz" clazz="org.broad.igv.track.FeatureTrack" featureVisibilityWindow="2147483647" fontSize="10" groupByStrand="false" id="http://localhost:8080/founder-phased/200081.hap-map-blocks.maternal.sorted.bed.gz" name="200081.hap-map-blocks.maternal.sorted.bed.gz" visible="true"/>
    </Panel>
    <PanelLayout dividerFractions="0.15,0.75"/>
</Session>"#;

        assert_eq!(xml, expected);
        Ok(())
    }

    #[test]
    fn single_individual_without_alignments() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let xml = render(&single(Config::default().with_alignments(false)))?;

        assert!(!xml.contains(".bam"));
        assert!(!xml.contains("_bam\""));
        assert!(xml.ends_with("    <PanelLayout dividerFractions=\"0.30\"/>\n</Session>"));

        Ok(())
    }

    #[test]
    fn multiple_individuals_document() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let xml = render(&multiple(&["200081"]))?;

        let expected = r#"<?xml version="1.0" ?>
<Session genome="hg38" locus="chr14:100826000-100827000" version="8">
    <Resources>
        <Resource index="http://localhost:8080/vcfs/CEPH-1463.joint.GRCh38.deepvariant.glnexus.phased.vcf.gz.tbi" path="http://localhost:8080/vcfs/CEPH-1463.joint.GRCh38.deepvariant.glnexus.phased.vcf.gz" type="vcf"/>
        <Resource index="http://localhost:8080/vcfs-iht-phased/CEPH1463.GRCh38.pass.sorted.vcf.gz.tbi" path="http://localhost:8080/vcfs-iht-phased/CEPH1463.GRCh38.pass.sorted.vcf.gz" type="vcf"/>
        <Resource path="http://localhost:8080/founder-phased/200081.dna-methylation.founder-phased.pat.count.hg38.bw" type="bw"/>
        <Resource path="http://localhost:8080/founder-phased/200081.dna-methylation.founder-phased.mat.count.hg38.bw" type="bw"/>
        <Resource index="http://localhost:8080/founder-phased/200081.hap-map-blocks.paternal.sorted.bed.gz.tbi" path="http://localhost:8080/founder-phased/200081.hap-map-blocks.paternal.sorted.bed.gz" type="bed"/>
        <Resource index="http://localhost:8080/founder-phased/200081.hap-map-blocks.maternal.sorted.bed.gz.tbi" path="http://localhost:8080/founder-phased/200081.hap-map-blocks.maternal.sorted.bed.gz" type="bed"/>
    </Resources>
    <Panel name="DataPanel" height="400">
        <Track attributeKey="200081_pat_meth" autoScale="false" clazz="org.broad.igv.track.DataSourceTrack" fontSize="10" id="http://localhost:8080/founder-phased/200081.dna-methylation.founder-phased.pat.count.hg38.bw" name="200081 PAT Methylation" renderer="BAR_CHART" visible="true" windowFunction="mean">
            <DataRange baseline="0.0" drawBaseline="true" maximum="1.0" minimum="0.0" type="LINEAR"/>
        </Track>
        <Track attributeKey="200081_mat_meth" autoScale="false" clazz="org.broad.igv.track.DataSourceTrack" fontSize="10" id="http://localhost:8080/founder-phased/200081.dna-methylation.founder-phased.mat.count.hg38.bw" name="200081 MAT Methylation" renderer="BAR_CHART" visible="true" windowFunction="mean">
            <DataRange baseline="0.0" drawBaseline="true" maximum="1.0" minimum="0.0" type="LINEAR"/>
        </Track>
    </Panel>
    <Panel name="FeaturePanel" height="200">
        <Track attributeKey="joint_vcf" clazz="org.broad.igv.variant.VariantTrack" displayMode="COLLAPSED" fontSize="10" id="http://localhost:8080/vcfs/CEPH-1463.joint.GRCh38.deepvariant.glnexus.phased.vcf.gz" name="All variants" visible="true"/>
        <Track attributeKey="joint_vcf_iht_phased" clazz="org.broad.igv.variant.VariantTrack" fontSize="10" id="http://localhost:8080/vcfs-iht-phased/CEPH1463.GRCh38.pass.sorted.vcf.gz" name="Phased variants (PAT|MAT)" visible="true"/>
        <Track attributeKey="200081_paternal_blocks" clazz="org.broad.igv.track.FeatureTrack" featureVisibilityWindow="2147483647" fontSize="10" id="http://localhost:8080/founder-phased/200081.hap-map-blocks.paternal.sorted.bed.gz" name="200081 PAT Blocks" visible="true"/>
        <Track attributeKey="200081_maternal_blocks" clazz="org.broad.igv.track.FeatureTrack" featureVisibilityWindow="2147483647" fontSize="10" id="http://localhost:8080/founder-phased/200081.hap-map-blocks.maternal.sorted.bed.gz" name="200081 MAT Blocks" visible="true"/>
        <Track clazz="org.broad.igv.track.SequenceTrack" fontSize="10" id="Reference sequence" name="Reference sequence" visible="true"/>
    </Panel>
    <PanelLayout dividerFractions="0.60"/>
</Session>"#;

        assert_eq!(xml, expected);
        Ok(())
    }

    #[test]
    fn round_trip() -> std::result::Result<(), Box<dyn std::error::Error>> {
        for session in [
            single(Config::default()),
            multiple(&["200081", "200082", "200083"]),
        ] {
            let summary = read(&render(&session)?)?;

            assert_eq!(&summary.locus, session.locus());
            assert_eq!(summary.genome, session.genome());
            assert_eq!(summary.version.as_deref(), Some(VERSION));

            let in_panel = |panel: &str| {
                summary
                    .tracks
                    .iter()
                    .filter(|entry| entry.panel.as_deref() == Some(panel))
                    .map(|entry| (entry.id.as_str(), entry.name.as_str()))
                    .collect::<Vec<_>>()
            };
            let of_kinds = |kinds: &[Kind]| {
                session
                    .tracks()
                    .iter()
                    .filter(|track| kinds.contains(&track.kind()))
                    .map(|track| (track.id(), track.name()))
                    .collect::<Vec<_>>()
            };

            assert_eq!(in_panel(DATA_PANEL), of_kinds(&[Kind::Signal]));
            assert_eq!(
                in_panel(FEATURE_PANEL),
                of_kinds(&[
                    Kind::Sequence,
                    Kind::Annotation,
                    Kind::Intervals,
                    Kind::Variants
                ])
            );

            for track in session.tracks_of(Kind::Alignment) {
                let panel = format!("Panel{}_bam", track.sample().unwrap());
                let entries = in_panel(&panel);

                assert_eq!(entries.len(), 2);
                assert_eq!(entries[1], (track.id(), track.name()));
            }

            for track in session.tracks() {
                assert!(
                    summary.tracks.iter().any(|entry| entry.id == track.id()
                        && entry.attribute_key.as_deref() == track.attribute_key()),
                    "missing track {}",
                    track.id()
                );
            }
        }

        Ok(())
    }

    #[test]
    fn resources_follow_track_order() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let session = multiple(&["200081", "200082"]);
        let summary = read(&render(&session)?)?;

        let expected = session
            .tracks()
            .iter()
            .filter_map(|t| t.url())
            .collect::<Vec<_>>();
        let paths = summary
            .resources
            .iter()
            .map(|r| r.path.as_str())
            .collect::<Vec<_>>();
        assert_eq!(paths, expected);

        Ok(())
    }

    #[test]
    fn maternal_signal_listed_first() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let session = single(Config::default());
        let summary = read(&render(&session)?)?;

        let kinds = summary
            .resources
            .iter()
            .map(|r| r.kind.as_deref().unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(kinds, ["bw", "bw", "bed", "bed", "bam"]);
        assert!(summary.resources[0].path.contains(".mat."));
        assert!(summary.resources[1].path.contains(".pat."));

        let signals = session
            .tracks_of(Kind::Signal)
            .map(|t| t.parent())
            .collect::<Vec<_>>();
        assert_eq!(signals, [Some(Parent::Paternal), Some(Parent::Maternal)]);

        Ok(())
    }

    #[test]
    fn locus_is_rendered_as_given() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let session = Builder::default()
            .mode(Mode::Single)
            .locus("chr1:005-10".parse()?)?
            .push_sample(Sample::try_new("200081")?)
            .try_build()?;

        let xml = render(&session)?;
        assert!(xml.contains(r#"locus="chr1:005-10""#));
        assert_eq!(read(&xml)?.locus.as_str(), "chr1:005-10");

        Ok(())
    }

    #[test]
    fn round_trip_keeps_sample_order() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let summary = read(&render(&multiple(&["B", "A"]))?)?;

        let names = summary
            .tracks
            .iter()
            .filter(|t| t.panel.as_deref() == Some(DATA_PANEL))
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "B PAT Methylation",
                "B MAT Methylation",
                "A PAT Methylation",
                "A MAT Methylation"
            ]
        );
        assert_eq!(summary.panels, [DATA_PANEL, FEATURE_PANEL]);

        Ok(())
    }

    #[test]
    fn special_characters_are_escaped() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let session = Builder::default()
            .mode(Mode::Multiple)
            .locus(LOCUS.parse()?)?
            .push_sample(Sample::try_new("a&b<c>")?)
            .try_build()?;

        let xml = render(&session)?;
        assert!(xml.contains("a&amp;b&lt;c&gt; PAT Methylation"));

        let summary = read(&xml)?;
        assert!(summary.tracks.iter().any(|t| t.name == "a&b<c> PAT Methylation"));

        Ok(())
    }

    #[test]
    fn read_errors() {
        let err = read("<Session genome=\"hg38\" locus=\"chr1:1-2\"></Other>").unwrap_err();
        assert!(matches!(err, Error::Read(_)), "{err}");

        let err = read("<Other/>").unwrap_err();
        assert!(matches!(err, Error::MissingSession));

        let err = read("<Session locus=\"chr1:1-2\"/>").unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing `genome` attribute on `Session` element"
        );

        let err = read("<Session genome=\"hg38\" locus=\"chr1:2-1\"/>").unwrap_err();
        assert!(matches!(err, Error::InvalidLocus(_)));
    }
}
