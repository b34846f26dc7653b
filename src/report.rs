use csv::{QuoteStyle, WriterBuilder};

use crate::errors::ReportError;
use crate::passage::{LexileBand, Passage};
use crate::text_stats::PassageStats;

// @module: CSV rendering of enriched passage records

// @const: UTF-8 byte order mark, prefixed so spreadsheet tools that assume a
// legacy encoding still pick the report up as UTF-8
pub const UTF8_BOM: &str = "\u{FEFF}";

// @const: Fixed creation stamp carried by every row of the published format
pub const CREATED_DATE: &str = "2026-02-03";

/// Column order of the report, header row included
pub const COLUMNS: [&str; 16] = [
    "text_id",
    "lexile_band",
    "lexile_score",
    "age_group",
    "grade_hint",
    "genre",
    "topic",
    "word_count",
    "length_type",
    "text_body",
    "sentence_count",
    "avg_sentence_length",
    "vocabulary_band",
    "intended_use",
    "created_date",
    "notes",
];

// @struct: One report row, a passage joined with its statistics and band
#[derive(Debug, Clone)]
pub struct ReportRow {
    // @field: Passage identifier
    pub text_id: String,

    // @field: Band label shared by all rows
    pub lexile_band: String,

    // @field: Measured Lexile score
    pub lexile_score: u32,

    // @field: Age group the band maps to
    pub age_group: String,

    // @field: Suggested school grade
    pub grade_hint: String,

    // @field: Genre label
    pub genre: String,

    // @field: Topic title
    pub topic: String,

    // @field: Whitespace-separated token count
    pub word_count: usize,

    // @field: Length class
    pub length_type: String,

    // @field: The prose itself
    pub text_body: String,

    // @field: Heuristic sentence count
    pub sentence_count: usize,

    // @field: Words per sentence, rounded to one decimal
    pub avg_sentence_length: f64,

    // @field: CEFR vocabulary band
    pub vocabulary_band: String,

    // @field: Intended classroom use
    pub intended_use: String,

    // @field: Fixed creation stamp
    pub created_date: String,

    // @field: Descriptive note derived from the length class
    pub notes: String,
}

impl ReportRow {
    // @creates: Row from a passage, its statistics and the band metadata
    pub fn from_passage(passage: &Passage, stats: &PassageStats, band: &LexileBand) -> Self {
        ReportRow {
            text_id: passage.text_id.clone(),
            lexile_band: band.label.clone(),
            lexile_score: passage.lexile_score,
            age_group: band.age_group.clone(),
            grade_hint: passage.grade_hint.clone(),
            genre: passage.genre.clone(),
            topic: passage.topic.clone(),
            word_count: stats.word_count,
            length_type: passage.length_type.clone(),
            text_body: passage.text_body.clone(),
            sentence_count: stats.sentence_count,
            avg_sentence_length: stats.avg_sentence_length,
            vocabulary_band: passage.vocabulary_band.clone(),
            intended_use: passage.intended_use.clone(),
            created_date: CREATED_DATE.to_string(),
            notes: notes_for(&passage.length_type),
        }
    }

    /// Field values in column order
    pub fn fields(&self) -> [String; 16] {
        [
            self.text_id.clone(),
            self.lexile_band.clone(),
            self.lexile_score.to_string(),
            self.age_group.clone(),
            self.grade_hint.clone(),
            self.genre.clone(),
            self.topic.clone(),
            self.word_count.to_string(),
            self.length_type.clone(),
            self.text_body.clone(),
            self.sentence_count.to_string(),
            format!("{:.1}", self.avg_sentence_length),
            self.vocabulary_band.clone(),
            self.intended_use.clone(),
            self.created_date.clone(),
            self.notes.clone(),
        ]
    }
}

/// Fixed descriptive note for a passage's length class
pub fn notes_for(length_type: &str) -> String {
    format!(
        "Academic dense prose; {} length; layered subordination and nominalization",
        length_type.to_lowercase()
    )
}

/// Render the header row as CSV text, newline terminated
pub fn render_header() -> Result<String, ReportError> {
    render_records(std::iter::once(COLUMNS.map(String::from)))
}

/// Render one row as CSV text, newline terminated, independent of any report
pub fn render_row(row: &ReportRow) -> Result<String, ReportError> {
    render_records(std::iter::once(row.fields()))
}

/// Render the complete report: BOM, header row, then one line per record.
///
/// Every field is double-quoted regardless of content, embedded quotes are
/// doubled, and records end with a bare line feed. Rendering is a pure
/// function of its input, so the same rows always produce identical bytes.
pub fn render_report(rows: &[ReportRow]) -> Result<String, ReportError> {
    let records =
        std::iter::once(COLUMNS.map(String::from)).chain(rows.iter().map(ReportRow::fields));
    let body = render_records(records)?;
    Ok(format!("{}{}", UTF8_BOM, body))
}

// Shared serializer configuration: quote everything, LF terminator,
// double-quote escaping.
fn render_records<I>(records: I) -> Result<String, ReportError>
where
    I: IntoIterator<Item = [String; 16]>,
{
    let mut buffer = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(&mut buffer);
        for record in records {
            writer.write_record(&record)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buffer)?)
}
