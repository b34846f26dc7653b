/*!
 * Tests for CSV report rendering
 */

use anyhow::Result;

use lexiband::passage::LexileBand;
use lexiband::report::{self, ReportRow, COLUMNS, CREATED_DATE, UTF8_BOM};
use lexiband::text_stats::PassageStats;
use crate::common;

/// Builds a report row for a minimal passage with computed statistics
fn row_for(text_id: &str, text_body: &str) -> Result<ReportRow> {
    let passage = common::sample_passage(text_id, text_body);
    let stats = PassageStats::compute(&passage)?;
    Ok(ReportRow::from_passage(&passage, &stats, &LexileBand::academic()))
}

#[test]
fn test_columns_shouldListSixteenInReportOrder() {
    assert_eq!(COLUMNS.len(), 16);
    assert_eq!(COLUMNS[0], "text_id");
    assert_eq!(COLUMNS[9], "text_body");
    assert_eq!(COLUMNS[15], "notes");
}

#[test]
fn test_render_header_withDefaultColumns_shouldQuoteEveryField() -> Result<()> {
    let header = report::render_header()?;
    assert_eq!(
        header,
        "\"text_id\",\"lexile_band\",\"lexile_score\",\"age_group\",\"grade_hint\",\"genre\",\"topic\",\"word_count\",\"length_type\",\"text_body\",\"sentence_count\",\"avg_sentence_length\",\"vocabulary_band\",\"intended_use\",\"created_date\",\"notes\"\n"
    );
    Ok(())
}

#[test]
fn test_render_row_withPlainText_shouldQuoteEveryField() -> Result<()> {
    let row = row_for("T-001", "Two sentences here. Short ones.")?;
    let line = report::render_row(&row)?;
    assert_eq!(
        line,
        "\"T-001\",\"1300-1500\",\"1400\",\"Academic\",\"대학1\",\"Expository\",\"Test Topic\",\"5\",\"Short\",\"Two sentences here. Short ones.\",\"2\",\"2.5\",\"C1\",\"수업\",\"2026-02-03\",\"Academic dense prose; short length; layered subordination and nominalization\"\n"
    );
    Ok(())
}

#[test]
fn test_render_row_withEmbeddedQuotes_shouldDoubleThem() -> Result<()> {
    let row = row_for("T-002", "Then she asked, \"Why?\" and left.")?;
    let line = report::render_row(&row)?;

    assert!(line.contains("\"Then she asked, \"\"Why?\"\" and left.\""));
    Ok(())
}

#[test]
fn test_render_row_withCommaAndNewline_shouldKeepThemInsideQuotes() -> Result<()> {
    let row = row_for("T-003", "First line, with a comma.\nSecond line.")?;
    let line = report::render_row(&row)?;

    assert!(line.contains("\"First line, with a comma.\nSecond line.\""));
    assert!(line.ends_with('\n'));
    assert!(!line.contains('\r'));
    Ok(())
}

#[test]
fn test_render_report_withRows_shouldPrefixExactlyOneBom() -> Result<()> {
    let row = row_for("T-004", "One.")?;
    let report_text = report::render_report(&[row])?;

    assert!(report_text.starts_with(UTF8_BOM));
    assert_eq!(report_text.matches('\u{FEFF}').count(), 1);
    assert!(report_text.as_bytes().starts_with(&[0xEF, 0xBB, 0xBF]));
    Ok(())
}

#[test]
fn test_render_report_withTwoRows_shouldEndRecordsWithBareLineFeed() -> Result<()> {
    let rows = vec![row_for("T-005", "One.")?, row_for("T-006", "Two.")?];
    let report_text = report::render_report(&rows)?;

    assert!(!report_text.contains('\r'));
    assert_eq!(report_text.lines().count(), 3);
    assert!(report_text.ends_with('\n'));
    Ok(())
}

#[test]
fn test_render_report_withSameRows_shouldBeDeterministic() -> Result<()> {
    let rows = vec![row_for("T-007", "Stable output. Every time.")?];
    let first = report::render_report(&rows)?;
    let second = report::render_report(&rows)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_report_row_fields_shouldFollowColumnOrder() -> Result<()> {
    let row = row_for("T-008", "Order matters here.")?;
    let fields = row.fields();

    assert_eq!(fields.len(), COLUMNS.len());
    assert_eq!(fields[0], "T-008");
    assert_eq!(fields[1], "1300-1500");
    assert_eq!(fields[3], "Academic");
    assert_eq!(fields[9], "Order matters here.");
    assert_eq!(fields[14], CREATED_DATE);
    Ok(())
}

#[test]
fn test_notes_for_withMixedCaseLength_shouldLowercaseLengthType() {
    assert_eq!(
        report::notes_for("Micro"),
        "Academic dense prose; micro length; layered subordination and nominalization"
    );
}

#[test]
fn test_render_report_withQuotedField_shouldRoundTripThroughCsvReader() -> Result<()> {
    let body = "A \"quoted\" phrase, a comma.";
    let rows = vec![row_for("T-009", body)?];
    let report_text = report::render_report(&rows)?;

    let without_bom = report_text
        .strip_prefix('\u{FEFF}')
        .expect("report should start with a BOM");
    let mut reader = csv::Reader::from_reader(without_bom.as_bytes());

    let headers = reader.headers()?.clone();
    assert_eq!(headers.len(), 16);

    let record = reader.records().next().expect("one record expected")?;
    assert_eq!(&record[0], "T-009");
    assert_eq!(&record[9], body);
    Ok(())
}
