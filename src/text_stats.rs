use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::StatsError;
use crate::passage::Passage;

// @module: Readability statistics over passage prose

// @const: Terminal punctuation boundary regex
static BOUNDARY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]+(?:\s|$)").unwrap()
});

/// Detects sentence boundaries in prose.
///
/// Implementations report the number of non-overlapping boundary marks found
/// in a text; the statistics computation turns that into a sentence count.
/// Alternate segmenters can be plugged in without touching the rest of the
/// pipeline.
pub trait SentenceBoundaryDetector {
    /// Count non-overlapping sentence boundaries in the text
    fn count_boundaries(&self, text: &str) -> usize;
}

// @struct: Default boundary detector
//
// A run of terminal punctuation (. ! ?) immediately followed by whitespace or
// end of text counts as one boundary. This is a heuristic, not a segmenter:
// the period of an abbreviation like "Dr." before a space registers as a
// boundary, which slightly inflates sentence counts in prose dense with
// honorifics. Published reports depend on these figures, so the behavior is
// kept stable rather than corrected.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPunctuationDetector;

impl SentenceBoundaryDetector for TerminalPunctuationDetector {
    fn count_boundaries(&self, text: &str) -> usize {
        BOUNDARY_REGEX.find_iter(text).count()
    }
}

/// Count whitespace-separated words in a text.
///
/// Leading and trailing whitespace is ignored and runs of internal whitespace
/// collapse, so any text containing a non-whitespace character yields at
/// least 1. Blank text yields 0.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

// @struct: Readability statistics for one passage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassageStats {
    // @field: Whitespace-separated token count
    pub word_count: usize,

    // @field: Heuristic sentence count, always >= 1
    pub sentence_count: usize,

    // @field: Words per sentence, rounded to one decimal
    pub avg_sentence_length: f64,
}

impl PassageStats {
    /// Compute statistics for a passage with the default boundary detector
    pub fn compute(passage: &Passage) -> Result<Self, StatsError> {
        Self::compute_with(passage, &TerminalPunctuationDetector)
    }

    // @creates: Statistics from a passage and a boundary detector
    // @returns: Error when the text body is blank
    pub fn compute_with<D: SentenceBoundaryDetector>(
        passage: &Passage,
        detector: &D,
    ) -> Result<Self, StatsError> {
        if passage.text_body.trim().is_empty() {
            return Err(StatsError::BlankTextBody {
                text_id: passage.text_id.clone(),
            });
        }

        let word_count = count_words(&passage.text_body);
        // Text without any detected boundary is a single run-on sentence
        let sentence_count = detector.count_boundaries(&passage.text_body).max(1);
        let avg_sentence_length = round_one_decimal(word_count as f64 / sentence_count as f64);

        Ok(PassageStats {
            word_count,
            sentence_count,
            avg_sentence_length,
        })
    }

    /// The average with exactly one fractional digit, e.g. "17.4"
    pub fn formatted_average(&self) -> String {
        format!("{:.1}", self.avg_sentence_length)
    }
}

impl fmt::Display for PassageStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "words={} | sentences={} | avg_sl={}",
            self.word_count,
            self.sentence_count,
            self.formatted_average()
        )
    }
}

// Round half away from zero at one decimal. 85 words over 4 sentences must
// come out as 21.3, which rules out the half-to-even rounding that plain
// "{:.1}" formatting applies to 21.25.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
