//! Chart-ready data series.
//!
//! A series is the (year, value) sequence a chart renderer plots; the
//! renderer itself lives outside this crate. Rows without a defined value
//! (zero-word documents, labels a table was not built with) are skipped, not
//! zero-filled.

use serde::Serialize;

use crate::domain::SpeechRecord;

/// A per-record metric that can be plotted over time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Metric {
    /// Word count
    Words,
    /// Character count
    Characters,
    /// Average word length (undefined for zero-word documents)
    AverageWordLength,
    /// Laughter annotation count
    Laughter,
    /// Applause annotation count
    Applause,
    /// A configured keyword count, by rule label
    Keyword(String),
}

impl Metric {
    /// Parse a metric name; anything unrecognized is taken as a keyword label.
    pub fn parse(name: &str) -> Self {
        match name {
            "words" => Metric::Words,
            "characters" => Metric::Characters,
            "avg_word_length" => Metric::AverageWordLength,
            "laughter" => Metric::Laughter,
            "applause" => Metric::Applause,
            label => Metric::Keyword(label.to_string()),
        }
    }

    /// Stable name used in output file stems and labels
    pub fn name(&self) -> String {
        match self {
            Metric::Words => "words".to_string(),
            Metric::Characters => "characters".to_string(),
            Metric::AverageWordLength => "avg_word_length".to_string(),
            Metric::Laughter => "laughter".to_string(),
            Metric::Applause => "applause".to_string(),
            Metric::Keyword(label) => label.clone(),
        }
    }

    /// This metric's value for one record, if defined.
    pub fn value(&self, record: &SpeechRecord) -> Option<f64> {
        match self {
            Metric::Words => Some(record.number_of_words as f64),
            Metric::Characters => Some(record.number_of_characters as f64),
            Metric::AverageWordLength => record.average_word_length,
            Metric::Laughter => Some(record.laughter_count as f64),
            Metric::Applause => Some(record.applause_count as f64),
            Metric::Keyword(label) => record.keyword_count(label).map(|c| c as f64),
        }
    }
}

/// One plotted point
#[derive(Debug, Clone, Serialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: f64,
}

/// A labeled sequence of points, in table order
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<SeriesPoint>,
}

/// Build the series for one metric over a table.
pub fn series(records: &[SpeechRecord], metric: &Metric) -> Series {
    let points = records
        .iter()
        .filter_map(|record| {
            metric.value(record).map(|value| SeriesPoint {
                year: record.year,
                value,
            })
        })
        .collect();

    Series {
        label: metric.name(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(year: i32, words: usize, average: Option<f64>) -> SpeechRecord {
        SpeechRecord {
            speaker_name: "Speaker".to_string(),
            year,
            laughter_count: 0,
            applause_count: 0,
            number_of_words: words,
            number_of_characters: words * 5,
            average_word_length: average,
            keyword_counts: BTreeMap::from([("war".to_string(), 2)]),
        }
    }

    #[test]
    fn test_word_series_in_table_order() {
        let records = vec![record(2001, 100, Some(5.0)), record(2002, 200, Some(5.0))];
        let s = series(&records, &Metric::Words);

        assert_eq!(s.label, "words");
        assert_eq!(s.points.len(), 2);
        assert_eq!(s.points[0].year, 2001);
        assert_eq!(s.points[0].value, 100.0);
        assert_eq!(s.points[1].year, 2002);
    }

    #[test]
    fn test_undefined_average_rows_are_skipped() {
        let records = vec![record(2001, 100, Some(5.0)), record(2002, 0, None)];
        let s = series(&records, &Metric::AverageWordLength);
        assert_eq!(s.points.len(), 1);
        assert_eq!(s.points[0].year, 2001);
    }

    #[test]
    fn test_keyword_series() {
        let records = vec![record(2001, 100, Some(5.0))];
        let s = series(&records, &Metric::parse("war"));
        assert_eq!(s.points[0].value, 2.0);

        let missing = series(&records, &Metric::parse("unconfigured"));
        assert!(missing.points.is_empty());
    }
}
