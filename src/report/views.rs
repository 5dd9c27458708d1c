//! Subset views over the speech table.

use std::collections::{BTreeMap, HashMap};

use crate::domain::SpeechRecord;

use super::series::Metric;
use super::Party;

/// Records delivered in or after `min_year`, table order preserved.
pub fn filter_by_min_year(records: &[SpeechRecord], min_year: i32) -> Vec<&SpeechRecord> {
    records.iter().filter(|r| r.year >= min_year).collect()
}

/// Group records by the speaker's party.
///
/// Speakers missing from the party table are left out of every group; the
/// table is reference data supplied by the caller, not something this layer
/// guesses at.
pub fn split_by_party<'a>(
    records: &'a [SpeechRecord],
    parties: &HashMap<String, Party>,
) -> BTreeMap<Party, Vec<&'a SpeechRecord>> {
    let mut groups: BTreeMap<Party, Vec<&SpeechRecord>> = BTreeMap::new();

    for record in records {
        if let Some(party) = parties.get(&record.speaker_name) {
            groups.entry(*party).or_default().push(record);
        }
    }

    groups
}

/// Mean of one metric per party. Parties with no records (or none where the
/// metric is defined) are absent from the result.
pub fn metric_mean_by_party(
    records: &[SpeechRecord],
    parties: &HashMap<String, Party>,
    metric: &Metric,
) -> BTreeMap<Party, f64> {
    let mut means = BTreeMap::new();

    for (party, group) in split_by_party(records, parties) {
        let values: Vec<f64> = group.iter().filter_map(|r| metric.value(r)).collect();
        if !values.is_empty() {
            means.insert(party, values.iter().sum::<f64>() / values.len() as f64);
        }
    }

    means
}

/// Mean count per party for every keyword label present in the table.
pub fn keyword_means_by_party(
    records: &[SpeechRecord],
    parties: &HashMap<String, Party>,
) -> BTreeMap<String, BTreeMap<Party, f64>> {
    let mut labels: Vec<String> = Vec::new();
    for record in records {
        for label in record.keyword_counts.keys() {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }
    }

    labels
        .into_iter()
        .map(|label| {
            let means = metric_mean_by_party(records, parties, &Metric::Keyword(label.clone()));
            (label, means)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(speaker: &str, year: i32, war_count: usize) -> SpeechRecord {
        SpeechRecord {
            speaker_name: speaker.to_string(),
            year,
            laughter_count: 0,
            applause_count: 0,
            number_of_words: 100,
            number_of_characters: 500,
            average_word_length: Some(5.0),
            keyword_counts: BTreeMap::from([("war".to_string(), war_count)]),
        }
    }

    fn parties() -> HashMap<String, Party> {
        HashMap::from([
            ("Barack Obama".to_string(), Party::Democratic),
            ("George W. Bush".to_string(), Party::Republican),
        ])
    }

    #[test]
    fn test_filter_by_min_year() {
        let records = vec![
            record("Barack Obama", 2009, 1),
            record("Barack Obama", 2012, 2),
        ];
        let filtered = filter_by_min_year(&records, 2010);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].year, 2012);
    }

    #[test]
    fn test_split_skips_unknown_speakers() {
        let records = vec![
            record("Barack Obama", 2009, 1),
            record("George W. Bush", 2005, 3),
            record("Unknown Speaker", 1950, 9),
        ];
        let groups = split_by_party(&records, &parties());

        assert_eq!(groups[&Party::Democratic].len(), 1);
        assert_eq!(groups[&Party::Republican].len(), 1);
        assert_eq!(groups.values().map(|g| g.len()).sum::<usize>(), 2);
    }

    #[test]
    fn test_metric_mean_by_party() {
        let records = vec![
            record("Barack Obama", 2009, 1),
            record("Barack Obama", 2010, 3),
            record("George W. Bush", 2005, 4),
        ];
        let means = metric_mean_by_party(&records, &parties(), &Metric::parse("war"));

        assert_eq!(means[&Party::Democratic], 2.0);
        assert_eq!(means[&Party::Republican], 4.0);
    }

    #[test]
    fn test_keyword_means_cover_all_labels() {
        let records = vec![record("Barack Obama", 2009, 2)];
        let means = keyword_means_by_party(&records, &parties());

        assert_eq!(means.len(), 1);
        assert_eq!(means["war"][&Party::Democratic], 2.0);
    }
}
