/*
 * core types
 */

use std::collections::HashMap;

// one candidate row from the published dataset, after parsing.
// read-only once constructed; optional fields are empty strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub id: String,
    pub name: String,
    pub party_name: String,
    pub post_label: String,
    // 1-based position on the party's list; ties are broken by input order
    pub list_position: u32,
    pub gender: String,
    pub email: String,
    pub twitter_user_id: String,
    pub facebook_page_url: String,
    pub facebook_personal_url: String,
    pub image_url: String,
}

// every candidate standing for one party in one electoral region,
// in party list order
pub type Bucket = Vec<CandidateRecord>;

// mapping from (party_name, post_label) to the candidates standing
// under that key. built once; only read after that
pub struct PartyRegionIndex {
    buckets: HashMap<(String, String), Bucket>,
}

impl PartyRegionIndex {
    pub fn build(records: Vec<CandidateRecord>) -> PartyRegionIndex {
        let mut buckets: HashMap<(String, String), Bucket> = HashMap::new();
        for record in records.into_iter() {
            let key = (record.party_name.clone(), record.post_label.clone());
            let bucket = buckets.entry(key).or_insert(Vec::new());
            bucket.push(record);
        }
        for bucket in buckets.values_mut() {
            // sort_by_key is stable, so candidates sharing a list position
            // stay in dataset order
            bucket.sort_by_key(|record| record.list_position);
        }
        PartyRegionIndex { buckets }
    }

    pub fn buckets(&self) -> &HashMap<(String, String), Bucket> {
        &self.buckets
    }

    pub fn bucket(&self, party: &str, region: &str) -> Option<&Bucket> {
        self.buckets.get(&(party.to_string(), region.to_string()))
    }

    // candidates standing for this party across every region
    pub fn party_total(&self, party: &str) -> usize {
        self.buckets
            .iter()
            .filter(|entry| (entry.0).0 == party)
            .map(|entry| entry.1.len())
            .sum()
    }

    pub fn total_candidates(&self) -> usize {
        self.buckets.values().map(|bucket| bucket.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, party: &str, post: &str, position: u32) -> CandidateRecord {
        CandidateRecord {
            id: id.to_string(),
            name: format!("Candidate {}", id),
            party_name: party.to_string(),
            post_label: post.to_string(),
            list_position: position,
            gender: String::new(),
            email: String::new(),
            twitter_user_id: String::new(),
            facebook_page_url: String::new(),
            facebook_personal_url: String::new(),
            image_url: String::new(),
        }
    }

    #[test]
    fn every_record_lands_in_exactly_one_bucket() {
        let index = PartyRegionIndex::build(vec![
            record("1", "Alpha", "North", 1),
            record("2", "Alpha", "South", 1),
            record("3", "Beta", "North", 1),
            record("4", "Beta", "North", 2),
        ]);
        assert_eq!(index.total_candidates(), 4);
        assert_eq!(index.buckets().len(), 3);
        assert_eq!(index.bucket("Alpha", "North").unwrap().len(), 1);
        assert_eq!(index.bucket("Beta", "North").unwrap().len(), 2);
    }

    #[test]
    fn buckets_sort_by_position_and_keep_input_order_on_ties() {
        let index = PartyRegionIndex::build(vec![
            record("a", "Alpha", "North", 2),
            record("b", "Alpha", "North", 1),
            record("c", "Alpha", "North", 1),
            record("d", "Alpha", "North", 2),
        ]);
        let bucket = index.bucket("Alpha", "North").unwrap();
        let ids: Vec<&str> = bucket.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a", "d"]);
        for window in bucket.windows(2) {
            assert!(window[0].list_position <= window[1].list_position);
        }
    }

    #[test]
    fn empty_input_builds_an_empty_index() {
        let index = PartyRegionIndex::build(Vec::new());
        assert_eq!(index.total_candidates(), 0);
        assert!(index.buckets().is_empty());
    }

    #[test]
    fn absent_pairs_have_no_bucket() {
        let index = PartyRegionIndex::build(vec![
            record("1", "Alpha", "North", 1),
            record("2", "Beta", "South", 1),
        ]);
        assert!(index.bucket("Alpha", "South").is_none());
        assert!(index.bucket("Beta", "North").is_none());
    }

    #[test]
    fn party_totals_aggregate_across_regions() {
        let index = PartyRegionIndex::build(vec![
            record("1", "Alpha", "North", 1),
            record("2", "Alpha", "South", 1),
            record("3", "Alpha", "South", 2),
            record("4", "Beta", "North", 1),
        ]);
        assert_eq!(index.party_total("Alpha"), 3);
        assert_eq!(index.party_total("Beta"), 1);
        assert_eq!(index.party_total("Gamma"), 0);
    }
}
