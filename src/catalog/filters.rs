//! Subject vocabulary, filtering, sorting and pagination
//!
//! Everything here is a pure function of its inputs; the catalog recomputes
//! the derived views on every read instead of caching them.

use crate::constants::{ALL_SUBJECTS, PAGE_SIZE};
use crate::types::{SortOrder, ZineRecord};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Sorted unique subjects across `Subject` and `Subject 2`, prefixed with "All".
///
/// Returns an empty list while records are not loaded yet.
pub fn subject_vocabulary(records: Option<&[ZineRecord]>, excluded: &[String]) -> Vec<String> {
    let Some(records) = records else {
        return Vec::new();
    };

    let subjects: BTreeSet<&str> = records
        .iter()
        .flat_map(ZineRecord::subjects)
        .filter(|s| !excluded.iter().any(|e| e.as_str() == *s))
        .collect();

    std::iter::once(ALL_SUBJECTS.to_string())
        .chain(subjects.into_iter().map(str::to_string))
        .collect()
}

/// Records matching `subject` (or all of them), ordered by `sort`.
///
/// The returned references keep source order for `SortOrder::Default` and for
/// titles that compare equal.
pub fn filter_and_sort<'a>(
    records: Option<&'a [ZineRecord]>,
    subject: &str,
    sort: SortOrder,
) -> Vec<&'a ZineRecord> {
    let Some(records) = records else {
        return Vec::new();
    };

    let mut result: Vec<&ZineRecord> = records
        .iter()
        .filter(|z| subject == ALL_SUBJECTS || z.has_subject(subject))
        .collect();

    match sort {
        SortOrder::Default => {}
        SortOrder::Asc => result.sort_by_cached_key(|z| title_key(z)),
        SortOrder::Desc => result.sort_by_cached_key(|z| Reverse(title_key(z))),
    }

    result
}

fn title_key(record: &ZineRecord) -> String {
    record.title().unwrap_or_default().to_lowercase()
}

/// Number of pages for `count` records; never less than one.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE).max(1)
}

/// Records on 1-based `page`. Out-of-range pages yield an empty slice.
pub fn page_slice<'s, T>(ordered: &'s [T], page: usize) -> &'s [T] {
    let Some(start) = page.checked_sub(1).map(|p| p * PAGE_SIZE) else {
        return &[];
    };
    if start >= ordered.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(ordered.len());
    &ordered[start..end]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn zine(id: &str, title: &str, subject: &str, subject_2: &str) -> ZineRecord {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        ZineRecord {
            identifier: id.to_string(),
            title: opt(title),
            subject: opt(subject),
            subject_2: opt(subject_2),
            ..Default::default()
        }
    }

    fn ids(list: &[&ZineRecord]) -> Vec<String> {
        list.iter().map(|z| z.identifier.clone()).collect()
    }

    fn denylist() -> Vec<String> {
        crate::constants::DEFAULT_EXCLUDED_SUBJECTS
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn vocabulary_is_empty_before_load() {
        assert!(subject_vocabulary(None, &denylist()).is_empty());
    }

    #[test]
    fn vocabulary_degrades_to_all_without_data() {
        assert_eq!(subject_vocabulary(Some(&[][..]), &denylist()), vec!["All"]);
    }

    #[test]
    fn vocabulary_is_sorted_unique_and_excludes_denylist() {
        let records = vec![
            zine("1", "A", "Housing", "Art"),
            zine("2", "B", "Environmentalism and Nature", "Housing"),
            zine("3", "C", "", "Political - Police"),
            zine("4", "D", "Activism", ""),
        ];
        let vocab = subject_vocabulary(Some(records.as_slice()), &denylist());
        // "Activism" sorts before "All" but the sentinel still leads
        assert_eq!(vocab, vec!["All", "Activism", "Art", "Housing"]);
    }

    #[test]
    fn denylist_is_configurable() {
        let records = vec![zine("1", "A", "Political - Police", "Art")];
        let vocab = subject_vocabulary(Some(records.as_slice()), &["Art".to_string()]);
        assert_eq!(vocab, vec!["All", "Political - Police"]);
    }

    #[test]
    fn filter_matches_either_subject_exactly() {
        let records = vec![
            zine("1", "A", "Housing", ""),
            zine("2", "B", "Art", "Housing"),
            zine("3", "C", "housing", ""),
            zine("4", "D", "Art", ""),
        ];
        let result = filter_and_sort(Some(records.as_slice()), "Housing", SortOrder::Default);
        assert_eq!(ids(&result), vec!["1", "2"]);
        assert!(result.iter().all(|z| z.has_subject("Housing")));

        let all = filter_and_sort(Some(records.as_slice()), ALL_SUBJECTS, SortOrder::Default);
        assert_eq!(ids(&all), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn missing_records_filter_to_empty() {
        assert!(filter_and_sort(None, ALL_SUBJECTS, SortOrder::Asc).is_empty());
    }

    #[test]
    fn asc_and_desc_are_reversed_and_stable() {
        let records = vec![
            zine("1", "banana", "", ""),
            zine("2", "Apple", "", ""),
            zine("3", "cherry", "", ""),
            zine("4", "APPLE", "", ""),
            zine("5", "", "", ""),
        ];
        let asc = filter_and_sort(Some(records.as_slice()), ALL_SUBJECTS, SortOrder::Asc);
        assert_eq!(ids(&asc), vec!["5", "2", "4", "1", "3"]);

        let desc = filter_and_sort(Some(records.as_slice()), ALL_SUBJECTS, SortOrder::Desc);
        assert_eq!(ids(&desc), vec!["3", "1", "2", "4", "5"]);
    }

    #[test]
    fn filter_and_sort_is_pure() {
        let records = vec![zine("1", "b", "X", ""), zine("2", "a", "X", "")];
        let before = records.clone();
        let first = ids(&filter_and_sort(Some(records.as_slice()), "X", SortOrder::Asc));
        let second = ids(&filter_and_sort(Some(records.as_slice()), "X", SortOrder::Asc));
        assert_eq!(first, second);
        assert_eq!(records, before);
    }

    #[test]
    fn pagination_of_one_hundred_records() {
        let list: Vec<usize> = (0..100).collect();
        assert_eq!(total_pages(list.len()), 5);
        assert_eq!(page_slice(&list, 1).len(), 24);
        assert_eq!(page_slice(&list, 5), &[96, 97, 98, 99]);
        assert!(page_slice(&list, 6).is_empty());
        assert!(page_slice(&list, 0).is_empty());
    }

    #[test]
    fn empty_list_still_has_one_page() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(24), 1);
        assert_eq!(total_pages(25), 2);
    }
}
