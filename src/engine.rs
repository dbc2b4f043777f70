//! The derived-view computations. Everything here is a pure function over
//! an entry snapshot: no I/O, no hidden clock, no state between calls. The
//! views recompute these on every relevant change; a linear scan over a
//! personal ledger is cheap enough to run unconditionally.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::model::{self, Bucket, DateRange, Entry};

/// Entries whose date falls inside the selected window, input order
/// preserved. `LastDays` compares absolute day distance from `today`,
/// inclusive, so it also admits dates up to `n` days in the future.
/// Entries whose date does not parse survive only [`DateRange::All`].
pub fn entries_in_range(entries: &[Entry], range: DateRange, today: NaiveDate) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| in_range(&entry.date, range, today))
        .cloned()
        .collect()
}

fn in_range(date: &str, range: DateRange, today: NaiveDate) -> bool {
    if range == DateRange::All {
        return true;
    }
    let Some(day) = model::entry_day(date) else {
        return false;
    };
    match range {
        DateRange::All => true,
        DateRange::LastDays(n) => (day - today).num_days().abs() <= n,
        DateRange::ThisMonth => day.year() == today.year() && day.month() == today.month(),
        DateRange::ThisYear => day.year() == today.year(),
    }
}

/// Rows for the table: the title must contain the search text
/// (case-insensitive) and the entry must sit in the selected bucket.
/// Relative order of the input is kept, no re-sort.
pub fn search_rows(entries: &[Entry], search: &str, bucket: Bucket) -> Vec<Entry> {
    let needle = search.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.category.bucket == bucket)
        .filter(|entry| entry.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Per-category sums within the selected bucket, largest first (ties break
/// on the name so the output is stable). Categories with no matching entry
/// are absent rather than present with zero.
pub fn category_totals(entries: &[Entry], bucket: Bucket) -> Vec<(String, f64)> {
    let mut sums: HashMap<String, f64> = HashMap::new();
    for entry in entries.iter().filter(|e| e.category.bucket == bucket) {
        *sums.entry(entry.category.name.clone()).or_insert(0.0) += entry.amount;
    }
    let mut totals: Vec<(String, f64)> = sums.into_iter().collect();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    totals
}

/// Per-bucket sums over the whole, date-unfiltered list. Feeds the header
/// balance strip, which stays constant while the table filters change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BucketTotals {
    pub expenses: f64,
    pub receivables: f64,
    pub payables: f64,
}

impl BucketTotals {
    pub fn of(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Expenses => self.expenses,
            Bucket::Receivables => self.receivables,
            Bucket::Payables => self.payables,
        }
    }
}

pub fn bucket_totals(entries: &[Entry]) -> BucketTotals {
    let mut totals = BucketTotals::default();
    for entry in entries {
        match entry.category.bucket {
            Bucket::Expenses => totals.expenses += entry.amount,
            Bucket::Receivables => totals.receivables += entry.amount,
            Bucket::Payables => totals.payables += entry.amount,
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    fn entry(id: i32, title: &str, amount: f64, category: &str, date: &str) -> Entry {
        Entry {
            id,
            title: title.to_string(),
            amount,
            category: Category::decode(category),
            date: date.to_string(),
        }
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry(1, "Groceries", 250.0, "Food", "2024-06-14"),
            entry(2, "Ram's Lunch", 120.0, "Food", "2024-06-10"),
            entry(3, "June Rent", 15000.0, "Rent", "2024-06-01"),
            entry(4, "Loan to Sita", 2000.0, "Loan:Receivables", "2024-06-12"),
            entry(5, "Electricity", 900.0, "Bills:Payables", "2024-05-28"),
            entry(6, "Old Shoes", 1500.0, "Shopping", "2023-11-02"),
            entry(7, "Mystery", 10.0, "Other", "someday"),
        ]
    }

    #[test]
    fn test_all_time_is_identity() {
        let entries = sample();
        assert_eq!(
            entries_in_range(&entries, DateRange::All, day("2024-06-15")),
            entries
        );
    }

    #[rstest]
    #[case(DateRange::All)]
    #[case(DateRange::LastDays(7))]
    #[case(DateRange::LastDays(30))]
    #[case(DateRange::ThisMonth)]
    #[case(DateRange::ThisYear)]
    fn test_range_filter_is_an_ordered_subset(#[case] range: DateRange) {
        let entries = sample();
        let today = day("2024-06-15");
        let kept = entries_in_range(&entries, range, today);
        let ids: Vec<i32> = kept.iter().map(|e| e.id).collect();
        let mut expected = ids.clone();
        expected.sort_unstable();
        assert_eq!(ids, expected, "order must match the input order");
        for e in &kept {
            assert!(entries.contains(e));
        }
    }

    #[rstest]
    #[case(DateRange::All)]
    #[case(DateRange::LastDays(7))]
    #[case(DateRange::ThisMonth)]
    #[case(DateRange::ThisYear)]
    fn test_range_filter_is_idempotent(#[case] range: DateRange) {
        let entries = sample();
        let today = day("2024-06-15");
        let once = entries_in_range(&entries, range, today);
        let twice = entries_in_range(&once, range, today);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_last_days_window_is_symmetric() {
        let entries = vec![
            entry(1, "Past", 10.0, "Food", "2024-06-10"),
            entry(2, "Future", 20.0, "Food", "2024-06-20"),
            entry(3, "Boundary", 30.0, "Food", "2024-06-22"),
            entry(4, "Too Old", 40.0, "Food", "2024-06-07"),
            entry(5, "Too Far", 50.0, "Food", "2024-06-23"),
        ];
        let kept = entries_in_range(&entries, DateRange::LastDays(7), day("2024-06-15"));
        let ids: Vec<i32> = kept.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[rstest]
    #[case("2024-06-30", true)]
    #[case("2024-06-01", true)]
    #[case("2024-05-31", false)]
    #[case("2024-07-01", false)]
    #[case("2023-06-15", false)]
    fn test_this_month(#[case] date: &str, #[case] kept: bool) {
        let entries = vec![entry(1, "x", 1.0, "Food", date)];
        let got = entries_in_range(&entries, DateRange::ThisMonth, day("2024-06-15"));
        assert_eq!(!got.is_empty(), kept);
    }

    #[rstest]
    #[case("2024-01-01", true)]
    #[case("2024-12-31", true)]
    #[case("2023-12-31", false)]
    #[case("2025-01-01", false)]
    fn test_this_year(#[case] date: &str, #[case] kept: bool) {
        let entries = vec![entry(1, "x", 1.0, "Food", date)];
        let got = entries_in_range(&entries, DateRange::ThisYear, day("2024-06-15"));
        assert_eq!(!got.is_empty(), kept);
    }

    #[rstest]
    #[case(DateRange::LastDays(7))]
    #[case(DateRange::LastDays(10_000))]
    #[case(DateRange::ThisMonth)]
    #[case(DateRange::ThisYear)]
    fn test_malformed_date_is_skipped_outside_all(#[case] range: DateRange) {
        let entries = vec![entry(7, "Mystery", 10.0, "Other", "someday")];
        assert!(entries_in_range(&entries, range, day("2024-06-15")).is_empty());
        assert_eq!(
            entries_in_range(&entries, DateRange::All, day("2024-06-15")).len(),
            1
        );
    }

    #[rstest]
    #[case("", &[1, 2, 3, 6, 7])]
    #[case("ram", &[2])]
    #[case("RENT", &[3])]
    #[case("groceries", &[1])]
    #[case("zzz", &[])]
    fn test_search_matches_title_case_insensitively(#[case] search: &str, #[case] want: &[i32]) {
        let rows = search_rows(&sample(), search, Bucket::Expenses);
        let ids: Vec<i32> = rows.iter().map(|e| e.id).collect();
        assert_eq!(ids, want);
    }

    #[test]
    fn test_rows_are_restricted_to_the_selected_bucket() {
        let entries = sample();
        let receivable_ids: Vec<i32> = search_rows(&entries, "", Bucket::Receivables)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(receivable_ids, vec![4]);
        // The tagged entry never leaks into the default bucket.
        assert!(!search_rows(&entries, "", Bucket::Expenses)
            .iter()
            .any(|e| e.id == 4));
    }

    #[test]
    fn test_single_entry_summary() {
        let entries = vec![entry(1, "Rent", 1000.0, "Rent", "2024-06-15")];
        let rows = search_rows(&entries, "", Bucket::Expenses);
        assert_eq!(rows, entries);
        assert_eq!(
            category_totals(&entries, Bucket::Expenses),
            vec![("Rent".to_string(), 1000.0)]
        );
    }

    #[test]
    fn test_category_totals_group_and_sort() {
        let totals = category_totals(&sample(), Bucket::Expenses);
        assert_eq!(
            totals,
            vec![
                ("Rent".to_string(), 15000.0),
                ("Shopping".to_string(), 1500.0),
                ("Food".to_string(), 370.0),
                ("Other".to_string(), 10.0),
            ]
        );
    }

    #[test]
    fn test_category_totals_omit_other_buckets() {
        let totals = category_totals(&sample(), Bucket::Expenses);
        assert!(totals.iter().all(|(name, _)| name != "Loan" && name != "Bills"));
    }

    #[test]
    fn test_category_totals_tie_break_on_name() {
        let entries = vec![
            entry(1, "b", 5.0, "Bravo", "2024-06-15"),
            entry(2, "a", 5.0, "Alpha", "2024-06-15"),
        ];
        assert_eq!(
            category_totals(&entries, Bucket::Expenses),
            vec![("Alpha".to_string(), 5.0), ("Bravo".to_string(), 5.0)]
        );
    }

    #[test]
    fn test_bucket_totals_cover_the_whole_list() {
        let totals = bucket_totals(&sample());
        assert_eq!(totals.expenses, 250.0 + 120.0 + 15000.0 + 1500.0 + 10.0);
        assert_eq!(totals.receivables, 2000.0);
        assert_eq!(totals.payables, 900.0);
    }

    #[rstest]
    fn test_category_totals_agree_with_bucket_totals(
        #[values(Bucket::Expenses, Bucket::Receivables, Bucket::Payables)] bucket: Bucket,
    ) {
        let entries = sample();
        let per_category: f64 = category_totals(&entries, bucket)
            .iter()
            .map(|(_, amount)| amount)
            .sum();
        assert_eq!(per_category, bucket_totals(&entries).of(bucket));
    }

    #[test]
    fn test_empty_input_yields_empty_views() {
        let today = day("2024-06-15");
        assert!(entries_in_range(&[], DateRange::LastDays(7), today).is_empty());
        assert!(search_rows(&[], "", Bucket::Expenses).is_empty());
        assert!(category_totals(&[], Bucket::Expenses).is_empty());
        for bucket in Bucket::iter() {
            assert_eq!(bucket_totals(&[]).of(bucket), 0.0);
        }
    }
}
