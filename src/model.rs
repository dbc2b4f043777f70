use chrono::NaiveDate;
use strum::{Display, EnumIter, EnumString};

/// Account bucket a ledger entry belongs to. The store encodes it as an
/// optional `:Tag` suffix on the category string; a missing tag means
/// [`Bucket::Expenses`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
pub enum Bucket {
    #[default]
    Expenses,
    Receivables,
    Payables,
}

const BUCKET_SEPARATOR: char = ':';

/// A category as the client works with it: the display name plus the bucket
/// decoded out of the wire string. Decoding happens once, at the API
/// boundary; nothing downstream re-parses the raw string.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub name: String,
    pub bucket: Bucket,
}

impl Category {
    pub fn new(name: impl Into<String>, bucket: Bucket) -> Self {
        Self {
            name: name.into(),
            bucket,
        }
    }

    /// Splits `"Food:Receivables"` into name and bucket. Total: a missing or
    /// unrecognized suffix leaves the whole string as the name under the
    /// default bucket.
    pub fn decode(raw: &str) -> Self {
        if let Some((name, tag)) = raw.rsplit_once(BUCKET_SEPARATOR) {
            if let Ok(bucket) = tag.parse::<Bucket>() {
                if !name.is_empty() {
                    return Self::new(name, bucket);
                }
            }
        }
        Self::new(raw, Bucket::default())
    }

    /// Inverse of [`Category::decode`] for writes: the default bucket is
    /// encoded as the bare name.
    pub fn encode(&self) -> String {
        match self.bucket {
            Bucket::Expenses => self.name.clone(),
            bucket => format!("{}{}{}", self.name, BUCKET_SEPARATOR, bucket),
        }
    }
}

/// One ledger record as fetched from the store. `date` keeps the raw text
/// the store sent; [`entry_day`] turns it into a calendar date where
/// possible.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub id: i32,
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date: String,
}

/// Date window the views are restricted to. `LastDays` is a symmetric
/// window: it keeps dates within `n` days of today in either direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateRange {
    #[default]
    All,
    LastDays(i64),
    ThisMonth,
    ThisYear,
}

impl DateRange {
    pub fn label(self) -> String {
        match self {
            DateRange::All => "All Time".to_string(),
            DateRange::LastDays(n) => format!("Last {} Days", n),
            DateRange::ThisMonth => "This Month".to_string(),
            DateRange::ThisYear => "This Year".to_string(),
        }
    }
}

/// The view-session filter selections. Ephemeral, client-only; never
/// touches stored data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters {
    pub search: String,
    pub range: DateRange,
    pub bucket: Bucket,
}

/// The calendar date an entry is attributed to. The store may append a
/// time-of-day suffix (`2024-06-15T10:30:00`); only the leading
/// `YYYY-MM-DD` is read. Malformed text yields `None`.
pub fn entry_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Food", "Food", Bucket::Expenses)]
    #[case("Food:Expenses", "Food", Bucket::Expenses)]
    #[case("Food:Receivables", "Food", Bucket::Receivables)]
    #[case("Loan:Payables", "Loan", Bucket::Payables)]
    #[case("Food:Banana", "Food:Banana", Bucket::Expenses)]
    #[case("Rent Due:Receivables", "Rent Due", Bucket::Receivables)]
    #[case("A:B:Payables", "A:B", Bucket::Payables)]
    #[case(":Payables", ":Payables", Bucket::Expenses)]
    #[case("", "", Bucket::Expenses)]
    #[case("Food:", "Food:", Bucket::Expenses)]
    fn test_decode(#[case] raw: &str, #[case] name: &str, #[case] bucket: Bucket) {
        assert_eq!(Category::decode(raw), Category::new(name, bucket));
    }

    #[rstest]
    #[case(Category::new("Food", Bucket::Expenses), "Food")]
    #[case(Category::new("Food", Bucket::Receivables), "Food:Receivables")]
    #[case(Category::new("Loan", Bucket::Payables), "Loan:Payables")]
    fn test_encode(#[case] category: Category, #[case] want: &str) {
        assert_eq!(category.encode(), want);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let category = Category::new("Shopping", Bucket::Payables);
        assert_eq!(Category::decode(&category.encode()), category);
    }

    #[rstest]
    #[case("2024-06-15", Some("2024-06-15"))]
    #[case("2024-06-15T10:30:00", Some("2024-06-15"))]
    #[case("2024-06-15 10:30:00", Some("2024-06-15"))]
    #[case("  2024-06-15  ", Some("2024-06-15"))]
    #[case("15/06/2024", None)]
    #[case("2024-13-01", None)]
    #[case("not a date", None)]
    #[case("", None)]
    fn test_entry_day(#[case] raw: &str, #[case] want: Option<&str>) {
        let want = want.map(|s| s.parse::<NaiveDate>().unwrap());
        assert_eq!(entry_day(raw), want);
    }

    #[test]
    fn test_range_labels() {
        assert_eq!(DateRange::All.label(), "All Time");
        assert_eq!(DateRange::LastDays(7).label(), "Last 7 Days");
        assert_eq!(DateRange::ThisMonth.label(), "This Month");
        assert_eq!(DateRange::ThisYear.label(), "This Year");
    }
}
