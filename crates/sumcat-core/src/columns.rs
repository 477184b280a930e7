//! Column-name helpers shared by both passes

use std::collections::HashSet;
use std::hash::Hash;

/// Metadata columns derived from each file's path, always first in the master header
pub const METADATA_COLUMNS: [&str; 4] = ["age", "intervention", "iteration", "replication"];

/// Columns with this prefix are sorted and placed after all other columns
pub const FOBT_PREFIX: &str = "fobt_utd_year";

/// Columns with this prefix are sorted and placed last
pub const COL_PREFIX: &str = "col_utd_year";

/// The unified, ordered column list of the output table
///
/// Built once by the header pass and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterHeader {
    columns: Vec<String>,
}

impl MasterHeader {
    /// Build a master header from raw column names (metadata columns are prepended)
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let all = METADATA_COLUMNS
            .iter()
            .map(|name| name.to_string())
            .chain(names.into_iter().map(Into::into));

        Self {
            columns: order_columns(&dedup_preserving_order(all)),
        }
    }

    /// All column names, metadata columns included
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Columns after the four metadata columns
    pub fn data_columns(&self) -> &[String] {
        &self.columns[METADATA_COLUMNS.len()..]
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false: the metadata columns are always present
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Remove duplicates, keeping the first occurrence of each item in place
pub fn dedup_preserving_order<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen: HashSet<T> = HashSet::new();
    let mut result = Vec::new();

    for item in items {
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }

    result
}

/// All strings in `items` starting with `prefix`, in their original order
pub fn strings_with_prefix<'a, S: AsRef<str>>(prefix: &str, items: &'a [S]) -> Vec<&'a str> {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| s.starts_with(prefix))
        .collect()
}

/// Reorder deduplicated names: other columns (original order), then sorted
/// `fobt_utd_year*`, then sorted `col_utd_year*`
///
/// A name matching both prefixes lands in the `fobt_utd_year` group only.
pub fn order_columns(names: &[String]) -> Vec<String> {
    let mut fobt = strings_with_prefix(FOBT_PREFIX, names);
    let mut col: Vec<&str> = strings_with_prefix(COL_PREFIX, names)
        .into_iter()
        .filter(|name| !name.starts_with(FOBT_PREFIX))
        .collect();
    fobt.sort_unstable();
    col.sort_unstable();

    names
        .iter()
        .map(String::as_str)
        .filter(|name| !fobt.contains(name) && !col.contains(name))
        .chain(fobt.iter().copied())
        .chain(col.iter().copied())
        .map(str::to_string)
        .collect()
}

/// Split header fields the way a split on runs of tabs would
///
/// `fields` is the single-tab split of the line. Empty fields produced by
/// consecutive tabs are dropped, but an empty first or last field (from a
/// leading or trailing tab) is kept.
pub fn collapse_tab_runs<'a, I>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let fields: Vec<&str> = fields.into_iter().collect();
    let last = fields.len().saturating_sub(1);

    fields
        .iter()
        .enumerate()
        .filter(|(i, field)| !field.is_empty() || *i == 0 || *i == last)
        .map(|(_, field)| field.to_string())
        .collect()
}

/// Strip any CR or LF characters from a field
pub fn strip_line_breaks(field: &str) -> String {
    field.replace(['\r', '\n'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let result = dedup_preserving_order(names(&["b", "a", "b", "c", "a"]));
        assert_eq!(result, names(&["b", "a", "c"]));
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let once = dedup_preserving_order(names(&["x", "y", "x", "z", "y", "x"]));
        let twice = dedup_preserving_order(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strings_with_prefix() {
        let items = names(&["fobt_utd_year2", "age", "fobt_utd_year1", "col_utd_year1"]);
        assert_eq!(
            strings_with_prefix(FOBT_PREFIX, &items),
            vec!["fobt_utd_year2", "fobt_utd_year1"]
        );
        assert!(strings_with_prefix("missing", &items).is_empty());
    }

    #[test]
    fn test_order_columns_groups_prefixes() {
        let ordered = order_columns(&names(&[
            "col_utd_year2",
            "zeta",
            "fobt_utd_year3",
            "alpha",
            "col_utd_year1",
            "fobt_utd_year1",
        ]));

        assert_eq!(
            ordered,
            names(&[
                "zeta",
                "alpha",
                "fobt_utd_year1",
                "fobt_utd_year3",
                "col_utd_year1",
                "col_utd_year2",
            ])
        );
    }

    #[test]
    fn test_master_header_layout() {
        let header = MasterHeader::from_names(names(&[
            "fobt_utd_year_10",
            "deaths",
            "col_utd_year_5",
            "age",
            "deaths",
            "fobt_utd_year_02",
            "cost",
        ]));

        assert_eq!(&header.columns()[..4], &METADATA_COLUMNS);
        assert_eq!(
            header.data_columns(),
            &names(&[
                "deaths",
                "cost",
                "fobt_utd_year_02",
                "fobt_utd_year_10",
                "col_utd_year_5",
            ])[..]
        );

        let unique: HashSet<&String> = header.columns().iter().collect();
        assert_eq!(unique.len(), header.len());
    }

    #[test]
    fn test_master_header_ordering_law() {
        let header = MasterHeader::from_names(names(&[
            "col_utd_year_b",
            "x",
            "fobt_utd_year_b",
            "col_utd_year_a",
            "y",
            "fobt_utd_year_a",
        ]));
        let cols = header.columns();
        let pos = |p: &dyn Fn(&str) -> bool| -> Vec<usize> {
            cols.iter()
                .enumerate()
                .filter(|(_, c)| p(c))
                .map(|(i, _)| i)
                .collect()
        };

        let fobt = pos(&|c| c.starts_with(FOBT_PREFIX));
        let col = pos(&|c| c.starts_with(COL_PREFIX));
        let other = pos(&|c| !c.starts_with(FOBT_PREFIX) && !c.starts_with(COL_PREFIX));

        assert!(other.iter().max() < fobt.iter().min());
        assert!(fobt.iter().max() < col.iter().min());
        assert!(cols[fobt[0]] < cols[fobt[1]]);
        assert!(cols[col[0]] < cols[col[1]]);
    }

    #[test]
    fn test_collapse_tab_runs() {
        assert_eq!(collapse_tab_runs("a\t\t\tb".split('\t')), names(&["a", "b"]));
        assert_eq!(collapse_tab_runs("\t\ta".split('\t')), names(&["", "a"]));
        assert_eq!(collapse_tab_runs("a\t\t".split('\t')), names(&["a", ""]));
        assert_eq!(collapse_tab_runs("a".split('\t')), names(&["a"]));
    }

    #[test]
    fn test_strip_line_breaks() {
        assert_eq!(strip_line_breaks("deaths\r"), "deaths");
        assert_eq!(strip_line_breaks("a\r\nb"), "ab");
    }
}
