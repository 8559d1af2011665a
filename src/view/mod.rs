//! Filter-and-rank
//!
//! Turns the loaded [`Table`] and the user's [`Selection`] into the
//! [`DerivedView`] that feeds all three dashboard outputs. The view is always
//! recomputed from scratch; nothing here holds state between calls.

pub mod figures;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::data::{Row, ScoreRange, Table};

/// Number of rows kept in the bar chart and table
pub const TOP_N: usize = 10;

/// Set of country names chosen by the user. Empty means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(HashSet<String>);

impl Selection {
    /// The empty selection, which selects every row
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, country: &str) -> bool {
        self.0.contains(country)
    }

    fn matches(&self, row: &Row) -> bool {
        self.is_empty() || self.contains(&row.country)
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Top rows of the active set plus the color bounds of that set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView {
    /// At most [`TOP_N`] rows, score descending, ties in table order
    pub rows: Vec<Row>,
    /// Score range of the filtered set before truncation
    pub color_range: Option<ScoreRange>,
}

impl DerivedView {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Rows of `table` matching `selection`, in table order
pub fn filter_rows<'a>(table: &'a Table, selection: &Selection) -> Vec<&'a Row> {
    table
        .rows()
        .iter()
        .filter(|row| selection.matches(row))
        .collect()
}

/// Filter `table` by `selection` and keep the [`TOP_N`] highest scores
pub fn compute_view(table: &Table, selection: &Selection) -> DerivedView {
    rank_rows(&filter_rows(table, selection))
}

/// Rank an already filtered row set: color range over all of it, then the
/// [`TOP_N`] highest scores
pub fn rank_rows(active: &[&Row]) -> DerivedView {
    let color_range = ScoreRange::of(active.iter().copied());

    let mut ranked = active.to_vec();
    // sort_by is stable, so equal scores keep table order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(TOP_N);

    DerivedView {
        rows: ranked.into_iter().cloned().collect(),
        color_range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ColumnConfig;

    fn table(rows: &[(&str, f64)]) -> Table {
        let mut csv = String::from("Country or region,Score\n");
        for (country, score) in rows {
            csv.push_str(&format!("{},{}\n", country, score));
        }
        Table::from_csv_str(&csv, &ColumnConfig::default()).unwrap()
    }

    fn countries(view: &DerivedView) -> Vec<&str> {
        view.rows.iter().map(|r| r.country.as_str()).collect()
    }

    #[test]
    fn test_empty_selection_sorts_all() {
        let t = table(&[("A", 7.5), ("B", 6.0), ("C", 8.1)]);
        let view = compute_view(&t, &Selection::all());

        assert_eq!(countries(&view), vec!["C", "A", "B"]);
        assert_eq!(
            view.color_range,
            Some(ScoreRange { min: 6.0, max: 8.1 })
        );
    }

    #[test]
    fn test_single_selection() {
        let t = table(&[("A", 7.5), ("B", 6.0), ("C", 8.1)]);
        let view = compute_view(&t, &Selection::from_iter(["B"]));

        assert_eq!(countries(&view), vec!["B"]);
        assert_eq!(view.rows[0].score, 6.0);
        assert_eq!(
            view.color_range,
            Some(ScoreRange { min: 6.0, max: 6.0 })
        );
    }

    #[test]
    fn test_unknown_country_yields_empty_view() {
        let t = table(&[("A", 7.5), ("B", 6.0), ("C", 8.1)]);
        let view = compute_view(&t, &Selection::from_iter(["Z"]));

        assert!(view.is_empty());
        assert_eq!(view.color_range, None);
    }

    #[test]
    fn test_unknown_names_contribute_nothing() {
        let t = table(&[("A", 7.5), ("B", 6.0), ("C", 8.1)]);
        let view = compute_view(&t, &Selection::from_iter(["Z", "A"]));

        assert_eq!(countries(&view), vec!["A"]);
    }

    #[test]
    fn test_truncates_to_top_ten() {
        let rows: Vec<(String, f64)> = (0..15).map(|i| (format!("C{}", i), i as f64)).collect();
        let refs: Vec<(&str, f64)> = rows.iter().map(|(c, s)| (c.as_str(), *s)).collect();
        let t = table(&refs);

        let view = compute_view(&t, &Selection::all());

        assert_eq!(view.len(), TOP_N);
        let scores: Vec<f64> = view.rows.iter().map(|r| r.score).collect();
        assert_eq!(
            scores,
            vec![14.0, 13.0, 12.0, 11.0, 10.0, 9.0, 8.0, 7.0, 6.0, 5.0]
        );
    }

    #[test]
    fn test_color_range_uses_untruncated_set() {
        let rows: Vec<(String, f64)> = (0..15).map(|i| (format!("C{}", i), i as f64)).collect();
        let refs: Vec<(&str, f64)> = rows.iter().map(|(c, s)| (c.as_str(), *s)).collect();
        let t = table(&refs);

        let view = compute_view(&t, &Selection::all());

        // The lowest row shown is 5.0, but the range spans all 15 rows
        assert_eq!(
            view.color_range,
            Some(ScoreRange { min: 0.0, max: 14.0 })
        );
    }

    #[test]
    fn test_ties_keep_table_order() {
        let t = table(&[("A", 5.0), ("B", 7.0), ("C", 5.0), ("D", 7.0)]);
        let view = compute_view(&t, &Selection::all());

        assert_eq!(countries(&view), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_empty_selection_equals_selecting_everything() {
        let t = table(&[("A", 7.5), ("B", 6.0), ("C", 8.1), ("D", 3.2)]);
        let everything: Selection = t.country_names().into_iter().collect();

        assert_eq!(
            compute_view(&t, &Selection::all()),
            compute_view(&t, &everything)
        );
    }

    #[test]
    fn test_compute_view_is_idempotent() {
        let t = table(&[("A", 7.5), ("B", 6.0), ("C", 8.1)]);
        let selection = Selection::from_iter(["A", "C"]);

        assert_eq!(compute_view(&t, &selection), compute_view(&t, &selection));
    }

    #[test]
    fn test_scores_non_increasing() {
        let t = table(&[
            ("A", 3.1),
            ("B", 9.2),
            ("C", 4.4),
            ("D", 9.2),
            ("E", 0.5),
            ("F", 6.6),
        ]);
        let view = compute_view(&t, &Selection::from_iter(["A", "B", "D", "E", "F"]));

        assert!(view.rows.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(view.len(), 5);
    }

    #[test]
    fn test_filter_rows_keeps_table_order() {
        let t = table(&[("A", 7.5), ("B", 6.0), ("C", 8.1)]);
        let active = filter_rows(&t, &Selection::from_iter(["C", "A"]));
        let names: Vec<&str> = active.iter().map(|r| r.country.as_str()).collect();

        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_rank_rows_matches_compute_view() {
        let t = table(&[("A", 7.5), ("B", 6.0), ("C", 8.1), ("D", 6.0)]);
        let selection = Selection::from_iter(["B", "C", "D"]);

        let active = filter_rows(&t, &selection);
        assert_eq!(rank_rows(&active), compute_view(&t, &selection));
    }

    #[test]
    fn test_selection_deserialize() {
        let selection: Selection = serde_json::from_str(r#"["Finland", "Norway"]"#).unwrap();
        assert_eq!(selection.len(), 2);
        assert!(selection.contains("Norway"));
    }
}
