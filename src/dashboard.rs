//! Dashboard context
//!
//! [`Dashboard`] is built once at startup from the loaded table and handed to
//! every handler. Its [`Dashboard::update`] is the selection-changed callback:
//! one selection in, all three outputs out.

use serde::Serialize;
use std::sync::Arc;

use crate::data::{ColumnConfig, Table};
use crate::view::figures::{self, Figure, FigureSettings, TableColumn, TableData};
use crate::view::{filter_rows, rank_rows, Selection};

/// Page text and figure settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub title: String,
    pub filter_heading: String,
    pub bar_chart_heading: String,
    pub table_heading: String,
    pub figures: FigureSettings,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: "Happiness Score by Country or Region".to_string(),
            filter_heading: "Filter by Country".to_string(),
            bar_chart_heading: "Top 10 Countries or Regions Bar Chart".to_string(),
            table_heading: "Top 10 Countries or Regions Table".to_string(),
            figures: FigureSettings::default(),
        }
    }
}

impl DashboardSettings {
    /// Default settings with bar chart axes named after the data columns
    pub fn for_columns(columns: &ColumnConfig) -> Self {
        let mut settings = Self::default();
        settings.figures.score_axis = columns.score.clone();
        settings.figures.country_axis = columns.country.clone();
        settings
    }
}

/// Entry in the country dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Everything that changes when the selection changes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardUpdate {
    pub bar_chart: Figure,
    pub table: TableData,
    pub choropleth: Figure,
}

/// Static page structure plus the initial render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub filter_heading: String,
    pub bar_chart_heading: String,
    pub table_heading: String,
    pub options: Vec<DropdownOption>,
    pub table_columns: Vec<TableColumn>,
    pub initial: DashboardUpdate,
}

/// Application context: the immutable table and how to present it
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: Arc<Table>,
    settings: DashboardSettings,
}

impl Dashboard {
    pub fn new(table: Table, settings: DashboardSettings) -> Self {
        Self {
            table: Arc::new(table),
            settings,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// One dropdown option per distinct country
    pub fn options(&self) -> Vec<DropdownOption> {
        self.table
            .country_names()
            .into_iter()
            .map(|name| DropdownOption {
                label: name.to_string(),
                value: name.to_string(),
            })
            .collect()
    }

    /// Page layout with the empty-selection render
    pub fn layout(&self) -> DashboardLayout {
        DashboardLayout {
            title: self.settings.title.clone(),
            filter_heading: self.settings.filter_heading.clone(),
            bar_chart_heading: self.settings.bar_chart_heading.clone(),
            table_heading: self.settings.table_heading.clone(),
            options: self.options(),
            table_columns: figures::table_columns(self.table.columns()),
            initial: self.update(&Selection::all()),
        }
    }

    /// Recompute all outputs for `selection`
    pub fn update(&self, selection: &Selection) -> DashboardUpdate {
        let active = filter_rows(&self.table, selection);
        let view = rank_rows(&active);
        let fig = &self.settings.figures;

        tracing::debug!(
            selected = selection.len(),
            active = active.len(),
            shown = view.len(),
            "Recomputed dashboard view"
        );

        DashboardUpdate {
            bar_chart: figures::bar_chart(&view, fig),
            table: figures::table_data(self.table.columns(), &view),
            choropleth: figures::choropleth(&active, view.color_range, fig),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Dashboard {
        let table = Table::from_csv_str(
            "Country or region,Score,GDP\nA,7.5,1.1\nB,6.0,0.9\nC,8.1,1.4",
            &ColumnConfig::default(),
        )
        .unwrap();
        Dashboard::new(table, DashboardSettings::default())
    }

    #[test]
    fn test_options() {
        let options = dashboard().options();
        assert_eq!(options.len(), 3);
        assert_eq!(
            options[0],
            DropdownOption {
                label: "A".to_string(),
                value: "A".to_string()
            }
        );
    }

    #[test]
    fn test_layout_initial_is_unfiltered_update() {
        let d = dashboard();
        let layout = d.layout();

        assert_eq!(layout.title, "Happiness Score by Country or Region");
        assert_eq!(layout.table_columns.len(), 3);
        assert_eq!(layout.initial, d.update(&Selection::all()));
    }

    #[test]
    fn test_update_filtered() {
        let update = dashboard().update(&Selection::from_iter(["B", "A"]));
        let json = serde_json::to_value(&update).unwrap();

        assert_eq!(json["bar_chart"]["data"][0]["y"], serde_json::json!(["A", "B"]));
        assert_eq!(json["table"]["data"].as_array().unwrap().len(), 2);
        assert_eq!(json["choropleth"]["data"][0]["zmin"], 6.0);
        assert_eq!(json["choropleth"]["data"][0]["zmax"], 7.5);
    }

    #[test]
    fn test_settings_for_columns() {
        let settings = DashboardSettings::for_columns(&ColumnConfig::new("name", "happiness"));
        assert_eq!(settings.figures.score_axis, "happiness");
        assert_eq!(settings.figures.country_axis, "name");
    }
}
