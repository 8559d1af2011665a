//! Figure builders
//!
//! Plotly figure JSON and table records for the three dashboard outputs.
//! The browser only draws what it is given; all data decisions are made here.

use serde::Serialize;

use super::DerivedView;
use crate::data::{Row, ScoreRange};

/// Labels and color scale shared by the figures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureSettings {
    /// Plotly named color scale for the choropleth
    pub color_scale: String,
    /// Colorbar title for the score
    pub score_label: String,
    /// Bar chart axis title for scores
    pub score_axis: String,
    /// Bar chart axis title for countries
    pub country_axis: String,
}

impl Default for FigureSettings {
    fn default() -> Self {
        Self {
            color_scale: "Viridis".to_string(),
            score_label: "Happiness Score".to_string(),
            score_axis: "Score".to_string(),
            country_axis: "Country or region".to_string(),
        }
    }
}

/// A Plotly figure: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

/// Plotly trace, tagged by its `type`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Choropleth {
        locations: Vec<String>,
        z: Vec<f64>,
        locationmode: String,
        colorscale: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        zmin: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        zmax: Option<f64>,
        colorbar: ColorBar,
        hovertemplate: String,
    },
    Bar {
        x: Vec<f64>,
        y: Vec<String>,
        orientation: String,
        hovertemplate: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FigureLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    pub margin: Margin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            l: 40,
            r: 20,
            t: 30,
            b: 30,
        }
    }
}

/// Column descriptor for the data table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableColumn {
    pub name: String,
    pub id: String,
}

/// Columns and records for the data table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableData {
    pub columns: Vec<TableColumn>,
    pub data: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// Choropleth of the active row set, colored over `range`
pub fn choropleth(active: &[&Row], range: Option<ScoreRange>, settings: &FigureSettings) -> Figure {
    Figure {
        data: vec![Trace::Choropleth {
            locations: active.iter().map(|r| r.country.clone()).collect(),
            z: active.iter().map(|r| r.score).collect(),
            locationmode: "country names".to_string(),
            colorscale: settings.color_scale.clone(),
            zmin: range.map(|r| r.min),
            zmax: range.map(|r| r.max),
            colorbar: ColorBar {
                title: Title {
                    text: settings.score_label.clone(),
                },
            },
            hovertemplate: format!("%{{location}}<br>{}=%{{z}}<extra></extra>", settings.score_label),
        }],
        layout: FigureLayout::default(),
    }
}

/// Horizontal bar chart, one bar per row of the view
pub fn bar_chart(view: &DerivedView, settings: &FigureSettings) -> Figure {
    Figure {
        data: vec![Trace::Bar {
            x: view.rows.iter().map(|r| r.score).collect(),
            y: view.rows.iter().map(|r| r.country.clone()).collect(),
            orientation: "h".to_string(),
            hovertemplate: format!(
                "{}=%{{x}}<br>{}=%{{y}}<extra></extra>",
                settings.score_axis, settings.country_axis
            ),
        }],
        layout: FigureLayout {
            xaxis: Some(Axis {
                title: Title {
                    text: settings.score_axis.clone(),
                },
            }),
            yaxis: Some(Axis {
                title: Title {
                    text: settings.country_axis.clone(),
                },
            }),
            margin: Margin::default(),
        },
    }
}

/// Table columns (every CSV column) for the data table
pub fn table_columns(columns: &[String]) -> Vec<TableColumn> {
    columns
        .iter()
        .map(|c| TableColumn {
            name: c.clone(),
            id: c.clone(),
        })
        .collect()
}

/// Table records, one per row of the view
pub fn table_data(columns: &[String], view: &DerivedView) -> TableData {
    TableData {
        columns: table_columns(columns),
        data: view.rows.iter().map(|r| r.record(columns)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ColumnConfig, Table};
    use crate::view::{compute_view, filter_rows, Selection};

    fn sample() -> Table {
        Table::from_csv_str(
            "Overall rank,Country or region,Score\n1,C,8.1\n2,A,7.5\n3,B,6.0",
            &ColumnConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_choropleth_json() {
        let table = sample();
        let selection = Selection::from_iter(["A", "B"]);
        let active = filter_rows(&table, &selection);
        let view = compute_view(&table, &selection);

        let fig = choropleth(&active, view.color_range, &FigureSettings::default());
        let json = serde_json::to_value(&fig).unwrap();
        let trace = &json["data"][0];

        assert_eq!(trace["type"], "choropleth");
        assert_eq!(trace["locationmode"], "country names");
        assert_eq!(trace["colorscale"], "Viridis");
        assert_eq!(trace["locations"], serde_json::json!(["A", "B"]));
        assert_eq!(trace["zmin"], 6.0);
        assert_eq!(trace["zmax"], 7.5);
        assert_eq!(trace["colorbar"]["title"]["text"], "Happiness Score");
    }

    #[test]
    fn test_choropleth_without_range_omits_bounds() {
        let fig = choropleth(&[], None, &FigureSettings::default());
        let json = serde_json::to_value(&fig).unwrap();

        assert!(json["data"][0].get("zmin").is_none());
        assert!(json["data"][0].get("zmax").is_none());
    }

    #[test]
    fn test_bar_chart_json() {
        let table = sample();
        let view = compute_view(&table, &Selection::all());

        let fig = bar_chart(&view, &FigureSettings::default());
        let json = serde_json::to_value(&fig).unwrap();
        let trace = &json["data"][0];

        assert_eq!(trace["type"], "bar");
        assert_eq!(trace["orientation"], "h");
        assert_eq!(trace["x"], serde_json::json!([8.1, 7.5, 6.0]));
        assert_eq!(trace["y"], serde_json::json!(["C", "A", "B"]));
        assert_eq!(json["layout"]["xaxis"]["title"]["text"], "Score");
    }

    #[test]
    fn test_table_data() {
        let table = sample();
        let view = compute_view(&table, &Selection::from_iter(["B", "C"]));

        let data = table_data(table.columns(), &view);

        assert_eq!(data.columns.len(), 3);
        assert_eq!(data.columns[1].id, "Country or region");
        assert_eq!(data.data.len(), 2);
        assert_eq!(data.data[0]["Country or region"], "C");
        assert_eq!(data.data[1]["Overall rank"], 3);
    }
}
