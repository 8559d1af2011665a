//! # Happiness Dashboard
//!
//! An interactive web dashboard for country happiness scores: a choropleth
//! map, a country filter, a top-10 bar chart and a data table, all kept in
//! sync by one selection-changed callback.
//!
//! ## Modules
//!
//! - [`data`]: CSV loading into an immutable table
//! - [`view`]: Filter-and-rank and figure building
//! - [`dashboard`]: Application context and the selection callback
//! - [`api`]: HTTP server with Axum
//! - [`websocket`]: Per-connection selection event loop
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use happiness_dashboard::data::{ColumnConfig, Table};
//! use happiness_dashboard::view::{compute_view, Selection};
//!
//! let table = Table::from_csv_str(
//!     "Country or region,Score\nA,7.5\nB,6.0\nC,8.1",
//!     &ColumnConfig::default(),
//! )
//! .unwrap();
//!
//! let view = compute_view(&table, &Selection::all());
//! let names: Vec<&str> = view.rows.iter().map(|r| r.country.as_str()).collect();
//! assert_eq!(names, ["C", "A", "B"]);
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod view;
pub mod websocket;

// Re-export top-level types for convenience
pub use data::{load_table, ColumnConfig, DataSource, LoadError, Row, ScoreRange, Table};

pub use view::{compute_view, filter_rows, rank_rows, DerivedView, Selection, TOP_N};

pub use dashboard::{Dashboard, DashboardLayout, DashboardSettings, DashboardUpdate};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use websocket::{websocket_handler, ClientMessage, ServerMessage};

pub use config::{Config, ConfigError, DataConfig, LoggingConfig, ServerConfig};
