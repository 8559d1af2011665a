//! WebSocket Selection Events
//!
//! Each connection is a single event loop: the dashboard page sends a
//! `select` event whenever the dropdown changes and receives one `update`
//! carrying the bar chart, table and choropleth for that selection.
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8050/ws');
//!
//! ws.onopen = () => {
//!   ws.send(JSON.stringify({type: 'select', countries: ['Finland', 'Norway']}));
//! };
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'update') render(msg);
//! };
//! ```

mod handler;
mod messages;

pub use handler::websocket_handler;
pub use messages::{ClientMessage, ServerMessage};
