// Adapters layer: concrete implementations for external systems (http, html).
// Local file storage lives under config::cli next to the CLI configuration.

pub mod html;
pub mod http;
