//! URL templating: placeholder parsing, substitution, and template line lookup.
mod placeholder;
mod resolve;
mod source;


pub use placeholder::{
    Placeholder, PlaceholderKind, contains_template_placeholders, placeholders, query_escape,
};
pub use resolve::{parse_and_validate_url, prepare_url, prepare_url_from_bytes};
pub use source::{TemplateLines, TemplateReader};
