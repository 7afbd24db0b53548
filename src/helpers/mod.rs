//! Helper functions for the built-in renderers
//!
//! URL generation, date formatting and HTML escaping shared by the HTML
//! renderer and the generator.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
