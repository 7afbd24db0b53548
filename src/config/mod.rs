//! Configuration module

mod site;

pub use site::OutputFormat;
pub use site::SiteConfig;
