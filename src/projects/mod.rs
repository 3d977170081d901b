pub mod catalog;
pub mod manager;
pub mod types;

pub use catalog::{filter_catalog, CatalogEntry, Category};
pub use manager::{CreatedProject, ProjectsManager};
pub use types::*;
