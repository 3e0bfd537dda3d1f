// Reference data: locating the CSV tables, resolving drifted headers,
// parsing list-valued cells. Loaded once at startup and shared read-only.

pub mod list_parse;
pub mod loader;
pub mod schema;

pub use loader::{load_dataset, DatasetError, SurveyDataset};
