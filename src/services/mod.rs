pub mod browse;
pub mod catalog;
pub mod features;
pub mod reasons;
pub mod recommendations;
pub mod similarity;
pub mod text;

pub use catalog::{load_catalog, CatalogSource, CsvCatalog};
pub use features::{extract_features, FeatureSet};
pub use reasons::explain_match;
pub use recommendations::{recommend, similar_movies, try_recommend};
pub use similarity::similarity;
pub use text::tokenize;
