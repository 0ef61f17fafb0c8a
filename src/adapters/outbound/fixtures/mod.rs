/// In-memory catalog data
mod fixture_catalog;

pub use fixture_catalog::FixtureCatalogRepository;
