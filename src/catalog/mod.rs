/// Catalog layer - Pure domain models and services
///
/// Holds the catalog entities, filter and view state, the metadata toggles,
/// and the engine services (filter, sort, paginate, section layout, pull
/// commands). Nothing here performs I/O.
pub mod domain;
pub mod services;
