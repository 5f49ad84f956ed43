pub mod api; // HTTP boundary consumed by the SPA
pub mod config;
pub mod models;
pub mod service; // CRUD operations + referential integrity rules
pub mod store;
