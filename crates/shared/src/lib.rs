pub mod error;
pub mod favourites;
pub mod filter;
pub mod geo;
pub mod grades;
pub mod loader;
pub mod models;
pub mod selection;
pub mod store;
