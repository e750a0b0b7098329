pub mod api_client;
pub mod app;
pub mod boundary;
pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod errors;
pub mod models;
pub mod notification;
pub mod page;
pub mod pagination;
pub mod table;
pub mod terminal;

pub use api_client::{FetchRequest, RawResponse, RepositoryService};
pub use errors::SearchError;
pub use page::SearchPage;
pub use pagination::PageSize;
