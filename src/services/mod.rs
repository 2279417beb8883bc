pub mod books_api;
pub mod graphql_client;
pub mod auth_service;
pub mod storage_service;

pub use books_api::{BookSearchApi, GoogleBooksClient};
pub use graphql_client::{BookshelfApi, GraphQlClient};
pub use auth_service::AuthService;
pub use storage_service::{LocalStorageService, SavedBookStore, TokenStore};
