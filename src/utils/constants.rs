/// Google Books volumes endpoint, overridable with BOOKS_API_URL
pub const DEFAULT_BOOKS_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// GraphQL endpoint, overridable with GRAPHQL_URL
pub const DEFAULT_GRAPHQL_URL: &str = "/graphql";

// localStorage keys
pub const SAVED_BOOKS_KEY: &str = "saved_books";
pub const TOKEN_KEY: &str = "id_token";

// Display placeholders
pub const NO_AUTHOR: &str = "No author to display";
pub const NO_DESCRIPTION: &str = "No Description";
pub const NO_IMAGE: &str = "No Image";

pub const EBOOK_LINK_BASE: &str = "https://books.google.com/ebooks?id=";
