// ============================================================================
// GRAPHQL CLIENT - Book backend operations (stateless HTTP)
// ============================================================================
// Only the client side of the contract lives here; the token is passed in
// per call and sent as a bearer header.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::graphql::{AddUserData, LoginData, MeData, RemoveBookData};
use crate::models::{
    AuthPayload, GraphQlRequest, GraphQlResponse, LoginVariables, SaveBookInput,
    SignupVariables, User,
};

pub const SAVE_BOOK: &str = r#"
mutation saveBook($authors: [String], $description: String!, $title: String!, $bookId: String!, $image: String, $link: String) {
  saveBook(authors: $authors, description: $description, title: $title, bookId: $bookId, image: $image, link: $link) {
    _id
    username
    bookCount
  }
}"#;

pub const REMOVE_BOOK: &str = r#"
mutation removeBook($bookId: ID!) {
  removeBook(bookId: $bookId) {
    _id
    username
    email
    bookCount
    savedBooks { bookId authors description title image link }
  }
}"#;

pub const LOGIN_USER: &str = r#"
mutation login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    token
    user { _id username email }
  }
}"#;

pub const ADD_USER: &str = r#"
mutation addUser($username: String!, $email: String!, $password: String!) {
  addUser(username: $username, email: $email, password: $password) {
    token
    user { _id username email }
  }
}"#;

pub const QUERY_ME: &str = r#"
query me {
  me {
    _id
    username
    email
    bookCount
    savedBooks { bookId authors description title image link }
  }
}"#;

/// Book backend as seen by the view models
#[async_trait(?Send)]
pub trait BookshelfApi {
    /// Only success/failure matters to callers
    async fn save_book(&self, token: &str, input: &SaveBookInput) -> Result<(), AppError>;
    async fn remove_book(&self, token: &str, book_id: &str) -> Result<User, AppError>;
    async fn me(&self, token: &str) -> Result<User, AppError>;
    async fn login(&self, variables: &LoginVariables) -> Result<AuthPayload, AppError>;
    async fn add_user(&self, variables: &SignupVariables) -> Result<AuthPayload, AppError>;
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[derive(Clone)]
pub struct GraphQlClient {
    endpoint: String,
}

impl GraphQlClient {
    pub fn new() -> Self {
        Self::with_endpoint(&CONFIG.graphql_url)
    }

    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }

    async fn execute<V, T>(
        &self,
        query: &str,
        variables: V,
        token: Option<&str>,
    ) -> Result<T, AppError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = GraphQlRequest { query, variables };

        let mut builder = Request::post(&self.endpoint);
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer(token));
        }

        let response = builder.json(&body)?.send().await?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            return Err(AppError::Http { status, message });
        }

        response.json::<GraphQlResponse<T>>().await?.into_result()
    }
}

impl Default for GraphQlClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl BookshelfApi for GraphQlClient {
    async fn save_book(&self, token: &str, input: &SaveBookInput) -> Result<(), AppError> {
        log::info!("💾 [GRAPHQL] saveBook {}", input.book_id);
        let _: serde_json::Value = self.execute(SAVE_BOOK, input, Some(token)).await?;
        Ok(())
    }

    async fn remove_book(&self, token: &str, book_id: &str) -> Result<User, AppError> {
        log::info!("🗑️ [GRAPHQL] removeBook {}", book_id);
        let data: RemoveBookData = self
            .execute(REMOVE_BOOK, serde_json::json!({ "bookId": book_id }), Some(token))
            .await?;
        Ok(data.remove_book)
    }

    async fn me(&self, token: &str) -> Result<User, AppError> {
        let data: MeData = self
            .execute(QUERY_ME, serde_json::json!({}), Some(token))
            .await?;
        Ok(data.me)
    }

    async fn login(&self, variables: &LoginVariables) -> Result<AuthPayload, AppError> {
        log::info!("🔐 [GRAPHQL] login {}", variables.email);
        let data: LoginData = self.execute(LOGIN_USER, variables, None).await?;
        Ok(data.login)
    }

    async fn add_user(&self, variables: &SignupVariables) -> Result<AuthPayload, AppError> {
        log::info!("🔐 [GRAPHQL] addUser {}", variables.username);
        let data: AddUserData = self.execute(ADD_USER, variables, None).await?;
        Ok(data.add_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_value() {
        assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
    }

    #[test]
    fn save_mutation_declares_every_variable() {
        for var in ["$authors", "$description", "$title", "$bookId", "$image", "$link"] {
            assert!(SAVE_BOOK.contains(var), "missing {}", var);
        }
    }

    #[test]
    fn save_body_carries_input_as_variables() {
        let input = SaveBookInput {
            authors: vec!["Timothy Zahn".into()],
            description: "d".into(),
            title: "t".into(),
            book_id: "abc123".into(),
            image: "No Image".into(),
            link: "https://books.google.com/ebooks?id=abc123".into(),
        };
        let body = GraphQlRequest { query: SAVE_BOOK, variables: &input };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["variables"]["bookId"], "abc123");
        assert_eq!(json["variables"]["link"], "https://books.google.com/ebooks?id=abc123");
    }
}
