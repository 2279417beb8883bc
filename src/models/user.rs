use serde::{Deserialize, Serialize};

use crate::models::book::SavedBook;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub book_count: Option<u32>,
    #[serde(default)]
    pub saved_books: Vec<SavedBook>,
}

impl User {
    pub fn saved_count(&self) -> usize {
        self.book_count
            .map(|c| c as usize)
            .unwrap_or(self.saved_books.len())
    }
}

/// `login` / `addUser` result
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthPayload {
    pub token: String,
    #[serde(default)]
    pub user: User,
}

/// Identity carried in the token's `data` claim
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Profile {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenClaims {
    #[serde(default)]
    pub data: Profile,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginVariables {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignupVariables {
    pub username: String,
    pub email: String,
    pub password: String,
}
