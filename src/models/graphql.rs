use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Clone, Serialize, Debug)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Clone, Deserialize, Debug)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Clone, Deserialize, Debug)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T: DeserializeOwned> GraphQlResponse<T> {
    /// Any entry in `errors` fails the whole operation
    pub fn into_result(self) -> Result<T, AppError> {
        if !self.errors.is_empty() {
            return Err(AppError::GraphQl(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data
            .ok_or_else(|| AppError::Parse("GraphQL response without data".to_string()))
    }
}

// Operation payloads (one field under `data`)

#[derive(Clone, Deserialize, Debug)]
pub struct LoginData {
    pub login: crate::models::AuthPayload,
}

#[derive(Clone, Deserialize, Debug)]
pub struct AddUserData {
    #[serde(rename = "addUser")]
    pub add_user: crate::models::AuthPayload,
}

#[derive(Clone, Deserialize, Debug)]
pub struct MeData {
    pub me: crate::models::User,
}

#[derive(Clone, Deserialize, Debug)]
pub struct RemoveBookData {
    #[serde(rename = "removeBook")]
    pub remove_book: crate::models::User,
}
