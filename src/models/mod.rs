pub mod volume;
pub mod book;
pub mod user;
pub mod graphql;

pub use volume::{ImageLinks, Volume, VolumeInfo, VolumesResponse};
pub use book::{ebook_link, SaveBookInput, SavedBook, SearchedBook};
pub use user::{AuthPayload, LoginVariables, Profile, SignupVariables, TokenClaims, User};
pub use graphql::{GraphQlError, GraphQlRequest, GraphQlResponse};
