use serde::{Deserialize, Serialize};

use crate::models::volume::Volume;
use crate::utils::constants::{EBOOK_LINK_BASE, NO_AUTHOR, NO_DESCRIPTION, NO_IMAGE};

/// A search result as shown on a card
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SearchedBook {
    pub book_id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub description: String,
    pub image: String,
}

impl SearchedBook {
    pub fn authors_line(&self) -> String {
        self.authors.join(", ")
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

impl From<Volume> for SearchedBook {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info;
        let authors = info.authors.unwrap_or_else(|| vec![NO_AUTHOR.to_string()]);
        let description = info
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());
        let image = info
            .image_links
            .and_then(|links| links.thumbnail)
            .unwrap_or_default();

        Self {
            book_id: volume.id,
            title: info.title,
            authors,
            description,
            image,
        }
    }
}

/// Variables of the `saveBook` mutation
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SaveBookInput {
    pub authors: Vec<String>,
    pub description: String,
    pub title: String,
    pub book_id: String,
    pub image: String,
    pub link: String,
}

impl From<&SearchedBook> for SaveBookInput {
    fn from(book: &SearchedBook) -> Self {
        let description = if book.description.is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            book.description.clone()
        };
        let image = if book.image.is_empty() {
            NO_IMAGE.to_string()
        } else {
            book.image.clone()
        };

        Self {
            authors: book.authors.clone(),
            description,
            title: book.title.clone(),
            book_id: book.book_id.clone(),
            image,
            link: ebook_link(&book.book_id),
        }
    }
}

pub fn ebook_link(book_id: &str) -> String {
    format!("{}{}", EBOOK_LINK_BASE, book_id)
}

/// A book stored on the user's account
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SavedBook {
    pub book_id: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl SavedBook {
    /// Cover URL, ignoring the "No Image" placeholder written on save
    pub fn cover(&self) -> Option<&str> {
        self.image
            .as_deref()
            .filter(|img| !img.is_empty() && *img != NO_IMAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::volume::VolumesResponse;
    use pretty_assertions::assert_eq;

    const RESPONSE: &str = r#"{
        "kind": "books#volumes",
        "totalItems": 2,
        "items": [
            {
                "id": "abc123",
                "volumeInfo": {
                    "title": "Star Wars: Heir to the Empire",
                    "authors": ["Timothy Zahn"],
                    "description": "Five years after the destruction of the Death Star.",
                    "imageLinks": { "thumbnail": "http://books.google.com/abc123.jpg" }
                }
            },
            {
                "id": "xyz789",
                "volumeInfo": { "title": "Anonymous Pamphlet" }
            }
        ]
    }"#;

    fn parse() -> Vec<SearchedBook> {
        let response: VolumesResponse = serde_json::from_str(RESPONSE).unwrap();
        response.items.unwrap_or_default().into_iter().map(SearchedBook::from).collect()
    }

    #[test]
    fn maps_full_volume() {
        let books = parse();
        assert_eq!(
            books[0],
            SearchedBook {
                book_id: "abc123".into(),
                title: "Star Wars: Heir to the Empire".into(),
                authors: vec!["Timothy Zahn".into()],
                description: "Five years after the destruction of the Death Star.".into(),
                image: "http://books.google.com/abc123.jpg".into(),
            }
        );
    }

    #[test]
    fn fills_placeholders_for_sparse_volume() {
        let books = parse();
        assert_eq!(books[1].authors, vec![NO_AUTHOR.to_string()]);
        assert_eq!(books[1].description, NO_DESCRIPTION);
        assert_eq!(books[1].image, "");
        assert!(!books[1].has_image());
    }

    #[test]
    fn missing_items_stays_absent() {
        let response: VolumesResponse =
            serde_json::from_str(r#"{"kind":"books#volumes","totalItems":0}"#).unwrap();
        assert_eq!(response.items, None);
        assert_eq!(response.total_items, 0);
    }

    #[test]
    fn empty_author_list_is_kept() {
        let mut volume = crate::test_support::volume("e1", "Untitled", &[]);
        volume.volume_info.authors = Some(vec![]);
        let book = SearchedBook::from(volume);
        assert!(book.authors.is_empty());
        assert_eq!(book.authors_line(), "");
    }

    #[test]
    fn save_input_derives_link_and_placeholders() {
        let book = SearchedBook {
            book_id: "abc123".into(),
            title: "Untitled".into(),
            authors: vec!["A".into(), "B".into()],
            description: String::new(),
            image: String::new(),
        };
        let input = SaveBookInput::from(&book);
        assert_eq!(input.link, "https://books.google.com/ebooks?id=abc123");
        assert_eq!(input.description, NO_DESCRIPTION);
        assert_eq!(input.image, NO_IMAGE);
        assert_eq!(book.authors_line(), "A, B");
    }

    #[test]
    fn save_input_serializes_camel_case() {
        let book = parse().remove(0);
        let json = serde_json::to_value(SaveBookInput::from(&book)).unwrap();
        assert_eq!(json["bookId"], "abc123");
        assert_eq!(json["authors"][0], "Timothy Zahn");
        assert!(json.get("book_id").is_none());
    }

    #[test]
    fn saved_book_cover_skips_placeholder() {
        let mut saved = SavedBook {
            book_id: "abc123".into(),
            authors: vec![],
            description: String::new(),
            title: "T".into(),
            image: Some(NO_IMAGE.into()),
            link: None,
        };
        assert_eq!(saved.cover(), None);
        saved.image = Some("http://img".into());
        assert_eq!(saved.cover(), Some("http://img"));
    }
}
