use serde::{Deserialize, Serialize};

/// Google Books `/volumes` response; `items` is absent when nothing matched
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct VolumesResponse {
    #[serde(default, rename = "totalItems")]
    pub total_items: u64,
    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Volume {
    pub id: String,
    #[serde(default, rename = "volumeInfo")]
    pub volume_info: VolumeInfo,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "imageLinks")]
    pub image_links: Option<ImageLinks>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}
