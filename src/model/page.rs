use crate::core::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageReferenceType {
    #[default]
    Api,
    Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageType {
    #[default]
    Markdown,
    Swagger,
    Asyncapi,
    Folder,
    Link,
    SystemFolder,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentationPage {
    pub id: String,
    pub reference_type: PageReferenceType,
    pub reference_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub page_type: PageType,
    pub content: String,
    pub parent_id: Option<String>,
    pub order: i32,
    pub published: bool,
    pub homepage: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DocumentationPage {
    pub fn new(id: impl Into<String>, api_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            reference_type: PageReferenceType::Api,
            reference_id: api_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.page_type, PageType::Folder | PageType::SystemFolder)
    }
}

impl Entity for DocumentationPage {
    type Key = String;
    const KIND: &'static str = "Page";

    fn key(&self) -> String {
        self.id.clone()
    }
}
