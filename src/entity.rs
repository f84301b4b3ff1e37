//! Entity traits and the two record shapes served by the backend
//!
//! `Entity` is everything the list machinery (filtering, paging,
//! reconciliation) needs to know about a record. `Resource` adds what the
//! remote store needs: where the collection lives and how it is submitted.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::remote::form::{PostForm, PublicationForm, ResourceForm};

/// A record that can be held in a client-side list
pub trait Entity: Clone + Send + Sync + 'static {
    /// Backend-assigned identifier, unique within a collection
    fn id(&self) -> &str;

    /// Text matched by the search box (title for posts, name for publications)
    fn title(&self) -> &str;

    /// Category name, for entities that carry one
    fn category(&self) -> Option<&str> {
        None
    }
}

/// An entity family addressed by a fixed path under `/api/`
pub trait Resource: Entity + Serialize + DeserializeOwned {
    /// Path segment under `/api/` (e.g. "posts")
    const PATH: &'static str;

    /// Singular label used in notifications (e.g. "post")
    const LABEL: &'static str;

    /// Payload submitted on create and update
    type Form: ResourceForm;
}

/// Blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub author: String,
    /// ISO 8601 timestamp as sent by the backend
    #[serde(default)]
    pub date: String,
    /// Backend-relative image path
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub description: String,
}

impl Entity for Post {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl Resource for Post {
    const PATH: &'static str = "posts";
    const LABEL: &'static str = "post";
    type Form = PostForm;
}

/// Downloadable publication (PDF document with a cover image)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "pdfFile", default)]
    pub pdf_file: String,
}

impl Entity for Publication {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.name
    }
}

impl Resource for Publication {
    const PATH: &'static str = "publications";
    const LABEL: &'static str = "publication";
    type Form = PublicationForm;
}
