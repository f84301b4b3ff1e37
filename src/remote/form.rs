//! Create/update payloads and their required-field checks
//!
//! Both record types are submitted as `multipart/form-data`. Validation runs
//! before a request is built, so a missing field or file never reaches the
//! network.

use std::path::Path;

use jiff::Timestamp;
use reqwest::multipart::{Form, Part};

use crate::entity::Post;
use crate::error::{PressError, Result};
use crate::types::{Category, DEFAULT_AUTHOR};

/// Whether a payload creates a new record or edits an existing one.
/// File parts are optional on update; omitting one keeps the server copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

/// A payload that can be checked and turned into a multipart body
pub trait ResourceForm: Send + 'static {
    /// Check required fields for the given mode
    fn validate(&self, mode: FormMode) -> Result<()>;

    /// Build the multipart body. Only called after `validate` succeeded.
    fn into_multipart(self) -> Result<Form>;
}

/// A file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Create an upload, guessing the content type from the file name
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    /// Read a local file into an upload
    pub async fn from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            PressError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read {}: {}", path.display(), e),
            ))
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }

    fn into_part(self) -> Result<Part> {
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)?;
        Ok(part)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn missing_fields_error(prompt: &str, missing: &[&str]) -> PressError {
    PressError::Validation(format!("{} (missing: {})", prompt, missing.join(", ")))
}

/// Fields submitted for a post
#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub content: String,
    /// Falls back to the default author when blank
    pub author: String,
    /// Stamped with the submission time when unset
    pub date: Option<Timestamp>,
    pub image: Option<Upload>,
}

impl PostForm {
    /// Prefill a form from an existing post, for editing.
    ///
    /// The date is left unset so the submission is stamped afresh.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            description: post.description.clone(),
            category: post.category.parse().ok(),
            content: post.content.clone(),
            author: post.author.clone(),
            date: None,
            image: None,
        }
    }
}

impl ResourceForm for PostForm {
    fn validate(&self, mode: FormMode) -> Result<()> {
        let mut missing = Vec::new();
        if is_blank(&self.title) {
            missing.push("title");
        }
        if self.category.is_none() {
            missing.push("category");
        }
        if is_blank(&self.content) {
            missing.push("content");
        }
        if is_blank(&self.description) {
            missing.push("description");
        }
        if mode == FormMode::Create && self.image.is_none() {
            missing.push("image");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing_fields_error(
                "Please fill out all fields and select an image",
                &missing,
            ))
        }
    }

    fn into_multipart(self) -> Result<Form> {
        let mut form = Form::new();
        if let Some(image) = self.image {
            form = form.part("image", image.into_part()?);
        }

        let category = self.category.map(|c| c.to_string()).unwrap_or_default();
        let date = self.date.unwrap_or_else(Timestamp::now);
        let author = if is_blank(&self.author) {
            DEFAULT_AUTHOR.to_string()
        } else {
            self.author
        };

        Ok(form
            .text("category", category)
            .text("title", self.title)
            .text("description", self.description)
            .text("date", date.to_string())
            .text("author", author)
            .text("content", self.content))
    }
}

/// Fields submitted for a publication
#[derive(Debug, Clone, Default)]
pub struct PublicationForm {
    pub name: String,
    pub description: String,
    pub pdf_file: Option<Upload>,
    pub image: Option<Upload>,
}

impl ResourceForm for PublicationForm {
    fn validate(&self, mode: FormMode) -> Result<()> {
        let mut missing = Vec::new();
        if is_blank(&self.name) {
            missing.push("name");
        }
        if is_blank(&self.description) {
            missing.push("description");
        }
        if mode == FormMode::Create {
            if self.pdf_file.is_none() {
                missing.push("pdfFile");
            }
            if self.image.is_none() {
                missing.push("image");
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing_fields_error(
                "Please fill in all fields and upload both files",
                &missing,
            ))
        }
    }

    fn into_multipart(self) -> Result<Form> {
        let mut form = Form::new()
            .text("name", self.name)
            .text("description", self.description);
        if let Some(pdf) = self.pdf_file {
            form = form.part("pdfFile", pdf.into_part()?);
        }
        if let Some(image) = self.image {
            form = form.part("image", image.into_part()?);
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_post() -> PostForm {
        PostForm {
            title: "Title".to_string(),
            description: "Short".to_string(),
            category: Some(Category::Food),
            content: "Body".to_string(),
            author: String::new(),
            date: None,
            image: Some(Upload::new("cover.png", b"png".to_vec())),
        }
    }

    #[test]
    fn test_upload_guesses_mime() {
        assert_eq!(Upload::new("a.pdf", vec![]).mime, "application/pdf");
        assert_eq!(Upload::new("a.png", vec![]).mime, "image/png");
        assert_eq!(
            Upload::new("noext", vec![]).mime,
            "application/octet-stream"
        );
    }

    #[test]
    fn test_post_form_complete_is_valid() {
        assert!(complete_post().validate(FormMode::Create).is_ok());
    }

    #[test]
    fn test_post_form_requires_image_on_create_only() {
        let mut form = complete_post();
        form.image = None;

        let err = form.validate(FormMode::Create).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("image"));

        assert!(form.validate(FormMode::Update).is_ok());
    }

    #[test]
    fn test_post_form_reports_every_missing_field() {
        let form = PostForm::default();
        let message = form.validate(FormMode::Create).unwrap_err().to_string();
        for field in ["title", "category", "content", "description", "image"] {
            assert!(message.contains(field), "missing {field} in: {message}");
        }
    }

    #[test]
    fn test_post_form_whitespace_counts_as_blank() {
        let mut form = complete_post();
        form.title = "   ".to_string();
        assert!(form.validate(FormMode::Update).is_err());
    }

    #[test]
    fn test_post_form_prefill_from_post() {
        let post = Post {
            id: "1".to_string(),
            title: "T".to_string(),
            category: "health".to_string(),
            author: "A".to_string(),
            date: "2024-07-24T10:00:00Z".to_string(),
            image: "uploads/x.png".to_string(),
            content: "C".to_string(),
            description: "D".to_string(),
        };
        let form = PostForm::from_post(&post);
        assert_eq!(form.category, Some(Category::Health));
        assert!(form.date.is_none());
        assert!(form.image.is_none());
        assert!(form.validate(FormMode::Update).is_ok());
    }

    #[test]
    fn test_publication_form_requires_both_files_on_create() {
        let form = PublicationForm {
            name: "Report".to_string(),
            description: "Yearly".to_string(),
            pdf_file: Some(Upload::new("r.pdf", vec![1])),
            image: None,
        };
        let err = form.validate(FormMode::Create).unwrap_err();
        assert!(err.to_string().contains("image"));
        assert!(!err.to_string().contains("pdfFile"));
        assert!(form.validate(FormMode::Update).is_ok());
    }

    #[test]
    fn test_publication_form_requires_text_on_update() {
        let form = PublicationForm {
            name: String::new(),
            description: "d".to_string(),
            pdf_file: None,
            image: None,
        };
        assert!(form.validate(FormMode::Update).is_err());
    }
}
