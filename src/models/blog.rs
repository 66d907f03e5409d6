use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
}

/// A published article. Addressed by slug on the public site and by id in
/// the admin editor; the slug is unique across the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub quote: Quote,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlog {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub quote: Quote,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlog {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub images: Option<Vec<String>>,
    pub quote: Option<Quote>,
}

impl Blog {
    pub const COLLECTION: &'static str = "blogs";

    pub fn new(req: CreateBlog, author: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: req.title,
            slug: req.slug,
            content: req.content,
            excerpt: req.excerpt,
            featured_image: req.featured_image,
            images: req.images,
            quote: req.quote,
            author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge-in the fields present in an update request.
    /// Slug uniqueness is re-validated by the handler before this is stored.
    pub fn apply_update(&mut self, update: UpdateBlog) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(slug) = update.slug {
            self.slug = slug;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(excerpt) = update.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(featured_image) = update.featured_image {
            self.featured_image = featured_image;
        }
        if let Some(images) = update.images {
            self.images = images;
        }
        if let Some(quote) = update.quote {
            self.quote = quote;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_req() -> CreateBlog {
        CreateBlog {
            title: "Hello".into(),
            slug: "hello".into(),
            content: "Body".into(),
            excerpt: "Short".into(),
            featured_image: "/hero.jpg".into(),
            images: vec![],
            quote: Quote::default(),
        }
    }

    #[test]
    fn test_apply_update_merges() {
        let mut blog = Blog::new(create_req(), "admin".into());
        blog.apply_update(UpdateBlog {
            title: Some("Edited".into()),
            ..Default::default()
        });
        assert_eq!(blog.title, "Edited");
        assert_eq!(blog.slug, "hello");
        assert!(blog.updated_at >= blog.created_at);
    }

    #[test]
    fn test_serializes_camel_case() {
        let blog = Blog::new(create_req(), "admin".into());
        let doc = serde_json::to_value(&blog).unwrap();
        assert!(doc.get("featuredImage").is_some());
        assert!(doc.get("createdAt").is_some());
        assert!(doc.get("featured_image").is_none());
    }
}
