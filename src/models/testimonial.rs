use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub content: String,
    pub image: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub image: String,
    pub rating: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonial {
    pub name: Option<String>,
    pub role: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub rating: Option<i32>,
}

impl Testimonial {
    pub const COLLECTION: &'static str = "testimonials";

    pub fn new(req: CreateTestimonial) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: req.name,
            role: req.role,
            content: req.content,
            image: req.image,
            rating: req.rating,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, update: UpdateTestimonial) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        self.updated_at = Utc::now();
    }
}
