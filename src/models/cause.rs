use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fundraising cause. `raised_amount` only ever grows; the progress
/// percentage is derived on the way out, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cause {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub content: String,
    pub image: String,
    pub goal_amount: f64,
    #[serde(default)]
    pub raised_amount: f64,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCause {
    pub title: String,
    pub description: String,
    pub content: String,
    pub image: String,
    pub goal_amount: f64,
    #[serde(default)]
    pub raised_amount: Option<f64>,
    pub category: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCause {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub goal_amount: Option<f64>,
    pub raised_amount: Option<f64>,
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// Response shape: the stored cause plus its derived progress bar value.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CauseView {
    #[serde(flatten)]
    pub cause: Cause,
    pub percent_raised: f64,
}

impl Cause {
    pub const COLLECTION: &'static str = "causes";

    pub fn new(req: CreateCause) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: req.title,
            description: req.description,
            content: req.content,
            image: req.image,
            goal_amount: req.goal_amount,
            raised_amount: req.raised_amount.unwrap_or(0.0),
            category: req.category,
            featured: req.featured,
            created_at: now,
            updated_at: now,
        }
    }

    /// Percentage of the goal reached, clamped to 100 so over-funded causes
    /// never overflow the progress bar.
    pub fn percent_raised(&self) -> f64 {
        if self.goal_amount <= 0.0 {
            return 0.0;
        }
        (self.raised_amount / self.goal_amount * 100.0).min(100.0)
    }

    pub fn apply_update(&mut self, update: UpdateCause) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(goal_amount) = update.goal_amount {
            self.goal_amount = goal_amount;
        }
        if let Some(raised_amount) = update.raised_amount {
            self.raised_amount = raised_amount;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        self.updated_at = Utc::now();
    }
}

impl From<Cause> for CauseView {
    fn from(cause: Cause) -> Self {
        let percent_raised = cause.percent_raised();
        Self { cause, percent_raised }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cause(goal: f64, raised: f64) -> Cause {
        Cause::new(CreateCause {
            title: "Medical Care".into(),
            description: "d".into(),
            content: "c".into(),
            image: "/img.png".into(),
            goal_amount: goal,
            raised_amount: Some(raised),
            category: "medical".into(),
            featured: false,
        })
    }

    #[test]
    fn test_percent_raised_derived_and_clamped() {
        assert_eq!(cause(50000.0, 0.0).percent_raised(), 0.0);
        assert_eq!(cause(50000.0, 25000.0).percent_raised(), 50.0);
        assert_eq!(cause(50000.0, 80000.0).percent_raised(), 100.0);
    }

    #[test]
    fn test_percent_not_stored() {
        let doc = serde_json::to_value(cause(100.0, 40.0)).unwrap();
        assert!(doc.get("percentRaised").is_none());

        let view = serde_json::to_value(CauseView::from(cause(100.0, 40.0))).unwrap();
        assert_eq!(view["percentRaised"], 40.0);
        assert_eq!(view["raisedAmount"], 40.0);
    }

    #[test]
    fn test_raised_amount_defaults_to_zero() {
        let c = Cause::new(CreateCause {
            title: "t".into(),
            description: "d".into(),
            content: "c".into(),
            image: "i".into(),
            goal_amount: 50000.0,
            raised_amount: None,
            category: "x".into(),
            featured: false,
        });
        assert_eq!(c.raised_amount, 0.0);
    }
}
