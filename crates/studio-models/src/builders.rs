//! Builder patterns for complex types.

use crate::ids::ItemId;
use crate::item::{Item, VideoStatus};

/// Builder for creating Item instances with a fluent API.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
    id: Option<ItemId>,
    title: String,
    status: VideoStatus,
    scheduled_date: Option<String>,
    due_date: Option<String>,
    video_type: Option<String>,
    description: Option<String>,
    assigned_to: Option<String>,
}

impl ItemBuilder {
    /// Creates a new ItemBuilder with the required title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            status: VideoStatus::default(),
            scheduled_date: None,
            due_date: None,
            video_type: None,
            description: None,
            assigned_to: None,
        }
    }

    /// Sets a fixed ID (a random one is generated otherwise).
    pub fn id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the review status.
    pub fn status(mut self, status: VideoStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the scheduled publish date.
    pub fn scheduled(mut self, date: impl Into<String>) -> Self {
        self.scheduled_date = Some(date.into());
        self
    }

    /// Sets the due date.
    pub fn due(mut self, date: impl Into<String>) -> Self {
        self.due_date = Some(date.into());
        self
    }

    /// Sets the classification tag.
    pub fn video_type(mut self, video_type: impl Into<String>) -> Self {
        self.video_type = Some(video_type.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee.
    pub fn assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    /// Builds the Item.
    pub fn build(self) -> Item {
        Item {
            id: self.id.unwrap_or_default(),
            title: self.title,
            status: self.status,
            scheduled_date: self.scheduled_date,
            due_date: self.due_date,
            video_type: self.video_type,
            description: self.description,
            assigned_to: self.assigned_to,
        }
    }
}

impl Item {
    /// Creates a builder for a new item.
    pub fn builder(title: impl Into<String>) -> ItemBuilder {
        ItemBuilder::new(title)
    }
}
