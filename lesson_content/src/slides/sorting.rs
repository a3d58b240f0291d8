//! Sorting and bucket-match slides - drag items onto category targets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{find_duplicate, ContentError, ImageRef, ItemId, Narration, TargetId};

/// A category label linking items to the targets that accept them.
///
/// Categories compare by exact string equality; items and targets match
/// when their categories are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    /// Create a new category.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A draggable item belonging to one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl Item {
    /// Create a new item.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            label: label.into(),
            category: Category::new(category),
            image: None,
        }
    }

    /// Set the item's picture.
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(ImageRef::new(src));
        self
    }
}

/// A drop target accepting items of one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
    pub label: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl Target {
    /// Create a new target.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: TargetId::new(id),
            label: label.into(),
            category: Category::new(category),
            image: None,
        }
    }

    /// Set the target's picture.
    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(ImageRef::new(src));
        self
    }
}

/// A sorting activity: place every item into the category box it
/// belongs to, then check the whole arrangement at once.
///
/// Targets hold any number of items, so nothing stops the player from
/// piling everything into one box; correctness is judged only when the
/// arrangement is checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortSlide {
    pub title: String,

    /// Prompt shown above the items ("Drag each thing to its group").
    pub instruction: String,

    pub items: Vec<Item>,

    pub targets: Vec<Target>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<Narration>,
}

impl SortSlide {
    /// Create a new sorting slide.
    pub fn new(title: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            instruction: instruction.into(),
            items: Vec::new(),
            targets: Vec::new(),
            narration: None,
        }
    }

    /// Add an item to the pool.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Add a drop target.
    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    /// Attach narration.
    pub fn with_narration(mut self, narration: Narration) -> Self {
        self.narration = Some(narration);
        self
    }

    /// Look up an item by ID.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Look up a target by ID.
    pub fn target(&self, id: &TargetId) -> Option<&Target> {
        self.targets.iter().find(|target| &target.id == id)
    }

    /// Check this slide's invariants.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.items.is_empty() {
            return Err(ContentError::NotEnough {
                slide: self.title.clone(),
                what: "items",
                expected: 1,
                found: 0,
            });
        }
        if self.targets.len() < 2 {
            return Err(ContentError::NotEnough {
                slide: self.title.clone(),
                what: "targets",
                expected: 2,
                found: self.targets.len(),
            });
        }

        if let Some(id) = find_duplicate(self.items.iter().map(|item| item.id.as_str())) {
            return Err(ContentError::DuplicateId {
                slide: self.title.clone(),
                what: "item",
                id: id.to_string(),
            });
        }
        if let Some(id) = find_duplicate(self.targets.iter().map(|target| target.id.as_str())) {
            return Err(ContentError::DuplicateId {
                slide: self.title.clone(),
                what: "target",
                id: id.to_string(),
            });
        }

        // Every item must have somewhere correct to go.
        for item in &self.items {
            let accepted = self
                .targets
                .iter()
                .any(|target| target.category == item.category);
            if !accepted {
                return Err(ContentError::UnmatchedCategory {
                    slide: self.title.clone(),
                    item: item.id.clone(),
                    category: item.category.clone(),
                });
            }
        }

        Ok(())
    }
}

/// A bucket-match activity: drop each item onto its single matching
/// bucket. Wrong drops bounce back immediately and each bucket holds at
/// most one item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketMatchSlide {
    pub title: String,

    pub instruction: String,

    pub items: Vec<Item>,

    pub buckets: Vec<Target>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<Narration>,
}

impl BucketMatchSlide {
    /// Create a new bucket-match slide.
    pub fn new(title: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            instruction: instruction.into(),
            items: Vec::new(),
            buckets: Vec::new(),
            narration: None,
        }
    }

    /// Add an item to the pool.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Add a bucket.
    pub fn with_bucket(mut self, bucket: Target) -> Self {
        self.buckets.push(bucket);
        self
    }

    /// Attach narration.
    pub fn with_narration(mut self, narration: Narration) -> Self {
        self.narration = Some(narration);
        self
    }

    /// Look up an item by ID.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Look up a bucket by ID.
    pub fn bucket(&self, id: &TargetId) -> Option<&Target> {
        self.buckets.iter().find(|bucket| &bucket.id == id)
    }

    /// Check this slide's invariants.
    ///
    /// Beyond the sorting rules, every item must be able to land in its
    /// own bucket at the same time: one bucket per item overall, and per
    /// category no more items than buckets accepting it.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.items.is_empty() {
            return Err(ContentError::NotEnough {
                slide: self.title.clone(),
                what: "items",
                expected: 1,
                found: 0,
            });
        }
        if self.buckets.len() < 2 {
            return Err(ContentError::NotEnough {
                slide: self.title.clone(),
                what: "buckets",
                expected: 2,
                found: self.buckets.len(),
            });
        }

        if let Some(id) = find_duplicate(self.items.iter().map(|item| item.id.as_str())) {
            return Err(ContentError::DuplicateId {
                slide: self.title.clone(),
                what: "item",
                id: id.to_string(),
            });
        }
        if let Some(id) = find_duplicate(self.buckets.iter().map(|bucket| bucket.id.as_str())) {
            return Err(ContentError::DuplicateId {
                slide: self.title.clone(),
                what: "bucket",
                id: id.to_string(),
            });
        }

        for item in &self.items {
            let accepted = self
                .buckets
                .iter()
                .any(|bucket| bucket.category == item.category);
            if !accepted {
                return Err(ContentError::UnmatchedCategory {
                    slide: self.title.clone(),
                    item: item.id.clone(),
                    category: item.category.clone(),
                });
            }
        }

        if self.items.len() > self.buckets.len() {
            return Err(ContentError::NotEnoughBuckets {
                slide: self.title.clone(),
                items: self.items.len(),
                buckets: self.buckets.len(),
            });
        }

        let mut items_per_category: HashMap<&Category, usize> = HashMap::new();
        for item in &self.items {
            *items_per_category.entry(&item.category).or_default() += 1;
        }
        for (category, item_count) in items_per_category {
            let bucket_count = self
                .buckets
                .iter()
                .filter(|bucket| &bucket.category == category)
                .count();
            if item_count > bucket_count {
                return Err(ContentError::CategoryOverflow {
                    slide: self.title.clone(),
                    category: category.clone(),
                    items: item_count,
                    buckets: bucket_count,
                });
            }
        }

        Ok(())
    }
}
