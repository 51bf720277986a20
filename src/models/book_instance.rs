//! Book instance (physical copy) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{format_date, parse_reference, Collection, Entity, EntityDraft, Reference};
use crate::{
    error::AppResult,
    validation::{self, rule_error, Draft, FormInput},
};

/// Circulation status of a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BookInstanceStatus {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

impl BookInstanceStatus {
    pub const ALL: [BookInstanceStatus; 4] = [
        BookInstanceStatus::Maintenance,
        BookInstanceStatus::Available,
        BookInstanceStatus::Loaned,
        BookInstanceStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookInstanceStatus::Available => "Available",
            BookInstanceStatus::Maintenance => "Maintenance",
            BookInstanceStatus::Loaned => "Loaned",
            BookInstanceStatus::Reserved => "Reserved",
        }
    }
}

impl std::fmt::Display for BookInstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookInstanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(BookInstanceStatus::Available),
            "Maintenance" => Ok(BookInstanceStatus::Maintenance),
            "Loaned" => Ok(BookInstanceStatus::Loaned),
            "Reserved" => Ok(BookInstanceStatus::Reserved),
            _ => Err(format!("Invalid book instance status: {}", s)),
        }
    }
}

/// BookInstance document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookInstance {
    pub id: Uuid,
    /// Book id
    pub book: Uuid,
    pub imprint: String,
    #[serde(default)]
    pub status: BookInstanceStatus,
    #[serde(default)]
    pub due_back: Option<NaiveDate>,
}

impl BookInstance {
    pub fn due_back_formatted(&self) -> String {
        self.due_back.as_ref().map(format_date).unwrap_or_default()
    }
}

impl Entity for BookInstance {
    const COLLECTION: Collection = Collection::BookInstances;
    const SORT_KEY: Option<&'static str> = None;
    const NOT_FOUND: &'static str = "Book copy not found";
    const LIST_URL: &'static str = "/catalog/bookinstances";

    fn id(&self) -> Uuid {
        self.id
    }

    fn url(&self) -> String {
        format!("/catalog/bookinstance/{}", self.id)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct BookInstanceForm {
    #[serde(default)]
    pub book: String,
    #[serde(default)]
    pub imprint: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub due_back: String,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct BookInstanceDraft {
    #[validate(length(min = 1, message = "Book must be specified"))]
    pub book: String,
    #[validate(length(min = 1, message = "Imprint must be specified"))]
    pub imprint: String,
    #[validate(custom(function = "valid_status"))]
    pub status: String,
    #[validate(custom(function = "valid_due_back"))]
    pub due_back: String,
}

impl BookInstanceDraft {
    /// Status to preselect; unknown or empty input falls back to the default
    pub fn status(&self) -> BookInstanceStatus {
        self.status.parse().unwrap_or_default()
    }
}

fn valid_status(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.parse::<BookInstanceStatus>().is_err() {
        return Err(rule_error("status", "Invalid status"));
    }
    Ok(())
}

fn valid_due_back(value: &str) -> Result<(), ValidationError> {
    if !validation::is_valid_optional_date(value) {
        return Err(rule_error("iso8601", "Invalid date"));
    }
    Ok(())
}

impl Draft for BookInstanceDraft {
    const FIELDS: &'static [&'static str] = &["book", "imprint", "status", "due_back"];
}

impl FormInput for BookInstanceForm {
    type Draft = BookInstanceDraft;

    fn sanitize(self) -> BookInstanceDraft {
        BookInstanceDraft {
            book: validation::sanitize(&self.book),
            imprint: validation::sanitize(&self.imprint),
            status: validation::sanitize(&self.status),
            due_back: self.due_back.trim().to_string(),
        }
    }
}

impl EntityDraft for BookInstanceDraft {
    type Entity = BookInstance;

    fn references(&self) -> Vec<Reference> {
        if self.book.is_empty() {
            return Vec::new();
        }
        vec![Reference {
            field: "book",
            collection: Collection::Books,
            raw: self.book.clone(),
        }]
    }

    fn into_entity(self, id: Uuid) -> AppResult<BookInstance> {
        Ok(BookInstance {
            id,
            book: parse_reference(&self.book)?,
            status: self.status(),
            due_back: validation::parse_optional_date(&self.due_back),
            imprint: self.imprint,
        })
    }
}

impl From<&BookInstance> for BookInstanceDraft {
    fn from(instance: &BookInstance) -> Self {
        Self {
            book: instance.book.to_string(),
            imprint: instance.imprint.clone(),
            status: instance.status.to_string(),
            due_back: instance.due_back.map(|d| d.to_string()).unwrap_or_default(),
        }
    }
}
