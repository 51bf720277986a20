//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{format_date, Collection, Entity, EntityDraft};
use crate::{
    error::AppResult,
    validation::{self, rule_error, Draft, FormInput, ALPHANUMERIC},
};

const NAME_MAX_LENGTH: usize = 100;

/// Author document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// "Family, First", or empty when either part is missing
    pub fn name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.family_name, self.first_name)
    }

    pub fn date_of_birth_formatted(&self) -> String {
        self.date_of_birth.as_ref().map(format_date).unwrap_or_default()
    }

    pub fn date_of_death_formatted(&self) -> String {
        self.date_of_death.as_ref().map(format_date).unwrap_or_default()
    }

    /// e.g. `Jan 3, 1892 - Sep 2, 1973`; empty when no date is known
    pub fn lifespan(&self) -> String {
        if self.date_of_birth.is_none() && self.date_of_death.is_none() {
            return String::new();
        }
        format!(
            "{} - {}",
            self.date_of_birth_formatted(),
            self.date_of_death_formatted()
        )
    }
}

impl Entity for Author {
    const COLLECTION: Collection = Collection::Authors;
    const SORT_KEY: Option<&'static str> = Some("family_name");
    const NOT_FOUND: &'static str = "Author not found";
    const LIST_URL: &'static str = "/catalog/authors";

    fn id(&self) -> Uuid {
        self.id
    }

    fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }
}

/// Raw author form body
#[derive(Debug, Default, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_death: String,
}

/// Sanitized author input
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct AuthorDraft {
    #[validate(
        length(min = 1, message = "First name must be specified."),
        regex(path = *ALPHANUMERIC, message = "First name has non-alphanumeric characters."),
        custom(function = "first_name_max_length")
    )]
    pub first_name: String,
    #[validate(
        length(min = 1, message = "Family name must be specified."),
        regex(path = *ALPHANUMERIC, message = "Family name has non-alphanumeric characters."),
        custom(function = "family_name_max_length")
    )]
    pub family_name: String,
    #[validate(custom(function = "valid_date_of_birth"))]
    pub date_of_birth: String,
    #[validate(custom(function = "valid_date_of_death"))]
    pub date_of_death: String,
}

fn first_name_max_length(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > NAME_MAX_LENGTH {
        return Err(rule_error("length", "First name must be at most 100 characters."));
    }
    Ok(())
}

fn family_name_max_length(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > NAME_MAX_LENGTH {
        return Err(rule_error("length", "Family name must be at most 100 characters."));
    }
    Ok(())
}

fn valid_date_of_birth(value: &str) -> Result<(), ValidationError> {
    if !validation::is_valid_optional_date(value) {
        return Err(rule_error("iso8601", "Invalid date of birth"));
    }
    Ok(())
}

fn valid_date_of_death(value: &str) -> Result<(), ValidationError> {
    if !validation::is_valid_optional_date(value) {
        return Err(rule_error("iso8601", "Invalid date of death"));
    }
    Ok(())
}

impl Draft for AuthorDraft {
    const FIELDS: &'static [&'static str] =
        &["first_name", "family_name", "date_of_birth", "date_of_death"];
}

impl FormInput for AuthorForm {
    type Draft = AuthorDraft;

    fn sanitize(self) -> AuthorDraft {
        AuthorDraft {
            first_name: validation::sanitize(&self.first_name),
            family_name: validation::sanitize(&self.family_name),
            date_of_birth: self.date_of_birth.trim().to_string(),
            date_of_death: self.date_of_death.trim().to_string(),
        }
    }
}

impl EntityDraft for AuthorDraft {
    type Entity = Author;

    fn into_entity(self, id: Uuid) -> AppResult<Author> {
        Ok(Author {
            id,
            date_of_birth: validation::parse_optional_date(&self.date_of_birth),
            date_of_death: validation::parse_optional_date(&self.date_of_death),
            first_name: self.first_name,
            family_name: self.family_name,
        })
    }
}

impl From<&Author> for AuthorDraft {
    fn from(author: &Author) -> Self {
        Self {
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: author.date_of_birth.map(|d| d.to_string()).unwrap_or_default(),
            date_of_death: author.date_of_death.map(|d| d.to_string()).unwrap_or_default(),
        }
    }
}
