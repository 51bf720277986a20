//! Genre model

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{Collection, Entity, EntityDraft};
use crate::{
    error::AppResult,
    validation::{self, rule_error, Draft, FormInput},
};

/// Genre document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
}

impl Entity for Genre {
    const COLLECTION: Collection = Collection::Genres;
    const SORT_KEY: Option<&'static str> = Some("name");
    const NOT_FOUND: &'static str = "Genre not found";
    const LIST_URL: &'static str = "/catalog/genres";

    fn id(&self) -> Uuid {
        self.id
    }

    fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GenreForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct GenreDraft {
    #[validate(
        length(min = 3, message = "Genre name must contain at least 3 characters"),
        custom(function = "name_within_schema_bounds")
    )]
    pub name: String,
}

/// Stored names are strictly longer than 3 and shorter than 100 characters
fn name_within_schema_bounds(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length <= 3 || length >= 100 {
        return Err(rule_error(
            "length",
            "The length of the name should be over 3 and below 100.",
        ));
    }
    Ok(())
}

impl Draft for GenreDraft {
    const FIELDS: &'static [&'static str] = &["name"];
}

impl FormInput for GenreForm {
    type Draft = GenreDraft;

    fn sanitize(self) -> GenreDraft {
        GenreDraft {
            name: validation::sanitize(&self.name),
        }
    }
}

impl EntityDraft for GenreDraft {
    type Entity = Genre;

    fn into_entity(self, id: Uuid) -> AppResult<Genre> {
        Ok(Genre { id, name: self.name })
    }
}

impl From<&Genre> for GenreDraft {
    fn from(genre: &Genre) -> Self {
        Self {
            name: genre.name.clone(),
        }
    }
}
