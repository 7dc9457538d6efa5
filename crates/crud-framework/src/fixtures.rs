//! Minimal entity shared by the crate's unit tests.

use crate::entity::{ActorEntity, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: EntityId,
    pub title: String,
    pub tag: String,
}

impl Note {
    pub fn new(id: EntityId, title: &str, tag: &str) -> Self {
        Self {
            id,
            title: title.into(),
            tag: tag.into(),
        }
    }
}

#[derive(Debug)]
pub struct NoteCreate {
    pub title: String,
    pub tag: String,
}

#[derive(Debug, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
}

#[derive(Debug)]
pub enum NoteFilter {
    Tag(String),
}

impl ActorEntity for Note {
    const RESOURCE: &'static str = "notes";
    type Create = NoteCreate;
    type Update = NoteUpdate;
    type Filter = NoteFilter;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_create_params(id: EntityId, params: NoteCreate) -> Self {
        Self {
            id,
            title: params.title,
            tag: params.tag,
        }
    }

    fn on_update(&mut self, update: NoteUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
    }

    fn matches(&self, filter: &NoteFilter) -> bool {
        match filter {
            NoteFilter::Tag(tag) => self.tag.eq_ignore_ascii_case(tag),
        }
    }
}
