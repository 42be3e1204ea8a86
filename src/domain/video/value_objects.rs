// src/domain/video/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoId(Uuid);

impl VideoId {
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("'{value}' is not a valid video id")))
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<VideoId> for Uuid {
    fn from(value: VideoId) -> Self {
        value.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
