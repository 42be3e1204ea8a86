// src/domain/comment/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeZone, Utc};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(Uuid);

impl CommentId {
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("'{value}' is not a valid comment id")))
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<CommentId> for Uuid {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

const MAX_BODY_CHARS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("comment cannot be empty".into()));
        }
        if value.chars().count() > MAX_BODY_CHARS {
            return Err(DomainError::Validation(format!(
                "comment cannot exceed {MAX_BODY_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CommentBody> for String {
    fn from(value: CommentBody) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            other => Err(DomainError::Validation(format!(
                "unknown reaction kind '{other}'"
            ))),
        }
    }
}

/// Keyset cursor for comment listings, ordered newest first with the id as a
/// tiebreak. Encoded as an opaque base64 token so callers cannot depend on
/// its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentListCursor {
    pub created_at: DateTime<Utc>,
    pub id: CommentId,
}

impl CommentListCursor {
    pub fn encode(&self) -> String {
        let raw = format!(
            "{}:{}",
            self.created_at.timestamp_micros(),
            self.id.as_uuid()
        );
        URL_SAFE_NO_PAD.encode(raw)
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor".into());

        let raw = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(raw).map_err(|_| invalid())?;
        let (micros, id) = raw.split_once(':').ok_or_else(invalid)?;

        let micros: i64 = micros.parse().map_err(|_| invalid())?;
        let created_at = Utc
            .timestamp_micros(micros)
            .single()
            .ok_or_else(invalid)?;
        let id = Uuid::parse_str(id).map(CommentId::new).map_err(|_| invalid())?;

        Ok(Self { created_at, id })
    }
}
