use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::validation::ValidationHandler;
use catalog_core::{AggregateRoot, DomainError, DomainResult, Error, clock, string_id};

use crate::validator::Validator;

string_id! {
    /// Cast member identifier.
    pub struct CastMemberId;
}

/// Role a cast member plays in a production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CastMemberType {
    Actor,
    Director,
}

impl CastMemberType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CastMemberType::Actor => "ACTOR",
            CastMemberType::Director => "DIRECTOR",
        }
    }
}

impl core::fmt::Display for CastMemberType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CastMemberType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACTOR" => Ok(CastMemberType::Actor),
            "DIRECTOR" => Ok(CastMemberType::Director),
            _ => Err(DomainError::from_error(Error::new(format!(
                "'type' must be one of: ACTOR, DIRECTOR (got '{s}')"
            )))),
        }
    }
}

/// Aggregate root: CastMember.
///
/// Active iff `deleted_at` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastMember {
    id: CastMemberId,
    name: Option<String>,
    kind: Option<CastMemberType>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl CastMember {
    pub fn new_member(
        name: Option<String>,
        kind: Option<CastMemberType>,
        active: bool,
    ) -> DomainResult<Self> {
        let now = clock::now();
        let member = Self {
            id: CastMemberId::unique(),
            name,
            kind,
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        };
        member.self_validate()?;
        Ok(member)
    }

    /// Rebuild a cast member from stored state. No validation is performed.
    pub fn with(
        id: CastMemberId,
        name: impl Into<String>,
        kind: CastMemberType,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            kind: Some(kind),
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub(crate) fn name_value(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Always `Some` on a validated member.
    pub fn kind(&self) -> Option<CastMemberType> {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.updated_at = clock::now();
        self
    }

    /// Mark inactive. A second call keeps the first `deleted_at`.
    pub fn deactivate(&mut self) -> &mut Self {
        let now = clock::now();
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.updated_at = now;
        self
    }

    /// Replace name, type and active flag, then re-validate. On failure `self` is unchanged.
    pub fn update(
        &mut self,
        name: Option<String>,
        kind: Option<CastMemberType>,
        active: bool,
    ) -> DomainResult<&mut Self> {
        let mut next = self.clone();
        if active {
            next.activate();
        } else {
            next.deactivate();
        }
        next.name = name;
        next.kind = kind;
        next.updated_at = clock::now();
        next.self_validate()?;

        *self = next;
        Ok(self)
    }
}

impl AggregateRoot for CastMember {
    type Id = CastMemberId;

    const KIND: &'static str = "CastMember";

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        Validator::CastMember(self).validate(handler)
    }
}
