//! Cast member use cases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{
    AggregateRoot, DomainError, Notification, Pagination, SearchQuery, ValidationHandler,
};
use catalog_domain::{CastMember, CastMemberId, CastMemberType};

use crate::error::UseCaseResult;
use crate::gateway::CastMemberGateway;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCastMemberCommand {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<CastMemberType>,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCastMemberCommand {
    pub id: CastMemberId,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<CastMemberType>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMemberOutput {
    pub id: CastMemberId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<CastMemberType>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&CastMember> for CastMemberOutput {
    fn from(member: &CastMember) -> Self {
        Self {
            id: member.id().clone(),
            name: member.name().to_string(),
            kind: member.kind(),
            is_active: member.is_active(),
            created_at: member.created_at(),
            updated_at: member.updated_at(),
            deleted_at: member.deleted_at(),
        }
    }
}

impl From<CastMember> for CastMemberOutput {
    fn from(member: CastMember) -> Self {
        Self::from(&member)
    }
}

pub struct CreateCastMember<G> {
    gateway: G,
}

impl<G: CastMemberGateway> CreateCastMember<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    #[tracing::instrument(skip(self, command))]
    pub fn execute(&self, command: CreateCastMemberCommand) -> UseCaseResult<CastMemberOutput> {
        let mut notification = Notification::new();
        let member = notification.capture(|| {
            CastMember::new_member(command.name, command.kind, command.active)
        });

        let member = match member {
            Some(member) if !notification.has_errors() => member,
            _ => {
                tracing::warn!(errors = notification.errors().len(), "cast member rejected");
                return Err(DomainError::validation(
                    "Could not create Aggregate CastMember",
                    notification.into_errors(),
                )
                .into());
            }
        };

        let created = self.gateway.create(member)?;
        tracing::info!(id = %created.id(), "cast member created");
        Ok(CastMemberOutput::from(created))
    }
}

pub struct UpdateCastMember<G> {
    gateway: G,
}

impl<G: CastMemberGateway> UpdateCastMember<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    #[tracing::instrument(skip(self, command), fields(id = %command.id))]
    pub fn execute(&self, command: UpdateCastMemberCommand) -> UseCaseResult<CastMemberOutput> {
        let UpdateCastMemberCommand {
            id,
            name,
            kind,
            active,
        } = command;

        let mut member = self
            .gateway
            .find_by_id(&id)?
            .ok_or_else(|| DomainError::not_found(CastMember::KIND, &id))?;

        let mut notification = Notification::new();
        notification.capture(|| member.update(name, kind, active).map(|_| ()));
        notification.into_result(format!("Could not update Aggregate CastMember {id}"))?;

        let stored = self.gateway.update(member)?;
        tracing::info!("cast member updated");
        Ok(CastMemberOutput::from(stored))
    }
}

pub struct DeleteCastMember<G> {
    gateway: G,
}

impl<G: CastMemberGateway> DeleteCastMember<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    #[tracing::instrument(skip(self))]
    pub fn execute(&self, id: &CastMemberId) -> UseCaseResult<()> {
        self.gateway.delete_by_id(id)?;
        tracing::info!("cast member deleted");
        Ok(())
    }
}

pub struct GetCastMemberById<G> {
    gateway: G,
}

impl<G: CastMemberGateway> GetCastMemberById<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn execute(&self, id: &CastMemberId) -> UseCaseResult<CastMemberOutput> {
        self.gateway
            .find_by_id(id)?
            .map(CastMemberOutput::from)
            .ok_or_else(|| DomainError::not_found(CastMember::KIND, id).into())
    }
}

pub struct ListCastMembers<G> {
    gateway: G,
}

impl<G: CastMemberGateway> ListCastMembers<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn execute(&self, query: &SearchQuery) -> UseCaseResult<Pagination<CastMemberOutput>> {
        Ok(self.gateway.find_all(query)?.map(CastMemberOutput::from))
    }
}
