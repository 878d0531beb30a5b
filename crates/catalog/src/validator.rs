//! Per-aggregate rule tables.
//!
//! The set of validated aggregates is closed: [`Validator`] has one variant per
//! aggregate, and each variant runs its own fixed, ordered list of rules. Every
//! rule runs regardless of what earlier rules reported, so the handler sees all
//! problems in rule order.

use catalog_core::validation::ValidationHandler;
use catalog_core::{DomainResult, Error};

use crate::cast_member::CastMember;
use crate::category::Category;
use crate::genre::Genre;

/// Longest accepted name, in characters, after trimming.
pub const NAME_MAX_LENGTH: usize = 255;

type Rule<T> = fn(&T, &mut dyn ValidationHandler) -> DomainResult<()>;

const CATEGORY_RULES: &[Rule<Category>] = &[category_name];

const GENRE_RULES: &[Rule<Genre>] = &[genre_name];

const CAST_MEMBER_RULES: &[Rule<CastMember>] = &[cast_member_name, cast_member_type];

fn category_name(category: &Category, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
    NameRule::new(3).check(category.name_value(), handler)
}

fn genre_name(genre: &Genre, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
    NameRule::new(1).check(genre.name_value(), handler)
}

fn cast_member_name(member: &CastMember, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
    NameRule::new(3).check(member.name_value(), handler)
}

fn cast_member_type(member: &CastMember, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
    if member.kind().is_none() {
        tracing::debug!(rule = "type", "type missing");
        handler.append(Error::new("'type' should not be null"))?;
    }
    Ok(())
}

/// Rule runner bound to one aggregate instance.
#[derive(Debug, Clone, Copy)]
pub enum Validator<'a> {
    Category(&'a Category),
    Genre(&'a Genre),
    CastMember(&'a CastMember),
}

impl Validator<'_> {
    /// Run every rule for the target, in table order.
    pub fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        match *self {
            Validator::Category(category) => run(category, CATEGORY_RULES, handler),
            Validator::Genre(genre) => run(genre, GENRE_RULES, handler),
            Validator::CastMember(member) => run(member, CAST_MEMBER_RULES, handler),
        }
    }
}

fn run<T>(target: &T, rules: &[Rule<T>], handler: &mut dyn ValidationHandler) -> DomainResult<()> {
    for rule in rules {
        rule(target, handler)?;
    }
    Ok(())
}

/// Required, non-blank name whose trimmed length lies in `min..=max`.
///
/// Appends at most one error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRule {
    pub min: usize,
    pub max: usize,
}

impl NameRule {
    pub const fn new(min: usize) -> Self {
        Self {
            min,
            max: NAME_MAX_LENGTH,
        }
    }

    pub fn check(&self, name: Option<&str>, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        let Some(name) = name else {
            tracing::debug!(rule = "name", "name missing");
            return handler.append(Error::new("'name' should not be null"));
        };

        let trimmed = name.trim();
        if trimmed.is_empty() {
            tracing::debug!(rule = "name", "name blank");
            return handler.append(Error::new("'name' should not be empty"));
        }

        let length = trimmed.chars().count();
        if length < self.min || length > self.max {
            tracing::debug!(rule = "name", length, "name length out of range");
            return handler.append(Error::new(format!(
                "'name' must be between {} and {} characters",
                self.min, self.max
            )));
        }

        Ok(())
    }
}
