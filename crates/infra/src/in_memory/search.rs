//! Filtering, ordering and paging over a snapshot of stored aggregates.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use catalog_core::{AggregateRoot, Identifier, Pagination, SearchQuery, SortDirection};
use catalog_domain::{CastMember, Category, Genre};

/// What the in-memory search needs to know about a stored aggregate.
pub trait Searchable {
    fn search_name(&self) -> &str;
    fn search_created_at(&self) -> DateTime<Utc>;
    /// Tie-breaker so pages are stable across calls.
    fn search_id(&self) -> &str;

    /// `terms` is already lowercased and non-empty.
    fn matches(&self, terms: &str) -> bool {
        self.search_name().to_lowercase().contains(terms)
    }
}

impl Searchable for Category {
    fn search_name(&self) -> &str {
        self.name()
    }

    fn search_created_at(&self) -> DateTime<Utc> {
        self.created_at()
    }

    fn search_id(&self) -> &str {
        self.id().value()
    }

    fn matches(&self, terms: &str) -> bool {
        self.name().to_lowercase().contains(terms)
            || self
                .description()
                .is_some_and(|d| d.to_lowercase().contains(terms))
    }
}

impl Searchable for Genre {
    fn search_name(&self) -> &str {
        self.name()
    }

    fn search_created_at(&self) -> DateTime<Utc> {
        self.created_at()
    }

    fn search_id(&self) -> &str {
        self.id().value()
    }
}

impl Searchable for CastMember {
    fn search_name(&self) -> &str {
        self.name()
    }

    fn search_created_at(&self) -> DateTime<Utc> {
        self.created_at()
    }

    fn search_id(&self) -> &str {
        self.id().value()
    }
}

/// Sort key accepted in `SearchQuery::sort`; anything unknown sorts by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortField {
    Name,
    CreatedAt,
}

impl SortField {
    fn parse(raw: &str) -> Self {
        match raw {
            "createdAt" | "created_at" => SortField::CreatedAt,
            _ => SortField::Name,
        }
    }

    fn compare<T: Searchable>(self, a: &T, b: &T) -> Ordering {
        let primary = match self {
            SortField::Name => {
                let (left, right) = (a.search_name(), b.search_name());
                left.to_lowercase()
                    .cmp(&right.to_lowercase())
                    .then_with(|| left.cmp(right))
            }
            SortField::CreatedAt => a.search_created_at().cmp(&b.search_created_at()),
        };
        primary.then_with(|| a.search_id().cmp(b.search_id()))
    }
}

pub fn search<T: Searchable>(items: Vec<T>, query: &SearchQuery) -> Pagination<T> {
    let terms = query.terms.trim().to_lowercase();
    let mut matching: Vec<T> = items
        .into_iter()
        .filter(|item| terms.is_empty() || item.matches(&terms))
        .collect();

    let field = SortField::parse(&query.sort);
    matching.sort_by(|a, b| match query.direction {
        SortDirection::Asc => field.compare(a, b),
        SortDirection::Desc => field.compare(b, a),
    });

    let total = matching.len() as u64;
    let page: Vec<T> = matching
        .into_iter()
        .skip(query.offset())
        .take(query.per_page as usize)
        .collect();

    Pagination::new(query.page, query.per_page, total, page)
}
