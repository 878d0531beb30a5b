//! Integration tests for the full use-case pipeline.
//!
//! Tests: Command → Use case → Aggregate self-validation → In-memory gateway
//!
//! Verifies:
//! - Reference errors are reported before field errors
//! - Rejected writes leave stored state untouched
//! - Listing honours the configured pagination bounds

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use catalog_core::ValidationHandler;

    use catalog_application::cast_member::{
        CreateCastMember, CreateCastMemberCommand, ListCastMembers,
    };
    use catalog_application::category::{
        CreateCategory, CreateCategoryCommand, DeleteCategory, GetCategoryById, ListCategories,
        UpdateCategory, UpdateCategoryCommand,
    };
    use catalog_application::genre::{
        CreateGenre, CreateGenreCommand, DeleteGenre, GetGenreById, ListGenres, UpdateGenre,
        UpdateGenreCommand,
    };
    use catalog_application::UseCaseError;
    use catalog_core::{Error, SortDirection};
    use catalog_domain::{CastMemberType, CategoryId};
    use catalog_observability::LogSettings;

    use crate::config::PaginationSettings;
    use crate::in_memory::{
        InMemoryCastMemberGateway, InMemoryCategoryGateway, InMemoryGenreGateway,
    };

    struct Catalog {
        categories: Arc<InMemoryCategoryGateway>,
        genres: Arc<InMemoryGenreGateway>,
        members: Arc<InMemoryCastMemberGateway>,
    }

    fn setup() -> Catalog {
        catalog_observability::init(&LogSettings {
            level: "debug".into(),
            json: false,
        });
        Catalog {
            categories: Arc::new(InMemoryCategoryGateway::new()),
            genres: Arc::new(InMemoryGenreGateway::new()),
            members: Arc::new(InMemoryCastMemberGateway::new()),
        }
    }

    fn messages(err: &UseCaseError) -> Vec<&str> {
        err.errors().iter().map(Error::message).collect()
    }

    fn create_category(catalog: &Catalog, name: &str) -> CategoryId {
        CreateCategory::new(catalog.categories.clone())
            .execute(CreateCategoryCommand {
                name: Some(name.to_string()),
                description: None,
                active: true,
            })
            .unwrap()
            .id
    }

    #[test]
    fn genre_with_existing_categories_is_created() {
        let catalog = setup();
        let filmes = create_category(&catalog, "Filmes");
        let series = create_category(&catalog, "Series");

        let created = CreateGenre::new(catalog.genres.clone(), catalog.categories.clone())
            .execute(CreateGenreCommand {
                name: Some("Action".into()),
                active: true,
                categories: vec![filmes.clone(), series.clone()],
            })
            .unwrap();

        let stored = GetGenreById::new(catalog.genres.clone())
            .execute(&created.id)
            .unwrap();
        assert_eq!(stored.categories, vec![filmes, series]);
        assert!(stored.created_at <= stored.updated_at);
        assert_eq!(stored.deleted_at, None);
    }

    #[test]
    fn missing_references_are_reported_before_field_errors() {
        let catalog = setup();
        let existing = create_category(&catalog, "Filmes");

        let err = CreateGenre::new(catalog.genres.clone(), catalog.categories.clone())
            .execute(CreateGenreCommand {
                name: Some(" ".into()),
                active: true,
                categories: vec![
                    CategoryId::from("123"),
                    existing,
                    CategoryId::from("789"),
                ],
            })
            .unwrap_err();

        assert_eq!(err.to_string(), "Could not create Aggregate Genre");
        assert_eq!(
            messages(&err),
            vec![
                "Some categories could not be found: 123, 789",
                "'name' should not be empty",
            ]
        );
        let page = ListGenres::new(catalog.genres.clone())
            .execute(&Default::default())
            .unwrap();
        assert_eq!(page.total, 0);
    }

    #[test]
    fn genre_update_with_unknown_category_keeps_stored_genre() {
        let catalog = setup();
        let filmes = create_category(&catalog, "Filmes");
        let created = CreateGenre::new(catalog.genres.clone(), catalog.categories.clone())
            .execute(CreateGenreCommand {
                name: Some("Action".into()),
                active: true,
                categories: vec![filmes.clone()],
            })
            .unwrap();

        let err = UpdateGenre::new(catalog.genres.clone(), catalog.categories.clone())
            .execute(UpdateGenreCommand {
                id: created.id.clone(),
                name: Some("Drama".into()),
                active: false,
                categories: Some(vec![CategoryId::from("A"), CategoryId::from("A")]),
            })
            .unwrap_err();

        assert_eq!(
            messages(&err),
            vec!["Some categories could not be found: A, A"]
        );
        let stored = GetGenreById::new(catalog.genres.clone())
            .execute(&created.id)
            .unwrap();
        assert_eq!(stored, created);
    }

    #[test]
    fn genre_update_without_categories_clears_them() {
        let catalog = setup();
        let filmes = create_category(&catalog, "Filmes");
        let created = CreateGenre::new(catalog.genres.clone(), catalog.categories.clone())
            .execute(CreateGenreCommand {
                name: Some("Action".into()),
                active: true,
                categories: vec![filmes],
            })
            .unwrap();

        let updated = UpdateGenre::new(catalog.genres.clone(), catalog.categories.clone())
            .execute(UpdateGenreCommand {
                id: created.id.clone(),
                name: Some("Action".into()),
                active: false,
                categories: None,
            })
            .unwrap();

        assert!(updated.categories.is_empty());
        assert!(!updated.is_active);
        assert!(updated.deleted_at.is_some());
        assert!(updated.updated_at >= created.updated_at);

        DeleteGenre::new(catalog.genres.clone()).execute(&created.id).unwrap();
        let err = GetGenreById::new(catalog.genres.clone())
            .execute(&created.id)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn category_lifecycle() {
        let catalog = setup();
        let id = create_category(&catalog, "Filmes");

        let outcome = UpdateCategory::new(catalog.categories.clone())
            .execute(UpdateCategoryCommand {
                id: id.clone(),
                name: Some("Fi ".into()),
                description: None,
                active: true,
            })
            .unwrap();
        assert_eq!(
            outcome.unwrap_err().errors(),
            &[Error::new("'name' must be between 3 and 255 characters")]
        );

        let updated = UpdateCategory::new(catalog.categories.clone())
            .execute(UpdateCategoryCommand {
                id: id.clone(),
                name: Some("Filmes e Series".into()),
                description: Some("Tudo".into()),
                active: false,
            })
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Filmes e Series");
        assert!(!updated.is_active);

        let fetched = GetCategoryById::new(catalog.categories.clone())
            .execute(&id)
            .unwrap();
        assert_eq!(fetched, updated);

        DeleteCategory::new(catalog.categories.clone())
            .execute(&id)
            .unwrap();
        assert!(
            GetCategoryById::new(catalog.categories.clone())
                .execute(&id)
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn listing_is_filtered_sorted_and_bounded_by_settings() {
        let catalog = setup();
        for name in ["Series", "Filmes", "Documentarios", "Filmes antigos"] {
            create_category(&catalog, name);
        }
        let pagination = PaginationSettings {
            default_per_page: 10,
            max_per_page: 2,
        };

        let query = pagination.query(
            Some(0),
            Some(50),
            Some("FILMES".into()),
            Some("name".into()),
            Some(SortDirection::Desc),
        );
        let page = ListCategories::new(catalog.categories.clone())
            .execute(&query)
            .unwrap();

        assert_eq!(page.per_page, 2);
        assert_eq!(page.total, 2);
        let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Filmes antigos", "Filmes"]);
    }

    #[test]
    fn cast_members_round_trip_through_gateway() {
        let catalog = setup();
        let create = CreateCastMember::new(catalog.members.clone());

        let err = create
            .execute(CreateCastMemberCommand {
                name: None,
                kind: None,
                active: true,
            })
            .unwrap_err();
        assert_eq!(
            messages(&err),
            vec!["'name' should not be null", "'type' should not be null"]
        );

        create
            .execute(CreateCastMemberCommand {
                name: Some("Vin Diesel".into()),
                kind: Some(CastMemberType::Actor),
                active: true,
            })
            .unwrap();
        create
            .execute(CreateCastMemberCommand {
                name: Some("Quentin Tarantino".into()),
                kind: Some(CastMemberType::Director),
                active: false,
            })
            .unwrap();

        let page = ListCastMembers::new(catalog.members.clone())
            .execute(&PaginationSettings::default().query(None, None, None, None, None))
            .unwrap();
        let kinds: Vec<_> = page.items.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![Some(CastMemberType::Director), Some(CastMemberType::Actor)]
        );
        let active: Vec<_> = page.items.iter().map(|m| m.is_active).collect();
        assert_eq!(active, vec![false, true]);
        assert!(page.items[0].deleted_at.is_some());
    }
}
