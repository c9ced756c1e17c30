//! Application service rules: validation, referential checks, password flow

mod common;

use common::{seed_expense_type, seed_role, setup_repos, user_dto};
use expense_tracker::application::{CatalogService, DefaultAdmin, ExpenseService, UserService};
use expense_tracker::domain::{
    CreateExpenseDto, CreateExpenseTypeDto, CreateRoleDto, Currency, DomainError,
    UpdateExpenseDto, UpdateRoleDto, UpdateUserDto,
};

#[tokio::test]
async fn register_checks_role_and_uniqueness() {
    let (_db, repos) = setup_repos().await;
    let users = UserService::new(repos.clone());
    let role = seed_role(repos.as_ref(), "Employee").await;

    let alice = users.register(user_dto("alice", role.id)).await.unwrap();
    assert!(!alice.is_admin);

    let err = users.register(user_dto("alice", role.id)).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    let err = users.register(user_dto("bob", role.id + 100)).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn register_enforces_length_limits() {
    let (_db, repos) = setup_repos().await;
    let users = UserService::new(repos.clone());
    let role = seed_role(repos.as_ref(), "Employee").await;

    let mut dto = user_dto("alice", role.id);
    dto.first_name = "x".repeat(31);
    let err = users.register(dto).await.unwrap_err();
    match err {
        DomainError::Validation(msg) => assert!(msg.contains("first_name"), "{msg}"),
        other => panic!("expected validation error, got {other:?}"),
    }

    let mut dto = user_dto("alice", role.id);
    dto.email = "not-an-email".into();
    assert!(matches!(
        users.register(dto).await,
        Err(DomainError::Validation(_))
    ));

    let dto = user_dto(&"u".repeat(31), role.id);
    assert!(matches!(
        users.register(dto).await,
        Err(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn password_is_write_only_and_verifiable() {
    let (_db, repos) = setup_repos().await;
    let users = UserService::new(repos.clone());
    let role = seed_role(repos.as_ref(), "Employee").await;
    let alice = users.register(user_dto("alice", role.id)).await.unwrap();

    assert!(users.verify_password(alice.id, "s3cret-pass").await.unwrap());

    users.set_password(alice.id, "new-pass").await.unwrap();
    assert!(users.verify_password(alice.id, "new-pass").await.unwrap());
    assert!(!users.verify_password(alice.id, "s3cret-pass").await.unwrap());

    let reloaded = users.get_user(alice.id).await.unwrap();
    assert_ne!(reloaded.password_hash(), "new-pass");
    assert_ne!(reloaded.password_hash(), alice.password_hash());
    assert!(matches!(
        reloaded.password(),
        Err(DomainError::PasswordNotReadable)
    ));

    assert!(matches!(
        users.set_password(alice.id, "").await,
        Err(DomainError::Validation(_))
    ));
    assert!(matches!(
        users.verify_password(999, "x").await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn length_limits_are_inclusive() {
    let (_db, repos) = setup_repos().await;
    let catalog = CatalogService::new(repos.clone());
    let users = UserService::new(repos.clone());
    let expenses = ExpenseService::new(repos.clone());

    let role = catalog
        .create_role(CreateRoleDto {
            name: "r".repeat(60),
            description: Some("d".repeat(200)),
        })
        .await
        .unwrap();
    assert_eq!(role.name.len(), 60);

    let mut dto = user_dto(&"u".repeat(30), role.id);
    dto.first_name = "f".repeat(30);
    dto.last_name = "l".repeat(30);
    dto.email = format!("{}@example.com", "e".repeat(48));
    assert_eq!(dto.email.len(), 60);
    let user = users.register(dto).await.unwrap();
    assert_eq!(user.username.len(), 30);

    let expense_type = catalog
        .create_expense_type(CreateExpenseTypeDto {
            type_name: "t".repeat(20),
            description: Some("d".repeat(255)),
        })
        .await
        .unwrap();
    assert_eq!(expense_type.type_name.len(), 20);

    let expense = expenses
        .create(CreateExpenseDto {
            name: "n".repeat(60),
            amount: 1.0,
            details: Some("d".repeat(255)),
            currency: Currency::Eur,
            user_id: user.id,
            expense_type_id: expense_type.id,
        })
        .await
        .unwrap();
    let stored = expenses.get(expense.id).await.unwrap();
    assert_eq!(stored.name.len(), 60);
    assert_eq!(stored.details.map(|d| d.len()), Some(255));
}

#[tokio::test]
async fn passwords_past_bcrypt_limit_are_rejected() {
    let (_db, repos) = setup_repos().await;
    let users = UserService::new(repos.clone());
    let role = seed_role(repos.as_ref(), "Employee").await;

    let prefix = "a".repeat(72);
    let mut dto = user_dto("alice", role.id);
    dto.password = format!("{}-secret-one", prefix);
    assert!(matches!(
        users.register(dto).await,
        Err(DomainError::Validation(_))
    ));

    let mut dto = user_dto("alice", role.id);
    dto.password = prefix.clone();
    let alice = users.register(dto).await.unwrap();
    assert!(users.verify_password(alice.id, &prefix).await.unwrap());
    assert!(!users
        .verify_password(alice.id, &format!("{}-totally-different", prefix))
        .await
        .unwrap());

    assert!(matches!(
        users
            .set_password(alice.id, &format!("{}-secret-two", prefix))
            .await,
        Err(DomainError::Validation(_))
    ));
    assert!(users.verify_password(alice.id, &prefix).await.unwrap());
}

#[tokio::test]
async fn update_user_keeps_username_unique() {
    let (_db, repos) = setup_repos().await;
    let users = UserService::new(repos.clone());
    let role = seed_role(repos.as_ref(), "Employee").await;
    let alice = users.register(user_dto("alice", role.id)).await.unwrap();
    users.register(user_dto("bob", role.id)).await.unwrap();

    let err = users
        .update_user(
            alice.id,
            UpdateUserDto {
                username: Some("bob".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    // Re-submitting one's own username is fine.
    let same = users
        .update_user(
            alice.id,
            UpdateUserDto {
                username: Some("alice".into()),
                is_admin: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(same.is_admin);

    let missing = users
        .update_user(
            alice.id + 100,
            UpdateUserDto {
                username: Some("bob".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn default_admin_is_seeded_once() {
    let (_db, repos) = setup_repos().await;
    let users = UserService::new(repos.clone());
    let admin = DefaultAdmin {
        role_name: "Administrator".into(),
        first_name: "System".into(),
        last_name: "Admin".into(),
        username: "admin".into(),
        email: "admin@example.com".into(),
        password: "change-me".into(),
    };

    let created = users
        .ensure_default_admin(&admin)
        .await
        .unwrap()
        .expect("seeded on empty db");
    assert!(created.is_admin);
    assert!(created.verify_password("change-me"));

    let role = repos
        .roles()
        .find_by_name("Administrator")
        .await
        .unwrap()
        .expect("role created");
    assert_eq!(created.role_id, role.id);

    assert!(users.ensure_default_admin(&admin).await.unwrap().is_none());
}

#[tokio::test]
async fn expense_requires_existing_user_and_type() {
    let (_db, repos) = setup_repos().await;
    let users = UserService::new(repos.clone());
    let expenses = ExpenseService::new(repos.clone());
    let role = seed_role(repos.as_ref(), "Employee").await;
    let alice = users.register(user_dto("alice", role.id)).await.unwrap();
    let travel = seed_expense_type(repos.as_ref(), "Travel").await;

    let dto = |user_id, expense_type_id| CreateExpenseDto {
        name: "Taxi".into(),
        amount: 12.50,
        details: Some("Airport".into()),
        currency: Currency::Usd,
        user_id,
        expense_type_id,
    };

    assert!(matches!(
        expenses.create(dto(alice.id + 1, travel.id)).await,
        Err(DomainError::Validation(_))
    ));
    assert!(matches!(
        expenses.create(dto(alice.id, travel.id + 1)).await,
        Err(DomainError::Validation(_))
    ));

    let mut bad_amount = dto(alice.id, travel.id);
    bad_amount.amount = f64::NAN;
    assert!(matches!(
        expenses.create(bad_amount).await,
        Err(DomainError::Validation(_))
    ));

    let mut long_name = dto(alice.id, travel.id);
    long_name.name = "n".repeat(61);
    assert!(matches!(
        expenses.create(long_name).await,
        Err(DomainError::Validation(_))
    ));

    let taxi = expenses.create(dto(alice.id, travel.id)).await.unwrap();
    let linked = expenses.get_with_links(taxi.id).await.unwrap();
    assert_eq!(linked.user.username, "alice");
    assert_eq!(linked.expense.details.as_deref(), Some("Airport"));

    let updated = expenses
        .update(
            taxi.id,
            UpdateExpenseDto {
                currency: Some(Currency::Gbp),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.currency, Currency::Gbp);
    assert_eq!(updated.amount, 12.50);

    // A missing expense is reported before its references are checked
    let retype = |expense_type_id| UpdateExpenseDto {
        expense_type_id: Some(expense_type_id),
        ..Default::default()
    };
    assert!(matches!(
        expenses.update(taxi.id + 100, retype(travel.id + 100)).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        expenses.update(taxi.id, retype(travel.id + 100)).await,
        Err(DomainError::Validation(_))
    ));

    expenses.delete(taxi.id).await.unwrap();
    assert!(matches!(
        expenses.get(taxi.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn catalog_validates_and_maps_conflicts() {
    let (_db, repos) = setup_repos().await;
    let catalog = CatalogService::new(repos.clone());

    let employee = catalog
        .create_role(CreateRoleDto::new("Employee"))
        .await
        .unwrap();
    assert!(matches!(
        catalog.create_role(CreateRoleDto::new("Employee")).await,
        Err(DomainError::Conflict(_))
    ));
    assert!(matches!(
        catalog.create_role(CreateRoleDto::new("r".repeat(61))).await,
        Err(DomainError::Validation(_))
    ));

    let manager = catalog
        .create_role(CreateRoleDto::new("Manager"))
        .await
        .unwrap();
    assert!(matches!(
        catalog
            .update_role(
                manager.id,
                UpdateRoleDto {
                    name: Some("Employee".into()),
                    ..Default::default()
                }
            )
            .await,
        Err(DomainError::Conflict(_))
    ));

    assert!(matches!(
        catalog
            .create_expense_type(CreateExpenseTypeDto::new("t".repeat(21)))
            .await,
        Err(DomainError::Validation(_))
    ));
    let travel = catalog
        .create_expense_type(CreateExpenseTypeDto::new("Travel"))
        .await
        .unwrap();
    assert_eq!(travel.to_string(), "<ExpenseType: type=Travel>");

    catalog.delete_role(employee.id).await.unwrap();
    assert!(matches!(
        catalog.get_role(employee.id).await,
        Err(DomainError::NotFound { .. })
    ));
}
