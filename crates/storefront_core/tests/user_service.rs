use storefront_core::{
    InMemoryRepository, NewUser, ServiceError, User, UserPatch, UserService, ValidationError,
};

fn service() -> UserService<InMemoryRepository<User>> {
    UserService::new(InMemoryRepository::new())
}

#[test]
fn create_user_trims_fields_and_defaults_role() {
    let users = service();

    let created = users
        .create_user(NewUser::new("  Ann  ", " ann@example.com "))
        .unwrap();

    assert_eq!(created.id, Some(1));
    assert_eq!(created.name, "Ann");
    assert_eq!(created.email, "ann@example.com");
    assert_eq!(created.role, "USER");
    assert_eq!(users.get_user_by_id(1).unwrap(), created);
}

#[test]
fn create_user_with_blank_role_gets_default_role() {
    let users = service();
    let created = users
        .create_user(NewUser::new("Ann", "ann@example.com").with_role("   "))
        .unwrap();
    assert_eq!(created.role, "USER");
}

#[test]
fn create_user_rejects_blank_name_and_email() {
    let users = service();

    let err = users
        .create_user(NewUser::new("   ", "ann@example.com"))
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("name cannot be empty"));

    let err = users.create_user(NewUser::default()).unwrap_err();
    assert!(err.is_invalid_argument());

    let err = users.create_user(NewUser::new("Ann", "")).unwrap_err();
    assert_eq!(
        err,
        ServiceError::InvalidArgument(ValidationError::BlankEmail)
    );
    assert_eq!(users.user_count(), 0);
}

#[test]
fn duplicate_email_is_rejected_ignoring_case() {
    let users = service();
    users
        .create_user(NewUser::new("Ann", "ann@example.com"))
        .unwrap();

    let err = users
        .create_user(NewUser::new("Impostor", "ANN@example.com"))
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("already exists"));
    assert_eq!(users.user_count(), 1);
}

#[test]
fn get_user_by_id_reports_not_found() {
    let users = service();
    let err = users.get_user_by_id(42).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "user not found with id: 42");
}

#[test]
fn lookups_by_email_and_role_ignore_case() {
    let users = service();
    users
        .create_user(NewUser::new("Ann", "ann@example.com").with_role("ADMIN"))
        .unwrap();
    users
        .create_user(NewUser::new("Ben", "ben@example.com"))
        .unwrap();

    assert_eq!(
        users.get_user_by_email("ANN@EXAMPLE.COM").unwrap().name,
        "Ann"
    );
    assert!(users.get_user_by_email("zed@example.com").is_none());
    assert_eq!(users.get_users_by_role("admin").len(), 1);
    assert_eq!(users.get_users_by_role("user").len(), 1);
    assert!(users.get_users_by_role("GUEST").is_empty());
}

#[test]
fn update_user_overwrites_only_non_blank_fields() {
    let users = service();
    let created = users
        .create_user(NewUser::new("Ann", "ann@example.com"))
        .unwrap();
    let id = created.id.unwrap();

    let patch = UserPatch {
        name: Some("Annie".to_string()),
        email: Some("   ".to_string()),
        role: None,
    };
    let updated = users.update_user(id, &patch).unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.name, "Annie");
    assert_eq!(updated.email, "ann@example.com");
    assert_eq!(updated.role, "USER");
    assert_eq!(users.get_user_by_id(id).unwrap(), updated);
}

#[test]
fn update_user_rejects_email_owned_by_another_user() {
    let users = service();
    let ann = users
        .create_user(NewUser::new("Ann", "ann@example.com"))
        .unwrap();
    users
        .create_user(NewUser::new("Ben", "ben@example.com"))
        .unwrap();

    let patch = UserPatch {
        name: Some("Renamed".to_string()),
        email: Some("Ben@Example.com".to_string()),
        role: None,
    };
    let err = users.update_user(ann.id.unwrap(), &patch).unwrap_err();

    assert!(err.is_invalid_argument());
    let stored = users.get_user_by_id(ann.id.unwrap()).unwrap();
    assert_eq!(stored, ann);
}

#[test]
fn update_user_allows_case_change_of_own_email() {
    let users = service();
    let ann = users
        .create_user(NewUser::new("Ann", "ann@example.com"))
        .unwrap();

    let patch = UserPatch {
        email: Some("ANN@example.com".to_string()),
        ..UserPatch::default()
    };
    let updated = users.update_user(ann.id.unwrap(), &patch).unwrap();
    assert_eq!(updated.email, "ANN@example.com");
}

#[test]
fn update_and_delete_unknown_user_report_not_found() {
    let users = service();

    let err = users.update_user(7, &UserPatch::default()).unwrap_err();
    assert!(err.is_not_found());

    let err = users.delete_user(7).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn delete_user_frees_email_for_reuse() {
    let users = service();
    let ann = users
        .create_user(NewUser::new("Ann", "ann@example.com"))
        .unwrap();

    users.delete_user(ann.id.unwrap()).unwrap();
    assert!(users.get_user_by_id(ann.id.unwrap()).unwrap_err().is_not_found());

    let again = users
        .create_user(NewUser::new("Ann", "ann@example.com"))
        .unwrap();
    assert_eq!(again.id, Some(2));
    assert_eq!(users.get_all_users().len(), 1);
}
