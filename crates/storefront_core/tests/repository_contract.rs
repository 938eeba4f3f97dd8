use rust_decimal::Decimal;
use storefront_core::{
    Entity, InMemoryRepository, Product, ProductQueries, Repository, User, UserQueries,
};

fn product(name: &str, cents: i64, stock: u32) -> Product {
    Product::new(name, None, Decimal::new(cents, 2), stock)
}

#[test]
fn save_assigns_sequential_ids_starting_at_one() {
    let repo = InMemoryRepository::<User>::new();

    let first = repo.save(User::new("Ann", "ann@example.com", "USER")).unwrap();
    let second = repo.save(User::new("Ben", "ben@example.com", "USER")).unwrap();

    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));
    assert_eq!(repo.find_by_id(2).unwrap(), second);
}

#[test]
fn ids_are_never_reused_after_delete() {
    let repo = InMemoryRepository::<Product>::new();
    let first = repo.save(product("Lamp", 1_500, 3)).unwrap();
    let second = repo.save(product("Desk", 12_000, 1)).unwrap();

    assert!(repo.delete_by_id(second.id.unwrap()));
    assert!(repo.delete_by_id(first.id.unwrap()));
    assert_eq!(repo.count(), 0);

    let third = repo.save(product("Chair", 4_500, 7)).unwrap();
    assert_eq!(third.id, Some(3));
    assert_eq!(repo.peek_next_id(), 4);
}

#[test]
fn save_with_existing_id_overwrites_record() {
    let repo = InMemoryRepository::<Product>::new();
    let mut stored = repo.save(product("Lamp", 1_500, 3)).unwrap();
    stored.stock = 9;

    let saved = repo.save(stored.clone()).unwrap();

    assert_eq!(saved, stored);
    assert_eq!(repo.count(), 1);
    assert_eq!(repo.find_by_id(stored.id.unwrap()).unwrap().stock, 9);
}

#[test]
fn save_with_caller_id_moves_allocation_past_it() {
    let repo = InMemoryRepository::<User>::new();
    let mut imported = User::new("Ann", "ann@example.com", "USER");
    imported.assign_id(10);
    repo.save(imported).unwrap();

    let next = repo.save(User::new("Ben", "ben@example.com", "USER")).unwrap();
    assert_eq!(next.id, Some(11));
}

#[test]
fn delete_and_exists_report_absence_without_errors() {
    let repo = InMemoryRepository::<User>::new();
    let saved = repo.save(User::new("Ann", "ann@example.com", "USER")).unwrap();
    let id = saved.id.unwrap();

    assert!(repo.exists_by_id(id));
    assert!(repo.delete_by_id(id));
    assert!(!repo.exists_by_id(id));
    assert!(!repo.delete_by_id(id));
    assert!(repo.find_by_id(id).is_none());
    assert!(repo.find_by_id(999).is_none());
}

#[test]
fn find_all_returns_snapshot_in_id_order() {
    let repo = InMemoryRepository::<Product>::new();
    repo.save(product("B", 100, 1)).unwrap();
    repo.save(product("A", 200, 1)).unwrap();

    let mut snapshot = repo.find_all();
    let names: Vec<_> = snapshot.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["B", "A"]);

    snapshot.clear();
    assert_eq!(repo.count(), 2);
}

#[test]
fn user_queries_match_email_and_role_ignoring_case() {
    let repo = InMemoryRepository::<User>::new();
    repo.save(User::new("Ann", "Ann@Example.com", "ADMIN")).unwrap();
    repo.save(User::new("Ben", "ben@example.com", "USER")).unwrap();
    repo.save(User::new("Cid", "cid@example.com", "GUEST")).unwrap();

    assert_eq!(
        repo.find_by_email("ann@example.COM").unwrap().name,
        "Ann"
    );
    assert!(repo.find_by_email("nobody@example.com").is_none());
    assert_eq!(repo.find_by_role("admin").len(), 1);
    assert_eq!(repo.find_all_active_users().len(), 2);

    assert!(repo.delete_by_email("BEN@example.com"));
    assert!(!repo.delete_by_email("ben@example.com"));
    assert_eq!(repo.count(), 2);
}

#[test]
fn product_queries_filter_by_name_price_and_stock() {
    let repo = InMemoryRepository::<Product>::new();
    repo.save(product("Gaming Laptop", 150_000, 2)).unwrap();
    repo.save(product("Laptop Stand", 3_000, 0)).unwrap();
    repo.save(product("Mouse", 2_000, 10)).unwrap();

    assert_eq!(repo.find_by_name_containing("LAPTOP").len(), 2);
    assert_eq!(
        repo.find_by_price_range(Decimal::new(2_000, 2), Decimal::new(3_000, 2))
            .len(),
        2
    );

    let out_of_stock = repo.find_out_of_stock();
    assert_eq!(out_of_stock.len(), 1);
    assert_eq!(out_of_stock[0].name, "Laptop Stand");
    assert_eq!(repo.find_in_stock().len(), 2);
}
