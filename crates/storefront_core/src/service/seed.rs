//! Demo records loaded into a fresh store on request.
//!
//! Seeding goes through the services, so every record passes the same
//! validation as caller input.

use crate::model::product::{NewProduct, Product};
use crate::model::user::{NewUser, User, ADMIN_ROLE, DEFAULT_ROLE};
use crate::repo::memory_repo::Repository;
use crate::service::error::ServiceResult;
use crate::service::product_service::ProductService;
use crate::service::user_service::UserService;
use log::info;
use rust_decimal::Decimal;

const SAMPLE_USERS: [(&str, &str, &str); 3] = [
    ("Alice Johnson", "alice@example.com", ADMIN_ROLE),
    ("Bob Smith", "bob@example.com", DEFAULT_ROLE),
    ("Charlie Brown", "charlie@example.com", DEFAULT_ROLE),
];

/// `(name, description, price in cents, stock)`.
const SAMPLE_PRODUCTS: [(&str, &str, i64, i64); 5] = [
    ("Laptop", "High-performance laptop", 99_999, 15),
    ("Mouse", "Wireless mouse", 2_999, 50),
    ("Keyboard", "Mechanical keyboard", 8_999, 30),
    ("Monitor", "27-inch 4K monitor", 39_999, 20),
    ("Headphones", "Noise-canceling headphones", 19_999, 25),
];

/// Number of records created by `seed_sample_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub products: usize,
}

/// Creates the sample users and products.
///
/// # Errors
/// - `InvalidArgument` when a sample email is already taken, e.g. when the
///   store was seeded before.
pub fn seed_sample_data<U, P>(
    users: &UserService<U>,
    products: &ProductService<P>,
) -> ServiceResult<SeedSummary>
where
    U: Repository<User>,
    P: Repository<Product>,
{
    for (name, email, role) in SAMPLE_USERS {
        users.create_user(NewUser::new(name, email).with_role(role))?;
    }
    for (name, description, cents, stock) in SAMPLE_PRODUCTS {
        products.create_product(
            NewProduct::new(name, Decimal::new(cents, 2), stock).with_description(description),
        )?;
    }

    let summary = SeedSummary {
        users: SAMPLE_USERS.len(),
        products: SAMPLE_PRODUCTS.len(),
    };
    info!(
        "event=seed_sample_data module=service status=ok users={} products={}",
        summary.users, summary.products
    );
    Ok(summary)
}
