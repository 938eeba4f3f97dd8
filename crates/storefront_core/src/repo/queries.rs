//! Named per-entity filters built on the generic predicate queries.
//!
//! Any `Repository<User>` / `Repository<Product>` gets these through blanket
//! impls, so a new backing store only has to implement the core contract.

use crate::model::product::Product;
use crate::model::user::{User, ADMIN_ROLE, DEFAULT_ROLE};
use crate::repo::memory_repo::Repository;
use rust_decimal::Decimal;

/// Lookup helpers for user stores.
pub trait UserQueries: Repository<User> {
    /// Case-insensitive exact email lookup.
    fn find_by_email(&self, email: &str) -> Option<User> {
        self.find_first(&|user: &User| user.has_email(email))
    }

    /// Case-insensitive exact role match.
    fn find_by_role(&self, role: &str) -> Vec<User> {
        self.find_matching(&|user: &User| user.has_role(role))
    }

    /// Users holding either the default or the admin role.
    fn find_all_active_users(&self) -> Vec<User> {
        let mut active = self.find_by_role(DEFAULT_ROLE);
        active.extend(self.find_by_role(ADMIN_ROLE));
        active
    }

    /// Deletes the user owning `email`; returns whether one was removed.
    fn delete_by_email(&self, email: &str) -> bool {
        match self.find_by_email(email).and_then(|user| user.id) {
            Some(id) => self.delete_by_id(id),
            None => false,
        }
    }
}

impl<R: Repository<User>> UserQueries for R {}

/// Lookup helpers for product stores.
pub trait ProductQueries: Repository<Product> {
    /// Case-insensitive substring match on the name.
    fn find_by_name_containing(&self, fragment: &str) -> Vec<Product> {
        self.find_matching(&|product: &Product| product.name_contains(fragment))
    }

    /// Products priced within `[min, max]`, both bounds inclusive.
    fn find_by_price_range(&self, min: Decimal, max: Decimal) -> Vec<Product> {
        self.find_matching(&|product: &Product| product.price_within(min, max))
    }

    fn find_in_stock(&self) -> Vec<Product> {
        self.find_matching(&Product::is_in_stock)
    }

    fn find_out_of_stock(&self) -> Vec<Product> {
        self.find_matching(&|product: &Product| !product.is_in_stock())
    }
}

impl<R: Repository<Product>> ProductQueries for R {}
