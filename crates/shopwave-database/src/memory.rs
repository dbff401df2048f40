//! In-memory store used by tests and local development.
//!
//! Backs all three store traits with a single mutex-guarded state so the
//! `memory` provider behaves like a tiny single-node database. Constraint
//! violations surface the same conflict errors as the PostgreSQL
//! repositories.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use shopwave_core::error::AppError;
use shopwave_core::result::AppResult;
use shopwave_entity::address::{Address, CreateAddress};
use shopwave_entity::shop::{CreateShop, Shop};
use shopwave_entity::user::{CreateUser, User, UserRole};

use crate::store::{AddressStore, ShopStore, UserStore};

#[derive(Debug, Default)]
struct InnerState {
    users: HashMap<Uuid, User>,
    addresses: HashMap<Uuid, Address>,
    shops: HashMap<Uuid, Shop>,
}

/// Process-local store. Cheap to create, nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<InnerState>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut state = self.state.lock().await;
        if state
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(AppError::conflict("Email is already registered"));
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.to_lowercase(),
            password_hash: data.password_hash.clone(),
            role: data.role,
            image_url: data.image_url.clone(),
            created_at: now,
            updated_at: now,
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_role(&self, id: Uuid, role: UserRole) -> AppResult<User> {
        let mut state = self.state.lock().await;
        let user = state
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        user.role = role;
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl AddressStore for MemoryStore {
    async fn list_for_user(&self, user_id: Uuid) -> AppResult<Vec<Address>> {
        let state = self.state.lock().await;
        let mut addresses: Vec<Address> = state
            .addresses
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        addresses.sort_by_key(|a| a.created_at);
        Ok(addresses)
    }

    async fn create(&self, data: &CreateAddress) -> AppResult<Address> {
        let mut state = self.state.lock().await;
        let now = Utc::now();
        let address = Address {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            label: data.label.clone(),
            street: data.street.clone(),
            city: data.city.clone(),
            province: data.province.clone(),
            postal_code: data.postal_code.clone(),
            is_default: data.is_default,
            created_at: now,
            updated_at: now,
        };
        state.addresses.insert(address.id, address.clone());
        Ok(address)
    }

    async fn find_default(&self, user_id: Uuid) -> AppResult<Option<Address>> {
        let state = self.state.lock().await;
        Ok(state
            .addresses
            .values()
            .find(|a| a.user_id == user_id && a.is_default)
            .cloned())
    }

    async fn clear_default(&self, user_id: Uuid) -> AppResult<()> {
        let mut state = self.state.lock().await;
        let now = Utc::now();
        for address in state.addresses.values_mut() {
            if address.user_id == user_id && address.is_default {
                address.is_default = false;
                address.updated_at = now;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ShopStore for MemoryStore {
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Option<Shop>> {
        let state = self.state.lock().await;
        Ok(state
            .shops
            .values()
            .find(|s| s.owner_id == owner_id)
            .cloned())
    }

    async fn create(&self, data: &CreateShop) -> AppResult<Shop> {
        let mut state = self.state.lock().await;
        if state.shops.values().any(|s| s.owner_id == data.owner_id) {
            return Err(AppError::conflict("User already owns a shop"));
        }
        let now = Utc::now();
        let shop = Shop {
            id: Uuid::new_v4(),
            owner_id: data.owner_id,
            name: data.name.clone(),
            slug: data.slug.clone(),
            description: data.description.clone(),
            created_at: now,
            updated_at: now,
        };
        state.shops.insert(shop.id, shop.clone());
        Ok(shop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopwave_core::error::ErrorKind;

    fn create_user_data(email: &str) -> CreateUser {
        CreateUser {
            name: "Test User".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$fake".to_string(),
            role: UserRole::Buyer,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn create_and_find_user() {
        let store = MemoryStore::new();
        let created = UserStore::create(&store, &create_user_data("buyer@shopwave.test"))
            .await
            .unwrap();

        let by_id = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "buyer@shopwave.test");

        let by_email = store
            .find_by_email("BUYER@shopwave.test")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, created.id);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() {
        let store = MemoryStore::new();
        UserStore::create(&store, &create_user_data("dupe@shopwave.test"))
            .await
            .unwrap();

        let err = UserStore::create(&store, &create_user_data("DUPE@shopwave.test"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn update_role_promotes_user() {
        let store = MemoryStore::new();
        let user = UserStore::create(&store, &create_user_data("promo@shopwave.test"))
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::Buyer);

        let updated = store.update_role(user.id, UserRole::Seller).await.unwrap();
        assert_eq!(updated.role, UserRole::Seller);

        let missing = store.update_role(Uuid::new_v4(), UserRole::Seller).await;
        assert_eq!(missing.unwrap_err().kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn clear_default_unsets_previous_address() {
        let store = MemoryStore::new();
        let user_id = Uuid::new_v4();

        let first = AddressStore::create(
            &store,
            &CreateAddress {
                user_id,
                label: "Home".to_string(),
                street: "123 Main St".to_string(),
                city: "Jakarta".to_string(),
                province: "DKI Jakarta".to_string(),
                postal_code: "12345".to_string(),
                is_default: true,
            },
        )
        .await
        .unwrap();

        assert_eq!(
            store.find_default(user_id).await.unwrap().map(|a| a.id),
            Some(first.id)
        );

        store.clear_default(user_id).await.unwrap();
        assert!(store.find_default(user_id).await.unwrap().is_none());

        let listed = AddressStore::list_for_user(&store, user_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(!listed[0].is_default);
    }

    #[tokio::test]
    async fn one_shop_per_owner() {
        let store = MemoryStore::new();
        let owner_id = Uuid::new_v4();

        let shop = ShopStore::create(&store, &CreateShop::new(owner_id, "First Shop", None))
            .await
            .unwrap();
        assert_eq!(shop.slug, "first-shop");
        assert_eq!(
            store.find_by_owner(owner_id).await.unwrap().map(|s| s.id),
            Some(shop.id)
        );

        let err = ShopStore::create(&store, &CreateShop::new(owner_id, "Second Shop", None))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }
}
