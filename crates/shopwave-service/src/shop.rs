//! Shop opening and the buyer-to-seller role upgrade.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use shopwave_core::error::AppError;
use shopwave_core::result::AppResult;
use shopwave_database::{ShopStore, UserStore};
use shopwave_entity::shop::{CreateShop, Shop};
use shopwave_entity::user::{User, UserRole};

/// Handles the shop-upgrade flow.
#[derive(Debug, Clone)]
pub struct ShopService {
    /// Credential store, for the role promotion.
    users: Arc<dyn UserStore>,
    /// Shop store.
    shops: Arc<dyn ShopStore>,
}

impl ShopService {
    /// Creates a new shop service.
    pub fn new(users: Arc<dyn UserStore>, shops: Arc<dyn ShopStore>) -> Self {
        Self { users, shops }
    }

    /// Opens a shop for the user and promotes them to seller.
    ///
    /// An existing shop is a conflict. Users already at seller privilege or
    /// above keep their current role.
    pub async fn open_shop(
        &self,
        user_id: Uuid,
        name: &str,
        description: Option<String>,
    ) -> AppResult<(Shop, User)> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if self.shops.find_by_owner(user.id).await?.is_some() {
            return Err(AppError::conflict("User already owns a shop"));
        }

        let shop = self
            .shops
            .create(&CreateShop::new(user.id, name, description))
            .await?;

        let user = if user.role.has_at_least(UserRole::Seller) {
            user
        } else {
            self.users.update_role(user.id, UserRole::Seller).await?
        };

        info!(user_id = %user.id, shop_id = %shop.id, role = %user.role, "Shop opened");

        Ok((shop, user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopwave_core::error::ErrorKind;
    use shopwave_database::Stores;
    use shopwave_entity::user::CreateUser;

    async fn seed_user(stores: &Stores, email: &str, role: UserRole) -> User {
        stores
            .users
            .create(&CreateUser {
                name: "Shop Owner".to_string(),
                email: email.to_string(),
                password_hash: "$argon2id$fake".to_string(),
                role,
                image_url: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn opening_a_shop_promotes_a_buyer() {
        let stores = Stores::in_memory();
        let service = ShopService::new(stores.users.clone(), stores.shops.clone());
        let buyer = seed_user(&stores, "buyer@shopwave.test", UserRole::Buyer).await;

        let (shop, user) = service
            .open_shop(buyer.id, "Test Shop", Some("Wares".to_string()))
            .await
            .unwrap();

        assert_eq!(shop.owner_id, buyer.id);
        assert_eq!(shop.slug, "test-shop");
        assert_eq!(user.role, UserRole::Seller);
    }

    #[tokio::test]
    async fn admins_keep_their_role() {
        let stores = Stores::in_memory();
        let service = ShopService::new(stores.users.clone(), stores.shops.clone());
        let admin = seed_user(&stores, "admin@shopwave.test", UserRole::Admin).await;

        let (_, user) = service.open_shop(admin.id, "Admin Shop", None).await.unwrap();
        assert_eq!(user.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn second_shop_is_a_conflict() {
        let stores = Stores::in_memory();
        let service = ShopService::new(stores.users.clone(), stores.shops.clone());
        let buyer = seed_user(&stores, "buyer@shopwave.test", UserRole::Buyer).await;

        service.open_shop(buyer.id, "First", None).await.unwrap();
        let err = service.open_shop(buyer.id, "Second", None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let stores = Stores::in_memory();
        let service = ShopService::new(stores.users.clone(), stores.shops.clone());

        let err = service
            .open_shop(Uuid::new_v4(), "Ghost Shop", None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
