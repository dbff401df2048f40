//! Address book operations for authenticated users.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use shopwave_core::result::AppResult;
use shopwave_database::AddressStore;
use shopwave_entity::address::{Address, CreateAddress};

/// Handles the authenticated user's address book.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// Address store.
    addresses: Arc<dyn AddressStore>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(addresses: Arc<dyn AddressStore>) -> Self {
        Self { addresses }
    }

    /// Lists the user's addresses, oldest first.
    pub async fn list_addresses(&self, user_id: Uuid) -> AppResult<Vec<Address>> {
        self.addresses.list_for_user(user_id).await
    }

    /// Creates an address. A new default replaces any previous default.
    pub async fn create_address(&self, data: &CreateAddress) -> AppResult<Address> {
        if data.is_default {
            self.addresses.clear_default(data.user_id).await?;
        }

        let address = self.addresses.create(data).await?;

        info!(user_id = %address.user_id, address_id = %address.id, "Address created");

        Ok(address)
    }

    /// Returns the user's default address, if any.
    pub async fn default_address(&self, user_id: Uuid) -> AppResult<Option<Address>> {
        self.addresses.find_default(user_id).await
    }
}
