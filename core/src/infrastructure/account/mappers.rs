use sea_orm::ActiveValue::Set;
use tracing::error;

use crate::domain::account::entities::{Account, AccountRole};
use crate::domain::common::CoreError;
use crate::entity::accounts::{ActiveModel as AccountActiveModel, Model as AccountModel};

impl TryFrom<AccountModel> for Account {
    type Error = CoreError;

    fn try_from(model: AccountModel) -> Result<Self, Self::Error> {
        let role: AccountRole = model.role.parse().map_err(|_| {
            error!("Unknown account role in store: {}", model.role);
            CoreError::InternalServerError
        })?;

        Ok(Account {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            role,
            is_bootstrap: model.is_bootstrap,
            last_login_at: model.last_login_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

pub fn to_active_model(account: Account) -> AccountActiveModel {
    AccountActiveModel {
        id: Set(account.id),
        name: Set(account.name),
        email: Set(account.email),
        password_hash: Set(account.password_hash),
        role: Set(account.role.to_string()),
        is_bootstrap: Set(account.is_bootstrap),
        last_login_at: Set(account.last_login_at),
        created_at: Set(account.created_at),
        updated_at: Set(account.updated_at),
    }
}
