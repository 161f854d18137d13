use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, SqlErr,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    account::{entities::Account, ports::AccountRepository},
    common::CoreError,
};
use crate::entity::accounts::{Column as AccountColumn, Entity as AccountEntity};
use crate::infrastructure::account::mappers::to_active_model;

#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pub db: DatabaseConnection,
}

impl PostgresAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AccountRepository for PostgresAccountRepository {
    async fn count(&self) -> Result<u64, CoreError> {
        AccountEntity::find().count(&self.db).await.map_err(|e| {
            error!("Failed to count accounts: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn find_by_email(&self, email: String) -> Result<Option<Account>, CoreError> {
        let model = AccountEntity::find()
            .filter(AccountColumn::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get account by email: {}", e);
                CoreError::InternalServerError
            })?;

        model.map(Account::try_from).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, CoreError> {
        let model = AccountEntity::find_by_id(id).one(&self.db).await.map_err(|e| {
            error!("Failed to get account by id: {}", e);
            CoreError::InternalServerError
        })?;

        model.map(Account::try_from).transpose()
    }

    async fn insert(&self, account: Account) -> Result<Account, CoreError> {
        AccountEntity::insert(to_active_model(account))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(message))
                    if message.contains("bootstrap") =>
                {
                    CoreError::Duplicate {
                        field: "bootstrap".to_string(),
                    }
                }
                Some(SqlErr::UniqueConstraintViolation(_)) => CoreError::Duplicate {
                    field: "email".to_string(),
                },
                _ => {
                    error!("Failed to create account: {}", e);
                    CoreError::InternalServerError
                }
            })
            .and_then(Account::try_from)
    }

    async fn update_last_login(&self, id: Uuid, when: DateTime<Utc>) -> Result<(), CoreError> {
        AccountEntity::update_many()
            .col_expr(AccountColumn::LastLoginAt, Expr::value(when))
            .col_expr(AccountColumn::UpdatedAt, Expr::value(when))
            .filter(AccountColumn::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to update last login: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
