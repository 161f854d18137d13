use crate::domain::{
    authentication::value_objects::Identity,
    common::{CoreError, policies::DefaultPolicy},
    listing::ports::ListingPolicy,
};

impl ListingPolicy for DefaultPolicy {
    async fn can_manage_listings(&self, identity: Identity) -> Result<bool, CoreError> {
        Ok(identity.is_admin())
    }

    async fn can_view_stats(&self, identity: Identity) -> Result<bool, CoreError> {
        Ok(identity.is_admin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::entities::{Account, AccountRole};

    fn identity(role: AccountRole) -> Identity {
        Identity::new(Account::new(
            "Someone".to_string(),
            "someone@example.com".to_string(),
            "hash".to_string(),
            role,
            false,
        ))
    }

    #[tokio::test]
    async fn only_admins_manage_listings() {
        let policy = DefaultPolicy;
        assert!(
            policy
                .can_manage_listings(identity(AccountRole::Admin))
                .await
                .unwrap()
        );
        assert!(
            !policy
                .can_manage_listings(identity(AccountRole::User))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn only_admins_view_stats() {
        let policy = DefaultPolicy;
        assert!(
            policy
                .can_view_stats(identity(AccountRole::Admin))
                .await
                .unwrap()
        );
        assert!(
            !policy
                .can_view_stats(identity(AccountRole::User))
                .await
                .unwrap()
        );
    }
}
