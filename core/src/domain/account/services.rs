use chrono::Utc;

use crate::domain::{
    account::{
        entities::{Account, AccountRole},
        ports::{AccountRepository, AuthService},
        value_objects::{AuthOutput, LoginInput, RegisterAccountInput},
    },
    authentication::value_objects::Identity,
    common::{CoreError, services::Service},
    crypto::ports::HasherRepository,
    listing::ports::ListingRepository,
};

const REGISTRATION_RESTRICTED: &str = "Registration is restricted. Please login as admin.";
const EMAIL_TAKEN: &str = "User with this email already exists";

impl<L, A, H> AuthService for Service<L, A, H>
where
    L: ListingRepository,
    A: AccountRepository,
    H: HasherRepository,
{
    async fn register(
        &self,
        identity: Option<Identity>,
        input: RegisterAccountInput,
    ) -> Result<AuthOutput, CoreError> {
        let existing = self.account_repository.count().await?;

        let (role, is_bootstrap) = if existing == 0 {
            // The first account always becomes admin, whatever was asked for.
            (AccountRole::Admin, true)
        } else {
            let identity = identity
                .ok_or_else(|| CoreError::Unauthorized(REGISTRATION_RESTRICTED.to_string()))?;
            if !identity.is_admin() {
                return Err(CoreError::Forbidden(
                    "Only administrators can create new users".to_string(),
                ));
            }
            let requested = input.role.as_deref().unwrap_or("admin");
            let role = requested.parse().map_err(|_| {
                CoreError::Validation(format!(
                    "{requested} is not a valid enum value for path `role`"
                ))
            })?;
            (role, false)
        };

        if self
            .account_repository
            .find_by_email(input.email.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::Validation(EMAIL_TAKEN.to_string()));
        }

        let password_hash = self.hasher.hash_password(input.password).await?;
        let account = Account::new(input.name, input.email, password_hash, role, is_bootstrap);

        let account = match self.account_repository.insert(account).await {
            Ok(account) => account,
            // Lost the bootstrap claim to a concurrent registration: the
            // store is no longer empty, so this caller needs admin auth.
            Err(CoreError::Duplicate { field }) if field == "bootstrap" => {
                return Err(CoreError::Unauthorized(REGISTRATION_RESTRICTED.to_string()));
            }
            Err(CoreError::Duplicate { field }) if field == "email" => {
                return Err(CoreError::Validation(EMAIL_TAKEN.to_string()));
            }
            Err(err) => return Err(err),
        };

        let token = self.jwt.issue(&account)?;
        Ok(AuthOutput { account, token })
    }

    async fn login(&self, input: LoginInput) -> Result<AuthOutput, CoreError> {
        let mut account = self
            .account_repository
            .find_by_email(input.email)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let verified = self
            .hasher
            .verify_password(input.password, account.password_hash.clone())
            .await?;
        if !verified {
            return Err(CoreError::InvalidCredentials);
        }

        let now = Utc::now();
        self.account_repository
            .update_last_login(account.id, now)
            .await?;
        account.last_login_at = Some(now);

        let token = self.jwt.issue(&account)?;
        Ok(AuthOutput { account, token })
    }

    async fn authorize(&self, token: String) -> Result<Identity, CoreError> {
        let claims = self.jwt.verify(&token)?;

        let account = self
            .account_repository
            .find_by_id(claims.sub)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        Ok(Identity::new(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        account::ports::MockAccountRepository,
        common::AuthConfig,
        crypto::ports::MockHasherRepository,
        jwt::services::JwtManager,
        listing::ports::MockListingRepository,
    };

    type TestService =
        Service<MockListingRepository, MockAccountRepository, MockHasherRepository>;

    fn service(accounts: MockAccountRepository, hasher: MockHasherRepository) -> TestService {
        Service::new(
            MockListingRepository::new(),
            accounts,
            hasher,
            JwtManager::new(&AuthConfig {
                jwt_secret: "test-secret".to_string(),
                token_ttl_secs: 3600,
            }),
        )
    }

    fn register_input(role: Option<&str>) -> RegisterAccountInput {
        RegisterAccountInput {
            name: "First Admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "hunter42".to_string(),
            role: role.map(str::to_string),
        }
    }

    fn stored_account(role: AccountRole) -> Account {
        Account::new(
            "Someone".to_string(),
            "someone@example.com".to_string(),
            "stored-hash".to_string(),
            role,
            false,
        )
    }

    #[tokio::test]
    async fn first_registration_is_forced_admin_even_if_user_was_requested() {
        let mut accounts = MockAccountRepository::new();
        accounts.expect_count().returning(|| Box::pin(async { Ok(0) }));
        accounts.expect_find_by_email().returning(|_| Box::pin(async { Ok(None) }));
        accounts.expect_insert().returning(|a| Box::pin(async { Ok(a) }));

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_hash_password()
            .returning(|_| Box::pin(async { Ok("hashed".to_string()) }));

        let output = service(accounts, hasher)
            .register(None, register_input(Some("user")))
            .await
            .unwrap();

        assert_eq!(output.account.role, AccountRole::Admin);
        assert!(output.account.is_bootstrap);
        assert!(!output.token.is_empty());
    }

    #[tokio::test]
    async fn second_registration_without_identity_is_unauthorized() {
        let mut accounts = MockAccountRepository::new();
        accounts.expect_count().returning(|| Box::pin(async { Ok(1) }));

        let err = service(accounts, MockHasherRepository::new())
            .register(None, register_input(None))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::Unauthorized(REGISTRATION_RESTRICTED.to_string())
        );
    }

    #[tokio::test]
    async fn second_registration_by_non_admin_is_forbidden() {
        let mut accounts = MockAccountRepository::new();
        accounts.expect_count().returning(|| Box::pin(async { Ok(1) }));

        let identity = Identity::new(stored_account(AccountRole::User));
        let err = service(accounts, MockHasherRepository::new())
            .register(Some(identity), register_input(None))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::Forbidden("Only administrators can create new users".to_string())
        );
    }

    #[tokio::test]
    async fn losing_the_bootstrap_claim_reads_as_restricted_registration() {
        let mut accounts = MockAccountRepository::new();
        accounts.expect_count().returning(|| Box::pin(async { Ok(0) }));
        accounts.expect_find_by_email().returning(|_| Box::pin(async { Ok(None) }));
        accounts.expect_insert().returning(|_| {
            Box::pin(async {
                Err(CoreError::Duplicate {
                    field: "bootstrap".to_string(),
                })
            })
        });

        let mut hasher = MockHasherRepository::new();
        hasher
            .expect_hash_password()
            .returning(|_| Box::pin(async { Ok("hashed".to_string()) }));

        let err = service(accounts, hasher)
            .register(None, register_input(None))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::Unauthorized(REGISTRATION_RESTRICTED.to_string())
        );
    }

    #[tokio::test]
    async fn duplicate_email_is_a_validation_error() {
        let mut accounts = MockAccountRepository::new();
        accounts.expect_count().returning(|| Box::pin(async { Ok(1) }));
        accounts
            .expect_find_by_email()
            .returning(|_| Box::pin(async { Ok(Some(stored_account(AccountRole::User))) }));

        let identity = Identity::new(stored_account(AccountRole::Admin));
        let err = service(accounts, MockHasherRepository::new())
            .register(Some(identity), register_input(None))
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Validation(EMAIL_TAKEN.to_string()));
    }

    #[tokio::test]
    async fn login_with_wrong_password_is_rejected() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_email()
            .returning(|_| Box::pin(async { Ok(Some(stored_account(AccountRole::Admin))) }));

        let mut hasher = MockHasherRepository::new();
        hasher.expect_verify_password().returning(|_, _| Box::pin(async { Ok(false) }));

        let err = service(accounts, hasher)
            .login(LoginInput {
                email: "someone@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::InvalidCredentials);
    }

    #[tokio::test]
    async fn login_with_unknown_email_is_rejected_identically() {
        let mut accounts = MockAccountRepository::new();
        accounts.expect_find_by_email().returning(|_| Box::pin(async { Ok(None) }));

        let err = service(accounts, MockHasherRepository::new())
            .login(LoginInput {
                email: "ghost@example.com".to_string(),
                password: "whatever".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::InvalidCredentials);
    }

    #[tokio::test]
    async fn login_stamps_last_login_and_issues_a_token() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_email()
            .returning(|_| Box::pin(async { Ok(Some(stored_account(AccountRole::Admin))) }));
        accounts
            .expect_update_last_login()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let mut hasher = MockHasherRepository::new();
        hasher.expect_verify_password().returning(|_, _| Box::pin(async { Ok(true) }));

        let output = service(accounts, hasher)
            .login(LoginInput {
                email: "someone@example.com".to_string(),
                password: "correct".to_string(),
            })
            .await
            .unwrap();

        assert!(output.account.last_login_at.is_some());
        assert!(!output.token.is_empty());
    }

    #[tokio::test]
    async fn authorize_resolves_the_account_behind_a_valid_token() {
        let account = stored_account(AccountRole::Admin);
        let looked_up = account.clone();

        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_id()
            .returning(move |_| {
                let looked_up = looked_up.clone();
                Box::pin(async move { Ok(Some(looked_up)) })
            });

        let service = service(accounts, MockHasherRepository::new());
        let token = service.jwt.issue(&account).unwrap();

        let identity = service.authorize(token).await.unwrap();
        assert_eq!(identity.account.id, account.id);
        assert!(identity.is_admin());
    }

    #[tokio::test]
    async fn authorize_rejects_garbage_tokens() {
        let service = service(MockAccountRepository::new(), MockHasherRepository::new());
        let err = service.authorize("not-a-token".to_string()).await.unwrap_err();
        assert_eq!(err, CoreError::InvalidToken);
    }
}
