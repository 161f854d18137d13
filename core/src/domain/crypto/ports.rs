use crate::domain::common::CoreError;

#[cfg_attr(test, mockall::automock)]
pub trait HasherRepository: Send + Sync {
    fn hash_password(
        &self,
        password: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn verify_password(
        &self,
        password: String,
        hash: String,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
