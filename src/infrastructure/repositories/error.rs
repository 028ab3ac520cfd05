use crate::application::ports::store::StoreError;
use crate::domain::errors::DomainError;

pub fn map_store(err: StoreError) -> DomainError {
    match err {
        StoreError::Forbidden(msg) => DomainError::Forbidden(msg),
        StoreError::Backend(msg) => DomainError::Persistence(msg),
    }
}
