// src/application/ports/identity.rs
use crate::domain::user::UserId;

/// Who is using the application right now. Answered synchronously; `None` means anonymous.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}
