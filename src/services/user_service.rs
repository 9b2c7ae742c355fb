//! User service - Use-case orchestration for the `User` aggregate.
//!
//! Each operation is a single-purpose coordinator: load the aggregate
//! through the persistence port, invoke one aggregate operation, persist
//! the result. Existence and uniqueness checks always run before any
//! mutating call; errors propagate unchanged to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::ENTITY_USER;
use crate::domain::{
    ChangePassword, CreateUser, Email, Name, Password, Telephone, UpdateUser, User,
};
use crate::errors::{DomainError, DomainResult};
use crate::infra::{PasswordEncryptor, UserRepository};
use crate::types::{Paginated, PaginationParams};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user; email must not be in use
    async fn create_user(&self, data: CreateUser) -> DomainResult<User>;

    /// Replace name, email, and telephone of an existing user
    async fn update_user(&self, id: Uuid, data: UpdateUser) -> DomainResult<User>;

    /// Verify the current password and store a new hash
    async fn change_password(&self, id: Uuid, data: ChangePassword) -> DomainResult<User>;

    /// Transition the user to Active
    async fn activate_user(&self, id: Uuid) -> DomainResult<User>;

    /// Transition the user to Inactive
    async fn deactivate_user(&self, id: Uuid) -> DomainResult<User>;

    /// Transition the user to Blocked
    async fn block_user(&self, id: Uuid) -> DomainResult<User>;

    /// Remove the user from the persistence port
    async fn delete_user(&self, id: Uuid) -> DomainResult<()>;

    /// Get user by id
    async fn get_user(&self, id: Uuid) -> DomainResult<User>;

    /// Get user by email
    async fn get_user_by_email(&self, email: &str) -> DomainResult<User>;

    /// List one page of users
    async fn list_users(&self, params: PaginationParams) -> DomainResult<Paginated<User>>;
}

/// Concrete implementation of UserService over the two ports.
pub struct UserManager {
    repository: Arc<dyn UserRepository>,
    encryptor: Arc<dyn PasswordEncryptor>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repository: Arc<dyn UserRepository>, encryptor: Arc<dyn PasswordEncryptor>) -> Self {
        Self {
            repository,
            encryptor,
        }
    }

    async fn load(&self, id: Uuid) -> DomainResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY_USER, id))
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, data: CreateUser) -> DomainResult<User> {
        let email = Email::of(&data.email)?;

        // Uniqueness check runs before any hashing or construction side effect
        if self.repository.exists_by_email(&email).await? {
            return Err(DomainError::duplicate_email(email.as_str()));
        }

        let name = Name::of(&data.name)?;
        let telephone = Telephone::of(&data.telephone)?;
        let raw_password = Password::of_raw(&data.password)?;
        let password_hash = self.encryptor.encrypt(&raw_password)?;

        let user = User::new(Uuid::new_v4(), name, email, telephone, password_hash);
        let user = self.repository.save(user).await?;
        tracing::info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: Uuid, data: UpdateUser) -> DomainResult<User> {
        let mut user = self.load(id).await?;

        let name = Name::of(&data.name)?;
        let email = Email::of(&data.email)?;
        let telephone = Telephone::of(&data.telephone)?;

        // The user's own current email never conflicts with itself
        if &email != user.email() && self.repository.exists_by_email(&email).await? {
            return Err(DomainError::duplicate_email(email.as_str()));
        }

        user.update(name, email, telephone);
        let user = self.repository.save(user).await?;
        tracing::info!(user_id = %user.id(), "user updated");
        Ok(user)
    }

    async fn change_password(&self, id: Uuid, data: ChangePassword) -> DomainResult<User> {
        let mut user = self.load(id).await?;

        if !self
            .encryptor
            .matches(&data.current_password, user.password().as_str())
        {
            return Err(DomainError::matching(user.id()));
        }

        let raw_password = Password::of_raw(&data.new_password)?;
        let password_hash = self.encryptor.encrypt(&raw_password)?;

        user.change_password(password_hash);
        let user = self.repository.save(user).await?;
        tracing::info!(user_id = %user.id(), "password changed");
        Ok(user)
    }

    async fn activate_user(&self, id: Uuid) -> DomainResult<User> {
        let mut user = self.load(id).await?;
        user.activate()?;
        let user = self.repository.save(user).await?;
        tracing::info!(user_id = %user.id(), "user activated");
        Ok(user)
    }

    async fn deactivate_user(&self, id: Uuid) -> DomainResult<User> {
        let mut user = self.load(id).await?;
        user.deactivate()?;
        let user = self.repository.save(user).await?;
        tracing::info!(user_id = %user.id(), "user deactivated");
        Ok(user)
    }

    async fn block_user(&self, id: Uuid) -> DomainResult<User> {
        let mut user = self.load(id).await?;
        user.block()?;
        let user = self.repository.save(user).await?;
        tracing::info!(user_id = %user.id(), "user blocked");
        Ok(user)
    }

    async fn delete_user(&self, id: Uuid) -> DomainResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(DomainError::not_found(ENTITY_USER, id));
        }
        self.repository.delete(id).await?;
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }

    async fn get_user(&self, id: Uuid) -> DomainResult<User> {
        self.load(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<User> {
        let email = Email::of(email)?;
        self.repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::not_found_by_email(ENTITY_USER, email.as_str()))
    }

    async fn list_users(&self, params: PaginationParams) -> DomainResult<Paginated<User>> {
        let (users, total) = self.repository.find_all(&params).await?;
        Ok(Paginated::new(users, params.page, params.limit(), total))
    }
}
