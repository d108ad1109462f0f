//! User application service.

use std::sync::Arc;

use shop_types::{
    AppError, CreateUserRequest, DomainError, Page, PageRequest, UpdateUserRequest, UserId,
    UserRepository, UserResponse,
};

/// Application service for user management.
///
/// Generic over `R: UserRepository` - the adapter is injected at
/// compile time, so tests can run against an in-memory repo.
pub struct UserService<R> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service sharing the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Creates a new user with role `USER` and zero balance.
    ///
    /// Fails with `UserAlreadyExists` if an active user holds the name.
    pub async fn create(&self, req: CreateUserRequest) -> Result<UserResponse, AppError> {
        if req.full_name.trim().is_empty() || req.user_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "full_name and user_name cannot be empty".into(),
            )
            .into());
        }

        if self.repo.find_user_by_name(&req.user_name).await?.is_some() {
            return Err(DomainError::UserAlreadyExists.into());
        }

        let user = self
            .repo
            .insert_user(&req.full_name, &req.user_name)
            .await?;
        Ok(user.into())
    }

    /// Gets an active user by id.
    pub async fn get_one(&self, id: UserId) -> Result<UserResponse, AppError> {
        let user = self
            .repo
            .find_user(id)
            .await?
            .ok_or(DomainError::UserNotFound)?;
        Ok(user.into())
    }

    /// Lists active users, paginated.
    pub async fn get_all(&self, page: PageRequest) -> Result<Page<UserResponse>, AppError> {
        Ok(self.repo.list_users(page).await?.map(UserResponse::from))
    }

    /// Applies the supplied fields to an active user.
    ///
    /// Renaming to a name held by a *different* active user fails with
    /// `UserAlreadyExists`; renaming to the current name succeeds.
    pub async fn update(
        &self,
        id: UserId,
        req: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        let mut user = self
            .repo
            .find_user(id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        if let Some(user_name) = req.user_name {
            if self
                .repo
                .find_other_user_by_name(id, &user_name)
                .await?
                .is_some()
            {
                return Err(DomainError::UserAlreadyExists.into());
            }
            user.user_name = user_name;
        }
        if let Some(full_name) = req.full_name {
            user.full_name = full_name;
        }
        if let Some(role) = req.role {
            user.role = role;
        }

        self.repo.update_user(&user).await?;
        Ok(user.into())
    }

    /// Soft-deletes an active user.
    pub async fn delete(&self, id: UserId) -> Result<(), AppError> {
        if !self.repo.trash_user(id).await? {
            return Err(DomainError::UserNotFound.into());
        }
        Ok(())
    }
}
