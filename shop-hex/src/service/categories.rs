//! Category application service.

use std::sync::Arc;

use shop_types::{
    AppError, CategoryId, CategoryRepository, CategoryResponse, CreateCategoryRequest,
    DomainError, Page, PageRequest, UpdateCategoryRequest,
};

/// Application service for category management.
pub struct CategoryService<R> {
    repo: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Creates a new category; name, sort order, and description are
    /// all required.
    pub async fn create(&self, req: CreateCategoryRequest) -> Result<CategoryResponse, AppError> {
        if req.name.trim().is_empty() {
            return Err(DomainError::Validation("category name cannot be empty".into()).into());
        }

        let category = self
            .repo
            .insert_category(&req.name, req.sort_order, &req.description)
            .await?;
        Ok(category.into())
    }

    pub async fn get_one(&self, id: CategoryId) -> Result<CategoryResponse, AppError> {
        let category = self
            .repo
            .find_category(id)
            .await?
            .ok_or(DomainError::CategoryNotFound)?;
        Ok(category.into())
    }

    /// Lists active categories ascending by sort order.
    pub async fn get_all(&self, page: PageRequest) -> Result<Page<CategoryResponse>, AppError> {
        Ok(self
            .repo
            .list_categories(page)
            .await?
            .map(CategoryResponse::from))
    }

    /// Applies the supplied fields to an active category.
    pub async fn update(
        &self,
        id: CategoryId,
        req: UpdateCategoryRequest,
    ) -> Result<CategoryResponse, AppError> {
        let mut category = self
            .repo
            .find_category(id)
            .await?
            .ok_or(DomainError::CategoryNotFound)?;

        if let Some(name) = req.name {
            category.name = name;
        }
        if let Some(sort_order) = req.sort_order {
            category.sort_order = sort_order;
        }
        if let Some(description) = req.description {
            category.description = description;
        }

        self.repo.update_category(&category).await?;
        Ok(category.into())
    }

    pub async fn delete(&self, id: CategoryId) -> Result<(), AppError> {
        if !self.repo.trash_category(id).await? {
            return Err(DomainError::CategoryNotFound.into());
        }
        Ok(())
    }
}
