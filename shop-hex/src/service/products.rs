//! Product application service.

use std::sync::Arc;

use shop_types::{
    AppError, CategoryRepository, CreateProductRequest, DomainError, Page, PageRequest, ProductId,
    ProductRepository, ProductResponse, UpdateProductRequest,
};

/// Application service for product management.
pub struct ProductService<R> {
    repo: Arc<R>,
}

impl<R: ProductRepository + CategoryRepository> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Creates a new product in an active category.
    pub async fn create(&self, req: CreateProductRequest) -> Result<ProductResponse, AppError> {
        if req.count < 0 {
            return Err(DomainError::Validation("stock count cannot be negative".into()).into());
        }

        self.repo
            .find_category(req.category_id)
            .await?
            .ok_or(DomainError::CategoryNotFound)?;

        let product = self
            .repo
            .insert_product(&req.name, req.count, req.category_id)
            .await?;
        Ok(product.into())
    }

    pub async fn get_one(&self, id: ProductId) -> Result<ProductResponse, AppError> {
        let product = self
            .repo
            .find_product(id)
            .await?
            .ok_or(DomainError::ProductNotFound)?;
        Ok(product.into())
    }

    pub async fn get_all(&self, page: PageRequest) -> Result<Page<ProductResponse>, AppError> {
        Ok(self
            .repo
            .list_products(page)
            .await?
            .map(ProductResponse::from))
    }

    /// Applies the supplied fields to an active product.
    ///
    /// Reassigning the category verifies the target is active.
    pub async fn update(
        &self,
        id: ProductId,
        req: UpdateProductRequest,
    ) -> Result<ProductResponse, AppError> {
        let mut product = self
            .repo
            .find_product(id)
            .await?
            .ok_or(DomainError::ProductNotFound)?;

        if let Some(name) = req.name {
            product.name = name;
        }
        if let Some(count) = req.count {
            if count < 0 {
                return Err(
                    DomainError::Validation("stock count cannot be negative".into()).into(),
                );
            }
            product.count = count;
        }
        if let Some(category_id) = req.category_id {
            self.repo
                .find_category(category_id)
                .await?
                .ok_or(DomainError::CategoryNotFound)?;
            product.category_id = category_id;
        }

        self.repo.update_product(&product).await?;
        Ok(product.into())
    }

    pub async fn delete(&self, id: ProductId) -> Result<(), AppError> {
        if !self.repo.trash_product(id).await? {
            return Err(DomainError::ProductNotFound.into());
        }
        Ok(())
    }
}
