//! Transaction item application service (read/delete only).

use std::sync::Arc;

use shop_types::{
    AppError, DomainError, Page, PageRequest, TransactionItemId, TransactionItemRepository,
    TransactionItemResponse,
};

/// Application service for purchase lines.
pub struct TransactionItemService<R> {
    repo: Arc<R>,
}

impl<R: TransactionItemRepository> TransactionItemService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_one(&self, id: TransactionItemId) -> Result<TransactionItemResponse, AppError> {
        let item = self
            .repo
            .find_transaction_item(id)
            .await?
            .ok_or(DomainError::TransactionItemNotFound)?;
        Ok(item.into())
    }

    pub async fn get_all(
        &self,
        page: PageRequest,
    ) -> Result<Page<TransactionItemResponse>, AppError> {
        Ok(self
            .repo
            .list_transaction_items(page)
            .await?
            .map(TransactionItemResponse::from))
    }

    pub async fn delete(&self, id: TransactionItemId) -> Result<(), AppError> {
        if !self.repo.trash_transaction_item(id).await? {
            return Err(DomainError::TransactionItemNotFound.into());
        }
        Ok(())
    }
}
