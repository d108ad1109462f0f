//! Transaction (purchase) application service.

use std::sync::Arc;

use shop_types::{
    AppError, CreateTransactionRequest, DomainError, Money, NewTransactionItem, Page, PageRequest,
    PurchaseRecord, TransactionId, TransactionRepository, TransactionResponse, UserId,
    UserRepository,
};

/// Application service for purchases.
///
/// The service resolves the buyer, computes the exact total, and checks
/// balance sufficiency against the pre-transaction balance; the
/// repository then performs the whole multi-row write atomically.
pub struct TransactionService<R> {
    repo: Arc<R>,
}

impl<R: TransactionRepository + UserRepository> TransactionService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Creates a purchase for a user.
    ///
    /// Fails with `NotEnoughBalance` when the balance is below the
    /// computed total (an exactly equal balance succeeds); stock
    /// sufficiency is enforced per item inside the atomic write.
    pub async fn create(
        &self,
        req: CreateTransactionRequest,
    ) -> Result<TransactionResponse, AppError> {
        if req.items.is_empty() {
            return Err(DomainError::Validation(
                "transaction must contain at least one item".into(),
            )
            .into());
        }

        let user = self
            .repo
            .find_user(req.user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let mut total = Money::ZERO;
        let mut items = Vec::with_capacity(req.items.len());

        for item in &req.items {
            if item.count <= 0 {
                return Err(
                    DomainError::Validation("item count must be positive".into()).into(),
                );
            }
            if item.amount.is_negative() {
                return Err(
                    DomainError::Validation("item amount cannot be negative".into()).into(),
                );
            }

            let item = NewTransactionItem {
                product_id: item.product_id,
                count: item.count,
                amount: item.amount,
            };
            total = total.checked_add(item.line_total()?)?;
            items.push(item);
        }

        if !user.has_sufficient_balance(total) {
            return Err(DomainError::NotEnoughBalance {
                available: user.balance,
                requested: total,
            }
            .into());
        }

        let transaction = self.repo.create_transaction(user.id, total, &items).await?;
        Ok(transaction.into())
    }

    pub async fn get_one(&self, id: TransactionId) -> Result<TransactionResponse, AppError> {
        let transaction = self
            .repo
            .find_transaction(id)
            .await?
            .ok_or(DomainError::TransactionNotFound)?;
        Ok(transaction.into())
    }

    pub async fn get_all(&self, page: PageRequest) -> Result<Page<TransactionResponse>, AppError> {
        Ok(self
            .repo
            .list_transactions(page)
            .await?
            .map(TransactionResponse::from))
    }

    /// Soft-deletes the transaction row itself.
    pub async fn delete(&self, id: TransactionId) -> Result<(), AppError> {
        if !self.repo.trash_transaction(id).await? {
            return Err(DomainError::TransactionNotFound.into());
        }
        Ok(())
    }

    /// Purchase history for one user; empty page when there is none.
    pub async fn purchased_products(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<Page<PurchaseRecord>, AppError> {
        Ok(self.repo.find_user_purchases(user_id, page).await?)
    }

    /// Purchased lines of one transaction; empty page when none match.
    pub async fn transaction_products(
        &self,
        transaction_id: TransactionId,
        page: PageRequest,
    ) -> Result<Page<PurchaseRecord>, AppError> {
        Ok(self
            .repo
            .find_transaction_purchases(transaction_id, page)
            .await?)
    }
}
