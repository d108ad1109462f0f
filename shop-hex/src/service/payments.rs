//! Balance top-up application service.

use std::sync::Arc;

use shop_types::{
    AppError, DomainError, FillBalanceRequest, Money, Page, PageRequest, PaymentRepository,
    PaymentResponse, PaymentTransactionId, UserId, UserRepository,
};

/// Application service for balance top-ups and their history.
pub struct PaymentService<R> {
    repo: Arc<R>,
}

impl<R: PaymentRepository + UserRepository> PaymentService<R> {
    /// Creates a new payment service sharing the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Records a top-up and credits the user's balance atomically.
    ///
    /// Non-positive amounts are rejected; a top-up can only ever
    /// increase the balance.
    pub async fn fill_balance(&self, req: FillBalanceRequest) -> Result<PaymentResponse, AppError> {
        if req.amount <= Money::ZERO {
            return Err(DomainError::Validation("top-up amount must be positive".into()).into());
        }

        let user = self
            .repo
            .find_user(req.user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let payment = self.repo.record_payment(user.id, req.amount).await?;
        Ok(payment.into())
    }

    /// Lists one user's top-ups, paginated.
    ///
    /// A user with zero payments gets an empty page, not an error.
    pub async fn get_history(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<Page<PaymentResponse>, AppError> {
        self.repo
            .find_user(user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        Ok(self
            .repo
            .list_payments_for_user(user_id, page)
            .await?
            .map(PaymentResponse::from))
    }

    /// Lists all active top-ups, paginated.
    pub async fn get_all(&self, page: PageRequest) -> Result<Page<PaymentResponse>, AppError> {
        Ok(self
            .repo
            .list_payments(page)
            .await?
            .map(PaymentResponse::from))
    }

    /// Gets one active top-up by id.
    pub async fn get_one(&self, id: PaymentTransactionId) -> Result<PaymentResponse, AppError> {
        let payment = self
            .repo
            .find_payment(id)
            .await?
            .ok_or(DomainError::PaymentTransactionNotFound)?;
        Ok(payment.into())
    }

    /// Soft-deletes an active top-up record.
    pub async fn delete(&self, id: PaymentTransactionId) -> Result<(), AppError> {
        if !self.repo.trash_payment(id).await? {
            return Err(DomainError::PaymentTransactionNotFound.into());
        }
        Ok(())
    }
}
