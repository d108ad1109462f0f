//! Application service unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use shop_types::{
        AppError, Category, CategoryId, CategoryRepository, CreateCategoryRequest,
        CreateProductRequest, CreateTransactionItem, CreateTransactionRequest, CreateUserRequest,
        DomainError, FillBalanceRequest, Money, NewTransactionItem, Page, PageRequest,
        PaymentRepository, PaymentTransaction, PaymentTransactionId, Product, ProductId,
        ProductRepository, PurchaseRecord, RepoError, Transaction, TransactionId, TransactionItem,
        TransactionItemId, TransactionItemRepository, TransactionRepository, UpdateProductRequest,
        UpdateUserRequest, User, UserId, UserRepository, UserRole,
    };

    use crate::service::{
        CategoryService, PaymentService, ProductService, TransactionItemService,
        TransactionService, UserService,
    };

    // ─────────────────────────────────────────────────────────────────────────
    // In-memory repository
    // ─────────────────────────────────────────────────────────────────────────

    #[derive(Default)]
    struct State {
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
        transactions: Vec<Transaction>,
        transaction_items: Vec<TransactionItem>,
        payments: Vec<PaymentTransaction>,
        next_id: i64,
    }

    impl State {
        fn next_id(&mut self) -> i64 {
            self.next_id += 1;
            self.next_id
        }
    }

    /// Simple in-memory repository for testing the service layer.
    pub struct MockRepo {
        state: Mutex<State>,
    }

    impl MockRepo {
        pub fn new() -> Self {
            Self {
                state: Mutex::new(State::default()),
            }
        }
    }

    fn paginate<T: Clone>(rows: Vec<T>, page: PageRequest) -> Page<T> {
        let total = rows.len() as u64;
        let start = (page.offset() as usize).min(rows.len());
        let end = (start + page.limit() as usize).min(rows.len());
        Page::new(rows[start..end].to_vec(), page, total)
    }

    #[async_trait]
    impl UserRepository for MockRepo {
        async fn insert_user(&self, full_name: &str, user_name: &str) -> Result<User, RepoError> {
            let mut state = self.state.lock().unwrap();
            let id = state.next_id();
            let user = User::from_parts(
                UserId::from_i64(id),
                full_name.to_string(),
                user_name.to_string(),
                UserRole::User,
                Money::ZERO,
                false,
            );
            state.users.push(user.clone());
            Ok(user)
        }

        async fn find_user(&self, id: UserId) -> Result<Option<User>, RepoError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .users
                .iter()
                .find(|u| u.id == id && !u.deleted)
                .cloned())
        }

        async fn find_user_by_name(&self, user_name: &str) -> Result<Option<User>, RepoError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .users
                .iter()
                .find(|u| u.user_name == user_name && !u.deleted)
                .cloned())
        }

        async fn find_other_user_by_name(
            &self,
            id: UserId,
            user_name: &str,
        ) -> Result<Option<User>, RepoError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .users
                .iter()
                .find(|u| u.user_name == user_name && u.id != id && !u.deleted)
                .cloned())
        }

        async fn update_user(&self, user: &User) -> Result<(), RepoError> {
            let mut state = self.state.lock().unwrap();
            if let Some(stored) = state
                .users
                .iter_mut()
                .find(|u| u.id == user.id && !u.deleted)
            {
                *stored = user.clone();
            }
            Ok(())
        }

        async fn list_users(&self, page: PageRequest) -> Result<Page<User>, RepoError> {
            let state = self.state.lock().unwrap();
            let active: Vec<User> = state.users.iter().filter(|u| !u.deleted).cloned().collect();
            Ok(paginate(active, page))
        }

        async fn trash_user(&self, id: UserId) -> Result<bool, RepoError> {
            let mut state = self.state.lock().unwrap();
            match state.users.iter_mut().find(|u| u.id == id && !u.deleted) {
                Some(user) => {
                    user.deleted = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    #[async_trait]
    impl CategoryRepository for MockRepo {
        async fn insert_category(
            &self,
            name: &str,
            sort_order: i64,
            description: &str,
        ) -> Result<Category, RepoError> {
            let mut state = self.state.lock().unwrap();
            let id = state.next_id();
            let category = Category::from_parts(
                CategoryId::from_i64(id),
                name.to_string(),
                sort_order,
                description.to_string(),
                false,
            );
            state.categories.push(category.clone());
            Ok(category)
        }

        async fn find_category(&self, id: CategoryId) -> Result<Option<Category>, RepoError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .categories
                .iter()
                .find(|c| c.id == id && !c.deleted)
                .cloned())
        }

        async fn update_category(&self, category: &Category) -> Result<(), RepoError> {
            let mut state = self.state.lock().unwrap();
            if let Some(stored) = state
                .categories
                .iter_mut()
                .find(|c| c.id == category.id && !c.deleted)
            {
                *stored = category.clone();
            }
            Ok(())
        }

        async fn list_categories(&self, page: PageRequest) -> Result<Page<Category>, RepoError> {
            let state = self.state.lock().unwrap();
            let mut active: Vec<Category> = state
                .categories
                .iter()
                .filter(|c| !c.deleted)
                .cloned()
                .collect();
            active.sort_by_key(|c| c.sort_order);
            Ok(paginate(active, page))
        }

        async fn trash_category(&self, id: CategoryId) -> Result<bool, RepoError> {
            let mut state = self.state.lock().unwrap();
            match state
                .categories
                .iter_mut()
                .find(|c| c.id == id && !c.deleted)
            {
                Some(category) => {
                    category.deleted = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    #[async_trait]
    impl ProductRepository for MockRepo {
        async fn insert_product(
            &self,
            name: &str,
            count: i64,
            category_id: CategoryId,
        ) -> Result<Product, RepoError> {
            let mut state = self.state.lock().unwrap();
            let id = state.next_id();
            let product = Product::from_parts(
                ProductId::from_i64(id),
                name.to_string(),
                count,
                category_id,
                false,
            );
            state.products.push(product.clone());
            Ok(product)
        }

        async fn find_product(&self, id: ProductId) -> Result<Option<Product>, RepoError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .products
                .iter()
                .find(|p| p.id == id && !p.deleted)
                .cloned())
        }

        async fn update_product(&self, product: &Product) -> Result<(), RepoError> {
            let mut state = self.state.lock().unwrap();
            if let Some(stored) = state
                .products
                .iter_mut()
                .find(|p| p.id == product.id && !p.deleted)
            {
                *stored = product.clone();
            }
            Ok(())
        }

        async fn list_products(&self, page: PageRequest) -> Result<Page<Product>, RepoError> {
            let state = self.state.lock().unwrap();
            let active: Vec<Product> = state
                .products
                .iter()
                .filter(|p| !p.deleted)
                .cloned()
                .collect();
            Ok(paginate(active, page))
        }

        async fn trash_product(&self, id: ProductId) -> Result<bool, RepoError> {
            let mut state = self.state.lock().unwrap();
            match state.products.iter_mut().find(|p| p.id == id && !p.deleted) {
                Some(product) => {
                    product.deleted = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    #[async_trait]
    impl PaymentRepository for MockRepo {
        async fn record_payment(
            &self,
            user_id: UserId,
            amount: Money,
        ) -> Result<PaymentTransaction, RepoError> {
            let mut state = self.state.lock().unwrap();
            let id = state.next_id();
            let user = state
                .users
                .iter_mut()
                .find(|u| u.id == user_id && !u.deleted)
                .ok_or(RepoError::Domain(DomainError::UserNotFound))?;
            user.credit(amount).map_err(RepoError::Domain)?;
            let payment = PaymentTransaction::from_parts(
                PaymentTransactionId::from_i64(id),
                user_id,
                amount,
                Utc::now(),
                false,
            );
            state.payments.push(payment.clone());
            Ok(payment)
        }

        async fn find_payment(
            &self,
            id: PaymentTransactionId,
        ) -> Result<Option<PaymentTransaction>, RepoError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .payments
                .iter()
                .find(|p| p.id == id && !p.deleted)
                .cloned())
        }

        async fn list_payments(
            &self,
            page: PageRequest,
        ) -> Result<Page<PaymentTransaction>, RepoError> {
            let state = self.state.lock().unwrap();
            let active: Vec<PaymentTransaction> = state
                .payments
                .iter()
                .filter(|p| !p.deleted)
                .cloned()
                .collect();
            Ok(paginate(active, page))
        }

        async fn list_payments_for_user(
            &self,
            user_id: UserId,
            page: PageRequest,
        ) -> Result<Page<PaymentTransaction>, RepoError> {
            let state = self.state.lock().unwrap();
            let active: Vec<PaymentTransaction> = state
                .payments
                .iter()
                .filter(|p| p.user_id == user_id && !p.deleted)
                .cloned()
                .collect();
            Ok(paginate(active, page))
        }

        async fn trash_payment(&self, id: PaymentTransactionId) -> Result<bool, RepoError> {
            let mut state = self.state.lock().unwrap();
            match state.payments.iter_mut().find(|p| p.id == id && !p.deleted) {
                Some(payment) => {
                    payment.deleted = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    #[async_trait]
    impl TransactionRepository for MockRepo {
        async fn create_transaction(
            &self,
            user_id: UserId,
            total: Money,
            items: &[NewTransactionItem],
        ) -> Result<Transaction, RepoError> {
            let mut state = self.state.lock().unwrap();

            // Validate everything before mutating, so a failure leaves
            // no partial rows (the adapter gets this from rollback).
            for item in items {
                let product = state
                    .products
                    .iter()
                    .find(|p| p.id == item.product_id && !p.deleted)
                    .ok_or(RepoError::Domain(DomainError::ProductNotFound))?;
                if product.count < item.count {
                    return Err(RepoError::Domain(DomainError::NotEnoughProduct {
                        available: product.count,
                        requested: item.count,
                    }));
                }
            }

            let id = state.next_id();
            let transaction = Transaction::from_parts(
                TransactionId::from_i64(id),
                user_id,
                total,
                Utc::now(),
                false,
            );
            state.transactions.push(transaction.clone());

            for item in items {
                let line_total = item.line_total().map_err(RepoError::Domain)?;
                let item_id = state.next_id();
                let row = TransactionItem::from_parts(
                    TransactionItemId::from_i64(item_id),
                    transaction.id,
                    item.product_id,
                    item.count,
                    item.amount,
                    line_total,
                    false,
                );
                state.transaction_items.push(row);

                let product = state
                    .products
                    .iter_mut()
                    .find(|p| p.id == item.product_id)
                    .expect("validated above");
                product.take_stock(item.count).map_err(RepoError::Domain)?;
            }

            let user = state
                .users
                .iter_mut()
                .find(|u| u.id == user_id && !u.deleted)
                .ok_or(RepoError::Domain(DomainError::UserNotFound))?;
            user.debit(total).map_err(RepoError::Domain)?;

            Ok(transaction)
        }

        async fn find_transaction(
            &self,
            id: TransactionId,
        ) -> Result<Option<Transaction>, RepoError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .transactions
                .iter()
                .find(|t| t.id == id && !t.deleted)
                .cloned())
        }

        async fn list_transactions(
            &self,
            page: PageRequest,
        ) -> Result<Page<Transaction>, RepoError> {
            let state = self.state.lock().unwrap();
            let active: Vec<Transaction> = state
                .transactions
                .iter()
                .filter(|t| !t.deleted)
                .cloned()
                .collect();
            Ok(paginate(active, page))
        }

        async fn trash_transaction(&self, id: TransactionId) -> Result<bool, RepoError> {
            let mut state = self.state.lock().unwrap();
            match state
                .transactions
                .iter_mut()
                .find(|t| t.id == id && !t.deleted)
            {
                Some(transaction) => {
                    transaction.deleted = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }

        async fn find_user_purchases(
            &self,
            user_id: UserId,
            page: PageRequest,
        ) -> Result<Page<PurchaseRecord>, RepoError> {
            let state = self.state.lock().unwrap();
            let records = project(&state, |t| t.user_id == user_id);
            Ok(paginate(records, page))
        }

        async fn find_transaction_purchases(
            &self,
            transaction_id: TransactionId,
            page: PageRequest,
        ) -> Result<Page<PurchaseRecord>, RepoError> {
            let state = self.state.lock().unwrap();
            let records = project(&state, |t| t.id == transaction_id);
            Ok(paginate(records, page))
        }
    }

    /// Joins items with their transaction, product, and user the way
    /// the SQL projection does.
    fn project(state: &State, matches: impl Fn(&Transaction) -> bool) -> Vec<PurchaseRecord> {
        state
            .transaction_items
            .iter()
            .filter(|ti| !ti.deleted)
            .filter_map(|ti| {
                let transaction = state
                    .transactions
                    .iter()
                    .find(|t| t.id == ti.transaction_id && !t.deleted && matches(t))?;
                let product = state.products.iter().find(|p| p.id == ti.product_id)?;
                let user = state.users.iter().find(|u| u.id == transaction.user_id)?;
                Some(PurchaseRecord {
                    user_name: user.user_name.clone(),
                    product_name: product.name.clone(),
                    count: ti.count,
                    amount: ti.amount,
                    total_amount: ti.total_amount,
                })
            })
            .collect()
    }

    #[async_trait]
    impl TransactionItemRepository for MockRepo {
        async fn find_transaction_item(
            &self,
            id: TransactionItemId,
        ) -> Result<Option<TransactionItem>, RepoError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .transaction_items
                .iter()
                .find(|ti| ti.id == id && !ti.deleted)
                .cloned())
        }

        async fn list_transaction_items(
            &self,
            page: PageRequest,
        ) -> Result<Page<TransactionItem>, RepoError> {
            let state = self.state.lock().unwrap();
            let active: Vec<TransactionItem> = state
                .transaction_items
                .iter()
                .filter(|ti| !ti.deleted)
                .cloned()
                .collect();
            Ok(paginate(active, page))
        }

        async fn trash_transaction_item(&self, id: TransactionItemId) -> Result<bool, RepoError> {
            let mut state = self.state.lock().unwrap();
            match state
                .transaction_items
                .iter_mut()
                .find(|ti| ti.id == id && !ti.deleted)
            {
                Some(item) => {
                    item.deleted = true;
                    Ok(true)
                }
                None => Ok(false),
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Test fixtures
    // ─────────────────────────────────────────────────────────────────────────

    struct Services {
        users: UserService<MockRepo>,
        payments: PaymentService<MockRepo>,
        categories: CategoryService<MockRepo>,
        products: ProductService<MockRepo>,
        transactions: TransactionService<MockRepo>,
        transaction_items: TransactionItemService<MockRepo>,
    }

    fn services() -> Services {
        let repo = Arc::new(MockRepo::new());
        Services {
            users: UserService::new(repo.clone()),
            payments: PaymentService::new(repo.clone()),
            categories: CategoryService::new(repo.clone()),
            products: ProductService::new(repo.clone()),
            transactions: TransactionService::new(repo.clone()),
            transaction_items: TransactionItemService::new(repo),
        }
    }

    fn page() -> PageRequest {
        PageRequest { page: 0, size: 20 }
    }

    async fn create_user(services: &Services, user_name: &str) -> UserId {
        services
            .users
            .create(CreateUserRequest {
                full_name: "Test User".into(),
                user_name: user_name.into(),
            })
            .await
            .unwrap()
            .id
    }

    async fn fund(services: &Services, user_id: UserId, minor: i64) {
        services
            .payments
            .fill_balance(FillBalanceRequest {
                user_id,
                amount: Money::from_minor(minor),
            })
            .await
            .unwrap();
    }

    async fn create_product(services: &Services, name: &str, count: i64) -> ProductId {
        let category = services
            .categories
            .create(CreateCategoryRequest {
                name: "Beverages".into(),
                sort_order: 1,
                description: "Drinks".into(),
            })
            .await
            .unwrap();
        services
            .products
            .create(CreateProductRequest {
                name: name.into(),
                count,
                category_id: category.id,
            })
            .await
            .unwrap()
            .id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Users
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_user_starts_with_zero_balance() {
        let services = services();

        let user = services
            .users
            .create(CreateUserRequest {
                full_name: "Alice Example".into(),
                user_name: "alice".into(),
            })
            .await
            .unwrap();

        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.balance, Money::ZERO);
    }

    #[tokio::test]
    async fn test_create_duplicate_user_name_fails() {
        let services = services();
        create_user(&services, "alice").await;

        let result = services
            .users
            .create(CreateUserRequest {
                full_name: "Alice Clone".into(),
                user_name: "alice".into(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UserAlreadyExists))
        ));
    }

    #[tokio::test]
    async fn test_create_user_empty_name_fails() {
        let services = services();

        let result = services
            .users
            .create(CreateUserRequest {
                full_name: "   ".into(),
                user_name: "alice".into(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let services = services();

        let result = services.users.get_one(UserId::from_i64(42)).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UserNotFound))
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_omitted_fields() {
        let services = services();
        let id = create_user(&services, "alice").await;

        let updated = services
            .users
            .update(
                id,
                UpdateUserRequest {
                    full_name: Some("Alice Updated".into()),
                    user_name: None,
                    role: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.full_name, "Alice Updated");
        assert_eq!(updated.user_name, "alice");
        assert_eq!(updated.role, UserRole::User);
    }

    #[tokio::test]
    async fn test_rename_to_taken_name_fails() {
        let services = services();
        let alice = create_user(&services, "alice").await;
        create_user(&services, "bob").await;

        let result = services
            .users
            .update(
                alice,
                UpdateUserRequest {
                    user_name: Some("bob".into()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UserAlreadyExists))
        ));
    }

    #[tokio::test]
    async fn test_rename_to_own_name_succeeds() {
        let services = services();
        let alice = create_user(&services, "alice").await;

        let updated = services
            .users
            .update(
                alice,
                UpdateUserRequest {
                    user_name: Some("alice".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.user_name, "alice");
    }

    #[tokio::test]
    async fn test_delete_twice_fails_with_not_found() {
        let services = services();
        let alice = create_user(&services, "alice").await;

        services.users.delete(alice).await.unwrap();
        let result = services.users.delete(alice).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UserNotFound))
        ));
    }

    #[tokio::test]
    async fn test_listing_skips_deleted_users() {
        let services = services();
        let alice = create_user(&services, "alice").await;
        create_user(&services, "bob").await;

        services.users.delete(alice).await.unwrap();

        let listed = services.users.get_all(page()).await.unwrap();
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].user_name, "bob");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Payments
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_fill_balance_credits_user() {
        let services = services();
        let alice = create_user(&services, "alice").await;

        fund(&services, alice, 500).await;

        let user = services.users.get_one(alice).await.unwrap();
        assert_eq!(user.balance, Money::from_minor(500));
    }

    #[tokio::test]
    async fn test_fill_balance_non_positive_amount_rejected() {
        let services = services();
        let alice = create_user(&services, "alice").await;

        for minor in [0, -500] {
            let result = services
                .payments
                .fill_balance(FillBalanceRequest {
                    user_id: alice,
                    amount: Money::from_minor(minor),
                })
                .await;

            assert!(matches!(
                result,
                Err(AppError::Domain(DomainError::Validation(_)))
            ));
        }

        let user = services.users.get_one(alice).await.unwrap();
        assert_eq!(user.balance, Money::ZERO);
    }

    #[tokio::test]
    async fn test_fill_balance_unknown_user_fails() {
        let services = services();

        let result = services
            .payments
            .fill_balance(FillBalanceRequest {
                user_id: UserId::from_i64(42),
                amount: Money::from_minor(500),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UserNotFound))
        ));
    }

    #[tokio::test]
    async fn test_history_for_user_without_payments_is_empty_page() {
        let services = services();
        let alice = create_user(&services, "alice").await;

        let history = services.payments.get_history(alice, page()).await.unwrap();

        assert!(history.items.is_empty());
        assert_eq!(history.total_items, 0);
    }

    #[tokio::test]
    async fn test_history_for_unknown_user_fails() {
        let services = services();

        let result = services
            .payments
            .get_history(UserId::from_i64(42), page())
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UserNotFound))
        ));
    }

    #[tokio::test]
    async fn test_get_one_payment_not_found() {
        let services = services();

        let result = services
            .payments
            .get_one(PaymentTransactionId::from_i64(42))
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::PaymentTransactionNotFound))
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Categories & products
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_categories_listed_by_sort_order() {
        let services = services();

        for (name, sort_order) in [("Snacks", 3), ("Beverages", 1), ("Desserts", 2)] {
            services
                .categories
                .create(CreateCategoryRequest {
                    name: name.into(),
                    sort_order,
                    description: "...".into(),
                })
                .await
                .unwrap();
        }

        let listed = services.categories.get_all(page()).await.unwrap();
        let names: Vec<&str> = listed.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Beverages", "Desserts", "Snacks"]);
    }

    #[tokio::test]
    async fn test_create_product_requires_active_category() {
        let services = services();

        let result = services
            .products
            .create(CreateProductRequest {
                name: "Espresso".into(),
                count: 10,
                category_id: CategoryId::from_i64(42),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::CategoryNotFound))
        ));
    }

    #[tokio::test]
    async fn test_reassign_product_to_missing_category_fails() {
        let services = services();
        let product = create_product(&services, "Espresso", 10).await;

        let result = services
            .products
            .update(
                product,
                UpdateProductRequest {
                    category_id: Some(CategoryId::from_i64(42)),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::CategoryNotFound))
        ));
    }

    #[tokio::test]
    async fn test_product_partial_update_keeps_count() {
        let services = services();
        let product = create_product(&services, "Espresso", 10).await;

        let updated = services
            .products
            .update(
                product,
                UpdateProductRequest {
                    name: Some("Double Espresso".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Double Espresso");
        assert_eq!(updated.count, 10);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transactions
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_transaction_total_is_exact_sum() {
        let services = services();
        let alice = create_user(&services, "alice").await;
        fund(&services, alice, 850).await;

        let espresso = create_product(&services, "Espresso", 10).await;
        let cookie = create_product(&services, "Cookie", 5).await;

        // 2.50 x 3 + 1.00 x 1 = 8.50
        let transaction = services
            .transactions
            .create(CreateTransactionRequest {
                user_id: alice,
                items: vec![
                    CreateTransactionItem {
                        product_id: espresso,
                        count: 3,
                        amount: Money::from_minor(250),
                    },
                    CreateTransactionItem {
                        product_id: cookie,
                        count: 1,
                        amount: Money::from_minor(100),
                    },
                ],
            })
            .await
            .unwrap();

        assert_eq!(transaction.total_amount, Money::from_minor(850));

        // Boundary inclusive: the exactly-sufficient balance is spent to zero.
        let user = services.users.get_one(alice).await.unwrap();
        assert_eq!(user.balance, Money::ZERO);
    }

    #[tokio::test]
    async fn test_transaction_insufficient_balance_fails() {
        let services = services();
        let alice = create_user(&services, "alice").await;
        fund(&services, alice, 500).await;

        let espresso = create_product(&services, "Espresso", 10).await;

        let result = services
            .transactions
            .create(CreateTransactionRequest {
                user_id: alice,
                items: vec![CreateTransactionItem {
                    product_id: espresso,
                    count: 3,
                    amount: Money::from_minor(250),
                }],
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotEnoughBalance { .. }))
        ));

        // The failed purchase must not change the balance.
        let user = services.users.get_one(alice).await.unwrap();
        assert_eq!(user.balance, Money::from_minor(500));
    }

    #[tokio::test]
    async fn test_transaction_stock_shortfall_fails() {
        let services = services();
        let alice = create_user(&services, "alice").await;
        fund(&services, alice, 10_000).await;

        let scarce = create_product(&services, "Scarce Tea", 2).await;

        let result = services
            .transactions
            .create(CreateTransactionRequest {
                user_id: alice,
                items: vec![CreateTransactionItem {
                    product_id: scarce,
                    count: 3,
                    amount: Money::from_minor(100),
                }],
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotEnoughProduct {
                available: 2,
                requested: 3,
            }))
        ));
    }

    #[tokio::test]
    async fn test_transaction_exact_stock_succeeds() {
        let services = services();
        let alice = create_user(&services, "alice").await;
        fund(&services, alice, 10_000).await;

        let espresso = create_product(&services, "Espresso", 3).await;

        services
            .transactions
            .create(CreateTransactionRequest {
                user_id: alice,
                items: vec![CreateTransactionItem {
                    product_id: espresso,
                    count: 3,
                    amount: Money::from_minor(100),
                }],
            })
            .await
            .unwrap();

        let product = services.products.get_one(espresso).await.unwrap();
        assert_eq!(product.count, 0);
    }

    #[tokio::test]
    async fn test_transaction_without_items_rejected() {
        let services = services();
        let alice = create_user(&services, "alice").await;

        let result = services
            .transactions
            .create(CreateTransactionRequest {
                user_id: alice,
                items: vec![],
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn test_transaction_unknown_user_fails() {
        let services = services();
        let espresso = create_product(&services, "Espresso", 10).await;

        let result = services
            .transactions
            .create(CreateTransactionRequest {
                user_id: UserId::from_i64(42),
                items: vec![CreateTransactionItem {
                    product_id: espresso,
                    count: 1,
                    amount: Money::from_minor(250),
                }],
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UserNotFound))
        ));
    }

    #[tokio::test]
    async fn test_delete_transaction_soft_deletes_it() {
        let services = services();
        let alice = create_user(&services, "alice").await;
        fund(&services, alice, 1000).await;
        let espresso = create_product(&services, "Espresso", 10).await;

        let transaction = services
            .transactions
            .create(CreateTransactionRequest {
                user_id: alice,
                items: vec![CreateTransactionItem {
                    product_id: espresso,
                    count: 1,
                    amount: Money::from_minor(250),
                }],
            })
            .await
            .unwrap();

        services.transactions.delete(transaction.id).await.unwrap();

        let result = services.transactions.get_one(transaction.id).await;
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::TransactionNotFound))
        ));

        // The purchased product is untouched by the delete.
        assert!(services.products.get_one(espresso).await.is_ok());
    }

    #[tokio::test]
    async fn test_purchase_history_empty_for_fresh_user() {
        let services = services();
        let alice = create_user(&services, "alice").await;

        let records = services
            .transactions
            .purchased_products(alice, page())
            .await
            .unwrap();

        assert!(records.items.is_empty());
    }

    #[tokio::test]
    async fn test_purchase_history_projection() {
        let services = services();
        let alice = create_user(&services, "alice").await;
        fund(&services, alice, 1000).await;
        let espresso = create_product(&services, "Espresso", 10).await;

        services
            .transactions
            .create(CreateTransactionRequest {
                user_id: alice,
                items: vec![CreateTransactionItem {
                    product_id: espresso,
                    count: 3,
                    amount: Money::from_minor(250),
                }],
            })
            .await
            .unwrap();

        let records = services
            .transactions
            .purchased_products(alice, page())
            .await
            .unwrap();

        assert_eq!(records.items.len(), 1);
        assert_eq!(records.items[0].user_name, "alice");
        assert_eq!(records.items[0].product_name, "Espresso");
        assert_eq!(records.items[0].total_amount, Money::from_minor(750));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transaction items
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_transaction_items_read_and_delete() {
        let services = services();
        let alice = create_user(&services, "alice").await;
        fund(&services, alice, 1000).await;
        let espresso = create_product(&services, "Espresso", 10).await;

        services
            .transactions
            .create(CreateTransactionRequest {
                user_id: alice,
                items: vec![CreateTransactionItem {
                    product_id: espresso,
                    count: 2,
                    amount: Money::from_minor(250),
                }],
            })
            .await
            .unwrap();

        let listed = services.transaction_items.get_all(page()).await.unwrap();
        assert_eq!(listed.items.len(), 1);

        let item_id = listed.items[0].id;
        services.transaction_items.delete(item_id).await.unwrap();

        let result = services.transaction_items.get_one(item_id).await;
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::TransactionItemNotFound))
        ));
    }
}
