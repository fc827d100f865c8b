use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::AuthError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{EmailSender, OtpGenerator, PasswordHasher, TokenIssuer};

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
        async fn find_by_line_id(&self, line_id: Uuid) -> Result<Option<Cart>, RepositoryError>;
        async fn save(&self, cart: &Cart) -> Result<i64, RepositoryError>;
        async fn delete_by_user_id(&self, user_id: &UserId) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
        async fn create(&self, user: &User) -> Result<(), RepositoryError>;
        async fn save(&self, user: &User) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Hasher {}

    impl PasswordHasher for Hasher {
        fn hash(&self, password: &str) -> Result<String, AuthError>;
        fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
    }
}

mock! {
    pub Tokens {}

    impl TokenIssuer for Tokens {
        fn issue(&self, user_id: &UserId) -> Result<String, AuthError>;
    }
}

mock! {
    pub Mailer {}

    #[async_trait]
    impl EmailSender for Mailer {
        async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), AuthError>;
    }
}

mock! {
    pub Otp {}

    impl OtpGenerator for Otp {
        fn generate(&self) -> String;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Cart store honoring the same conditional-write contract as the Postgres adapter.
#[derive(Default)]
pub struct InMemoryCartRepo {
    carts: std::sync::Mutex<std::collections::HashMap<UserId, Cart>>,
}

#[async_trait]
impl CartRepository for InMemoryCartRepo {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError> {
        Ok(self.carts.lock().unwrap().get(user_id).cloned())
    }

    async fn find_by_line_id(&self, line_id: Uuid) -> Result<Option<Cart>, RepositoryError> {
        Ok(self
            .carts
            .lock()
            .unwrap()
            .values()
            .find(|cart| cart.items.iter().any(|line| line.id == line_id))
            .cloned())
    }

    async fn save(&self, cart: &Cart) -> Result<i64, RepositoryError> {
        let mut carts = self.carts.lock().unwrap();
        let stored_version = carts.get(&cart.user_id).map(|c| c.version).unwrap_or(0);
        if stored_version != cart.version {
            return Err(RepositoryError::Conflict);
        }
        let mut stored = cart.clone();
        stored.version += 1;
        carts.insert(cart.user_id.clone(), stored);
        Ok(cart.version + 1)
    }

    async fn delete_by_user_id(&self, user_id: &UserId) -> Result<bool, RepositoryError> {
        Ok(self.carts.lock().unwrap().remove(user_id).is_some())
    }
}

#[derive(Default)]
pub struct InMemoryProductRepo {
    products: std::sync::Mutex<Vec<Product>>,
}

impl InMemoryProductRepo {
    pub fn with(products: Vec<Product>) -> Self {
        Self {
            products: std::sync::Mutex::new(products),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepo {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }
}
