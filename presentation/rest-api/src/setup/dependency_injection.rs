use std::sync::Arc;

use business::domain::logger::Logger;
use business::domain::user::services::{EmailSender, RandomOtpGenerator};
use logger::TracingLogger;
use mailer::{HttpEmailSender, LogEmailSender, MailApiClient};
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use security::{Argon2PasswordHasher, JwtTokenIssuer};

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_line::RemoveCartLineUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::logout::LogoutUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;
use business::application::user::verify_otp::VerifyOtpUseCaseImpl;

use crate::api::auth::routes::AuthApi;
use crate::api::cart::routes::CartApi;
use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::auth_config::AuthConfig;
use crate::config::mail_config::MailConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub auth_api: AuthApi,
    pub product_api: ProductApi,
    pub cart_api: CartApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, auth: &AuthConfig, mail: &MailConfig) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));
        let hasher = Arc::new(Argon2PasswordHasher::new());
        let token_issuer = Arc::new(JwtTokenIssuer::new(&auth.jwt_secret, auth.jwt_ttl));
        let email_sender = email_sender(mail);

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let add_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository,
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateCartItemQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_line_use_case = Arc::new(RemoveCartLineUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository,
            logger: logger.clone(),
        });

        // Auth use cases
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            repository: user_repository.clone(),
            hasher: hasher.clone(),
            otp_generator: Arc::new(RandomOtpGenerator),
            email_sender,
            otp_ttl: auth.otp_ttl,
            logger: logger.clone(),
        });
        let verify_otp_use_case = Arc::new(VerifyOtpUseCaseImpl {
            repository: user_repository.clone(),
            hasher: hasher.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository.clone(),
            hasher,
            token_issuer,
            logger: logger.clone(),
        });
        let logout_use_case = Arc::new(LogoutUseCaseImpl {
            repository: user_repository,
            logger,
        });

        Self {
            health_api: HealthApi,
            auth_api: AuthApi::new(
                register_use_case,
                verify_otp_use_case,
                login_use_case,
                logout_use_case,
            ),
            product_api: ProductApi::new(
                create_product_use_case,
                get_all_products_use_case,
                get_product_by_id_use_case,
            ),
            cart_api: CartApi::new(
                add_item_use_case,
                get_cart_use_case,
                update_quantity_use_case,
                remove_line_use_case,
                clear_cart_use_case,
            ),
        }
    }
}

fn email_sender(mail: &MailConfig) -> Arc<dyn EmailSender> {
    match &mail.api_url {
        Some(url) => Arc::new(HttpEmailSender::new(
            MailApiClient::new(url.clone(), mail.api_key.clone()),
            mail.from.clone(),
        )),
        None => {
            tracing::warn!("MAIL_API_URL not set; verification emails will only be logged");
            Arc::new(LogEmailSender)
        }
    }
}
