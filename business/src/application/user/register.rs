use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::AuthError;
use crate::domain::user::model::{NewUserProps, User, normalize_email};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{EmailSender, OtpGenerator, PasswordHasher};
use crate::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

pub const OTP_EMAIL_SUBJECT: &str = "Your OTP for Account Verification";

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub otp_generator: Arc<dyn OtpGenerator>,
    pub email_sender: Arc<dyn EmailSender>,
    pub otp_ttl: Duration,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<User, AuthError> {
        let email = normalize_email(&params.email);
        self.logger.info(&format!("Registering user: {}", email));

        if params.password.is_empty() {
            return Err(AuthError::PasswordEmpty);
        }
        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let otp = self.otp_generator.generate();
        let user = User::new(NewUserProps {
            name: params.name,
            email,
            phone_number: params.phone_number,
            password_hash: self.hasher.hash(&params.password)?,
            otp: otp.clone(),
            otp_expires_at: Utc::now() + self.otp_ttl,
        })?;

        self.repository.create(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => AuthError::UserAlreadyExists,
            other => AuthError::Repository(other),
        })?;

        let text = format!(
            "Your OTP is: {}. It will expire in {} minutes.",
            otp,
            self.otp_ttl.num_minutes()
        );
        self.email_sender
            .send(&user.email, OTP_EMAIL_SUBJECT, &text)
            .await?;

        self.logger
            .info(&format!("User registered, OTP sent: {}", user.id));
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::model::test_support::verified_user;
    use crate::test_doubles::{MockHasher, MockMailer, MockOtp, MockUserRepo, mock_logger};

    fn params() -> RegisterUserParams {
        RegisterUserParams {
            name: "Ada".to_string(),
            email: "Ada@Example.com".to_string(),
            phone_number: "+34600000000".to_string(),
            password: "s3cret!".to_string(),
        }
    }

    fn hasher() -> MockHasher {
        let mut hasher = MockHasher::new();
        hasher
            .expect_hash()
            .returning(|password| Ok(format!("hashed:{password}")));
        hasher
    }

    fn otp(code: &'static str) -> MockOtp {
        let mut otp = MockOtp::new();
        otp.expect_generate().returning(move || code.to_string());
        otp
    }

    #[tokio::test]
    async fn should_store_hashed_user_and_email_otp() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email()
            .withf(|email| email == "ada@example.com")
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|user| user.password_hash == "hashed:s3cret!" && user.otp.as_deref() == Some("482913"))
            .times(1)
            .returning(|_| Ok(()));
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|to, subject, text| {
                to == "ada@example.com"
                    && subject == OTP_EMAIL_SUBJECT
                    && text == "Your OTP is: 482913. It will expire in 10 minutes."
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(repo),
            hasher: Arc::new(hasher()),
            otp_generator: Arc::new(otp("482913")),
            email_sender: Arc::new(mailer),
            otp_ttl: Duration::minutes(10),
            logger: mock_logger(),
        };

        let user = use_case.execute(params()).await.unwrap();

        assert!(!user.otp_verified);
        assert!(user.otp_expires_at.unwrap() > Utc::now());
    }

    #[tokio::test]
    async fn should_reject_taken_email() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(verified_user())));
        repo.expect_create().never();

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(repo),
            hasher: Arc::new(MockHasher::new()),
            otp_generator: Arc::new(MockOtp::new()),
            email_sender: Arc::new(MockMailer::new()),
            otp_ttl: Duration::minutes(10),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), AuthError::UserAlreadyExists));
    }

    #[tokio::test]
    async fn should_map_unique_violation_to_already_exists() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|_| Err(RepositoryError::Duplicated));
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(repo),
            hasher: Arc::new(hasher()),
            otp_generator: Arc::new(otp("111111")),
            email_sender: Arc::new(mailer),
            otp_ttl: Duration::minutes(10),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), AuthError::UserAlreadyExists));
    }

    #[tokio::test]
    async fn should_reject_empty_password() {
        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(MockUserRepo::new()),
            hasher: Arc::new(MockHasher::new()),
            otp_generator: Arc::new(MockOtp::new()),
            email_sender: Arc::new(MockMailer::new()),
            otp_ttl: Duration::minutes(10),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RegisterUserParams {
                password: String::new(),
                ..params()
            })
            .await;

        assert!(matches!(result.unwrap_err(), AuthError::PasswordEmpty));
    }

    #[tokio::test]
    async fn should_surface_email_delivery_failures() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create().returning(|_| Ok(()));
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .returning(|_, _, _| Err(AuthError::EmailDelivery("503".to_string())));

        let use_case = RegisterUserUseCaseImpl {
            repository: Arc::new(repo),
            hasher: Arc::new(hasher()),
            otp_generator: Arc::new(otp("222222")),
            email_sender: Arc::new(mailer),
            otp_ttl: Duration::minutes(10),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), AuthError::EmailDelivery(_)));
    }
}
