use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::user::use_cases::logout::{LogoutParams, LogoutUseCase};
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};
use business::domain::user::use_cases::verify_otp::{VerifyOtpParams, VerifyOtpUseCase};

use crate::api::auth::dto::{
    LogoutRequest, SigninRequest, SignupRequest, TokenData, TokenEnvelope, UserData,
    UserEnvelope, VerifyOtpRequest,
};
use crate::api::envelope::EmptyEnvelope;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    verify_otp_use_case: Arc<dyn VerifyOtpUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
    logout_use_case: Arc<dyn LogoutUseCase>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        verify_otp_use_case: Arc<dyn VerifyOtpUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
        logout_use_case: Arc<dyn LogoutUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            verify_otp_use_case,
            login_use_case,
            logout_use_case,
        }
    }
}

/// Account API
///
/// Sign-up sends a one-time code by email; the account must be verified
/// with that code before the first sign-in.
#[OpenApi]
impl AuthApi {
    /// Register a user and email a verification code
    #[oai(path = "/auth/signup", method = "post", tag = "ApiTags::Auth")]
    async fn signup(&self, body: Json<SignupRequest>) -> SignupResponse {
        let request = body.0;
        let params = RegisterUserParams {
            name: request.name,
            email: request.email,
            phone_number: request.phone_number,
            password: request.password,
        };

        match self.register_use_case.execute(params).await {
            Ok(user) => SignupResponse::Created(Json(UserEnvelope {
                status: true,
                message: "User registered successfully. Please check your email for OTP verification."
                    .to_string(),
                data: UserData { user: user.into() },
            })),
            Err(err) => {
                let (status, json) = err.into_error_response_or("Error registering user");
                match status.as_u16() {
                    400 => SignupResponse::BadRequest(json),
                    _ => SignupResponse::InternalError(json),
                }
            }
        }
    }

    /// Verify the emailed code
    #[oai(path = "/auth/verify-otp", method = "post", tag = "ApiTags::Auth")]
    async fn verify_otp(&self, body: Json<VerifyOtpRequest>) -> AuthActionResponse {
        let request = body.0;
        let params = VerifyOtpParams {
            email: request.email,
            otp: request.otp,
            password: request.password,
        };

        match self.verify_otp_use_case.execute(params).await {
            Ok(()) => AuthActionResponse::Ok(Json(EmptyEnvelope::new(
                "OTP verified successfully. You can now log in.",
            ))),
            Err(err) => AuthActionResponse::from_error(err, "Error verifying OTP"),
        }
    }

    /// Sign in and receive a session token
    #[oai(path = "/auth/signin", method = "post", tag = "ApiTags::Auth")]
    async fn signin(&self, body: Json<SigninRequest>) -> SigninResponse {
        let request = body.0;
        let params = LoginParams {
            email: request.email,
            password: request.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(result) => SigninResponse::Ok(Json(TokenEnvelope {
                status: true,
                message: "Login successful".to_string(),
                data: TokenData {
                    token: result.token,
                },
            })),
            Err(err) => {
                let (status, json) = err.into_error_response_or("Error signing in");
                match status.as_u16() {
                    400 => SigninResponse::BadRequest(json),
                    _ => SigninResponse::InternalError(json),
                }
            }
        }
    }

    /// Sign out
    #[oai(path = "/auth/logout", method = "post", tag = "ApiTags::Auth")]
    async fn logout(&self, body: Json<LogoutRequest>) -> AuthActionResponse {
        let params = LogoutParams { email: body.0.email };

        match self.logout_use_case.execute(params).await {
            Ok(()) => AuthActionResponse::Ok(Json(EmptyEnvelope::new("Logout successful"))),
            Err(err) => AuthActionResponse::from_error(err, "Error logging out"),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SignupResponse {
    #[oai(status = 201)]
    Created(Json<UserEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SigninResponse {
    #[oai(status = 200)]
    Ok(Json<TokenEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AuthActionResponse {
    #[oai(status = 200)]
    Ok(Json<EmptyEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl AuthActionResponse {
    fn from_error(err: impl IntoErrorResponse, failure: &str) -> Self {
        let (status, json) = err.into_error_response_or(failure);
        match status.as_u16() {
            400 => AuthActionResponse::BadRequest(json),
            _ => AuthActionResponse::InternalError(json),
        }
    }
}
