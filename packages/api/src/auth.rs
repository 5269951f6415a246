//! `/auth` endpoints.
//!
//! These calls only talk to the API. Session bookkeeping (who is logged in,
//! coalesced refreshes) lives in the store crate.

use serde_json::Value;

use crate::client::{ApiClient, ApiRequest, Transport};
use crate::envelope::unwrap_data;
use crate::error::ApiError;
use crate::models::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageData, RegisterRequest,
    ResetPasswordRequest, VerifyOtpRequest,
};

pub async fn login<T: Transport>(
    client: &ApiClient<T>,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    let request = ApiRequest::post("/auth/login").json(&LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })?;
    client.send(request).await
}

pub async fn register<T: Transport>(
    client: &ApiClient<T>,
    request: &RegisterRequest,
) -> Result<AuthResponse, ApiError> {
    client.send(ApiRequest::post("/auth/register").json(request)?).await
}

pub async fn logout<T: Transport>(client: &ApiClient<T>) -> Result<(), ApiError> {
    client.send_value(ApiRequest::post("/auth/logout")).await?;
    Ok(())
}

/// Ask the API to mail a one-time password to `email`.
pub async fn forgot_password<T: Transport>(
    client: &ApiClient<T>,
    email: &str,
) -> Result<MessageData, ApiError> {
    let request = ApiRequest::post("/auth/forgot-password").json(&ForgotPasswordRequest {
        email: email.to_string(),
    })?;
    Ok(message_of(client.send_value(request).await?))
}

pub async fn verify_otp<T: Transport>(
    client: &ApiClient<T>,
    email: &str,
    otp: &str,
) -> Result<MessageData, ApiError> {
    let request = ApiRequest::post("/auth/verify-otp").json(&VerifyOtpRequest {
        email: email.to_string(),
        otp: otp.to_string(),
    })?;
    Ok(message_of(client.send_value(request).await?))
}

pub async fn reset_password<T: Transport>(
    client: &ApiClient<T>,
    request: &ResetPasswordRequest,
) -> Result<MessageData, ApiError> {
    let request = ApiRequest::post("/auth/reset-password").json(request)?;
    Ok(message_of(client.send_value(request).await?))
}

/// `data.message` if present, else the envelope's own message.
pub(crate) fn message_of(value: Value) -> MessageData {
    unwrap_data(value).unwrap_or_default()
}
