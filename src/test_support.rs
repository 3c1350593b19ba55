//! Shared fixtures for unit tests: unsigned JWT builders and a scripted
//! backend that records every call.

use std::cell::RefCell;
use std::rc::Rc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::net::api::{ApiError, AuthBackend};
use crate::net::types::{
    AccessResponse, ChangePasswordRequest, GoogleLoginRequest, HeaderDetails, LoginRequest, RefreshRequest,
    RegisterRequest, TokenPair,
};

pub fn jwt_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

pub fn jwt_with_exp(exp_secs: i64) -> String {
    jwt_with_payload(&serde_json::json!({ "exp": exp_secs, "token_type": "access" }))
}

pub fn token_pair(access: &str, refresh: &str) -> TokenPair {
    TokenPair { access: access.to_owned(), refresh: refresh.to_owned() }
}

#[derive(Default)]
struct Script {
    login: Option<Result<TokenPair, ApiError>>,
    google_login: Option<Result<TokenPair, ApiError>>,
    refresh: Option<Result<AccessResponse, ApiError>>,
    register: Option<Result<(), ApiError>>,
    change_password: Option<Result<(), ApiError>>,
    header_details: Option<Result<HeaderDetails, ApiError>>,
    calls: Vec<&'static str>,
    logins: Vec<LoginRequest>,
    refreshes: Vec<RefreshRequest>,
    registrations: Vec<RegisterRequest>,
    password_changes: Vec<(String, ChangePasswordRequest)>,
}

/// Backend double. Unscripted operations fail with `ApiError::Unavailable`.
#[derive(Clone, Default)]
pub struct FakeBackend {
    script: Rc<RefCell<Script>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_login(self, result: Result<TokenPair, ApiError>) -> Self {
        self.script.borrow_mut().login = Some(result);
        self
    }

    pub fn with_google_login(self, result: Result<TokenPair, ApiError>) -> Self {
        self.script.borrow_mut().google_login = Some(result);
        self
    }

    pub fn with_refresh(self, result: Result<AccessResponse, ApiError>) -> Self {
        self.script.borrow_mut().refresh = Some(result);
        self
    }

    pub fn with_register(self, result: Result<(), ApiError>) -> Self {
        self.script.borrow_mut().register = Some(result);
        self
    }

    pub fn with_change_password(self, result: Result<(), ApiError>) -> Self {
        self.script.borrow_mut().change_password = Some(result);
        self
    }

    pub fn with_header_details(self, result: Result<HeaderDetails, ApiError>) -> Self {
        self.script.borrow_mut().header_details = Some(result);
        self
    }

    /// Operation names in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.script.borrow().calls.clone()
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.script.borrow().calls.iter().filter(|c| **c == name).count()
    }

    pub fn logins(&self) -> Vec<LoginRequest> {
        self.script.borrow().logins.clone()
    }

    pub fn refreshes(&self) -> Vec<RefreshRequest> {
        self.script.borrow().refreshes.clone()
    }

    pub fn registrations(&self) -> Vec<RegisterRequest> {
        self.script.borrow().registrations.clone()
    }

    pub fn password_changes(&self) -> Vec<(String, ChangePasswordRequest)> {
        self.script.borrow().password_changes.clone()
    }

    fn record(&self, name: &'static str) {
        self.script.borrow_mut().calls.push(name);
    }
}

fn scripted<T: Clone>(slot: &Option<Result<T, ApiError>>) -> Result<T, ApiError> {
    slot.clone().unwrap_or(Err(ApiError::Unavailable))
}

impl AuthBackend for FakeBackend {
    async fn login(&self, request: &LoginRequest) -> Result<TokenPair, ApiError> {
        self.record("login");
        self.script.borrow_mut().logins.push(request.clone());
        scripted(&self.script.borrow().login)
    }

    async fn google_login(&self, request: &GoogleLoginRequest) -> Result<TokenPair, ApiError> {
        let _ = request;
        self.record("google_login");
        scripted(&self.script.borrow().google_login)
    }

    async fn refresh(&self, request: &RefreshRequest) -> Result<AccessResponse, ApiError> {
        self.record("refresh");
        self.script.borrow_mut().refreshes.push(request.clone());
        scripted(&self.script.borrow().refresh)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.record("register");
        self.script.borrow_mut().registrations.push(request.clone());
        scripted(&self.script.borrow().register)
    }

    async fn change_password(&self, access: &str, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.record("change_password");
        self.script.borrow_mut().password_changes.push((access.to_owned(), request.clone()));
        scripted(&self.script.borrow().change_password)
    }

    async fn header_details(&self, access: &str) -> Result<HeaderDetails, ApiError> {
        let _ = access;
        self.record("header_details");
        scripted(&self.script.borrow().header_details)
    }
}
