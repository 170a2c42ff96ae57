use criterion::Criterion;
use result_rail::Result;
use std::sync::OnceLock;
use std::time::Duration;

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[derive(Debug, Clone)]
pub struct UserData {
    pub user_id: u64,
    pub username: String,
    pub email: String,
}

impl UserData {
    pub fn new(id: u64) -> Self {
        Self {
            user_id: id,
            username: format!("user_{id}"),
            email: format!("user{id}@company.com"),
        }
    }
}

pub fn realistic_user_data() -> &'static Vec<UserData> {
    static INSTANCE: OnceLock<Vec<UserData>> = OnceLock::new();
    INSTANCE.get_or_init(|| (0..1000).map(UserData::new).collect())
}

#[derive(Debug, Clone)]
pub enum DomainError {
    Database(String),
    Validation(String),
    Authentication(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Database(msg) => write!(f, "Database error: {msg}"),
            DomainError::Validation(msg) => write!(f, "Validation error: {msg}"),
            DomainError::Authentication(msg) => write!(f, "Authentication error: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}

// ============================================================================
// Simulation Functions
// ============================================================================

pub fn simulate_db_query(user_id: u64) -> Result<UserData, DomainError> {
    if user_id % 100 == 0 {
        Result::failure(DomainError::Database("Connection timeout".to_string()))
    } else {
        Result::success(UserData::new(user_id))
    }
}

pub fn simulate_validation(user: UserData) -> Result<UserData, DomainError> {
    if user.user_id % 50 == 0 {
        Result::failure(DomainError::Validation("Invalid email format".to_string()))
    } else {
        Result::success(user)
    }
}

pub fn simulate_auth_check(user: UserData) -> Result<UserData, DomainError> {
    if user.user_id % 25 == 0 {
        Result::failure(DomainError::Authentication("Token expired".to_string()))
    } else {
        Result::success(user)
    }
}

pub fn parse_user_id(raw: &str) -> core::result::Result<u64, DomainError> {
    raw.parse().map_err(|_| DomainError::Validation(format!("bad id: {raw}")))
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
