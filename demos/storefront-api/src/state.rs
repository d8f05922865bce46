//! Shared application state handed to every route handler.

use std::sync::atomic::AtomicU64;
use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

use crate::catalog::Catalog;

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// Registered user as returned by the signup route. The password is consumed
/// at registration and never echoed back.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub name: String,
    pub email: String,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub catalog: Catalog,
    pub accounts: Mutex<Vec<Account>>,
    pub orders: Mutex<Vec<Value>>,
    /// Monotonic counter behind transaction ids.
    pub transactions: AtomicU64,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            accounts: Mutex::new(Vec::new()),
            orders: Mutex::new(Vec::new()),
            transactions: AtomicU64::new(0),
        }
    }
}
