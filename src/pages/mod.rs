//! Headless page containers.
//!
//! Each container owns the component-local state its page keeps (results,
//! filters, flags, the error banner slot) and drives the API client. The
//! convenience methods fetch and apply in one blocking step; shop and
//! search additionally expose a split `request_token` / `apply` pair so a
//! caller running fetches concurrently can let the container discard
//! responses that were superseded by a newer interaction instead of
//! letting them clobber fresher state.

pub mod home;
pub mod search;
pub mod shop;
pub mod signup;

pub use home::HomePage;
pub use search::SearchPage;
pub use shop::{PageMode, ShopPage};
pub use signup::SignupForm;

// ---------------------------------------------------------------------------
// RequestToken
// ---------------------------------------------------------------------------

/// Handle identifying one outstanding fetch.
///
/// Minted by a container before the request is issued. Any superseding
/// interaction (a filter change, a query edit) invalidates every token
/// minted earlier, so applying a stale token becomes a reported no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(pub(crate) u64);
