// Shared dependencies handed to every handler

use std::convert::Infallible;
use std::sync::Arc;

use warp::Filter;

use crate::auth::TokenService;
use crate::llm::LlmProvider;
use crate::store::CredentialStore;

/// Constructed once at startup and cloned into each request
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CredentialStore>,
    pub tokens: Arc<TokenService>,
    pub llm: Arc<dyn LlmProvider>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        tokens: TokenService,
        llm: Arc<dyn LlmProvider>,
    ) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
            llm,
        }
    }
}

/// Filter that hands a clone of the state to the next filter
pub fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}
