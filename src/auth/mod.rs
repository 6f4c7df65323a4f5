//! Bearer token issuing and the authentication gate for protected routes

pub mod gate;
pub mod token;

pub use gate::{authenticate, bearer_token, with_auth};
pub use token::{Claims, TokenError, TokenService, TOKEN_TTL_HOURS};
