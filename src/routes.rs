// Route definitions

use std::path::PathBuf;
use std::sync::Arc;

use warp::Filter;

use crate::auth::with_auth;
use crate::error::handle_rejection;
use crate::handlers;
use crate::state::{with_state, AppState};

// warp has no wildcard for methods or headers, so every standard one is listed
const CORS_METHODS: &[&str] = &["GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"];

const CORS_HEADERS: &[&str] = &[
    "accept",
    "accept-language",
    "authorization",
    "cache-control",
    "content-language",
    "content-type",
    "if-modified-since",
    "if-none-match",
    "origin",
    "pragma",
    "range",
    "x-requested-with",
];

pub fn configure_routes(
    state: AppState,
    static_dir: PathBuf,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // POST /register
    let register = warp::path("register")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_state(state.clone()))
        .and_then(handlers::register_handler);

    // POST /login
    let login = warp::path("login")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_state(state.clone()))
        .and_then(handlers::login_handler);

    // POST /chat, behind the authentication gate
    let chat = warp::path("chat")
        .and(warp::path::end())
        .and(warp::post())
        .and(with_auth(state.clone()))
        .and(warp::body::json())
        .and(with_state(state))
        .and_then(handlers::chat_handler);

    // GET /
    let index_dir = Arc::new(static_dir.clone());
    let root = warp::path::end()
        .and(warp::get())
        .and(warp::any().map(move || index_dir.clone()))
        .and_then(handlers::root_handler);

    // GET /static/*
    let assets = warp::path("static").and(warp::fs::dir(static_dir.join("static")));

    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(CORS_METHODS.iter().copied())
        .allow_headers(CORS_HEADERS.iter().copied());

    register
        .or(login)
        .or(chat)
        .or(root)
        .or(assets)
        .recover(handle_rejection)
        .with(cors)
        .with(warp::trace::request())
}
