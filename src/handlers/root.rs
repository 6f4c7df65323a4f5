// GET / handler

use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;

use warp::Reply;

use crate::models::MessageResponse;

/// Serve the front-end landing page, or a status message when no bundle exists
pub async fn root_handler(static_dir: Arc<PathBuf>) -> Result<warp::reply::Response, Infallible> {
    let index = static_dir.join("index.html");

    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Ok(warp::reply::html(html).into_response()),
        Err(_) => {
            let status = MessageResponse::new("Chat relay running");
            Ok(warp::reply::json(&status).into_response())
        }
    }
}
