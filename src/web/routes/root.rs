use axum::response::Redirect;

pub const FRONT_END_ENTRY: &str = "/static/index.html";

// 307 so clients keep the original method.
pub async fn root_redirect_handler() -> Redirect {
    Redirect::temporary(FRONT_END_ENTRY)
}
