mod bfhl;

use axum::Router;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().merge(bfhl::routes())
}
