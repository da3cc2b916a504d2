use actix_web::{get, web, HttpResponse};
use std::sync::Arc;

use super::run_blocking;
use crate::state::AppState;

/// Fetch one location by id
#[get("/city/{cityid}")]
pub async fn get_city(
    path: web::Path<String>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let city_id = path.into_inner();
    let routes = state.routes.clone();

    let city = run_blocking(state.request_timeout(), move || routes.city(&city_id)).await?;

    Ok(HttpResponse::Ok().json(city))
}
