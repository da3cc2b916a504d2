use actix_web::{get, post, web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use super::run_blocking;
use crate::state::AppState;

/// Order the posted city names, starting from `startingcityid`
#[post("/citylist/{startingcityid}")]
pub async fn compute_city_list(
    path: web::Path<String>,
    cities: web::Json<Vec<String>>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let start_id = path.into_inner();
    let cities = cities.into_inner();
    info!("City list request from {} ({} cities)", start_id, cities.len());

    let routes = state.routes.clone();
    let order = run_blocking(state.request_timeout(), move || {
        routes.city_list(&start_id, cities)
    })
    .await?;

    Ok(HttpResponse::Ok().json(order))
}

/// Highways connecting two locations, plus the cities they touch
#[get("/highways/from/{startlocationid}/to/{endlocationid}")]
pub async fn get_highways(
    path: web::Path<(String, String)>,
    state: web::Data<Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    let (start_id, end_id) = path.into_inner();
    info!("Highway request {} -> {}", start_id, end_id);

    let routes = state.routes.clone();
    let route = run_blocking(state.request_timeout(), move || {
        routes.highways(&start_id, &end_id)
    })
    .await?;

    Ok(HttpResponse::Ok().json(route))
}
