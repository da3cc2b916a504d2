mod city;
mod system;
mod transport;

use actix_web::web;
use std::time::Duration;
use vecroute_common::VecRouteError;

use crate::error::ApiError;

/// Register every endpoint
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(system::health).service(
        web::scope("/transportsvc")
            .service(city::get_city)
            .service(transport::compute_city_list)
            .service(transport::get_highways),
    );
}

/// Run a blocking core call on the worker pool under a deadline.
///
/// An expired deadline or a failed worker is reported as the query service
/// being unavailable.
pub(crate) async fn run_blocking<T, F>(deadline: Duration, f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> vecroute_common::Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::time::timeout(deadline, web::block(f)).await {
        Ok(Ok(result)) => result.map_err(ApiError::from),
        Ok(Err(e)) => Err(VecRouteError::unavailable(format!("worker pool error: {}", e)).into()),
        Err(_) => Err(VecRouteError::unavailable(format!(
            "request exceeded {} ms",
            deadline.as_millis()
        ))
        .into()),
    }
}
