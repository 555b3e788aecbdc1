use actix_web::{get, http::StatusCode, web, HttpResponse, Responder};
use deadpool_redis::{redis, Pool};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Each dependency gets this long to answer before it counts as down.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Probe {
    Ok,
    Unhealthy,
}

#[derive(Serialize)]
struct HealthResponse {
    status: Probe,
    version: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: Probe,
    database: Probe,
    redis: Probe,
}

async fn probe<F, E>(name: &str, check: F) -> Probe
where
    F: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
{
    match tokio::time::timeout(PROBE_TIMEOUT, check).await {
        Ok(Ok(())) => Probe::Ok,
        Ok(Err(e)) => {
            warn!(dependency = name, error = %e, "Readiness probe failed");
            Probe::Unhealthy
        }
        Err(_) => {
            warn!(dependency = name, "Readiness probe timed out");
            Probe::Unhealthy
        }
    }
}

/// Liveness: no I/O.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: Probe::Ok,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness: Postgres answers `SELECT 1` and Redis answers `PING`.
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis_pool: web::Data<Arc<Pool>>,
) -> impl Responder {
    let database = probe("postgres", async {
        db.execute(Statement::from_string(db.get_database_backend(), "SELECT 1"))
            .await
            .map(|_| ())
    })
    .await;

    let redis = probe("redis", async {
        let mut conn = redis_pool.get().await.map_err(|e| e.to_string())?;
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    })
    .await;

    let status = if database == Probe::Ok && redis == Probe::Ok {
        Probe::Ok
    } else {
        Probe::Unhealthy
    };
    let code = match status {
        Probe::Ok => StatusCode::OK,
        Probe::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    HttpResponse::build(code).json(ReadinessResponse {
        status,
        database,
        redis,
    })
}
