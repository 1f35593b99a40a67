//! Health-check handlers.
//!
//! | Check | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Can the database be reached? |

use tracing::warn;

use crate::routes::App;
use crate::{Request, Response, Status};

/// Always `200 OK` with body `"ok"`. If the process can answer HTTP at all,
/// it is alive.
pub async fn liveness(_req: Request, _app: App) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"` once a trivial query succeeds against the
/// store, `503` otherwise.
pub async fn readiness(_req: Request, app: App) -> Response {
    match app.run(|store| store.ping()).await {
        Ok(()) => Response::text("ready"),
        Err(e) => {
            warn!("readiness check failed: {e}");
            Response::status(Status::ServiceUnavailable)
        }
    }
}
