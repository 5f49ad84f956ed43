//! Server lifecycle: bind the listener and serve the API router.

use std::net::SocketAddr;

use crate::api::router::clinic_api_router;
use crate::api::types::ApiContext;

/// Bind `addr` and serve the clinic API until the process exits.
pub async fn run(addr: SocketAddr, ctx: ApiContext) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, "clinicd listening");

    axum::serve(listener, clinic_api_router(ctx)).await
}
