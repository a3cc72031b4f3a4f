use async_graphql::{Object, Result};

#[derive(Default)]
pub struct SystemQueries;

#[Object]
impl SystemQueries {
    /// Liveness of the gateway itself (no backend call).
    async fn health(&self) -> Result<bool> {
        Ok(true)
    }

    /// Gateway version
    async fn version(&self) -> Result<String> {
        Ok(env!("CARGO_PKG_VERSION").to_string())
    }
}
