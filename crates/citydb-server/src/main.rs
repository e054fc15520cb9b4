//! citydb-server - serves the city dataset over HTTP/JSON.
//!
//! Configuration comes from `citydb-server.{toml,yaml,json}` and
//! `CITYDB_SERVER__*` environment variables; see [`server::ServerConfig`].

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    server::start_server(config).await?;
    Ok(())
}
