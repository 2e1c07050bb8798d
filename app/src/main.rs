#[tokio::main]
async fn main() -> anyhow::Result<()> {
    defuse_bridge_lib::run().await
}
