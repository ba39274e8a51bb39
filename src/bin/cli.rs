use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    kanban::cli::run().await
}
