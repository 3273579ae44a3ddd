use visit_counter::prelude::*;

#[tokio::main]
async fn main() -> AppResult<()> {
    let store = store().await?;
    app(store).start().await;
    Ok(())
}
