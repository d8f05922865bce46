#[tokio::main]
async fn main() {
    storefront_api::start_server().await;
}
