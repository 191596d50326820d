#[tokio::main]
async fn main() {
    foodi::start_server().await;
}
