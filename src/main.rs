use viator::api::serve;
use viator::engine::Engine;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    serve(Engine::new()).await;
}
