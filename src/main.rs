#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cardinal_fitness::run().await
}
