use tracing::{ Level, info };
use tracing_log::LogTracer;
use tracing_subscriber::FmtSubscriber;

mod components;
mod error;
mod http;
mod pages;
mod router;
mod view;

pub type BoxFuture<'a, T> = std::pin::Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

pub use error::Result;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> std::io::Result<()> {
	let subscriber = FmtSubscriber::builder()
		.with_max_level(Level::INFO)
		.finish();

	tracing::subscriber::set_global_default(subscriber)
		.expect("setting default subscriber failed");

	LogTracer::init().unwrap();

	info!("starting rally v{}", env!("CARGO_PKG_VERSION"));

	http::start().await?;

	info!("shutting down rally...goodbye!");
	Ok(())
}
