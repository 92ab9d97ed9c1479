use fn_adapter::adapter::{InvocationAdapter, function_handler};
use fn_adapter::core::config::AppConfig;
use fn_adapter::handlers::Scheduled;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = AppConfig::from_env()?;
    fn_adapter::setup_logging(config.log_format);
    info!(
        function_name = ?config.function_name,
        display_zone = ?config.display_zone,
        "Starting scheduled function"
    );

    let adapter = InvocationAdapter::new(Scheduled::new(config.display_zone));
    let adapter = &adapter;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(adapter, event).await
    }))
    .await
}
