use anyhow::Context;
use helpdesk_chat::{
    api::ApiClient,
    config::{get_config, initialize_config, validate_config},
    logging::init_logging,
    ui::run_ui,
    ChatWidget,
};
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    initialize_config().context("failed to load configuration")?;

    // helpdesk-chat [BASE_URL]
    let mut config = get_config();
    if let Some(base_url) = std::env::args().nth(1) {
        config.base_url = base_url;
        validate_config(&config)?;
    }

    let _logger = init_logging(&config).context("failed to start logger")?;
    info!("Connecting to chat backend at {}", config.base_url);

    let widget = ChatWidget::new(ApiClient::new(&config.base_url)?);

    let loader = widget.clone();
    tokio::spawn(async move {
        loader.load_chat_history().await;
    });

    run_ui(widget).await?;
    info!("Chat closed");
    Ok(())
}
