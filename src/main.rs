mod echo;

use anyhow::Context;
use botwire_api::client::SetWebhook;
use botwire_api::BotClient;
use botwire_bot::{webhook, Bot};
use botwire_core::config::{self, Config};
use botwire_core::types::UpdatePayload;
use clap::{Parser, Subcommand};
use echo::EchoHandler;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "botwire",
    version,
    about = "Bot platform client with long polling, webhooks, and message dispatch"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "botwire.toml", global = true)]
    config: String,

    /// Bot token. Overrides the config file.
    #[arg(long, env = "BOTWIRE_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the echo bot with long polling until Ctrl-C.
    Poll {
        /// Long-poll timeout in seconds.
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Register the webhook and serve the receiver until Ctrl-C.
    Listen {
        /// Public webhook URL. Defaults to `webhook.url` from the config.
        #[arg(long)]
        url: Option<String>,
    },
    /// Delete the registered webhook.
    Close,
    /// Print the bot's own account.
    Me,
    /// Fetch and print all pending updates without handling them.
    Drain {
        /// Long-poll timeout in seconds for each page.
        #[arg(long)]
        timeout: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    let _log_guard = init_logging(&cfg)?;

    let client = BotClient::from_config(&cfg, cli.token.as_deref())?;

    match cli.command {
        Commands::Poll { timeout } => {
            let timeout = timeout.unwrap_or(cfg.polling.timeout_secs);
            let bot = Bot::new(client.clone(), EchoHandler::new(client))
                .with_polling_config(&cfg.polling);

            let result = tokio::select! {
                r = bot.poll(timeout) => r,
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupted, stopping");
                    Ok(())
                }
            };
            bot.close().await?;
            result?;
        }
        Commands::Listen { url } => {
            let url = url.unwrap_or_else(|| cfg.webhook.url.clone());
            if url.is_empty() {
                anyhow::bail!("no webhook URL. Pass --url or set webhook.url in {}", cli.config);
            }

            let bot = Bot::new(client.clone(), EchoHandler::new(client))
                .with_polling_config(&cfg.polling);
            let opts = SetWebhook {
                max_connections: cfg.webhook.max_connections,
                ..Default::default()
            };
            if !bot.listen_with(&url, &opts).await? {
                anyhow::bail!("platform refused webhook registration for {url}");
            }

            webhook::serve_with_shutdown(&cfg.webhook, bot.dispatcher().clone(), async {
                let _ = tokio::signal::ctrl_c().await;
                info!("interrupted, stopping");
            })
            .await?;
            bot.close().await?;
        }
        Commands::Close => {
            let deleted = client.delete_webhook().await?;
            println!("webhook deleted: {deleted}");
        }
        Commands::Me => {
            let me = client.get_me().await?;
            println!("{}", serde_json::to_string_pretty(&me)?);
        }
        Commands::Drain { timeout } => {
            let bot = Bot::new(client.clone(), EchoHandler::new(client));
            let updates = bot.drain_updates(timeout).await?;
            for update in &updates {
                let detail = match update.payload {
                    UpdatePayload::Message(ref m)
                    | UpdatePayload::EditedMessage(ref m)
                    | UpdatePayload::ChannelPost(ref m)
                    | UpdatePayload::EditedChannelPost(ref m) => {
                        format!("{} in chat {}", m.kind.name(), m.chat.id)
                    }
                    UpdatePayload::InlineQuery(ref q) => format!("query {:?}", q.query),
                    UpdatePayload::CallbackQuery(ref q) => format!("from {}", q.from.id),
                    UpdatePayload::ChosenInlineResult(ref r) => format!("result {}", r.result_id),
                    UpdatePayload::Unknown => String::new(),
                };
                println!("{}\t{}\t{detail}", update.update_id, update.payload.name());
            }
            println!("{} updates drained", updates.len());
        }
    }

    Ok(())
}

/// Install the tracing subscriber: stderr always, plus the configured log
/// file through a non-blocking writer. `RUST_LOG` overrides the level.
fn init_logging(cfg: &Config) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.bot.log_level));

    let (file_layer, guard) = if cfg.bot.log_file.is_empty() {
        (None, None)
    } else {
        let path = Path::new(&cfg.bot.log_file);
        let dir = path
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let name = path
            .file_name()
            .with_context(|| format!("log_file {} has no file name", path.display()))?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::never(dir, name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (
            Some(fmt::layer().with_ansi(false).with_writer(writer)),
            Some(guard),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    Ok(guard)
}
