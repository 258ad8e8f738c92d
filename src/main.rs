use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use feedcache::application::{ScheduleImageCacheUseCase, WarmImageCacheUseCase};
use feedcache::domain::ports::ScheduleStatus;
use feedcache::infrastructure::{
    AppConfig, CliArgs, ConfigManager, ConfigStatus, DiskImageCache, FileBlobStore,
    HttpImageFetcher, JsonContentStore, LocalJobScheduler,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .init();
    }

    Ok(())
}

fn load_config() -> Result<(AppConfig, ConfigStatus)> {
    let args = CliArgs::parse();
    let manager = ConfigManager::new()?;
    let (mut config, status) = manager.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok((config, status))
}

fn build_job(
    config: &AppConfig,
    disk_cache: Arc<DiskImageCache>,
) -> Result<Arc<WarmImageCacheUseCase>> {
    let fetcher = Arc::new(HttpImageFetcher::new(&config.fetcher_config(), disk_cache)?);
    let content_store = Arc::new(JsonContentStore::new(config.effective_items_file()));
    let blob_store = Arc::new(FileBlobStore::new(config.effective_article_dir()));

    Ok(Arc::new(WarmImageCacheUseCase::new(
        content_store.clone(),
        content_store,
        blob_store,
        fetcher,
    )))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, config_status) = load_config()?;
    init_logging(&config)?;
    config_status.log();

    info!(version = feedcache::VERSION, "Starting feedcache");

    let disk_cache = Arc::new(
        DiskImageCache::new(config.effective_cache_dir(), config.cache.disk_cache_size).await?,
    );
    let job = build_job(&config, disk_cache.clone())?;
    let scheduler = Arc::new(LocalJobScheduler::new(config.metered));
    let schedule = ScheduleImageCacheUseCase::new(scheduler);

    match schedule.execute(config.preferences.load_image_only_on_wifi, job)? {
        ScheduleStatus::Deferred { reason } => {
            warn!(%reason, "Image cache run deferred");
        }
        ScheduleStatus::Started(handle) => {
            info!(job_id = %handle.job_id(), "Image cache run started");
            let cancel = handle.cancellation_token();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    info!("Interrupt received, cancelling image cache run");
                    cancel.cancel();
                }
            });
            let result = handle.join().await;
            info!(
                entries = disk_cache.len(),
                bytes = disk_cache.current_size(),
                "Disk cache occupancy"
            );
            result?;
        }
    }

    Ok(())
}
