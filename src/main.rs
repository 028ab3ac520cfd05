use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use video_detail_core::{
    application::{
        ports::{
            identity::IdentityProvider,
            navigation::{Navigator, Route},
            store::DocumentStore,
            time::Clock,
        },
        services::ApplicationServices,
    },
    config::{AppConfig, video_id_from_args},
    domain::{
        user::UserProfileRepository,
        video::{VideoReadRepository, VideoWriteRepository},
    },
    infrastructure::{
        database,
        identity::SessionIdentity,
        navigation::HistoryNavigator,
        repositories::{DocumentUserProfileRepository, DocumentVideoRepository},
        store::PostgresDocumentStore,
        time::SystemClock,
    },
    presentation::VideoDetailPage,
};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing();

    let video_id = video_id_from_args()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let store: Arc<dyn DocumentStore> = Arc::new(PostgresDocumentStore::new(pool));
    let videos = Arc::new(DocumentVideoRepository::with_collection(
        Arc::clone(&store),
        config.video_collection(),
    ));
    let video_read_repo: Arc<dyn VideoReadRepository> = videos.clone();
    let video_write_repo: Arc<dyn VideoWriteRepository> = videos;
    let user_repo: Arc<dyn UserProfileRepository> = Arc::new(
        DocumentUserProfileRepository::with_collection(Arc::clone(&store), config.user_collection()),
    );

    let services = ApplicationServices::new(video_read_repo, video_write_repo, user_repo);

    let identity: Arc<dyn IdentityProvider> = Arc::new(match config.current_user() {
        Some(user_id) => SessionIdentity::signed_in(user_id.clone()),
        None => SessionIdentity::anonymous(),
    });
    let navigator: Arc<dyn Navigator> = Arc::new(HistoryNavigator::starting_at(Route::Home));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let page = VideoDetailPage::new(
        &services,
        identity,
        navigator,
        clock,
        config.default_avatar_url(),
    );

    let ticket = page.load_detail(&video_id).await;
    tracing::info!(video_id = %video_id, generation = ticket.generation(), "detail loaded");

    println!("{}", serde_json::to_string_pretty(&page.view())?);
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
