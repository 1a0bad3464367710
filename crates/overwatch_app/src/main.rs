mod app;
mod config;
mod effects;
mod ui;

fn main() -> anyhow::Result<()> {
    app_logging::initialize();
    let config = config::AppConfig::from_env()?;
    app::run(config)
}
