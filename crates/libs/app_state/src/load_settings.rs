use crate::AppSettings;
use color_eyre::eyre::Result;
use std::path::Path;

pub fn load_app_settings() -> Result<AppSettings> {
    load_settings_from_path(Path::new("config/settings.yaml"))
}

/// Loads settings from a YAML file, layered with `APP__`-prefixed
/// environment variables so secrets never have to live in the file.
pub fn load_settings_from_path(path: &Path) -> Result<AppSettings> {
    // Need to load from dotenv first so the env source picks up .env values.
    dotenv::from_path(".env").ok();
    let config_path = path.canonicalize()?;

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    let settings = builder.build()?.try_deserialize::<AppSettings>()?;

    Ok(settings)
}
