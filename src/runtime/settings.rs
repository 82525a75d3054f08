use crate::config;
use crate::i18n::Catalog;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                log::warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the command from running.
            log::warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

pub fn load_catalog(settings: &config::Settings) -> Catalog {
    let Some(path) = &settings.locale.catalog_path else {
        return Catalog::english();
    };

    match Catalog::load(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("{e}; falling back to English phrases");
            Catalog::english()
        }
    }
}
