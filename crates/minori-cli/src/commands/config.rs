use minori_core::config::AppConfig;

pub fn run_show() -> color_eyre::Result<()> {
    let config = AppConfig::load()?;
    println!("config file:   {}", AppConfig::config_path().display());
    println!("wishlist blob: {}", AppConfig::wishlist_path().display());
    println!("default list:  {}", config.general.default_list);
    println!(
        "tmdb:          {} ({})",
        if config.services.tmdb.enabled { "enabled" } else { "disabled" },
        match config.services.tmdb.api_key.as_deref() {
            Some(key) => mask(key),
            None => "no key".into(),
        }
    );
    println!(
        "jikan:         {}",
        if config.services.jikan.enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}

pub fn run_set_tmdb_key(key: String) -> color_eyre::Result<()> {
    let mut config = AppConfig::load()?;
    config.services.tmdb.api_key = Some(key);
    config.save()?;
    println!("TMDB key saved to {}.", AppConfig::config_path().display());
    Ok(())
}

fn mask(key: &str) -> String {
    if key.len() <= 4 {
        "****".into()
    } else {
        format!("{}****", &key[..4])
    }
}
