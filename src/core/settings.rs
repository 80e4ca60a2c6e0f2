//! Settings persistence - One preferences bundle, overwritten wholesale.

use crate::{
    core::store::CollectionStore,
    entities::Settings,
    errors::{Error, Result},
    storage::Storage,
};
use tracing::info;

/// Storage name for the settings bundle
pub const SETTINGS: &str = "settings";

/// Loads the stored settings, or the defaults when none are stored or the
/// stored bundle is unreadable. Keys missing from an older bundle take their
/// default values.
pub async fn load_settings<S: Storage>(store: &CollectionStore<S>) -> Settings {
    store.load_value(SETTINGS).await.unwrap_or_default()
}

/// Replaces the stored settings with `settings`.
///
/// Rejects a NaN or infinite tax rate; nothing is written in that case.
pub async fn save_settings<S: Storage>(
    store: &CollectionStore<S>,
    settings: &Settings,
) -> Result<()> {
    if !settings.tax_rate.is_finite() {
        return Err(Error::InvalidAmount {
            amount: settings.tax_rate,
        });
    }
    store.save_value(SETTINGS, settings).await?;
    info!("Saved settings");
    Ok(())
}

/// Stores the default settings and returns them.
pub async fn reset_settings<S: Storage>(store: &CollectionStore<S>) -> Result<Settings> {
    let defaults = Settings::default();
    store.save_value(SETTINGS, &defaults).await?;
    info!("Reset settings to defaults");
    Ok(defaults)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::entities::BackupFrequency;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_load_without_saved_settings_returns_defaults() {
        let store = setup_memory_store();
        assert_eq!(load_settings(&store).await, Settings::default());
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() -> Result<()> {
        let store = setup_memory_store();
        let mut settings = Settings::default();
        settings.organization_name = "Riverside Fellowship".to_string();
        settings.dark_mode = true;
        settings.backup_frequency = BackupFrequency::Daily;
        settings.tax_rate = 0.2;

        save_settings(&store, &settings).await?;
        assert_eq!(load_settings(&store).await, settings);
        Ok(())
    }

    #[tokio::test]
    async fn test_partial_bundle_fills_defaults() {
        let store = setup_memory_store_with(&[(
            "settings",
            r#"{"organizationName":"Hilltop Club","darkMode":true}"#,
        )]);

        let settings = load_settings(&store).await;
        assert_eq!(settings.organization_name, "Hilltop Club");
        assert!(settings.dark_mode);
        assert_eq!(settings.vacation_days, Settings::default().vacation_days);
        assert_eq!(settings.currency, "USD");
    }

    #[tokio::test]
    async fn test_corrupt_bundle_loads_defaults() {
        let store = setup_memory_store_with(&[("settings", "not json at all")]);
        assert_eq!(load_settings(&store).await, Settings::default());
    }

    #[tokio::test]
    async fn test_non_finite_tax_rate_keeps_saved_settings() -> Result<()> {
        let store = setup_memory_store();
        let mut settings = Settings::default();
        settings.organization_name = "Riverside Fellowship".to_string();
        save_settings(&store, &settings).await?;

        let mut broken = settings.clone();
        broken.tax_rate = f64::NAN;
        let result = save_settings(&store, &broken).await;
        assert!(matches!(result, Err(Error::InvalidAmount { .. })));

        assert_eq!(load_settings(&store).await, settings);
        Ok(())
    }

    #[tokio::test]
    async fn test_reset_persists_defaults() -> Result<()> {
        let store = setup_memory_store();
        let mut settings = Settings::default();
        settings.language = "french".to_string();
        save_settings(&store, &settings).await?;

        let reset = reset_settings(&store).await?;
        assert_eq!(reset, Settings::default());
        assert_eq!(load_settings(&store).await, Settings::default());
        Ok(())
    }
}
