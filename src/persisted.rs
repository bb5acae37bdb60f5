use serde::{Deserialize, Serialize};

pub(crate) const SETTINGS_VERSION: u32 = 1;
pub(crate) const SETTINGS_KEY: &str = "sakuhinshu.settings.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub(crate) fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub(crate) fn attr_value(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
pub(crate) struct SettingsRecord {
    pub(crate) version: u32,
    pub(crate) theme_mode: ThemeMode,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            theme_mode: ThemeMode::Light,
        }
    }
}

fn decode_settings(raw: &str) -> Option<SettingsRecord> {
    let record: SettingsRecord = serde_json::from_str(raw).ok()?;
    if record.version != SETTINGS_VERSION {
        return None;
    }
    Some(record)
}

pub(crate) fn load_settings() -> SettingsRecord {
    fn read() -> Option<SettingsRecord> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        let raw = storage.get_item(SETTINGS_KEY).ok()??;
        decode_settings(&raw)
    }
    read().unwrap_or_default()
}

pub(crate) fn save_settings(record: &SettingsRecord) {
    let Ok(raw) = serde_json::to_string(record) else {
        return;
    };
    let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    else {
        return;
    };
    let _ = storage.set_item(SETTINGS_KEY, &raw);
}

pub(crate) fn save_theme_mode(mode: ThemeMode) {
    let mut record = load_settings();
    record.theme_mode = mode;
    save_settings(&record);
}

/// Reflects the theme on the document root so CSS can key off it.
pub(crate) fn apply_theme(mode: ThemeMode) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };
    let _ = root.set_attribute("data-theme", mode.attr_value());
}
