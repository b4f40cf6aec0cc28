use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`lock_env`].
unsafe fn clear_gallery_env() {
    unsafe {
        for key in [
            "GALLERY_SCRIPT_URL",
            "PORT",
            "GALLERY_REQUEST_TIMEOUT_SECS",
            "GALLERY_CONNECT_TIMEOUT_SECS",
            "SITE_TITLE",
            "SITE_DATE",
            "SITE_BANNER_URL",
            "SITE_STORY",
            "CAPTION_API_KEY_ENV",
            "CAPTION_MODEL",
            "CAPTION_BASE_URL",
            "TEST_CAPTION_KEY",
        ] {
            std::env::remove_var(key);
        }
    }
}

const TIMEOUTS: HttpTimeouts = HttpTimeouts { request_secs: 60, connect_secs: 10 };

#[test]
fn gallery_from_env_applies_defaults() {
    let _env = lock_env();
    unsafe {
        clear_gallery_env();
        std::env::set_var("GALLERY_SCRIPT_URL", "https://script.example/exec");
    }

    let cfg = GalleryConfig::from_env().unwrap();
    assert_eq!(cfg.script_url, "https://script.example/exec");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(
        cfg.timeouts,
        HttpTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.site, SiteInfo::default());

    unsafe { clear_gallery_env() };
}

#[test]
fn gallery_from_env_requires_script_url() {
    let _env = lock_env();
    unsafe {
        clear_gallery_env();
        std::env::set_var("GALLERY_SCRIPT_URL", "   ");
    }

    assert_eq!(GalleryConfig::from_env(), Err(ConfigError::Missing("GALLERY_SCRIPT_URL".into())));

    unsafe { clear_gallery_env() };
}

#[test]
fn gallery_from_env_parses_overrides() {
    let _env = lock_env();
    unsafe {
        clear_gallery_env();
        std::env::set_var("GALLERY_SCRIPT_URL", "https://script.example/exec");
        std::env::set_var("PORT", "8080");
        std::env::set_var("GALLERY_REQUEST_TIMEOUT_SECS", "30");
        std::env::set_var("GALLERY_CONNECT_TIMEOUT_SECS", "not-a-number");
        std::env::set_var("SITE_TITLE", "Ana & Luis");
        std::env::set_var("SITE_DATE", "2027.06.01");
    }

    let cfg = GalleryConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.timeouts, HttpTimeouts { request_secs: 30, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS });
    assert_eq!(cfg.site.title, "Ana & Luis");
    assert_eq!(cfg.site.date, "2027.06.01");
    assert_eq!(cfg.site.story, SiteInfo::default().story);

    unsafe { clear_gallery_env() };
}

#[test]
fn gallery_from_env_rejects_bad_port() {
    let _env = lock_env();
    unsafe {
        clear_gallery_env();
        std::env::set_var("GALLERY_SCRIPT_URL", "https://script.example/exec");
        std::env::set_var("PORT", "99999");
    }

    assert_eq!(
        GalleryConfig::from_env(),
        Err(ConfigError::Invalid { var: "PORT".into(), value: "99999".into() })
    );

    unsafe { clear_gallery_env() };
}

#[test]
fn caption_from_env_reads_named_key() {
    let _env = lock_env();
    unsafe {
        clear_gallery_env();
        std::env::set_var("CAPTION_API_KEY_ENV", "TEST_CAPTION_KEY");
        std::env::set_var("TEST_CAPTION_KEY", "g-secret");
        std::env::set_var("CAPTION_BASE_URL", "https://gemini.example/v1beta/");
    }

    let cfg = CaptionConfig::from_env(TIMEOUTS).unwrap();
    assert_eq!(cfg.api_key, "g-secret");
    assert_eq!(cfg.model, DEFAULT_CAPTION_MODEL);
    assert_eq!(cfg.base_url, "https://gemini.example/v1beta");
    assert_eq!(cfg.timeouts, TIMEOUTS);

    unsafe { clear_gallery_env() };
}

#[test]
fn caption_from_env_missing_key_names_variable() {
    let _env = lock_env();
    unsafe {
        clear_gallery_env();
    }
    assert_eq!(CaptionConfig::from_env(TIMEOUTS), Err(ConfigError::Missing("CAPTION_API_KEY_ENV".into())));

    unsafe {
        std::env::set_var("CAPTION_API_KEY_ENV", "TEST_CAPTION_KEY");
    }
    assert_eq!(CaptionConfig::from_env(TIMEOUTS), Err(ConfigError::Missing("TEST_CAPTION_KEY".into())));

    unsafe { clear_gallery_env() };
}
