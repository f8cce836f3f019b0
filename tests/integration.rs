// SPDX-License-Identifier: MPL-2.0
use astrofolio::config::{self, Config};
use astrofolio::content::Registry;
use astrofolio::media::load_state::{self, Effect, Phase};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_preferences_round_trip_through_disk() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.site_title = Some("Deep Space Folio".to_string());
    config.theme_color = Some("#0a0020".to_string());
    config.video_autoplay = Some(false);

    config::save_to_path(&config, &path).expect("failed to write config file");
    let loaded = config::load_from_path(&path).expect("failed to load config from path");

    assert_eq!(loaded.site_title(), "Deep Space Folio");
    assert_eq!(loaded.theme_color.as_deref(), Some("#0a0020"));
    assert!(!loaded.video_autoplay());

    dir.close().expect("failed to close temporary directory");
}

#[test]
fn test_registry_override_replaces_builtin_lists() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("content.toml");

    let text = r#"
        socials = []

        [[skills]]
        title = "Core"

        [[skills.items]]
        name = "React"
        image = "skills/react.png"
        width = 40
        height = 40
        order = 0

        [[skills.items]]
        name = "Go"
        image = "skills/go.png"
        width = 40
        height = 40
        order = 1

        [[projects]]
        name = "Portfolio"
        image = "projects/portfolio.png"
        width = 1000
        height = 600
        order = 0
        link = "https://example.com"
    "#;
    std::fs::write(&path, text).expect("failed to write content file");

    let registry = Registry::load_from_path(&path).expect("override must load");
    assert_eq!(registry.skills.len(), 1);

    let row = &registry.skills[0].items;
    let names: Vec<&str> = row.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, ["React", "Go"]);

    assert_eq!(registry.projects[0].link.as_deref(), Some("https://example.com"));
}

#[test]
fn test_invalid_registry_override_is_rejected() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("content.toml");

    // Duplicate project names violate the registry invariants.
    let text = r#"
        skills = []
        socials = []

        [[projects]]
        name = "Portfolio"
        image = "a.png"
        width = 10
        height = 10
        order = 0

        [[projects]]
        name = "Portfolio"
        image = "b.png"
        width = 10
        height = 10
        order = 1
    "#;
    std::fs::write(&path, text).expect("failed to write content file");

    assert!(Registry::load_from_path(&path).is_err());
}

#[test]
fn test_media_swap_happens_once_and_only_after_ready() {
    let mut state = load_state::State::new(Duration::from_millis(500));
    let mounted = Instant::now();

    // Pending until the ready signal fires, however long that takes.
    for seconds in [0_u64, 1, 60, 3600] {
        let now = mounted + Duration::from_secs(seconds);
        assert_eq!(state.phase(), Phase::Pending);
        assert_eq!(state.media_opacity(now), 0.0);
        assert_eq!(state.placeholder_opacity(now), 1.0);
    }

    let ready_at = mounted + Duration::from_secs(2);
    assert_eq!(
        state.handle(load_state::Message::MediaReady(ready_at)),
        Effect::BecameLoaded
    );
    assert_eq!(state.phase(), Phase::Loaded);

    // A second ready signal has no visible effect.
    let opacity = state.media_opacity(ready_at + Duration::from_millis(250));
    state.handle(load_state::Message::MediaReady(ready_at + Duration::from_secs(9)));
    assert_eq!(
        state.media_opacity(ready_at + Duration::from_millis(250)),
        opacity
    );

    // And the state never reverts to pending.
    assert_eq!(state.phase(), Phase::Loaded);
    assert_eq!(
        state.media_opacity(ready_at + Duration::from_secs(10)),
        1.0
    );
}
