// SPDX-License-Identifier: MPL-2.0
use guest_gallery::config::{self, Config};
use guest_gallery::error::Error;
use guest_gallery::ui::guests::{GalleryConfig, Message, State};
use tempfile::tempdir;

fn load_failure(id: u32) -> Message {
    Message::ImageLoaded {
        id,
        result: Err(Error::Io("no such file or directory".to_string())),
    }
}

#[test]
fn gallery_session_walkthrough() {
    // Configure 57 guests with guest 10 excluded.
    let config = Config {
        max_guests: Some(57),
        excluded_ids: Some(vec![10]),
        assets_dir: None,
    };
    let gallery = GalleryConfig::from(&config);
    let (mut state, _load_task) = State::new(gallery);

    // 56 records, ids 1..9 and 11..57 in ascending order.
    let ids: Vec<u32> = state.records().iter().map(|record| record.id).collect();
    let expected: Vec<u32> = (1..=57).filter(|id| *id != 10).collect();
    assert_eq!(ids, expected);

    // Fresh session: nothing failed, lightbox closed.
    assert_eq!(state.failed_count(), 0);
    assert!(!state.lightbox_open());

    // Image 25 fails to load; only that cell falls back.
    let _ = state.update(load_failure(25));
    assert!(state.is_failed(25));
    for id in &expected {
        if *id != 25 {
            assert!(!state.is_failed(*id));
        }
    }

    // Open guest 1 in the lightbox; its record carries the description.
    let _ = state.update(Message::CardPressed(1));
    let record = state.selected_record().expect("lightbox should be open");
    assert_eq!(record.id, 1);
    assert!(!record.description.is_empty());
    assert!(!state.is_failed(1));

    // Click outside the panel: back to closed, failure set untouched.
    let _ = state.update(Message::BackdropPressed);
    assert!(!state.lightbox_open());
    assert!(state.is_failed(25));
    assert_eq!(state.failed_count(), 1);
}

#[test]
fn configured_gallery_shape_survives_a_config_round_trip() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        max_guests: Some(8),
        excluded_ids: Some(vec![2, 5]),
        assets_dir: Some("portraits".to_string()),
    };
    config::save_to_path(&config, &config_path).expect("failed to save config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let gallery = GalleryConfig::from(&loaded);
    let records = gallery.generate();

    let ids: Vec<u32> = records.iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![1, 3, 4, 6, 7, 8]);
    assert!(records
        .iter()
        .all(|record| record.image_path.starts_with("portraits")));

    dir.close().expect("failed to close temporary directory");
}
