use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn storysnap_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("storysnap").expect("binary exists");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .env_remove("STORYSNAP_APP_ID")
        .env_remove("DBUS_SESSION_BUS_ADDRESS");
    cmd
}

fn write_photo(home: &TempDir) -> std::path::PathBuf {
    let photo = home.path().join("selfie.jpg");
    std::fs::write(&photo, b"not really a jpeg").unwrap();
    photo
}

#[test]
fn storysnap_help_prints_description() {
    let home = TempDir::new().unwrap();
    storysnap_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Selfie capture, annotation and story sharing",
        ));
}

#[test]
fn no_photo_prints_usage() {
    let home = TempDir::new().unwrap();
    storysnap_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--photo <PATH>"));
}

#[test]
fn save_fallback_requires_share_flag() {
    let home = TempDir::new().unwrap();
    storysnap_cmd(&home)
        .arg("--save-fallback")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn missing_photo_reports_camera_unavailable() {
    let home = TempDir::new().unwrap();
    storysnap_cmd(&home)
        .args(["--photo", "/definitely/not/here.jpg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Camera unavailable"));
}

#[test]
fn script_is_replayed_onto_photo() {
    let home = TempDir::new().unwrap();
    let photo = write_photo(&home);
    let script = home.path().join("steps.json");
    std::fs::write(
        &script,
        r##"[
            { "action": "mode", "mode": "drawing" },
            { "action": "color", "color": "blue" },
            { "action": "gesture", "path": [[0, 0], [10, 0], [10, 10]] },
            { "action": "mode", "mode": "sticker" },
            { "action": "arm", "sticker": 1 },
            { "action": "tap", "x": 100, "y": 100 }
        ]"##,
    )
    .unwrap();

    storysnap_cmd(&home)
        .arg("--photo")
        .arg(&photo)
        .arg("--script")
        .arg(&script)
        .args(["--caption", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Photo: file://"))
        .stdout(predicate::str::contains("Mode: sticker"))
        .stdout(predicate::str::contains("Color: Blue"))
        .stdout(predicate::str::contains("Strokes: 1 (2 segments)"))
        .stdout(predicate::str::contains("Stickers: 1"))
        .stdout(predicate::str::contains("Caption: \"hi\""))
        .stdout(predicate::str::contains("Layers: 3"));
}

#[test]
fn malformed_script_fails_with_context() {
    let home = TempDir::new().unwrap();
    let photo = write_photo(&home);
    let script = home.path().join("broken.json");
    std::fs::write(&script, "{ not json").unwrap();

    storysnap_cmd(&home)
        .arg("--photo")
        .arg(&photo)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse script"));
}

#[test]
fn invalid_config_fails_with_context() {
    let home = TempDir::new().unwrap();
    let photo = write_photo(&home);
    let config = home.path().join("config.toml");
    std::fs::write(&config, "[drawing\nstroke_thickness = ").unwrap();

    storysnap_cmd(&home)
        .arg("--photo")
        .arg(&photo)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn share_without_app_saves_to_configured_gallery() {
    let home = TempDir::new().unwrap();
    let photo = write_photo(&home);
    let gallery = home.path().join("gallery");
    let config = home.path().join("config.toml");
    std::fs::write(
        &config,
        format!(
            "[share]\n\
             probe_uri = \"storysnap-test-missing-app://share\"\n\n\
             [gallery]\n\
             save_directory = {:?}\n",
            gallery.display().to_string()
        ),
    )
    .unwrap();

    storysnap_cmd(&home)
        .arg("--photo")
        .arg(&photo)
        .arg("--config")
        .arg(&config)
        .args(["--share", "--save-fallback"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to gallery"));

    let saved: Vec<_> = std::fs::read_dir(&gallery).unwrap().collect();
    assert_eq!(saved.len(), 1);
    assert!(home.path().join("cache").join("image-to-share.jpg").exists());
}
