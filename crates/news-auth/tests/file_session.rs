//! Session persistence across holders sharing one state directory.

use chrono::{NaiveDate, Utc};
use news_auth::{AuthError, FileSessionStore, SessionHolder};
use news_core::entities::{DEFAULT_AVATAR, User};
use news_core::enums::Role;
use pretty_assertions::assert_eq;

fn admin() -> User {
    User {
        id: 2,
        name: "Sarah Admin".into(),
        email: "admin@example.com".into(),
        role: Role::Admin,
        avatar: DEFAULT_AVATAR.into(),
        join_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        is_active: true,
    }
}

#[test]
fn login_survives_a_new_process() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let state = tmp.path().join(".newsroom");

    let mut session = SessionHolder::init(FileSessionStore::new(&state, "current-user"));
    session
        .login(&[admin()], "admin@example.com", "password")
        .unwrap();

    let raw = std::fs::read_to_string(state.join("current-user")).expect("session file");
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["email"], "admin@example.com");
    assert_eq!(json["joinDate"], "2024-01-10");

    let restored = SessionHolder::init(FileSessionStore::new(&state, "current-user"));
    assert_eq!(restored.current(), Some(&admin()));
}

#[test]
fn failed_login_does_not_create_session_file() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let store = FileSessionStore::new(tmp.path(), "current-user");
    let path = store.path().to_path_buf();

    let mut session = SessionHolder::init(store);
    let err = session
        .login(&[admin()], "admin@example.com", "wrong")
        .unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert!(!path.exists());
}

#[test]
fn logout_removes_session_file() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let store = FileSessionStore::new(tmp.path(), "current-user");
    let path = store.path().to_path_buf();

    let mut session = SessionHolder::init(store);
    session
        .register("Reader", "reader@example.com", "secret", Utc::now())
        .unwrap();
    assert!(path.exists());

    session.logout().unwrap();
    assert!(!path.exists());
    assert!(session.current().is_none());
}

#[test]
fn garbage_session_file_starts_signed_out() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    std::fs::write(tmp.path().join("current-user"), "not a user").unwrap();

    let session = SessionHolder::init(FileSessionStore::new(tmp.path(), "current-user"));
    assert!(session.current().is_none());
}
