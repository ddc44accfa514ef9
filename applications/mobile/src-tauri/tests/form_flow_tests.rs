//! Form screen flow tests
//!
//! These exercise the full submission path against real stores: validation
//! never touches storage, the create path appends with the fallback glyph,
//! and the edit path replaces exactly one record.

use agenda_core::types::{Avatar, UserId, UserRecord};
use agenda_core::{AgendaError, UserStore};
use agenda_mobile::user_form::{
    save_error_modal, validation_modal, AvatarSelection, FormPhase, SaveUserInput, SubmitOutcome,
    UserForm,
};
use agenda_mobile::user_list::form_route_params;
use agenda_storage::MemoryUserStore;
use async_trait::async_trait;

#[tokio::test]
async fn blank_name_is_rejected_and_storage_is_never_touched() {
    let store = MemoryUserStore::new();

    let mut form = UserForm::create();
    form.name = "   ".to_string();
    form.email = "ana@x.com".to_string();

    let outcome = form.submit(&store).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            modal: validation_modal()
        }
    );
    assert_eq!(form.phase(), FormPhase::Idle);
    // No blob was ever written
    assert_eq!(store.raw_blob().await, None);
}

#[tokio::test]
async fn blank_email_is_rejected_the_same_way() {
    let store = MemoryUserStore::new();
    store.ensure_seeded().await.unwrap();
    let blob_before = store.raw_blob().await;

    let mut form = UserForm::create();
    form.name = "Ana".to_string();
    form.email = String::new();

    let outcome = form.submit(&store).await;

    assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
    assert_eq!(store.raw_blob().await, blob_before);
}

#[tokio::test]
async fn create_with_no_avatar_persists_the_fallback_glyph_and_a_fresh_id() {
    let store = MemoryUserStore::new();
    store.ensure_seeded().await.unwrap();

    let mut form = UserForm::create();
    form.name = "Ana".to_string();
    form.email = "ana@x.com".to_string();

    let outcome = form.submit(&store).await;

    let SubmitOutcome::Saved { user } = outcome else {
        panic!("expected a saved outcome");
    };
    assert_eq!(user.avatar_url, Avatar::FALLBACK_GLYPH);
    assert_eq!(user.avatar_kind, "glyph");

    let users = store.load_all().await.unwrap();
    assert_eq!(users.len(), 4);

    let created = users.last().unwrap();
    assert_eq!(created.name, "Ana");
    assert_eq!(created.avatar, Avatar::Glyph("🐶".to_string()));
    assert!(!created.id.as_str().is_empty());
    assert!(users[..3].iter().all(|u| u.id != created.id));

    // A successful save clears the form
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
}

#[tokio::test]
async fn create_trims_the_fields_before_saving() {
    let store = MemoryUserStore::new();

    let mut form = UserForm::create();
    form.name = "  Ana  ".to_string();
    form.email = " ana@x.com ".to_string();
    form.select_emoji("🦊");

    let SubmitOutcome::Saved { user } = form.submit(&store).await else {
        panic!("expected a saved outcome");
    };
    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@x.com");
    assert_eq!(user.avatar_url, "🦊");
}

#[tokio::test]
async fn edit_preserves_the_id_and_leaves_other_records_untouched() {
    let store = MemoryUserStore::new();
    store.ensure_seeded().await.unwrap();
    let before = store.load_all().await.unwrap();

    // Navigate list -> form with the record's route parameters
    let params = form_route_params(&before[0]);
    let mut form = UserForm::from_route_params(&params);
    form.name = "Ana Paula".to_string();

    let SubmitOutcome::Saved { user } = form.submit(&store).await else {
        panic!("expected a saved outcome");
    };
    assert_eq!(user.id, "1");
    assert_eq!(user.name, "Ana Paula");
    // The carried-in avatar survives an edit with no new selection
    assert_eq!(user.avatar_url, before[0].avatar.as_raw());

    let after = store.load_all().await.unwrap();
    assert_eq!(after.len(), before.len());
    assert_eq!(after[0].id, UserId::new("1"));
    assert_eq!(after[0].name, "Ana Paula");

    // Every other record is byte-for-byte identical
    for (old, new) in before[1..].iter().zip(&after[1..]) {
        assert_eq!(
            serde_json::to_string(old).unwrap(),
            serde_json::to_string(new).unwrap()
        );
    }
}

#[tokio::test]
async fn edit_of_a_vanished_id_rewrites_the_collection_unchanged() {
    let store = MemoryUserStore::new();
    store.ensure_seeded().await.unwrap();
    let before = store.load_all().await.unwrap();

    let input = SaveUserInput {
        id: Some("999".to_string()),
        name: "Ninguém".to_string(),
        email: "n@x.com".to_string(),
        avatar: None,
        is_editing: Some("true".to_string()),
        avatar_url: None,
    };

    let outcome = input.into_form().submit(&store).await;
    assert!(matches!(outcome, SubmitOutcome::Saved { .. }));
    assert_eq!(store.load_all().await.unwrap(), before);
}

#[tokio::test]
async fn selection_reaches_storage_through_the_save_payload() {
    let store = MemoryUserStore::new();

    let input = SaveUserInput {
        id: None,
        name: "Breno".to_string(),
        email: "b@x.com".to_string(),
        avatar: Some(AvatarSelection::Preset(
            "https://cdn.pixabay.com/photo/2017/02/16/23/10/smile-2072907_960_720.jpg".to_string(),
        )),
        is_editing: None,
        avatar_url: None,
    };

    let SubmitOutcome::Saved { user } = input.into_form().submit(&store).await else {
        panic!("expected a saved outcome");
    };
    assert_eq!(user.avatar_kind, "remote");

    let users = store.load_all().await.unwrap();
    assert!(matches!(users[0].avatar, Avatar::Remote(_)));
}

#[tokio::test]
async fn non_http_custom_url_falls_back_to_the_glyph() {
    let store = MemoryUserStore::new();

    let mut form = UserForm::create();
    form.name = "Caio".to_string();
    form.email = "c@x.com".to_string();
    form.set_custom_url("minha foto");

    let SubmitOutcome::Saved { user } = form.submit(&store).await else {
        panic!("expected a saved outcome");
    };
    assert_eq!(user.avatar_url, "🐶");
}

/// Store whose writes always fail, for the could-not-save modal path
struct FailingStore;

#[async_trait]
impl UserStore for FailingStore {
    async fn load_all(&self) -> agenda_core::Result<Vec<UserRecord>> {
        Ok(Vec::new())
    }

    async fn save_all(&self, _records: &[UserRecord]) -> agenda_core::Result<()> {
        Err(AgendaError::storage("disk full"))
    }

    async fn ensure_seeded(&self) -> agenda_core::Result<bool> {
        Ok(false)
    }
}

#[tokio::test]
async fn write_failure_surfaces_the_generic_save_error_modal() {
    let mut form = UserForm::create();
    form.name = "Ana".to_string();
    form.email = "ana@x.com".to_string();

    let outcome = form.submit(&FailingStore).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            modal: save_error_modal()
        }
    );
    // The form stays usable afterwards
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(form.name, "Ana");
}
