use std::{fs, path::PathBuf};

use accreq_admin::AccountRequestStore;
use accreq_core::types::AccountRequestStatus;

use crate::harness::{
    harness::{payload, ActionHarness},
    store::FileStore,
};

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("accreq-{}", uuid::Uuid::new_v4()))
}

pub fn field_update_round_trip() -> anyhow::Result<()> {
    let dir = temp_dir();
    let mut h = ActionHarness::with_file_store(dir.clone());
    let original = h.seed(AccountRequestStatus::Rejected);

    h.update(
        &original.id().to_string(),
        payload(
            "Carol Ng",
            "carol@poly.edu.sg",
            "Singapore Polytechnic",
            AccountRequestStatus::Pending,
            Some("moved to a new school"),
        ),
    )?;

    // fresh handle on the same directory, nothing cached
    let mut reread = FileStore::new(dir.clone());
    let stored = reread
        .get_account_request(&original.id())
        .ok_or_else(|| anyhow::anyhow!("row vanished"))?;
    assert_eq!(stored.name(), "Carol Ng");
    assert_eq!(stored.email(), "carol@poly.edu.sg");
    assert_eq!(stored.institute(), "Singapore Polytechnic");
    assert_eq!(stored.comments(), Some("moved to a new school"));
    assert_eq!(stored.status(), AccountRequestStatus::Rejected);
    assert_eq!(stored.created_at(), original.created_at());
    assert!(h.sender.sent().is_empty());

    fs::remove_dir_all(dir)?;
    Ok(())
}

pub fn approval_round_trip() -> anyhow::Result<()> {
    let dir = temp_dir();
    let mut h = ActionHarness::with_file_store(dir.clone());
    let original = h.seed(AccountRequestStatus::Pending);

    let data = h.update(
        &original.id().to_string(),
        payload(
            "Ignored",
            "ignored@x.org",
            "Ignored",
            AccountRequestStatus::Approved,
            None,
        ),
    )?;
    assert_eq!(data.status, AccountRequestStatus::Approved);

    let mut reread = FileStore::new(dir.clone());
    let stored = reread
        .get_account_request(&original.id())
        .ok_or_else(|| anyhow::anyhow!("row vanished"))?;
    assert_eq!(stored.status(), AccountRequestStatus::Approved);
    assert_eq!(stored.name(), original.name());
    assert_eq!(stored.comments(), original.comments());
    assert_eq!(h.sender.sent().len(), 1);

    fs::remove_dir_all(dir)?;
    Ok(())
}
