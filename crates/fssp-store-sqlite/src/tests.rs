//! Integration tests for `SqliteStore` against an in-memory database.

use fssp_core::{debtor::NewDebtor, status::ProceedingStatus, store::DebtorStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn debtor(client_id: &str, ip_number: Option<&str>) -> NewDebtor {
  NewDebtor {
    client_id:   client_id.into(),
    debtor_name: "Petrov Petr".into(),
    debtor_dob:  "1975-05-05".into(),
    ip_number:   ip_number.map(Into::into),
  }
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get() {
  let s = store().await;

  let record = s.insert(debtor("c-1", Some("777/20/1-IP"))).await.unwrap();
  assert_eq!(record.status, ProceedingStatus::Unverified);
  assert_eq!(record.ip_number.as_deref(), Some("777/20/1-IP"));

  let fetched = s.get(record.id).await.unwrap().expect("record exists");
  assert_eq!(fetched, record);
}

#[tokio::test]
async fn insert_without_ip_number() {
  let s = store().await;
  let record = s.insert(debtor("c-1", None)).await.unwrap();

  let fetched = s.get(record.id).await.unwrap().unwrap();
  assert!(fetched.ip_number.is_none());
}

#[tokio::test]
async fn ids_are_distinct_and_increasing() {
  let s = store().await;
  let a = s.insert(debtor("c-1", None)).await.unwrap();
  let b = s.insert(debtor("c-1", None)).await.unwrap();
  assert!(b.id > a.id);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(42).await.unwrap().is_none());
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store() {
  let s = store().await;
  assert!(s.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_is_ordered_by_id() {
  let s = store().await;
  for client in ["c-3", "c-1", "c-2"] {
    s.insert(debtor(client, None)).await.unwrap();
  }

  let all = s.list_all().await.unwrap();
  let ids: Vec<i64> = all.iter().map(|r| r.id).collect();
  let mut sorted = ids.clone();
  sorted.sort_unstable();
  assert_eq!(ids, sorted);
  assert_eq!(
    all.iter().map(|r| r.client_id.as_str()).collect::<Vec<_>>(),
    ["c-3", "c-1", "c-2"]
  );
}

// ─── Status updates ──────────────────────────────────────────────────────────

#[tokio::test]
async fn update_by_client_id_touches_every_matching_row() {
  let s = store().await;
  let a = s.insert(debtor("shared", Some("111"))).await.unwrap();
  let b = s.insert(debtor("shared", Some("222"))).await.unwrap();
  let other = s.insert(debtor("other", None)).await.unwrap();

  let changed = s
    .update_status_by_client_id("shared", ProceedingStatus::Terminated)
    .await
    .unwrap();
  assert_eq!(changed, 2);

  for id in [a.id, b.id] {
    let r = s.get(id).await.unwrap().unwrap();
    assert_eq!(r.status, ProceedingStatus::Terminated);
  }
  let r = s.get(other.id).await.unwrap().unwrap();
  assert_eq!(r.status, ProceedingStatus::Unverified);
}

#[tokio::test]
async fn update_by_unknown_client_id_changes_nothing() {
  let s = store().await;
  s.insert(debtor("c-1", None)).await.unwrap();

  let changed = s
    .update_status_by_client_id("nobody", ProceedingStatus::Completed)
    .await
    .unwrap();
  assert_eq!(changed, 0);
}

#[tokio::test]
async fn update_by_id_touches_one_row() {
  let s = store().await;
  let a = s.insert(debtor("shared", None)).await.unwrap();
  let b = s.insert(debtor("shared", None)).await.unwrap();

  assert!(s.update_status(b.id, ProceedingStatus::InProgress).await.unwrap());

  assert_eq!(
    s.get(a.id).await.unwrap().unwrap().status,
    ProceedingStatus::Unverified
  );
  assert_eq!(
    s.get(b.id).await.unwrap().unwrap().status,
    ProceedingStatus::InProgress
  );
}

#[tokio::test]
async fn update_missing_id_returns_false() {
  let s = store().await;
  assert!(!s.update_status(7, ProceedingStatus::NotFound).await.unwrap());
}

#[tokio::test]
async fn created_at_is_preserved_across_updates() {
  let s = store().await;
  let r = s.insert(debtor("c-1", None)).await.unwrap();
  s.update_status(r.id, ProceedingStatus::Completed).await.unwrap();

  let fetched = s.get(r.id).await.unwrap().unwrap();
  assert_eq!(fetched.created_at, r.created_at);
}

// ─── File-backed ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn reopening_a_file_keeps_records() {
  let dir  = std::env::temp_dir().join(format!("fssp-store-{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("reopen.db");
  let _ = std::fs::remove_file(&path);

  let first = SqliteStore::open(&path).await.unwrap();
  let r = first.insert(debtor("c-1", Some("9"))).await.unwrap();
  drop(first);

  let second = SqliteStore::open(&path).await.unwrap();
  let all = second.list_all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].id, r.id);

  drop(second);
  let _ = std::fs::remove_dir_all(&dir);
}

// ─── Rows written by the older tracker ───────────────────────────────────────

#[tokio::test]
async fn rows_from_older_schema_are_listed() {
  let dir  = std::env::temp_dir().join(format!("fssp-legacy-{}", std::process::id()));
  std::fs::create_dir_all(&dir).unwrap();
  let path = dir.join("legacy.db");
  let _ = std::fs::remove_file(&path);

  {
    let raw = rusqlite::Connection::open(&path).unwrap();
    raw
      .execute_batch(
        "CREATE TABLE debtors (
           id INTEGER PRIMARY KEY AUTOINCREMENT,
           client_id TEXT NOT NULL,
           debtor_name TEXT NOT NULL,
           debtor_dob TEXT NOT NULL,
           ip_number TEXT,
           status TEXT DEFAULT 'Не проверен',
           created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
         );
         INSERT INTO debtors (client_id, debtor_name, debtor_dob, ip_number)
           VALUES ('old-1', 'Sidorov', '1970-01-01', '1/20/1-IP');
         INSERT INTO debtors (client_id, debtor_name, debtor_dob, ip_number, status)
           VALUES ('old-2', 'Sidorov', '1970-01-01', '123/20/1-IP', 'Исполнено');
         INSERT INTO debtors (client_id, debtor_name, debtor_dob, status, created_at)
           VALUES ('old-3', 'Sidorov', '1970-01-01', 'unverified', CURRENT_TIMESTAMP);
         INSERT INTO debtors (client_id, debtor_name, debtor_dob, status)
           VALUES ('old-4', 'Sidorov', '1970-01-01', NULL);",
      )
      .unwrap();
  }

  let s = SqliteStore::open(&path).await.unwrap();
  let fresh = s.insert(debtor("new-1", Some("456"))).await.unwrap();

  let all = s.list_all().await.unwrap();
  let statuses: Vec<_> = all.iter().map(|r| (r.client_id.as_str(), r.status)).collect();
  assert_eq!(statuses, vec![
    ("old-1", ProceedingStatus::Unverified),
    ("old-2", ProceedingStatus::Completed),
    ("old-3", ProceedingStatus::Unverified),
    ("old-4", ProceedingStatus::Unverified),
    ("new-1", ProceedingStatus::Unverified),
  ]);
  assert_eq!(all[4], fresh);

  // Updates rewrite legacy rows in the current encoding.
  assert_eq!(
    s.update_status_by_client_id("old-2", ProceedingStatus::Terminated).await.unwrap(),
    1
  );
  let old = s.get(all[1].id).await.unwrap().expect("legacy row");
  assert_eq!(old.status, ProceedingStatus::Terminated);
  assert_eq!(old.created_at, all[1].created_at);

  drop(s);
  let _ = std::fs::remove_dir_all(&dir);
}
