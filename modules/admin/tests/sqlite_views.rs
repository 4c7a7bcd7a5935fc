mod common;

use chrono::{Duration, TimeZone, Utc};
use common::*;
use db::{ConnectOpts, DbHandle};
use leads::domain::repo::LeadsRepository;
use leads::infra::storage::SeaOrmLeadsRepository;
use leads::model::Contact;
use leads::Leads;
use uuid::Uuid;

fn contact_at(name: &str, minutes: i64) -> Contact {
    Contact {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: None,
        engine_type: None,
        message: "Looking for a repower".to_owned(),
        created_at: Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap() + Duration::minutes(minutes),
    }
}

#[tokio::test]
async fn pages_list_stored_rows_newest_first() {
    let db = DbHandle::connect("sqlite::memory:", ConnectOpts::default())
        .await
        .expect("connect in-memory sqlite");
    Leads::migrate(&db).await.expect("run migrations");

    // Inserted out of chronological order on purpose.
    let repo = SeaOrmLeadsRepository::new(db.sea());
    for (name, minutes) in [("Middle", 10), ("Oldest", 0), ("Newest", 45)] {
        repo.insert_contact(contact_at(name, minutes)).await.unwrap();
    }
    for n in 0..12 {
        repo.insert_contact(contact_at(&format!("Filler{n:02}"), -100 - n))
            .await
            .unwrap();
    }

    let app = app_with(Leads::new(&db).client());
    let cookie = sign_in(&app).await;

    let list = body_text(send(&app, get("/admin/contacts", Some(&cookie))).await).await;
    let newest = list.find("Newest").unwrap();
    let middle = list.find("Middle").unwrap();
    let oldest = list.find("Oldest").unwrap();
    assert!(newest < middle && middle < oldest);
    assert_eq!(list.matches(r#"href="/admin/contacts/"#).count(), 15);

    let overview = body_text(send(&app, get("/admin", Some(&cookie))).await).await;
    assert_eq!(overview.matches(r#"href="/admin/contacts/"#).count(), 10);
    assert!(overview.contains("<h2>15</h2>"));
    assert!(overview.find("Newest").unwrap() < overview.find("Oldest").unwrap());
    assert!(!overview.contains("Filler11"));
}
