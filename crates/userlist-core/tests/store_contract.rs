//! Record store contract: fixed size, fixed order, fixed values.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use userlist_core::{InMemoryUserStore, User, UserStore};

#[test]
fn find_all_returns_three_records_in_id_order() {
    let store = InMemoryUserStore::new();
    let users = store.find_all();
    assert_eq!(users.len(), 3);
    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn every_record_is_kemal_aydin() {
    let store = InMemoryUserStore::new();
    for u in store.find_all() {
        assert_eq!(u.first_name, "Kemal");
        assert_eq!(u.last_name, "Aydın");
    }
}

#[test]
fn repeated_calls_are_stable() {
    let store = InMemoryUserStore::new();
    let first: Vec<User> = store.find_all().to_vec();
    for _ in 0..10 {
        assert_eq!(store.find_all(), first.as_slice());
    }
}

#[test]
fn usable_as_trait_object_across_threads() {
    let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.find_all().len())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 3);
    }
}

#[test]
fn wire_format_matches_contract() {
    let store = InMemoryUserStore::new();
    let json = serde_json::to_string(store.find_all()).unwrap();
    assert_eq!(
        json,
        r#"[{"id":1,"firstName":"Kemal","lastName":"Aydın"},{"id":2,"firstName":"Kemal","lastName":"Aydın"},{"id":3,"firstName":"Kemal","lastName":"Aydın"}]"#
    );
}
