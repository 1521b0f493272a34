//! Store adapter invariants: netid uniqueness, filter semantics, and the
//! concurrent-insert race the storage layer must close.

use std::sync::Arc;
use std::thread;

use serde_json::json;

use registrar::model::Student;
use registrar::store::{Filter, MemoryStore, StoreError, StudentPatch, StudentStore};

fn student(net_id: &str, year: i64, grade: i64) -> Student {
    Student {
        net_id: net_id.to_string(),
        name: format!("name-{}", net_id),
        major: "CS".to_string(),
        year,
        grade,
        rating: String::new(),
    }
}

#[test]
fn inserting_twice_keeps_exactly_one_record() {
    let store = MemoryStore::new();

    store.insert(student("n1", 2015, 90)).unwrap();
    let second = store.insert(student("n1", 2019, 55));

    assert!(matches!(second, Err(StoreError::DuplicateNetId(_))));

    let all = store.find_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].year, 2015, "rejected insert must not overwrite");
}

#[test]
fn concurrent_inserts_of_same_netid_store_one_record() {
    let store = Arc::new(MemoryStore::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.insert(student("contended", 2015, 60 + i)))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let ok = results.iter().filter(|r| r.is_ok()).count();
    let dup = results
        .iter()
        .filter(|r| matches!(r, Err(StoreError::DuplicateNetId(_))))
        .count();

    assert_eq!(ok, 1, "exactly one insert wins");
    assert_eq!(dup, 7);
    assert_eq!(store.find_all().unwrap().len(), 1);
}

#[test]
fn remove_all_takes_exactly_the_at_or_below_threshold_set() {
    let store = MemoryStore::new();
    for (id, year) in [("a", 2014), ("b", 2016), ("c", 2018), ("d", 2019)] {
        store.insert(student(id, year, 80)).unwrap();
    }

    let removed = store.remove_all(&Filter::lte("year", json!(2016))).unwrap();
    assert_eq!(removed, 2);

    let remaining: Vec<_> = store
        .find_all()
        .unwrap()
        .into_iter()
        .map(|s| s.net_id)
        .collect();
    assert_eq!(remaining, vec!["c", "d"]);
}

#[test]
fn remove_all_below_every_year_removes_nothing() {
    let store = MemoryStore::new();
    store.insert(student("a", 2014, 80)).unwrap();
    store.insert(student("b", 2016, 70)).unwrap();

    let removed = store.remove_all(&Filter::lte("year", json!(2000))).unwrap();
    assert_eq!(removed, 0);
    assert_eq!(store.find_all().unwrap().len(), 2);
}

#[test]
fn find_one_returns_first_match_in_insertion_order() {
    let store = MemoryStore::new();
    store.insert(student("first", 2015, 80)).unwrap();
    store.insert(student("second", 2015, 80)).unwrap();

    let found = store
        .find_one(&Filter::eq("year", json!(2015)))
        .unwrap()
        .unwrap();
    assert_eq!(found.net_id, "first");
}

#[test]
fn update_one_only_touches_the_matched_record() {
    let store = MemoryStore::new();
    store.insert(student("a", 2015, 80)).unwrap();
    store.insert(student("b", 2015, 80)).unwrap();

    store
        .update_one(&Filter::eq("netid", json!("b")), &StudentPatch::rating("A"))
        .unwrap();

    let all = store.find_all().unwrap();
    assert_eq!(all[0].rating, "");
    assert_eq!(all[1].rating, "A");
}

#[test]
fn unknown_field_filter_matches_nothing() {
    let store = MemoryStore::new();
    store.insert(student("a", 2015, 80)).unwrap();

    let found = store.find_one(&Filter::eq("gpa", json!("a"))).unwrap();
    assert!(found.is_none());

    let removed = store.remove_all(&Filter::lte("gpa", json!(100))).unwrap();
    assert_eq!(removed, 0);
}
