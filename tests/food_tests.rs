#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use glam::Vec2;
use orchard::simulation::food::{Apple, AppleId, AppleStore, StaleApple};

fn stocked_store() -> (AppleStore, Vec<AppleId>) {
    let mut store = AppleStore::new();
    let ids = (0..3)
        .map(|i| store.insert(Apple::new(Vec2::new(i as f32 * 10.0, 0.0), 40.0)))
        .collect();
    (store, ids)
}

#[test]
fn test_take_yields_energy_exactly_once() {
    let (mut store, ids) = stocked_store();

    assert_eq!(store.take(ids[0]), Ok(40.0));
    assert_eq!(store.take(ids[0]), Err(StaleApple(ids[0])));

    // Still present until the sweep, but flagged
    assert!(store.get(ids[0]).expect("present until sweep").is_taken());
    assert_eq!(store.len(), 3);
    assert_eq!(store.available(), 2);
}

#[test]
fn test_take_with_dangling_handle_is_stale() {
    let (mut store, ids) = stocked_store();

    store.take(ids[1]).expect("first claim succeeds");
    store.sweep();

    assert!(!store.contains(ids[1]));
    assert_eq!(store.take(ids[1]), Err(StaleApple(ids[1])));

    // The null handle never resolves either
    let null = AppleId::default();
    assert_eq!(store.take(null), Err(StaleApple(null)));
}

#[test]
fn test_iteration_follows_insertion_order() {
    let (store, ids) = stocked_store();

    let seen: Vec<AppleId> = store.iter().map(|(id, _)| id).collect();
    assert_eq!(seen, ids);
}

#[test]
fn test_sweep_removes_taken_apples_only() {
    let (mut store, ids) = stocked_store();

    store.take(ids[1]).expect("first claim succeeds");
    assert_eq!(store.sweep(), 1);

    assert_eq!(store.len(), 2);
    assert_eq!(store.available(), 2);
    assert!(store.contains(ids[0]));
    assert!(!store.contains(ids[1]));
    assert!(store.contains(ids[2]));

    // Survivors keep their relative order
    let seen: Vec<AppleId> = store.iter().map(|(id, _)| id).collect();
    assert_eq!(seen, vec![ids[0], ids[2]]);

    // Nothing left to sweep
    assert_eq!(store.sweep(), 0);
}

#[test]
fn test_insert_after_sweep_appends_in_order() {
    let (mut store, ids) = stocked_store();

    store.take(ids[0]).expect("first claim succeeds");
    store.sweep();

    let newcomer = store.insert(Apple::new(Vec2::new(99.0, 0.0), 40.0));
    let seen: Vec<AppleId> = store.iter().map(|(id, _)| id).collect();
    assert_eq!(seen, vec![ids[1], ids[2], newcomer]);
    assert_eq!(store.get(newcomer).expect("just inserted").pos().x, 99.0);
}

#[test]
fn test_empty_store() {
    let store = AppleStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.available(), 0);
    assert_eq!(store.iter().count(), 0);
}
