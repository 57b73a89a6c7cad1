mod common;

use common::review;
use ioa::likes::{LikeTracker, LIKED_REVIEWS_KEY};
use ioa::storage::{MemStorage, StorageAdapter};
use std::cell::RefCell;
use std::rc::Rc;

fn persisted_ids(storage: &MemStorage) -> Vec<u32> {
    storage
        .get(LIKED_REVIEWS_KEY)
        .map(|raw| serde_json::from_str(&raw).unwrap())
        .unwrap_or_default()
}

#[test]
fn hydration_applies_persisted_membership() {
    let storage = Rc::new(MemStorage::new());
    storage.set(LIKED_REVIEWS_KEY, "[2]").unwrap();

    let tracker = LikeTracker::new(storage);
    let mut reviews = vec![
        review(1, 4.5, 10, Some(80000), &[]),
        review(2, 4.2, 8, Some(75000), &[]),
    ];
    tracker.hydrate(&mut reviews);

    assert!(!reviews[0].liked);
    assert!(reviews[1].liked);
}

#[test]
fn toggle_persists_the_full_id_set() {
    let storage = Rc::new(MemStorage::new());
    let mut tracker = LikeTracker::new(storage.clone() as Rc<dyn StorageAdapter>);

    tracker.toggle(1);
    tracker.toggle(2);

    assert_eq!(persisted_ids(&storage), vec![1, 2]);
    assert!(tracker.is_liked(1));
    assert!(tracker.is_liked(2));
}

#[test]
fn double_toggle_restores_the_original_state() {
    let storage = Rc::new(MemStorage::new());
    storage.set(LIKED_REVIEWS_KEY, "[3]").unwrap();
    let mut tracker = LikeTracker::new(storage.clone() as Rc<dyn StorageAdapter>);

    tracker.toggle(1);
    tracker.toggle(1);

    assert!(!tracker.is_liked(1));
    assert_eq!(tracker.liked_ids(), &[3]);
    assert_eq!(persisted_ids(&storage), vec![3]);
}

#[test]
fn malformed_persisted_value_defaults_to_empty() {
    let storage = Rc::new(MemStorage::new());
    storage.set(LIKED_REVIEWS_KEY, "not json at all").unwrap();

    let tracker = LikeTracker::new(storage);
    assert!(tracker.liked_ids().is_empty());
}

#[test]
fn subscribers_receive_each_full_update() {
    let storage = Rc::new(MemStorage::new());
    let mut tracker = LikeTracker::new(storage);

    let seen: Rc<RefCell<Vec<Vec<u32>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    tracker.subscribe(move |ids| sink.borrow_mut().push(ids.to_vec()));

    tracker.toggle(1);
    tracker.toggle(2);
    tracker.toggle(1);

    assert_eq!(*seen.borrow(), vec![vec![1], vec![1, 2], vec![2]]);
}

#[test]
fn toggling_an_unknown_id_leaves_reviews_untouched() {
    let storage = Rc::new(MemStorage::new());
    let mut tracker = LikeTracker::new(storage);
    tracker.toggle(99);

    let mut reviews = vec![review(1, 4.5, 10, Some(80000), &[])];
    tracker.hydrate(&mut reviews);
    assert!(!reviews[0].liked);
}
