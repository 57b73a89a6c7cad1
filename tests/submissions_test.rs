use ioa::models::property_review::PropertyReview;
use ioa::storage::{MemStorage, StorageAdapter};
use ioa::submissions::{review_key, ReviewSubmissions};
use std::rc::Rc;

fn submission(author: &str, comment: &str) -> PropertyReview {
    PropertyReview {
        author: author.to_string(),
        rating: 4,
        comment: comment.to_string(),
        date: "2026/08/24".to_string(),
    }
}

#[test]
fn storage_key_is_derived_from_the_property_id() {
    assert_eq!(review_key(7), "propertyReviews_7");
}

#[test]
fn missing_list_defaults_to_empty() {
    let submissions = ReviewSubmissions::new(Rc::new(MemStorage::new()));
    assert!(submissions.reviews_for(1).is_empty());
}

#[test]
fn reviews_append_in_order() {
    let submissions = ReviewSubmissions::new(Rc::new(MemStorage::new()));
    submissions.add_review(1, submission("佐藤", "駅から近くて便利です。"));
    submissions.add_review(1, submission("鈴木", "冬は少し寒いです。"));

    let reviews = submissions.reviews_for(1);
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].author, "佐藤");
    assert_eq!(reviews[1].author, "鈴木");
}

#[test]
fn lists_are_keyed_per_property() {
    let submissions = ReviewSubmissions::new(Rc::new(MemStorage::new()));
    submissions.add_review(1, submission("佐藤", "静かな環境でした。"));
    submissions.add_review(2, submission("鈴木", "日当たりが良いです。"));

    assert_eq!(submissions.reviews_for(1).len(), 1);
    assert_eq!(submissions.reviews_for(2).len(), 1);
    assert!(submissions.reviews_for(3).is_empty());
}

#[test]
fn malformed_persisted_list_is_replaced() {
    let storage = Rc::new(MemStorage::new());
    storage.set(&review_key(1), "{ broken").unwrap();

    let submissions = ReviewSubmissions::new(storage);
    assert!(submissions.reviews_for(1).is_empty());

    submissions.add_review(1, submission("佐藤", "リフォーム済みで綺麗です。"));
    assert_eq!(submissions.reviews_for(1).len(), 1);
}
