/// Tracks which properties the user has liked.
///
/// The liked-id set is persisted whole under a fixed key on every toggle and
/// broadcast to subscribers, so views outside the review list (the liked-items
/// page) stay in sync without sharing in-memory state.
use crate::models::review::Review;
use crate::storage::{self, StorageAdapter};
use leptos::logging::log;
use std::rc::Rc;

pub const LIKED_REVIEWS_KEY: &str = "likedReviews";

type LikeListener = Box<dyn Fn(&[u32])>;

pub struct LikeTracker {
    storage: Rc<dyn StorageAdapter>,
    liked: Vec<u32>,
    listeners: Vec<LikeListener>,
}

impl LikeTracker {
    /// Hydrates the liked set from persisted storage; a missing or
    /// malformed value starts the session with nothing liked.
    pub fn new(storage: Rc<dyn StorageAdapter>) -> Self {
        let liked: Vec<u32> = storage::get_json(storage.as_ref(), LIKED_REVIEWS_KEY);
        log!("[LIKES] Hydrated {} liked reviews", liked.len());
        Self {
            storage,
            liked,
            listeners: Vec::new(),
        }
    }

    pub fn is_liked(&self, id: u32) -> bool {
        self.liked.contains(&id)
    }

    pub fn liked_ids(&self) -> &[u32] {
        &self.liked
    }

    /// Applies persisted membership as each review's initial `liked` flag.
    pub fn hydrate(&self, reviews: &mut [Review]) {
        for review in reviews.iter_mut() {
            review.liked = self.is_liked(review.id);
        }
    }

    /// Registers a listener invoked with the full updated id list on
    /// every toggle.
    pub fn subscribe(&mut self, listener: impl Fn(&[u32]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Flips membership for the given id, persists the whole updated set
    /// and notifies subscribers. Returns the updated id list.
    pub fn toggle(&mut self, id: u32) -> Vec<u32> {
        if let Some(pos) = self.liked.iter().position(|&liked_id| liked_id == id) {
            self.liked.remove(pos);
        } else {
            self.liked.push(id);
        }
        storage::set_json(self.storage.as_ref(), LIKED_REVIEWS_KEY, &self.liked);

        for listener in &self.listeners {
            listener(&self.liked);
        }
        self.liked.clone()
    }
}
