/// Main application entry point for IoA.
/// Wires the shared storage adapter, like tracker and submissions store into
/// context and routes between the home, listing and liked-reviews pages.
use crate::components::header::Header;
use crate::likes::LikeTracker;
use crate::pages::{home::HomePage, liked::LikedReviewsPage, reviews::ReviewsPage};
use crate::storage::{LocalStorage, StorageAdapter};
use crate::submissions::ReviewSubmissions;
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared state handed to every page via context.
#[derive(Clone)]
pub struct AppState {
    pub likes: Rc<RefCell<LikeTracker>>,
    pub submissions: Rc<ReviewSubmissions>,
    /// Mirror of the tracker's liked-id set, updated through its
    /// subscription so any view can react to like changes.
    pub liked_ids: RwSignal<Vec<u32>>,
}

impl AppState {
    pub fn new(storage: Rc<dyn StorageAdapter>) -> Self {
        let mut tracker = LikeTracker::new(Rc::clone(&storage));
        let liked_ids = create_rw_signal(tracker.liked_ids().to_vec());
        tracker.subscribe(move |ids| liked_ids.set(ids.to_vec()));

        Self {
            likes: Rc::new(RefCell::new(tracker)),
            submissions: Rc::new(ReviewSubmissions::new(storage)),
            liked_ids,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppState::new(Rc::new(LocalStorage::new())));

    view! {
        <Title text="アパート情報サイト"/>
        <Router>
            <Header/>
            <main class="page">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/reviews" view=ReviewsPage/>
                    <Route path="/liked-reviews" view=LikedReviewsPage/>
                </Routes>
            </main>
        </Router>
    }
}
