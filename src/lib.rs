pub mod api;
pub mod app;
pub mod carousel;
pub mod components;
pub mod filters;
pub mod likes;
pub mod models;
pub mod pages;
pub mod storage;
pub mod submissions;
