pub mod auth;
pub mod case;
pub mod dispatch;
pub mod document;
pub mod event;
pub mod seed;
pub mod shared;
