//! HTTP route handlers.

pub mod about;
pub mod apply;
pub mod contact;
pub mod front;
pub mod health;
pub mod helpers;
pub mod positions;
pub mod static_files;
