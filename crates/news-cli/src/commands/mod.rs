pub mod admin;
pub mod article;
pub mod auth;
pub mod bookmark;
pub mod dispatch;
pub mod glossary;
pub mod shared;
pub mod shell;
