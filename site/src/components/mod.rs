//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections are mostly static layout over `content`. Only `navbar` (theme
//! toggle) and `contact` (form submission) hold behaviour; both read and
//! write shared state through Leptos context or their own signals.

pub mod about;
pub mod contact;
pub mod floating_shapes;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod services;
