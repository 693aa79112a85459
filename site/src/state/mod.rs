//! Page state models.
//!
//! DESIGN
//! ======
//! `theme` and `contact` are plain state machines with no browser access, so
//! their transitions are tested natively. Browser effects live behind the
//! traits each module declares.

pub mod contact;
pub mod theme;
