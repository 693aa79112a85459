//! Outbound messaging: the email relay client and the submission driver that
//! sequences it against the contact flow.

pub mod relay;
pub mod submit;
