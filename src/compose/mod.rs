//! Side-by-Side Composer: paste images left to right and caption them.

pub mod composer;
pub mod layout;
