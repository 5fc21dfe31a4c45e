use derive_more::{AsRef, Constructor, Deref, Display, From, Into};

/// A Git commit hash, as printed at the head of each annotation line.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, From, AsRef, Deref,
    Constructor,
)]
pub struct CommitHash(String);
