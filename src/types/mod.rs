pub mod identifiers;
pub mod payloads;

pub use identifiers::{CommentId, DocumentId, DocumentVersion};
pub use payloads::{DocumentPatch, NewComment, NewDocument};
