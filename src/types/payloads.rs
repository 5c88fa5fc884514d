use serde::{Deserialize, Serialize};

use crate::document::Block;
use crate::location::CommentLocation;

/// Input for document creation.
///
/// Field invariants (non-blank title/content, title length, block id
/// uniqueness) are enforced by `Document::create`, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocument {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl NewDocument {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        NewDocument {
            title: title.into(),
            content: content.into(),
            blocks: Vec::new(),
        }
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }
}

/// Partial document update. Omitted fields keep their current value;
/// `blocks`, when present, replaces the prior list wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub blocks: Option<Vec<Block>>,
}

impl DocumentPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = Some(blocks);
        self
    }
}

/// Input for comment creation. The location arrives already structurally
/// valid; content validation runs against the loaded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
    pub author: String,
    pub location: CommentLocation,
}

impl NewComment {
    pub fn new(
        content: impl Into<String>,
        author: impl Into<String>,
        location: CommentLocation,
    ) -> Self {
        NewComment {
            content: content.into(),
            author: author.into(),
            location,
        }
    }
}
