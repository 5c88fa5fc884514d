use comment_core::document::{Block, CommentError};
use comment_core::location::{CommentLocation, LocationError};
use comment_core::service::{CommentService, DocumentService, ServiceError};
use comment_core::storage::MemoryStore;
use comment_core::types::identifiers::DocumentId;
use comment_core::types::payloads::{NewComment, NewDocument};

fn services() -> (DocumentService<MemoryStore>, CommentService<MemoryStore>) {
    let store = MemoryStore::new();
    (
        DocumentService::new(store.clone()),
        CommentService::new(store),
    )
}

fn comment(location: CommentLocation) -> NewComment {
    NewComment::new("A remark", "reviewer", location)
}

#[test]
fn scenario_char_range_comment_lands_on_hello() {
    let (documents, comments) = services();
    let document = documents
        .create_document(NewDocument::new("Greeting", "Hello world"))
        .unwrap();

    let location = CommentLocation::char_range(0, 4).unwrap();
    let created = comments
        .create_comment(&document.id, NewComment::new("Nice opener", "alice", location.clone()))
        .unwrap();

    assert_eq!(created.document_id, document.id);
    assert_eq!(created.location, location);
    assert_eq!(created.author, "alice");

    // The anchored span reads "Hello".
    let span: String = document.content.chars().take(5).collect();
    assert_eq!(span, "Hello");
}

#[test]
fn scenario_out_of_range_comment_names_both_bounds() {
    let (documents, comments) = services();
    let document = documents
        .create_document(NewDocument::new("Greeting", "Hello world"))
        .unwrap();

    let location = CommentLocation::char_range(100, 105).unwrap();
    let err = comments
        .create_comment(&document.id, comment(location))
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::InvalidLocation(LocationError::StartCharOutOfBounds {
            start_char: 100,
            length: 11
        })
    ));
    let message = err.to_string();
    assert!(message.contains("100"), "missing offending offset: {message}");
    assert!(message.contains("11"), "missing document length: {message}");
}

#[test]
fn scenario_paragraph_index_must_stay_inside_document() {
    let (documents, comments) = services();
    let document = documents
        .create_document(NewDocument::new("Two paragraphs", "Para one.\n\nPara two."))
        .unwrap();

    assert!(comments
        .create_comment(&document.id, comment(CommentLocation::paragraph(1)))
        .is_ok());

    let err = comments
        .create_comment(&document.id, comment(CommentLocation::paragraph(2)))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidLocation(LocationError::ParagraphOutOfBounds {
            paragraph_index: 2,
            count: 2
        })
    ));
}

#[test]
fn scenario_deleting_a_document_takes_its_comments_with_it() {
    let (documents, comments) = services();
    let document = documents
        .create_document(NewDocument::new("Doomed", "Hello world"))
        .unwrap();

    comments
        .create_comment(
            &document.id,
            NewComment::new("First", "alice", CommentLocation::char_range(0, 4).unwrap()),
        )
        .unwrap();
    comments
        .create_comment(
            &document.id,
            NewComment::new("Second", "bob", CommentLocation::anchor("world").unwrap()),
        )
        .unwrap();

    documents.delete_document(&document.id).unwrap();

    assert!(matches!(
        comments.comments_for_document(&document.id),
        Err(ServiceError::DocumentNotFound(_))
    ));
}

#[test]
fn comments_list_oldest_first() {
    let (documents, comments) = services();
    let document = documents
        .create_document(NewDocument::new("Ordered", "Hello world"))
        .unwrap();

    for text in ["one", "two", "three"] {
        comments
            .create_comment(
                &document.id,
                NewComment::new(text, "alice", CommentLocation::paragraph(0)),
            )
            .unwrap();
    }

    let listed = comments.comments_for_document(&document.id).unwrap();
    let contents: Vec<&str> = listed.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["one", "two", "three"]);
}

#[test]
fn comment_creation_never_touches_the_document() {
    let (documents, comments) = services();
    let document = documents
        .create_document(NewDocument::new("Stable", "Hello world"))
        .unwrap();

    comments
        .create_comment(&document.id, comment(CommentLocation::paragraph(0)))
        .unwrap();
    comments
        .create_comment(&document.id, comment(CommentLocation::anchor("hello").unwrap()))
        .unwrap();

    let fetched = documents.get_document(&document.id).unwrap();
    assert_eq!(fetched.version, document.version);
    assert_eq!(fetched.updated_at, document.updated_at);
}

#[test]
fn operations_against_missing_documents_fail_with_not_found() {
    let (_, comments) = services();
    let missing = DocumentId::new();

    assert!(matches!(
        comments.comments_for_document(&missing),
        Err(ServiceError::DocumentNotFound(id)) if id == missing
    ));
    assert!(matches!(
        comments.create_comment(&missing, comment(CommentLocation::paragraph(0))),
        Err(ServiceError::DocumentNotFound(_))
    ));
}

#[test]
fn invariant_comment_fields_are_validated() {
    let (documents, comments) = services();
    let document = documents
        .create_document(NewDocument::new("Fields", "Hello world"))
        .unwrap();

    let blank_content = NewComment::new("  ", "alice", CommentLocation::paragraph(0));
    assert!(matches!(
        comments.create_comment(&document.id, blank_content),
        Err(ServiceError::InvalidComment(CommentError::BlankContent))
    ));

    let blank_author = NewComment::new("text", " ", CommentLocation::paragraph(0));
    assert!(matches!(
        comments.create_comment(&document.id, blank_author),
        Err(ServiceError::InvalidComment(CommentError::BlankAuthor))
    ));

    let long_author = NewComment::new("text", "a".repeat(101), CommentLocation::paragraph(0));
    assert!(matches!(
        comments.create_comment(&document.id, long_author),
        Err(ServiceError::InvalidComment(CommentError::AuthorTooLong(101)))
    ));

    let at_limit = NewComment::new("text", "a".repeat(100), CommentLocation::paragraph(0));
    assert!(comments.create_comment(&document.id, at_limit).is_ok());
}

#[test]
fn block_comments_require_an_existing_block() {
    let (documents, comments) = services();
    let document = documents
        .create_document(
            NewDocument::new("Structured", "Body text")
                .with_blocks(vec![Block::new("intro", "paragraph", "Body text")]),
        )
        .unwrap();

    assert!(comments
        .create_comment(&document.id, comment(CommentLocation::block("intro").unwrap()))
        .is_ok());

    let err = comments
        .create_comment(&document.id, comment(CommentLocation::block("outro").unwrap()))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidLocation(LocationError::BlockNotFound { .. })
    ));
}

#[test]
fn comments_by_author_filters_exactly() {
    let (documents, comments) = services();
    let document = documents
        .create_document(NewDocument::new("Authored", "Hello world"))
        .unwrap();

    comments
        .create_comment(
            &document.id,
            NewComment::new("from alice", "alice", CommentLocation::paragraph(0)),
        )
        .unwrap();
    comments
        .create_comment(
            &document.id,
            NewComment::new("from bob", "bob", CommentLocation::paragraph(0)),
        )
        .unwrap();
    comments
        .create_comment(
            &document.id,
            NewComment::new("alice again", "alice", CommentLocation::paragraph(0)),
        )
        .unwrap();

    let by_alice = comments.comments_by_author(&document.id, "alice").unwrap();
    let contents: Vec<&str> = by_alice.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["from alice", "alice again"]);

    assert!(comments.comments_by_author(&document.id, "carol").unwrap().is_empty());
}

#[test]
fn comments_for_paragraph_matches_paragraph_and_composite_locations() {
    let (documents, comments) = services();
    let document = documents
        .create_document(NewDocument::new("Paragraphs", "Para one.\n\nPara two."))
        .unwrap();

    comments
        .create_comment(
            &document.id,
            NewComment::new("plain", "alice", CommentLocation::paragraph(1)),
        )
        .unwrap();
    comments
        .create_comment(
            &document.id,
            NewComment::new(
                "composite",
                "bob",
                CommentLocation::composite(0, 4, 1, "Para").unwrap(),
            ),
        )
        .unwrap();
    comments
        .create_comment(
            &document.id,
            NewComment::new("anchored", "carol", CommentLocation::anchor("Para").unwrap()),
        )
        .unwrap();

    let in_paragraph = comments.comments_for_paragraph(&document.id, 1).unwrap();
    let contents: Vec<&str> = in_paragraph.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, vec!["plain", "composite"]);

    assert!(comments.comments_for_paragraph(&document.id, 0).unwrap().is_empty());
}

#[test]
fn anchor_comments_match_case_insensitively() {
    let (documents, comments) = services();
    let document = documents
        .create_document(NewDocument::new("Anchored", "Hello World"))
        .unwrap();

    assert!(comments
        .create_comment(&document.id, comment(CommentLocation::anchor("hello w").unwrap()))
        .is_ok());

    let err = comments
        .create_comment(&document.id, comment(CommentLocation::anchor("farewell").unwrap()))
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidLocation(LocationError::AnchorNotFound { .. })
    ));
}
