//! Wire entities and joined composites
//!
//! The upstream API speaks camelCase JSON with integer identifiers. Decoding
//! is strict: a body with missing or unknown fields is rejected at decode
//! time instead of being accepted as a partial structure.
//!
//! Entities are never mutated after decode; the join steps build new
//! composite values around them.

use serde::{Deserialize, Serialize};

/// A post as returned by `GET /api/posts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub body: String,
}

/// A comment as returned by `GET /api/posts/{id}/comments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub body: String,
}

/// An author as returned by `GET /api/authors/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

/// A comment plus its resolved author
///
/// The author is `None` until resolution has run, and stays `None` for an
/// identifier the resolution map does not contain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithAuthor {
    pub comment: Comment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl CommentWithAuthor {
    /// Wrap a comment with its author not yet resolved
    pub fn unresolved(comment: Comment) -> Self {
        Self {
            comment,
            author: None,
        }
    }
}

/// A post plus its resolved author and its comments, in server order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostWithComments {
    pub post: Post,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    pub comments: Vec<CommentWithAuthor>,
}

impl PostWithComments {
    /// Pair a post with its comments, authors not yet resolved
    pub fn unresolved(post: Post, comments: Vec<Comment>) -> Self {
        Self {
            post,
            author: None,
            comments: comments.into_iter().map(CommentWithAuthor::unresolved).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_post() {
        let post: Post = serde_json::from_str(
            r#"{"id":1,"authorId":10,"title":"hello","body":"world"}"#,
        )
        .unwrap();
        assert_eq!(post.id, 1);
        assert_eq!(post.author_id, 10);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: std::result::Result<Author, _> =
            serde_json::from_str(r#"{"id":10,"name":"A","email":"a@example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_fields() {
        let result: std::result::Result<Comment, _> =
            serde_json::from_str(r#"{"id":100,"postId":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn absent_author_is_not_serialized() {
        let comment = CommentWithAuthor::unresolved(Comment {
            id: 100,
            post_id: 1,
            author_id: 10,
            body: "hi".to_string(),
        });
        let json = serde_json::to_value(&comment).unwrap();
        assert!(json.get("author").is_none());
    }
}
