//! Feed aggregation pipeline
//!
//! Assembles the denormalized feed in four stages, each completing fully
//! before the next starts:
//!
//! 1. fan out one comment fetch per post, join into post+comments pairs
//! 2. reduce the pairs to the set of distinct author ids they reference
//! 3. fan out one author fetch per distinct id, join into an id -> author map
//! 4. attach authors to every post and comment by map lookup
//!
//! Both fan-outs are unbounded: N posts put N comment fetches in flight at
//! once, then M distinct authors put M fetches in flight. Large datasets can
//! exhaust sockets; there is no cap.

use std::collections::{HashMap, HashSet};

use futures::future::try_join_all;
use tracing::info;

use crate::client::ApiClient;
use crate::error::{ApiError, Result};
use crate::models::{Author, CommentWithAuthor, Post, PostWithComments};

/// Aggregation service over the typed API client
pub struct FeedService {
    client: ApiClient,
}

impl FeedService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Run the full pipeline and return the denormalized feed
    pub async fn build_feed(&self) -> Result<Vec<PostWithComments>> {
        let posts = self.client.list_posts().await?;
        info!(posts = posts.len(), "posts fetched");

        let joined = self.posts_with_comments(posts).await?;

        let author_ids = referenced_author_ids(&joined);
        info!(authors = author_ids.len(), "distinct authors referenced");

        let authors = self.resolve_authors(author_ids).await?;

        Ok(attach_authors(joined, &authors))
    }

    /// Fetch every post's comments concurrently and pair them up
    ///
    /// Output order matches input order, and each comment list keeps the
    /// server-returned order. The first failed fetch fails the whole batch;
    /// no partial result is returned and still-pending sibling fetches are
    /// dropped unobserved.
    pub async fn posts_with_comments(&self, posts: Vec<Post>) -> Result<Vec<PostWithComments>> {
        let fetches = posts.into_iter().map(|post| async move {
            let comments = self.client.list_comments(post.id).await?;
            Ok::<_, ApiError>(PostWithComments::unresolved(post, comments))
        });

        try_join_all(fetches).await
    }

    /// Fetch each distinct author exactly once, concurrently
    ///
    /// Same full-barrier, first-failure-fails-the-batch policy as the
    /// comment join. Returns one map entry per requested id.
    pub async fn resolve_authors(&self, author_ids: HashSet<i64>) -> Result<HashMap<i64, Author>> {
        let fetches = author_ids.into_iter().map(|author_id| async move {
            let author = self.client.get_author(author_id).await?;
            Ok::<_, ApiError>((author_id, author))
        });

        let resolved = try_join_all(fetches).await?;
        Ok(resolved.into_iter().collect())
    }
}

/// Collect the distinct author ids referenced by any post or comment
///
/// Pure reduction over the joined pairs; performs no I/O.
pub fn referenced_author_ids(posts: &[PostWithComments]) -> HashSet<i64> {
    posts
        .iter()
        .flat_map(|joined| {
            std::iter::once(joined.post.author_id)
                .chain(joined.comments.iter().map(|c| c.comment.author_id))
        })
        .collect()
}

/// Attach resolved authors to every post and comment by id lookup
///
/// Total and side-effect-free: an id missing from the map leaves that author
/// absent instead of failing.
pub fn attach_authors(
    posts: Vec<PostWithComments>,
    authors: &HashMap<i64, Author>,
) -> Vec<PostWithComments> {
    posts
        .into_iter()
        .map(|joined| PostWithComments {
            author: authors.get(&joined.post.author_id).cloned(),
            comments: joined
                .comments
                .into_iter()
                .map(|c| CommentWithAuthor {
                    author: authors.get(&c.comment.author_id).cloned(),
                    comment: c.comment,
                })
                .collect(),
            post: joined.post,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Comment;

    fn post(id: i64, author_id: i64) -> Post {
        Post {
            id,
            author_id,
            title: format!("post {}", id),
            body: String::new(),
        }
    }

    fn comment(id: i64, post_id: i64, author_id: i64) -> Comment {
        Comment {
            id,
            post_id,
            author_id,
            body: String::new(),
        }
    }

    fn author(id: i64, name: &str) -> Author {
        Author {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn collects_distinct_ids_across_posts_and_comments() {
        let joined = vec![
            PostWithComments::unresolved(
                post(1, 10),
                vec![comment(100, 1, 10), comment(101, 1, 11)],
            ),
            PostWithComments::unresolved(post(2, 11), vec![comment(102, 2, 12)]),
        ];

        let ids = referenced_author_ids(&joined);
        assert_eq!(ids, HashSet::from([10, 11, 12]));
    }

    #[test]
    fn collects_post_author_when_post_has_no_comments() {
        let joined = vec![PostWithComments::unresolved(post(1, 42), vec![])];
        assert_eq!(referenced_author_ids(&joined), HashSet::from([42]));
    }

    #[test]
    fn attaches_authors_to_posts_and_comments() {
        let joined = vec![PostWithComments::unresolved(
            post(1, 10),
            vec![comment(100, 1, 11)],
        )];
        let authors = HashMap::from([(10, author(10, "A")), (11, author(11, "B"))]);

        let enriched = attach_authors(joined, &authors);

        assert_eq!(enriched[0].author, Some(author(10, "A")));
        assert_eq!(enriched[0].comments[0].author, Some(author(11, "B")));
    }

    #[test]
    fn missing_author_stays_absent_instead_of_failing() {
        let joined = vec![PostWithComments::unresolved(
            post(1, 10),
            vec![comment(100, 1, 99)],
        )];
        let authors = HashMap::from([(10, author(10, "A"))]);

        let enriched = attach_authors(joined, &authors);

        assert_eq!(enriched[0].author, Some(author(10, "A")));
        assert_eq!(enriched[0].comments[0].author, None);
    }

    #[test]
    fn attach_preserves_post_and_comment_order() {
        let joined = vec![
            PostWithComments::unresolved(
                post(2, 10),
                vec![comment(200, 2, 10), comment(201, 2, 10)],
            ),
            PostWithComments::unresolved(post(1, 10), vec![]),
        ];
        let authors = HashMap::from([(10, author(10, "A"))]);

        let enriched = attach_authors(joined, &authors);

        assert_eq!(enriched[0].post.id, 2);
        assert_eq!(enriched[1].post.id, 1);
        assert_eq!(enriched[0].comments[0].comment.id, 200);
        assert_eq!(enriched[0].comments[1].comment.id, 201);
    }
}
