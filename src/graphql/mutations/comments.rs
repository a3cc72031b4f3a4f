use super::prelude::*;

#[derive(Default)]
pub struct CommentMutations;

#[Object]
impl CommentMutations {
    /// Attach a comment to a post on behalf of the requesting actor.
    ///
    /// Returns the backend's created-comment representation; the author
    /// relation resolves from it like any other comment.
    async fn add_comment(
        &self,
        ctx: &Context<'_>,
        post_id: ID,
        text: String,
    ) -> Result<Option<Comment>> {
        let actor = ctx.actor()?;
        let id = parse_id(&post_id, "postId")?;
        if text.trim().is_empty() {
            return Err(invalid_argument("text must not be empty"));
        }

        let client = ctx.data_unchecked::<Arc<BackendClient>>();
        let created = client
            .create_comment(&NewComment {
                post_id: id,
                text,
                user_id: actor.user_id,
            })
            .await
            .map_err(|e| resolution_error("addComment", &e))?;

        Ok(Some(Comment::from(created)))
    }
}
