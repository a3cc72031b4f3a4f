use futures::future;

use super::prelude::*;

#[derive(Default)]
pub struct PostQueries;

#[Object]
impl PostQueries {
    /// All posts known to the backend.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Option<Vec<Post>>> {
        let client = ctx.data_unchecked::<Arc<BackendClient>>();
        let posts = client
            .list_posts()
            .await
            .map_err(|e| resolution_error("posts", &e))?;
        Ok(Some(posts.into_iter().map(Post::from).collect()))
    }

    /// Look up a single post together with its comments.
    ///
    /// The post body and its comment list live on different backend
    /// resources; both are fetched concurrently and merged into one node.
    /// If either fetch fails the whole field fails; a post is never
    /// returned with unknown comment state.
    async fn get_post_by_id(&self, ctx: &Context<'_>, post_id: ID) -> Result<Option<Post>> {
        let id = parse_id(&post_id, "postId")?;
        let loader = ctx.data_unchecked::<BackendDataLoader>();

        let (post, comments) = future::try_join(
            loader.load_one(PostKey(id)),
            loader.load_one(PostCommentsKey(id)),
        )
        .await
        .map_err(|e| resolution_error("getPostById", &e))?;

        let post = post.ok_or_else(|| not_found("post", id))?;
        Ok(Some(Post::with_comments(post, comments.unwrap_or_default())))
    }
}
