use super::prelude::*;

#[derive(Default)]
pub struct PostMutations;

#[Object]
impl PostMutations {
    /// Create a post on behalf of the requesting actor.
    ///
    /// One POST to the backend; a failure aborts the whole mutation with
    /// no partial acknowledgment.
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        data: PostInput,
    ) -> Result<Option<CreatePostResponse>> {
        let actor = ctx.actor()?;
        if data.title.trim().is_empty() {
            return Err(invalid_argument("title must not be empty"));
        }

        let client = ctx.data_unchecked::<Arc<BackendClient>>();
        let created = client
            .create_post(&NewPost {
                title: data.title,
                body: data.body,
                user_id: actor.user_id,
            })
            .await
            .map_err(|e| resolution_error("createPost", &e))?;

        Ok(Some(CreatePostResponse {
            message: "Post created successfully".to_string(),
            id: ID::from(created.id.to_string()),
        }))
    }
}
