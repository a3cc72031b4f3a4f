use super::prelude::*;

#[derive(Default)]
pub struct UserQueries;

#[Object]
impl UserQueries {
    /// Display name of the requesting actor.
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        let actor = ctx.actor()?;
        let loader = ctx.data_unchecked::<BackendDataLoader>();
        let user = loader
            .load_one(UserKey(actor.user_id))
            .await
            .map_err(|e| resolution_error("me", &e))?
            .ok_or_else(|| not_found("user", actor.user_id))?;
        Ok(Some(user.name))
    }

    /// Full profile of the requesting actor.
    async fn get_profile(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let actor = ctx.actor()?;
        let loader = ctx.data_unchecked::<BackendDataLoader>();
        let user = loader
            .load_one(UserKey(actor.user_id))
            .await
            .map_err(|e| resolution_error("getProfile", &e))?
            .ok_or_else(|| not_found("user", actor.user_id))?;
        Ok(Some(user.into()))
    }

    /// Page through all users.
    async fn users(
        &self,
        ctx: &Context<'_>,
        pagination: PaginationInput,
    ) -> Result<Option<Vec<User>>> {
        let window = pagination.validate()?;
        let client = ctx.data_unchecked::<Arc<BackendClient>>();
        let users = client
            .list_users(window)
            .await
            .map_err(|e| resolution_error("users", &e))?;
        Ok(Some(users.into_iter().map(User::from).collect()))
    }

    /// Look up a single user.
    async fn get_user_by_id(&self, ctx: &Context<'_>, user_id: ID) -> Result<Option<User>> {
        let id = parse_id(&user_id, "userId")?;
        let loader = ctx.data_unchecked::<BackendDataLoader>();
        let user = loader
            .load_one(UserKey(id))
            .await
            .map_err(|e| resolution_error("getUserById", &e))?
            .ok_or_else(|| not_found("user", id))?;
        Ok(Some(user.into()))
    }
}
