use super::{ApiError, Endpoint};
use crate::config::Config;
use crate::model::{decode_collection, Record, RecordId, Team, User, UserPatch, UsersAction};
use async_trait::async_trait;
use serde_json::Value;

/// Raw JSON transport to the REST API.
#[async_trait(?Send)]
pub trait ApiClient {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError>;
    async fn patch_json(&self, url: &str, body: &Value) -> Result<Value, ApiError>;
}

/// Fetches one collection endpoint, unwrapping the optional pagination envelope.
pub async fn fetch_collection<T, C>(client: &C, config: &Config) -> Result<Vec<T>, ApiError>
where
    T: Record,
    C: ApiClient + ?Sized,
{
    let url = config.url(&T::ENDPOINT.path());
    log::info!("Fetching {} from: {}", T::NOUN, url);

    let body = client.get_json(&url).await.map_err(|err| {
        log::error!("Error fetching {}: {}", T::NOUN, err);
        err
    })?;
    log::debug!("{} data received: {}", T::NOUN, body);

    let records = decode_collection(body)?;
    log::debug!("Processed {} {}", records.len(), T::NOUN);
    Ok(records)
}

/// Users plus the teams offered by the edit form.
///
/// A failed team request leaves the team list empty; only the user request
/// can fail the page.
pub async fn load_users_page<C>(client: &C, config: &Config) -> Result<(Vec<User>, Vec<Team>), ApiError>
where
    C: ApiClient + ?Sized,
{
    let (users, teams) = futures::join!(
        fetch_collection::<User, C>(client, config),
        fetch_collection::<Team, C>(client, config)
    );

    let users = users?;
    let teams = teams.unwrap_or_else(|err| {
        log::warn!("Continuing without teams: {}", err);
        Vec::new()
    });
    Ok((users, teams))
}

pub async fn update_user<C>(
    client: &C,
    config: &Config,
    id: RecordId,
    patch: &UserPatch,
) -> Result<User, ApiError>
where
    C: ApiClient + ?Sized,
{
    let url = config.url(&Endpoint::User(id).path());
    let body = serde_json::to_value(patch).map_err(|err| ApiError::Decode(err.to_string()))?;
    log::info!("Updating user at: {}", url);
    log::debug!("Update payload: {}", body);

    let response = client.patch_json(&url, &body).await?;
    let user: User =
        serde_json::from_value(response).map_err(|err| ApiError::Decode(err.to_string()))?;
    log::info!("User {} updated successfully", user.id);
    Ok(user)
}

/// Runs the save request of the edit form and turns its outcome into the
/// action that completes the workflow.
pub async fn submit_edit<C>(client: &C, config: &Config, id: RecordId, patch: UserPatch) -> UsersAction
where
    C: ApiClient + ?Sized,
{
    match update_user(client, config, id, &patch).await {
        Ok(user) => UsersAction::SaveSucceeded(user),
        Err(err) => {
            log::error!("Error updating user: {}", err);
            UsersAction::SaveFailed(err.message())
        }
    }
}
