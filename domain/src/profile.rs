use crate::error::Error;
use crate::gateway::suap::{self, Profile};
use log::*;
use suap_auth::ResourceClient;

/// Profile of the user whose token backs `api`.
pub async fn find(api: &ResourceClient<'_>) -> Result<Profile, Error> {
    let profile = suap::profile(api).await?;
    trace!(
        "Loaded SUAP profile for matricula {:?}",
        profile.matricula.as_deref()
    );
    Ok(profile)
}
