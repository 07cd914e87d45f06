use aws_sso_schema::credentials::CredentialsRecord;
use tracing::debug;

use crate::error::Result;
use crate::exchange::exchange_for_role_credentials;
use crate::handler::HandleCredentials;
use crate::login::Login;
use crate::profile::load::LoadProfile;
use crate::resolve::TokenResolver;
use crate::sso::SsoPortal;
use crate::token::FindToken;

pub struct AwsSso<L, F, P, G, H> {
    loader: L,
    finder: F,
    portal: P,
    login: G,
    handler: H,
}

impl<L, F, P, G, H> AwsSso<L, F, P, G, H>
where
    L: LoadProfile,
    F: FindToken,
    P: SsoPortal + Send + Sync,
    G: Login + Send + Sync,
    H: HandleCredentials,
{
    pub fn new(loader: L, finder: F, portal: P, login: G, handler: H) -> Self {
        Self {
            loader,
            finder,
            portal,
            login,
            handler,
        }
    }

    /// Looks up the profile, resolves a verified token, exchanges it and hands
    /// the record to the handler. Nothing is handed over on failure.
    pub async fn run(&self, profile_name: &str) -> Result<CredentialsRecord> {
        let profile = self.loader.load_profile(profile_name)?;
        debug!("target profile:{}", profile.name());

        let token = TokenResolver::new(&self.finder, &self.portal, &self.login)
            .resolve(profile.name())
            .await?;

        let record = exchange_for_role_credentials(&self.portal, &token, &profile).await?;
        self.handler.handle_credentials(&record)?;
        Ok(record)
    }
}
