//! Bearer-authenticated calls to the SUAP API.

use log::*;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::error::{
    api_error, token_error, ApiErrorKind, Error, ErrorKind, TokenErrorKind,
};
use crate::oauth::token::TokenSource;
use crate::oauth::Client;

/// Resource client bound to a token source.
///
/// The token is resolved from the source on every call, never cached here.
pub struct ResourceClient<'a> {
    client: &'a Client,
    token_source: Box<dyn TokenSource + 'a>,
}

impl<'a> ResourceClient<'a> {
    pub(crate) fn new(client: &'a Client, token_source: Box<dyn TokenSource + 'a>) -> Self {
        Self {
            client,
            token_source,
        }
    }

    /// GET `api_base_url + resource_path` and decode the JSON body.
    ///
    /// Fails with `Token(NotFound)` before touching the network when no token is
    /// available and with `Api(Status(_))` when SUAP answers with a non-success status.
    pub async fn get<R>(&self, resource_path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let token = self.token_source.token().ok_or_else(|| {
            token_error(TokenErrorKind::NotFound, "no SUAP token in the current session")
        })?;

        let url = self.client.resource_url(resource_path);
        debug!("GET {}", url);

        let response = self
            .client
            .http_client()
            .get(&url)
            .bearer_auth(token.access_token())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|e| warn!("Failed to call SUAP resource {}: {:?}", url, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("SUAP resource {} returned {}: {}", url, status, error_text);
            return Err(api_error(
                ApiErrorKind::Status(status.as_u16()),
                &format!("{} returned {}", resource_path, status.as_u16()),
            ));
        }

        response.json::<R>().await.map_err(|e| {
            warn!("Failed to parse SUAP resource {}: {:?}", url, e);
            Error {
                source: Some(Box::new(e)),
                error_kind: ErrorKind::Api(ApiErrorKind::InvalidResponse),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oauth::client::tests::settings;
    use crate::oauth::token::TokenBundle;
    use mockito::{Matcher, Server};
    use serde_json::Value;

    #[tokio::test]
    async fn test_get_attaches_bearer_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v2/minhas-informacoes/meus-dados/")
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"matricula":"20231014040001"}"#)
            .create_async()
            .await;

        let client = Client::new(settings(&server.url()), reqwest::Client::new());
        let api = client.resource(|| Some(TokenBundle::bearer("tok")));
        let body: Value = api.get("v2/minhas-informacoes/meus-dados/").await.unwrap();

        mock.assert_async().await;
        assert_eq!(body["matricula"], "20231014040001");
    }

    #[tokio::test]
    async fn test_get_without_token_makes_no_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = Client::new(settings(&server.url()), reqwest::Client::new());
        let api = client.resource(|| None::<TokenBundle>);
        let err = api.get::<Value>("v2/minhas-informacoes/meus-dados/").await.unwrap_err();

        mock.assert_async().await;
        assert!(err.is_missing_token());
    }

    #[tokio::test]
    async fn test_get_absolute_url_stays_under_api_base() {
        let server = Server::new_async().await;
        let mut other = Server::new_async().await;
        let foreign = other
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = Client::new(settings(&server.url()), reqwest::Client::new());
        let api = client.resource(|| Some(TokenBundle::bearer("tok")));
        let err = api
            .get::<Value>(&format!("{}/steal", other.url()))
            .await
            .unwrap_err();

        foreign.assert_async().await;
        assert!(matches!(err.error_kind, ErrorKind::Api(ApiErrorKind::Status(_))));
    }

    #[tokio::test]
    async fn test_get_non_success_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v2/minhas-informacoes/boletim/2025/9/")
            .with_status(404)
            .with_body("Not found")
            .create_async()
            .await;

        let client = Client::new(settings(&server.url()), reqwest::Client::new());
        let api = client.resource(|| Some(TokenBundle::bearer("tok")));
        let err = api
            .get::<Value>("v2/minhas-informacoes/boletim/2025/9/")
            .await
            .unwrap_err();

        assert_eq!(err.error_kind, ErrorKind::Api(ApiErrorKind::Status(404)));
    }

    #[tokio::test]
    async fn test_get_invalid_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v2/minhas-informacoes/meus-periodos-letivos/")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = Client::new(settings(&server.url()), reqwest::Client::new());
        let api = client.resource(|| Some(TokenBundle::bearer("tok")));
        let err = api
            .get::<Value>("v2/minhas-informacoes/meus-periodos-letivos/")
            .await
            .unwrap_err();

        assert_eq!(err.error_kind, ErrorKind::Api(ApiErrorKind::InvalidResponse));
    }
}
