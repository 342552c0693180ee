//! Report card (`boletim`) for one academic period.

use crate::academic_period::AcademicPeriod;
use crate::error::Error;
use crate::gateway::suap::{self, Period, Profile, ReportCardEntry};
use log::*;
use suap_auth::ResourceClient;

/// Everything the report card page shows.
#[derive(Debug, Clone)]
pub struct ReportCard {
    pub profile: Profile,
    pub period: AcademicPeriod,
    pub entries: Vec<ReportCardEntry>,
    pub periods: Vec<Period>,
}

impl ReportCard {
    /// Selector values of the periods to offer, keeping the selected one even when SUAP
    /// does not list it.
    pub fn period_options(&self) -> Vec<String> {
        let selected = self.period.to_string();
        let mut options: Vec<String> = self.periods.iter().map(Period::selector).collect();
        if !options.contains(&selected) {
            options.insert(0, selected);
        }
        options
    }
}

/// Fetch profile, report card entries and enrolled periods for `period`.
pub async fn find(api: &ResourceClient<'_>, period: AcademicPeriod) -> Result<ReportCard, Error> {
    debug!("Loading report card for period {}", period);

    let profile = suap::profile(api).await?;
    let entries = suap::report_card(api, &period).await?;
    let periods = suap::periods(api).await?;

    Ok(ReportCard {
        profile,
        period,
        entries,
        periods,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, ExternalErrorKind};
    use mockito::{Matcher, Mock, Server, ServerGuard};
    use secrecy::SecretString;
    use suap_auth::{Client, ClientSettings, TokenBundle};

    fn client(server: &ServerGuard) -> Client {
        Client::new(
            ClientSettings {
                client_id: "client-123".to_string(),
                client_secret: SecretString::new("shh".to_string()),
                authorize_url: format!("{}/o/authorize/", server.url()),
                token_url: format!("{}/o/token/", server.url()),
                api_base_url: format!("{}/api/", server.url()),
                scope: "identificacao email".to_string(),
            },
            reqwest::Client::new(),
        )
    }

    async fn mock_profile_and_periods(server: &mut ServerGuard) -> (Mock, Mock) {
        let profile = server
            .mock("GET", "/api/v2/minhas-informacoes/meus-dados/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"matricula":"20231014040001","nome_usual":"Maria Silva"}"#)
            .create_async()
            .await;
        let periods = server
            .mock("GET", "/api/v2/minhas-informacoes/meus-periodos-letivos/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"ano_letivo":2024,"periodo_letivo":2},{"ano_letivo":2025,"periodo_letivo":1}]"#,
            )
            .create_async()
            .await;
        (profile, periods)
    }

    #[tokio::test]
    async fn test_find_requests_transcript_for_selected_period() {
        let mut server = Server::new_async().await;
        let _mocks = mock_profile_and_periods(&mut server).await;
        let transcript = server
            .mock("GET", "/api/v2/minhas-informacoes/boletim/2025/1/")
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"disciplina":"Programação","media_final_disciplina":82}]"#)
            .create_async()
            .await;

        let client = client(&server);
        let api = client.resource(|| Some(TokenBundle::bearer("tok")));
        let report_card = find(&api, AcademicPeriod::from("2025.1")).await.unwrap();

        transcript.assert_async().await;
        assert_eq!(report_card.profile.display_name(), "Maria Silva");
        assert_eq!(report_card.entries.len(), 1);
        assert_eq!(report_card.period_options(), vec!["2024.2", "2025.1"]);
    }

    #[tokio::test]
    async fn test_find_without_token_calls_nothing() {
        let mut server = Server::new_async().await;
        let any = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = client(&server);
        let api = client.resource(|| None::<TokenBundle>);
        let err = find(&api, AcademicPeriod::from("2025.1")).await.unwrap_err();

        any.assert_async().await;
        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Unauthorized)
        );
    }

    #[tokio::test]
    async fn test_malformed_period_fails_downstream() {
        let mut server = Server::new_async().await;
        let _mocks = mock_profile_and_periods(&mut server).await;
        let _transcript = server
            .mock("GET", "/api/v2/minhas-informacoes/boletim/2025//")
            .with_status(404)
            .create_async()
            .await;

        let client = client(&server);
        let api = client.resource(|| Some(TokenBundle::bearer("tok")));
        let err = find(&api, AcademicPeriod::from("2025")).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::RemoteApi(404))
        );
    }

    #[test]
    fn test_period_options_keep_unlisted_selection_first() {
        let report_card = ReportCard {
            profile: Profile::default(),
            period: AcademicPeriod::from("2019.1"),
            entries: vec![],
            periods: vec![Period {
                ano_letivo: 2025,
                periodo_letivo: 1,
            }],
        };
        assert_eq!(report_card.period_options(), vec!["2019.1", "2025.1"]);
    }
}
