//! SUAP REST API resources.
//!
//! Typed views of the `minhas-informacoes` endpoints. Unknown fields are ignored and most
//! fields are optional because SUAP omits or nulls them depending on the student's bond.

use crate::academic_period::AcademicPeriod;
use crate::error::Error;
use log::*;
use serde::{Deserialize, Serialize};
use suap_auth::ResourceClient;

/// Personal data of the logged in user.
pub const PROFILE_PATH: &str = "v2/minhas-informacoes/meus-dados/";
/// Academic periods the student was enrolled in.
pub const PERIODS_PATH: &str = "v2/minhas-informacoes/meus-periodos-letivos/";
const REPORT_CARD_PATH: &str = "v2/minhas-informacoes/boletim/";

/// Student enrollment details nested in the profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(default)]
    pub matricula: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub curso: Option<String>,
    #[serde(default)]
    pub campus: Option<String>,
    #[serde(default)]
    pub situacao: Option<String>,
}

/// Response of `meus-dados`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub matricula: Option<String>,
    #[serde(default)]
    pub nome_usual: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub url_foto_150x200: Option<String>,
    #[serde(default)]
    pub tipo_vinculo: Option<String>,
    #[serde(default)]
    pub vinculo: Option<Enrollment>,
}

impl Profile {
    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.nome_usual
            .as_deref()
            .or(self.vinculo.as_ref().and_then(|v| v.nome.as_deref()))
            .unwrap_or("Estudante")
    }
}

/// Grade and absences for one assessment stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageGrade {
    #[serde(default)]
    pub nota: Option<f64>,
    #[serde(default)]
    pub faltas: Option<i64>,
}

/// One subject in the report card (`boletim`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportCardEntry {
    #[serde(default)]
    pub codigo_diario: Option<String>,
    #[serde(default)]
    pub disciplina: Option<String>,
    #[serde(default)]
    pub carga_horaria: Option<f64>,
    #[serde(default)]
    pub carga_horaria_cumprida: Option<f64>,
    #[serde(default)]
    pub numero_faltas: Option<i64>,
    #[serde(default)]
    pub percentual_carga_horaria_frequentada: Option<f64>,
    #[serde(default)]
    pub situacao: Option<String>,
    #[serde(default)]
    pub nota_etapa_1: Option<StageGrade>,
    #[serde(default)]
    pub nota_etapa_2: Option<StageGrade>,
    #[serde(default)]
    pub nota_etapa_3: Option<StageGrade>,
    #[serde(default)]
    pub nota_etapa_4: Option<StageGrade>,
    #[serde(default)]
    pub media_disciplina: Option<f64>,
    #[serde(default)]
    pub media_final_disciplina: Option<f64>,
}

impl ReportCardEntry {
    /// Stage grades in order, `None` where SUAP sent nothing.
    pub fn stage_grades(&self) -> [Option<f64>; 4] {
        [
            &self.nota_etapa_1,
            &self.nota_etapa_2,
            &self.nota_etapa_3,
            &self.nota_etapa_4,
        ]
        .map(|stage| stage.as_ref().and_then(|s| s.nota))
    }
}

/// Entry of `meus-periodos-letivos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub ano_letivo: i64,
    pub periodo_letivo: i64,
}

impl Period {
    /// Selector value for this period, e.g. "2025.1".
    pub fn selector(&self) -> String {
        format!("{}.{}", self.ano_letivo, self.periodo_letivo)
    }
}

/// Resource path of the report card for `period`.
pub fn report_card_path(period: &AcademicPeriod) -> String {
    format!("{}{}", REPORT_CARD_PATH, period.resource_segment())
}

pub async fn profile(api: &ResourceClient<'_>) -> Result<Profile, Error> {
    Ok(api
        .get::<Profile>(PROFILE_PATH)
        .await
        .inspect_err(|e| warn!("Failed to fetch SUAP profile: {}", e))?)
}

pub async fn report_card(
    api: &ResourceClient<'_>,
    period: &AcademicPeriod,
) -> Result<Vec<ReportCardEntry>, Error> {
    Ok(api
        .get::<Vec<ReportCardEntry>>(&report_card_path(period))
        .await
        .inspect_err(|e| warn!("Failed to fetch SUAP report card for {}: {}", period, e))?)
}

pub async fn periods(api: &ResourceClient<'_>) -> Result<Vec<Period>, Error> {
    Ok(api
        .get::<Vec<Period>>(PERIODS_PATH)
        .await
        .inspect_err(|e| warn!("Failed to fetch SUAP academic periods: {}", e))?)
}
