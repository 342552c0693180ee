use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Academic period selection, sent as a query parameter on GET and as a form field on POST.
///
/// # Fields
///
/// * `periodo` - The period as "<year>.<term>", e.g. "2025.1". Passed to SUAP unvalidated.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub(crate) struct PeriodParams {
    pub(crate) periodo: Option<String>,
}
