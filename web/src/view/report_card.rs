use super::{escape, number, page, text};
use domain::report_card::ReportCard;
use domain::ReportCardEntry;

/// Report card page: profile header, period selector and one table row per subject.
pub(crate) fn page_for(report_card: &ReportCard) -> String {
    let selected = report_card.period.to_string();
    let options: String = report_card
        .period_options()
        .iter()
        .map(|option| {
            let marker = if *option == selected { " selected" } else { "" };
            format!(
                r#"<option value="{value}"{marker}>{value}</option>"#,
                value = escape(option)
            )
        })
        .collect();

    let rows: String = if report_card.entries.is_empty() {
        r#"<tr><td colspan="10">Nenhuma disciplina encontrada para este período.</td></tr>"#
            .to_string()
    } else {
        report_card.entries.iter().map(row).collect()
    };

    let content = format!(
        r#"<div class="card">
<h1>Boletim de {name}</h1>
<p>Matrícula: {matricula} · Período letivo: {period}</p>
<form method="post" action="/boletim/">
<label for="periodo">Período</label>
<select id="periodo" name="periodo">{options}</select>
<button class="btn" type="submit">Consultar</button>
</form>
</div>
<div class="card">
<table>
<thead><tr>
<th>Diário</th><th>Disciplina</th><th class="num">C.H.</th>
<th class="num">N1</th><th class="num">N2</th><th class="num">N3</th><th class="num">N4</th>
<th class="num">Faltas</th><th class="num">Frequência</th><th>Situação / MFD</th>
</tr></thead>
<tbody>
{rows}
</tbody>
</table>
</div>"#,
        name = escape(report_card.profile.display_name()),
        matricula = text(report_card.profile.matricula.as_deref()),
        period = escape(&selected),
    );

    page("Boletim", true, &content)
}

fn row(entry: &ReportCardEntry) -> String {
    let stages: String = entry
        .stage_grades()
        .iter()
        .map(|grade| format!(r#"<td class="num">{}</td>"#, number(*grade)))
        .collect();

    format!(
        r#"<tr><td>{diario}</td><td>{disciplina}</td><td class="num">{carga}</td>{stages}<td class="num">{faltas}</td><td class="num">{frequencia}</td><td>{situacao} / {media}</td></tr>
"#,
        diario = text(entry.codigo_diario.as_deref()),
        disciplina = text(entry.disciplina.as_deref()),
        carga = number(entry.carga_horaria),
        faltas = entry
            .numero_faltas
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string()),
        frequencia = entry
            .percentual_carga_horaria_frequentada
            .map(|pct| format!("{}%", number(Some(pct))))
            .unwrap_or_else(|| "-".to_string()),
        situacao = text(entry.situacao.as_deref()),
        media = number(entry.media_final_disciplina),
    )
}
