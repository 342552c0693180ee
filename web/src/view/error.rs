use super::escape;

/// Shown when a SUAP call fails after login.
pub(crate) fn page(message: &str) -> String {
    let content = format!(
        r#"<div class="card error">
<h1>Não foi possível carregar os dados</h1>
<p>{}</p>
<p>Tente novamente em instantes ou <a href="/logout">saia</a> e entre outra vez.</p>
</div>"#,
        escape(message)
    );

    super::page("Erro", true, &content)
}
