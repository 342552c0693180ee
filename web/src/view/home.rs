use super::{escape, page, text};
use domain::Profile;

/// Landing page for visitors without a SUAP token.
pub(crate) fn anonymous() -> String {
    let content = r#"<div class="card">
<h1>Bem-vindo</h1>
<p>Entre com sua conta do SUAP para consultar seus dados e seu boletim.</p>
<p><a class="btn" href="/login">Entrar com o SUAP</a></p>
</div>"#;

    page("Início", false, content)
}

/// Home page with a summary of the logged in student's profile.
pub(crate) fn authenticated(profile: &Profile) -> String {
    let photo = profile
        .url_foto_150x200
        .as_deref()
        .map(|url| format!(r#"<img src="{}" alt="Foto" width="75" height="100">"#, escape(url)))
        .unwrap_or_default();
    let vinculo = profile.vinculo.as_ref();

    let content = format!(
        r#"<div class="card profile">
{photo}
<div>
<h1>Olá, {name}!</h1>
<p>Matrícula: {matricula}<br>E-mail: {email}<br>Vínculo: {tipo_vinculo}</p>
<p>Curso: {curso}<br>Campus: {campus}<br>Situação: {situacao}</p>
</div>
</div>
<p><a class="btn" href="/boletim/">Ver boletim</a></p>"#,
        name = escape(profile.display_name()),
        matricula = text(profile.matricula.as_deref()),
        email = text(profile.email.as_deref()),
        tipo_vinculo = text(profile.tipo_vinculo.as_deref()),
        curso = text(vinculo.and_then(|v| v.curso.as_deref())),
        campus = text(vinculo.and_then(|v| v.campus.as_deref())),
        situacao = text(vinculo.and_then(|v| v.situacao.as_deref())),
    );

    page("Início", true, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Enrollment;

    #[test]
    fn test_authenticated_escapes_profile_values() {
        let profile = Profile {
            nome_usual: Some("<Maria>".to_string()),
            matricula: Some("20231014040001".to_string()),
            vinculo: Some(Enrollment {
                curso: Some("Informática".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let html = authenticated(&profile);
        assert!(html.contains("Olá, &lt;Maria&gt;!"));
        assert!(html.contains("Matrícula: 20231014040001"));
        assert!(html.contains("Curso: Informática"));
        assert!(html.contains("Campus: -"));
    }

    #[test]
    fn test_anonymous_links_to_login() {
        assert!(anonymous().contains(r#"href="/login""#));
    }
}
