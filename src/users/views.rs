use crate::flash::Flash;
use crate::users::form::FormErrors;
use axum::response::Html;

/// Escape a user-supplied value for interpolation into HTML.
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="utf-8">
    <title>{title} — Portail</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    ))
}

fn field_error(error: Option<&String>) -> String {
    match error {
        Some(msg) => format!(r#"    <p class="error">{}</p>
"#, escape_html(msg)),
        None => String::new(),
    }
}

/// Registration form. On re-render the submitted email is retained and
/// escaped; password inputs are never pre-filled.
pub fn register_page(email: &str, errors: &FormErrors) -> Html<String> {
    let body = format!(
        r#"    <h1>Inscription</h1>
    <form method="post" action="/inscription">
    <label for="email">Adresse e-mail</label>
    <input type="email" id="email" name="email" value="{email}">
{email_error}    <label for="password">Mot de passe</label>
    <input type="password" id="password" name="password">
{password_error}    <label for="confirm_password">Confirmation du mot de passe</label>
    <input type="password" id="confirm_password" name="confirm_password">
{confirm_error}    <button type="submit">S'inscrire</button>
    </form>
    <p><a href="/connexion">Déjà inscrit ? Se connecter</a></p>"#,
        email = escape_html(email),
        email_error = field_error(errors.email.as_ref()),
        password_error = field_error(errors.password.as_ref()),
        confirm_error = field_error(errors.confirm_password.as_ref()),
    );
    layout("Inscription", &body)
}

/// Flash notice markup, empty when there is nothing to show.
pub(crate) fn notice_html(notice: Option<&Flash>) -> String {
    match notice {
        Some(f) => format!(
            r#"    <div class="alert alert-{category}">{message}</div>
"#,
            category = escape_html(&f.category),
            message = escape_html(&f.message),
        ),
        None => String::new(),
    }
}

/// Login page; renders the queued flash notice, if any, above the heading.
pub fn login_page(notice: Option<&Flash>) -> Html<String> {
    let flash_html = notice_html(notice);
    let body = format!(
        r#"{flash_html}    <h1>Connexion</h1>
    <p><a href="/inscription">Pas encore de compte ? S'inscrire</a></p>"#
    );
    layout("Connexion", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>"a" & 'b'</script>"#),
            "&lt;script&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("jean@example.com"), "jean@example.com");
    }

    #[test]
    fn register_page_retains_and_escapes_email() {
        let Html(body) = register_page(r#""><script>"#, &FormErrors::default());
        assert!(!body.contains("<script>"));
        assert!(body.contains("&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn register_page_shows_field_errors() {
        let errors = FormErrors {
            confirm_password: Some("Les mots de passe ne correspondent pas".into()),
            ..FormErrors::default()
        };
        let Html(body) = register_page("jean@example.com", &errors);
        assert!(body.contains("Les mots de passe ne correspondent pas"));
        assert!(body.contains(r#"value="jean@example.com""#));
    }

    #[test]
    fn register_page_never_prefills_passwords() {
        let Html(body) = register_page("jean@example.com", &FormErrors::default());
        for line in body.lines() {
            if line.contains(r#"type="password""#) {
                assert!(!line.contains("value="));
            }
        }
    }

    #[test]
    fn login_page_renders_flash_notice() {
        let notice = Flash::success("Vous êtes inscrit avec succès");
        let Html(body) = login_page(Some(&notice));
        assert!(body.contains("alert-success"));
        assert!(body.contains("Vous êtes inscrit avec succès"));

        let Html(without) = login_page(None);
        assert!(!without.contains("alert"));
    }
}
