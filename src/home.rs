use crate::flash;
use crate::users::views;
use axum::{
    http::{header, HeaderMap},
    response::{AppendHeaders, Html, IntoResponse, Response},
};

/// `GET /` — home page. Like every rendered page it drains a queued flash
/// notice; a bare request stays side-effect free and cacheable.
pub async fn home(headers: HeaderMap) -> Response {
    let notice = flash::take(&headers);
    let page = Html(format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="utf-8">
    <title>Accueil — Portail</title>
</head>
<body>
{notice_html}    <h1>Bienvenue sur le portail</h1>
    <p><a href="/inscription">Créer un compte</a></p>
    <p><a href="/connexion">Se connecter</a></p>
</body>
</html>
"#,
        notice_html = views::notice_html(notice.as_ref()),
    ));
    if flash::cookie_present(&headers) {
        (
            AppendHeaders([(header::SET_COOKIE, flash::clear_cookie())]),
            page,
        )
            .into_response()
    } else {
        page.into_response()
    }
}
