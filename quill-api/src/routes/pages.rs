/// Server-rendered pages
///
/// The page templates are compiled into the binary; rendering has no inputs
/// and cannot fail.

use axum::response::Html;

/// Fixed HTML pages served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Landing page (`GET /`)
    Home,

    /// Administration page (`GET /admin`)
    Admin,
}

impl Template {
    /// Template file name
    pub fn name(self) -> &'static str {
        match self {
            Template::Home => "home.html",
            Template::Admin => "admin.html",
        }
    }

    /// Renders the page
    pub fn render(self) -> Html<&'static str> {
        Html(match self {
            Template::Home => include_str!("../../templates/home.html"),
            Template::Admin => include_str!("../../templates/admin.html"),
        })
    }
}

/// `GET /`
pub async fn home() -> Html<&'static str> {
    Template::Home.render()
}

/// `GET /admin`
pub async fn admin() -> Html<&'static str> {
    Template::Admin.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_render_html() {
        for template in [Template::Home, Template::Admin] {
            let Html(body) = template.render();
            assert!(body.contains("<html"), "{} is not HTML", template.name());
        }
    }
}
