//! Server-side HTML rendering.
//!
//! Templates are compiled into the binary and parsed once on first use. Handlers build one of
//! the serializable contexts from [`context`] and pass it to [`render`].

pub mod context;

use std::sync::LazyLock;

use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

use crate::server::{error::Error, util::locale};

static TEMPLATES: LazyLock<Result<Tera, tera::Error>> = LazyLock::new(|| {
    let mut tera = Tera::default();

    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../../templates/base.html")),
        ("main/index.html", include_str!("../../../templates/main/index.html")),
        (
            "branches/index.html",
            include_str!("../../../templates/branches/index.html"),
        ),
        (
            "branches/macros.html",
            include_str!("../../../templates/branches/macros.html"),
        ),
        (
            "branches/form.html",
            include_str!("../../../templates/branches/form.html"),
        ),
        (
            "branches/detail.html",
            include_str!("../../../templates/branches/detail.html"),
        ),
        (
            "accounts/login.html",
            include_str!("../../../templates/accounts/login.html"),
        ),
        ("admin/base.html", include_str!("../../../templates/admin/base.html")),
        (
            "admin/macros.html",
            include_str!("../../../templates/admin/macros.html"),
        ),
        ("admin/index.html", include_str!("../../../templates/admin/index.html")),
        (
            "admin/user_list.html",
            include_str!("../../../templates/admin/user_list.html"),
        ),
        (
            "admin/user_form.html",
            include_str!("../../../templates/admin/user_form.html"),
        ),
        (
            "admin/user_detail.html",
            include_str!("../../../templates/admin/user_detail.html"),
        ),
        (
            "admin/branch_list.html",
            include_str!("../../../templates/admin/branch_list.html"),
        ),
        (
            "admin/branch_detail.html",
            include_str!("../../../templates/admin/branch_detail.html"),
        ),
    ])?;

    Ok(tera)
});

/// Render `template` with the serialized fields of `context` and the page `language`.
///
/// # Returns
/// - `Ok(Html<String>)` - Rendered page
/// - `Err(Error::TemplateError)` - Context could not be serialized or the template failed
/// - `Err(Error::InternalError)` - Bundled templates failed to parse
pub fn render<T: Serialize>(template: &str, context: &T) -> Result<Html<String>, Error> {
    let tera = TEMPLATES
        .as_ref()
        .map_err(|e| Error::InternalError(format!("Failed to parse templates: {e}")))?;

    let mut context = Context::from_serialize(context)?;
    context.insert("language", locale::language());

    Ok(Html(tera.render(template, &context)?))
}
