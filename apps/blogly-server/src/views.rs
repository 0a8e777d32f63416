//! Server-rendered HTML views.

use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse};
use tera::{Context, Tera};

use crate::flash;
use crate::middleware::error::{AppError, AppResult};

/// The compiled template set.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Compile every `.html` template below `dir`.
    pub fn load(dir: &str) -> Result<Self, tera::Error> {
        let pattern = format!("{}/**/*.html", dir.trim_end_matches('/'));
        let tera = Tera::new(&pattern)?;
        tracing::debug!(
            templates = tera.get_template_names().count(),
            "Templates loaded from {}",
            dir
        );
        Ok(Self { tera })
    }

    /// Render `template` as a 200 page, consuming any pending flash message.
    pub fn render(
        &self,
        req: &HttpRequest,
        template: &str,
        mut ctx: Context,
    ) -> AppResult<HttpResponse> {
        let flash = flash::take(req);
        if let Some(flash) = &flash {
            ctx.insert("flash", flash);
        }

        let body = self
            .tera
            .render(template, &ctx)
            .map_err(|e| AppError::Internal(format!("rendering {template} failed: {e:?}")))?;

        let mut res = HttpResponse::Ok();
        if flash.is_some() {
            res.cookie(flash::removal_cookie());
        }
        Ok(res.content_type(ContentType::html()).body(body))
    }
}
