use handlebars::Handlebars;
use serde::Serialize;

use crate::error::Result;

/// Template name and the `page` key the navigation highlights for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Index,
    Count,
    Names,
    SpareParts,
}

impl Page {
    pub fn template(self) -> &'static str {
        match self {
            Page::Index => "index",
            Page::Count => "count",
            Page::Names => "names",
            Page::SpareParts => "spare_parts",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Page::Index => "index",
            Page::Count => "product_count",
            Page::Names => "product_names",
            Page::SpareParts => "product_spare_parts",
        }
    }
}

#[derive(Serialize)]
struct PageContext<'a, T: Serialize> {
    page: &'static str,
    #[serde(flatten)]
    view: &'a T,
}

#[derive(Serialize)]
struct Empty {}

/// Compiled HTML templates, embedded at build time.
pub struct Pages {
    registry: Handlebars<'static>,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_partial("header", include_str!("../../templates/partials/header.hbs"))?;
        registry.register_partial("footer", include_str!("../../templates/partials/footer.hbs"))?;
        registry.register_template_string("index", include_str!("../../templates/index.hbs"))?;
        registry.register_template_string("count", include_str!("../../templates/count.hbs"))?;
        registry.register_template_string("names", include_str!("../../templates/names.hbs"))?;
        registry.register_template_string(
            "spare_parts",
            include_str!("../../templates/spare_parts.hbs"),
        )?;
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, page: Page, view: &T) -> Result<String> {
        let context = PageContext {
            page: page.key(),
            view,
        };
        Ok(self.registry.render(page.template(), &context)?)
    }

    pub fn render_index(&self) -> Result<String> {
        self.render(Page::Index, &Empty {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::traverse::SparePartsResult;
    use crate::views::{CountView, NamesView, ProductParts, SparePartsView};

    #[test]
    fn index_heading_and_active_nav() {
        let html = Pages::new().unwrap().render_index().unwrap();
        assert!(html.contains("<h1>XML API</h1>"));
        assert!(html.contains(r#"<a href="/" class="active">"#));
        assert!(!html.contains(r#"<a href="/products/count" class="active">"#));
    }

    #[test]
    fn count_shows_zero_discontinued() {
        let pages = Pages::new().unwrap();
        let html = pages
            .render(
                Page::Count,
                &CountView {
                    product_count: 12,
                    discontinued_count: Some(0),
                },
            )
            .unwrap();
        assert!(html.contains("<h1>Počet produktů</h1>"));
        assert!(html.contains(r#"<strong class="product-count">12</strong>"#));
        assert!(html.contains(r#"<strong class="discontinued-count">0</strong>"#));
        assert!(html.contains(r#"<a href="/products/count" class="active">"#));

        let html = pages
            .render(
                Page::Count,
                &CountView {
                    product_count: 3,
                    discontinued_count: None,
                },
            )
            .unwrap();
        assert!(!html.contains("discontinued-count"));
    }

    #[test]
    fn names_are_escaped() {
        let html = Pages::new()
            .unwrap()
            .render(
                Page::Names,
                &NamesView {
                    product_names: vec!["Saw <XL>".into(), "Rake".into()],
                },
            )
            .unwrap();
        assert!(html.contains("<h1>Názvy produktů</h1>"));
        assert!(html.contains("<li>Saw &lt;XL&gt;</li>"));
        assert!(html.contains("<li>Rake</li>"));
    }

    #[test]
    fn spare_parts_render_chain() {
        let view = SparePartsView {
            categories: vec![SparePartsResult {
                items: vec!["Blade".into()],
                parents: vec!["Garden".into(), "Mowers".into()],
            }],
            products: vec![ProductParts {
                name: "Lawn mower".into(),
                parts: vec!["Blade".into()],
            }],
        };
        let html = Pages::new().unwrap().render(Page::SpareParts, &view).unwrap();
        assert!(html.contains("<h1>Náhradní díly</h1>"));
        assert!(html.contains("Garden &gt; Mowers"));
        assert!(html.contains("<strong>Lawn mower</strong>"));
    }
}
