//! Pure view model for search results.
//!
//! [`build_view`] turns a result set into either a results table or a
//! notice, without touching any UI. Front ends apply the resulting
//! [`ViewModel`] through their own adapter; the HTML and plain-text
//! renderings live here so every front end produces the same markup.

use serde::Serialize;

use crate::models::Product;

/// Column headers of the results table, in order.
pub const TABLE_HEADERS: [&str; 3] = ["IMAGE", "NAME", "PRICE"];

/// What a front end should show after a search settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewModel {
    Table(TableView),
    Notice(Notice),
}

/// One results table: fixed headers, one row per product in result-set order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub headers: [&'static str; 3],
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// Image URI, used as the `src` of the row's image element.
    pub image: String,
    pub name: String,
    pub price: String,
}

/// Why a notice is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    EmptyInput,
    NoResults,
    FetchFailed,
}

impl NoticeKind {
    pub fn message(self) -> &'static str {
        match self {
            NoticeKind::EmptyInput => "Debes ingresar un término de búsqueda en el campo",
            NoticeKind::NoResults => "No se encontraron productos",
            NoticeKind::FetchFailed => "Ocurrió un error al buscar productos",
        }
    }
}

/// A transient message for the toast element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }
}

impl From<NoticeKind> for Notice {
    fn from(kind: NoticeKind) -> Self {
        Notice::new(kind)
    }
}

/// Builds the view for a settled search.
///
/// An empty result set becomes the "no results" notice; anything else is a
/// table with one row per product. No sorting, paging, or truncation.
pub fn build_view(products: &[Product]) -> ViewModel {
    if products.is_empty() {
        return ViewModel::Notice(Notice::new(NoticeKind::NoResults));
    }
    ViewModel::Table(TableView::from_products(products))
}

impl TableView {
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            headers: TABLE_HEADERS,
            rows: products
                .iter()
                .map(|p| RowView {
                    image: p.image.clone(),
                    name: p.name.clone(),
                    price: p.price.to_string(),
                })
                .collect(),
        }
    }

    /// Renders `<table class="products-table">` with one `<img>` per row.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<table class=\"products-table\">\n<thead>\n<tr>");
        for header in self.headers {
            html.push_str("<th>");
            html.push_str(&escape_html(header));
            html.push_str("</th>");
        }
        html.push_str("</tr>\n</thead>\n<tbody>\n");

        for row in &self.rows {
            html.push_str(&format!(
                "<tr><td><img src=\"{src}\" alt=\"{alt}\" class=\"product-image\"></td>\
                 <td>{name}</td><td>{price}</td></tr>\n",
                src = escape_html(&row.image),
                alt = escape_html(&row.name),
                name = escape_html(&row.name),
                price = escape_html(&row.price),
            ));
        }

        html.push_str("</tbody>\n</table>");
        html
    }

    /// Renders an aligned plain-text table for terminals.
    pub fn to_text(&self) -> String {
        let mut widths = self.headers.map(|h| h.chars().count());
        for row in &self.rows {
            for (i, cell) in row.cells().iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_text_row(&mut out, &self.headers, &widths);
        let rule = widths.map(|w| "-".repeat(w));
        push_text_row(
            &mut out,
            &[rule[0].as_str(), rule[1].as_str(), rule[2].as_str()],
            &widths,
        );
        for row in &self.rows {
            push_text_row(&mut out, &row.cells(), &widths);
        }
        out
    }
}

impl RowView {
    fn cells(&self) -> [&str; 3] {
        [&self.image, &self.name, &self.price]
    }
}

fn push_text_row(out: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    let line = format!(
        "{:<w0$}  {:<w1$}  {}",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
    );
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
