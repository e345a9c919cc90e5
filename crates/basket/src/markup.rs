//! HTML fragment rendering of a filtered view.
//!
//! Produces the `<li>` elements a page drops into its list container. Each
//! element carries `data-item-index`, the original index of the row, which is
//! what a page's click handlers read back before calling into the model.

use basket_list::ViewRow;

/// Render every row as an `<li>` element, one after another.
pub fn render_list(rows: &[ViewRow<'_>]) -> String {
    let mut html = String::new();
    for row in rows {
        push_item(&mut html, row);
    }
    html
}

/// Render a single row.
pub fn render_item(row: &ViewRow<'_>) -> String {
    let mut html = String::new();
    push_item(&mut html, row);
    html
}

fn push_item(html: &mut String, row: &ViewRow<'_>) {
    let checked_class = if row.checked() {
        " shopping-item__checked"
    } else {
        ""
    };
    html.push_str(&format!(
        concat!(
            "<li class=\"js-item-index-element\" data-item-index=\"{index}\">\n",
            "  <div class=\"js-shopping-item-name\">\n",
            "    <span class=\"shopping-item js-shopping-item{checked}\">{name}</span>\n",
            "  </div>\n",
            "  <div class=\"shopping-item-controls\">\n",
            "    <button class=\"shopping-item-toggle js-item-toggle\">\n",
            "      <span class=\"button-label\">check</span>\n",
            "    </button>\n",
            "    <button class=\"shopping-item-delete js-item-delete\">\n",
            "      <span class=\"button-label\">delete</span>\n",
            "    </button>\n",
            "  </div>\n",
            "</li>\n",
        ),
        index = row.index,
        checked = checked_class,
        name = escape(row.name()),
    ));
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
