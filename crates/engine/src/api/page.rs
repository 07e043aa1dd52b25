//! Server-rendered list page.

use agenda_domain::{Entry, PhoneType};

use super::notice::Notice;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
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

fn phone_type_options(selected: Option<PhoneType>) -> String {
    PhoneType::all()
        .iter()
        .map(|phone_type| {
            let marker = if Some(*phone_type) == selected {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{0}"{1}>{0}</option>"#,
                phone_type.as_str(),
                marker
            )
        })
        .collect()
}

fn add_form() -> String {
    format!(
        r#"<form action="/add" method="post" class="add-entry">
<input name="name" placeholder="Name">
<input name="last_name" placeholder="Last name">
<input name="address" placeholder="Address">
<input name="email" placeholder="Email">
<input name="phone_number" placeholder="Phone number">
<select name="phone_type">{}</select>
<button type="submit">Add</button>
</form>
"#,
        phone_type_options(None)
    )
}

fn entry_rows(entry: &Entry) -> String {
    let d = &entry.details;
    format!(
        r#"<tr>
<td>{name}</td><td>{last_name}</td><td>{address}</td><td>{email}</td><td>{phone_number}</td><td>{phone_type}</td>
<td><form action="/delete" method="post"><input type="hidden" name="id_user" value="{id}"><button type="submit">Delete</button></form></td>
</tr>
<tr class="edit-entry"><td colspan="7"><form action="/edit" method="post">
<input type="hidden" name="id_user" value="{id}">
<input name="name_edit" value="{name}">
<input name="last_name_edit" value="{last_name}">
<input name="address_edit" value="{address}">
<input name="email_edit" value="{email}">
<input name="phone_number_edit" value="{phone_number}">
<select name="phone_type_edit">{options}</select>
<button type="submit">Save</button>
</form></td></tr>
"#,
        name = escape_html(d.name()),
        last_name = escape_html(d.last_name()),
        address = escape_html(d.address()),
        email = escape_html(d.email()),
        phone_number = escape_html(d.phone_number()),
        phone_type = d.phone_type(),
        options = phone_type_options(Some(d.phone_type())),
        id = entry.id,
    )
}

/// Full HTML document listing `entries`, with `notice` shown above the list.
pub fn render_entries(entries: &[Entry], notice: Option<Notice>) -> String {
    let mut html = String::from(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>My Little Agenda</title></head>\n<body>\n<h1>My Little Agenda</h1>\n",
    );

    if let Some(notice) = notice {
        html.push_str(&format!(
            "<p class=\"notice\">{}</p>\n",
            escape_html(notice.message())
        ));
    }

    html.push_str(&add_form());

    if entries.is_empty() {
        html.push_str("<p class=\"empty\">No entries yet.</p>\n");
    } else {
        html.push_str(
            "<table>\n<thead><tr><th>Name</th><th>Last name</th><th>Address</th><th>Email</th><th>Phone</th><th>Type</th><th></th></tr></thead>\n<tbody>\n",
        );
        for entry in entries {
            html.push_str(&entry_rows(entry));
        }
        html.push_str("</tbody>\n</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}
