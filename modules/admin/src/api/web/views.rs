//! Server-rendered admin pages. Every user-supplied value goes through
//! [`escape`]; absent optional values render as `-`.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use leads::model::{Contact, QuoteLead};

pub const PLACEHOLDER: &str = "-";

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn opt(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => escape(v),
        _ => PLACEHOLDER.to_owned(),
    }
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;background:#f4f6f8;color:#1d2733}\
header{background:#0b3954;color:#fff;padding:12px 24px;display:flex;gap:16px;align-items:center}\
header a{color:#fff;text-decoration:none}header form{margin-left:auto}\
main{padding:24px;max-width:1100px;margin:auto}table{width:100%;border-collapse:collapse;background:#fff}\
th,td{padding:8px;border-bottom:1px solid #dde3e8;text-align:left}\
dl{display:grid;grid-template-columns:220px 1fr;background:#fff;padding:16px}dt{font-weight:600}\
.cards{display:flex;gap:16px}.card{background:#fff;padding:16px;flex:1}.error{color:#b00020}";

fn layout(title: &str, signed_in_as: Option<&str>, body: &str) -> String {
    let nav = match signed_in_as {
        Some(email) => format!(
            r#"<a href="/admin">Overview</a><a href="/admin/contacts">Contacts</a><a href="/admin/leads">Quote leads</a>
<form method="post" action="/admin/logout"><span>{}</span> <button type="submit">Sign out</button></form>"#,
            escape(email)
        ),
        None => String::new(),
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"/><title>{title} · Admin</title><style>{STYLE}</style></head>
<body>
<header><strong>Marine Engines Admin</strong>{nav}</header>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
    )
}

pub fn login_page(error: Option<&str>, email: Option<&str>) -> String {
    let error = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape(e)))
        .unwrap_or_default();
    let body = format!(
        r#"{error}<form method="post" action="/admin/login">
<p><label>Email <input type="email" name="email" value="{email}" required></label></p>
<p><label>Password <input type="password" name="password" required></label></p>
<p><button type="submit">Sign in</button></p>
</form>"#,
        email = escape(email.unwrap_or_default()),
    );
    layout("Sign in", None, &body)
}

pub fn error_page() -> String {
    layout(
        "Something went wrong",
        None,
        "<p>The page could not be loaded. Please try again later.</p>",
    )
}

fn contacts_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "<p>No contacts yet.</p>".to_owned();
    }
    let mut rows = String::new();
    for c in contacts {
        let _ = write!(
            rows,
            r#"<tr><td>{}</td><td><a href="/admin/contacts/{}">{}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            timestamp(&c.created_at),
            c.id,
            escape(&c.name),
            escape(&c.email),
            opt(c.phone.as_deref()),
            opt(c.engine_type.as_deref()),
        );
    }
    format!(
        "<table><thead><tr><th>Date</th><th>Name</th><th>Email</th><th>Phone</th><th>Engine type</th></tr></thead><tbody>{rows}</tbody></table>"
    )
}

fn quote_leads_table(leads: &[QuoteLead]) -> String {
    if leads.is_empty() {
        return "<p>No quote requests yet.</p>".to_owned();
    }
    let mut rows = String::new();
    for q in leads {
        let _ = write!(
            rows,
            r#"<tr><td>{}</td><td><a href="/admin/leads/{}">{}</a></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            timestamp(&q.created_at),
            q.id,
            escape(&q.full_name),
            escape(&q.phone),
            escape(&q.city),
            escape(&q.engine_type),
            escape(&q.power_range),
            escape(&q.timeline),
        );
    }
    format!(
        "<table><thead><tr><th>Date</th><th>Name</th><th>Phone</th><th>City</th><th>Engine</th><th>Power</th><th>Timeline</th></tr></thead><tbody>{rows}</tbody></table>"
    )
}

pub fn overview(
    signed_in_as: &str,
    contacts_total: u64,
    leads_total: u64,
    recent_contacts: &[Contact],
    recent_leads: &[QuoteLead],
) -> String {
    let body = format!(
        r#"<div class="cards">
<div class="card"><h2>{contacts_total}</h2><p>Contacts</p></div>
<div class="card"><h2>{leads_total}</h2><p>Quote requests</p></div>
</div>
<h2>Latest quote requests</h2>
{}
<p><a href="/admin/leads">All quote requests</a></p>
<h2>Latest contacts</h2>
{}
<p><a href="/admin/contacts">All contacts</a></p>"#,
        quote_leads_table(recent_leads),
        contacts_table(recent_contacts),
    );
    layout("Overview", Some(signed_in_as), &body)
}

pub fn contacts_page(signed_in_as: &str, contacts: &[Contact]) -> String {
    layout("Contacts", Some(signed_in_as), &contacts_table(contacts))
}

pub fn quote_leads_page(signed_in_as: &str, leads: &[QuoteLead]) -> String {
    layout("Quote leads", Some(signed_in_as), &quote_leads_table(leads))
}

fn detail_grid(pairs: &[(&str, String)]) -> String {
    let mut out = String::from("<dl>");
    for (label, value) in pairs {
        let _ = write!(out, "<dt>{label}</dt><dd>{value}</dd>");
    }
    out.push_str("</dl>");
    out
}

pub fn contact_detail(signed_in_as: &str, c: &Contact) -> String {
    let grid = detail_grid(&[
        ("Name", escape(&c.name)),
        ("Email", escape(&c.email)),
        ("Phone", opt(c.phone.as_deref())),
        ("Engine type", opt(c.engine_type.as_deref())),
        ("Message", escape(&c.message)),
        ("Received", timestamp(&c.created_at)),
    ]);
    let body = format!(r#"{grid}<p><a href="/admin/contacts">Back to contacts</a></p>"#);
    layout("Contact", Some(signed_in_as), &body)
}

pub fn quote_lead_detail(signed_in_as: &str, q: &QuoteLead) -> String {
    let grid = detail_grid(&[
        ("Full name", escape(&q.full_name)),
        ("Phone", escape(&q.phone)),
        ("Email", escape(&q.email)),
        ("City", escape(&q.city)),
        ("Engine type", escape(&q.engine_type)),
        ("Power range", escape(&q.power_range)),
        ("Usage", escape(&q.usage)),
        ("Engine count", escape(&q.engine_count)),
        ("Vessel type", escape(&q.vessel_type)),
        ("Vessel length", opt(q.vessel_length.as_deref())),
        ("Vessel year", opt(q.vessel_year.as_deref())),
        ("Current engine", opt(q.current_engine.as_deref())),
        ("Timeline", escape(&q.timeline)),
        ("Budget", opt(q.budget.as_deref())),
        ("Priority", escape(&q.priority)),
        (
            "Additional requirements",
            opt(q.additional_requirements.as_deref()),
        ),
        ("Preferred contact", escape(&q.preferred_contact)),
        ("Previous experience", opt(q.previous_experience.as_deref())),
        ("Received", timestamp(&q.created_at)),
    ]);
    let body = format!(r#"{grid}<p><a href="/admin/leads">Back to quote leads</a></p>"#);
    layout("Quote request", Some(signed_in_as), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#x27;y&#x27;"
        );
        assert_eq!(escape("محرك ياماها"), "محرك ياماها");
    }

    #[test]
    fn contact_detail_shows_placeholder_and_escapes() {
        let c = Contact {
            id: Uuid::new_v4(),
            name: "<b>Nasser</b>".into(),
            email: "n@example.com".into(),
            phone: None,
            engine_type: None,
            message: "Need 2 engines".into(),
            created_at: Utc::now(),
        };
        let html = contact_detail("admin@x.test", &c);
        assert!(html.contains("<dt>Phone</dt><dd>-</dd>"));
        assert!(html.contains("<dt>Engine type</dt><dd>-</dd>"));
        assert!(html.contains("&lt;b&gt;Nasser&lt;/b&gt;"));
        assert!(!html.contains("<b>Nasser</b>"));
    }

    #[test]
    fn login_page_shows_error_message() {
        let html = login_page(Some("Invalid credentials"), Some("a@b.c"));
        assert!(html.contains("Invalid credentials"));
        assert!(html.contains(r#"value="a@b.c""#));
        assert!(!html.contains("Sign out"));
    }
}
