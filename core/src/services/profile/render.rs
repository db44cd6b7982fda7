//! HTML rendering of the public profile card

use crate::domain::entities::account::Account;

const NOT_AVAILABLE: &str = "N/A";
const PLACEHOLDER_AVATAR: &str = "https://via.placeholder.com/150?text=";

const CARD_STYLE: &str = r#"
    body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        background: linear-gradient(135deg, #e0f2fe 0%, #f0fdf4 100%);
        margin: 0;
        min-height: 100vh;
        display: flex;
        justify-content: center;
        align-items: center;
        padding: 20px;
    }
    .card {
        background: white;
        border-radius: 20px;
        box-shadow: 0 10px 25px rgba(0,0,0,0.1);
        width: 100%;
        max-width: 400px;
        overflow: hidden;
        text-align: center;
    }
    .header { background: #3b82f6; padding: 30px 20px; color: white; }
    .avatar-container {
        width: 120px;
        height: 120px;
        border-radius: 50%;
        border: 5px solid white;
        overflow: hidden;
        margin: 0 auto -60px auto;
        background: white;
        position: relative;
        top: 30px;
    }
    .avatar { width: 100%; height: 100%; object-fit: cover; }
    .body { padding: 70px 20px 30px 20px; }
    .name { font-size: 24px; font-weight: bold; color: #1f2937; }
    .id { font-size: 14px; color: #6b7280; margin-bottom: 20px; letter-spacing: 1px; }
    .details-grid { text-align: left; background: #f9fafb; padding: 20px; border-radius: 12px; }
    .detail-row { display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #e5e7eb; }
    .label { color: #6b7280; font-size: 13px; }
    .value { color: #111827; font-weight: 600; font-size: 13px; }
"#;

/// Escape the five HTML-significant characters
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn or_na(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => escape_html(v),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn avatar_src(account: &Account) -> String {
    match account.profile.profile_image.as_deref() {
        Some(image) if image.starts_with("data:image/") => escape_html(image),
        _ => {
            let initial = account
                .name
                .trim()
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string());
            format!("{}{}", PLACEHOLDER_AVATAR, escape_html(&initial))
        }
    }
}

fn detail_row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="detail-row"><span class="label">{}</span><span class="value">{}</span></div>"#,
        label, value
    )
}

/// Render the public profile card for an account
///
/// Missing values render as `N/A`; every interpolated value is escaped.
pub fn render_profile_card(account: &Account) -> String {
    let profile = &account.profile;
    let name = escape_html(&account.name);
    let dob = profile
        .dob
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let rows = [
        detail_row("Date of Birth", &dob),
        detail_row("Address", &or_na(profile.address.as_deref())),
        detail_row("Marital Status", &or_na(profile.marital_status.as_deref())),
        detail_row("Guardian", &or_na(profile.guardian_name.as_deref())),
        detail_row("Guardian Contact", &or_na(profile.guardian_contact.as_deref())),
    ]
    .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>HealthLink Profile: {name}</title>
<style>{style}</style>
</head>
<body>
<div class="card">
  <div class="header">
    <h2>HealthLink</h2>
    <div class="avatar-container"><img class="avatar" src="{avatar}" alt="Profile picture"></div>
  </div>
  <div class="body">
    <div class="name">{name}</div>
    <div class="id">ID: {health_id}</div>
    <div class="details-grid">
{rows}
    </div>
  </div>
</div>
</body>
</html>"#,
        name = name,
        style = CARD_STYLE,
        avatar = avatar_src(account),
        health_id = escape_html(&account.health_id),
        rows = rows,
    )
}

/// Page served when the addressed profile does not exist
pub fn render_not_found() -> String {
    r#"<html><body style="font-family: sans-serif; text-align: center; padding: 50px;"><h1>Patient Not Found</h1></body></html>"#.to_string()
}
