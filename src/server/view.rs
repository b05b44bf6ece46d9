//! HTML views derived from the connection state.
//!
//! Everything user-visible is rendered as status banners and tables; raw
//! errors never reach the page. Text coming from the messaging client is
//! escaped before interpolation.

use qrcode::{QrCode, render::svg};

use super::domain::{ConnectionState, GroupSummary};

/// Message shown on the group list when there is nothing to list.
pub const NO_GROUPS_MESSAGE: &str = "No groups found or failed to load groups.";

const STYLE: &str = "
body { font-family: -apple-system, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
       background-color: #121212; color: #e0e0e0; margin: 0; padding: 20px;
       display: flex; justify-content: center; align-items: flex-start; min-height: 100vh; }
.container { width: 100%; max-width: 900px; background-color: #1e1e1e;
             border-radius: 8px; box-shadow: 0 4px 8px rgba(0,0,0,0.3); padding: 30px; }
h1 { color: #ffffff; border-bottom: 2px solid #333; padding-bottom: 10px; margin-top: 0; }
p { line-height: 1.6; }
.status-card { padding: 15px; border-radius: 6px; margin: 20px 0; font-weight: bold; }
.status-connected { background-color: #28a745; color: #ffffff; }
.status-disconnected { background-color: #dc3545; color: #ffffff; }
.qr { background-color: #ffffff; display: inline-block; padding: 12px; border-radius: 6px; }
table { width: 100%; border-collapse: collapse; margin-top: 20px; }
th, td { padding: 12px 15px; text-align: left; border-bottom: 1px solid #333; }
th { background-color: #333; color: #ffffff; }
tr:hover { background-color: #2c2c2c; }
.btn { display: inline-block; padding: 10px 20px; margin-top: 15px;
       background-color: #007bff; color: #ffffff; text-decoration: none; border-radius: 5px; }
.btn:hover { background-color: #0056b3; }
.btn-secondary { background-color: #6c757d; }
.btn-secondary:hover { background-color: #5a6268; }
.actions { margin-top: 25px; display: flex; gap: 10px; }
";

/// Wrap body content in the page shell.
///
/// `refresh_secs` adds a meta refresh so the page reloads itself, used while
/// a pairing code is on screen.
fn render_page(title: &str, refresh_secs: Option<u32>, body: &str) -> String {
    let refresh = refresh_secs
        .map(|secs| format!("<meta http-equiv=\"refresh\" content=\"{secs}\">"))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"UTF-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\
         {refresh}\
         <title>{title}</title>\
         <style>{STYLE}</style>\
         </head>\
         <body><div class=\"container\">{body}</div></body>\
         </html>",
        title = escape_html(title),
    )
}

/// Escape text for interpolation into HTML.
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

/// Render a QR payload as an inline scannable SVG.
///
/// Returns `None` when the payload cannot be encoded; the caller falls back
/// to the wait prompt.
fn qr_svg(payload: &str) -> Option<String> {
    match QrCode::new(payload.as_bytes()) {
        Ok(code) => Some(
            code.render::<svg::Color>()
                .min_dimensions(240, 240)
                .build(),
        ),
        Err(e) => {
            tracing::error!("failed to encode pairing code as QR: {e}");
            None
        }
    }
}

/// Home view: connected banner, pending pairing code, or wait prompt.
pub fn home_view(state: &ConnectionState) -> String {
    if state.connected {
        let body = "<h1>WhatsApp Group Viewer</h1>\
             <div class=\"status-card status-connected\">Connected</div>\
             <p>The messaging account is paired. You can now view your group list.</p>\
             <div class=\"actions\"><a href=\"/grup\" class=\"btn\">View Group List</a></div>";
        return render_page("WhatsApp Group Viewer", None, body);
    }

    if let Some(svg) = state.qr_payload.as_deref().and_then(qr_svg) {
        let body = format!(
            "<h1>WhatsApp Group Viewer</h1>\
             <div class=\"status-card status-disconnected\">Not Connected</div>\
             <p>Scan this QR code with your phone to pair. This page reloads automatically.</p>\
             <div class=\"qr\">{svg}</div>"
        );
        return render_page("Scan to Pair", Some(15), &body);
    }

    let body = "<h1>WhatsApp Group Viewer</h1>\
         <div class=\"status-card status-disconnected\">Not Connected</div>\
         <p>Starting the messaging client. Please wait a moment and refresh this page.</p>";
    render_page("WhatsApp Group Viewer", None, body)
}

/// Error view for the group list while disconnected.
pub fn disconnected_view() -> String {
    let body = "<h1>WhatsApp Group List</h1>\
         <div class=\"status-card status-disconnected\">Not Connected</div>\
         <p>The messaging account is not paired. Scan the QR code on the home page first.</p>\
         <div class=\"actions\"><a href=\"/\" class=\"btn btn-secondary\">Back to Home</a></div>";
    render_page("Error", None, body)
}

/// Group list view: table of groups, or the no-groups message.
pub fn group_list_view(groups: &[GroupSummary]) -> String {
    let table = if groups.is_empty() {
        format!("<p>{NO_GROUPS_MESSAGE}</p>")
    } else {
        let mut rows = String::new();
        for (index, group) in groups.iter().enumerate() {
            rows.push_str(&format!(
                "<tr><td>{no}</td><td>{name}</td><td>{id}</td><td>{members}</td></tr>",
                no = index + 1,
                name = escape_html(&group.name),
                id = escape_html(&group.id),
                members = group.member_count,
            ));
        }
        format!(
            "<table>\
             <tr><th>No</th><th>Group Name</th><th>Group ID</th><th>Members</th></tr>\
             {rows}\
             </table>"
        )
    };

    let body = format!(
        "<h1>WhatsApp Group List</h1>\
         <p>Total groups: {count}</p>\
         {table}\
         <div class=\"actions\">\
         <a href=\"/\" class=\"btn btn-secondary\">Back to Home</a>\
         <a href=\"/grup\" class=\"btn\">Refresh List</a>\
         </div>",
        count = groups.len(),
    );
    render_page("WhatsApp Group List", None, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str, name: &str, member_count: usize) -> GroupSummary {
        GroupSummary {
            id: id.to_string(),
            name: name.to_string(),
            member_count,
        }
    }

    #[test]
    fn test_group_list_view_with_no_groups_shows_message_and_no_table() {
        // given:
        let groups: Vec<GroupSummary> = Vec::new();

        // when:
        let html = group_list_view(&groups);

        // then:
        assert!(html.contains(NO_GROUPS_MESSAGE));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_group_list_view_renders_one_row_per_group() {
        // given:
        let groups = vec![group("g1", "Team", 3)];

        // when:
        let html = group_list_view(&groups);

        // then: 1 | Team | g1 | 3
        assert!(html.contains("<tr><td>1</td><td>Team</td><td>g1</td><td>3</td></tr>"));
        assert!(html.contains("Total groups: 1"));
    }

    #[test]
    fn test_group_list_view_numbers_rows_from_one_in_order() {
        // given:
        let groups = vec![group("g1", "First", 2), group("g2", "Second", 4)];

        // when:
        let html = group_list_view(&groups);

        // then:
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert!(html.contains("<tr><td>2</td><td>Second</td>"));
    }

    #[test]
    fn test_group_list_view_escapes_hostile_names() {
        // given:
        let groups = vec![group("g1", "<script>alert(1)</script>", 1)];

        // when:
        let html = group_list_view(&groups);

        // then:
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_home_view_connected_links_to_group_list() {
        // given:
        let state = ConnectionState {
            connected: true,
            qr_payload: None,
            groups: Vec::new(),
        };

        // when:
        let html = home_view(&state);

        // then:
        assert!(html.contains("status-connected"));
        assert!(html.contains("href=\"/grup\""));
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_home_view_with_pending_qr_embeds_svg_and_auto_reload() {
        // given:
        let state = ConnectionState {
            connected: false,
            qr_payload: Some("pairing-code".to_string()),
            groups: Vec::new(),
        };

        // when:
        let html = home_view(&state);

        // then:
        assert!(html.contains("<svg"));
        assert!(html.contains("<meta http-equiv=\"refresh\" content=\"15\">"));
        assert!(html.contains("status-disconnected"));
    }

    #[test]
    fn test_home_view_before_first_qr_shows_wait_prompt() {
        // given:
        let state = ConnectionState::default();

        // when:
        let html = home_view(&state);

        // then:
        assert!(html.contains("Please wait"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_disconnected_view_links_back_home() {
        // when:
        let html = disconnected_view();

        // then:
        assert!(html.contains("status-disconnected"));
        assert!(html.contains("href=\"/\""));
    }

    #[test]
    fn test_escape_html_covers_markup_characters() {
        // when:
        let escaped = escape_html("a<b>&\"c'");

        // then:
        assert_eq!(escaped, "a&lt;b&gt;&amp;&quot;c&#39;");
    }
}
