use crate::models::TeamId;
use crate::view::{ElementId, HtmlView, ListEntry, View};

pub fn render_index(view: &HtmlView) -> String {
    INDEX_HTML
        .replace("{{GREETING}}", &greeting_html(view))
        .replace("{{NAME_FIELD}}", &name_field_html(view))
        .replace("{{TEAM_OPTIONS}}", &team_options_html(view))
        .replace("{{TOTAL}}", &escape_html(view.text(ElementId::AttendeeCount)))
        .replace("{{PROGRESS}}", &progress_html(view))
        .replace("{{TEAM_STATS}}", &team_stats_html(view))
        .replace("{{CELEBRATION}}", &celebration_html(view))
        .replace("{{ROSTER}}", &roster_html(view))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

fn hidden_attr(view: &HtmlView, id: ElementId) -> &'static str {
    if view.is_visible(id) { "" } else { " hidden" }
}

fn greeting_html(view: &HtmlView) -> String {
    let id = ElementId::Greeting;
    let class = view.attribute(id, "class").unwrap_or("status");
    format!(
        r#"<p id="{}" class="{}" role="status"{}>{}</p>"#,
        id.dom_id(),
        escape_html(class),
        hidden_attr(view, id),
        escape_html(view.text(id))
    )
}

fn name_field_html(view: &HtmlView) -> String {
    let id = ElementId::AttendeeName;
    let autofocus = if view.focused() == Some(id) { " autofocus" } else { "" };
    format!(
        r#"<input id="{}" name="attendeeName" type="text" placeholder="Your name" autocomplete="off" value="{}"{autofocus} />"#,
        id.dom_id(),
        escape_html(view.value(id))
    )
}

fn team_options_html(view: &HtmlView) -> String {
    let selected = view.value(ElementId::TeamSelect);
    let mut html = String::from(r#"<option value="">Select a team</option>"#);
    for team in TeamId::ALL {
        let mark = if team.as_str() == selected { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{}"{mark}>{}</option>"#,
            team.as_str(),
            team.label()
        ));
    }
    html
}

fn progress_html(view: &HtmlView) -> String {
    let id = ElementId::ProgressBar;
    let attrs = view
        .element(id)
        .map(|el| {
            el.attributes
                .iter()
                .map(|(name, value)| format!(r#" {name}="{}""#, escape_html(value)))
                .collect::<String>()
        })
        .unwrap_or_default();
    format!(r#"<div id="{}" class="progress-bar"{attrs}></div>"#, id.dom_id())
}

fn team_stats_html(view: &HtmlView) -> String {
    TeamId::ALL
        .into_iter()
        .map(|team| {
            let id = ElementId::TeamCount(team);
            format!(
                r#"<div class="stat team-{}"><span class="label">{}</span><span id="{}" class="value">{}</span></div>"#,
                team.as_str(),
                team.label(),
                id.dom_id(),
                escape_html(view.text(id))
            )
        })
        .collect()
}

fn celebration_html(view: &HtmlView) -> String {
    let id = ElementId::Celebration;
    if !view.has_element(id) {
        return String::new();
    }
    format!(
        r#"<div id="{}" class="celebration"{}>{}</div>"#,
        id.dom_id(),
        hidden_attr(view, id),
        escape_html(view.text(id))
    )
}

fn roster_html(view: &HtmlView) -> String {
    let id = ElementId::AttendeeList;
    if !view.has_element(id) {
        return String::new();
    }
    let items: String = view
        .entries(id)
        .iter()
        .map(|entry| match entry {
            ListEntry::Placeholder(text) => {
                format!(r#"<li class="muted">{}</li>"#, escape_html(text))
            }
            ListEntry::Attendee { name, team_label } => format!(
                r#"<li><span class="attendee-name">{}</span><span class="chip">{}</span></li>"#,
                escape_html(name),
                escape_html(team_label)
            ),
        })
        .collect();
    format!(
        r#"<section class="roster"><h2>Attendees</h2><ul id="{}">{items}</ul></section>"#,
        id.dom_id()
    )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Summit Check-In</title>
  <style>
    :root {
      --bg-1: #eef4fb;
      --ink: #1f2a37;
      --accent: #0071c5;
      --water: #1e88e5;
      --zero: #43a047;
      --power: #fb8c00;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(0, 57, 99, 0.15);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #ffffff 70%);
      color: var(--ink);
      font-family: "Segoe UI", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    form {
      display: grid;
      grid-template-columns: 2fr 1.4fr auto;
      gap: 12px;
    }

    input,
    select,
    button {
      font: inherit;
      padding: 12px 14px;
      border-radius: 12px;
      border: 1px solid rgba(31, 42, 55, 0.2);
    }

    button {
      background: var(--accent);
      color: white;
      border: none;
      font-weight: 600;
      cursor: pointer;
    }

    [hidden] {
      display: none !important;
    }

    .success-message,
    .error-message {
      margin: 0;
      padding: 12px 16px;
      border-radius: 12px;
    }

    .success-message {
      background: #e8f5e9;
      color: #1b5e20;
    }

    .error-message {
      background: #ffebee;
      color: #b71c1c;
    }

    .progress {
      background: #dde6f0;
      border-radius: 999px;
      height: 14px;
      overflow: hidden;
    }

    .progress-bar {
      background: var(--accent);
      height: 100%;
      transition: width 300ms ease;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 16px;
      display: grid;
      gap: 6px;
      border-top: 4px solid var(--accent);
    }

    .stat.team-water { border-top-color: var(--water); }
    .stat.team-zero { border-top-color: var(--zero); }
    .stat.team-power { border-top-color: var(--power); }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #6b7785;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .celebration {
      padding: 14px 18px;
      border-radius: 14px;
      background: #fff8e1;
      font-weight: 600;
    }

    .roster ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .roster li {
      display: flex;
      justify-content: space-between;
      padding: 10px 14px;
      background: white;
      border-radius: 12px;
    }

    .roster .muted {
      color: #8a94a0;
    }

    .chip {
      font-size: 0.85rem;
      padding: 2px 10px;
      border-radius: 999px;
      background: #e3f2fd;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Summit Check-In</h1>
    </header>
    <form id="checkInForm" method="post" action="/checkin">
      {{NAME_FIELD}}
      <select id="teamSelect" name="team">{{TEAM_OPTIONS}}</select>
      <button type="submit">Check In</button>
    </form>
    {{GREETING}}
    <section>
      <p>Attendance: <strong id="attendeeCount">{{TOTAL}}</strong></p>
      <div class="progress">{{PROGRESS}}</div>
    </section>
    <section class="panel">{{TEAM_STATS}}</section>
    {{CELEBRATION}}
    {{ROSTER}}
  </main>
</body>
</html>
"#;
