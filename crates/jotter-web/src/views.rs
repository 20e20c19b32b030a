//! Server-rendered HTML views.
//!
//! Pages are built with plain string formatting, no template engine. All
//! user-authored values pass through [`html_escape`] before interpolation.

use chrono::{DateTime, Utc};

use jotter_core::{defaults, relative_age, DashboardView, Note};

/// Color choices offered by the editor. The API accepts any label, so a
/// stored color outside this list is appended as an extra option.
const COLOR_CHOICES: [&str; 5] = ["default", "yellow", "blue", "green", "pink"];

/// Shared page shell linking the embedded stylesheet.
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/assets/style.css">
</head>
<body>
    <header class="topbar">
        <a class="brand" href="/">Jotter</a>
        <a class="btn btn-new" href="/new">New note</a>
    </header>
    <main class="page">
{body}    </main>
</body>
</html>"#,
        title = html_escape(title),
        body = body,
    )
}

/// Landing page: pinned notes first, then unpinned notes by recency.
pub fn index_page(dashboard: &DashboardView, now: DateTime<Utc>) -> String {
    if dashboard.pinned_notes.is_empty() && dashboard.recent_notes.is_empty() {
        return layout("Jotter", &blank_slate("No notes yet"));
    }

    let mut sections = String::new();
    if !dashboard.pinned_notes.is_empty() {
        sections.push_str(&section("Pinned", &dashboard.pinned_notes, now));
    }
    if !dashboard.recent_notes.is_empty() {
        sections.push_str(&section("Recent", &dashboard.recent_notes, now));
    }
    layout("Jotter", &sections)
}

fn section(heading: &str, notes: &[Note], now: DateTime<Utc>) -> String {
    let cards: String = notes.iter().map(|note| note_card(note, now)).collect();
    format!(
        r#"        <section class="note-section">
            <h2>{heading}</h2>
            <div class="note-grid">
{cards}            </div>
        </section>
"#,
        heading = html_escape(heading),
        cards = cards,
    )
}

/// A single dashboard card linking to the note's editor page.
pub fn note_card(note: &Note, now: DateTime<Utc>) -> String {
    let tags: String = note
        .tags
        .iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, html_escape(tag)))
        .collect::<Vec<_>>()
        .join("");
    format!(
        r#"                <a class="note-card color-{color}" href="/note/{id}">
                    <h3>{title}</h3>
                    <p>{content}</p>
                    <div class="card-footer">
                        <div class="tags">{tags}</div>
                        <span class="age">{age}</span>
                    </div>
                </a>
"#,
        color = html_escape(&note.color),
        id = note.id,
        title = html_escape(&note.title),
        content = html_escape(&note.content),
        tags = tags,
        age = html_escape(&relative_age(note.updated_at, now)),
    )
}

/// Editor page, shared between editing an existing note and creating a new
/// one. Saves go through the JSON API; tags are submitted as a single
/// comma-delimited string.
pub fn editor_page(note: Option<&Note>) -> String {
    let page_title = note.map_or("New note", |note| note.title.as_str());
    let title_value = note.map_or(String::new(), |note| html_escape(&note.title));
    let content_value = note.map_or(String::new(), |note| html_escape(&note.content));
    let tags_value = note.map_or(String::new(), |note| html_escape(&note.tags.join(", ")));
    let color_value = note.map_or(defaults::DEFAULT_COLOR, |note| note.color.as_str());
    let pinned_checked = if note.is_some_and(|note| note.pinned) {
        " checked"
    } else {
        ""
    };
    let (save_method, save_url, delete_button) = match note {
        Some(note) => (
            "PUT",
            format!("/api/notes/{}", note.id),
            format!(
                r#"<button type="button" class="btn btn-danger" onclick="removeNote('/api/notes/{}')">Delete</button>"#,
                note.id
            ),
        ),
        None => ("POST", "/api/notes".to_string(), String::new()),
    };

    let body = format!(
        r#"        <section class="editor">
            <form onsubmit="event.preventDefault(); saveNote();">
                <input id="title" type="text" placeholder="Title" value="{title_value}">
                <textarea id="content" rows="10" placeholder="Take a note...">{content_value}</textarea>
                <input id="tags" type="text" placeholder="Tags (comma separated)" value="{tags_value}">
                <div class="editor-row">
                    <label for="color">Color</label>
                    <select id="color">{color_options}</select>
                    <label class="pin-label"><input id="pinned" type="checkbox"{pinned_checked}> Pinned</label>
                </div>
                <div class="editor-actions">
                    <a class="btn" href="/">Cancel</a>
                    {delete_button}
                    <button type="submit" class="btn btn-primary">Save</button>
                </div>
            </form>
        </section>
        <script>
            function saveNote() {{
                const body = {{
                    title: document.getElementById('title').value,
                    content: document.getElementById('content').value,
                    tags: document.getElementById('tags').value,
                    color: document.getElementById('color').value,
                    pinned: document.getElementById('pinned').checked
                }};
                fetch('{save_url}', {{
                    method: '{save_method}',
                    headers: {{ 'Content-Type': 'application/json' }},
                    body: JSON.stringify(body)
                }}).then(() => {{ window.location.href = '/'; }});
            }}
            function removeNote(url) {{
                fetch(url, {{ method: 'DELETE' }}).then(() => {{ window.location.href = '/'; }});
            }}
        </script>
"#,
        title_value = title_value,
        content_value = content_value,
        tags_value = tags_value,
        color_options = color_options(color_value),
        pinned_checked = pinned_checked,
        save_url = save_url,
        save_method = save_method,
        delete_button = delete_button,
    );
    layout(page_title, &body)
}

/// Empty-state page.
pub fn empty_page() -> String {
    layout("Jotter", &blank_slate("Nothing here"))
}

fn blank_slate(heading: &str) -> String {
    format!(
        r#"        <section class="blank-slate">
            <h2>{heading}</h2>
            <p>Capture a thought before it escapes.</p>
            <a class="btn btn-new" href="/new">New note</a>
        </section>
"#,
        heading = html_escape(heading),
    )
}

fn color_options(current: &str) -> String {
    let mut choices: Vec<&str> = COLOR_CHOICES.to_vec();
    if !choices.contains(&current) {
        choices.push(current);
    }
    choices
        .iter()
        .map(|choice| {
            let selected = if *choice == current { " selected" } else { "" };
            format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = html_escape(choice),
                selected = selected,
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Simple HTML escaping for security.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
