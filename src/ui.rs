use crate::gradient::{
    mood_emoji, mood_label, resolve_gradient, ENERGY_LABEL, MOOD_EMOJIS, MOOD_LABELS, STRESS_LABEL,
};
use crate::models::{MoodEntry, RecentEntry};

const DEFAULT_RATING: u8 = 3;

pub fn render_index(today: Option<&MoodEntry>, recent: &[RecentEntry]) -> String {
    let today_section = match today {
        Some(entry) => render_summary(entry),
        None => render_form(),
    };

    INDEX_HTML
        .replace("{{GRADIENT_CSS}}", &gradient_css())
        .replace("{{TODAY_SECTION}}", &today_section)
        .replace("{{RECENT_SECTION}}", &render_recent(recent))
        .replace("{{MOOD_EMOJIS}}", &js_string_array(&MOOD_EMOJIS))
        .replace("{{MOOD_LABELS}}", &js_string_array(&MOOD_LABELS))
}

fn render_summary(entry: &MoodEntry) -> String {
    let note = entry
        .note
        .as_deref()
        .map(|note| format!("<p class=\"summary-note\">&quot;{}&quot;</p>", escape_html(note)))
        .unwrap_or_default();

    format!(
        concat!(
            "<div class=\"summary\">",
            "<div class=\"summary-row\">",
            "<span class=\"summary-emoji\">{emoji}</span>",
            "<div>",
            "<div class=\"summary-title\">Mood logged for today: {label}</div>",
            "<div class=\"summary-meta\">Energy: {energy}/5 • Stress: {stress}/5</div>",
            "</div></div>{note}</div>"
        ),
        emoji = mood_emoji(entry.rating),
        label = mood_label(entry.rating),
        energy = entry.energy,
        stress = entry.stress,
        note = note,
    )
}

fn render_form() -> String {
    let mut picker = String::new();
    for rating in 1..=5u8 {
        let selected = if rating == DEFAULT_RATING { " selected" } else { "" };
        let visible = if rating == DEFAULT_RATING { " visible" } else { "" };
        picker.push_str(&format!(
            concat!(
                "<div class=\"mood-option\">",
                "<button type=\"button\" class=\"mood-btn{selected}\" data-rating=\"{rating}\">{emoji}</button>",
                "<span class=\"mood-name{visible}\" data-rating=\"{rating}\">{label}</span>",
                "</div>"
            ),
            selected = selected,
            visible = visible,
            rating = rating,
            emoji = mood_emoji(rating),
            label = mood_label(rating),
        ));
    }

    format!(
        concat!(
            "<div id=\"mood-form\">",
            "<div class=\"mood-picker\">{picker}</div>",
            "{energy_slider}",
            "{stress_slider}",
            "<label class=\"note-label\" for=\"note\">Notes (optional)</label>",
            "<textarea id=\"note\" placeholder=\"How was your day? Any thoughts or reflections...\"></textarea>",
            "<button class=\"btn-save\" id=\"save-btn\" type=\"button\">Save Today's Mood</button>",
            "</div>"
        ),
        picker = picker,
        energy_slider = render_slider("energy", ENERGY_LABEL, "⚡", DEFAULT_RATING),
        stress_slider = render_slider("stress", STRESS_LABEL, "☁", DEFAULT_RATING),
    )
}

fn render_slider(slug: &str, label: &str, icon: &str, value: u8) -> String {
    let mut segments = String::new();
    for rating in 1..=5u8 {
        let class = if rating <= value {
            format!("segment grad-{slug}-{rating}")
        } else {
            "segment".to_string()
        };
        segments.push_str(&format!(
            "<button type=\"button\" class=\"{class}\" data-value=\"{rating}\" aria-label=\"{label} {rating}\"></button>",
        ));
    }

    format!(
        concat!(
            "<div class=\"slider\" data-kind=\"{slug}\">",
            "<div class=\"slider-head\">",
            "<span class=\"slider-icon grad-{slug}-{value}\" data-role=\"icon\">{icon}</span>",
            "<span class=\"slider-label\">{label}</span>",
            "</div>",
            "<div class=\"slider-row\">",
            "<span class=\"slider-end\">Low</span>",
            "<div class=\"segments\">{segments}</div>",
            "<span class=\"slider-end\">High</span>",
            "</div></div>"
        ),
        slug = slug,
        value = value,
        icon = icon,
        label = label,
        segments = segments,
    )
}

fn render_recent(entries: &[RecentEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let cards: String = entries
        .iter()
        .map(|entry| {
            let note = entry
                .note
                .as_deref()
                .map(|note| {
                    format!("<p class=\"recent-note\">&quot;{}&quot;</p>", escape_html(note))
                })
                .unwrap_or_default();

            format!(
                concat!(
                    "<div class=\"recent-card\">",
                    "<div class=\"recent-row\">",
                    "<div class=\"recent-who\">",
                    "<span class=\"recent-emoji\">{emoji}</span>",
                    "<div><div class=\"recent-date\">{date}</div>",
                    "<div class=\"recent-label\">{label}</div></div>",
                    "</div>",
                    "<div class=\"recent-meta\">",
                    "<div>Energy: {energy}/5</div>",
                    "<div>Stress: {stress}/5</div>",
                    "</div></div>{note}</div>"
                ),
                emoji = entry.emoji,
                date = escape_html(&entry.display_date),
                label = entry.label,
                energy = entry.energy,
                stress = entry.stress,
                note = note,
            )
        })
        .collect();

    format!(
        "<section class=\"recent\"><h2>Recent Moods</h2><div class=\"recent-grid\">{cards}</div></section>",
    )
}

fn gradient_css() -> String {
    let mut css = String::new();
    for (slug, label) in [("energy", ENERGY_LABEL), ("stress", STRESS_LABEL)] {
        for rating in 1..=5u8 {
            let gradient = resolve_gradient(label, rating);
            css.push_str(&format!(
                "    .grad-{slug}-{rating} {{ background-image: {}; }}\n",
                gradient.css()
            ));
        }
    }
    css
}

fn js_string_array(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("\"{item}\"")).collect();
    format!("[{}]", quoted.join(","))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Heat-Mood</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #3b82f6;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --neutral: #e5e7eb;
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 16px;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 22px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #mood-form {
      display: grid;
      gap: 22px;
    }

    .mood-picker {
      display: flex;
      justify-content: space-between;
      gap: 6px;
    }

    .mood-option {
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 8px;
      flex: 1;
    }

    .mood-btn {
      appearance: none;
      border: none;
      background: transparent;
      font-size: 2rem;
      padding: 12px;
      border-radius: 18px;
      cursor: pointer;
      transition: transform 150ms ease, background 150ms ease;
    }

    .mood-btn:hover {
      background: rgba(47, 72, 88, 0.08);
      transform: scale(1.05);
    }

    .mood-btn.selected {
      background: #dbeafe;
      transform: scale(1.1);
      box-shadow: 0 10px 24px rgba(59, 130, 246, 0.25);
    }

    .mood-name {
      font-weight: 500;
      font-size: 0.95rem;
      visibility: hidden;
    }

    .mood-name.visible {
      visibility: visible;
    }

    .slider {
      display: grid;
      gap: 10px;
    }

    .slider-head {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .slider-icon {
      width: 34px;
      height: 34px;
      border-radius: 10px;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      color: white;
      font-size: 1rem;
    }

    .slider-label {
      font-weight: 500;
    }

    .slider-row {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .slider-end {
      font-size: 0.85rem;
      color: #8b857d;
      width: 34px;
    }

    .segments {
      flex: 1;
      display: flex;
      gap: 8px;
    }

    .segment {
      appearance: none;
      border: none;
      flex: 1;
      height: 32px;
      border-radius: 10px;
      background: var(--neutral);
      cursor: pointer;
      transition: background 150ms ease;
    }

    .segment:hover {
      background: #d1d5db;
    }

    .note-label {
      display: block;
      font-size: 0.9rem;
      font-weight: 500;
      color: #57534e;
      margin-bottom: -12px;
    }

    textarea {
      width: 100%;
      height: 96px;
      padding: 12px 14px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 14px;
      font-family: inherit;
      font-size: 0.95rem;
      resize: none;
    }

    textarea:focus {
      outline: 2px solid var(--accent);
      border-color: transparent;
    }

    .btn-save {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(59, 130, 246, 0.3);
      transition: transform 150ms ease;
    }

    .btn-save:active {
      transform: scale(0.98);
    }

    .summary {
      background: #f0fdf4;
      border: 1px solid #bbf7d0;
      border-radius: 16px;
      padding: 18px;
      display: grid;
      gap: 8px;
    }

    .summary-row {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .summary-emoji {
      font-size: 2rem;
    }

    .summary-title {
      font-weight: 500;
      color: #166534;
    }

    .summary-meta {
      font-size: 0.9rem;
      color: #16a34a;
    }

    .summary-note {
      margin: 0;
      font-size: 0.9rem;
      font-style: italic;
      color: #15803d;
    }

    .recent {
      display: grid;
      gap: 14px;
    }

    .recent h2 {
      margin: 0;
    }

    .recent-grid {
      display: grid;
      gap: 10px;
    }

    .recent-card {
      background: white;
      border-radius: 16px;
      padding: 14px 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .recent-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .recent-who {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    .recent-emoji {
      font-size: 1.6rem;
    }

    .recent-date {
      font-weight: 500;
    }

    .recent-label {
      font-size: 0.9rem;
      color: #8b857d;
    }

    .recent-meta {
      text-align: right;
      font-size: 0.85rem;
      color: #8b857d;
    }

    .recent-note {
      margin: 10px 0 0;
      font-size: 0.9rem;
      font-style: italic;
      color: #6f6a65;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .mood-btn {
        font-size: 1.6rem;
        padding: 8px;
      }
    }

{{GRADIENT_CSS}}
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood Tracker</h1>
      <p class="subtitle">Track your daily mood and energy levels</p>
    </header>

    <section class="card">
      <h2>How are you feeling today?</h2>
      <div id="today-slot">{{TODAY_SECTION}}</div>
    </section>

    <div id="recent-slot">{{RECENT_SECTION}}</div>

    <div class="status" id="status"></div>
    <p class="hint">One entry per calendar day (server time).</p>
  </main>

  <script>
    const moodEmojis = {{MOOD_EMOJIS}};
    const moodLabels = {{MOOD_LABELS}};

    const statusEl = document.getElementById('status');
    const todaySlot = document.getElementById('today-slot');
    const recentSlot = document.getElementById('recent-slot');

    const draft = { mood: 3, energy: 3, stress: 3 };

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) =>
      text.replace(/[&<>"]/g, (ch) =>
        ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;' }[ch]));

    const summaryHtml = (entry) => {
      const note = entry.note
        ? '<p class="summary-note">&quot;' + escapeHtml(entry.note) + '&quot;</p>'
        : '';
      return '<div class="summary">' +
        '<div class="summary-row">' +
        '<span class="summary-emoji">' + moodEmojis[entry.rating - 1] + '</span>' +
        '<div>' +
        '<div class="summary-title">Mood logged for today: ' + moodLabels[entry.rating - 1] + '</div>' +
        '<div class="summary-meta">Energy: ' + entry.energy + '/5 • Stress: ' + entry.stress + '/5</div>' +
        '</div></div>' + note + '</div>';
    };

    const recentCard = (entry) => {
      const note = entry.note
        ? '<p class="recent-note">&quot;' + escapeHtml(entry.note) + '&quot;</p>'
        : '';
      return '<div class="recent-card">' +
        '<div class="recent-row">' +
        '<div class="recent-who">' +
        '<span class="recent-emoji">' + entry.emoji + '</span>' +
        '<div><div class="recent-date">' + escapeHtml(entry.display_date) + '</div>' +
        '<div class="recent-label">' + entry.label + '</div></div>' +
        '</div>' +
        '<div class="recent-meta">' +
        '<div>Energy: ' + entry.energy + '/5</div>' +
        '<div>Stress: ' + entry.stress + '/5</div>' +
        '</div></div>' + note + '</div>';
    };

    const renderRecent = (entries) => {
      if (!entries.length) {
        recentSlot.innerHTML = '';
        return;
      }
      recentSlot.innerHTML = '<section class="recent"><h2>Recent Moods</h2><div class="recent-grid">' +
        entries.map(recentCard).join('') + '</div></section>';
    };

    const refreshRecent = async () => {
      const res = await fetch('/api/moods/recent');
      if (!res.ok) {
        throw new Error('Unable to load recent moods');
      }
      const data = await res.json();
      renderRecent(data.entries);
    };

    const wireForm = () => {
      const form = document.getElementById('mood-form');
      if (!form) {
        return;
      }

      const noteEl = document.getElementById('note');
      const moodButtons = Array.from(form.querySelectorAll('.mood-btn'));
      const moodNames = Array.from(form.querySelectorAll('.mood-name'));

      const paintMood = () => {
        moodButtons.forEach((button) => {
          button.classList.toggle('selected', Number(button.dataset.rating) === draft.mood);
        });
        moodNames.forEach((name) => {
          name.classList.toggle('visible', Number(name.dataset.rating) === draft.mood);
        });
      };

      const paintSlider = (slider) => {
        const kind = slider.dataset.kind;
        const value = draft[kind];
        slider.querySelector('[data-role="icon"]').className =
          'slider-icon grad-' + kind + '-' + value;
        Array.from(slider.querySelectorAll('.segment')).forEach((segment) => {
          const rating = Number(segment.dataset.value);
          segment.className =
            rating <= value ? 'segment grad-' + kind + '-' + rating : 'segment';
        });
      };

      moodButtons.forEach((button) => {
        button.addEventListener('click', () => {
          draft.mood = Number(button.dataset.rating);
          paintMood();
        });
      });

      Array.from(form.querySelectorAll('.slider')).forEach((slider) => {
        Array.from(slider.querySelectorAll('.segment')).forEach((segment) => {
          segment.addEventListener('click', () => {
            draft[slider.dataset.kind] = Number(segment.dataset.value);
            paintSlider(slider);
          });
        });
      });

      const save = async () => {
        setStatus('Saving...', 'info');
        const res = await fetch('/api/moods', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            rating: draft.mood,
            energy: draft.energy,
            stress: draft.stress,
            note: noteEl.value
          })
        });

        if (!res.ok) {
          const msg = await res.text();
          throw new Error(msg || 'Request failed');
        }

        const entry = await res.json();
        noteEl.value = '';
        todaySlot.innerHTML = summaryHtml(entry);
        refreshRecent().catch((err) => setStatus(err.message, 'error'));
        setStatus('Saved', 'ok');
        setTimeout(() => setStatus('', ''), 1200);
      };

      document.getElementById('save-btn').addEventListener('click', () => {
        save().catch((err) => setStatus(err.message, 'error'));
      });
    };

    wireForm();
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(note: Option<&str>) -> MoodEntry {
        MoodEntry {
            date: "2024-03-01".to_string(),
            rating: 4,
            energy: 2,
            stress: 5,
            note: note.map(str::to_string),
        }
    }

    #[test]
    fn summary_replaces_form_when_logged() {
        let today = entry(Some("hello"));
        let html = render_index(Some(&today), &[]);
        assert!(html.contains("<div id=\"today-slot\"><div class=\"summary\">"));
        assert!(html.contains("Mood logged for today: Good"));
        assert!(html.contains("Energy: 2/5 • Stress: 5/5"));
        assert!(html.contains("&quot;hello&quot;"));
        assert!(!html.contains("Save Today's Mood"));
    }

    #[test]
    fn form_shown_when_no_entry() {
        let html = render_index(None, &[]);
        assert!(html.contains("<div id=\"today-slot\"><div id=\"mood-form\">"));
        assert!(html.contains("Save Today's Mood"));
        assert!(html.contains("id=\"note\""));
    }

    #[test]
    fn form_defaults_fill_three_segments() {
        let html = render_index(None, &[]);
        assert!(html.contains("segment grad-energy-3"));
        assert!(!html.contains("segment grad-energy-4"));
        assert!(html.contains("mood-btn selected\" data-rating=\"3\""));
    }

    #[test]
    fn recent_section_hidden_when_empty() {
        let html = render_index(None, &[]);
        assert!(html.contains("<div id=\"recent-slot\"></div>"));
    }

    #[test]
    fn recent_section_lists_entries() {
        let recent = vec![RecentEntry {
            date: "2024-03-01".to_string(),
            display_date: "Mar 1, 2024".to_string(),
            emoji: "😊",
            label: "Good",
            energy: 2,
            stress: 5,
            note: None,
        }];
        let html = render_index(None, &recent);
        assert!(html.contains("<div id=\"recent-slot\"><section class=\"recent\">"));
        assert!(html.contains("Mar 1, 2024"));
    }

    #[test]
    fn note_text_is_escaped() {
        let today = entry(Some("<script>alert(1)</script>"));
        let html = render_index(Some(&today), &[]);
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn gradient_classes_cover_both_sliders() {
        let html = render_index(None, &[]);
        for slug in ["energy", "stress"] {
            for rating in 1..=5 {
                assert!(html.contains(&format!(".grad-{slug}-{rating}")));
            }
        }
    }
}
