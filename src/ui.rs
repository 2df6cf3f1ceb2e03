use crate::api::detect_platform;
use crate::controller::{Mode, UiState};
use crate::form::FormState;
use crate::models::{Sentiment, SummaryResult};

pub struct PageView<'a> {
    pub ui: &'a UiState,
    pub form: &'a FormState,
    pub remaining: u32,
    pub max: u32,
}

/// The result view when a summary is present, otherwise the input form.
pub fn render_index(view: &PageView<'_>) -> String {
    let body = match &view.ui.summary {
        Some(summary) => render_summary(summary),
        None => render_form(view),
    };
    // Re-poll while a submission from another request is still running.
    let refresh = if view.ui.mode() == Mode::Loading {
        r#"<meta http-equiv="refresh" content="2" />"#
    } else {
        ""
    };

    INDEX_HTML
        .replace("{{REFRESH}}", refresh)
        .replace("{{BODY}}", &body)
}

pub fn render_form(view: &PageView<'_>) -> String {
    let PageView {
        ui,
        form,
        remaining,
        max,
    } = view;
    let locked = ui.is_loading || *remaining == 0;
    let input_disabled = if locked { " disabled" } else { "" };
    let submit_disabled = if locked || form.url.trim().is_empty() {
        " disabled"
    } else {
        ""
    };

    let badge = if form.url.is_empty() {
        r#"<span id="platform" class="badge" hidden></span>"#.to_string()
    } else {
        format!(
            r#"<span id="platform" class="badge">{}</span>"#,
            detect_platform(&form.url)
        )
    };

    let form_error = form
        .error
        .as_deref()
        .map(|message| format!(r#"<div class="form-error" id="form-error">{}</div>"#, html_escape(message)))
        .unwrap_or_default();

    let banner = ui
        .error
        .as_deref()
        .map(|message| format!(r#"<div class="banner" id="api-error" role="alert">{}</div>"#, html_escape(message)))
        .unwrap_or_default();

    let overlay_hidden = if ui.is_loading { "" } else { " hidden" };
    let button_label = if ui.is_loading {
        "Summarizing..."
    } else {
        "Summarize Thread"
    };

    format!(
        r#"<section class="panel">
      <span class="quota" id="remaining">{remaining}/{max} requests left today</span>
    </section>
    {banner}
    <form id="summarize-form" method="post" action="/summarize">
      <label for="url">Thread URL</label>
      <input type="url" id="url" name="url" value="{url}" placeholder="https://www.reddit.com/r/programming/comments/... or https://news.ycombinator.com/item?id=..."{input_disabled} />
      <div class="badge-row">{badge}</div>
      {form_error}
      <button class="btn-primary" id="submit" type="submit"{submit_disabled}>{button_label}</button>
    </form>
    <div class="overlay" id="loading"{overlay_hidden}><div class="spinner"></div><p>Summarizing...</p></div>"#,
        url = html_escape(&form.url),
    )
}

pub fn render_summary(summary: &SummaryResult) -> String {
    let insights: String = summary
        .top_insights
        .iter()
        .enumerate()
        .map(|(index, insight)| {
            format!(
                r#"<li><span class="index">{}</span><p>{}</p></li>"#,
                index + 1,
                html_escape(insight)
            )
        })
        .collect();

    format!(
        r#"<header>
      <h2>Thread Analysis Complete</h2>
      <p class="subtitle">AI-powered insights from the discussion thread</p>
    </header>
    <section class="card" id="summary">
      <h3>Thread Summary</h3>
      <p>{summary_text}</p>
    </section>
    <section class="card" id="insights">
      <h3>Top Insights</h3>
      <ol class="insights">{insights}</ol>
    </section>
    <section class="split">
      <div class="card" id="consensus">
        <h3>Consensus View</h3>
        <p>{consensus}</p>
      </div>
      <div class="card" id="controversial">
        <h3>Controversial Points</h3>
        <p>{controversial}</p>
      </div>
    </section>
    {sentiment}
    <form method="post" action="/new" class="again">
      <button class="btn-primary" id="new-summary" type="submit">Summarize Another Thread</button>
    </form>"#,
        summary_text = html_escape(&summary.summary),
        consensus = html_escape(&summary.consensus),
        controversial = html_escape(&summary.controversial),
        sentiment = render_sentiment(&summary.sentiment),
    )
}

/// Empty when the service reported no sentiment at all.
pub fn render_sentiment(sentiment: &Sentiment) -> String {
    if sentiment.total() <= 0.0 {
        return String::new();
    }
    let Sentiment {
        positive,
        negative,
        neutral,
    } = sentiment;

    format!(
        r#"<section class="card" id="sentiment">
      <h3>Sentiment Analysis</h3>
      <div class="sentiment-stats">
        <div class="stat"><span class="value">{positive}%</span><span class="label">Positive</span></div>
        <div class="stat"><span class="value">{neutral}%</span><span class="label">Neutral</span></div>
        <div class="stat"><span class="value">{negative}%</span><span class="label">Negative</span></div>
      </div>
      <div class="bar">
        <div class="seg positive" style="width: {positive}%"></div>
        <div class="seg neutral" style="width: {neutral}%"></div>
        <div class="seg negative" style="width: {negative}%"></div>
      </div>
    </section>"#
    )
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  {{REFRESH}}
  <title>Thread Summarizer</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef7f5;
      --bg-2: #b9e3da;
      --ink: #1f2a2b;
      --accent: #0f766e;
      --accent-2: #2dd4bf;
      --accent-3: #99f6e4;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(15, 118, 110, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f4f0 60%, #f4faf9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      position: relative;
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    h2 {
      margin: 0;
      font-size: 1.6rem;
    }

    h3 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5c6b69;
    }

    .panel {
      text-align: center;
    }

    .quota,
    .badge {
      display: inline-flex;
      padding: 6px 14px;
      border-radius: 999px;
      font-size: 0.85rem;
      font-weight: 600;
      background: #ccfbf1;
      color: #115e59;
      border: 1px solid #99f6e4;
    }

    form {
      display: grid;
      gap: 12px;
    }

    label {
      font-size: 0.9rem;
      color: #5c6b69;
    }

    input {
      width: 100%;
      padding: 16px 20px;
      border-radius: 16px;
      border: 2px solid rgba(15, 118, 110, 0.15);
      font-size: 1.05rem;
      font-family: inherit;
    }

    .badge-row {
      min-height: 1.6em;
    }

    .form-error,
    .banner {
      padding: 12px 16px;
      border-radius: 12px;
      background: #fdecea;
      color: #b42318;
      font-size: 0.95rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(15, 118, 110, 0.3);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 24px;
      border: 1px solid rgba(15, 118, 110, 0.08);
    }

    .card p {
      margin: 0;
      line-height: 1.6;
    }

    .split {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
    }

    .insights {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 12px;
    }

    .insights li {
      display: flex;
      gap: 14px;
      align-items: flex-start;
    }

    .insights .index {
      flex-shrink: 0;
      width: 32px;
      height: 32px;
      border-radius: 999px;
      display: grid;
      place-items: center;
      background: #ccfbf1;
      color: var(--accent);
      font-weight: 600;
    }

    .sentiment-stats {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 12px;
      text-align: center;
      margin-bottom: 16px;
    }

    .stat {
      display: grid;
      gap: 4px;
      padding: 14px;
      border-radius: 14px;
      background: #f0fdfa;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent);
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #5c6b69;
    }

    .bar {
      display: flex;
      height: 12px;
      border-radius: 999px;
      overflow: hidden;
      background: #e5e7eb;
    }

    .seg.positive { background: var(--accent); }
    .seg.neutral { background: var(--accent-2); }
    .seg.negative { background: var(--accent-3); }

    .again {
      justify-items: center;
    }

    .overlay {
      position: absolute;
      inset: 0;
      border-radius: 28px;
      background: rgba(255, 255, 255, 0.8);
      display: grid;
      place-content: center;
      justify-items: center;
      gap: 12px;
    }

    .overlay[hidden] {
      display: none;
    }

    .spinner {
      width: 36px;
      height: 36px;
      border-radius: 999px;
      border: 3px solid #ccfbf1;
      border-top-color: var(--accent);
      animation: spin 900ms linear infinite;
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
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
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Thread Summarizer</h1>
      <p class="subtitle">Paste a Reddit or Hacker News thread and get the gist of the discussion.</p>
    </header>

    {{BODY}}
  </main>

  <script>
    const form = document.getElementById('summarize-form');
    if (form) {
      const input = document.getElementById('url');
      const submit = document.getElementById('submit');
      const badge = document.getElementById('platform');
      const overlay = document.getElementById('loading');
      const locked = input.disabled;

      const updatePlatform = async () => {
        const value = input.value;
        submit.disabled = locked || value.trim() === '';
        if (!value) {
          badge.hidden = true;
          return;
        }
        const res = await fetch('/api/platform?url=' + encodeURIComponent(value));
        if (!res.ok) {
          return;
        }
        const data = await res.json();
        if (input.value === value) {
          badge.textContent = data.platform;
          badge.hidden = false;
        }
      };

      input.addEventListener('input', () => {
        updatePlatform().catch(() => {});
      });

      form.addEventListener('submit', () => {
        overlay.hidden = false;
        submit.disabled = true;
        submit.textContent = 'Summarizing...';
      });
    }
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> SummaryResult {
        SummaryResult {
            summary: "People argue about <tabs> & spaces".to_string(),
            top_insights: vec!["First".to_string(), "Second".to_string()],
            consensus: "Use a formatter".to_string(),
            controversial: "Line length".to_string(),
            sentiment: Sentiment {
                positive: 50.0,
                negative: 20.0,
                neutral: 30.0,
            },
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(html_escape(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn result_view_replaces_form() {
        let ui = UiState {
            summary: Some(summary()),
            ..UiState::default()
        };
        let form = FormState::default();
        let html = render_index(&PageView {
            ui: &ui,
            form: &form,
            remaining: 4,
            max: 5,
        });
        assert!(html.contains("People argue about &lt;tabs&gt; &amp; spaces"));
        assert!(html.contains(r#"<span class="index">2</span><p>Second</p>"#));
        assert!(html.contains("Summarize Another Thread"));
        assert!(!html.contains(r#"id="summarize-form""#));
        assert!(html.contains("width: 50%"));
    }

    #[test]
    fn form_shows_errors_badge_and_quota() {
        let ui = UiState {
            error: Some("rate limited upstream".to_string()),
            ..UiState::default()
        };
        let form = FormState {
            url: "https://news.ycombinator.com/item?id=1".to_string(),
            error: None,
        };
        let html = render_form(&PageView {
            ui: &ui,
            form: &form,
            remaining: 3,
            max: 5,
        });
        assert!(html.contains("3/5 requests left today"));
        assert!(html.contains(r#"role="alert">rate limited upstream</div>"#));
        assert!(html.contains(r#"<span id="platform" class="badge">Hacker News</span>"#));
        assert!(!html.contains("disabled"));
        assert!(html.contains(r#"id="loading" hidden"#));
    }

    #[test]
    fn form_is_locked_while_loading_or_out_of_quota() {
        let form = FormState {
            url: "https://www.reddit.com/r/x/comments/1".to_string(),
            error: None,
        };
        let loading = UiState {
            is_loading: true,
            ..UiState::default()
        };
        let html = render_form(&PageView {
            ui: &loading,
            form: &form,
            remaining: 3,
            max: 5,
        });
        assert!(html.contains(r#"placeholder="https://www.reddit.com/r/programming/comments/... or https://news.ycombinator.com/item?id=..." disabled"#));
        assert!(html.contains(r#"id="loading"><div class="spinner">"#));

        let idle = UiState::default();
        let html = render_form(&PageView {
            ui: &idle,
            form: &form,
            remaining: 0,
            max: 5,
        });
        assert!(html.contains(r#"type="submit" disabled>Summarize Thread"#));
    }

    #[test]
    fn blank_field_disables_submit_and_hides_badge() {
        let ui = UiState::default();
        let form = FormState::default();
        let html = render_form(&PageView {
            ui: &ui,
            form: &form,
            remaining: 5,
            max: 5,
        });
        assert!(html.contains(r#"type="submit" disabled>"#));
        assert!(html.contains(r#"class="badge" hidden"#));
    }

    #[test]
    fn zero_sentiment_is_omitted() {
        assert!(render_sentiment(&Sentiment::default()).is_empty());
    }
}
