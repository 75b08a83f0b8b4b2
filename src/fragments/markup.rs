//! Static markup for the task dashboard.
//!
//! Each function is a pure generator: no arguments, no side effects, same
//! output every time.

pub fn styles() -> String {
    r#"<style>
:root {
  --bg: var(--vscode-editor-background, #1e1e1e);
  --fg: var(--vscode-editor-foreground, #d4d4d4);
  --muted: var(--vscode-descriptionForeground, #8b8b8b);
  --accent: var(--vscode-focusBorder, #007acc);
  --border: var(--vscode-panel-border, #333);
}
body { margin: 0; padding: 0 16px; background: var(--bg); color: var(--fg); font-family: var(--vscode-font-family, sans-serif); }
.dashboard-header, .dashboard-footer { display: flex; align-items: center; justify-content: space-between; padding: 12px 0; }
.dashboard-footer { border-top: 1px solid var(--border); color: var(--muted); font-size: 0.85em; }
.stats-bar { display: grid; grid-template-columns: repeat(4, 1fr); gap: 8px; }
.stat { padding: 8px; border: 1px solid var(--border); border-radius: 4px; }
.task-list { list-style: none; margin: 0; padding: 0; }
.task { display: flex; gap: 8px; padding: 6px 0; border-bottom: 1px solid var(--border); }
.skeleton { background: linear-gradient(90deg, var(--border) 25%, transparent 50%, var(--border) 75%); background-size: 200% 100%; animation: shimmer 1.2s infinite; border-radius: 4px; }
.skeleton-line { height: 12px; margin: 6px 0; }
.spinner { width: 18px; height: 18px; border: 2px solid var(--border); border-top-color: var(--accent); border-radius: 50%; animation: spin 0.8s linear infinite; }
.hidden { display: none; }
.toast-container { position: fixed; right: 16px; bottom: 16px; }
.modal-container { position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); }
@keyframes shimmer { from { background-position: 200% 0; } to { background-position: -200% 0; } }
@keyframes spin { to { transform: rotate(360deg); } }
</style>"#
        .to_string()
}

pub fn scripts() -> String {
    r#"<script>
(function () {
  const vscode = typeof acquireVsCodeApi === "function" ? acquireVsCodeApi() : null;
  const post = (type, payload) => vscode && vscode.postMessage({ type, payload });

  document.addEventListener("click", (event) => {
    const target = event.target.closest("[data-action]");
    if (!target) return;
    post(target.dataset.action, { id: target.dataset.id || null });
  });

  const search = document.getElementById("task-search");
  if (search) {
    search.addEventListener("input", () => post("search", { query: search.value }));
  }

  window.addEventListener("message", (event) => {
    const { type, payload } = event.data || {};
    if (type === "toast") {
      const container = document.getElementById("toast-container");
      const toast = document.createElement("div");
      toast.className = "toast";
      toast.textContent = payload.message;
      container.appendChild(toast);
      setTimeout(() => toast.remove(), 3000);
    }
  });
})();
</script>"#
        .to_string()
}

pub fn header() -> String {
    r#"<header class="dashboard-header">
  <h1>Tasks</h1>
  <div class="header-actions">
    <button data-action="refresh" title="Refresh">Refresh</button>
    <button data-action="newTask" title="New task">New</button>
  </div>
</header>"#
        .to_string()
}

pub fn footer() -> String {
    r#"<footer class="dashboard-footer">
  <span>Task Dashboard</span>
  <button data-action="openSettings">Settings</button>
</footer>"#
        .to_string()
}

pub fn stats_bar() -> String {
    r#"<section class="stats-bar" id="stats-bar">
  <div class="stat"><span class="stat-label">Total</span><span class="stat-value" data-stat="total">0</span></div>
  <div class="stat"><span class="stat-label">Open</span><span class="stat-value" data-stat="open">0</span></div>
  <div class="stat"><span class="stat-label">In progress</span><span class="stat-value" data-stat="inProgress">0</span></div>
  <div class="stat"><span class="stat-label">Done</span><span class="stat-value" data-stat="done">0</span></div>
</section>"#
        .to_string()
}

pub fn task_list_section() -> String {
    r#"<section class="task-list-section">
  <h2>Tasks</h2>
  <ul class="task-list" id="task-list"></ul>
</section>"#
        .to_string()
}

pub fn filter_bar() -> String {
    r#"<nav class="filter-bar">
  <button data-action="filter" data-id="all" class="active">All</button>
  <button data-action="filter" data-id="open">Open</button>
  <button data-action="filter" data-id="inProgress">In progress</button>
  <button data-action="filter" data-id="done">Done</button>
</nav>"#
        .to_string()
}

pub fn search_box() -> String {
    r#"<div class="search-box">
  <input id="task-search" type="search" placeholder="Search tasks" aria-label="Search tasks" />
</div>"#
        .to_string()
}

pub fn empty_state() -> String {
    r#"<div class="empty-state hidden" id="empty-state">
  <p>No tasks yet.</p>
  <button data-action="newTask">Create your first task</button>
</div>"#
        .to_string()
}

pub fn loading_spinner() -> String {
    r#"<div class="loading hidden" id="loading"><div class="spinner" role="status" aria-label="Loading"></div></div>"#
        .to_string()
}

pub fn error_banner() -> String {
    r#"<div class="error-banner hidden" id="error-banner" role="alert">
  <span class="error-message"></span>
  <button data-action="retry">Retry</button>
</div>"#
        .to_string()
}

pub fn skeleton_task() -> String {
    r#"<li class="task task-skeleton">
  <div class="skeleton skeleton-line" style="width: 16px"></div>
  <div class="skeleton skeleton-line" style="width: 60%"></div>
</li>"#
        .to_string()
}

pub fn skeleton_task_list() -> String {
    let rows = skeleton_task().repeat(5);
    format!("<ul class=\"task-list skeleton-list\" id=\"skeleton-list\">{rows}</ul>")
}

pub fn skeleton_stats() -> String {
    let cell = r#"<div class="stat"><div class="skeleton skeleton-line" style="width: 40%"></div></div>"#;
    format!("<section class=\"stats-bar skeleton-stats\">{}</section>", cell.repeat(4))
}

pub fn skeleton_header() -> String {
    r#"<header class="dashboard-header skeleton-header">
  <div class="skeleton skeleton-line" style="width: 120px; height: 20px"></div>
</header>"#
        .to_string()
}

pub fn progress_section() -> String {
    r#"<section class="progress-section">
  <h2>Progress</h2>
  <progress id="task-progress" max="100" value="0"></progress>
  <span id="task-progress-label">0%</span>
</section>"#
        .to_string()
}

pub fn activity_section() -> String {
    r#"<section class="activity-section">
  <h2>Recent activity</h2>
  <ol class="activity-list" id="activity-list"></ol>
</section>"#
        .to_string()
}

pub fn settings_panel() -> String {
    r#"<aside class="settings-panel hidden" id="settings-panel">
  <h2>Settings</h2>
  <label><input type="checkbox" data-setting="showCompleted" /> Show completed tasks</label>
  <label><input type="checkbox" data-setting="compactMode" /> Compact mode</label>
  <button data-action="closeSettings">Close</button>
</aside>"#
        .to_string()
}

pub fn help_section() -> String {
    r#"<details class="help-section">
  <summary>Help</summary>
  <p>Click a task to open it. Use the filter bar to narrow the list and the search box to find tasks by title.</p>
</details>"#
        .to_string()
}

pub fn toast_container() -> String {
    r#"<div class="toast-container" id="toast-container" aria-live="polite"></div>"#.to_string()
}

pub fn modal_container() -> String {
    r#"<div class="modal-container hidden" id="modal-container" role="dialog" aria-modal="true"></div>"#
        .to_string()
}
