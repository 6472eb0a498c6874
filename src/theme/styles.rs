//! Global CSS styles for RegAI.
//!
//! Earthy greens on a warm off-white, with the plan results typeset to
//! match the classes emitted by the plan formatter.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* LEAF (Primary, Actions) */
  --leaf: #15803d;
  --leaf-dark: #166534;
  --leaf-light: #22c55e;
  --leaf-wash: #dcfce7;

  /* SOIL (Secondary, Accents) */
  --soil: #92400e;
  --soil-wash: #fef3c7;

  /* SURFACE */
  --surface: #fafaf5;
  --surface-card: #ffffff;
  --surface-border: #e5e7eb;

  /* TEXT */
  --text-primary: #1f2937;
  --text-secondary: #4b5563;
  --text-muted: #9ca3af;

  /* SEMANTIC */
  --danger: #dc2626;
  --danger-wash: #fee2e2;
  --info: #2563eb;
  --info-wash: #dbeafe;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Spacing */
  --space-xs: 0.25rem;
  --space-sm: 0.5rem;
  --space-md: 1rem;
  --space-lg: 1.5rem;
  --space-xl: 2.5rem;

  --radius: 12px;
  --shadow: 0 4px 14px rgba(21, 128, 61, 0.08);
}

/* === Base === */
*, *::before, *::after {
  box-sizing: border-box;
}

html, body {
  margin: 0;
  padding: 0;
  background: var(--surface);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
}

h1, h2, h3, h4 {
  margin: 0;
  line-height: 1.25;
}

.app-shell {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.section-header {
  font-size: 1.75rem;
  font-weight: 700;
  color: var(--leaf-dark);
  margin-bottom: var(--space-md);
}

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: var(--surface-card);
  border-bottom: 1px solid var(--surface-border);
}

.nav-header-inner {
  max-width: 1100px;
  margin: 0 auto;
  padding: var(--space-sm) var(--space-lg);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-title {
  display: flex;
  align-items: center;
  gap: var(--space-sm);
}

.brand-mark {
  font-size: 1.5rem;
}

.app-title {
  font-size: 1.35rem;
  font-weight: 800;
  color: var(--leaf);
}

.nav-links {
  display: flex;
  gap: var(--space-xs);
}

.nav-link {
  background: none;
  border: none;
  padding: var(--space-sm) var(--space-md);
  border-radius: 999px;
  font: inherit;
  color: var(--text-secondary);
  cursor: pointer;
}

.nav-link:hover {
  background: var(--leaf-wash);
}

.nav-link.active {
  background: var(--leaf);
  color: white;
}

/* === Buttons === */
.btn-primary,
.btn-secondary {
  font: inherit;
  font-weight: 600;
  border-radius: var(--radius);
  padding: 0.7rem 1.4rem;
  cursor: pointer;
  transition: background 0.15s ease;
}

.btn-primary {
  background: var(--leaf);
  color: white;
  border: none;
}

.btn-primary:hover:not(:disabled) {
  background: var(--leaf-dark);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-secondary {
  background: transparent;
  color: var(--leaf-dark);
  border: 1px solid var(--leaf);
}

.btn-link {
  background: none;
  border: none;
  padding: 0;
  font: inherit;
  color: var(--leaf);
  text-decoration: underline;
  cursor: pointer;
}

/* === Loading === */
.loading-placeholder,
.plan-loading {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-md);
  padding: var(--space-xl);
  color: var(--text-secondary);
}

.spinner {
  width: 40px;
  height: 40px;
  border: 4px solid var(--leaf-wash);
  border-top-color: var(--leaf);
  border-radius: 50%;
  animation: spin 0.9s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Landing === */
.landing {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 var(--space-lg);
}

.hero {
  text-align: center;
  padding: var(--space-xl) 0;
}

.hero-badge {
  display: inline-block;
  padding: var(--space-xs) var(--space-md);
  border-radius: 999px;
  background: var(--soil-wash);
  color: var(--soil);
  font-size: 0.85rem;
  font-weight: 600;
}

.hero-title {
  font-size: 2.75rem;
  font-weight: 800;
  margin: var(--space-lg) 0 var(--space-md);
}

.hero-title .accent {
  color: var(--leaf);
}

.hero-subtitle {
  max-width: 680px;
  margin: 0 auto;
  color: var(--text-secondary);
  font-size: 1.1rem;
}

.hero-pillars {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: var(--space-sm);
  margin: var(--space-lg) 0;
}

.pill {
  padding: var(--space-xs) var(--space-md);
  border-radius: 999px;
  background: var(--leaf-wash);
  color: var(--leaf-dark);
  font-size: 0.9rem;
}

.btn-hero {
  font-size: 1.1rem;
  padding: 0.9rem 2rem;
}

.landing-section {
  padding: var(--space-xl) 0;
  border-top: 1px solid var(--surface-border);
}

.section-lead {
  color: var(--text-secondary);
  margin-bottom: var(--space-lg);
}

.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
  gap: var(--space-lg);
}

.feature-card {
  background: var(--surface-card);
  border: 1px solid var(--surface-border);
  border-radius: var(--radius);
  padding: var(--space-lg);
  box-shadow: var(--shadow);
}

.feature-card h3 {
  margin: var(--space-sm) 0;
  color: var(--leaf-dark);
}

.feature-card p {
  margin: 0;
  color: var(--text-secondary);
}

.feature-icon {
  font-size: 1.8rem;
}

.requirement-list {
  margin: var(--space-sm) 0 0;
  padding-left: 1.1rem;
  color: var(--text-secondary);
}

.landing-footer {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: var(--space-lg);
  padding: var(--space-xl) 0;
  border-top: 1px solid var(--surface-border);
  color: var(--text-secondary);
}

.footer-links ul {
  list-style: none;
  margin: var(--space-sm) 0 0;
  padding: 0;
}

/* === Notices === */
.notice {
  margin: var(--space-md) 0;
  padding: var(--space-sm) var(--space-md);
  border-radius: var(--radius);
}

.notice-success {
  background: var(--leaf-wash);
  color: var(--leaf-dark);
}

.notice-error {
  background: var(--danger-wash);
  color: var(--danger);
}

.notice-info {
  background: var(--info-wash);
  color: var(--info);
}

/* === Auth === */
.auth-page {
  display: flex;
  justify-content: center;
  padding: var(--space-xl) var(--space-lg);
}

.auth-card {
  width: 100%;
  max-width: 420px;
  background: var(--surface-card);
  border-radius: var(--radius);
  padding: var(--space-xl);
  box-shadow: var(--shadow);
  display: flex;
  flex-direction: column;
  gap: var(--space-md);
}

.auth-lead {
  margin: 0;
  color: var(--text-secondary);
}

.auth-switch {
  margin: 0;
  font-size: 0.9rem;
  color: var(--text-secondary);
}

/* === Forms === */
.form-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-md) var(--space-lg);
  margin-bottom: var(--space-lg);
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: var(--space-xs);
}

.form-field label {
  font-weight: 600;
  font-size: 0.9rem;
}

.form-field input,
.form-field select,
.chat-input input {
  font: inherit;
  padding: 0.6rem 0.8rem;
  border: 1px solid var(--surface-border);
  border-radius: 8px;
  background: white;
}

.form-field input:focus,
.form-field select:focus,
.chat-input input:focus {
  outline: 2px solid var(--leaf-light);
  border-color: transparent;
}

/* === Account & Plan === */
.account-page,
.stats-page,
.chat-page {
  width: 100%;
  max-width: 1000px;
  margin: 0 auto;
  padding: var(--space-xl) var(--space-lg);
}

.account-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  margin-bottom: var(--space-lg);
}

.plan-section {
  background: var(--surface-card);
  border-radius: var(--radius);
  padding: var(--space-xl);
  box-shadow: var(--shadow);
}

.btn-generate {
  width: 100%;
  font-size: 1.05rem;
}

.plan-results {
  margin-top: var(--space-xl);
  display: flex;
  flex-direction: column;
  gap: var(--space-lg);
}

.weather-panel {
  background: var(--info-wash);
  border-radius: var(--radius);
  padding: var(--space-md) var(--space-lg);
}

.weather-panel .flex {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-md);
  margin-top: var(--space-sm);
}

.plan-content h3 {
  color: var(--leaf-dark);
  margin-bottom: var(--space-md);
}

/* Classes emitted by the plan formatter */
.plan-content .text-xl {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--leaf-dark);
  margin: var(--space-lg) 0 var(--space-sm);
}

.plan-content .text-lg {
  font-size: 1.1rem;
  font-weight: 600;
  color: var(--leaf);
  margin: var(--space-md) 0 var(--space-xs);
}

.plan-content .ml-4 {
  margin-left: var(--space-md);
}

.plan-content .mb-3 {
  margin: 0 0 var(--space-sm);
}

.formatted-plan strong {
  color: var(--soil);
}

/* === Stats === */
.stat-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: var(--space-md);
  margin-bottom: var(--space-lg);
}

.stat-card {
  display: flex;
  flex-direction: column;
  gap: var(--space-xs);
  background: var(--surface-card);
  border: 1px solid var(--surface-border);
  border-radius: var(--radius);
  padding: var(--space-md) var(--space-lg);
}

.stat-label {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.stat-value {
  font-size: 1.8rem;
  font-weight: 700;
}

.stat-trend {
  color: var(--leaf);
  font-size: 0.8rem;
}

.panel-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-lg);
}

.panel {
  background: var(--surface-card);
  border-radius: var(--radius);
  padding: var(--space-lg);
  box-shadow: var(--shadow);
}

.panel-figure {
  font-size: 2.5rem;
  font-weight: 800;
  color: var(--leaf);
  margin: var(--space-sm) 0;
}

.panel-split {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-md);
}

.share-list {
  list-style: none;
  padding: 0;
  margin: var(--space-md) 0 0;
}

.share-row {
  display: grid;
  grid-template-columns: 80px 1fr 48px;
  align-items: center;
  gap: var(--space-sm);
  margin-bottom: var(--space-sm);
}

.share-bar {
  height: 8px;
  background: var(--leaf-wash);
  border-radius: 4px;
  overflow: hidden;
}

.share-fill {
  display: block;
  height: 100%;
  background: var(--leaf);
}

.share-value {
  text-align: right;
  color: var(--text-secondary);
}

/* === Chat === */
.chat-log {
  display: flex;
  flex-direction: column;
  gap: var(--space-sm);
  min-height: 320px;
  background: var(--surface-card);
  border-radius: var(--radius);
  padding: var(--space-lg);
  box-shadow: var(--shadow);
}

.chat-empty {
  color: var(--text-muted);
  text-align: center;
  margin: auto;
}

.chat-line {
  max-width: 75%;
  padding: var(--space-sm) var(--space-md);
  border-radius: var(--radius);
  white-space: pre-wrap;
}

.chat-line.farmer {
  align-self: flex-end;
  background: var(--leaf);
  color: white;
}

.chat-line.advisor {
  align-self: flex-start;
  background: var(--leaf-wash);
}

.chat-line.pending {
  color: var(--text-muted);
}

.chat-input {
  display: flex;
  gap: var(--space-sm);
  margin-top: var(--space-md);
}

.chat-input input {
  flex: 1;
}

/* === Responsive === */
@media (max-width: 720px) {
  .form-grid,
  .panel-grid,
  .landing-footer {
    grid-template-columns: 1fr;
  }

  .hero-title {
    font-size: 2rem;
  }
}
"#;
