//! Global CSS styles for the contact form.
//!
//! Class names are shared with `byggservice-ui`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --paper: #f7f5f0;
  --card: #ffffff;
  --border: #d9d4c7;

  /* BRAND */
  --timber: #8a5a2b;
  --timber-dark: #6b4420;
  --slate: #2f3a40;

  /* TEXT */
  --text-primary: #1f2428;
  --text-secondary: rgba(31, 36, 40, 0.7);
  --text-muted: rgba(31, 36, 40, 0.5);

  /* SEMANTIC */
  --danger: #c0392b;
  --warning: #d98e04;
  --success: #2e7d32;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Roboto, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Page === */
.contact-page {
  display: flex;
  justify-content: center;
  padding: 3rem 1.5rem;
}

.contact {
  width: 100%;
  max-width: 560px;
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--slate);
}

.lead {
  margin: 0.5rem 0 2rem;
  color: var(--text-secondary);
}

/* === Form === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 2rem;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.form-group label {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--slate);
}

.form-control {
  font: inherit;
  padding: 0.65rem 0.8rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  background: var(--card);
  color: var(--text-primary);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-control:focus {
  outline: none;
  border-color: var(--timber);
  box-shadow: 0 0 0 3px rgba(138, 90, 43, 0.15);
}

.form-control.invalid {
  border-color: var(--danger);
}

textarea.form-control {
  resize: vertical;
  min-height: 8rem;
}

.field-error {
  min-height: 1.1rem;
  font-size: var(--text-sm);
  color: var(--danger);
}

/* Off-screen rather than display:none so bots still fill it */
.honeypot {
  position: absolute;
  left: -10000px;
  width: 1px;
  height: 1px;
  overflow: hidden;
}

/* === Word Counter === */
.word-counter {
  align-self: flex-end;
  font-size: var(--text-sm);
  color: var(--text-muted);
  transition: color var(--transition-fast);
}

.word-counter.warn {
  color: var(--warning);
}

.word-counter.exceeded {
  color: var(--danger);
  font-weight: 600;
}

/* === Buttons === */
.btn {
  font: inherit;
  font-weight: 600;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.7rem 1.4rem;
  border-radius: 6px;
  border: 1px solid transparent;
  cursor: pointer;
  text-decoration: none;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn:hover {
  transform: translateY(-1px);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
  transform: none;
}

.btn-primary {
  background: var(--timber);
  color: #ffffff;
}

.btn-primary:hover {
  background: var(--timber-dark);
}

.btn-secondary {
  background: transparent;
  border-color: var(--border);
  color: var(--slate);
}

.btn-call {
  background: var(--slate);
  color: #ffffff;
}

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(20, 24, 27, 0.6);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
  animation: fade-in var(--transition-normal);
}

.modal-overlay:focus {
  outline: none;
}

.modal {
  background: var(--card);
  border-radius: 8px;
  border-top: 4px solid var(--slate);
  max-width: 440px;
  width: 100%;
  padding: 2rem;
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
}

.modal.success {
  border-top-color: var(--success);
}

.modal.error {
  border-top-color: var(--danger);
}

.modal-title {
  font-size: var(--text-xl);
  margin-bottom: 0.75rem;
}

.modal-message {
  color: var(--text-secondary);
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
  margin-top: 1.5rem;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
