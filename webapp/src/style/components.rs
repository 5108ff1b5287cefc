pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 500;
  cursor: pointer;
  border: none;
  outline: none;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.btn:focus {
  box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.3);
}

.btn-primary {
  background-color: rgba(59, 130, 246, 0.15);
  color: var(--primary-light);
}

.btn-primary:hover {
  background-color: rgba(59, 130, 246, 0.3);
  text-decoration: none;
}

.btn-secondary {
  background-color: var(--surface-raised);
  color: var(--text-primary);
}

.btn-secondary:hover {
  background-color: var(--neutral-700);
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

/* Panels */
.panel {
  padding: var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-xl);
  background-color: var(--surface);
}

.panel h3 {
  font-weight: 500;
}

.panel ul {
  list-style: none;
  margin-top: var(--space-2);
  font-size: 0.875rem;
}

.panel li + li {
  margin-top: var(--space-1);
}

.fact-label {
  color: var(--text-tertiary);
}

/* Badges */
.badge {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.8125rem;
}

.badge-pending {
  background-color: var(--surface-raised);
  color: var(--text-secondary);
}

.badge-ok {
  background-color: rgba(34, 197, 94, 0.12);
  color: var(--success);
}

.badge-error {
  background-color: rgba(239, 68, 68, 0.12);
  color: var(--error);
}

/* Status banner */
.status-banner {
  margin-top: var(--space-4);
  padding: var(--space-4);
  border-radius: var(--radius-lg);
}

.status-ok {
  background-color: rgba(34, 197, 94, 0.1);
  border: 1px solid rgba(34, 197, 94, 0.2);
  color: var(--success);
}

.status-error {
  background-color: rgba(239, 68, 68, 0.1);
  border: 1px solid rgba(239, 68, 68, 0.2);
  color: var(--error);
}
"#;
