pub const HOME_STYLES: &str = r#"
.home {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  padding: var(--space-8) 0;
}

.home-header {
  text-align: center;
}

.home-header h1 {
  font-size: 2.25rem;
  font-weight: 700;
}

.subtitle {
  margin-top: var(--space-2);
  color: var(--text-secondary);
}

.animal-picker {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-4);
}

.animal-card {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: var(--space-6);
  border: 1px solid var(--border);
  border-radius: var(--radius-2xl);
  background-color: var(--surface);
  color: var(--text-primary);
  transition: border-color var(--transition-fast) var(--easing-standard);
}

.animal-card:hover {
  border-color: var(--primary);
  text-decoration: none;
}

.animal-card h3 {
  font-size: 1.25rem;
  font-weight: 600;
}

.animal-card p {
  margin-top: var(--space-1);
  color: var(--text-secondary);
}

.animal-badge {
  display: grid;
  place-items: center;
  width: 40px;
  height: 40px;
  border-radius: var(--radius-full);
  background-color: rgba(59, 130, 246, 0.1);
  color: var(--primary);
  font-weight: 700;
}

.divider {
  display: flex;
  align-items: center;
  margin: var(--space-8) 0;
}

.divider hr {
  flex-grow: 1;
  border: none;
  border-top: 1px solid var(--border);
}

.divider span {
  margin: 0 var(--space-4);
  color: var(--text-tertiary);
  font-weight: 500;
}

.model-note code {
  padding: var(--space-1) var(--space-2);
}

.connectivity {
  display: flex;
  justify-content: center;
}

.uploader {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.upload-label {
  display: block;
  width: 100%;
  cursor: pointer;
}

.upload-label.busy {
  cursor: not-allowed;
}

.upload-dropzone {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  height: 128px;
  padding: var(--space-4);
  border: 2px dashed var(--primary);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
}

.upload-dropzone.busy {
  background-color: var(--surface-raised);
}

.result-card {
  margin-top: var(--space-6);
  padding: var(--space-6);
  border: 1px solid rgba(34, 197, 94, 0.2);
  border-radius: var(--radius-xl);
  background-color: rgba(34, 197, 94, 0.1);
}

.result-card h3 {
  margin-bottom: var(--space-4);
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--success);
}

.result-fields p + p {
  margin-top: var(--space-2);
}

.result-image {
  max-width: 100%;
  height: auto;
  margin-top: var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
}

.result-actions {
  display: flex;
  gap: var(--space-2);
  margin-top: var(--space-4);
}
"#;

pub const GALLERY_STYLES: &str = r#"
.animal-page,
.details-page {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: var(--space-6);
}

.bento-grid {
  display: grid;
  grid-template-columns: repeat(6, 1fr);
  grid-auto-rows: 140px;
  gap: var(--space-4);
}

.bento-tile {
  position: relative;
  overflow: hidden;
  border-radius: var(--radius-xl);
  background-color: var(--surface);
}

.bento-tile img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.fact-sheet {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.fact-sheet h1 {
  font-size: 1.875rem;
  font-weight: 600;
}

.fact-description {
  color: var(--text-secondary);
}

.details-preview {
  display: flex;
  flex-direction: column;
  min-width: 0;
}

.preview-frame {
  position: relative;
  width: 100%;
  aspect-ratio: 4 / 3;
  overflow: hidden;
  border-radius: var(--radius-xl);
  background-color: var(--surface);
}

.preview-frame img {
  width: 100%;
  height: 100%;
  object-fit: contain;
}

.preview-missing {
  position: absolute;
  inset: 0;
  display: grid;
  place-content: center;
  text-align: center;
  color: var(--text-tertiary);
}

.hint {
  margin-top: var(--space-1);
  font-size: 0.875rem;
}

.exif-list {
  max-height: 128px;
  overflow-y: auto;
  font-size: 0.75rem;
}

.details-error,
.not-found {
  display: grid;
  place-items: center;
  gap: var(--space-4);
  min-height: 400px;
  text-align: center;
}

@media (max-width: 1024px) {
  .animal-page,
  .details-page {
    grid-template-columns: 1fr;
  }

  .bento-grid {
    grid-template-columns: 1fr;
  }

  .bento-tile {
    grid-column: auto !important;
  }
}
"#;
