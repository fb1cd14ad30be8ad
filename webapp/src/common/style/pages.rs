pub const PAGE_STYLES: &str = r#"
.section {
  padding: var(--space-16) 0;
}

.section.muted {
  background-color: var(--surface-muted);
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  text-align: center;
}

.section-subtitle {
  max-width: 640px;
  margin: var(--space-2) auto var(--space-12);
  color: var(--text-secondary);
  text-align: center;
}

/* Hero */
.hero {
  padding: var(--space-16) 0;
  background: linear-gradient(135deg, var(--primary-dark), var(--primary));
  color: white;
  text-align: center;
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  letter-spacing: -0.02em;
}

.hero-subtitle {
  max-width: 720px;
  margin: var(--space-4) auto var(--space-8);
  font-size: 1.25rem;
  opacity: 0.9;
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
  flex-wrap: wrap;
}

.hero .btn-secondary {
  color: white;
  border-color: rgba(255, 255, 255, 0.5);
}

.feature-icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  border-radius: var(--radius-md);
  background-color: var(--surface-muted);
  color: var(--primary);
}

/* Pricing */
.pricing-card.featured {
  border-color: var(--primary);
  box-shadow: var(--shadow-lg);
}

.pricing-price {
  font-size: 2rem;
  font-weight: 700;
  margin: var(--space-3) 0;
}

.pricing-features {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  margin: var(--space-4) 0 var(--space-6);
}

.pricing-features li {
  display: flex;
  gap: var(--space-2);
  color: var(--text-secondary);
}

.pricing-features .icon {
  color: var(--success);
}

/* Team */
.team-role {
  color: var(--primary);
  font-weight: 500;
}

/* Product detail */
.breadcrumbs {
  display: flex;
  gap: var(--space-2);
  color: var(--text-tertiary);
  font-size: 0.875rem;
  margin-bottom: var(--space-4);
}

.detail-title {
  font-size: 2.5rem;
  font-weight: 700;
}

.detail-lead {
  max-width: 720px;
  margin: var(--space-4) 0 var(--space-8);
  font-size: 1.125rem;
  color: var(--text-secondary);
}

/* Contact */
.contact-form {
  display: grid;
  gap: var(--space-4);
  max-width: 560px;
  margin: 0 auto;
}

.contact-form label {
  display: grid;
  gap: var(--space-1);
  font-weight: 500;
}

.contact-form input,
.contact-form textarea {
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
}

.form-notice {
  padding: var(--space-4);
  border-radius: var(--radius-md);
  background-color: var(--surface-muted);
  text-align: center;
}

/* Not found */
.not-found {
  padding: var(--space-16) 0;
  text-align: center;
}

.not-found-code {
  font-size: 5rem;
  font-weight: 700;
  color: var(--primary);
}

@media (max-width: 767px) {
  .hero-title {
    font-size: 2.25rem;
  }

  .section {
    padding: var(--space-12) 0;
  }
}
"#;
