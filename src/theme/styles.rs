//! Global CSS styles for the MSI site.
//!
//! Red-on-white brochure theme. Breakpoint for the mobile menu is 768px.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND RED */
  --red: #dc2626;
  --red-dark: #b91c1c;
  --red-deep: #991b1b;
  --red-tint: #fecaca;

  /* NEUTRALS */
  --white: #ffffff;
  --grey-50: #f9fafb;
  --grey-100: #f3f4f6;
  --grey-600: #4b5563;
  --grey-800: #1f2937;

  /* OVERLAYS */
  --hero-shade: rgba(0, 0, 0, 0.5);
  --backdrop: rgba(0, 0, 0, 0.5);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Motion */
  --transition-fast: 200ms ease;
  --transition-normal: 300ms ease;
  --panel-width: 300px;
}

/* === Reset === */
*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
  margin: 0;
  font-family: var(--font-sans);
  color: var(--grey-800);
  background: var(--grey-50);
  line-height: 1.6;
}

img { max-width: 100%; display: block; }

a { color: inherit; text-decoration: none; }

.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1rem;
}

.centered { text-align: center; }
.narrow { max-width: 720px; }

/* === Icons === */
.icon { width: 1.25rem; height: 1.25rem; }
.icon.inline { display: inline-block; vertical-align: -0.25rem; margin-right: 0.5rem; }
.icon-lg { width: 1.5rem; height: 1.5rem; }
.icon-xl { width: 2.5rem; height: 2.5rem; color: var(--red); margin: 0 auto 1rem; }

/* === Buttons === */
.btn-primary,
.btn-outline,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem 1.25rem;
  border-radius: 0.375rem;
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-primary { background: var(--red); color: var(--white); border: none; }
.btn-primary:hover { background: var(--red-dark); }

.btn-outline { background: transparent; color: var(--white); border: 2px solid var(--white); }
.btn-outline.dark { color: var(--red); border-color: var(--red); }

.btn-ghost { background: transparent; color: var(--grey-600); border: none; }
.btn-ghost:hover { color: var(--grey-800); }

.btn-lg { padding: 0.75rem 2rem; font-size: 1.125rem; }
.btn-block { width: 100%; font-size: 1.125rem; }

.pop:hover { transform: scale(1.05); }
.pop:active { transform: scale(0.95); }

.icon-btn {
  background: none;
  border: none;
  padding: 0.5rem;
  border-radius: 0.375rem;
  cursor: pointer;
  color: inherit;
}

/* === Header === */
.site-header {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.header-transparent { background: transparent; }

.header-opaque {
  background: var(--white);
  box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
}

.header-inner {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding-top: 1rem;
  padding-bottom: 1rem;
}

.logo-mark {
  font-size: 1.75rem;
  font-weight: 800;
  letter-spacing: 0.05em;
  color: var(--red);
}

.desktop-nav { display: flex; gap: 2rem; }

.nav-link {
  position: relative;
  font-size: 0.875rem;
  font-weight: 500;
  transition: color var(--transition-fast);
}

.nav-link.text-light { color: var(--white); }
.nav-link.text-light:hover { color: var(--red-tint); }
.nav-link.text-dark { color: var(--grey-800); }
.nav-link.text-dark:hover { color: var(--red); }
.nav-link.active { color: var(--red); }

.active-indicator {
  position: absolute;
  left: 0;
  right: 0;
  bottom: -0.25rem;
  height: 2px;
  background: var(--red);
}

.header-actions { display: flex; align-items: center; gap: 1rem; }

.phone-link { font-size: 0.875rem; }
.phone-link.text-light { color: var(--white); }
.phone-link.text-dark { color: var(--grey-600); }

.menu-icon { display: none; position: relative; z-index: 60; }
.menu-icon.text-light { color: var(--white); }
.menu-icon.text-dark { color: var(--grey-600); }
.menu-icon.close { color: var(--grey-800); }

/* === Mobile Panel === */
.mobile-backdrop {
  position: fixed;
  inset: 0;
  background: var(--backdrop);
  z-index: 40;
  animation: fade-backdrop 200ms ease-out;
}

.mobile-panel {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  width: var(--panel-width);
  background: var(--white);
  z-index: 55;
  display: flex;
  flex-direction: column;
  box-shadow: -10px 0 25px rgba(0, 0, 0, 0.15);
  transform: translateX(100%);
  transition: transform var(--transition-normal);
}

.mobile-panel.open { transform: translateX(0); }

.mobile-panel-links {
  flex: 1;
  overflow-y: auto;
  padding: 5rem 1.5rem 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.mobile-link {
  font-size: 1.125rem;
  font-weight: 500;
  color: var(--grey-800);
  transition: color var(--transition-fast);
}

.mobile-link:hover,
.mobile-link.active { color: var(--red); }

.mobile-panel-footer {
  border-top: 1px solid var(--grey-100);
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.mobile-phone { display: flex; align-items: center; gap: 0.75rem; color: var(--grey-600); font-size: 1.125rem; }

@keyframes fade-backdrop {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Hero === */
.hero {
  position: relative;
  height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  color: var(--white);
  background: linear-gradient(to right, var(--red), var(--red-deep));
}

.hero-image { position: absolute; inset: 0; }
.hero-image img { width: 100%; height: 100%; object-fit: cover; }
.hero-overlay { position: absolute; inset: 0; background: var(--hero-shade); }

.hero-content { position: relative; z-index: 1; text-align: center; }
.hero-title { font-size: clamp(2.5rem, 7vw, 4.5rem); font-weight: 700; margin: 0 0 1.5rem; }
.hero-subtitle { font-size: clamp(1.25rem, 2.5vw, 1.5rem); margin: 0 0 2rem; }

.page-banner {
  padding: 8rem 0 4rem;
  color: var(--white);
  background: linear-gradient(to right, var(--red), var(--red-deep));
}

.page-banner h1 { font-size: 2.5rem; margin: 0 0 0.5rem; }

/* Entrance animation for above-the-fold content */
.rise { animation: rise 500ms ease-out both; }

@keyframes rise {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Scroll Reveal === */
.fade-in {
  opacity: 0;
  transform: translateY(20px);
  transition: opacity 500ms ease-out, transform 500ms ease-out;
}

.fade-in.visible { opacity: 1; transform: translateY(0); }

/* === Sections === */
.section { padding: 5rem 0; }
.section-white { background: var(--white); }
.section-grey { background: var(--grey-100); }
.section-red { background: var(--red); color: var(--white); }

.section-title { font-size: 1.875rem; font-weight: 700; margin: 0 0 3rem; }
.section-white .section-title,
.section-grey .section-title { color: var(--grey-800); }

.lead { font-size: 1.25rem; color: var(--grey-600); margin-bottom: 2rem; }

.about-grid { display: flex; align-items: center; gap: 3rem; }
.about-image, .about-text { flex: 1; }
.about-image img { border-radius: 0.5rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
.about-text .section-title { margin-bottom: 1.5rem; }
.about-text p, .about-list { color: var(--grey-600); }
.about-list { list-style: disc inside; padding: 0; }

.card-grid { display: grid; gap: 2rem; }
.card-grid.three { grid-template-columns: repeat(3, 1fr); }
.card-grid.two { grid-template-columns: repeat(2, 1fr); }

.card {
  background: var(--white);
  padding: 1.5rem;
  border-radius: 0.5rem;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
  transition: box-shadow var(--transition-normal), opacity 500ms ease-out, transform 500ms ease-out;
}

.card:hover { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }
.card-icon { font-size: 2.25rem; margin-bottom: 1rem; }
.card-title { font-size: 1.25rem; font-weight: 600; margin: 0 0 1rem; color: var(--grey-800); }
.card p { color: var(--grey-600); }

.contact-card { text-align: center; }

.testimonial blockquote { margin: 0 0 1rem; font-style: italic; color: var(--grey-600); }
.testimonial-author { font-weight: 600; margin: 0; color: var(--grey-800); }
.testimonial-role { font-size: 0.875rem; margin: 0; }

/* === Impact Counter === */
.stats-row { display: flex; flex-wrap: wrap; justify-content: center; }

.stat {
  width: 25%;
  margin-bottom: 2rem;
  opacity: 0;
  transform: scale(0.5);
  transition: opacity 500ms ease-out, transform 500ms ease-out;
}

.stat.visible { opacity: 1; transform: scale(1); }
.stat-number { font-size: 3rem; font-weight: 700; margin-bottom: 0.5rem; }

/* === Gallery === */
.gallery-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }

.gallery-thumb {
  padding: 0;
  border: none;
  background: none;
  cursor: zoom-in;
  border-radius: 0.5rem;
  overflow: hidden;
  width: 100%;
}

.gallery-thumb img { width: 100%; aspect-ratio: 4 / 3; object-fit: cover; transition: transform var(--transition-normal); }
.gallery-thumb:hover img { transform: scale(1.05); }

.lightbox {
  position: fixed;
  inset: 0;
  z-index: 70;
  background: rgba(0, 0, 0, 0.85);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  cursor: zoom-out;
}

.lightbox img { max-height: 80vh; border-radius: 0.5rem; }
.lightbox-caption { color: var(--white); margin-top: 1rem; }
.lightbox-close { margin-top: 1rem; }

/* === Call to Action === */
.cta-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }

/* === Footer === */
.site-footer { background: var(--grey-800); color: var(--grey-100); padding: 3rem 0 1.5rem; }
.footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 2rem; }
.footer-title { margin-top: 0; color: var(--white); }
.footer-links, .footer-contact { display: flex; flex-direction: column; gap: 0.5rem; }
.footer-links h4, .footer-contact h4 { margin: 0 0 0.5rem; color: var(--white); }
.footer-links a:hover, .footer-contact a:hover { color: var(--red-tint); }
.footer-copy { text-align: center; font-size: 0.875rem; margin: 2rem 0 0; opacity: 0.7; }

/* === Reduced Motion === */
@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}

/* === Mobile (< 768px) === */
@media (max-width: 767px) {
  .desktop-nav,
  .header-actions { display: none; }

  .menu-icon { display: inline-flex; }

  .about-grid { flex-direction: column; }
  .card-grid.three,
  .card-grid.two,
  .gallery-grid,
  .footer-grid { grid-template-columns: 1fr; }

  .stat { width: 50%; }
}

@media (min-width: 768px) {
  .mobile-backdrop,
  .mobile-panel { display: none; }
}

@media (max-width: 480px) {
  .stat { width: 100%; }
  .gallery-grid { grid-template-columns: 1fr; }
}
"#;
