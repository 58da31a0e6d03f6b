//! Global CSS styles for Folio.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --ink: #0f1115;
  --ink-raised: #171a21;
  --ink-border: #262b36;

  --accent: #6c8cff;
  --accent-soft: rgba(108, 140, 255, 0.25);
  --coral: #ff7a6b;
  --mint: #3ddc97;

  --text-primary: #f3f4f7;
  --text-secondary: rgba(243, 244, 247, 0.72);
  --text-muted: rgba(243, 244, 247, 0.5);

  --success: #3ddc97;
  --warning: #ffb547;
  --danger: #ff4d6a;
  --info: #4fb3ff;

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-display: 'Space Grotesk', 'Inter', sans-serif;

  --radius: 14px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--ink);
  color: var(--text-primary);
  font-family: var(--font-sans);
  -webkit-font-smoothing: antialiased;
}

.visible { visibility: visible; }
.invisible { visibility: hidden; }

/* === Layout === */
.portfolio-root {
  position: relative;
  display: grid;
  grid-template-columns: 340px 1fr;
  min-height: 100vh;
  overflow: hidden;
}

.portfolio-nav {
  position: relative;
  z-index: 1;
  padding: 2rem 1.5rem;
  border-right: 1px solid var(--ink-border);
  background: rgba(15, 17, 21, 0.7);
  backdrop-filter: blur(12px);
}

.portfolio-main {
  position: relative;
  z-index: 1;
  padding: 3rem;
  overflow-y: auto;
}

.portfolio-section { margin-bottom: 3rem; }

.section-title {
  font-family: var(--font-display);
  font-size: 1.5rem;
  margin-bottom: 1.25rem;
}

.section-text { color: var(--text-secondary); }

@media (max-width: 991px) {
  .portfolio-root { grid-template-columns: 1fr; }
  .portfolio-nav { border-right: none; border-bottom: 1px solid var(--ink-border); }
  .portfolio-main { padding: 1.5rem; }
}

.language-switch {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1rem;
}

.gallery-list {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1rem;
}

.gallery-list-item {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1.25rem;
}

.gallery-list-count {
  color: var(--text-muted);
  font-size: 0.85rem;
}

/* === Buttons === */
.btn-primary, .btn-outline, .btn-ghost, .icon-btn {
  font: inherit;
  cursor: pointer;
  border-radius: 999px;
  transition: background var(--transition-fast), border-color var(--transition-fast), transform var(--transition-fast);
}

.btn-primary {
  padding: 0.5rem 1.1rem;
  border: 1px solid var(--accent);
  background: var(--accent);
  color: var(--ink);
}

.btn-outline {
  padding: 0.5rem 1.1rem;
  border: 1px solid var(--ink-border);
  background: var(--ink-raised);
  color: var(--text-primary);
  border-radius: var(--radius);
}

.btn-outline:hover { border-color: var(--accent); transform: translateY(-2px); }

.btn-ghost {
  padding: 0.5rem 0.9rem;
  border: 1px solid transparent;
  background: transparent;
  color: var(--text-secondary);
}

.btn-ghost:hover { color: var(--text-primary); }

.icon-btn {
  width: 2.25rem;
  height: 2.25rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  border: none;
  background: transparent;
  color: var(--text-secondary);
  font-size: 1.25rem;
}

.icon-btn:hover { background: var(--ink-border); color: var(--text-primary); }

/* === Profile Card === */
.nav-profile-card {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  text-align: center;
  gap: 1rem;
}

.nav-profile-card-avatar-container {
  width: 160px;
  height: 160px;
  border-radius: 50%;
  overflow: hidden;
  border: 3px solid var(--accent-soft);
  transition: width var(--transition-normal), height var(--transition-normal);
}

.nav-profile-card-shrink .nav-profile-card-avatar-container {
  width: 96px;
  height: 96px;
}

.nav-profile-card-avatar {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

/* One cycle matches the 15 s rotation interval */
.animated-avatar {
  animation: avatar-cycle 15s ease-in-out both;
}

@keyframes avatar-cycle {
  0%   { opacity: 0; transform: scale(1.08); }
  6%   { opacity: 1; transform: scale(1); }
  94%  { opacity: 1; transform: scale(1); }
  100% { opacity: 0; transform: scale(0.98); }
}

.nav-profile-card-name {
  font-family: var(--font-display);
  font-size: 1.6rem;
  font-weight: 600;
}

.nav-profile-card-name-with-audio-button {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
}

.nav-profile-card-role {
  min-height: 1.5em;
  color: var(--text-secondary);
}

.nav-profile-card-mobile-resume { margin-top: 0.5rem; }

.nav-profile-card-resume-btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border: 1px solid var(--ink-border);
  border-radius: 999px;
  background: transparent;
  color: var(--text-primary);
  font: inherit;
  cursor: pointer;
}

.nav-profile-card-resume-btn:hover { border-color: var(--accent); }

/* === Status Circle === */
.nav-profile-card-status-circle {
  position: absolute;
  top: 128px;
  left: calc(50% + 48px);
}

.nav-profile-card-shrink .nav-profile-card-status-circle {
  top: 74px;
  left: calc(50% + 28px);
}

.status-circle {
  position: relative;
  border: 3px solid var(--ink);
  border-radius: 50%;
  cursor: pointer;
}

.status-circle-default { width: 22px; height: 22px; }
.status-circle-small { width: 14px; height: 14px; }

.status-circle-success { background: var(--success); }
.status-circle-warning { background: var(--warning); }
.status-circle-danger { background: var(--danger); }
.status-circle-info { background: var(--info); }
.status-circle-neutral { background: var(--text-muted); }

.status-circle-pulse {
  position: absolute;
  inset: -3px;
  border-radius: 50%;
  border: 2px solid currentColor;
  opacity: 0;
  animation: status-pulse 2.4s ease-out infinite;
}

@keyframes status-pulse {
  0%   { transform: scale(1); opacity: 0.6; }
  100% { transform: scale(2); opacity: 0; }
}

/* === Text Typer === */
.text-typer-cursor {
  margin-left: 2px;
  animation: cursor-blink 1s steps(1) infinite;
}

@keyframes cursor-blink {
  50% { opacity: 0; }
}

.audio-btn.playing { color: var(--accent); }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(5, 6, 8, 0.85);
  animation: modal-in var(--transition-normal);
  outline: none;
}

.modal-overlay.modal-closing {
  animation: modal-out 200ms ease forwards;
}

@keyframes modal-in {
  from { opacity: 0; }
  to   { opacity: 1; }
}

@keyframes modal-out {
  to { opacity: 0; }
}

.modal-dialog {
  display: flex;
  flex-direction: column;
  max-width: 90vw;
  max-height: 90vh;
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-radius: var(--radius);
}

.modal-dialog.modal-fullscreen {
  width: 100vw;
  height: 100vh;
  max-width: none;
  max-height: none;
  border-radius: 0;
  border: none;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.5rem;
  border-bottom: 1px solid var(--ink-border);
}

.modal-title {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  font-family: var(--font-display);
  font-size: 1.2rem;
}

.modal-body {
  position: relative;
  flex: 1;
  overflow: auto;
}

/* === Gallery === */
.gallery-modal-body {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
}

.gallery-modal-vertical .gallery-modal-body {
  align-items: flex-start;
}

.gallery-strip {
  width: 100%;
  height: 100%;
  display: flex;
  flex-direction: column;
}

.gallery-strip .gallery-track {
  flex: 1;
  display: flex;
  gap: 15px;
  overflow-x: auto;
  scroll-snap-type: x mandatory;
  scrollbar-width: none;
}

.gallery-strip-slide {
  flex: 0 0 auto;
  height: 100%;
  scroll-snap-align: center;
  display: flex;
  align-items: center;
}

.gallery-strip-portrait .gallery-strip-slide { aspect-ratio: 9 / 16; }
.gallery-strip-landscape .gallery-strip-slide { aspect-ratio: 16 / 9; }
.gallery-strip-default .gallery-strip-slide { aspect-ratio: 1 / 1; }

.gallery-stack .gallery-track {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  width: 100%;
  max-width: 720px;
  margin: 0 auto;
}

.gallery-stack-item { width: 100%; }

.gallery-image {
  width: 100%;
  height: 100%;
  object-fit: contain;
  border-radius: calc(var(--radius) / 2);
  user-select: none;
}

.gallery-pagination {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  padding: 1rem 0 0;
}

.gallery-dot {
  width: 10px;
  height: 10px;
  border: none;
  border-radius: 50%;
  background: var(--ink-border);
  cursor: pointer;
}

.gallery-dot.active { background: var(--accent); }

.gallery-modal-spinner {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  pointer-events: none;
}

.loading-spinner {
  width: 36px;
  height: 36px;
  border: 3px solid var(--accent-soft);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Morphing Shapes === */
.morphing-shapes-wrapper {
  position: absolute;
  inset: 0;
  z-index: 0;
  overflow: hidden;
  pointer-events: none;
  transition: opacity var(--transition-normal);
}

.morphing-shapes-wrapper-hidden { opacity: 0; }

.morphing-shapes-container {
  position: relative;
  width: 100%;
  height: 100%;
  filter: blur(60px);
  opacity: 0.35;
}

.morphing-shape {
  position: absolute;
  width: 380px;
  height: 380px;
  border-radius: 40% 60% 60% 40% / 60% 30% 70% 40%;
  animation: morph 18s ease-in-out infinite, drift 30s ease-in-out infinite alternate;
}

.shape-1 { top: -80px; left: -60px; background: var(--accent); }
.shape-2 { top: 30%; right: -120px; background: var(--coral); animation-delay: -4s, -8s; }
.shape-3 { bottom: -140px; left: 25%; background: var(--mint); animation-delay: -9s, -15s; }
.shape-4 { top: 45%; left: 40%; width: 260px; height: 260px; background: var(--info); animation-delay: -13s, -21s; }

@keyframes morph {
  0%, 100% { border-radius: 40% 60% 60% 40% / 60% 30% 70% 40%; }
  33%      { border-radius: 70% 30% 50% 50% / 30% 60% 40% 70%; }
  66%      { border-radius: 30% 70% 40% 60% / 50% 40% 60% 50%; }
}

@keyframes drift {
  from { transform: translate(0, 0) rotate(0deg); }
  to   { transform: translate(60px, -40px) rotate(40deg); }
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1.25rem;
  bottom: 1.25rem;
  z-index: 200;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.toast {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  min-width: 280px;
  max-width: 360px;
  padding: 0.9rem 1rem;
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-left-width: 4px;
  border-radius: 10px;
  animation: modal-in var(--transition-normal);
}

.toast-info { border-left-color: var(--info); }
.toast-success { border-left-color: var(--success); }
.toast-error { border-left-color: var(--danger); }

.toast-body { flex: 1; }
.toast-title { display: block; margin-bottom: 0.2rem; }
.toast-message { color: var(--text-secondary); font-size: 0.9rem; }
"#;
