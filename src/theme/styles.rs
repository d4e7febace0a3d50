//! Global CSS styles for Masoori.
//!
//! Static styling only. Anything that depends on component props is built
//! inline by the component itself.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PLUM (Backgrounds, Overlays) */
  --plum-menu: #A37C9B;
  --plum-hover: #95648b;
  --plum-deep: #5E3A66;
  --plum-glass: rgba(77, 27, 69, 0.5);

  /* LILAC */
  --lilac-mist: #EAE2ED;

  /* GOLD */
  --gold-candle: #fae7a9;

  /* TEXT */
  --text-primary: #ffffff;

  /* Typography */
  --font-title: 'PyeongChangPeace', 'Brodies', Georgia, serif;
  --font-body: 'Pretendard', 'Apple SD Gothic Neo', sans-serif;
  --font-card: 'Museum', Georgia, serif;

  /* Glass bubble inset glow */
  --glass-glow:
    0px 5px 10px 0px rgba(255, 255, 255, 0.1) inset,
    5px 0px 10px 0px rgba(255, 255, 255, 0.1) inset,
    0px -5px 10px 0px rgba(255, 255, 255, 0.1) inset,
    -5px 0px 10px 0px rgba(255, 255, 255, 0.1) inset;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body, #main {
  height: 100%;
}

body {
  font-family: var(--font-body);
  color: var(--text-primary);
  background: #1b0f1f;
  -webkit-font-smoothing: antialiased;
}

/* === Tarot Card === */
.tarot-card-text {
  font-family: var(--font-card);
  text-align: center;
  margin-top: -48px;
}

/* === Hashtags === */
.hashtag-list {
  display: flex;
  flex-wrap: wrap;
  gap: 10px;
  width: 700px;
  min-height: 40px;
}

.hashtag {
  padding: 6px 16px;
  border-radius: 20px;
  background: var(--plum-glass);
  color: var(--text-primary);
  font-size: 18px;
}

/* === Text Bubbles === */
.text-bubble {
  color: var(--text-primary);
  font-size: 18px;
  line-height: 1.6;
  transition: background-color var(--transition-normal);
}

.text-bubble.hoverable:hover {
  background-color: var(--plum-hover) !important;
}

/* === Overlays === */
.overlay-backdrop {
  cursor: pointer;
}

/* === Alert Modal === */
.alert-modal-image {
  width: 160px;
  height: auto;
  margin: 12px 0;
}

/* === Ghost Modal === */
.ghost-modal {
  width: 480px;
  padding: 24px 32px 32px;
  border-radius: 20px;
  background: var(--lilac-mist);
  color: var(--plum-deep);
  text-align: center;
}

.ghost-modal-header {
  display: flex;
  justify-content: flex-end;
}

.ghost-modal-image {
  width: 140px;
  height: auto;
}

.ghost-modal-title {
  font-size: 24px;
  font-weight: 700;
  margin: 12px 0;
}

.ghost-modal-summary {
  font-size: 14px;
  word-break: break-all;
  white-space: pre-line;
  margin-bottom: 20px;
}

.ghost-modal-copy {
  padding: 10px 28px;
  border: none;
  border-radius: 14px;
  background: var(--plum-deep);
  color: var(--lilac-mist);
  font-size: 18px;
  cursor: pointer;
}

/* === Landing === */
.landing {
  background-image: url('/assets/img/LandingPage.jpg');
  background-size: cover;
  background-repeat: no-repeat;
  background-position: center center;
  display: flex;
  flex-direction: column;
  align-items: center;
  min-height: 100vh;
}

.landing-hero {
  height: 110vh;
  width: 75%;
}

.landing-logo {
  height: 85vh;
  width: 100%;
  object-fit: contain;
}

.landing-tagline {
  color: var(--gold-candle);
  text-shadow: 1px 1px 10px rgba(255, 255, 255, 0.7);
  font-family: var(--font-title);
  font-size: 32px;
  font-weight: 700;
  letter-spacing: 3.2px;
  text-align: center;
}

.landing-section {
  height: 110vh;
  width: 75%;
  display: flex;
  justify-content: center;
  flex-direction: column;
}

.landing-content {
  display: flex;
  justify-content: space-between;
  align-items: center;
  height: 70%;
}

.landing-content.art-left {
  flex-direction: row-reverse;
}

.landing-text {
  height: 100%;
  width: 55%;
  display: flex;
  justify-content: center;
  flex-direction: column;
}

.landing-art {
  height: 100%;
  width: 40%;
  background-position: center;
  background-repeat: no-repeat;
  background-size: contain;
}

.landing-title {
  margin-bottom: 20px;
  font-family: var(--font-title);
  font-size: 45px;
}

.landing-choices {
  display: flex;
  gap: 24px;
  justify-content: center;
  margin-top: 32px;
}

/* === Menu === */
.menu-page {
  background: var(--plum-menu);
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
}

.menu-title {
  background: url('/assets/img/menuTitle.png') no-repeat;
  background-size: contain;
  height: 300px;
  width: 550px;
  margin: 0 auto 40px;
}

.menu-item {
  padding: 10px;
  font-size: 24px;
  cursor: pointer;
  transition: background-color 0.3s ease;
  color: var(--text-primary);
  text-align: center;
}

.menu-item:hover {
  background-color: var(--plum-hover);
}

.profile-panel {
  width: 420px;
  padding: 32px;
  border-radius: 20px;
  background: var(--lilac-mist);
  color: var(--plum-deep);
}

.profile-panel h2 {
  font-family: var(--font-title);
  margin-bottom: 16px;
}

/* === Spend Pattern === */
.spend-page {
  position: fixed;
  inset: 0;
  background-image: url('/assets/img/background/silkBackground.jpg');
  background-size: cover;
}

.spend-content {
  display: flex;
  justify-content: center;
  align-items: center;
  height: 100%;
  width: 100%;
}

.spend-card {
  padding: 70px 55px;
}

.spend-details {
  padding: 0 0 0 55px;
  text-align: left;
}

.spend-title {
  font-size: 60px;
  font-family: 'Brodies', var(--font-title);
}

.spend-bubbles {
  display: flex;
  flex-direction: column;
  padding: 25px 0;
  gap: 10px;
}

.load-status {
  font-size: 14px;
  opacity: 0.7;
  min-height: 20px;
}

/* === Simple pages === */
.simple-page {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 24px;
  background: var(--plum-menu);
}

.simple-page h1 {
  font-family: var(--font-title);
  font-size: 48px;
}
"#;
