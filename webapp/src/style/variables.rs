// the demo is always dark, there is no light theme to switch to
pub const CSS_VARIABLES: &str = r#"
:root {
  color-scheme: dark;

  /* Color System */
  --primary: #3B82F6;
  --primary-light: #60A5FA;
  --primary-dark: #2563EB;
  --success: #22C55E;
  --error: #EF4444;
  --warning: #F59E0B;

  /* Neutrals */
  --neutral-100: #F4F4F5;
  --neutral-300: #D4D4D8;
  --neutral-400: #A1A1AA;
  --neutral-500: #71717A;
  --neutral-700: #3F3F46;
  --neutral-800: #27272A;
  --neutral-900: #18181B;
  --neutral-950: #09090B;

  /* Background and Surface Colors */
  --background: #000000;
  --surface: var(--neutral-900);
  --surface-raised: var(--neutral-800);

  /* Text Colors */
  --text-primary: var(--neutral-100);
  --text-secondary: var(--neutral-400);
  --text-tertiary: var(--neutral-500);

  /* Border Colors */
  --border: var(--neutral-700);

  /* Layout */
  --header-height: 60px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-xl: 12px;
  --radius-2xl: 16px;
  --radius-full: 9999px;

  /* Animation */
  --transition-fast: 150ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
