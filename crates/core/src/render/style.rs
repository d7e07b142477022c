use std::sync::OnceLock;

/// Stable identifier a collaborator checks before injecting the
/// stylesheet into its document, so repeated renders never duplicate it.
pub const STYLESHEET_ID: &str = "contribution-anim";

/// Fade-in keyframes every cell square animates with. Timing (delays,
/// easing per cell) is the collaborator's business.
const FADE_IN_KEYFRAMES: &str = "\
@keyframes fadeIn {
  from { opacity: 0; transform: scale(0.8); }
  to { opacity: 1; transform: scale(1); }
}
";

/// The one process-wide stylesheet registration.
#[derive(Debug)]
pub struct Stylesheet {
    pub id: &'static str,
    pub css: &'static str,
}

static STYLESHEET: OnceLock<Stylesheet> = OnceLock::new();

/// The registered stylesheet, created on first call and never torn down.
///
/// Concurrent or repeated render calls observe exactly one instance; all
/// writers would produce identical content anyway.
pub fn stylesheet() -> &'static Stylesheet {
    STYLESHEET.get_or_init(|| Stylesheet {
        id: STYLESHEET_ID,
        css: FADE_IN_KEYFRAMES,
    })
}
