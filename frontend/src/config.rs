/// Where the embedded slot build is served from.
pub const GAME_FRAME_URL: &str = "/static/slot/index.html";

/// Best-effort IP geolocation endpoint used once per session.
pub const GEO_LOOKUP_URL: &str = "https://ipapi.co/json/";
pub const GEO_LOOKUP_TIMEOUT_MS: u32 = 4_000;

/// Grace period between a balance update and the win-modal evaluation, so the
/// in-game win animation can finish first.
pub const WIN_EVAL_DELAY_MS: u32 = 500;

/// Resend schedule while the game frame is not ready; the last entry repeats.
pub const SYNC_BACKOFF_MS: &[u32] = &[500, 1_000, 2_000];

/// How long a promo activation message stays on screen.
pub const PROMO_MESSAGE_MS: u32 = 3_000;
