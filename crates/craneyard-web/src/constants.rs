// Page-contract constants the glue layer wires against

use craneyard_core::SLOT_COUNT;

/// Canvas ids, one per crane slot, in slot order.
pub const CANVAS_IDS: [&str; SLOT_COUNT] = [
    "craneCanvas1",
    "craneCanvas2",
    "craneCanvas3",
    "craneCanvas4",
    "craneCanvas5",
];

/// The model asset every slot fetches.
pub const MODEL_URL: &str = "assets/crane.obj";

// Layout settles shortly after the first paint; the deferred resize pass
// picks up the final container sizes.
pub const STARTUP_RESIZE_DELAY_MS: i32 = 100;
