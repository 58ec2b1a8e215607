//! Alert report rendering.
//!
//! Builds the human-readable body mailed out when disks fail: one failure
//! notice per device, then a banner, then each device's full diagnostic
//! block followed by the same banner.

/// Delimiter line between report sections.
pub const BANNER: &str = "##########################################################################################################";

/// Render the alert body for a non-empty failure set.
///
/// `failed` and `details` are parallel: `details[i]` is the verbose
/// diagnostic block for `failed[i]`. Notices are one per line so multiple
/// failures stay readable; detail blocks are included verbatim.
#[must_use]
pub fn render(failed: &[String], details: &[String]) -> String {
    debug_assert_eq!(failed.len(), details.len());

    let mut body = String::new();
    for device in failed {
        body.push_str("The following disks have failed: ");
        body.push_str(device);
        body.push('\n');
    }
    body.push_str(BANNER);
    body.push('\n');
    for block in details {
        body.push_str(block);
        if !block.ends_with('\n') {
            body.push('\n');
        }
        body.push_str(BANNER);
        body.push('\n');
    }
    body
}
