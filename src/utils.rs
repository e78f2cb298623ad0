/// Format the countdown the way the timer widget shows it: minutes are
/// always zero (a round never runs longer than 15 seconds), seconds
/// zero-padded to two places.
pub fn format_time(seconds: u32) -> String {
    format!("00 : {:02}", seconds)
}
