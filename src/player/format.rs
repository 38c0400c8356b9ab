/// Format a playback position in seconds as `MM:SS:CC` (minutes, seconds,
/// hundredths), each field zero-padded to two digits. Minutes are unbounded;
/// there is no hour rollover.
pub fn format_time(seconds: f64) -> String {
    // Round at the centisecond level first so values without an exact f64
    // representation (e.g. 3661.99) land on the expected hundredth.
    let total_centis = (seconds.max(0.0) * 100.0).round() as u64;
    let minutes = total_centis / 6000;
    let secs = (total_centis / 100) % 60;
    let centis = total_centis % 100;
    format!("{:02}:{:02}:{:02}", minutes, secs, centis)
}
