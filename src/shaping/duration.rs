/// Renders a length in seconds as whole minutes, rounding any partial minute up.
#[must_use]
pub fn seconds_to_minutes(seconds: i64) -> String {
    let minutes = seconds.div_euclid(60) + i64::from(seconds.rem_euclid(60) != 0);
    minutes.to_string()
}
