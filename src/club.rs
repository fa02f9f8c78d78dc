/// Minimum age to get into the club
pub const ENTRY_AGE: i32 = 21;

pub const ENTRY_DENIED: &str = "You can not enter the club!";
pub const ENTRY_WELCOME: &str = "Welcome!";

pub fn check_entry(age: i32) -> &'static str {
    let message = if age < ENTRY_AGE {
        ENTRY_DENIED
    } else {
        ENTRY_WELCOME
    };
    log::debug!("entry check for age {age}: {message}");
    message
}
