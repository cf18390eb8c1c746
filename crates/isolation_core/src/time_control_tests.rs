use super::*;
use std::thread;

#[test]
fn budget_clock_counts_down() {
    let clock = Clock::from_budget(Duration::from_millis(200));
    let first = clock.remaining_ms();
    assert!(first > 0.0);
    assert!(first <= 200.0);

    thread::sleep(Duration::from_millis(20));
    let second = clock.remaining_ms();
    assert!(second < first);
}

#[test]
fn budget_clock_goes_negative_after_deadline() {
    let clock = Clock::from_budget(Duration::from_millis(5));
    thread::sleep(Duration::from_millis(20));
    assert!(clock.remaining_ms() < 0.0);
}

#[test]
fn unlimited_clock_never_expires() {
    let clock = Clock::unlimited();
    assert_eq!(clock.remaining_ms(), f64::INFINITY);
}

#[test]
fn callback_clock_reports_what_the_caller_says() {
    let clock = Clock::new(|| 42.0);
    assert_eq!(clock.remaining_ms(), 42.0);
    assert_eq!(clock.remaining_ms(), 42.0);
}
