use super::*;

#[test]
fn toasts_expire_after_ttl() {
    let now = Instant::now();
    let mut toasts = Toasts::default();
    toasts.push(Notice::success("Field added"), now);
    toasts.push(Notice::warning("late"), now + Duration::from_secs(2));

    assert!(!toasts.prune(now + Duration::from_secs(1)));
    assert_eq!(toasts.len(), 2);

    assert!(toasts.prune(now + TOAST_TTL));
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts.iter().next().unwrap().notice.message, "late");

    assert!(toasts.prune(now + Duration::from_secs(10)));
    assert!(toasts.is_empty());
}

#[test]
fn oldest_toast_is_dropped_when_full() {
    let now = Instant::now();
    let mut toasts = Toasts::default();
    for i in 0..6 {
        toasts.push(Notice::info(format!("n{i}")), now);
    }
    let messages: Vec<_> = toasts.iter().map(|t| t.notice.message.as_str()).collect();
    assert_eq!(messages, ["n2", "n3", "n4", "n5"]);
}
