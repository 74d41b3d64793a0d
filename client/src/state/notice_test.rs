use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.success("Product added");
    let b = state.error("Error deleting product");
    assert!(b > a);
    assert_eq!(state.notices.len(), 2);
    assert_eq!(state.latest().map(|n| n.kind), Some(NoticeKind::Error));
}

#[test]
fn dismiss_removes_only_that_notice() {
    let mut state = NoticeState::default();
    let a = state.success("one");
    let b = state.success("two");
    state.dismiss(a);
    assert_eq!(state.notices.iter().map(|n| n.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(999);
    assert_eq!(state.notices.len(), 1);
}

#[test]
fn oldest_notices_drop_past_the_cap() {
    let mut state = NoticeState::default();
    let ids: Vec<u64> = (0..MAX_NOTICES + 2).map(|i| state.error(format!("failure {i}"))).collect();
    assert_eq!(state.notices.len(), MAX_NOTICES);
    assert_eq!(state.notices.iter().map(|n| n.id).collect::<Vec<_>>(), ids[2..].to_vec());
    assert_eq!(state.latest().map(|n| n.message.as_str()), Some("failure 5"));
}

#[test]
fn errors_dismiss_later_than_successes() {
    assert_eq!(NoticeKind::Success.dismiss_after_ms(), SUCCESS_DISMISS_MS);
    assert!(NoticeKind::Error.dismiss_after_ms() > NoticeKind::Success.dismiss_after_ms());
}
