use super::*;
use content::NoticeKind;

fn saved(n: usize) -> Notice {
    Notice::new(NoticeKind::Saved, format!("n{n}"), "")
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(saved(0));
    let b = state.push(saved(1));
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn push_drops_oldest_beyond_cap() {
    let mut state = NoticeState::default();
    for n in 0..MAX_VISIBLE + 2 {
        state.push(saved(n));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(state.items[0].notice.title, "n2");
    assert_eq!(state.items.last().map(|t| t.notice.title.as_str()), Some("n4"));
}

#[test]
fn dismiss_reports_whether_toast_was_present() {
    let mut state = NoticeState::default();
    let id = state.push(saved(0));
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
    assert!(state.items.is_empty());
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NoticeState::default();
    let first = state.push(saved(0));
    state.dismiss(first);
    assert_ne!(state.push(saved(1)), first);
}
