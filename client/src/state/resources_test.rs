use super::*;

fn page(rows: Vec<u32>, total: u64) -> ListPage<u32> {
    ListPage { rows, total }
}

#[test]
fn begin_keeps_rows_and_clears_error() {
    let mut state = ListState { rows: vec![1, 2], total: 2, loading: false, error: Some("x".to_owned()) };
    state.begin();
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.rows, vec![1, 2]);
}

#[test]
fn apply_success_replaces_rows() {
    let mut state = ListState::default();
    state.begin();
    state.apply(Ok(page(vec![3, 4, 5], 30)));
    assert_eq!(state.rows, vec![3, 4, 5]);
    assert_eq!(state.total, 30);
    assert!(!state.loading);
    assert!(!state.is_empty());
}

#[test]
fn apply_error_drops_stale_rows() {
    let mut state = ListState::default();
    state.apply(Ok(page(vec![1], 1)));
    state.begin();
    state.apply(Err(ApiError::Http { status: 500, message: "No se pudo listar".to_owned() }));
    assert!(state.rows.is_empty());
    assert_eq!(state.total, 0);
    assert_eq!(state.error.as_deref(), Some("No se pudo listar"));
    assert!(!state.is_empty());
}

#[test]
fn empty_only_after_successful_empty_load() {
    let mut state: ListState<u32> = ListState::default();
    state.begin();
    assert!(!state.is_empty());
    state.apply(Ok(ListPage::default()));
    assert!(state.is_empty());
}

#[test]
fn notice_reports_kind_and_text() {
    let notice = Notice::Failure("No se pudo aprobar.".to_owned());
    assert!(notice.is_failure());
    assert_eq!(notice.message(), "No se pudo aprobar.");
    assert!(!Notice::Success("ok".to_owned()).is_failure());
}
