use screen_pen::draw::history::HistoryStack;

#[test]
fn capacity_three_after_four_appends() {
    let mut history = HistoryStack::new(3);
    for entry in ["s1", "s2", "s3", "s4"] {
        history.append(entry);
    }

    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), Some(2));
    assert_eq!(history.undo(), Some(&"s3"));
    assert_eq!(history.undo(), Some(&"s2"));
    assert_eq!(history.redo(), Some(&"s3"));
}

#[test]
fn undo_then_redo_returns_to_the_same_entry() {
    let mut history = HistoryStack::new(5);
    for entry in 1..=4 {
        history.append(entry);
    }
    for _ in 0..2 {
        history.undo();
    }
    let before = history.cursor();
    let undone = *history.undo().unwrap();
    let redone = *history.redo().unwrap();

    assert_eq!(undone, 1);
    assert_eq!(redone, 2);
    assert_eq!(history.cursor(), before);
}

#[test]
fn append_after_undo_truncates_then_appends() {
    let mut history = HistoryStack::new(8);
    for entry in 1..=5 {
        history.append(entry);
    }
    history.undo();
    history.undo();
    let cursor = history.cursor().unwrap();

    history.append(99);
    assert_eq!(history.len(), cursor + 2);
    assert_eq!(history.current(), Some(&99));
}
