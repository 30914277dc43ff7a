use erp_desk::window::{WindowId, WindowManager, WindowOptions};

fn open(wm: &mut WindowManager, title: &str) -> WindowId {
    wm.create_window(WindowOptions::new(title, "company-transaction"))
}

#[test]
fn ids_increase_and_are_never_reused() {
    let mut wm = WindowManager::new();
    let mut seen = Vec::new();
    for round in 0..5 {
        let id = open(&mut wm, "W");
        seen.push(id);
        if round % 2 == 0 {
            wm.close_window(id);
        }
    }
    assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(wm.state().next_window_id(), WindowId::new(6));
}

#[test]
fn new_windows_are_active_and_on_top() {
    let mut wm = WindowManager::new();
    for title in ["A", "B", "C", "D"] {
        let id = open(&mut wm, title);
        assert_eq!(wm.active_window_id(), Some(id));
        let top = wm.window(id).unwrap().z_index();
        assert!(
            wm.windows()
                .iter()
                .filter(|w| w.id() != id)
                .all(|w| w.z_index() < top)
        );
    }
}

#[test]
fn closing_the_active_window_activates_the_last_created() {
    let mut wm = WindowManager::new();
    let a = open(&mut wm, "A");
    let b = open(&mut wm, "B");
    let c = open(&mut wm, "C");
    wm.set_active_window(a);
    wm.close_window(a);
    assert_eq!(wm.active_window_id(), Some(c));

    wm.set_active_window(b);
    wm.close_window(c);
    // Closing a background window leaves focus alone.
    assert_eq!(wm.active_window_id(), Some(b));

    wm.close_window(b);
    assert_eq!(wm.active_window_id(), None);
}

#[test]
fn closing_an_unknown_id_changes_nothing() {
    let mut wm = WindowManager::new();
    open(&mut wm, "A");
    let b = open(&mut wm, "B");
    let before = wm.state().clone();
    wm.close_window(WindowId::new(42));
    assert_eq!(wm.windows(), before.windows());
    assert_eq!(wm.active_window_id(), Some(b));
    assert_eq!(wm.state().next_window_id(), before.next_window_id());
    assert_eq!(wm.revision(), before.revision());
}

#[test]
fn minimized_windows_are_never_maximized() {
    let mut wm = WindowManager::new();
    let a = open(&mut wm, "A");
    wm.maximize_window(a);
    wm.minimize_window(a);
    let record = wm.window(a).unwrap();
    assert!(record.is_minimized());
    assert!(!record.is_maximized());

    wm.maximize_window(a);
    let record = wm.window(a).unwrap();
    assert!(record.is_maximized());
    assert!(!record.is_minimized());
}

#[test]
fn focus_scenario_with_two_windows() {
    let mut wm = WindowManager::new();
    let a = open(&mut wm, "A");
    let b = open(&mut wm, "B");
    assert_eq!(wm.active_window_id(), Some(b));
    assert!(wm.window(b).unwrap().z_index() > wm.window(a).unwrap().z_index());

    let b_before = wm.window(b).unwrap().rect();
    wm.set_active_window(a);
    assert!(wm.window(a).unwrap().z_index() > wm.window(b).unwrap().z_index());
    assert_eq!(wm.window(b).unwrap().rect(), b_before);
    assert!(!wm.window(b).unwrap().is_minimized());

    wm.minimize_window(a);
    assert_eq!(wm.active_window_id(), Some(b));
    assert_eq!(wm.focused_window(), Some(b));

    wm.close_window(b);
    // A is the only window left but it is minimized, so nothing is
    // visually active. The stored id still names it.
    assert_eq!(wm.focused_window(), None);
    assert_eq!(wm.active_window_id(), Some(a));
    assert!(wm.window(a).unwrap().is_minimized());
}
