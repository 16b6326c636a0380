use super::*;

// =============================================================
// Modifiers
// =============================================================

#[test]
fn default_modifiers_are_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift && !m.ctrl && !m.alt && !m.meta);
    assert!(!m.zoom());
}

#[test]
fn ctrl_or_meta_means_zoom() {
    assert!(Modifiers { ctrl: true, ..Modifiers::default() }.zoom());
    assert!(Modifiers { meta: true, ..Modifiers::default() }.zoom());
    assert!(!Modifiers { shift: true, alt: true, ..Modifiers::default() }.zoom());
}

// =============================================================
// Button / Buttons
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Some(Button::Primary));
    assert_eq!(Button::from_dom(1), Some(Button::Middle));
    assert_eq!(Button::from_dom(2), Some(Button::Secondary));
    assert_eq!(Button::from_dom(3), None);
    assert_eq!(Button::from_dom(-1), None);
}

#[test]
fn buttons_mask() {
    assert!(Buttons::NONE.is_empty());
    assert!(Buttons::default().is_empty());
    assert!(!Buttons::PRIMARY.is_empty());

    let both = Buttons(Buttons::PRIMARY.0 | Buttons::MIDDLE.0);
    assert!(both.contains(Buttons::PRIMARY));
    assert!(both.contains(Buttons::MIDDLE));
    assert!(!both.contains(Buttons::SECONDARY));
}

// =============================================================
// Key / InputState
// =============================================================

#[test]
fn escape_key() {
    assert!(Key("Escape".into()).is_escape());
    assert!(!Key("Esc".into()).is_escape());
    assert!(!Key("a".into()).is_escape());
}

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}
