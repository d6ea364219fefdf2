use papers_core::{ConfigError, ViewMode, ViewModeController};

#[test]
fn defaults_to_grid() {
    assert_eq!(ViewModeController::default().mode(), ViewMode::Grid);
}

#[test]
fn invalid_mode_keeps_previous() {
    let mut view = ViewModeController::new(ViewMode::Card);
    let error = view.set_mode("tiles").unwrap_err();
    assert_eq!(
        error,
        ConfigError::InvalidViewMode {
            value: "tiles".to_string()
        }
    );
    assert_eq!(view.mode(), ViewMode::Card);
}

#[test]
fn names_parse_case_insensitively() {
    let mut view = ViewModeController::default();
    assert_eq!(view.set_mode(" COMPACT ").unwrap(), ViewMode::Compact);
    assert_eq!(view.set_mode("card").unwrap(), ViewMode::Card);
}

#[test]
fn legacy_list_is_accepted_but_not_selectable() {
    let mut view = ViewModeController::default();
    assert_eq!(view.set_mode("list").unwrap(), ViewMode::List);
    assert!(view.mode().is_legacy());
    assert!(!ViewMode::SELECTABLE.contains(&ViewMode::List));
}

#[test]
fn shortcuts_follow_selectable_order() {
    let mut view = ViewModeController::default();
    for (key, expected) in ['1', '2', '3'].into_iter().zip(ViewMode::SELECTABLE) {
        assert_eq!(view.handle_shortcut(key), Some(expected));
        assert_eq!(view.mode(), expected);
    }
    assert_eq!(view.handle_shortcut('4'), None);
    assert_eq!(view.mode(), ViewMode::Compact);
}

#[test]
fn display_round_trips_through_from_str() {
    for mode in [ViewMode::Grid, ViewMode::Card, ViewMode::Compact, ViewMode::List] {
        assert_eq!(mode.to_string().parse::<ViewMode>().unwrap(), mode);
    }
}
