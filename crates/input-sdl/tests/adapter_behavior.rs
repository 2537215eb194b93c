//! End-to-end adapter behavior against the mock backend.
//!
//! These tests exercise the full public surface: construction with the
//! capability probe, key and button polling, cursor position queries and
//! warps, and the cursor-shape cache life cycle.

use input_core::{CodeTranslator, CoordinateSpace, CursorShape, KeyCode, MouseButton, VideoDriver};
use input_sdl::backend::mock::MockInputBackend;
use input_sdl::backend::MouseSnapshot;
use input_sdl::{AdapterConfig, GlobalMousePolicy, InputAdapter, InputError, WindowHandle};

fn pressed(button: MouseButton) -> MouseSnapshot {
    MouseSnapshot {
        x: 0,
        y: 0,
        buttons: CodeTranslator::button_to_mask(button),
    }
}

#[test]
fn test_typing_session_reads_keys_through_the_abstract_codes() {
    // Arrange: user holds Ctrl+Shift+S (left control, right shift).
    let backend = MockInputBackend::new();
    for key in [KeyCode::ControlLeft, KeyCode::ShiftRight, KeyCode::KeyS] {
        backend.set_key_pressed(CodeTranslator::key_to_scancode(key), true);
    }
    let adapter = InputAdapter::with_defaults(backend);

    // Assert: sided, combined, and plain codes all agree.
    assert!(adapter.is_key_down(KeyCode::ControlLeft));
    assert!(adapter.is_key_down(KeyCode::Control));
    assert!(adapter.is_key_down(KeyCode::Shift));
    assert!(!adapter.is_key_down(KeyCode::ShiftLeft));
    assert!(adapter.is_key_down(KeyCode::KeyS));
    assert!(!adapter.is_key_down(KeyCode::KeyA));
}

#[test]
fn test_every_mouse_button_polls_through_its_mask() {
    let backend = MockInputBackend::new();
    let adapter = InputAdapter::with_defaults(backend);

    for button in MouseButton::ALL {
        adapter.backend().set_global_mouse_state(pressed(button));
        assert!(adapter.is_mouse_button_down(button), "{button:?}");
        for other in MouseButton::ALL {
            if other != button {
                assert!(!adapter.is_mouse_button_down(other), "{other:?} vs {button:?}");
            }
        }
    }
}

#[test]
fn test_capability_probe_picks_the_snapshot_source() {
    // A capable driver reads global state, an incapable one window state.
    let capable = InputAdapter::with_defaults(MockInputBackend::with_driver(VideoDriver::Windows));
    capable.backend().set_global_mouse_state(pressed(MouseButton::Left));
    assert!(capable.is_mouse_button_down(MouseButton::Left));

    let incapable = InputAdapter::with_defaults(MockInputBackend::with_driver(VideoDriver::Wayland));
    incapable.backend().set_global_mouse_state(pressed(MouseButton::Left));
    assert!(!incapable.is_mouse_button_down(MouseButton::Left));
    incapable.backend().set_mouse_state(pressed(MouseButton::Left));
    assert!(incapable.is_mouse_button_down(MouseButton::Left));
}

#[test]
fn test_never_policy_forces_window_state_on_a_capable_driver() {
    let backend = MockInputBackend::with_driver(VideoDriver::X11);
    backend.set_global_mouse_state(pressed(MouseButton::Middle));
    let config = AdapterConfig {
        global_mouse: GlobalMousePolicy::Never,
    };
    let adapter = InputAdapter::new(backend, &config);

    assert!(!adapter.is_mouse_button_down(MouseButton::Middle));
}

#[test]
fn test_window_and_screen_positions_are_independent() {
    let backend = MockInputBackend::new();
    backend.set_mouse_state(MouseSnapshot { x: 12, y: 34, buttons: 0 });
    backend.set_global_mouse_state(MouseSnapshot { x: 912, y: 534, buttons: 0 });
    let adapter = InputAdapter::with_defaults(backend);

    assert_eq!(adapter.cursor_position(CoordinateSpace::Window), (12, 34));
    assert_eq!(adapter.cursor_position(CoordinateSpace::Screen), (912, 534));
}

#[test]
fn test_warp_then_readback_through_the_mock() {
    let adapter = InputAdapter::with_defaults(MockInputBackend::new());

    adapter.set_cursor_position((640, 360), WindowHandle::FOCUSED);
    adapter.set_cursor_position((0, 0), WindowHandle::FOCUSED);

    let warps = adapter.backend().warps.lock().unwrap();
    assert_eq!(
        *warps,
        vec![
            (WindowHandle::FOCUSED, 640, 360),
            (WindowHandle::FOCUSED, 0, 0),
        ]
    );
}

#[test]
fn test_cursor_shape_life_cycle() {
    let mut adapter = InputAdapter::with_defaults(MockInputBackend::new());

    // First application creates, second reuses.
    adapter.set_cursor_shape(CursorShape::ResizeEw).unwrap();
    adapter.set_cursor_shape(CursorShape::ResizeEw).unwrap();
    assert_eq!(adapter.backend().created_cursor_count(), 1);

    // A different shape creates its own handle.
    adapter.set_cursor_shape(CursorShape::NotAllowed).unwrap();
    assert_eq!(adapter.backend().created_cursor_count(), 2);
    assert_eq!(adapter.applied_cursor_shape(), Some(CursorShape::NotAllowed));

    // Hiding keeps both the cache and the applied shape.
    adapter.set_cursor_shape(CursorShape::Hidden).unwrap();
    assert!(!adapter.backend().cursor_visible());
    assert_eq!(adapter.applied_cursor_shape(), Some(CursorShape::NotAllowed));

    // Re-applying a cached shape shows the cursor again without creating.
    adapter.set_cursor_shape(CursorShape::ResizeEw).unwrap();
    assert!(adapter.backend().cursor_visible());
    assert_eq!(adapter.backend().created_cursor_count(), 2);
}

#[test]
fn test_failed_creation_is_reported_and_retried() {
    let mut adapter = InputAdapter::with_defaults(MockInputBackend::new());
    adapter.backend().set_fail_cursor_creation(true);

    let err = adapter.set_cursor_shape(CursorShape::ResizeNwse).unwrap_err();
    let InputError::CursorCreation { shape, .. } = err;
    assert_eq!(shape, CursorShape::ResizeNwse);
    assert_eq!(adapter.applied_cursor_shape(), None);

    // Hidden still succeeds while creation is failing.
    adapter.set_cursor_shape(CursorShape::Hidden).unwrap();
    assert!(!adapter.backend().cursor_visible());

    adapter.backend().set_fail_cursor_creation(false);
    adapter.set_cursor_shape(CursorShape::ResizeNwse).unwrap();
    assert_eq!(adapter.applied_cursor_shape(), Some(CursorShape::ResizeNwse));
    assert!(adapter.backend().cursor_visible());
}

#[test]
fn test_show_cursor_reports_prior_state_across_toggles() {
    let mut adapter = InputAdapter::with_defaults(MockInputBackend::new());

    assert!(adapter.show_cursor(false));
    assert!(!adapter.show_cursor(false));
    assert!(!adapter.show_cursor(true));
    assert!(adapter.backend().cursor_visible());
}

#[test]
fn test_config_parsed_from_toml_drives_the_adapter() {
    let config = AdapterConfig::from_toml_str("global_mouse = \"never\"").unwrap();
    let backend = MockInputBackend::with_driver(VideoDriver::Cocoa);
    let adapter = InputAdapter::new(backend, &config);

    assert!(!adapter.uses_global_mouse());
}
