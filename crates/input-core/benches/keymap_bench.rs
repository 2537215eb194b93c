//! Criterion benchmarks for the SDL translation tables.
//!
//! Measures the latency of all translation directions (key→scancode,
//! scancode→key, button→mask, mask→button, shape→id, id→shape).  The
//! forward key path runs on every keyboard state query, so it has to stay a
//! table lookup and nothing more.
//!
//! Run with:
//! ```bash
//! cargo bench --package input-core --bench keymap_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use input_core::sdlmap::cursor::SystemCursorId;
use input_core::{CodeTranslator, CursorShape, KeyCode, MouseButton, Scancode};

/// A slice of well-known key codes covering the most common keys, the
/// combined modifiers, and the sentinel.
const BENCH_KEYS: &[KeyCode] = &[
    KeyCode::KeyA,
    KeyCode::KeyZ,
    KeyCode::Enter,
    KeyCode::Escape,
    KeyCode::Backspace,
    KeyCode::Tab,
    KeyCode::Space,
    KeyCode::F1,
    KeyCode::F24,
    KeyCode::Shift,
    KeyCode::ControlLeft,
    KeyCode::AltRight,
    KeyCode::MetaLeft,
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::ArrowUp,
    KeyCode::ArrowDown,
    KeyCode::Digit1,
    KeyCode::Digit0,
    KeyCode::Invalid,
];

/// Scancode values covering mapped, unmapped, and out-of-table slots.
const BENCH_SCANCODES: &[u16] = &[4, 29, 40, 41, 44, 58, 115, 224, 231, 282, 0, 50, 511];

fn bench_key_to_scancode(c: &mut Criterion) {
    c.bench_function("key_to_scancode", |b| {
        b.iter(|| {
            for &key in BENCH_KEYS {
                black_box(CodeTranslator::key_to_scancode(black_box(key)));
            }
        })
    });
}

fn bench_scancode_to_key(c: &mut Criterion) {
    c.bench_function("scancode_to_key", |b| {
        b.iter(|| {
            for &raw in BENCH_SCANCODES {
                black_box(CodeTranslator::scancode_to_key(black_box(Scancode(raw))));
            }
        })
    });
}

fn bench_button_masks(c: &mut Criterion) {
    c.bench_function("button_to_mask_and_back", |b| {
        b.iter(|| {
            for button in MouseButton::ALL {
                let mask = CodeTranslator::button_to_mask(black_box(button));
                black_box(CodeTranslator::mask_to_button(black_box(mask)));
            }
        })
    });
}

fn bench_cursor_ids(c: &mut Criterion) {
    c.bench_function("shape_to_cursor_id_and_back", |b| {
        b.iter(|| {
            for shape in CursorShape::NATIVE {
                let id = CodeTranslator::shape_to_cursor_id(black_box(shape))
                    .unwrap_or(SystemCursorId::ARROW);
                black_box(CodeTranslator::cursor_id_to_shape(black_box(id)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_key_to_scancode,
    bench_scancode_to_key,
    bench_button_masks,
    bench_cursor_ids
);
criterion_main!(benches);
