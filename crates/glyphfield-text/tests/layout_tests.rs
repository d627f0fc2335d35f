//! Layout and text field tests against recording mocks.
//!
//! Fonts are laid out at nominal size 10 rendered at 10, so one font unit is
//! one pixel. Every glyph is one unit wide and one unit tall with a baseline
//! of 8, which puts an upper-left glyph's y at `height - 1`.

use std::sync::Arc;

use glyphfield_test_utils::{MockFontMetrics, MockQuad, QuadCall, RecordingContainer, RecordingQuadFactory};
use glyphfield_text::{
    Color, FaceMetrics, Horizontal, Size, SizeRange, TextAnchor, TextField, TextFieldConfig,
    TextLayoutEngine, TextLine, Vec2, Vertical,
};

const NOMINAL: f32 = 10.0;

fn fonts() -> MockFontMetrics {
    MockFontMetrics::uniform(1.0).with_face(FaceMetrics {
        baseline: 8.0,
        line_height: NOMINAL,
    })
}

fn config(text: &str) -> TextFieldConfig {
    TextFieldConfig::new(text)
        .font(MockFontMetrics::FAMILY)
        .nominal_size(NOMINAL)
        .rendered_size(NOMINAL)
}

fn layout(
    config: &TextFieldConfig,
    container: &mut RecordingContainer,
    fonts: &MockFontMetrics,
) -> Vec<TextLine<MockQuad>> {
    let mut factory = RecordingQuadFactory::new();
    TextLayoutEngine::new().layout(config, container, fonts, &mut factory)
}

fn first_position(line: &TextLine<MockQuad>) -> Option<Vec2> {
    line.quads.iter().flatten().next().map(|quad| quad.position)
}

#[test]
fn test_every_character_has_a_slot() {
    let fonts = fonts().without_glyphs(" ");
    let mut container = RecordingContainer::new(4.0, 100.0);
    let lines = layout(&config("ab cd ef\ngh"), &mut container, &fonts);

    assert!(lines.len() > 1);
    for line in &lines {
        assert_eq!(line.chars.len(), line.quads.len());
        for (ch, quad) in line.chars.iter().zip(&line.quads) {
            assert_eq!(*ch == ' ', quad.is_none(), "slot for {ch:?}");
        }
    }
    let indices: Vec<usize> = lines.iter().map(|line| line.index).collect();
    assert_eq!(indices, (0..lines.len()).collect::<Vec<_>>());
}

#[test]
fn test_missing_glyph_takes_fallback_advance() {
    let fonts = fonts().without_glyphs("?");
    let mut container = RecordingContainer::new(100.0, 100.0);
    let lines = layout(&config("a?b"), &mut container, &fonts);

    let xs: Vec<f32> = lines[0].quads.iter().flatten().map(|q| q.position.x).collect();
    assert_eq!(xs, [0.0, 6.0]);
    assert_eq!(lines[0].width, 7.0);
}

#[test]
fn test_wide_glyph_wraps_and_is_measured_once() {
    let fonts = fonts().with_advance('D', 4.0).with_glyph_height(3.0);
    let mut container = RecordingContainer::new(5.0, 100.0);
    let lines = layout(&config("x abcD e"), &mut container, &fonts);

    let texts: Vec<String> = lines.iter().map(TextLine::text).collect();
    assert_eq!(texts, ["x ", "abcD", " e"]);
    let widths: Vec<f32> = lines.iter().map(|line| line.width).collect();
    assert_eq!(widths, [2.0, 7.0, 2.0]);

    let wide = lines[1].quads[3].as_ref().unwrap();
    assert_eq!(wide.size, Vec2::new(4.0, 3.0));
    assert_eq!(wide.position.x, 3.0);
    // (8 - 3 - 0 - 8) + 100, one line advance down.
    assert_eq!(wide.position.y, 87.0);

    // One lookup per character while wrapping, one more while placing.
    assert_eq!(fonts.glyph_lookups(), 2 * 8);
}

#[test]
fn test_middle_center_two_lines() {
    let mut container = RecordingContainer::new(10.0, 40.0);
    let config = config("abcd\nabcdef").alignment(TextAnchor::MiddleCenter);
    let lines = layout(&config, &mut container, &fonts());

    assert_eq!(lines.len(), 2);
    // (10 - 4) / 2 and (10 - 6) / 2
    assert_eq!(first_position(&lines[0]).map(|p| p.x), Some(3.0));
    assert_eq!(first_position(&lines[1]).map(|p| p.x), Some(2.0));
    // A 20px block centred in 40px is pushed down by 10; lines are one
    // advance apart.
    assert_eq!(first_position(&lines[0]).map(|p| p.y), Some(29.0));
    assert_eq!(first_position(&lines[1]).map(|p| p.y), Some(19.0));
}

#[test]
fn test_all_anchors_single_glyph() {
    let fonts = fonts();
    for anchor in TextAnchor::ALL {
        let mut container = RecordingContainer::new(10.0, 30.0);
        let lines = layout(&config("a").alignment(anchor), &mut container, &fonts);
        let position = first_position(&lines[0]).unwrap();

        let x = match anchor.horizontal() {
            Horizontal::Left => 0.0,
            Horizontal::Center => 4.5,
            Horizontal::Right => 9.0,
        };
        let y = match anchor.vertical() {
            Vertical::Upper => 29.0,
            Vertical::Middle => 19.0,
            Vertical::Lower => 9.0,
        };
        assert_eq!(position, Vec2::new(x, y), "{anchor:?}");
    }
}

#[test]
fn test_line_spacing_separates_lines() {
    let mut container = RecordingContainer::new(100.0, 100.0);
    let config = config("a\nb").line_spacing(2.0);
    let lines = layout(&config, &mut container, &fonts());
    assert_eq!(first_position(&lines[0]).map(|p| p.y), Some(99.0));
    assert_eq!(first_position(&lines[1]).map(|p| p.y), Some(79.0));
}

#[test]
fn test_scale_applies_to_wrap_and_positions() {
    // Two pixels of font per rendered pixel.
    let config = config("abcd").nominal_size(20.0);
    let fonts = MockFontMetrics::uniform(2.0);
    let mut container = RecordingContainer::new(3.0, 100.0);
    let lines = layout(&config, &mut container, &fonts);

    let texts: Vec<String> = lines.iter().map(TextLine::text).collect();
    assert_eq!(texts, ["abc", "d"]);
    let xs: Vec<f32> = lines[0].quads.iter().flatten().map(|q| q.position.x).collect();
    assert_eq!(xs, [0.0, 1.0, 2.0]);
    assert_eq!(lines[0].quads[0].as_ref().map(|q| q.size), Some(Vec2::new(1.0, 0.5)));
}

#[test]
fn test_hidden_overflow_drops_lines() {
    let text = "a\nb\nc\nd\ne";
    let mut container = RecordingContainer::new(100.0, 25.0);
    assert_eq!(layout(&config(text), &mut container, &fonts()).len(), 2);

    let mut container = RecordingContainer::new(100.0, 25.0);
    let shown = config(text).hide_overflow(false);
    assert_eq!(layout(&shown, &mut container, &fonts()).len(), 5);
}

#[test]
fn test_no_resize_without_ranges() {
    let mut container = RecordingContainer::new(100.0, 100.0);
    layout(&config("abc"), &mut container, &fonts());
    assert!(container.resizes().is_empty());
}

#[test]
fn test_single_resize_per_layout() {
    let mut container = RecordingContainer::new(100.0, 100.0);
    let config = config("abc\nde")
        .width_range(SizeRange::new(0.0, 50.0))
        .height_range(SizeRange::new(0.0, 50.0))
        .padding(1.0);
    layout(&config, &mut container, &fonts());
    assert_eq!(container.resizes(), [Size::new(5.0, 22.0)]);
}

#[test]
fn test_ignored_resize_lays_out_against_actual_size() {
    let config = config("a").height_range(SizeRange::new(0.0, 100.0));

    let mut accepting = RecordingContainer::new(100.0, 50.0);
    let lines = layout(&config, &mut accepting, &fonts());
    assert_eq!(accepting.resizes(), [Size::new(100.0, 10.0)]);
    assert_eq!(first_position(&lines[0]).map(|p| p.y), Some(9.0));

    let mut ignoring = RecordingContainer::new(100.0, 50.0).ignoring_resizes();
    let lines = layout(&config, &mut ignoring, &fonts());
    assert_eq!(ignoring.resizes(), [Size::new(100.0, 10.0)]);
    assert_eq!(first_position(&lines[0]).map(|p| p.y), Some(49.0));
}

#[test]
fn test_field_releases_before_spawning() {
    let factory = RecordingQuadFactory::new();
    let log = factory.log();
    let mut field = TextField::from_config(
        config("abc"),
        RecordingContainer::new(100.0, 100.0),
        Arc::new(fonts()),
        factory,
    )
    .unwrap();
    assert_eq!(log.count_spawns(), 3);

    log.clear();
    field.set_text("xy");
    let calls = log.calls();
    assert_eq!(calls.len(), 5);
    assert!(calls[..3].iter().all(|call| matches!(call, QuadCall::Release { .. })));
    assert!(calls[3..].iter().all(|call| matches!(call, QuadCall::Spawn { .. })));
    assert_eq!(log.live_ids().len(), 2);
}

#[test]
fn test_field_unchanged_value_does_not_relayout() {
    let factory = RecordingQuadFactory::new();
    let log = factory.log();
    let mut field = TextField::from_config(
        config("abc"),
        RecordingContainer::new(100.0, 100.0),
        Arc::new(fonts()),
        factory,
    )
    .unwrap();

    log.clear();
    field.set_text("abc");
    field.set_alignment(TextAnchor::UpperLeft);
    field.set_line_spacing(1.0).unwrap();
    assert!(log.calls().is_empty());

    field.set_alignment(TextAnchor::LowerRight);
    assert_eq!(log.count_releases(), 3);
    assert_eq!(log.count_spawns(), 3);
}

#[test]
fn test_field_drop_releases_everything() {
    let factory = RecordingQuadFactory::new();
    let log = factory.log();
    let field = TextField::from_config(
        config("hello"),
        RecordingContainer::new(100.0, 100.0),
        Arc::new(fonts()),
        factory,
    )
    .unwrap();
    assert_eq!(log.live_ids().len(), 5);

    drop(field);
    assert!(log.live_ids().is_empty());
}

#[test]
fn test_field_style_applies_to_new_quads() {
    let mut field = TextField::from_config(
        config("ab"),
        RecordingContainer::new(100.0, 100.0),
        Arc::new(fonts()),
        RecordingQuadFactory::new(),
    )
    .unwrap();
    let red = Color::rgb(1.0, 0.0, 0.0);
    field.set_color(red);
    field.set_visible(false);
    assert!(field.quads().all(|quad| quad.color == red && !quad.visible));

    field.set_text("abcd");
    assert_eq!(field.glyph_count(), 4);
    assert!(field.quads().all(|quad| quad.color == red && !quad.visible));
}

#[test]
fn test_field_follows_external_resize() {
    let container = RecordingContainer::new(100.0, 100.0);
    let mut field = TextField::from_config(
        config("abcdef"),
        container,
        Arc::new(fonts()),
        RecordingQuadFactory::new(),
    )
    .unwrap();
    assert_eq!(field.line_count(), 1);

    field.resize_container(Size::new(3.0, 100.0));
    let texts: Vec<String> = field.lines().iter().map(TextLine::text).collect();
    assert_eq!(texts, ["abc", "def"]);
}

#[test]
fn test_field_rejects_invalid_config() {
    let result = TextField::from_config(
        config("abc").nominal_size(0.0),
        RecordingContainer::new(100.0, 100.0),
        Arc::new(fonts()),
        RecordingQuadFactory::new(),
    );
    assert!(result.is_err());
}
