use approx::assert_abs_diff_eq;
use riskaxis_rs::YAxisRenderer;
use riskaxis_rs::api::{LineStyle, YAxisConfig};
use riskaxis_rs::core::{ContentRect, LinearValueTransformer, RiskThresholds, ValueTransformer};
use riskaxis_rs::render::{Color, DashPattern, RenderFrame};

const CONTENT: ContentRect = ContentRect::new(40.0, 20.0, 640.0, 420.0);

fn renderer_with(
    config: YAxisConfig,
    domain_min: f64,
    domain_max: f64,
) -> YAxisRenderer<LinearValueTransformer> {
    let transformer =
        LinearValueTransformer::new(domain_min, domain_max, CONTENT).expect("transformer");
    YAxisRenderer::new(
        config,
        RiskThresholds::empty(),
        transformer,
        CONTENT,
        domain_min,
        domain_max,
    )
    .expect("renderer")
}

#[test]
fn one_grid_line_per_tick_across_the_content_width() {
    let config = YAxisConfig {
        draw_axis_line: false,
        ..YAxisConfig::default().with_entries(vec![0.0, 25.0, 50.0, 75.0, 100.0])
    };
    let renderer = renderer_with(config, 0.0, 100.0);

    let mut frame = RenderFrame::new(CONTENT);
    renderer.render_grid_and_bands(&mut frame).expect("render");

    assert_eq!(frame.lines.len(), 5);
    for line in &frame.lines {
        assert_abs_diff_eq!(line.x1, CONTENT.left, epsilon = 1e-9);
        assert_abs_diff_eq!(line.x2, CONTENT.right, epsilon = 1e-9);
        assert_abs_diff_eq!(line.y1, line.y2, epsilon = 1e-9);
    }
}

#[test]
fn grid_clip_rect_height_is_content_height_plus_line_width() {
    let config = YAxisConfig {
        draw_axis_line: false,
        grid_line: LineStyle::new(Color::rgb(0.8, 0.8, 0.8), 3.0),
        ..YAxisConfig::default().with_entries(vec![50.0])
    };
    let renderer = renderer_with(config, 0.0, 100.0);

    let clip = renderer.grid_clipping_rect();
    assert_abs_diff_eq!(clip.height(), CONTENT.height() + 3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(clip.top, CONTENT.top - 1.5, epsilon = 1e-9);
    assert_abs_diff_eq!(clip.bottom, CONTENT.bottom + 1.5, epsilon = 1e-9);

    let mut frame = RenderFrame::new(CONTENT);
    renderer.render_grid_and_bands(&mut frame).expect("render");
    assert_eq!(frame.lines[0].clip, Some(clip));
}

#[test]
fn zero_line_tracks_the_transform_across_pan_and_zoom() {
    let config = YAxisConfig {
        draw_grid_lines: false,
        draw_axis_line: false,
        ..YAxisConfig::default()
    }
    .with_zero_line(LineStyle::new(Color::rgb(0.3, 0.3, 0.3), 2.0));

    for (domain_min, domain_max) in [(-50.0, 50.0), (-10.0, 90.0), (-400.0, 1200.0)] {
        let renderer = renderer_with(config.clone(), domain_min, domain_max);
        let transformer =
            LinearValueTransformer::new(domain_min, domain_max, CONTENT).expect("transformer");

        let mut frame = RenderFrame::new(CONTENT);
        renderer.render_grid_and_bands(&mut frame).expect("render");

        assert_eq!(frame.lines.len(), 1);
        let expected_y = transformer.value_to_pixel_y(0.0).expect("zero pixel");
        assert_abs_diff_eq!(frame.lines[0].y1, expected_y, epsilon = 1e-9);
    }
}

#[test]
fn zero_line_clip_uses_its_own_width() {
    let config = YAxisConfig {
        draw_grid_lines: false,
        draw_axis_line: false,
        ..YAxisConfig::default()
    }
    .with_zero_line(LineStyle::new(Color::rgb(0.3, 0.3, 0.3), 4.0));
    let renderer = renderer_with(config, -50.0, 50.0);

    let mut frame = RenderFrame::new(CONTENT);
    renderer.render_grid_and_bands(&mut frame).expect("render");

    let clip = frame.lines[0].clip.expect("zero line clip");
    assert_abs_diff_eq!(clip.height(), CONTENT.height() + 4.0, epsilon = 1e-9);
}

#[test]
fn dash_pattern_is_carried_onto_grid_lines() {
    let config = YAxisConfig {
        draw_axis_line: false,
        grid_line: LineStyle::new(Color::rgb(0.8, 0.8, 0.8), 1.0)
            .with_dash(Some(DashPattern::new([4.0, 2.0], 0.0))),
        ..YAxisConfig::default().with_entries(vec![25.0, 75.0])
    };
    let renderer = renderer_with(config, 0.0, 100.0);

    let mut frame = RenderFrame::new(CONTENT);
    renderer.render_grid_and_bands(&mut frame).expect("render");

    for line in &frame.lines {
        let dash = line.dash.as_ref().expect("dash pattern");
        assert_eq!(dash.lengths.as_slice(), &[4.0, 2.0]);
    }
}

#[test]
fn axis_line_sits_on_the_configured_side() {
    let left = renderer_with(
        YAxisConfig {
            draw_grid_lines: false,
            ..YAxisConfig::default()
        },
        0.0,
        100.0,
    );
    let mut frame = RenderFrame::new(CONTENT);
    left.render_axis_line(&mut frame).expect("render");
    assert_eq!(frame.lines.len(), 1);
    assert_abs_diff_eq!(frame.lines[0].x1, CONTENT.left, epsilon = 1e-9);
    assert_abs_diff_eq!(frame.lines[0].y1, CONTENT.top, epsilon = 1e-9);
    assert_abs_diff_eq!(frame.lines[0].y2, CONTENT.bottom, epsilon = 1e-9);

    let right = renderer_with(
        YAxisConfig {
            draw_grid_lines: false,
            side: riskaxis_rs::core::AxisSide::Right,
            ..YAxisConfig::default()
        },
        0.0,
        100.0,
    );
    let mut frame = RenderFrame::new(CONTENT);
    right.render_axis_line(&mut frame).expect("render");
    assert_abs_diff_eq!(frame.lines[0].x1, CONTENT.right, epsilon = 1e-9);
}

#[test]
fn disabled_grid_and_zero_line_emit_nothing() {
    let config = YAxisConfig {
        draw_grid_lines: false,
        draw_axis_line: false,
        draw_zero_line: false,
        ..YAxisConfig::default().with_entries(vec![0.0, 50.0, 100.0])
    };
    let renderer = renderer_with(config, 0.0, 100.0);

    let mut frame = RenderFrame::new(CONTENT);
    renderer.render_grid_and_bands(&mut frame).expect("render");
    assert!(frame.is_empty());
}
