//! Renderer property tests: frame geometry, palette membership, determinism,
//! and degenerate configurations.

use tui_donut::core::render;
use tui_donut::types::RenderConfig;

#[test]
fn frame_geometry_matches_config() {
    let cfg = RenderConfig::default();
    let text = render(&cfg, 0.3, 0.1).to_text();

    let lines: Vec<&str> = text.split('\n').collect();
    // split on the trailing newline leaves one empty remainder
    assert_eq!(lines.len(), cfg.height + 1);
    assert_eq!(lines[cfg.height], "");
    for line in &lines[..cfg.height] {
        assert_eq!(line.chars().count(), cfg.width);
    }
}

#[test]
fn output_uses_only_palette_and_background() {
    let cfg = RenderConfig::default();
    let frame = render(&cfg, 1.1, 2.3);

    for y in 0..cfg.height {
        for x in 0..cfg.width {
            let ch = frame.get(x, y).unwrap();
            assert!(
                ch == ' ' || cfg.shading.contains(&ch),
                "unexpected character {ch:?} at ({x}, {y})"
            );
        }
    }
}

#[test]
fn render_is_deterministic() {
    let cfg = RenderConfig::default();
    let a = render(&cfg, 0.123, 4.567).to_text();
    let b = render(&cfg, 0.123, 4.567).to_text();
    assert_eq!(a, b);
}

#[test]
fn single_char_palette_shades_flat() {
    let cfg = RenderConfig {
        shading: vec!['#'],
        ..RenderConfig::default()
    };
    let frame = render(&cfg, 0.5, 0.2);

    let mut visible = 0;
    for y in 0..cfg.height {
        for x in 0..cfg.width {
            match frame.get(x, y).unwrap() {
                ' ' => {}
                '#' => visible += 1,
                other => panic!("unexpected character {other:?}"),
            }
        }
    }
    assert!(visible > 0, "torus should be visible at default geometry");
}

#[test]
fn degenerate_zero_radii_collapse_to_center() {
    // Invalid per validate(), but render itself must stay total.
    let cfg = RenderConfig {
        r1: 0.0,
        r2: 0.0,
        ..RenderConfig::default()
    };
    let frame = render(&cfg, 0.0, 0.0);

    for y in 0..cfg.height {
        for x in 0..cfg.width {
            let ch = frame.get(x, y).unwrap();
            if ch != ' ' {
                // Every sample projects to the grid center.
                assert_eq!((x, y), (cfg.width / 2, cfg.height / 2));
            }
        }
    }
}

#[test]
fn extreme_configs_do_not_panic() {
    let cases = [
        RenderConfig {
            width: 1,
            height: 1,
            ..RenderConfig::default()
        },
        RenderConfig {
            k1: 1e12,
            ..RenderConfig::default()
        },
        RenderConfig {
            theta_step: 5.0,
            phi_step: 7.0,
            ..RenderConfig::default()
        },
        RenderConfig {
            shading: Vec::new(),
            ..RenderConfig::default()
        },
        RenderConfig {
            theta_step: -1.0,
            phi_step: 0.0,
            ..RenderConfig::default()
        },
    ];

    for cfg in cases {
        let frame = render(&cfg, 123.456, -789.0);
        assert_eq!(frame.width(), cfg.width);
        assert_eq!(frame.height(), cfg.height);
    }
}

#[test]
fn rotation_changes_image() {
    // Not a strict requirement, but a sanity check that the angles are
    // actually flowing through the rotation math.
    let cfg = RenderConfig::default();
    let still = render(&cfg, 0.0, 0.0).to_text();
    let turned = render(&cfg, 1.0, 0.5).to_text();
    assert_ne!(still, turned);
}
